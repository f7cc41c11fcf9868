mod known_locations;
mod loader;
mod model;
mod options;

pub use known_locations::KnownOnionLocations;
pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub use model::{Config, FetchConfig};
pub use options::RunOptions;
