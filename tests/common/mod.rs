#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the torify-site binary.
#[macro_export]
macro_rules! torify_site {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("torify-site"))
    };
}

/// A temporary working directory holding a `public/` site tree.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fs::create_dir_all(fixture.site()).expect("Failed to create site directory");
        fixture
    }

    /// Creates a file relative to the working directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file inside the site tree.
    pub fn create_page(&self, relative_path: &str, content: &str) {
        self.create_file(&format!("public/{relative_path}"), content);
    }

    pub fn read_page(&self, relative_path: &str) -> String {
        fs::read_to_string(self.site().join(relative_path)).expect("Failed to read file")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn site(&self) -> PathBuf {
        self.dir.path().join("public")
    }

    /// Writes the example.com mapping to `onions.json`.
    pub fn create_onion_map(&self) {
        self.create_file("onions.json", ONION_MAP);
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".torify-site.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const ONION_MAP: &str = r#"{ "example.com": "http://exampleonion.onion" }"#;

pub const LINKED_PAGE: &str =
    "<html><body><a href=\"http://example.com\">Example</a></body></html>";

pub const FIXED_PAGE: &str =
    "<html><body><a href=\"http://exampleonion.onion\">Example</a></body></html>";

pub const ROBOTS: &str = "User-agent: *\nSitemap: http://example.com/sitemap.xml\n";

pub const A_HREF_MESSAGE: &str =
    "Using clearnet domain http://example.com instead of onion service http://exampleonion.onion.";
