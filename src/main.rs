use clap::Parser;

use torify_site::cli::Cli;
use torify_site::commands::{run_check, run_list_rules};
use torify_site::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = if cli.list_rules {
        run_list_rules(&cli)
    } else {
        run_check(&cli)
    };

    std::process::exit(exit_code);
}
