// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Print the banner and parse command-line arguments using clap
// 2. Build an immutable Config (or print usage and stop)
// 3. Run the selected extractors concurrently and wait for all of them
// 4. Exit with 0, unless --strict was given and an extractor failed (1)
//    or something went wrong before dispatch (2)
// =============================================================================

mod cli;
mod config;
mod dispatch;
mod extract;
mod logging;

use std::sync::Arc;

use clap::Parser;
use cli::Cli;
use config::Config;

const BANNER: &str = r"
     _       ___   _   _   _  __   ____
    | |     |_ _| | \ | | | |/ /  / ___|
    | |      | |  |  \| | | ' /  | |  _
    | |___   | |  | |\  | | . \  | |_| |
    |_____| |___| |_| \_| |_|\_\  \____|
";

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    if !cli.no_banner {
        println!("{}", BANNER);
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            // Not an error exit: print what's missing plus the help text
            println!("{}", e);
            cli::print_usage();
            return Ok(0);
        }
    };

    logging::initialize(config.verbosity);
    log::debug!("{:?}", config);

    // The runtime is only built once there is something to run
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let strict = config.strict;
    let outcomes = runtime.block_on(dispatch::run_all(Arc::new(config)));

    Ok(dispatch::exit_code(&outcomes, strict))
}
