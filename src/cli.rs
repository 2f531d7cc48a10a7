// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The flags mirror the classic single-dash tool this replaces:
//   --url, --output, --robots, --sitemap, --links
//
// --url and --output are Option<String> rather than required arguments.
// When they are missing we print our own message plus the help text and
// exit normally, instead of letting clap exit with an error code.
// =============================================================================

use clap::{ArgAction, CommandFactory, Parser};

#[derive(Parser, Debug, Default)]
#[command(
    name = "linkg",
    version,
    about = "Harvest URLs from a website's robots.txt, sitemap.xml and HTML links",
    long_about = "linkg fetches robots.txt, sitemap.xml and/or the page itself from a single \
                  website and writes the URLs it finds to <output>_robots.txt, \
                  <output>_sitemap.txt and <output>_links.txt."
)]
pub struct Cli {
    /// Website URL (e.g., https://example.com)
    ///
    /// Used verbatim: no trailing slash is added or stripped
    #[arg(long)]
    pub url: Option<String>,

    /// Output file name prefix
    #[arg(long)]
    pub output: Option<String>,

    /// Extract URLs from robots.txt
    #[arg(long)]
    pub robots: bool,

    /// Extract URLs from sitemap.xml
    #[arg(long)]
    pub sitemap: bool,

    /// Extract all links from the webpage
    #[arg(long)]
    pub links: bool,

    /// Exit with code 1 if any extractor fails
    #[arg(long)]
    pub strict: bool,

    /// Don't print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Prints clap's generated help text to stdout
pub fn print_usage() {
    let mut command = Cli::command();
    if let Err(e) = command.print_help() {
        log::warn!("could not print usage: {}", e);
    }
    println!();
}
