// src/config.rs
// =============================================================================
// The run configuration, built once from the command line and then only read.
//
// Every extractor gets a shared reference (Arc<Config>) to the same value,
// so there is no global state and nothing to lock.
// =============================================================================

use std::fmt;
use std::path::PathBuf;

use crate::cli::Cli;

/// Which resource an extractor reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    Robots,
    Sitemap,
    Links,
}

impl ExtractorKind {
    /// The URL fetched for this extractor. Plain concatenation, no normalization.
    pub fn resource_url(&self, base_url: &str) -> String {
        match self {
            ExtractorKind::Robots => format!("{}/robots.txt", base_url),
            ExtractorKind::Sitemap => format!("{}/sitemap.xml", base_url),
            ExtractorKind::Links => base_url.to_string(),
        }
    }

    /// Suffix appended to the output prefix
    pub fn file_suffix(&self) -> &'static str {
        match self {
            ExtractorKind::Robots => "_robots.txt",
            ExtractorKind::Sitemap => "_sitemap.txt",
            ExtractorKind::Links => "_links.txt",
        }
    }

    /// Name of the fetched resource, used in diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            ExtractorKind::Robots => "robots.txt",
            ExtractorKind::Sitemap => "sitemap.xml",
            ExtractorKind::Links => "page",
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtractorKind::Robots => "robots",
            ExtractorKind::Sitemap => "sitemap",
            ExtractorKind::Links => "links",
        };
        f.write_str(name)
    }
}

/// The site to harvest and where to put the results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub url: String,
    pub prefix: String,
}

impl Target {
    pub fn new(url: impl Into<String>, prefix: impl Into<String>) -> Self {
        Target {
            url: url.into(),
            prefix: prefix.into(),
        }
    }

    /// `<prefix>_robots.txt`, `<prefix>_sitemap.txt` or `<prefix>_links.txt`
    pub fn output_path(&self, kind: ExtractorKind) -> PathBuf {
        PathBuf::from(format!("{}{}", self.prefix, kind.file_suffix()))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub target: Target,
    /// Enabled extractors, always in robots, sitemap, links order
    pub extractors: Vec<ExtractorKind>,
    pub strict: bool,
    pub verbosity: u8,
}

/// Why a command line can't be turned into a runnable Config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    MissingTarget,
    NoExtractor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingTarget => {
                f.write_str("Website URL and output file name prefix are required.")
            }
            ConfigError::NoExtractor => f.write_str(
                "At least one of --robots, --sitemap, or --links options must be specified.",
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        // An empty string counts as missing
        let url = cli.url.as_deref().filter(|s| !s.is_empty());
        let output = cli.output.as_deref().filter(|s| !s.is_empty());

        let (url, output) = match (url, output) {
            (Some(url), Some(output)) => (url, output),
            _ => return Err(ConfigError::MissingTarget),
        };

        let extractors: Vec<ExtractorKind> = [
            (cli.robots, ExtractorKind::Robots),
            (cli.sitemap, ExtractorKind::Sitemap),
            (cli.links, ExtractorKind::Links),
        ]
        .into_iter()
        .filter_map(|(enabled, kind)| enabled.then_some(kind))
        .collect();

        if extractors.is_empty() {
            return Err(ConfigError::NoExtractor);
        }

        Ok(Config {
            target: Target::new(url, output),
            extractors,
            strict: cli.strict,
            verbosity: cli.verbose,
        })
    }
}
