// src/extract/mod.rs
// =============================================================================
// This module contains the three extractors and the code they share.
//
// Submodules:
// - http: Fetches a resource, accepting only HTTP 200
// - robots: Disallow directives from robots.txt
// - sitemap: <loc> entries from sitemap.xml
// - html: anchor hrefs from the page itself
// - output: writes one entry per line to <prefix>_<kind>.txt
//
// Every extractor runs the same pipeline:
//   fetch -> parse (all in memory) -> write the output file
// A failure at any step stops that extractor before anything is written, so
// there is never a half-written output file.
// =============================================================================

mod html;
mod http;
mod output;
mod robots;
mod sitemap;

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{ExtractorKind, Target};

pub use html::extract_anchor_hrefs;
pub use http::{build_client, fetch, FetchError};
pub use output::write_lines;
pub use robots::extract_disallowed;
pub use sitemap::extract_locations;

/// What a successful extractor produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub kind: ExtractorKind,
    pub path: PathBuf,
    pub count: usize,
}

impl fmt::Display for Extraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ExtractorKind::Links => {
                write!(f, "Extracted links from page saved in {}", self.path.display())
            }
            kind => write!(
                f,
                "Extracted URLs from {} saved in {}",
                kind.label(),
                self.path.display()
            ),
        }
    }
}

/// Runs one extractor from fetch to output file.
///
/// Errors carry a one-line context naming the URL or file that failed.
pub async fn run_extractor(kind: ExtractorKind, target: &Target) -> Result<Extraction> {
    let client = build_client()?;
    let url = kind.resource_url(&target.url);

    let body = fetch(&client, &url)
        .await
        .with_context(|| format!("Failed to retrieve {} from {}", kind.label(), target.url))?;

    let entries = parse_body(kind, &target.url, &body)
        .with_context(|| format!("Error parsing {} from {}", kind.label(), url))?;
    log::debug!("{} extractor found {} entries", kind, entries.len());

    let path = target.output_path(kind);
    write_lines(&path, &entries).await?;

    Ok(Extraction {
        kind,
        path,
        count: entries.len(),
    })
}

/// Format-specific parsing step. Only the sitemap can fail here.
///
/// Entries come back as bytes so robots.txt paths are written exactly as served.
fn parse_body(kind: ExtractorKind, base_url: &str, body: &[u8]) -> Result<Vec<Vec<u8>>> {
    let entries = match kind {
        ExtractorKind::Robots => return Ok(extract_disallowed(base_url, body)),
        ExtractorKind::Sitemap => extract_locations(body)?,
        ExtractorKind::Links => extract_anchor_hrefs(&String::from_utf8_lossy(body)),
    };
    Ok(entries.into_iter().map(String::into_bytes).collect())
}
