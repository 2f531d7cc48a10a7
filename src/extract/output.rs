// src/extract/output.rs
// Writes an extracted list to its output file, one entry per line.
// Entries are raw bytes, so nothing is re-encoded on the way out.

use std::path::Path;

use anyhow::{Context, Result};

/// Joins entries into file contents. Every line, including the last, ends in '\n'.
fn render<L: AsRef<[u8]>>(lines: &[L]) -> Vec<u8> {
    let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut contents = Vec::with_capacity(capacity);
    for line in lines {
        contents.extend_from_slice(line.as_ref());
        contents.push(b'\n');
    }
    contents
}

/// Creates (or truncates) `path` and writes `lines` to it in one go.
/// An empty list still creates an empty file.
pub async fn write_lines<L: AsRef<[u8]>>(path: &Path, lines: &[L]) -> Result<()> {
    tokio::fs::write(path, render(lines))
        .await
        .with_context(|| format!("Error creating output file {}", path.display()))?;

    log::info!("wrote {} line(s) to {}", lines.len(), path.display());
    Ok(())
}
