// src/extract/sitemap.rs
// =============================================================================
// Reads <loc> entries out of a sitemap.xml.
//
//   <urlset>
//     <url><loc>https://example.com/</loc><lastmod>...</lastmod></url>
//     ...
//   </urlset>
//
// The document is read event by event with quick-xml, tracking element depth:
// - depth 1 is the root (its name isn't checked)
// - depth 2 <url> elements each produce one entry
// - depth 3 <loc> text is that entry; a later <loc> in the same <url> wins
// Everything else (lastmod, priority, sitemap index entries) is skipped.
// <loc> text is kept exactly as written, whitespace included.
// Reading stops at the end of the root element.
// =============================================================================

use anyhow::{bail, Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

const URL_DEPTH: usize = 2;
const LOC_DEPTH: usize = 3;

/// Parses a sitemap body and returns every location in document order.
/// Malformed XML is an error.
pub fn extract_locations(body: &[u8]) -> Result<Vec<String>> {
    let xml = std::str::from_utf8(body).context("sitemap is not valid UTF-8")?;

    let mut reader = Reader::from_str(xml);
    let mut locations = Vec::new();

    let mut depth = 0usize;
    let mut seen_root = false;
    // Some(..) while inside a <url>; holds the last <loc> seen so far
    let mut current_url: Option<String> = None;
    // Some(..) while inside a <loc> of the current <url>
    let mut current_loc: Option<String> = None;

    loop {
        match reader.read_event().context("malformed sitemap XML")? {
            Event::Start(e) => {
                depth += 1;
                seen_root = true;
                let name = e.local_name();
                match (depth, name.as_ref()) {
                    (URL_DEPTH, b"url") => current_url = Some(String::new()),
                    (LOC_DEPTH, b"loc") if current_url.is_some() => {
                        current_loc = Some(String::new())
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                if depth == 0 {
                    // <urlset/>: an empty document
                    seen_root = true;
                    break;
                }
                let name = e.local_name();
                match (depth + 1, name.as_ref()) {
                    (URL_DEPTH, b"url") => locations.push(String::new()),
                    (LOC_DEPTH, b"loc") if current_url.is_some() => {
                        current_url = Some(String::new())
                    }
                    _ => {}
                }
            }
            Event::Text(e) if depth == LOC_DEPTH => {
                if let Some(loc) = current_loc.as_mut() {
                    loc.push_str(&e.unescape().context("malformed sitemap XML")?);
                }
            }
            Event::CData(e) if depth == LOC_DEPTH => {
                if let Some(loc) = current_loc.as_mut() {
                    let inner = e.into_inner();
                    loc.push_str(std::str::from_utf8(&inner).context("malformed sitemap XML")?);
                }
            }
            Event::End(_) => {
                match depth {
                    LOC_DEPTH => {
                        if let Some(loc) = current_loc.take() {
                            current_url = Some(loc);
                        }
                    }
                    URL_DEPTH => {
                        if let Some(loc) = current_url.take() {
                            locations.push(loc);
                        }
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            Event::Eof => {
                if !seen_root {
                    bail!("malformed sitemap XML: no root element");
                }
                if depth > 0 {
                    bail!("malformed sitemap XML: unexpected end of document");
                }
                break;
            }
            _ => {}
        }
    }

    Ok(locations)
}
