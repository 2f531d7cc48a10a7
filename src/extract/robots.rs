// src/extract/robots.rs
// =============================================================================
// Pulls Disallow paths out of robots.txt.
//
// This is a plain pattern match over the raw bytes, not a robots.txt parser:
// - "Disallow: " is matched case-sensitively, anywhere in a line
// - everything after it up to the end of the line is the path
// - the path is appended to the base URL as-is, byte for byte
// - user-agent groups, Allow lines, comments etc. are not interpreted
//
// Matching on bytes keeps paths that aren't valid UTF-8 exactly as the
// server sent them.
// =============================================================================

use lazy_static::lazy_static;
use regex::bytes::Regex;

/// `.` doesn't match '\n', so the capture stops at the end of the line
const DISALLOW_REGEX: &str = r"Disallow: (.+)";

lazy_static! {
    /// `DISALLOW_REGEX` as a regex::bytes::Regex
    static ref DISALLOW: Regex = Regex::new(DISALLOW_REGEX).unwrap();
}

/// Returns `<base_url><path>` for every Disallow directive, in file order.
/// Repeated rules are kept.
pub fn extract_disallowed(base_url: &str, robots_txt: &[u8]) -> Vec<Vec<u8>> {
    DISALLOW
        .captures_iter(robots_txt)
        .filter_map(|caps| caps.get(1))
        .map(|path| {
            let mut url = Vec::with_capacity(base_url.len() + path.len());
            url.extend_from_slice(base_url.as_bytes());
            url.extend_from_slice(path.as_bytes());
            url
        })
        .collect()
}
