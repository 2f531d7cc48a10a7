// src/extract/html.rs
// =============================================================================
// This module extracts anchor hrefs from an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM tree
// - Is built on html5ever, so broken markup is repaired rather than rejected
//
// Unlike a CSS selector query, we walk the tree ourselves so the output order
// is exactly a pre-order depth-first traversal:
//   1. emit the current element's href attributes (if it's an <a>)
//   2. recurse into each child, left to right
//
// Values are emitted literally. Relative links stay relative, fragments and
// empty hrefs are kept, and nothing is deduplicated.
// =============================================================================

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

/// Returns the href of every <a> element in document pre-order,
/// including anything in <head> and inside <template> contents.
pub fn extract_anchor_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut hrefs = Vec::new();
    collect_hrefs(document.tree.root(), &mut hrefs);
    hrefs
}

fn collect_hrefs(node: NodeRef<'_, Node>, hrefs: &mut Vec<String>) {
    if let Some(element) = node.value().as_element() {
        if element.name() == "a" {
            for (name, value) in element.attrs() {
                if name == "href" {
                    hrefs.push(value.to_string());
                }
            }
        }
    }

    // Every node kind is visited: <template> contents hang off a fragment node
    for child in node.children() {
        collect_hrefs(child, hrefs);
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why recursion instead of document.select("a[href]")?
//    - select() happens to give the same order, but the order is part of
//      the output format, so the walk is spelled out here
//
// 2. Why walk NodeRef instead of ElementRef?
//    - scraper stores <template> contents under a Fragment node, which is
//      not an element; skipping non-element nodes would lose those anchors
//    - as_element() picks out the nodes that can carry an href
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hrefs_are_literal() {
        let html = r##"<a href="/docs">Docs</a><a href="#top">Top</a><a href="">Empty</a>"##;
        let links = extract_anchor_hrefs(html);
        assert_eq!(links, vec!["/docs", "#top", ""]);
    }

    #[test]
    fn test_preorder_document_order() {
        let html = r#"
            <html>
              <head><a href="head-link">x</a></head>
              <body>
                <a href="outer"><span>x</span></a>
                <span><a href="nested">y</a></span>
                <div>
                  <p><a href="deep">d</a></p>
                </div>
                <a href="last">z</a>
              </body>
            </html>
        "#;
        let links = extract_anchor_hrefs(html);

        // Every anchor is reported once, in the order it appears in the source
        assert_eq!(links.len(), 5);
        assert_eq!(links.first().map(String::as_str), Some("head-link"));
        assert_eq!(links.last().map(String::as_str), Some("last"));
        let deep = links.iter().position(|l| l == "deep").unwrap();
        let outer = links.iter().position(|l| l == "outer").unwrap();
        assert!(outer < deep);
    }

    #[test]
    fn test_template_contents_are_walked() {
        let html = r#"<head><a href="h">h</a></head><body><template><a href="t">t</a></template><a href="b">b</a></body>"#;
        assert_eq!(extract_anchor_hrefs(html), vec!["h", "t", "b"]);
    }

    #[test]
    fn test_anchors_without_href_are_skipped() {
        let html = r#"<a name="anchor">no href</a><a href="mailto:me@example.com">mail</a>"#;
        assert_eq!(extract_anchor_hrefs(html), vec!["mailto:me@example.com"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let html = r#"<a href="/a">1</a><a href="/a">2</a>"#;
        assert_eq!(extract_anchor_hrefs(html), vec!["/a", "/a"]);
    }

    #[test]
    fn test_other_elements_ignored() {
        let html = r#"<link href="/style.css"><area href="/map"><a href="/real">r</a>"#;
        assert_eq!(extract_anchor_hrefs(html), vec!["/real"]);
    }

    #[test]
    fn test_malformed_html_is_tolerated() {
        let html = r#"<div><a href="/one">one</a><p>unclosed<a href=/two>two</a></div></b><span><a href='/three'>three"#;
        let links = extract_anchor_hrefs(html);
        assert_eq!(links, vec!["/one", "/two", "/three"]);
    }

    #[test]
    fn test_uppercase_tags_and_attributes() {
        let html = r#"<A HREF="/shout">loud</A>"#;
        assert_eq!(extract_anchor_hrefs(html), vec!["/shout"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_anchor_hrefs("").is_empty());
    }
}
