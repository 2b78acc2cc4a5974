//! HTML parser producing the typed page tree
//!
//! This module turns fetched HTML into a [`Page`]:
//! - Elements keep their lowercase tag name, attributes and children
//! - Text nodes are kept verbatim, whitespace included
//! - Text inside `<script>`, `<style>` and `<template>` is dropped
//! - Comments, doctypes and processing instructions are dropped

use crate::page::{Element, Page, PageNode};
use scraper::{ElementRef, Html, Node};
use url::Url;

/// Elements whose text is never page content
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "template"];

/// Parses an HTML document into a page tree rooted at `<html>`
///
/// Parsing never fails: malformed markup is repaired by the HTML5 parser,
/// and an unusual structure simply yields fewer matches later on.
///
/// # Example
///
/// ```
/// use moh_scraper::crawler::parse_page;
///
/// let page = parse_page(r#"<html><body><h1>Ministry of Health</h1></body></html>"#);
/// let heading = page.root().find_first_heading(&["h1"]).unwrap();
/// assert_eq!(heading.stripped_text(), "Ministry of Health");
/// ```
pub fn parse_page(html: &str) -> Page {
    let document = Html::parse_document(html);
    Page::new(convert_tree(document.root_element()))
}

/// Copies the scraper tree below `root` without recursing, so nesting depth
/// is bounded only by memory
fn convert_tree(root: ElementRef<'_>) -> Element {
    // (element being built, its remaining children, inside non-content tag)
    let mut open = vec![(shallow_copy(root), root.children(), is_non_content(root))];
    let mut converted = None;

    while let Some((element, children, skip_text)) = open.last_mut() {
        match children.next() {
            Some(child) => match child.value() {
                Node::Text(text) => {
                    if !*skip_text {
                        element.children.push(PageNode::Text(String::from(&**text)));
                    }
                }
                Node::Element(_) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        let skip = *skip_text || is_non_content(child_element);
                        open.push((shallow_copy(child_element), child_element.children(), skip));
                    }
                }
                _ => {}
            },
            None => {
                if let Some((finished, _, _)) = open.pop() {
                    match open.last_mut() {
                        Some((parent, _, _)) => parent.children.push(PageNode::Element(finished)),
                        None => converted = Some(finished),
                    }
                }
            }
        }
    }

    converted.unwrap_or_default()
}

/// Tag name and attributes, no children
fn shallow_copy(element: ElementRef<'_>) -> Element {
    let value = element.value();
    let mut copy = Element::new(value.name());
    copy.attributes = value
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    copy
}

fn is_non_content(element: ElementRef<'_>) -> bool {
    NON_CONTENT_TAGS
        .iter()
        .any(|tag| element.value().name().eq_ignore_ascii_case(tag))
}

/// Resolves an href against the page it was found on
///
/// Unlike link-following crawlers, nothing is filtered out here: `mailto:`
/// and fragment links are resolved like any other, and an href the URL
/// parser rejects is returned unchanged so every anchor stays accounted for.
pub fn resolve_href(base_url: &Url, href: &str) -> String {
    match base_url.join(href.trim()) {
        Ok(absolute_url) => absolute_url.to_string(),
        Err(_) => href.to_string(),
    }
}
