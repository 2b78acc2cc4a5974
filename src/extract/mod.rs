//! Per-category extractors
//!
//! Each extractor is a pure function from one fetched page (and the URL it
//! was fetched from) to the records found on it. Lookups are all optional:
//! a page with an unusual structure yields fewer records, never an error.
//! Nothing is de-duplicated, so extracting the same page twice yields every
//! record twice.

mod contact;
mod facility;
mod news;
mod policy;
mod program;

pub use contact::{
    extract_contacts, find_emails, find_lines_with_keyword, find_phone_numbers,
    ContactExtraction, ADDRESS_KEYWORDS,
};
pub use facility::extract_facilities;
pub use news::extract_news;
pub use policy::extract_policies;
pub use program::extract_programs;

use crate::page::{contains_any, Element};

/// First fragment matching the earliest keyword in `keywords` that matches
/// anything at all, trimmed. Keyword order is priority order.
fn first_fragment_by_priority(container: &Element, keywords: &[&str]) -> Option<String> {
    keywords
        .iter()
        .find_map(|keyword| container.find_first_text_containing(keyword))
        .map(|fragment| fragment.text.trim().to_string())
}

/// Stripped text of the first heading among `levels`, kept only if it
/// mentions one of `keywords`
fn qualifying_heading(container: &Element, levels: &[&str], keywords: &[&str]) -> Option<String> {
    container
        .find_first_heading(levels)
        .map(Element::stripped_text)
        .filter(|text| contains_any(text, keywords))
}
