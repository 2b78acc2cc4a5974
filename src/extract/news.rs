use crate::dataset::NewsRecord;
use crate::page::{contains_any, truncate_chars, Element, Page, HEADINGS_H1_TO_H4};
use chrono::Utc;

const CONTAINERS: &[&str] = &["div", "article", "section"];
const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];
const DATE_CLASS_FRAGMENT: &str = "date";
const MIN_TITLE_CHARS: usize = 10;
const SUMMARY_CHARS: usize = 300;

/// Extracts news items from a page
///
/// Titles of ten characters or fewer are treated as navigation noise and
/// dropped. The date prefers an element styled as a date and falls back to
/// the first text naming a month.
pub fn extract_news(page: &Page, source_url: &str) -> Vec<NewsRecord> {
    page.root()
        .find_all_by_tag(CONTAINERS)
        .into_iter()
        .filter_map(|container| {
            let title = container
                .find_first_heading(HEADINGS_H1_TO_H4)
                .map(Element::stripped_text)
                .filter(|title| title.chars().count() > MIN_TITLE_CHARS)?;

            let summary = container
                .find_all_by_tag(&["p"])
                .first()
                .map(|paragraph| truncate_chars(&paragraph.stripped_text(), SUMMARY_CHARS));

            tracing::debug!("Found news: {}", truncate_chars(&title, 50));
            Some(NewsRecord {
                title,
                date: date(container).unwrap_or_default(),
                summary: summary.unwrap_or_default(),
                url: source_url.to_string(),
                scraped_at: Utc::now(),
            })
        })
        .collect()
}

fn date(container: &Element) -> Option<String> {
    if let Some(element) = container.find_first_with_class_containing(DATE_CLASS_FRAGMENT) {
        return Some(element.stripped_text());
    }

    container
        .text_fragments()
        .find(|fragment| contains_any(fragment.text, MONTHS))
        .map(|fragment| fragment.text.trim().to_string())
}
