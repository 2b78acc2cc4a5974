use crate::crawler::resolve_href;
use crate::dataset::PolicyRecord;
use crate::page::{contains_any, truncate_chars, Page, HEADINGS_H1_TO_H5};
use chrono::Utc;
use url::Url;

const DOCUMENT_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx"];
const DOCUMENT_TEXT_KEYWORDS: &[&str] = &["policy", "guideline", "standard", "protocol", "document"];
const SECTION_KEYWORDS: &[&str] = &["policy", "guideline", "standard"];
const SECTION_CONTAINERS: &[&str] = &["div", "section", "article"];
const PREVIEW_CHARS: usize = 500;

/// Extracts policy documents and inline policy sections from a page
///
/// Two independent passes run over the page:
/// 1. Documents: every anchor pointing at a `.pdf`/`.doc`/`.docx` file, or
///    whose text names a policy, guideline, standard, protocol or document.
/// 2. Sections: every `div`/`section`/`article` mentioning a policy,
///    guideline or standard that has a heading inside it.
///
/// A record whose title comes out empty is not emitted.
pub fn extract_policies(page: &Page, source_url: &str) -> Vec<PolicyRecord> {
    let mut records = document_links(page, source_url);
    records.extend(inline_sections(page, source_url));
    records
}

fn document_links(page: &Page, source_url: &str) -> Vec<PolicyRecord> {
    let base_url = Url::parse(source_url).ok();

    page.root()
        .find_all_by_tag(&["a"])
        .into_iter()
        .filter_map(|anchor| {
            let href = anchor.attr("href")?;
            let title = anchor.stripped_text();
            let href_lower = href.trim().to_lowercase();

            let is_document = DOCUMENT_EXTENSIONS
                .iter()
                .any(|extension| href_lower.ends_with(extension))
                || contains_any(&title, DOCUMENT_TEXT_KEYWORDS);
            if !is_document || title.is_empty() {
                return None;
            }

            let url = match &base_url {
                Some(base_url) => resolve_href(base_url, href),
                None => href.to_string(),
            };
            tracing::debug!("Found policy document: {} -> {}", title, url);

            Some(PolicyRecord {
                title,
                url,
                content_preview: None,
                source_page: Some(source_url.to_string()),
                scraped_at: Utc::now(),
            })
        })
        .collect()
}

fn inline_sections(page: &Page, source_url: &str) -> Vec<PolicyRecord> {
    page.root()
        .find_all_by_tag(SECTION_CONTAINERS)
        .into_iter()
        .filter(|container| contains_any(&container.text(), SECTION_KEYWORDS))
        .filter_map(|container| {
            let title = container
                .find_first_heading(HEADINGS_H1_TO_H5)
                .map(|heading| heading.stripped_text())
                .filter(|title| !title.is_empty())?;

            Some(PolicyRecord {
                title,
                url: source_url.to_string(),
                content_preview: Some(truncate_chars(&container.stripped_text(), PREVIEW_CHARS)),
                source_page: None,
                scraped_at: Utc::now(),
            })
        })
        .collect()
}
