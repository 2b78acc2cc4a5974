//! Root page link discovery
//!
//! Every anchor with an href on the root page becomes one
//! [`DiscoveredLink`], in document order. Repeated anchors are kept as
//! repeated entries.

use crate::crawler::category::{categorize_link, Category, RELEVANT_LINK_KEYWORDS};
use crate::crawler::fetcher::{FetchError, PageFetcher};
use crate::crawler::parser::resolve_href;
use crate::page::{contains_any, Page};
use serde::{Deserialize, Serialize};
use url::Url;

/// One anchor found on the root page plus its assigned category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredLink {
    /// Trimmed visible text, possibly empty
    pub text: String,
    /// Absolute URL, or the raw href when it could not be resolved
    pub url: String,
    pub category: Category,
}

/// Fetches the root page and lists every link on it
///
/// # Errors
///
/// Returns the [`FetchError`] if the root page itself cannot be fetched.
pub async fn discover(
    fetcher: &dyn PageFetcher,
    root_url: &Url,
) -> Result<Vec<DiscoveredLink>, FetchError> {
    tracing::info!("Discovering links on {}", root_url);
    let page = fetcher.fetch(root_url.as_str()).await?;
    let links = links_on_page(&page, root_url);
    tracing::info!("Discovered {} links on the root page", links.len());
    Ok(links)
}

/// Lists and classifies every anchor with an href on `page`
///
/// Link text is the anchor's stripped text, whose fragments are joined by
/// single spaces: `<a>Health<br>Policy</a>` reads "Health Policy", never
/// "HealthPolicy".
pub fn links_on_page(page: &Page, base_url: &Url) -> Vec<DiscoveredLink> {
    page.root()
        .find_all_by_tag(&["a"])
        .into_iter()
        .filter_map(|anchor| {
            let href = anchor.attr("href")?;
            let url = resolve_href(base_url, href);
            let text = anchor.stripped_text();

            if !text.is_empty() && contains_any(&text, RELEVANT_LINK_KEYWORDS) {
                tracing::info!("Found relevant link: {} -> {}", text, url);
            }

            let category = categorize_link(&text, &url);
            Some(DiscoveredLink {
                text,
                url,
                category,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::parser::parse_page;

    fn base_url() -> Url {
        Url::parse("https://www.moh.gov.gh/").unwrap()
    }

    #[test]
    fn test_one_link_per_anchor_with_href() {
        let page = parse_page(
            r#"<html><body>
                <a href="/policy.pdf">Health Policy Document</a>
                <a name="top">No href</a>
                <a href="/contact">Contact Us</a>
                <a href="">  </a>
            </body></html>"#,
        );
        let links = links_on_page(&page, &base_url());

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].text, "Health Policy Document");
        assert_eq!(links[0].url, "https://www.moh.gov.gh/policy.pdf");
        assert_eq!(links[0].category, Category::Policy);
        assert_eq!(links[1].category, Category::Contact);
        assert_eq!(links[2].text, "");
        assert_eq!(links[2].category, Category::Other);
    }

    #[test]
    fn test_repeated_anchor_not_deduplicated() {
        let page = parse_page(
            r#"<html><body>
                <a href="/news">Latest News</a>
                <a href="/news">Latest News</a>
            </body></html>"#,
        );
        let links = links_on_page(&page, &base_url());
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], links[1]);
    }

    #[test]
    fn test_nested_anchor_text_trimmed() {
        let page = parse_page(
            r#"<html><body><a href="/h">
                <span> Teaching </span><b>Hospitals</b>
            </a></body></html>"#,
        );
        let links = links_on_page(&page, &base_url());
        assert_eq!(links[0].text, "Teaching Hospitals");
        assert_eq!(links[0].category, Category::Facility);
    }

    #[test]
    fn test_line_break_in_anchor_reads_as_space() {
        let page = parse_page(r#"<html><body><a href="/p">Health<br>Policy</a></body></html>"#);
        let links = links_on_page(&page, &base_url());
        assert_eq!(links[0].text, "Health Policy");
        assert_eq!(links[0].category, Category::Policy);
    }
}
