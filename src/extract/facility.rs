use super::{first_fragment_by_priority, qualifying_heading};
use crate::dataset::FacilityRecord;
use crate::page::{Page, HEADINGS_H1_TO_H5};
use chrono::Utc;

const CONTAINERS: &[&str] = &["div", "section", "article", "li"];
const NAME_KEYWORDS: &[&str] = &["hospital", "clinic", "center", "polyclinic", "medical"];
const LOCATION_KEYWORDS: &[&str] = &["region", "district", "town", "city", "location", "address"];
const CONTACT_KEYWORDS: &[&str] = &["phone", "tel", "email", "contact"];
const SERVICE_KEYWORD: &str = "service";

/// Extracts healthcare facilities from a page
///
/// Every `div`, `section`, `article` and `li`, however deeply nested, is a
/// candidate. Its name is the first heading inside it, kept only when that
/// heading itself reads like a facility ("Our Services" does not). Location
/// and contact are the first text fragments mentioning one of their keywords,
/// trying keywords in order.
pub fn extract_facilities(page: &Page, source_url: &str) -> Vec<FacilityRecord> {
    page.root()
        .find_all_by_tag(CONTAINERS)
        .into_iter()
        .filter_map(|container| {
            let name = qualifying_heading(container, HEADINGS_H1_TO_H5, NAME_KEYWORDS)?;
            let location = first_fragment_by_priority(container, LOCATION_KEYWORDS);
            let contact = first_fragment_by_priority(container, CONTACT_KEYWORDS);
            let services = first_fragment_by_priority(container, &[SERVICE_KEYWORD]);

            tracing::debug!("Found facility: {}", name);
            Some(FacilityRecord {
                name,
                location: location.unwrap_or_default(),
                contact: contact.unwrap_or_default(),
                services: services.into_iter().collect(),
                source_url: source_url.to_string(),
                scraped_at: Utc::now(),
            })
        })
        .collect()
}
