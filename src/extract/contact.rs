//! Contact details and department names
//!
//! Phone numbers and emails are found with regular expressions over the
//! whole page text. Addresses and fax numbers are found line by line: for
//! each keyword present anywhere on the page, the first line mentioning it
//! is taken as the value.

use crate::dataset::{ContactEntry, ContactKind, DepartmentEntry};
use crate::page::Page;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Ghana country-code numbers, dashed local numbers, bare ten-digit numbers
static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"\+233(?:[ \t]*\d)+", r"\d{3}-\d{3}-\d{4}", r"\d{10}"]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("phone pattern is valid"))
        .collect()
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

/// Keywords whose first line is recorded as a postal address
pub const ADDRESS_KEYWORDS: &[&str] = &["box", "p.o", "street", "road", "avenue"];
const FAX_KEYWORDS: &[&str] = &["fax"];
const DEPARTMENT_KEYWORD: &str = "department";
const DEPARTMENT_MIN_CHARS: usize = 10;
const DEPARTMENT_MAX_CHARS: usize = 200;

/// Everything the contact extractor found on one page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactExtraction {
    pub contacts: Vec<ContactEntry>,
    pub departments: Vec<DepartmentEntry>,
}

/// Every phone number in `text`
///
/// Each pattern is applied in turn and contributes one value per match, so a
/// number matching two patterns is reported twice.
pub fn find_phone_numbers(text: &str) -> Vec<String> {
    PHONE_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.find_iter(text))
        .map(|found| found.as_str().trim().to_string())
        .collect()
}

/// Every email address in `text`
pub fn find_emails(text: &str) -> Vec<String> {
    EMAIL_PATTERN
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

/// The first line of `text` mentioning `keyword`, ignoring case, trimmed
pub fn find_lines_with_keyword(text: &str, keyword: &str) -> Option<String> {
    text.split('\n')
        .find(|line| line.to_lowercase().contains(keyword))
        .map(|line| line.trim().to_string())
}

/// Extracts contact entries and department names from a page
pub fn extract_contacts(page: &Page, source_url: &str) -> ContactExtraction {
    let page_text = page.text();
    let scraped_at = Utc::now();

    let entry = |kind: ContactKind, value: String| {
        tracing::debug!("Found {}: {}", kind, value);
        ContactEntry {
            kind,
            value,
            source_url: source_url.to_string(),
            scraped_at,
        }
    };

    let mut contacts: Vec<ContactEntry> = find_phone_numbers(&page_text)
        .into_iter()
        .map(|value| entry(ContactKind::Phone, value))
        .collect();
    contacts.extend(
        find_emails(&page_text)
            .into_iter()
            .map(|value| entry(ContactKind::Email, value)),
    );
    contacts.extend(
        keyword_lines(&page_text, ADDRESS_KEYWORDS)
            .into_iter()
            .map(|value| entry(ContactKind::Address, value)),
    );
    contacts.extend(
        keyword_lines(&page_text, FAX_KEYWORDS)
            .into_iter()
            .map(|value| entry(ContactKind::Fax, value)),
    );

    ContactExtraction {
        contacts,
        departments: departments(page, source_url, scraped_at),
    }
}

/// One line per keyword present in the text; co-occurring keywords on the
/// same line yield that line more than once
fn keyword_lines(text: &str, keywords: &[&str]) -> Vec<String> {
    let lowered = text.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .filter_map(|keyword| find_lines_with_keyword(text, keyword))
        .collect()
}

fn departments(page: &Page, source_url: &str, scraped_at: DateTime<Utc>) -> Vec<DepartmentEntry> {
    page.root()
        .text_fragments()
        .filter_map(|fragment| {
            let name = fragment.text.trim();
            let length = name.chars().count();
            let qualifies = name.to_lowercase().contains(DEPARTMENT_KEYWORD)
                && length > DEPARTMENT_MIN_CHARS
                && length < DEPARTMENT_MAX_CHARS;
            qualifies.then(|| {
                tracing::debug!("Found department: {}", name);
                DepartmentEntry {
                    name: name.to_string(),
                    source_url: source_url.to_string(),
                    scraped_at,
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::parse_page;

    const SOURCE: &str = "https://www.moh.gov.gh/contact";

    fn values(extraction: &ContactExtraction, kind: ContactKind) -> Vec<&str> {
        extraction
            .contacts
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.value.as_str())
            .collect()
    }

    #[test]
    fn test_phone_formats_each_match_once() {
        assert_eq!(find_phone_numbers("Call +233 244 123456"), vec!["+233 244 123456"]);
        assert_eq!(find_phone_numbers("Call 020-123-4567"), vec!["020-123-4567"]);
        assert_eq!(find_phone_numbers("Call 0241234567"), vec!["0241234567"]);
        assert!(find_phone_numbers("Call 12345").is_empty());
    }

    #[test]
    fn test_phone_does_not_cross_lines() {
        assert_eq!(
            find_phone_numbers("+233 30 2\n2024 annual"),
            vec!["+233 30 2"]
        );
    }

    #[test]
    fn test_emails() {
        assert_eq!(
            find_emails("Write to info@moh.gov.gh or press.office@moh.gov.gh."),
            vec!["info@moh.gov.gh", "press.office@moh.gov.gh"]
        );
    }

    #[test]
    fn test_find_line_with_keyword() {
        let text = "Ministry of Health\n  P.O. Box M44, Accra  \nFax: 0302 663 810";
        assert_eq!(
            find_lines_with_keyword(text, "box").as_deref(),
            Some("P.O. Box M44, Accra")
        );
        assert_eq!(find_lines_with_keyword(text, "avenue"), None);
    }

    #[test]
    fn test_contact_page() {
        let page = parse_page(
            "<html><body>\n\
             <p>Email: info@moh.gov.gh</p>\n\
             <p>Box 123, Accra</p>\n\
             <p>Tel: 020-123-4567</p>\n\
             <p>Fax: 0302665651</p>\n\
             </body></html>",
        );
        let extraction = extract_contacts(&page, SOURCE);

        assert_eq!(
            values(&extraction, ContactKind::Phone),
            vec!["020-123-4567", "0302665651"]
        );
        assert_eq!(values(&extraction, ContactKind::Email), vec!["info@moh.gov.gh"]);
        assert_eq!(values(&extraction, ContactKind::Address), vec!["Box 123, Accra"]);
        assert_eq!(values(&extraction, ContactKind::Fax), vec!["Fax: 0302665651"]);
        assert!(extraction.contacts.iter().all(|c| c.source_url == SOURCE));
    }

    #[test]
    fn test_co_occurring_address_keywords_duplicate_line() {
        let page = parse_page("<html><body><p>P.O. Box 1, Liberation Road</p></body></html>");
        let extraction = extract_contacts(&page, SOURCE);
        assert_eq!(
            values(&extraction, ContactKind::Address),
            vec![
                "P.O. Box 1, Liberation Road",
                "P.O. Box 1, Liberation Road",
                "P.O. Box 1, Liberation Road"
            ]
        );
    }

    #[test]
    fn test_departments_length_bounds() {
        let long_name = format!("Department {}", "x".repeat(200));
        let page = parse_page(&format!(
            "<html><body><ul>\
             <li>Department</li>\
             <li>  Department of Policy Planning  </li>\
             <li>{}</li>\
             <li>Human Resource Department</li>\
             </ul></body></html>",
            long_name
        ));
        let extraction = extract_contacts(&page, SOURCE);
        let names: Vec<&str> = extraction.departments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Department of Policy Planning", "Human Resource Department"]
        );
    }

    #[test]
    fn test_inline_script_yields_no_contacts() {
        let page = parse_page(
            r#"<html><body><p>Welcome</p>
            <script>var ts = 1700000000; var a = "road";</script>
            </body></html>"#,
        );
        let found = extract_contacts(&page, SOURCE);
        assert!(values(&found, ContactKind::Phone).is_empty());
        assert!(values(&found, ContactKind::Address).is_empty());
        assert!(found.contacts.is_empty());
    }

    #[test]
    fn test_same_page_twice_duplicates() {
        let page = parse_page("<html><body><p>info@moh.gov.gh</p></body></html>");
        let mut contacts = extract_contacts(&page, SOURCE).contacts;
        contacts.extend(extract_contacts(&page, SOURCE).contacts);
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].value, contacts[1].value);
    }
}
