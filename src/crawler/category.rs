//! Link categories and the keyword tables that assign them
//!
//! Two tables exist: the classification table labels each discovered link
//! once, while the crawl table decides which links a category pass fetches. The crawl table is broader, so a link
//! labelled `other` may still be fetched by, say, the facility pass.

use crate::page::contains_any;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a discovered link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Policy,
    Facility,
    Program,
    News,
    Contact,
    Other,
}

impl Category {
    /// Categories that get their own crawl pass, in run order
    pub const CRAWLED: [Category; 5] = [
        Category::Policy,
        Category::Facility,
        Category::Program,
        Category::News,
        Category::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Policy => "policy",
            Self::Facility => "facility",
            Self::Program => "program",
            Self::News => "news",
            Self::Contact => "contact",
            Self::Other => "other",
        }
    }

    /// Keywords that select a link for this category's crawl pass
    pub fn crawl_keywords(&self) -> &'static [&'static str] {
        CRAWL_RULES
            .iter()
            .find(|rule| rule.category == *self)
            .map(|rule| rule.keywords)
            .unwrap_or(&[])
    }

    /// Returns true if a link with this text is fetched by this category's pass
    pub fn selects(&self, link_text: &str) -> bool {
        contains_any(link_text, self.crawl_keywords())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category and the lowercase substrings that trigger it
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Discovery-time classification, evaluated top to bottom
pub const CLASSIFICATION_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Policy,
        keywords: &["policy", "guideline", "document", "publication"],
    },
    KeywordRule {
        category: Category::Facility,
        keywords: &["hospital", "clinic", "facility", "center"],
    },
    KeywordRule {
        category: Category::Program,
        keywords: &["program", "initiative", "service"],
    },
    KeywordRule {
        category: Category::News,
        keywords: &["news", "update", "announcement", "press"],
    },
    KeywordRule {
        category: Category::Contact,
        keywords: &["contact", "about", "department"],
    },
];

/// Crawl-time selection, one rule per crawled category
pub const CRAWL_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Policy,
        keywords: &["policy", "guideline", "document", "publication", "standard"],
    },
    KeywordRule {
        category: Category::Facility,
        keywords: &["hospital", "clinic", "facility", "center", "health"],
    },
    KeywordRule {
        category: Category::Program,
        keywords: &["program", "initiative", "service", "project", "health"],
    },
    KeywordRule {
        category: Category::News,
        keywords: &["news", "update", "announcement", "press", "media"],
    },
    KeywordRule {
        category: Category::Contact,
        keywords: &["contact", "about", "department", "office"],
    },
];

/// Link texts mentioning any of these are logged as relevant on discovery
pub const RELEVANT_LINK_KEYWORDS: &[&str] = &[
    "health",
    "policy",
    "hospital",
    "clinic",
    "service",
    "program",
    "department",
];

/// Classifies a link by its visible text
///
/// The first rule of [`CLASSIFICATION_RULES`] whose keywords appear in the
/// text wins, so "Hospital Policy" is a policy link. The URL is accepted for
/// symmetry with the discovered link but plays no part in the decision.
///
/// # Examples
///
/// ```
/// use moh_scraper::{categorize_link, Category};
///
/// assert_eq!(categorize_link("Hospital Policy", "https://moh.gov.gh/x"), Category::Policy);
/// assert_eq!(categorize_link("Home", "https://moh.gov.gh/policy"), Category::Other);
/// ```
pub fn categorize_link(text: &str, _url: &str) -> Category {
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| contains_any(text, rule.keywords))
        .map(|rule| rule.category)
        .unwrap_or(Category::Other)
}
