//! Record types produced by the extractors
//!
//! Every record carries the URL it came from as a plain string and the time
//! it was scraped. Fields other than the discriminating one (title, name,
//! value) are best-effort and may be empty.

use crate::crawler::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A record that can be laid out as one row of a table
pub trait TabularRecord {
    /// Column names and rendered cell values, in column order
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Separator used when a list field is flattened into one cell
pub const LIST_SEPARATOR: &str = "; ";

/// A policy document link or an inline policy section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_page: Option<String>,
    pub scraped_at: DateTime<Utc>,
}

impl TabularRecord for PolicyRecord {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("title", self.title.clone()), ("url", self.url.clone())];
        if let Some(preview) = &self.content_preview {
            fields.push(("content_preview", preview.clone()));
        }
        if let Some(source_page) = &self.source_page {
            fields.push(("source_page", source_page.clone()));
        }
        fields.push(("scraped_at", self.scraped_at.to_rfc3339()));
        fields
    }
}

/// A hospital, clinic or other healthcare facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub name: String,
    pub location: String,
    pub contact: String,
    pub services: Vec<String>,
    pub source_url: String,
    pub scraped_at: DateTime<Utc>,
}

impl TabularRecord for FacilityRecord {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("location", self.location.clone()),
            ("contact", self.contact.clone()),
            ("services", self.services.join(LIST_SEPARATOR)),
            ("source_url", self.source_url.clone()),
            ("scraped_at", self.scraped_at.to_rfc3339()),
        ]
    }
}

/// A health program or initiative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub title: String,
    pub description: String,
    pub objectives: Vec<String>,
    pub url: String,
    pub scraped_at: DateTime<Utc>,
}

impl TabularRecord for ProgramRecord {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("objectives", self.objectives.join(LIST_SEPARATOR)),
            ("url", self.url.clone()),
            ("scraped_at", self.scraped_at.to_rfc3339()),
        ]
    }
}

/// A news item, press release or announcement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
    pub title: String,
    pub date: String,
    pub summary: String,
    pub url: String,
    pub scraped_at: DateTime<Utc>,
}

impl TabularRecord for NewsRecord {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("date", self.date.clone()),
            ("summary", self.summary.clone()),
            ("url", self.url.clone()),
            ("scraped_at", self.scraped_at.to_rfc3339()),
        ]
    }
}

/// Kind of a contact detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Phone,
    Email,
    Address,
    Fax,
}

impl ContactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::Fax => "fax",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phone number, email, postal address or fax line found on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    #[serde(rename = "type")]
    pub kind: ContactKind,
    pub value: String,
    pub source_url: String,
    pub scraped_at: DateTime<Utc>,
}

impl TabularRecord for ContactEntry {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("type", self.kind.to_string()),
            ("value", self.value.clone()),
            ("source_url", self.source_url.clone()),
            ("scraped_at", self.scraped_at.to_rfc3339()),
        ]
    }
}

/// A text fragment naming a ministry department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentEntry {
    pub name: String,
    pub source_url: String,
    pub scraped_at: DateTime<Utc>,
}

impl TabularRecord for DepartmentEntry {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("source_url", self.source_url.clone()),
            ("scraped_at", self.scraped_at.to_rfc3339()),
        ]
    }
}

/// A discovered link scored for relevance to EHR work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EhrRelevantLink {
    pub text: String,
    pub url: String,
    pub category: Category,
    pub ehr_relevance_score: u32,
}

impl TabularRecord for EhrRelevantLink {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("text", self.text.clone()),
            ("url", self.url.clone()),
            ("category", self.category.to_string()),
            ("ehr_relevance_score", self.ehr_relevance_score.to_string()),
        ]
    }
}
