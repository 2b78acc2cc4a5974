//! The dataset accumulated over a run
//!
//! A [`Dataset`] holds one ordered collection per record category. It is
//! created empty, handed to each crawl phase, grown by appending, and handed
//! back. Once crawling is over it is only read.

mod records;

pub use records::{
    ContactEntry, ContactKind, DepartmentEntry, EhrRelevantLink, FacilityRecord, NewsRecord,
    PolicyRecord, ProgramRecord, TabularRecord, LIST_SEPARATOR,
};

use serde::{Deserialize, Serialize};

/// Records gathered so far, keyed by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub health_policies: Vec<PolicyRecord>,
    pub healthcare_facilities: Vec<FacilityRecord>,
    pub health_programs: Vec<ProgramRecord>,
    pub news_updates: Vec<NewsRecord>,
    pub contact_info: Vec<ContactEntry>,
    pub departments: Vec<DepartmentEntry>,
    pub ehr_relevant_links: Vec<EhrRelevantLink>,
}

/// One category of the dataset flattened into rows of named cells
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    pub name: &'static str,
    pub rows: Vec<Vec<(&'static str, String)>>,
}

impl CategoryTable {
    fn from_records<R: TabularRecord>(name: &'static str, records: &[R]) -> Self {
        Self {
            name,
            rows: records.iter().map(TabularRecord::fields).collect(),
        }
    }

    /// Column names taken from the first row
    pub fn headers(&self) -> Vec<&'static str> {
        self.rows
            .first()
            .map(|row| row.iter().map(|(name, _)| *name).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every category as a table, in a fixed order
    pub fn tables(&self) -> Vec<CategoryTable> {
        vec![
            CategoryTable::from_records("health_policies", &self.health_policies),
            CategoryTable::from_records("healthcare_facilities", &self.healthcare_facilities),
            CategoryTable::from_records("health_programs", &self.health_programs),
            CategoryTable::from_records("news_updates", &self.news_updates),
            CategoryTable::from_records("contact_info", &self.contact_info),
            CategoryTable::from_records("departments", &self.departments),
            CategoryTable::from_records("ehr_relevant_links", &self.ehr_relevant_links),
        ]
    }

    /// Total number of records across every category
    pub fn total_records(&self) -> usize {
        self.health_policies.len()
            + self.healthcare_facilities.len()
            + self.health_programs.len()
            + self.news_updates.len()
            + self.contact_info.len()
            + self.departments.len()
            + self.ehr_relevant_links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}
