//! EHR insights derived from a finished dataset
//!
//! [`aggregate`] reads the dataset and the discovered links once crawling is
//! over and summarizes them for whoever designs the downstream EHR system.
//! It never fails: an empty dataset yields a report holding only the
//! general recommendations.

mod relevance;

pub use relevance::{rank_ehr_relevant_links, relevance_score, EHR_KEYWORDS, MAX_RELEVANT_LINKS};

use crate::crawler::DiscoveredLink;
use crate::dataset::{ContactKind, Dataset, EhrRelevantLink, PolicyRecord};
use crate::page::{contains_any, truncate_chars};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Policy title terms marking a regulatory requirement
pub const REGULATORY_KEYWORDS: &[&str] =
    &["data", "privacy", "record", "ehr", "electronic", "information"];

/// Health topics looked for in program titles and descriptions
pub const HEALTH_ISSUE_KEYWORDS: &[&str] = &[
    "malaria",
    "diabetes",
    "hypertension",
    "maternal",
    "child health",
    "tuberculosis",
    "hiv",
    "aids",
    "immunization",
    "nutrition",
];

/// Name fragment to facility type, first match wins
const FACILITY_TYPE_RULES: &[(&str, &str)] = &[
    ("hospital", "hospital"),
    ("clinic", "health_center"),
    ("center", "health_center"),
    ("polyclinic", "polyclinic"),
];

const MAX_TOP_ISSUES: usize = 5;
const ISSUE_CONTEXT_CHARS: usize = 200;

/// Recommendations appended to every report
pub const GENERAL_RECOMMENDATIONS: &[&str] = &[
    "Implement offline-capable design for rural areas with poor connectivity",
    "Include multilingual support (English, Twi, other local languages)",
    "Ensure compliance with Ghana's data protection and health information policies",
    "Design mobile-first interface for healthcare workers using smartphones",
    "Include Mobile Money integration for billing (popular payment method in Ghana)",
];

/// A health topic mentioned by a program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthIssue {
    pub issue: String,
    pub program: String,
    /// First characters of the lowercased "title description" text
    pub context: String,
}

/// Summary of a run aimed at EHR design
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub regulatory_requirements: Vec<PolicyRecord>,
    pub facility_types: Vec<String>,
    pub common_health_issues: Vec<HealthIssue>,
    /// Category name to link texts, in discovery order
    pub discovered_sections: BTreeMap<String, Vec<String>>,
    pub ehr_relevant_links: Vec<EhrRelevantLink>,
    /// Contact kind to values, in extraction order
    pub contact_summary: BTreeMap<String, Vec<String>>,
    pub recommendations: Vec<String>,
}

/// Builds the insight report from a finished dataset
pub fn aggregate(dataset: &Dataset, links: &[DiscoveredLink]) -> InsightReport {
    let regulatory_requirements: Vec<PolicyRecord> = dataset
        .health_policies
        .iter()
        .filter(|policy| contains_any(&policy.title, REGULATORY_KEYWORDS))
        .cloned()
        .collect();

    let facility_types: BTreeSet<&'static str> = dataset
        .healthcare_facilities
        .iter()
        .filter_map(|facility| facility_type(&facility.name))
        .collect();

    let common_health_issues = health_issues(dataset);

    let mut discovered_sections: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for link in links {
        discovered_sections
            .entry(link.category.to_string())
            .or_default()
            .push(link.text.clone());
    }

    let mut contact_summary: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for contact in &dataset.contact_info {
        contact_summary
            .entry(contact.kind.to_string())
            .or_default()
            .push(contact.value.clone());
    }

    let recommendations = recommendations(
        &facility_types,
        &common_health_issues,
        contact_summary.contains_key(ContactKind::Phone.as_str()),
        contact_summary.contains_key(ContactKind::Email.as_str()),
    );

    let report = InsightReport {
        regulatory_requirements,
        facility_types: facility_types.iter().map(|t| t.to_string()).collect(),
        common_health_issues,
        discovered_sections,
        ehr_relevant_links: dataset.ehr_relevant_links.clone(),
        contact_summary,
        recommendations,
    };

    tracing::info!(
        "Insights: {} regulatory documents, {} facility types, {} health issue mentions",
        report.regulatory_requirements.len(),
        report.facility_types.len(),
        report.common_health_issues.len()
    );

    report
}

/// Maps a facility name to its type, if any rule matches
fn facility_type(name: &str) -> Option<&'static str> {
    let lowered = name.to_lowercase();
    FACILITY_TYPE_RULES
        .iter()
        .find(|(fragment, _)| lowered.contains(fragment))
        .map(|(_, kind)| *kind)
}

fn health_issues(dataset: &Dataset) -> Vec<HealthIssue> {
    let mut issues = Vec::new();
    for program in &dataset.health_programs {
        let content = format!("{} {}", program.title, program.description).to_lowercase();
        for keyword in HEALTH_ISSUE_KEYWORDS {
            if content.contains(keyword) {
                issues.push(HealthIssue {
                    issue: keyword.to_string(),
                    program: program.title.clone(),
                    context: truncate_chars(&content, ISSUE_CONTEXT_CHARS),
                });
            }
        }
    }
    issues
}

fn recommendations(
    facility_types: &BTreeSet<&'static str>,
    issues: &[HealthIssue],
    has_phone: bool,
    has_email: bool,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !facility_types.is_empty() {
        let types: Vec<&str> = facility_types.iter().copied().collect();
        recommendations.push(format!(
            "Design EHR to support {} facility types: {}",
            types.len(),
            types.join(", ")
        ));
    }

    if !issues.is_empty() {
        // Distinct issues in hash order, so which five appear is unspecified
        let distinct: HashSet<&str> = issues.iter().map(|i| i.issue.as_str()).collect();
        let top: Vec<&str> = distinct.into_iter().take(MAX_TOP_ISSUES).collect();
        recommendations.push(format!(
            "Include templates/modules for common health issues: {}",
            top.join(", ")
        ));
    }

    if has_phone {
        recommendations
            .push("Integrate SMS/phone communication features for patient engagement".to_string());
    }
    if has_email {
        recommendations.push("Include email notifications and communication features".to_string());
    }

    recommendations.extend(GENERAL_RECOMMENDATIONS.iter().map(|r| r.to_string()));
    recommendations
}
