//! EHR relevance scoring of discovered links

use crate::crawler::DiscoveredLink;
use crate::dataset::EhrRelevantLink;

/// Terms suggesting a link leads to digital-health material
pub const EHR_KEYWORDS: &[&str] = &[
    "digital",
    "electronic",
    "system",
    "data",
    "record",
    "information",
    "technology",
    "telemedicine",
    "e-health",
    "health information",
    "medical record",
    "patient data",
    "database",
    "software",
];

/// How many scored links are kept
pub const MAX_RELEVANT_LINKS: usize = 20;

/// Number of [`EHR_KEYWORDS`] found in the link's text or URL
pub fn relevance_score(link: &DiscoveredLink) -> u32 {
    let text = link.text.to_lowercase();
    let url = link.url.to_lowercase();
    EHR_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword) || url.contains(*keyword))
        .count() as u32
}

/// Scores every link and keeps the top [`MAX_RELEVANT_LINKS`] with a
/// positive score, highest first. Equal scores keep discovery order.
pub fn rank_ehr_relevant_links(links: &[DiscoveredLink]) -> Vec<EhrRelevantLink> {
    let mut scored: Vec<EhrRelevantLink> = links
        .iter()
        .filter_map(|link| {
            let score = relevance_score(link);
            (score > 0).then(|| EhrRelevantLink {
                text: link.text.clone(),
                url: link.url.clone(),
                category: link.category,
                ehr_relevance_score: score,
            })
        })
        .collect();

    // sort_by is stable, which keeps ties in discovery order
    scored.sort_by(|a, b| b.ehr_relevance_score.cmp(&a.ehr_relevance_score));
    scored.truncate(MAX_RELEVANT_LINKS);

    tracing::info!("Found {} EHR-relevant links", scored.len());
    for link in scored.iter().take(5) {
        tracing::info!(
            "EHR-relevant: {} (score: {})",
            link.text,
            link.ehr_relevance_score
        );
    }

    scored
}
