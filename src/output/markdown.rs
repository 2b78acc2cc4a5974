//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of a run,
//! including record counts, the files written and the EHR recommendations.

use crate::output::traits::{OutputResult, RunSummary};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Generates a markdown summary of a run
///
/// # Arguments
///
/// * `summary` - The run summary data
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown summary
/// * `Err(OutputError)` - Failed to write summary
pub fn generate_markdown_summary(summary: &RunSummary, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a run summary as markdown
pub fn format_markdown_summary(summary: &RunSummary) -> String {
    let mut md = String::new();

    md.push_str("# MOH Scrape Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Root URL**: {}\n", summary.root_url));
    md.push_str(&format!(
        "- **Generated**: {}\n",
        summary.generated_at.to_rfc3339()
    ));
    md.push_str(&format!("- **Config Hash**: {}\n\n", summary.config_hash));

    // Record counts
    md.push_str("## Records by Category\n\n");
    md.push_str("| Category | Count |\n");
    md.push_str("|----------|-------|\n");
    for (label, count) in summary.statistics.rows() {
        md.push_str(&format!("| {} | {} |\n", label, count));
    }
    md.push_str(&format!(
        "| **Total** | {} |\n\n",
        summary.statistics.total_records()
    ));

    md.push_str(&format!(
        "- **Discovered Links**: {}\n",
        summary.statistics.discovered_links
    ));
    md.push_str(&format!(
        "- **EHR-Relevant Share**: {:.2}%\n",
        summary.ehr_link_rate()
    ));
    md.push_str(&format!(
        "- **Regulatory Documents**: {}\n\n",
        summary.regulatory_documents
    ));

    if !summary.facility_types.is_empty() {
        md.push_str("## Facility Types\n\n");
        for facility_type in &summary.facility_types {
            md.push_str(&format!("- {}\n", facility_type));
        }
        md.push('\n');
    }

    if !summary.recommendations.is_empty() {
        md.push_str("## EHR Recommendations\n\n");
        for (i, recommendation) in summary.recommendations.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, recommendation));
        }
        md.push('\n');
    }

    if !summary.files.is_empty() {
        md.push_str("## Files Written\n\n");
        for path in &summary.files {
            md.push_str(&format!("- `{}`\n", path.display()));
        }
        md.push('\n');
    }

    md
}
