use super::qualifying_heading;
use crate::dataset::ProgramRecord;
use crate::page::{Element, Page, HEADINGS_H1_TO_H4};
use chrono::Utc;

const CONTAINERS: &[&str] = &["div", "section", "article"];
const TITLE_KEYWORDS: &[&str] = &["program", "initiative", "project", "service", "health", "care"];
const DESCRIPTION_PARAGRAPHS: usize = 3;
const MIN_PARAGRAPH_CHARS: usize = 20;
const OBJECTIVE_KEYWORD: &str = "objective";

/// Extracts health programs from a page
///
/// The description is built from the first three paragraphs of the
/// container, skipping any of those three that are 20 characters or
/// shorter. Objectives are the list items under whichever element holds
/// the first text mentioning an objective.
pub fn extract_programs(page: &Page, source_url: &str) -> Vec<ProgramRecord> {
    page.root()
        .find_all_by_tag(CONTAINERS)
        .into_iter()
        .filter_map(|container| {
            let title = qualifying_heading(container, HEADINGS_H1_TO_H4, TITLE_KEYWORDS)?;

            tracing::debug!("Found program: {}", title);
            Some(ProgramRecord {
                title,
                description: description(container),
                objectives: objectives(container).unwrap_or_default(),
                url: source_url.to_string(),
                scraped_at: Utc::now(),
            })
        })
        .collect()
}

fn description(container: &Element) -> String {
    container
        .find_all_by_tag(&["p"])
        .into_iter()
        .take(DESCRIPTION_PARAGRAPHS)
        .map(Element::stripped_text)
        .filter(|text| text.chars().count() > MIN_PARAGRAPH_CHARS)
        .collect::<Vec<_>>()
        .join(" ")
}

fn objectives(container: &Element) -> Option<Vec<String>> {
    let marker = container.find_first_text_containing(OBJECTIVE_KEYWORD)?;
    Some(
        marker
            .parent
            .find_all_by_tag(&["li"])
            .into_iter()
            .map(Element::stripped_text)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::parse_page;

    const SOURCE: &str = "https://www.moh.gov.gh/programs";

    #[test]
    fn test_program_with_description_and_objectives() {
        let page = parse_page(
            r#"<html><body>
                <article>
                    <h2>National Malaria Control Program</h2>
                    <p>Short intro.</p>
                    <p>The programme distributes insecticide treated nets nationwide.</p>
                    <p>It also funds rapid diagnostic testing in every district.</p>
                    <p>A fourth paragraph that is long enough but ignored.</p>
                    <div>
                        Key objectives
                        <ul><li>Reduce malaria deaths</li><li> Expand testing </li></ul>
                    </div>
                </article>
            </body></html>"#,
        );
        let records = extract_programs(&page, SOURCE);

        // The inner div has no heading, so only the article qualifies
        assert_eq!(records.len(), 1);
        let program = &records[0];
        assert_eq!(program.title, "National Malaria Control Program");
        assert_eq!(
            program.description,
            "The programme distributes insecticide treated nets nationwide. \
             It also funds rapid diagnostic testing in every district."
        );
        assert_eq!(program.objectives, vec!["Reduce malaria deaths", "Expand testing"]);
        assert_eq!(program.url, SOURCE);
    }

    #[test]
    fn test_heading_level_five_ignored() {
        let page = parse_page(r#"<html><body><div><h5>Health Program</h5></div></body></html>"#);
        assert!(extract_programs(&page, SOURCE).is_empty());
    }

    #[test]
    fn test_title_requires_keyword() {
        let page = parse_page(r#"<html><body><div><h2>Welcome</h2></div></body></html>"#);
        assert!(extract_programs(&page, SOURCE).is_empty());
    }

    #[test]
    fn test_objective_without_list_gives_empty() {
        let page = parse_page(
            r#"<html><body><section><h1>Child Care Initiative</h1><p>Objective: to be defined</p></section></body></html>"#,
        );
        let records = extract_programs(&page, SOURCE);
        assert_eq!(records.len(), 1);
        assert!(records[0].objectives.is_empty());
        assert_eq!(records[0].description, "Objective: to be defined");
    }
}
