//! Integration tests for the scraper
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! discovery, crawl, insight and persistence cycle end-to-end.

use moh_scraper::config::{Config, OutputConfig, ScraperConfig, UserAgentConfig};
use moh_scraper::crawler::{crawl, run_scraper, Category};
use moh_scraper::dataset::ContactKind;
use moh_scraper::ScraperError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration scraping `root_url` into `output_dir`
fn create_test_config(root_url: &str, output_dir: &Path, summary_path: Option<&Path>) -> Config {
    Config {
        scraper: ScraperConfig {
            root_url: root_url.to_string(),
            phase_delay_ms: 0,
            request_timeout_secs: 5,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: "https://example.com/contact".to_string(),
            contact_email: "test@example.com".to_string(),
        },
        output: OutputConfig {
            directory: output_dir.display().to_string(),
            summary_path: summary_path.map(|p| p.display().to_string()),
        },
    }
}

async fn mount_html(server: &MockServer, at: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// File names in `dir`, sorted
fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read output dir")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_policy_document_and_contact_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_html(
        &mock_server,
        "/",
        r#"<html><head><title>Ministry of Health</title></head><body>
        <a href="/policy.pdf">Health Policy Document</a>
        <a href="/contact">Contact Us</a>
        </body></html>"#,
    )
    .await;
    mount_html(
        &mock_server,
        "/contact",
        "<html><body>\n<p>Email: info@moh.gov.gh</p>\n<p>Box 123, Accra</p>\n</body></html>",
    )
    .await;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_dir = temp_dir.path().join("out");
    let summary_path = temp_dir.path().join("summary.md");
    let config = create_test_config(&base_url, &output_dir, Some(&summary_path));

    let (outcome, files) = run_scraper(&config, "test-hash")
        .await
        .expect("Scrape should succeed");

    // Discovery
    let categories: Vec<Category> = outcome.links.iter().map(|l| l.category).collect();
    assert_eq!(categories, vec![Category::Policy, Category::Contact]);

    // Policy record straight from the root anchor; the PDF itself is a 404
    assert_eq!(outcome.dataset.health_policies.len(), 1);
    let policy = &outcome.dataset.health_policies[0];
    assert_eq!(policy.title, "Health Policy Document");
    assert_eq!(policy.url, format!("{}/policy.pdf", base_url));

    // Contact page entries
    let contact_url = format!("{}/contact", base_url);
    let contacts: Vec<(ContactKind, &str)> = outcome
        .dataset
        .contact_info
        .iter()
        .filter(|c| c.source_url == contact_url)
        .map(|c| (c.kind, c.value.as_str()))
        .collect();
    assert_eq!(
        contacts,
        vec![
            (ContactKind::Email, "info@moh.gov.gh"),
            (ContactKind::Address, "Box 123, Accra"),
        ]
    );

    // Persisted files
    let names = file_names(&output_dir);
    assert_eq!(names.len(), 4, "unexpected files: {:?}", names);
    assert!(names.iter().any(|n| n.starts_with("moh_data_") && n.ends_with(".json")));
    assert!(names.iter().any(|n| n.starts_with("ehr_insights_") && n.ends_with(".json")));
    assert!(names.iter().any(|n| n.starts_with("moh_health_policies_") && n.ends_with(".csv")));
    assert!(names.iter().any(|n| n.starts_with("moh_contact_info_") && n.ends_with(".csv")));
    assert_eq!(files.last(), Some(&summary_path));

    let summary = std::fs::read_to_string(&summary_path).expect("Summary should exist");
    assert!(summary.contains("test-hash"));
    assert!(summary.contains("Include email notifications and communication features"));

    let data_file = files
        .iter()
        .find(|p| p.file_name().unwrap().to_string_lossy().starts_with("moh_data_"))
        .expect("Dataset file should be listed");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(data_file).unwrap()).unwrap();
    assert_eq!(json["contact_info"][0]["type"], "email");
}

#[tokio::test]
async fn test_facility_and_news_phases() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_html(
        &mock_server,
        "/",
        r#"<html><body><ul>
        <li><a href="/hospitals">Regional Hospitals</a></li>
        <li><a href="/press">Press Releases</a></li>
        </ul></body></html>"#,
    )
    .await;
    mount_html(
        &mock_server,
        "/hospitals",
        r#"<html><body>
        <div class="facility"><h3>Korle Bu Teaching Hospital</h3>
        <p>Greater Accra Region</p><p>Tel: 0302665401</p></div>
        </body></html>"#,
    )
    .await;
    mount_html(
        &mock_server,
        "/press",
        r#"<html><body><article>
        <h2>New maternal health wards opened</h2>
        <span class="date">March 3, 2026</span>
        <p>Three regional hospitals received new wards.</p>
        </article></body></html>"#,
    )
    .await;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&base_url, temp_dir.path(), None);

    let (outcome, _) = run_scraper(&config, "hash")
        .await
        .expect("Scrape should succeed");

    assert_eq!(outcome.links[0].category, Category::Facility);
    assert_eq!(outcome.links[1].category, Category::News);

    let facility = &outcome.dataset.healthcare_facilities[0];
    assert_eq!(facility.name, "Korle Bu Teaching Hospital");
    assert_eq!(facility.location, "Greater Accra Region");
    assert_eq!(facility.contact, "Tel: 0302665401");
    assert_eq!(facility.source_url, format!("{}/hospitals", base_url));

    let news = &outcome.dataset.news_updates[0];
    assert_eq!(news.title, "New maternal health wards opened");
    assert_eq!(news.date, "March 3, 2026");
    assert_eq!(news.summary, "Three regional hospitals received new wards.");

    assert_eq!(outcome.insights.facility_types, vec!["hospital"]);
    assert_eq!(
        outcome.insights.discovered_sections["facility"],
        vec!["Regional Hospitals"]
    );
}

#[tokio::test]
async fn test_root_page_fetched_by_discovery_policy_and_contact() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<html><body><a href="/about">About</a></body></html>"#),
        )
        .expect(3)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body><p>Department of Research and Development</p></body></html>",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&mock_server.uri(), temp_dir.path(), None);

    let (outcome, _) = run_scraper(&config, "hash")
        .await
        .expect("Scrape should succeed");

    let departments: Vec<&str> = outcome
        .dataset
        .departments
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(departments, vec!["Department of Research and Development"]);
}

#[tokio::test]
async fn test_unreachable_root_writes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_dir: PathBuf = temp_dir.path().join("out");
    let summary_path = temp_dir.path().join("summary.md");
    let config = create_test_config(&mock_server.uri(), &output_dir, Some(&summary_path));

    let result = crawl(&config, "hash").await;

    assert!(matches!(result, Err(ScraperError::RootUnreachable { .. })));
    assert!(!output_dir.exists());
    assert!(!summary_path.exists());
}
