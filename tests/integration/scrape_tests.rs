//! Integration tests for the scraper
//!
//! These tests use wiremock to serve landing and year pages and run full
//! scrape sessions end-to-end over HTTP.

use cruise_calendar::config::{load_config, Config, OutputFormat};
use cruise_calendar::output::{render, write_output};
use cruise_calendar::{CruiseError, ScrapeSession};
use std::io::Write;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LANDING_PATH: &str = "/cruises-to-santorini-greece.html";

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.http.timeout_secs = 5;
    config
}

fn landing_page(years: &[(&str, &str)]) -> String {
    let anchors: Vec<String> = years
        .iter()
        .map(|(label, link)| format!(r#"<a href="{}">{} Cruises</a>"#, link, label))
        .collect();
    format!(
        r#"<html><head><title>Cruises to Santorini</title></head><body>
        <p>Schedules: <span class="small-line-height">{}</span></p>
        </body></html>"#,
        anchors.join(" | ")
    )
}

fn listing(day: Option<&str>, ship: Option<&str>) -> String {
    let day = day
        .map(|d| format!(r#"<div class="cdy-day"><a href="/day">{}</a></div>"#, d))
        .unwrap_or_else(|| r#"<div class="cdy-day">&nbsp;</div>"#.to_string());
    let ship = ship
        .map(|s| format!(r#"<div class="cdy-ship"><a href="/ship">{}</a></div>"#, s))
        .unwrap_or_else(|| r#"<div class="cdy-ship"></div>"#.to_string());
    format!(r#"<div class="cdy-listing">{}{}</div>"#, day, ship)
}

fn year_page(rows: &[String]) -> String {
    format!(
        r#"<html><body>
        <div class="cdy-month">Not part of the calendar</div>
        <div id="idContent">{}</div>
        </body></html>"#,
        rows.join("\n")
    )
}

fn month(name: &str) -> String {
    format!("<div class=\"cdy-month\">\n{}\n</div>", name)
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_two_year_scrape() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        LANDING_PATH,
        landing_page(&[("2023", "/a"), ("2024", "/b")]),
    )
    .await;

    let one_visit = year_page(&[month("M"), listing(Some("D"), Some("S"))]);
    mount_page(&mock_server, "/a", one_visit.clone()).await;
    mount_page(&mock_server, "/b", one_visit).await;

    let landing_url = format!("{}{}", base_url, LANDING_PATH);
    let session = ScrapeSession::new(create_test_config(&base_url), &landing_url)
        .expect("Failed to create session");
    let dataset = session.run().await.expect("Scrape failed");

    let json = serde_json::to_value(&dataset).expect("Failed to serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "2023": {"M": {"D": ["S"]}},
            "2024": {"M": {"D": ["S"]}},
        })
    );
    assert_eq!(dataset.year_labels(), vec!["2023", "2024"]);

    // Years are fetched after the landing page, in landing-page order
    let requests = mock_server
        .received_requests()
        .await
        .expect("Request recording is enabled");
    let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    assert_eq!(paths, vec![LANDING_PATH, "/a", "/b"]);
}

#[tokio::test]
async fn test_requests_carry_no_user_agent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Mounted first, so it wins over the page mocks whenever it matches
    Mock::given(method("GET"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(418))
        .expect(0)
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, LANDING_PATH, landing_page(&[("2024", "/a")])).await;
    mount_page(
        &mock_server,
        "/a",
        year_page(&[month("M"), listing(Some("D"), Some("S"))]),
    )
    .await;

    let landing_url = format!("{}{}", base_url, LANDING_PATH);
    let session = ScrapeSession::new(create_test_config(&base_url), &landing_url)
        .expect("Failed to create session");
    let dataset = session.run().await.expect("Scrape failed");

    assert_eq!(dataset.visit_count(), 1);
}

#[tokio::test]
async fn test_full_calendar_reconstruction() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, LANDING_PATH, landing_page(&[("2024", "/y2024")])).await;
    mount_page(
        &mock_server,
        "/y2024",
        year_page(&[
            month("March"),
            listing(Some("2"), Some("Azura")),
            listing(None, Some("Iona")),
            listing(None, None),
            listing(Some("9"), Some("Celebrity Edge")),
            month("January"),
            listing(Some("5"), Some("Arvia")),
            listing(Some("5"), Some("Britannia")),
            month("April"),
        ]),
    )
    .await;

    let landing_url = format!("{}{}", base_url, LANDING_PATH);
    let session = ScrapeSession::new(create_test_config(&base_url), &landing_url)
        .expect("Failed to create session");
    let dataset = session.run().await.expect("Scrape failed");

    let year = dataset.year("2024").expect("Year 2024 missing");
    assert_eq!(year.month_names(), vec!["March", "January", "April"]);
    assert_eq!(year.month("March").unwrap().day_labels(), vec!["2", "9"]);
    assert_eq!(
        dataset.ships_on("2024", "March", "2").unwrap(),
        &["Azura".to_string(), "Iona".to_string()]
    );
    assert_eq!(
        dataset.ships_on("2024", "January", "5").unwrap(),
        &["Arvia".to_string(), "Britannia".to_string()]
    );
    assert!(year.month("April").unwrap().is_empty());
    assert_eq!(dataset.visit_count(), 5);
}

#[tokio::test]
async fn test_landing_404_fetches_no_year() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path(LANDING_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Year pages must never be requested
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let landing_url = format!("{}{}", base_url, LANDING_PATH);
    let session = ScrapeSession::new(create_test_config(&base_url), &landing_url)
        .expect("Failed to create session");
    let err = session.run().await.expect_err("Scrape should fail");

    match err {
        CruiseError::UnreachableSite { url, year, reason } => {
            assert_eq!(url, landing_url);
            assert_eq!(year, None);
            assert_eq!(reason, "HTTP 404");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Wiremock verifies the expectations when mock_server drops
}

#[tokio::test]
async fn test_landing_non_200_success_is_unreachable() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path(LANDING_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let landing_url = format!("{}{}", base_url, LANDING_PATH);
    let session = ScrapeSession::new(create_test_config(&base_url), &landing_url)
        .expect("Failed to create session");

    assert!(matches!(
        session.run().await,
        Err(CruiseError::UnreachableSite { year: None, .. })
    ));
}

#[tokio::test]
async fn test_year_failure_aborts_and_names_year() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        LANDING_PATH,
        landing_page(&[("2023", "/a"), ("2024", "/b"), ("2025", "/c")]),
    )
    .await;
    mount_page(
        &mock_server,
        "/a",
        year_page(&[month("M"), listing(Some("D"), Some("S"))]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let landing_url = format!("{}{}", base_url, LANDING_PATH);
    let session = ScrapeSession::new(create_test_config(&base_url), &landing_url)
        .expect("Failed to create session");
    let err = session.run().await.expect_err("Scrape should fail");

    assert_eq!(err.failed_year(), Some("2024"));
    assert!(matches!(
        err,
        CruiseError::UnreachableSite { ref reason, .. } if reason == "HTTP 503"
    ));
}

#[tokio::test]
async fn test_malformed_calendar_fails_scrape() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, LANDING_PATH, landing_page(&[("2023", "/a")])).await;
    mount_page(
        &mock_server,
        "/a",
        year_page(&[month("January"), listing(None, Some("Orphan"))]),
    )
    .await;

    let landing_url = format!("{}{}", base_url, LANDING_PATH);
    let session = ScrapeSession::new(create_test_config(&base_url), &landing_url)
        .expect("Failed to create session");
    let err = session.run().await.expect_err("Scrape should fail");

    match err {
        CruiseError::MalformedCalendar {
            year,
            month,
            position,
        } => {
            assert_eq!(year, "2023");
            assert_eq!(month, "January");
            assert_eq!(position, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_landing_url_makes_no_request() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let landing_url = format!("{}/cruise-ships/santorini.html", base_url);
    let result = ScrapeSession::new(create_test_config(&base_url), &landing_url);

    assert!(matches!(result, Err(CruiseError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_scrape_with_config_file_and_json_output() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/destinations/malta.html",
        r#"<html><body><nav class="years"><a href="/m2024">2024</a></nav></body></html>"#
            .to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/m2024",
        r#"<html><body><main>
            <h3 class="month">June</h3>
            <p class="row"><b><a>12</a></b><i><a>Sun Princess</a></i></p>
        </main></body></html>"#
            .to_string(),
    )
    .await;

    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"
[site]
base-url = "{}"
landing-prefix = "/destinations/"

[selectors]
year-links = "nav.years a"
year-content = "main"
calendar-nodes = "h3.month, p.row"
month-class = "month"
listing-day = "b a"
listing-ship = "i a"

[output]
format = "json"
"#,
        base_url
    )
    .unwrap();
    config_file.flush().unwrap();

    let config = load_config(config_file.path()).expect("Failed to load config");
    assert_eq!(config.output.format, OutputFormat::Json);

    let landing_url = format!("{}/destinations/malta.html", base_url);
    let session = ScrapeSession::new(config, &landing_url).expect("Failed to create session");
    let dataset = session.run().await.expect("Scrape failed");

    let rendered = render(&dataset, OutputFormat::Json, &landing_url).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("malta.json");
    write_output(&rendered, Some(&out_path)).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!({"2024": {"June": {"12": ["Sun Princess"]}}})
    );
}
