//! End-to-end tests for the review pipeline
//!
//! These tests serve realistic review markup from wiremock servers and run
//! the full scrape, score, sort and truncate cycle against it.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dealer_reviews::scrape::{build_http_client, get_json, ReviewScraper};
use dealer_reviews::{collect_top_reviews, Config, ScraperConfig, ScrapeError, SortOrder};

/// Builds one review block the way DealerRater renders it
fn review_block(
    name: &str,
    overall: u32,
    employees: &[u32],
    title: &str,
    body: &str,
    recommend: &str,
    specific: &[(&str, u32)],
) -> String {
    let employee_widgets: String = employees
        .iter()
        .map(|score| format!(r#"<div class="rating-static rating-{score}"></div>"#))
        .collect();

    let specific_rows: String = specific
        .iter()
        .map(|(label, score)| {
            format!(
                r#"<div class="tr">
                     <div class="td small-text">{label}</div>
                     <div class="rating-static-indv rating-{score} td"></div>
                   </div>"#
            )
        })
        .collect();

    format!(
        r#"<div class="review-entry">
             <div class="rating-static rating-{overall} hidden-xs"></div>
             <span class="italic font-16 bolder notranslate">by {name}</span>
             <p class="font-16 review-content">
               <span class="review-title bolder">{title}</span>
               <span class="review-whole">{body}</span>
             </p>
             <div class="employees-wrapper">{employee_widgets}</div>
             <div class="review-ratings-all">
               <div class="table">
                 {specific_rows}
                 <div class="tr">
                   <div class="td small-text">Recommend Dealer</div>
                   <div class="td small-text boldest">{recommend}</div>
                 </div>
               </div>
             </div>
           </div>"#
    )
}

fn page_html(blocks: &[String]) -> String {
    format!("<html><body>{}</body></html>", blocks.concat())
}

/// Scores 40 + 16 + 8 + 2 + 12 = 78
fn alice() -> String {
    review_block(
        "Alice",
        40,
        &[50, 30],
        "Amazing experience!!",
        "Wow such happy!!",
        "Yes",
        &[("Pricing", 50), ("Customer Service", 10)],
    )
}

/// Scores 8 + 4 + 8 = 20
fn bob() -> String {
    review_block(
        "Bob",
        20,
        &[20],
        "Okay visit.",
        "Nothing else.",
        "No",
        &[("Pricing", 20)],
    )
}

/// Scores 20 - 2 + 12 = 30
fn cara() -> String {
    review_block(
        "Cara",
        50,
        &[],
        "Horrible waste of time!!",
        "Would not return.",
        "No",
        &[("Pricing", 30)],
    )
}

async fn mount_page(server: &MockServer, page_number: u32, html: String) {
    Mock::given(method("GET"))
        .and(path(format!("/page{page_number}/")))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

async fn mount_failing_page(server: &MockServer, page_number: u32, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/page{page_number}/")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

fn test_config(base_url: &str, pages: u32, count: usize, sort: SortOrder) -> Config {
    Config {
        scraper: ScraperConfig {
            pages,
            count,
            dealership_url: base_url.to_owned(),
            sort,
            user_agent: "dealer-reviews-tests/1.0".to_owned(),
        },
    }
}

#[tokio::test]
async fn test_full_pipeline_over_two_pages() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_html(&[alice(), bob()])).await;
    mount_page(&server, 2, page_html(&[cara()])).await;

    let config = test_config(&server.uri(), 2, 3, SortOrder::Asc);
    let reviews = collect_top_reviews(&config).await.unwrap();

    let names: Vec<&str> = reviews.iter().map(|r| r.reviewer()).collect();
    let scores: Vec<i64> = reviews.iter().map(|r| r.score()).collect();
    assert_eq!(names, vec!["Bob", "Cara", "Alice"]);
    assert_eq!(scores, vec![20, 30, 78]);
}

#[tokio::test]
async fn test_descending_sort_and_truncation() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_html(&[alice(), bob()])).await;
    mount_page(&server, 2, page_html(&[cara()])).await;

    let config = test_config(&server.uri(), 2, 1, SortOrder::Desc);
    let reviews = collect_top_reviews(&config).await.unwrap();

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].reviewer(), "Alice");
    assert_eq!(reviews[0].score(), 78);
}

#[tokio::test]
async fn test_http_failure_on_first_page_yields_empty() {
    let server = MockServer::start().await;
    mount_failing_page(&server, 1, 500).await;

    let config = test_config(&server.uri(), 1, 3, SortOrder::Asc);
    let reviews = collect_top_reviews(&config).await.unwrap();

    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_missing_page_yields_empty() {
    // Nothing mounted: the server answers 404
    let server = MockServer::start().await;

    let config = test_config(&server.uri(), 1, 3, SortOrder::Asc);
    let reviews = collect_top_reviews(&config).await.unwrap();

    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_connection_error_yields_empty() {
    // Discard port, nothing listens there
    let config = test_config("http://127.0.0.1:9", 1, 3, SortOrder::Asc);
    let reviews = collect_top_reviews(&config).await.unwrap();

    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_later_http_failure_keeps_earlier_pages() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_html(&[alice(), bob()])).await;
    mount_failing_page(&server, 2, 500).await;

    let config = test_config(&server.uri(), 2, 3, SortOrder::Asc);
    let reviews = collect_top_reviews(&config).await.unwrap();

    let names: Vec<&str> = reviews.iter().map(|r| r.reviewer()).collect();
    assert_eq!(names, vec!["Bob", "Alice"]);
}

#[tokio::test]
async fn test_failure_stops_processing_following_pages() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_html(&[alice()])).await;
    mount_failing_page(&server, 2, 500).await;

    // Page 3 must never be requested once page 2 failed
    Mock::given(method("GET"))
        .and(path("/page3/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_html(&[bob()])))
        .expect(0)
        .mount(&server)
        .await;

    let config = test_config(&server.uri(), 3, 3, SortOrder::Asc);
    let reviews = collect_top_reviews(&config).await.unwrap();

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].reviewer(), "Alice");
}

#[tokio::test]
async fn test_extraction_failure_before_any_success_yields_empty() {
    let server = MockServer::start().await;
    // The overall-score widget is missing its signature classes
    let broken = alice().replace("rating-static rating-40 hidden-xs", "rating-static");
    mount_page(&server, 1, page_html(&[broken])).await;

    let config = test_config(&server.uri(), 1, 3, SortOrder::Asc);
    let reviews = collect_top_reviews(&config).await.unwrap();

    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_extraction_failure_after_success_keeps_earlier_pages() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_html(&[alice()])).await;

    let broken = bob().replace("italic font-16 bolder notranslate", "italic");
    mount_page(&server, 2, page_html(&[broken])).await;

    let config = test_config(&server.uri(), 2, 3, SortOrder::Asc);
    let reviews = collect_top_reviews(&config).await.unwrap();

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].reviewer(), "Alice");
}

#[tokio::test]
async fn test_get_json_decodes_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"reviews": 2})))
        .mount(&server)
        .await;

    let client = build_http_client("dealer-reviews-tests/1.0").unwrap();
    let value = get_json(&client, &format!("{}/stats/", server.uri()))
        .await
        .unwrap();

    assert_eq!(value["reviews"], 2);
}

#[tokio::test]
async fn test_get_json_rejects_invalid_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = build_http_client("dealer-reviews-tests/1.0").unwrap();
    let result = get_json(&client, &format!("{}/stats/", server.uri())).await;

    assert!(matches!(result, Err(ScrapeError::JsonDecode { .. })));
}

#[tokio::test]
async fn test_scraper_returns_raw_records() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page_html(&[alice()])).await;

    let scraper = ReviewScraper::new("dealer-reviews-tests/1.0").unwrap();
    let records = scraper.scrape_reviews(1, &server.uri()).await;

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.reviewer, "Alice");
    assert_eq!(record.overall_score, 40);
    assert_eq!(record.employee_scores, vec![50, 30]);
    assert_eq!(record.message, "Amazing experience!! Wow such happy!!");
    assert!(record.recommend_dealer);
    assert_eq!(record.specific_scores["pricing"], 50);
    assert_eq!(record.specific_scores["customer-service"], 10);
}
