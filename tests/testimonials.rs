//! Token bootstrap and API pagination against a local `wiremock` server.

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use siteharvest::app::HarvestError;
use siteharvest::config::{SiteConfig, TestimonialConfig};
use siteharvest::fetcher::HttpFetcher;
use siteharvest::harvest::{bootstrap_token, TestimonialExtractor};

const TOKEN: &str = "secret123";

fn site(server: &MockServer) -> SiteConfig {
    SiteConfig {
        base_url: server.uri(),
        request_timeout_secs: 5,
        ..Default::default()
    }
}

fn settings() -> TestimonialConfig {
    TestimonialConfig {
        page_delay_ms: 0,
        ..Default::default()
    }
}

fn landing(script: &str) -> String {
    format!("<html><head>{script}</head><body><h1>Testimonials</h1></body></html>")
}

fn testimonial(author: &str, stars: usize, text: &str) -> String {
    format!(
        r#"<div class="testimonial">
             <identicon-svg username="{author}"></identicon-svg>
             <span class="rating">{}</span>
             <p class="text">{text}</p>
           </div>"#,
        "<svg></svg>".repeat(stars)
    )
}

async fn mount_landing(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/testimonials"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_api_page(server: &MockServer, page: u32, response: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/testimonials"))
        .and(query_param("page", page.to_string()))
        .and(header("x-secret-token", TOKEN))
        .and(header("referer", format!("{}/testimonials", server.uri()).as_str()))
        .respond_with(response)
        .expect(calls)
        .named(format!("testimonials api page {page}"))
        .mount(server)
        .await;
}

async fn run(server: &MockServer) -> Result<Vec<siteharvest::domain::Testimonial>, HarvestError> {
    let site = site(server);
    let fetcher = HttpFetcher::new(&site).unwrap();
    let settings = settings();

    let token = bootstrap_token(&fetcher, &site, &settings).await?;
    let extractor = TestimonialExtractor::new(&settings, &site, &token)?;
    extractor.extract(&fetcher, &site).await
}

fn valid_landing() -> String {
    landing(&format!(
        r#"<script id="appData" type="application/json">{{"x-secret-token": "{TOKEN}"}}</script>"#
    ))
}

#[tokio::test]
async fn two_items_then_empty_body() {
    let server = MockServer::start().await;
    mount_landing(&server, valid_landing()).await;

    let page1 = format!("{}{}", testimonial("ana", 3, "Great!"), testimonial("bo", 5, "Superb"));
    mount_api_page(&server, 1, ResponseTemplate::new(200).set_body_string(page1), 1).await;
    mount_api_page(&server, 2, ResponseTemplate::new(200).set_body_string("  \n"), 1).await;
    mount_api_page(&server, 3, ResponseTemplate::new(200).set_body_string(testimonial("x", 1, "y")), 0).await;

    let items = run(&server).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].author, "ana");
    assert_eq!(items[0].rating, 3);
    assert_eq!(items[0].text, "Great!");
    assert_eq!(items[1].rating, 5);
}

#[tokio::test]
async fn stops_on_non_success_status() {
    let server = MockServer::start().await;
    mount_landing(&server, valid_landing()).await;

    mount_api_page(&server, 1, ResponseTemplate::new(200).set_body_string(testimonial("a", 1, "one")), 1).await;
    mount_api_page(&server, 2, ResponseTemplate::new(200).set_body_string(testimonial("b", 2, "two")), 1).await;
    mount_api_page(&server, 3, ResponseTemplate::new(403), 1).await;
    mount_api_page(&server, 4, ResponseTemplate::new(200).set_body_string(testimonial("c", 3, "three")), 0).await;

    let items = run(&server).await.unwrap();

    let texts: Vec<_> = items.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["one", "two"]);
}

#[tokio::test]
async fn stops_on_fragment_without_testimonials() {
    let server = MockServer::start().await;
    mount_landing(&server, valid_landing()).await;

    mount_api_page(&server, 1, ResponseTemplate::new(200).set_body_string(testimonial("a", 4, "one")), 1).await;
    mount_api_page(&server, 2, ResponseTemplate::new(200).set_body_string("<div class=\"end\">That's all</div>"), 1).await;
    mount_api_page(&server, 3, ResponseTemplate::new(200).set_body_string(testimonial("c", 3, "three")), 0).await;

    let items = run(&server).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].rating, 4);
}

#[tokio::test]
async fn missing_badge_attribute_falls_back_to_user() {
    let server = MockServer::start().await;
    mount_landing(&server, valid_landing()).await;

    let body = r#"<div class="testimonial"><identicon-svg></identicon-svg><p class="text">anon</p></div>"#;
    mount_api_page(&server, 1, ResponseTemplate::new(200).set_body_string(body), 1).await;
    mount_api_page(&server, 2, ResponseTemplate::new(200).set_body_string(""), 1).await;

    let items = run(&server).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].author, "User");
    assert_eq!(items[0].rating, 0);
}

#[tokio::test]
async fn missing_anchor_aborts_before_api_call() {
    let server = MockServer::start().await;
    mount_landing(&server, landing("")).await;
    mount_api_page(&server, 1, ResponseTemplate::new(200).set_body_string(testimonial("a", 1, "one")), 0).await;

    let err = run(&server).await.unwrap_err();
    assert!(matches!(err, HarvestError::Configuration(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_payload_aborts_before_api_call() {
    let server = MockServer::start().await;
    mount_landing(&server, landing(r#"<script id="appData">{"x-secret-token": "#)).await;
    mount_api_page(&server, 1, ResponseTemplate::new(200).set_body_string(testimonial("a", 1, "one")), 0).await;

    let err = run(&server).await.unwrap_err();
    assert!(matches!(err, HarvestError::Configuration(_)), "got {err:?}");
}

#[tokio::test]
async fn missing_token_field_aborts_before_api_call() {
    let server = MockServer::start().await;
    mount_landing(&server, landing(r#"<script id="appData">{"csrf": "abc"}</script>"#)).await;
    mount_api_page(&server, 1, ResponseTemplate::new(200).set_body_string(testimonial("a", 1, "one")), 0).await;

    let err = run(&server).await.unwrap_err();
    assert!(matches!(err, HarvestError::Configuration(msg) if msg.contains("x-secret-token")));
}

#[tokio::test]
async fn landing_page_error_status_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/testimonials"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = run(&server).await.unwrap_err();
    assert!(matches!(err, HarvestError::HttpStatus { status: 500, .. }));
}
