//! Harvester runs: stage sequencing, output files and stage-tagged failures.

use std::fs;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use siteharvest::app::{HarvestError, Harvester, Result};
use siteharvest::browser::ReviewPage;
use siteharvest::config::Config;
use siteharvest::domain::review::ReviewCard;
use siteharvest::domain::{CatalogItem, Review};
use siteharvest::harvest::Stage;

fn config(server_uri: &str, out: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.site.base_url = server_uri.to_string();
    config.site.request_timeout_secs = 5;
    config.testimonials.page_delay_ms = 0;
    config.reviews.settle_ms = 0;
    config.output.dir = out.to_path_buf();
    config
}

async fn mount_products(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Reviews page whose load-more control reveals `reveals` more elements per click.
struct ScriptedPage {
    cards: Vec<ReviewCard>,
    visible: Mutex<usize>,
    reveals: Mutex<Vec<usize>>,
    closed: bool,
}

#[async_trait]
impl ReviewPage for ScriptedPage {
    async fn open(&mut self, _url: &str) -> Result<()> {
        Ok(())
    }

    async fn wait_for_reviews(&self, _timeout: Duration) -> Result<()> {
        Ok(())
    }

    async fn query_reviews(&self) -> Result<Vec<ReviewCard>> {
        let visible = *self.visible.lock().unwrap();
        Ok(self.cards[..visible].to_vec())
    }

    async fn load_more(&self) -> Result<bool> {
        let mut reveals = self.reveals.lock().unwrap();
        if reveals.is_empty() {
            return Ok(false);
        }
        *self.visible.lock().unwrap() += reveals.remove(0);
        Ok(true)
    }

    async fn close(&mut self) {
        self.closed = true;
    }
}

#[tokio::test]
async fn catalog_then_testimonials_writes_both_files() {
    let server = MockServer::start().await;
    let out = tempfile::tempdir().unwrap();

    mount_products(
        &server,
        "1",
        r#"<div class="row product"><div class="col-8 description"><h3><a>Tea</a></h3></div><div class="price">$3</div></div>"#,
    )
    .await;
    mount_products(&server, "2", "<html></html>").await;

    Mock::given(method("GET"))
        .and(path("/testimonials"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<script id="appData">{"x-secret-token": "t0k"}</script>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/testimonials"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<div class="testimonial"><p class="text">Nice</p><span class="rating"><svg></svg></span></div>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/testimonials"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let harvester = Harvester::new(config(&server.uri(), out.path())).unwrap();
    let summaries = harvester
        .run(&[Stage::Catalog, Stage::Testimonials])
        .await
        .unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].count, 1);
    assert_eq!(summaries[1].count, 1);

    let products: Vec<CatalogItem> =
        serde_json::from_str(&fs::read_to_string(out.path().join("products_data.json")).unwrap()).unwrap();
    assert_eq!(products[0].name, "Tea");
    assert_eq!(products[0].price, "$3");

    let testimonials: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("testimonials_data.json")).unwrap()).unwrap();
    assert_eq!(
        testimonials,
        serde_json::json!([{"author": "User", "rating": 1, "text": "Nice"}])
    );
}

#[tokio::test]
async fn failed_stage_is_named_and_earlier_output_kept() {
    let server = MockServer::start().await;
    let out = tempfile::tempdir().unwrap();

    mount_products(&server, "1", "<html><body></body></html>").await;
    Mock::given(method("GET"))
        .and(path("/testimonials"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>no payload</html>"))
        .mount(&server)
        .await;

    let harvester = Harvester::new(config(&server.uri(), out.path())).unwrap();
    let err = harvester
        .run(&[Stage::Catalog, Stage::Testimonials])
        .await
        .unwrap_err();

    match &err {
        HarvestError::Stage { stage, source } => {
            assert_eq!(*stage, Stage::Testimonials);
            assert!(matches!(**source, HarvestError::Configuration(_)));
        }
        other => panic!("expected stage error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("testimonials stage failed"));

    assert_eq!(fs::read_to_string(out.path().join("products_data.json")).unwrap(), "[]");
    assert!(!out.path().join("testimonials_data.json").exists());
}

#[tokio::test]
async fn reviews_four_then_two_more_written_in_discovery_order() {
    let out = tempfile::tempdir().unwrap();
    let harvester = Harvester::new(config("http://127.0.0.1:9", out.path())).unwrap();

    let cards = (1..=6)
        .map(|n| ReviewCard {
            date: Some(format!("2023-02-0{n}")),
            stars: Some(n),
            text: Some(format!("Review number {n}")),
        })
        .collect();
    let mut page = ScriptedPage {
        cards,
        visible: Mutex::new(4),
        reveals: Mutex::new(vec![2]),
        closed: false,
    };

    let summary = harvester.run_reviews_with(&mut page).await.unwrap();

    assert!(page.closed);
    assert_eq!(summary.count, 6);
    assert_eq!(summary.skipped, 0);

    let reviews: Vec<Review> = serde_json::from_str(&fs::read_to_string(summary.path).unwrap()).unwrap();
    let dates: Vec<_> = reviews.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(
        dates,
        ["2023-02-01", "2023-02-02", "2023-02-03", "2023-02-04", "2023-02-05", "2023-02-06"]
    );
    assert_eq!(reviews[2].rating, 3);
}
