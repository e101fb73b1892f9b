use moltbook_common::{CrawlConfig, MoltbookError};
use moltbook_crawler::crawl::{crawl, crawl_with, ItemCapturer};
use moltbook_crawler::item::ExtractedItem;

struct FailingCapturer;

#[async_trait::async_trait]
impl ItemCapturer for FailingCapturer {
    async fn capture(&self, _: &CrawlConfig) -> moltbook_common::Result<Vec<ExtractedItem>> {
        Err(MoltbookError::Config("forced failure".to_string()))
    }
}

struct StaticCapturer(Vec<ExtractedItem>);

#[async_trait::async_trait]
impl ItemCapturer for StaticCapturer {
    async fn capture(&self, _: &CrawlConfig) -> moltbook_common::Result<Vec<ExtractedItem>> {
        Ok(self.0.clone())
    }
}

fn item(index: usize, title: &str) -> ExtractedItem {
    ExtractedItem {
        index,
        title: title.to_string(),
        description: "desc".to_string(),
        text: title.to_string(),
        html: format!("<div><h3>{title}</h3></div>"),
    }
}

#[tokio::test]
async fn unreachable_webdriver_yields_empty_list() {
    // Nothing listens here; driver construction fails and the error must not
    // escape the crawl boundary.
    let config = CrawlConfig {
        webdriver_url: "http://127.0.0.1:1".to_string(),
        ..CrawlConfig::default()
    };
    let items = crawl(&config).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn capturer_failure_collapses_to_empty_list() {
    let items = crawl_with(&FailingCapturer, &CrawlConfig::default()).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn successful_capture_passes_items_through_in_order() {
    let expected = vec![item(0, "Alpha"), item(1, "Beta")];
    let items = crawl_with(&StaticCapturer(expected.clone()), &CrawlConfig::default()).await;
    assert_eq!(items, expected);
}
