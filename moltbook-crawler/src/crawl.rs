use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use moltbook_common::{CrawlConfig, MoltbookError, SettleWait};
use moltbook_drivers::moltbook_browser::driver::MoltbookDriver;
use moltbook_drivers::moltbook_browser::page::{MoltbookElement, MoltbookPage};
use tokio::time::sleep;
use tracing::{error, info, warn};
use url::Url;

use crate::item::{assemble_items, ExtractedItem, RawElement};

/// Page the crawler navigates to.
pub const TARGET_URL: &str = "https://www.moltbook.com/";
/// Selector matching the content cards on the page.
pub const TARGET_SELECTOR: &str = ".flex-1.min-w-0";

const TITLE_SELECTOR: &str = "h3";
const DESCRIPTION_SELECTOR: &str = "p";

/// Something that can produce the ordered item list for one crawl pass.
#[async_trait]
pub trait ItemCapturer: Send + Sync {
    async fn capture(&self, config: &CrawlConfig) -> moltbook_common::Result<Vec<ExtractedItem>>;
}

/// Concrete capturer backed by the fantoccini driver.
pub struct FantocciniCapturer;

#[async_trait]
impl ItemCapturer for FantocciniCapturer {
    async fn capture(&self, config: &CrawlConfig) -> moltbook_common::Result<Vec<ExtractedItem>> {
        let url = Url::parse(TARGET_URL)
            .map_err(|e| MoltbookError::Config(format!("invalid target url: {e}")))?;

        let mut driver = MoltbookDriver::new(config).await?;
        let result = run_pass(&mut driver, &url, config).await;
        // The session must end on every exit path, including failed passes.
        if let Err(e) = driver.close().await {
            warn!(target: "crawler", error = %e, "failed to close webdriver session");
        }
        result.map_err(MoltbookError::from)
    }
}

async fn run_pass(
    driver: &mut MoltbookDriver,
    url: &Url,
    config: &CrawlConfig,
) -> Result<Vec<ExtractedItem>> {
    let page = driver.goto(url.as_str()).await?;

    let timeout = Duration::from_secs(config.wait_timeout_secs);
    if let Err(e) = page.wait_for_presence(TARGET_SELECTOR, timeout).await {
        // Not fatal: the page may still yield elements after the settle wait.
        warn!(
            target: "crawler",
            selector = TARGET_SELECTOR,
            error = %e,
            "timed out waiting for target elements"
        );
    }

    settle(&page, &config.settle).await?;

    let elements = page.find_elements(TARGET_SELECTOR).await?;
    let mut raw = Vec::with_capacity(elements.len());
    for element in &elements {
        raw.push(read_element(element).await?);
    }

    Ok(assemble_items(raw))
}

/// Read one matched element's fields. The title and description lookups are
/// best-effort; failures reading the full text or markup abort the pass.
async fn read_element(element: &MoltbookElement) -> Result<RawElement> {
    Ok(RawElement {
        title: optional_text(element, TITLE_SELECTOR).await,
        description: optional_text(element, DESCRIPTION_SELECTOR).await,
        text: element.get_inner_text().await?.trim().to_string(),
        html: element.get_outer_html().await?,
    })
}

/// Look up a child element and read its text; `None` when the lookup misses
/// or the text cannot be read.
async fn optional_text(element: &MoltbookElement, selector: &str) -> Option<String> {
    match element.find_element(selector).await {
        Ok(child) => child.get_inner_text().await.ok(),
        Err(_) => None,
    }
}

/// Let client-side rendering settle before the final element query.
async fn settle(page: &MoltbookPage, wait: &SettleWait) -> Result<()> {
    match wait {
        SettleWait::Fixed { secs } => {
            sleep(Duration::from_secs(*secs)).await;
        }
        SettleWait::Stabilize {
            poll_interval_ms,
            max_attempts,
        } => {
            let mut last = page.find_elements(TARGET_SELECTOR).await?.len();
            for _ in 0..*max_attempts {
                sleep(Duration::from_millis(*poll_interval_ms)).await;
                let count = page.find_elements(TARGET_SELECTOR).await?.len();
                if count == last {
                    break;
                }
                last = count;
            }
        }
    }
    Ok(())
}

/// Crawl moltbook.com and return the ordered item list.
///
/// Every failure in the pass is logged and collapsed to an empty list; this
/// function never propagates an error to the caller.
pub async fn crawl(config: &CrawlConfig) -> Vec<ExtractedItem> {
    crawl_with(&FantocciniCapturer, config).await
}

/// Run a crawl through an arbitrary [`ItemCapturer`].
pub async fn crawl_with(capturer: &dyn ItemCapturer, config: &CrawlConfig) -> Vec<ExtractedItem> {
    match capturer.capture(config).await {
        Ok(items) => {
            info!(target: "crawler", count = items.len(), "crawl finished");
            items
        }
        Err(e) => {
            error!(target: "crawler", error = %e, "crawl failed");
            Vec::new()
        }
    }
}
