use std::collections::HashMap;

use anyhow::Result;
use fantoccini::{Client, ClientBuilder};
use moltbook_common::CrawlConfig;
use serde_json::json;
use tracing::debug;
use webdriver::capabilities::Capabilities;

use crate::moltbook_browser::page::MoltbookPage;
use crate::moltbook_browser::stealth::build_browser_arguments;

/// Thin wrapper around a `fantoccini` WebDriver client configured for
/// crawling client-rendered pages.
pub struct MoltbookDriver {
    pub client: Client,
}

impl MoltbookDriver {
    /// Create a new driver connected to the WebDriver endpoint named in
    /// `config` (default: Chromedriver on `http://localhost:9515`).
    ///
    /// Launch and connection failures propagate unmodified; there are no
    /// retries.
    pub async fn new(config: &CrawlConfig) -> Result<Self> {
        let mut caps = Capabilities::new();
        let mut chrome_opts = HashMap::new();

        let mut args = build_browser_arguments(&config.window_size, &config.locale);
        if config.headless {
            args.push("--headless=new".to_string());
        }

        chrome_opts.insert("args".to_string(), json!(args));
        // Suppress the default automation switches; the JS evasion covers the rest.
        chrome_opts.insert("excludeSwitches".to_string(), json!(["enable-automation"]));
        chrome_opts.insert("useAutomationExtension".to_string(), json!(false));

        caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&config.webdriver_url)
            .await?;
        debug!(
            target: "browser.driver",
            endpoint = %config.webdriver_url,
            headless = config.headless,
            "webdriver session established"
        );

        Ok(Self { client })
    }

    /// Navigate to `url` and return a [`MoltbookPage`] with the evasion
    /// script applied.
    pub async fn goto(&mut self, url: &str) -> Result<MoltbookPage> {
        let mut page = MoltbookPage::new(self.client.clone());
        page.goto(url).await?;
        Ok(page)
    }

    /// Close the underlying browser session.
    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}
