use std::time::Duration;

use anyhow::Result;
use fantoccini::{elements::Element, Client, Locator};

use crate::moltbook_browser::stealth::StealthScripts;

/// Page-scoped wrapper providing presence waits and element queries.
pub struct MoltbookPage {
    pub(crate) client: Client,
}

impl MoltbookPage {
    /// Construct a page wrapper around an existing WebDriver client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Navigate to `url` and apply the automation evasion script.
    pub async fn goto(&mut self, url: &str) -> Result<()> {
        self.client.goto(url).await?;
        self.client
            .execute(StealthScripts::webdriver_evasion(), vec![])
            .await?;
        Ok(())
    }

    /// Block until at least one element matching `selector` is present in
    /// the rendered page, or `timeout` elapses.
    pub async fn wait_for_presence(&self, selector: &str, timeout: Duration) -> Result<()> {
        self.client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await?;
        Ok(())
    }

    /// Find zero or more elements by CSS selector.
    pub async fn find_elements(&self, selector: &str) -> Result<Vec<MoltbookElement>> {
        let elements = self.client.find_all(Locator::Css(selector)).await?;
        Ok(elements.into_iter().map(MoltbookElement::new).collect())
    }
}

/// Wrapper for DOM elements providing the lookups the extraction pass needs.
pub struct MoltbookElement {
    pub element: Element,
}

impl MoltbookElement {
    /// Construct an element wrapper.
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Find a child element by CSS selector.
    pub async fn find_element(&self, selector: &str) -> Result<MoltbookElement> {
        let element = self.element.find(Locator::Css(selector)).await?;
        Ok(MoltbookElement::new(element))
    }

    /// Return the element's visible text.
    pub async fn get_inner_text(&self) -> Result<String> {
        self.element.text().await.map_err(anyhow::Error::from)
    }

    /// Return the serialized outer HTML, including the element itself.
    pub async fn get_outer_html(&self) -> Result<String> {
        self.element.html(false).await.map_err(anyhow::Error::from)
    }
}
