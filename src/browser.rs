use std::sync::Arc;

use anyhow::Context;
use headless_chrome::{Browser, LaunchOptionsBuilder, Tab};
use log::info;

/// Navigate to a url and return the fully rendered markup.
///
/// Implementations block until the page has finished loading, so callers can
/// parse the result immediately.
pub(crate) trait PageFetcher {
    fn fetch(&self, url: &str) -> anyhow::Result<String>;
}

/// One headless browser with a single tab that is reused for every
/// navigation. The browser process lives exactly as long as this value, so
/// dropping the session closes it on every exit path.
pub(crate) struct BrowserSession {
    _browser: Browser,
    tab: Arc<Tab>,
}

impl BrowserSession {
    pub(crate) fn launch() -> anyhow::Result<Self> {
        let options = LaunchOptionsBuilder::default()
            .headless(true)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to configure browser launch: {e}"))?;
        let browser = Browser::new(options).context("Failed to launch headless browser")?;
        let tab = browser.new_tab().context("Failed to open a browser tab")?;
        Ok(Self {
            _browser: browser,
            tab,
        })
    }
}

impl PageFetcher for BrowserSession {
    fn fetch(&self, url: &str) -> anyhow::Result<String> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .with_context(|| format!("Failed to load {url}"))?;
        self.tab.get_content().context("Failed to read page content")
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        info!("Closing browser session");
    }
}
