// src/browser.rs
//! Live `Page` implementation over a visible Chrome session.
//!
//! Anchors are addressed as indexed XPath queries and ancestors as `/..`
//! steps appended to them, so every read re-resolves against the live DOM
//! instead of holding remote object handles that go stale the moment the
//! site re-renders a card.

use std::error::Error;
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::page::{Page, PageError, PageNode};
use crate::specs::PlatformSpec;

/// The human drives location/search setup at their own pace; don't let the
/// session reap itself while they do.
const IDLE_TIMEOUT_SECS: u64 = 3600;

pub struct BrowserPage {
    // Dropping the Browser kills the Chrome process. Hold it for the run.
    _browser: Browser,
    tab: Arc<Tab>,
}

/// Launch a visible Chrome with the platform's flags and load its home page.
pub fn launch(spec: &PlatformSpec) -> Result<BrowserPage, Box<dyn Error>> {
    let mut args: Vec<&OsStr> = vec![OsStr::new("--start-maximized")];
    for a in spec.chrome_args {
        args.push(OsStr::new(a));
    }

    let opts = LaunchOptions::default_builder()
        .headless(false)
        .sandbox(false)
        .args(args)
        .idle_browser_timeout(Duration::from_secs(IDLE_TIMEOUT_SECS))
        .build()?;

    let browser = Browser::new(opts)?;
    let tab = browser.new_tab()?;
    tab.navigate_to(spec.home_url)?;
    logf!("{}: browser up, {} loaded", spec.name, spec.home_url);

    Ok(BrowserPage { _browser: browser, tab })
}

pub struct BrowserNode {
    tab: Arc<Tab>,
    xpath: String,
}

impl Page for BrowserPage {
    type Node = BrowserNode;

    fn find_text_nodes(&self, marker: &str) -> Result<Vec<BrowserNode>, PageError> {
        let query = format!("//*[contains(text(), '{marker}')]");
        let count = match self.tab.find_elements_by_xpath(&query) {
            Ok(els) => els.len(),
            // The CDP search reports zero matches as a lookup failure; the
            // heuristic treats it as a normal empty anchor set.
            Err(e) if is_missing(&e.to_string()) => 0,
            Err(e) => return Err(PageError::Session(e.to_string())),
        };
        Ok((1..=count)
            .map(|i| BrowserNode {
                tab: self.tab.clone(),
                xpath: format!("({query})[{i}]"),
            })
            .collect())
    }

    fn current_url(&self) -> String {
        self.tab.get_url()
    }
}

impl PageNode for BrowserNode {
    fn ancestor(&self, levels: usize) -> Result<Self, PageError> {
        let mut xpath = self.xpath.clone();
        for _ in 0..levels {
            xpath.push_str("/..");
        }
        // Resolve eagerly so a walk past the document root surfaces as
        // NotFound here, not as a read failure later.
        match self.tab.find_element_by_xpath(&xpath) {
            Ok(_) => Ok(BrowserNode { tab: self.tab.clone(), xpath }),
            Err(e) if is_missing(&e.to_string()) => Err(PageError::NotFound),
            Err(e) => Err(PageError::Session(e.to_string())),
        }
    }

    fn text(&self) -> Result<String, PageError> {
        let element = match self.tab.find_element_by_xpath(&self.xpath) {
            Ok(el) => el,
            Err(e) if is_missing(&e.to_string()) => return Err(PageError::NotFound),
            Err(e) => return Err(PageError::Session(e.to_string())),
        };
        element
            .get_inner_text()
            .map_err(|e| PageError::Session(e.to_string()))
    }
}

/// "No element found"-shaped errors from the devtools search.
fn is_missing(msg: &str) -> bool {
    let m = msg.to_ascii_lowercase();
    m.contains("no element") || m.contains("not found")
}
