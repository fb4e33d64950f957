// src/browser.rs
//! The browser is an outside collaborator. Everything the session needs from
//! it fits in `PageDriver`: open a URL, read a block, click a control, close.
//!
//! `ChromeLauncher` is the real thing: `thirtyfour` talking WebDriver to a
//! running chromedriver, driven to completion on a private current-thread
//! runtime. Tests substitute their own `Launcher`.

use std::ops::{Deref, DerefMut};

use thirtyfour::ChromiumLikeCapabilities;
use thirtyfour::prelude::*;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info, warn};

use crate::error::{Result, ScrapeError};

/// Rendered text and inner HTML of one located element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawBlock {
    pub text: String,
    pub html: String,
}

impl RawBlock {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into(), html: s!() }
    }

    pub fn line_count(&self) -> usize {
        if self.text.is_empty() { 0 } else { self.text.split('\n').count() }
    }
}

pub trait PageDriver {
    fn open(&mut self, url: &str) -> Result<()>;

    /// `None` while nothing matches `xpath` yet.
    fn block(&mut self, xpath: &str) -> Result<Option<RawBlock>>;

    fn click(&mut self, xpath: &str) -> Result<()>;

    /// Must be safe to call more than once.
    fn close(&mut self) -> Result<()>;
}

pub trait Launcher {
    type Driver: PageDriver;

    fn launch(&self, headless: bool) -> Result<Self::Driver>;
}

/// Owns a launched driver and closes it on every exit path.
pub struct DriverGuard<D: PageDriver> {
    driver: D,
    released: bool,
}

impl<D: PageDriver> DriverGuard<D> {
    pub fn new(driver: D) -> Self {
        Self { driver, released: false }
    }

    /// Close now and surface the error; `Drop` can only log it.
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        self.driver.close()
    }
}

impl<D: PageDriver> Deref for DriverGuard<D> {
    type Target = D;
    fn deref(&self) -> &D { &self.driver }
}

impl<D: PageDriver> DerefMut for DriverGuard<D> {
    fn deref_mut(&mut self) -> &mut D { &mut self.driver }
}

impl<D: PageDriver> Drop for DriverGuard<D> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = self.driver.close() {
            warn!(error = %e, "Browser: close on unwind failed");
        }
    }
}

/* ---------------- chromedriver ---------------- */

const CHROME_ARGS: [&str; 3] = ["--no-sandbox", "--disable-dev-shm-usage", "--window-size=1920,1080"];

#[derive(Clone, Debug)]
pub struct ChromeLauncher {
    webdriver_url: String,
}

impl ChromeLauncher {
    pub fn new(webdriver_url: impl Into<String>) -> Self {
        Self { webdriver_url: webdriver_url.into() }
    }
}

impl Launcher for ChromeLauncher {
    type Driver = ChromeDriver;

    fn launch(&self, headless: bool) -> Result<ChromeDriver> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ScrapeError::Runtime)?;

        let mut caps = DesiredCapabilities::chrome();
        if headless {
            caps.add_arg("--headless=new")?;
        }
        for arg in CHROME_ARGS {
            caps.add_arg(arg)?;
        }

        let driver = rt.block_on(WebDriver::new(&self.webdriver_url, caps))?;
        info!(server = %self.webdriver_url, headless, "Browser: session started");
        Ok(ChromeDriver { rt, driver: Some(driver) })
    }
}

pub struct ChromeDriver {
    rt: Runtime,
    driver: Option<WebDriver>,
}

impl ChromeDriver {
    fn session(&self) -> Result<&WebDriver> {
        self.driver.as_ref().ok_or(ScrapeError::SessionClosed)
    }
}

impl PageDriver for ChromeDriver {
    fn open(&mut self, url: &str) -> Result<()> {
        let driver = self.session()?;
        self.rt.block_on(driver.goto(url))?;
        debug!(url, "Browser: opened");
        Ok(())
    }

    fn block(&mut self, xpath: &str) -> Result<Option<RawBlock>> {
        let driver = self.session()?;
        let found = self.rt.block_on(async {
            let Some(el) = driver.find_all(By::XPath(xpath)).await?.into_iter().next() else {
                return Ok::<_, thirtyfour::error::WebDriverError>(None);
            };
            let text = el.text().await?;
            let html = el.inner_html().await?;
            Ok(Some(RawBlock { text, html }))
        })?;
        Ok(found)
    }

    fn click(&mut self, xpath: &str) -> Result<()> {
        let driver = self.session()?;
        self.rt.block_on(async {
            driver.find(By::XPath(xpath)).await?.click().await
        })?;
        debug!(xpath, "Browser: clicked");
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(driver) = self.driver.take() {
            self.rt.block_on(driver.quit())?;
            info!("Browser: session closed");
        }
        Ok(())
    }
}
