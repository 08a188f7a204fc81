//! Browser session lifecycle.
//!
//! One session per scenario: launch the browser over the Chrome DevTools
//! Protocol, hand out pages, and close everything on teardown. The CDP
//! event handler runs on its own task for the lifetime of the session.

use crate::config::{BrowserFlavor, Config};
use crate::result::{ComprarError, ComprarResult};
use crate::wait;
use chromiumoxide::browser::{Browser, BrowserConfig as CdpConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::time::Duration;

/// Attempts made to launch the browser before giving up
const LAUNCH_ATTEMPTS: u32 = 3;

/// Initial backoff delay between launch attempts
const LAUNCH_BACKOFF: Duration = Duration::from_millis(500);

/// A live browser owned by exactly one scenario
#[derive(Debug)]
pub struct BrowserSession {
    browser: Browser,
    handler: tokio::task::JoinHandle<()>,
    closed: bool,
}

impl BrowserSession {
    /// Launch a browser according to the configuration.
    ///
    /// Launching is retried with exponential backoff; starting the child
    /// process is the one genuinely flaky operation in the suite.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::BrowserLaunch`] if every attempt fails.
    pub async fn launch(config: &Config) -> ComprarResult<Self> {
        if config.flavor != BrowserFlavor::Chromium {
            tracing::warn!(
                requested = config.flavor.as_str(),
                "only chromium is supported over CDP; falling back"
            );
        }
        if config.video {
            tracing::warn!("VIDEO=on requested but the CDP driver cannot record; ignoring");
        }

        let headless = config.headless;
        wait::retry_with_backoff(LAUNCH_ATTEMPTS, LAUNCH_BACKOFF, || async move {
            Self::launch_once(headless).await
        })
        .await
    }

    async fn launch_once(headless: bool) -> ComprarResult<Self> {
        let mut builder = CdpConfig::builder().window_size(1920, 1080).no_sandbox();
        if !headless {
            builder = builder.with_head();
        }
        let cdp_config = builder
            .build()
            .map_err(|message| ComprarError::BrowserLaunch { message })?;

        let (browser, mut handler) =
            Browser::launch(cdp_config)
                .await
                .map_err(|e| ComprarError::BrowserLaunch {
                    message: e.to_string(),
                })?;

        // drive CDP events until the connection drops
        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        tracing::info!(headless, "browser launched");
        Ok(Self {
            browser,
            handler: handle,
            closed: false,
        })
    }

    /// Open a fresh page
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Page`] if the page cannot be created.
    pub async fn new_page(&self) -> ComprarResult<Page> {
        self.browser
            .new_page("about:blank")
            .await
            .map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })
    }

    /// Close the browser and stop the event handler.
    ///
    /// Safe to call once per session; teardown always reaches this even
    /// after a failed scenario.
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::BrowserLaunch`] if shutdown fails.
    pub async fn close(&mut self) -> ComprarResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        let result = self
            .browser
            .close()
            .await
            .map_err(|e| ComprarError::BrowserLaunch {
                message: e.to_string(),
            });
        self.handler.abort();
        tracing::info!("browser closed");
        result.map(|_| ())
    }
}
