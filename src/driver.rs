//! Page driver primitives.
//!
//! Thin, auto-waiting wrappers over the CDP page that every page object
//! builds on: navigate, click, fill, read text/attribute/count, select,
//! hover, press, check, visibility waits, screenshots. Queries return an
//! explicit [`Lookup`] so "verified absent" is distinguishable from "the
//! query errored"; transport failures always propagate as `Err`.
//!
//! Element-state queries run as JavaScript expressions built from the
//! selector, so an absent element is an answer rather than an exception.

use crate::config::Config;
use crate::result::{ComprarError, ComprarResult};
use crate::trace::{ActionKind, ActionOutcome, ActionTrace};
use crate::wait::{self, WaitOptions};
use chromiumoxide::cdp::browser_protocol::page::{
    CaptureScreenshotFormat, CaptureScreenshotParams,
};
use chromiumoxide::page::Page;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Two-state result of an element lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The element was found; carries the queried value
    Found(T),
    /// The selector matched nothing
    Absent,
}

impl<T> Lookup<T> {
    /// The found value, or `None` when absent
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Whether the element was found
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl<T: Default> Lookup<T> {
    /// The found value, or the type's default when absent.
    ///
    /// This is the original suite's lossy behavior, kept available but
    /// opt-in at the call site.
    pub fn or_default(self) -> T {
        self.found().unwrap_or_default()
    }
}

/// Visibility state of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Present and rendered
    Visible,
    /// Present but not rendered (display none, zero box, hidden)
    Hidden,
    /// Selector matched nothing
    Absent,
}

/// Cheap-clone handle for driving one page.
///
/// Clones share the underlying CDP page and the scenario's action trace,
/// so every page object created from the same driver records into one
/// timeline.
#[derive(Debug, Clone)]
pub struct PageDriver {
    page: Page,
    trace: Arc<Mutex<ActionTrace>>,
    wait_opts: WaitOptions,
    load_timeout_ms: u64,
    slow_mo: Duration,
}

impl PageDriver {
    /// Wrap a CDP page with the configured timeouts
    #[must_use]
    pub fn new(page: Page, config: &Config) -> Self {
        Self {
            page,
            trace: Arc::new(Mutex::new(ActionTrace::new())),
            wait_opts: WaitOptions::default(),
            load_timeout_ms: config.load_timeout_ms,
            slow_mo: config.slow_mo(),
        }
    }

    /// Shared action trace for this scenario
    #[must_use]
    pub fn trace(&self) -> Arc<Mutex<ActionTrace>> {
        Arc::clone(&self.trace)
    }

    /// Wait options used for element-state polling
    #[must_use]
    pub const fn wait_opts(&self) -> WaitOptions {
        self.wait_opts
    }

    async fn record(
        &self,
        kind: ActionKind,
        target: &str,
        detail: Option<String>,
        outcome: ActionOutcome,
    ) {
        self.trace.lock().await.record(kind, target, detail, outcome);
    }

    async fn pause(&self) {
        if !self.slow_mo.is_zero() {
            tokio::time::sleep(self.slow_mo).await;
        }
    }

    /// Evaluate a JavaScript expression and deserialize its value
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Eval`] on evaluation or conversion failure.
    pub async fn eval<T: serde::de::DeserializeOwned>(&self, expr: &str) -> ComprarResult<T> {
        let result = self
            .page
            .evaluate(expr)
            .await
            .map_err(|e| ComprarError::Eval {
                message: e.to_string(),
            })?;
        result.into_value().map_err(|e| ComprarError::Eval {
            message: e.to_string(),
        })
    }

    /// Navigate to a URL and wait for the load to settle
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Navigation`] if the navigation fails.
    pub async fn goto(&self, url: &str) -> ComprarResult<()> {
        let navigate = async {
            self.page
                .goto(url)
                .await
                .map_err(|e| ComprarError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            self.page
                .wait_for_navigation()
                .await
                .map_err(|e| ComprarError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            Ok(())
        };
        let outcome = navigate.await;
        self.record(
            ActionKind::Navigate,
            url,
            None,
            if outcome.is_ok() {
                ActionOutcome::Ok
            } else {
                ActionOutcome::Error
            },
        )
        .await;
        outcome
    }

    /// Current page URL
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Page`] if the URL cannot be read.
    pub async fn current_url(&self) -> ComprarResult<String> {
        let url = self.page.url().await.map_err(|e| ComprarError::Page {
            message: e.to_string(),
        })?;
        Ok(url.unwrap_or_default())
    }

    /// Page title
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Eval`] if the title cannot be read.
    pub async fn title(&self) -> ComprarResult<String> {
        self.eval("document.title").await
    }

    /// Visibility state of the first element matching `selector`
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Eval`] if the query cannot run.
    pub async fn visibility(&self, selector: &str) -> ComprarResult<Visibility> {
        let state: String = self.eval(&js::visibility(selector)).await?;
        let visibility = match state.as_str() {
            "visible" => Visibility::Visible,
            "hidden" => Visibility::Hidden,
            _ => Visibility::Absent,
        };
        self.record(
            ActionKind::Query,
            selector,
            Some(state),
            if visibility == Visibility::Absent {
                ActionOutcome::Absent
            } else {
                ActionOutcome::Ok
            },
        )
        .await;
        Ok(visibility)
    }

    /// Whether the element is currently visible
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Eval`] if the query cannot run.
    pub async fn is_visible(&self, selector: &str) -> ComprarResult<bool> {
        Ok(self.visibility(selector).await? == Visibility::Visible)
    }

    /// Wait until the element is visible
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Timeout`] if it never becomes visible.
    pub async fn wait_for_visible(&self, selector: &str) -> ComprarResult<()> {
        let outcome = wait::until(self.wait_opts, || async move {
            Ok(self.eval::<String>(&js::visibility(selector)).await? == "visible")
        })
        .await;
        self.record(
            ActionKind::Wait,
            selector,
            Some("visible".to_string()),
            if outcome.is_ok() {
                ActionOutcome::Ok
            } else {
                ActionOutcome::Error
            },
        )
        .await;
        outcome
    }

    /// Wait until the element is hidden or absent
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Timeout`] if it never disappears.
    pub async fn wait_for_hidden(&self, selector: &str) -> ComprarResult<()> {
        let outcome = wait::until(self.wait_opts, || async move {
            Ok(self.eval::<String>(&js::visibility(selector)).await? != "visible")
        })
        .await;
        self.record(
            ActionKind::Wait,
            selector,
            Some("hidden".to_string()),
            if outcome.is_ok() {
                ActionOutcome::Ok
            } else {
                ActionOutcome::Error
            },
        )
        .await;
        outcome
    }

    /// Wait until the current URL contains `fragment`
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Timeout`] if the URL never matches.
    pub async fn wait_for_url_contains(&self, fragment: &str) -> ComprarResult<()> {
        let opts = self.wait_opts.with_timeout(self.load_timeout_ms);
        wait::until(opts, || async move {
            Ok(self.current_url().await?.contains(fragment))
        })
        .await
    }

    /// Click an element, auto-waiting for visibility first
    ///
    /// # Errors
    ///
    /// Returns an error if the element never shows up or the click fails.
    pub async fn click(&self, selector: &str) -> ComprarResult<()> {
        self.wait_for_visible(selector).await?;
        let outcome = async {
            let element =
                self.page
                    .find_element(selector)
                    .await
                    .map_err(|e| ComprarError::Page {
                        message: e.to_string(),
                    })?;
            element.click().await.map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })?;
            Ok(())
        }
        .await;
        self.record(
            ActionKind::Click,
            selector,
            None,
            if outcome.is_ok() {
                ActionOutcome::Ok
            } else {
                ActionOutcome::Error
            },
        )
        .await;
        self.pause().await;
        outcome
    }

    /// Replace an input's value by typing real key events
    ///
    /// # Errors
    ///
    /// Returns an error if the element never shows up or typing fails.
    pub async fn fill(&self, selector: &str, text: &str) -> ComprarResult<()> {
        self.wait_for_visible(selector).await?;
        let outcome = async {
            let element =
                self.page
                    .find_element(selector)
                    .await
                    .map_err(|e| ComprarError::Page {
                        message: e.to_string(),
                    })?;
            element.click().await.map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })?;
            // clear the previous value before typing the new one
            self.eval::<bool>(&js::clear_value(selector)).await?;
            element
                .type_str(text)
                .await
                .map_err(|e| ComprarError::Page {
                    message: e.to_string(),
                })?;
            Ok(())
        }
        .await;
        self.record(
            ActionKind::Fill,
            selector,
            Some(text.to_string()),
            if outcome.is_ok() {
                ActionOutcome::Ok
            } else {
                ActionOutcome::Error
            },
        )
        .await;
        self.pause().await;
        outcome
    }

    /// Text content of the first matching element
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Eval`] if the query cannot run.
    pub async fn text(&self, selector: &str) -> ComprarResult<Lookup<String>> {
        let value: Option<String> = self.eval(&js::text_content(selector)).await?;
        let lookup = value.map_or(Lookup::Absent, |t| Lookup::Found(t.trim().to_string()));
        self.record(
            ActionKind::Query,
            selector,
            lookup.clone().found(),
            if lookup.is_found() {
                ActionOutcome::Ok
            } else {
                ActionOutcome::Absent
            },
        )
        .await;
        Ok(lookup)
    }

    /// Text contents of every matching element, in document order
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Eval`] if the query cannot run.
    pub async fn all_texts(&self, selector: &str) -> ComprarResult<Vec<String>> {
        let texts: Vec<String> = self.eval(&js::all_text_contents(selector)).await?;
        self.record(
            ActionKind::Query,
            selector,
            Some(format!("{} matches", texts.len())),
            ActionOutcome::Ok,
        )
        .await;
        Ok(texts.into_iter().map(|t| t.trim().to_string()).collect())
    }

    /// Attribute value of the first matching element
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Eval`] if the query cannot run.
    pub async fn attribute(
        &self,
        selector: &str,
        attribute: &str,
    ) -> ComprarResult<Lookup<Option<String>>> {
        // the expression wraps the attribute in a one-element array so an
        // absent element (null) stays distinguishable from a null attribute
        let value: Option<Vec<Option<String>>> =
            self.eval(&js::attribute(selector, attribute)).await?;
        Ok(value.map_or(Lookup::Absent, |mut v| {
            Lookup::Found(v.pop().flatten())
        }))
    }

    /// Number of elements matching `selector`
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Eval`] if the query cannot run.
    pub async fn count(&self, selector: &str) -> ComprarResult<usize> {
        let count: usize = self.eval(&js::count(selector)).await?;
        self.record(
            ActionKind::Query,
            selector,
            Some(count.to_string()),
            ActionOutcome::Ok,
        )
        .await;
        Ok(count)
    }

    /// Select a `<select>` option by value and fire the change event
    ///
    /// # Errors
    ///
    /// Returns an error if the element never shows up or the option is
    /// missing.
    pub async fn select_option(&self, selector: &str, value: &str) -> ComprarResult<()> {
        self.wait_for_visible(selector).await?;
        let selected: bool = self.eval(&js::select_option(selector, value)).await?;
        self.record(
            ActionKind::Select,
            selector,
            Some(value.to_string()),
            if selected {
                ActionOutcome::Ok
            } else {
                ActionOutcome::Error
            },
        )
        .await;
        self.pause().await;
        if selected {
            Ok(())
        } else {
            Err(ComprarError::Page {
                message: format!("option '{value}' not present in {selector}"),
            })
        }
    }

    /// Currently selected value of a `<select>`
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Eval`] if the query cannot run.
    pub async fn selected_value(&self, selector: &str) -> ComprarResult<Lookup<String>> {
        let value: Option<String> = self.eval(&js::selected_value(selector)).await?;
        Ok(value.map_or(Lookup::Absent, Lookup::Found))
    }

    /// Whether the first matching form control accepts input
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Eval`] if the query cannot run.
    pub async fn is_enabled(&self, selector: &str) -> ComprarResult<Lookup<bool>> {
        let value: Option<bool> = self.eval(&js::enabled(selector)).await?;
        Ok(value.map_or(Lookup::Absent, Lookup::Found))
    }

    /// Hover over an element (dispatches a bubbling `mouseover`)
    ///
    /// # Errors
    ///
    /// Returns an error if the element never shows up.
    pub async fn hover(&self, selector: &str) -> ComprarResult<()> {
        self.wait_for_visible(selector).await?;
        self.eval::<bool>(&js::hover(selector)).await?;
        self.record(ActionKind::Hover, selector, None, ActionOutcome::Ok)
            .await;
        self.pause().await;
        Ok(())
    }

    /// Press a keyboard key on an element
    ///
    /// # Errors
    ///
    /// Returns an error if the element never shows up or the press fails.
    pub async fn press(&self, selector: &str, key: &str) -> ComprarResult<()> {
        self.wait_for_visible(selector).await?;
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })?;
        element
            .press_key(key)
            .await
            .map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })?;
        self.record(
            ActionKind::Press,
            selector,
            Some(key.to_string()),
            ActionOutcome::Ok,
        )
        .await;
        self.pause().await;
        Ok(())
    }

    /// Set a checkbox to the requested state and fire the change event
    ///
    /// # Errors
    ///
    /// Returns an error if the element never shows up.
    pub async fn set_checked(&self, selector: &str, checked: bool) -> ComprarResult<()> {
        self.wait_for_visible(selector).await?;
        self.eval::<bool>(&js::set_checked(selector, checked)).await?;
        self.record(
            ActionKind::Check,
            selector,
            Some(checked.to_string()),
            ActionOutcome::Ok,
        )
        .await;
        self.pause().await;
        Ok(())
    }

    /// Capture a PNG screenshot of the page
    ///
    /// # Errors
    ///
    /// Returns [`ComprarError::Screenshot`] on capture or decode failure.
    pub async fn screenshot(&self) -> ComprarResult<Vec<u8>> {
        let params = CaptureScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .build();
        let response =
            self.page
                .execute(params)
                .await
                .map_err(|e| ComprarError::Screenshot {
                    message: e.to_string(),
                })?;
        use base64::Engine as _;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&response.data)
            .map_err(|e| ComprarError::Screenshot {
                message: e.to_string(),
            })?;
        self.record(
            ActionKind::Screenshot,
            "page",
            Some(format!("{} bytes", bytes.len())),
            ActionOutcome::Ok,
        )
        .await;
        Ok(bytes)
    }
}

/// JavaScript expression builders keyed by selector.
///
/// Selectors are embedded via `{:?}` so quoting and escaping are handled
/// by the Rust string formatter.
pub mod js {
    /// Three-state visibility probe: `"visible"`, `"hidden"`, `"absent"`
    #[must_use]
    pub fn visibility(selector: &str) -> String {
        format!(
            "(() => {{ const el = document.querySelector({selector:?}); \
             if (!el) return 'absent'; \
             const r = el.getBoundingClientRect(); \
             const s = window.getComputedStyle(el); \
             return (r.width > 0 && r.height > 0 && s.visibility !== 'hidden' && s.display !== 'none') ? 'visible' : 'hidden'; }})()"
        )
    }

    /// Text content or null when absent
    #[must_use]
    pub fn text_content(selector: &str) -> String {
        format!(
            "(() => {{ const el = document.querySelector({selector:?}); \
             return el ? el.textContent : null; }})()"
        )
    }

    /// Array of text contents of every match
    #[must_use]
    pub fn all_text_contents(selector: &str) -> String {
        format!(
            "Array.from(document.querySelectorAll({selector:?})).map(el => el.textContent)"
        )
    }

    /// Attribute value, `null` attribute, or null element
    #[must_use]
    pub fn attribute(selector: &str, attribute: &str) -> String {
        format!(
            "(() => {{ const el = document.querySelector({selector:?}); \
             return el ? [el.getAttribute({attribute:?})] : null; }})()"
        )
    }

    /// Match count
    #[must_use]
    pub fn count(selector: &str) -> String {
        format!("document.querySelectorAll({selector:?}).length")
    }

    /// Clear an input's value ahead of typing
    #[must_use]
    pub fn clear_value(selector: &str) -> String {
        format!(
            "(() => {{ const el = document.querySelector({selector:?}); \
             if (el) {{ el.value = ''; el.dispatchEvent(new Event('input', {{ bubbles: true }})); }} \
             return true; }})()"
        )
    }

    /// Select an option by value and dispatch `change`; false when missing
    #[must_use]
    pub fn select_option(selector: &str, value: &str) -> String {
        format!(
            "(() => {{ const el = document.querySelector({selector:?}); \
             if (!el) return false; \
             const ok = Array.from(el.options).some(o => o.value === {value:?}); \
             if (!ok) return false; \
             el.value = {value:?}; \
             el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
             return true; }})()"
        )
    }

    /// Currently selected value of a `<select>`, or null when absent
    #[must_use]
    pub fn selected_value(selector: &str) -> String {
        format!(
            "(() => {{ const el = document.querySelector({selector:?}); \
             return el ? el.value : null; }})()"
        )
    }

    /// Enabled state of a form control, or null when absent
    #[must_use]
    pub fn enabled(selector: &str) -> String {
        format!(
            "(() => {{ const el = document.querySelector({selector:?}); \
             return el ? !el.disabled : null; }})()"
        )
    }

    /// Dispatch a bubbling mouseover
    #[must_use]
    pub fn hover(selector: &str) -> String {
        format!(
            "(() => {{ const el = document.querySelector({selector:?}); \
             if (el) el.dispatchEvent(new MouseEvent('mouseover', {{ bubbles: true }})); \
             return true; }})()"
        )
    }

    /// Set checkbox state and dispatch `change`
    #[must_use]
    pub fn set_checked(selector: &str, checked: bool) -> String {
        format!(
            "(() => {{ const el = document.querySelector({selector:?}); \
             if (el) {{ el.checked = {checked}; el.dispatchEvent(new Event('change', {{ bubbles: true }})); }} \
             return true; }})()"
        )
    }

}
