//! Comprar: browser end-to-end test suite for the SauceDemo storefront
//!
//! Comprar (Spanish: "to shop") drives a real Chromium instance over the
//! Chrome DevTools Protocol and verifies the SauceDemo flows end to end:
//! login, inventory browsing and sorting, the shopping cart, and checkout.
//! Scenarios are written in Gherkin and executed by the `e2e` test target.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    COMPRAR Architecture                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌───────────┐   ┌───────────┐   ┌────────┐  │
//! │  │ Gherkin   │   │ Step      │   │ Page      │   │ CDP    │  │
//! │  │ features  │──►│ defs +    │──►│ objects + │──►│ browser│  │
//! │  │           │   │ World     │   │ driver    │   │        │  │
//! │  └───────────┘   └───────────┘   └───────────┘   └────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

pub mod artifacts;
pub mod assertion;
pub mod config;
pub mod driver;
pub mod fixtures;
pub mod pages;
pub mod report;
pub mod result;
pub mod session;
pub mod slug;
pub mod trace;
pub mod wait;

pub use assertion::{Assertion, AssertionResult};
pub use config::{BrowserFlavor, Config};
pub use driver::{Lookup, PageDriver, Visibility};
pub use pages::{CartPage, CheckoutPage, InventoryPage, LoginPage};
pub use result::{ComprarError, ComprarResult};
pub use session::BrowserSession;
pub use trace::{ActionKind, ActionOutcome, ActionRecord, ActionTrace};
pub use wait::WaitOptions;
