//! Per-scenario world: one browser, one page, and the page objects bound
//! to it. Built fresh for every scenario so state never leaks between them.

use cucumber::World;
use tracing::{error, info, warn};

use comprar::config::Config;
use comprar::driver::PageDriver;
use comprar::pages::{CartPage, CheckoutPage, InventoryPage, LoginPage};
use comprar::result::ComprarResult;
use comprar::session::BrowserSession;
use comprar::{artifacts, fixtures};

#[derive(Debug, World)]
#[world(init = Self::boot)]
pub struct ShopWorld {
    pub config: Config,
    session: BrowserSession,
    pub driver: PageDriver,
    pub login: LoginPage,
    pub inventory: InventoryPage,
    pub cart: CartPage,
    pub checkout: CheckoutPage,
}

impl ShopWorld {
    async fn boot() -> ComprarResult<Self> {
        let config = Config::from_env();
        let session = BrowserSession::launch(&config).await?;
        let page = session.new_page().await?;
        let driver = PageDriver::new(page, &config);
        Ok(Self {
            config,
            session,
            login: LoginPage::new(driver.clone()),
            inventory: InventoryPage::new(driver.clone()),
            cart: CartPage::new(driver.clone()),
            checkout: CheckoutPage::new(driver.clone()),
            driver,
        })
    }

    /// Log in through the UI using a fixture user
    pub async fn login_as(&mut self, kind: &str) -> ComprarResult<()> {
        let user = fixtures::user(kind);
        self.login.open(&self.config.base_url).await?;
        self.login.login(user.username, user.password).await
    }

    /// Scenario teardown: screenshot on failure, always archive the action
    /// trace, then close the browser.
    pub async fn finish(&mut self, scenario_name: &str, failed: bool) {
        let stem = artifacts::stem(scenario_name);

        if failed {
            match self.driver.screenshot().await {
                Ok(png) => match artifacts::save_screenshot(&stem, &png) {
                    Ok(path) => info!(path = %path.display(), "failure screenshot saved"),
                    Err(e) => warn!(error = %e, "could not save failure screenshot"),
                },
                Err(e) => warn!(error = %e, "could not capture failure screenshot"),
            }
        }

        let trace_path = artifacts::trace_path(&stem);
        let trace = self.driver.trace();
        let trace = trace.lock().await;
        if !trace.is_empty() {
            if let Err(e) = trace.save(&trace_path) {
                warn!(error = %e, "could not archive action trace");
            }
        }
        drop(trace);

        if let Err(e) = self.session.close().await {
            error!(error = %e, "browser did not shut down cleanly");
        }
    }
}
