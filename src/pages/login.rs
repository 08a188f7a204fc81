//! Login page object.

use crate::driver::{Lookup, PageDriver};
use crate::result::ComprarResult;
use crate::wait;

/// Element selectors for the login screen
mod selectors {
    pub const USERNAME_INPUT: &str = "#user-name";
    pub const PASSWORD_INPUT: &str = "#password";
    pub const LOGIN_BUTTON: &str = "#login-button";
    pub const ERROR_MESSAGE: &str = "[data-test=\"error\"]";
    pub const ERROR_BUTTON: &str = ".error-button";
    pub const LOGIN_LOGO: &str = ".login_logo";
    pub const INVENTORY_CONTAINER: &str = ".inventory_container";
}

/// The login screen
#[derive(Debug, Clone)]
pub struct LoginPage {
    driver: PageDriver,
}

impl LoginPage {
    /// Bind the page object to a driver
    #[must_use]
    pub fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Navigate to the login page and wait for the form
    ///
    /// # Errors
    ///
    /// Returns an error if navigation or the load wait fails.
    pub async fn open(&self, base_url: &str) -> ComprarResult<()> {
        self.driver.goto(base_url).await?;
        self.wait_loaded().await
    }

    /// Wait until the login form is interactive
    ///
    /// # Errors
    ///
    /// Returns a timeout if the form never renders.
    pub async fn wait_loaded(&self) -> ComprarResult<()> {
        self.driver.wait_for_visible(selectors::LOGIN_LOGO).await?;
        self.driver
            .wait_for_visible(selectors::USERNAME_INPUT)
            .await
    }

    /// Type the username
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be filled.
    pub async fn enter_username(&self, username: &str) -> ComprarResult<()> {
        self.driver.fill(selectors::USERNAME_INPUT, username).await
    }

    /// Type the password
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be filled.
    pub async fn enter_password(&self, password: &str) -> ComprarResult<()> {
        self.driver.fill(selectors::PASSWORD_INPUT, password).await
    }

    /// Submit the form and wait for the outcome: either the inventory
    /// page renders or an error message shows up.
    ///
    /// # Errors
    ///
    /// Returns a timeout if neither outcome materializes.
    pub async fn click_login(&self) -> ComprarResult<()> {
        self.driver.click(selectors::LOGIN_BUTTON).await?;
        self.wait_for_outcome().await
    }

    /// Complete login action
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three interactions fails.
    pub async fn login(&self, username: &str, password: &str) -> ComprarResult<()> {
        self.enter_username(username).await?;
        self.enter_password(password).await?;
        self.click_login().await
    }

    /// Poll until the submit resolved into a visible inventory list or a
    /// visible error message
    ///
    /// # Errors
    ///
    /// Returns a timeout if neither condition holds within budget.
    pub async fn wait_for_outcome(&self) -> ComprarResult<()> {
        wait::until(self.driver.wait_opts(), || async move {
            if self.driver.is_visible(selectors::INVENTORY_CONTAINER).await? {
                return Ok(true);
            }
            self.driver.is_visible(selectors::ERROR_MESSAGE).await
        })
        .await
    }

    /// Error message text, if one is displayed
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn error_message(&self) -> ComprarResult<Lookup<String>> {
        self.driver.text(selectors::ERROR_MESSAGE).await
    }

    /// Whether an error message is visible
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn is_error_visible(&self) -> ComprarResult<bool> {
        self.driver.is_visible(selectors::ERROR_MESSAGE).await
    }

    /// Dismiss the error message if one is showing
    ///
    /// # Errors
    ///
    /// Returns an error if the dismiss click fails.
    pub async fn close_error(&self) -> ComprarResult<()> {
        if self.driver.is_visible(selectors::ERROR_BUTTON).await? {
            self.driver.click(selectors::ERROR_BUTTON).await?;
            self.driver.wait_for_hidden(selectors::ERROR_MESSAGE).await?;
        }
        Ok(())
    }

    /// Whether the login form is the current screen
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn is_on_login_page(&self) -> ComprarResult<bool> {
        self.driver.is_visible(selectors::LOGIN_LOGO).await
    }
}
