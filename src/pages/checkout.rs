//! Checkout page object, covering step one (information), step two
//! (overview), and the order-complete screen.

use crate::driver::{Lookup, PageDriver};
use crate::fixtures::paths;
use crate::result::ComprarResult;
use crate::wait;

/// Element selectors for the checkout screens
mod selectors {
    pub const TITLE: &str = ".title";
    pub const FIRST_NAME_INPUT: &str = "#first-name";
    pub const LAST_NAME_INPUT: &str = "#last-name";
    pub const POSTAL_CODE_INPUT: &str = "#postal-code";
    pub const CONTINUE_BUTTON: &str = "#continue";
    pub const CANCEL_BUTTON: &str = "#cancel";
    pub const ERROR_MESSAGE: &str = "[data-test=\"error\"]";
    pub const SUMMARY_SUBTOTAL: &str = ".summary_subtotal_label";
    pub const SUMMARY_TAX: &str = ".summary_tax_label";
    pub const SUMMARY_TOTAL: &str = ".summary_total_label";
    pub const FINISH_BUTTON: &str = "#finish";
    pub const CART_ITEM: &str = ".cart_item";
    pub const INVENTORY_ITEM_NAME: &str = ".inventory_item_name";
    pub const COMPLETE_HEADER: &str = ".complete-header";
    pub const COMPLETE_TEXT: &str = ".complete-text";
    pub const BACK_HOME_BUTTON: &str = "#back-to-products";
}

/// The checkout screens
#[derive(Debug, Clone)]
pub struct CheckoutPage {
    driver: PageDriver,
}

impl CheckoutPage {
    /// Bind the page object to a driver
    #[must_use]
    pub fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Wait until the current checkout screen is rendered
    ///
    /// # Errors
    ///
    /// Returns a timeout if the title never appears.
    pub async fn wait_loaded(&self) -> ComprarResult<()> {
        self.driver.wait_for_visible(selectors::TITLE).await
    }

    /// Fill the step-one information form
    ///
    /// # Errors
    ///
    /// Returns an error if any input cannot be filled.
    pub async fn fill_information(
        &self,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> ComprarResult<()> {
        self.enter_first_name(first_name).await?;
        self.enter_last_name(last_name).await?;
        self.enter_postal_code(postal_code).await
    }

    /// Type the first name
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be filled.
    pub async fn enter_first_name(&self, first_name: &str) -> ComprarResult<()> {
        self.driver
            .fill(selectors::FIRST_NAME_INPUT, first_name)
            .await
    }

    /// Type the last name
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be filled.
    pub async fn enter_last_name(&self, last_name: &str) -> ComprarResult<()> {
        self.driver
            .fill(selectors::LAST_NAME_INPUT, last_name)
            .await
    }

    /// Type the postal code
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be filled.
    pub async fn enter_postal_code(&self, postal_code: &str) -> ComprarResult<()> {
        self.driver
            .fill(selectors::POSTAL_CODE_INPUT, postal_code)
            .await
    }

    /// Submit step one and wait for the outcome: the overview page or a
    /// visible required-field error
    ///
    /// # Errors
    ///
    /// Returns a timeout if neither outcome materializes.
    pub async fn continue_to_overview(&self) -> ComprarResult<()> {
        self.driver.click(selectors::CONTINUE_BUTTON).await?;
        wait::until(self.driver.wait_opts(), || async move {
            if self
                .driver
                .current_url()
                .await?
                .contains(paths::CHECKOUT_STEP_TWO)
            {
                return Ok(true);
            }
            self.driver.is_visible(selectors::ERROR_MESSAGE).await
        })
        .await
    }

    /// Cancel out of checkout
    ///
    /// # Errors
    ///
    /// Returns an error if the click fails.
    pub async fn cancel(&self) -> ComprarResult<()> {
        self.driver.click(selectors::CANCEL_BUTTON).await
    }

    /// Finish the order from the overview and wait for the complete page
    ///
    /// # Errors
    ///
    /// Returns an error if the click fails or the page never completes.
    pub async fn finish(&self) -> ComprarResult<()> {
        self.driver.click(selectors::FINISH_BUTTON).await?;
        self.driver
            .wait_for_url_contains(paths::CHECKOUT_COMPLETE)
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

    /// Whether a required-field error is visible
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn is_error_visible(&self) -> ComprarResult<bool> {
        self.driver.is_visible(selectors::ERROR_MESSAGE).await
    }

    /// Subtotal label on the overview
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn subtotal(&self) -> ComprarResult<Lookup<String>> {
        self.driver.text(selectors::SUMMARY_SUBTOTAL).await
    }

    /// Tax label on the overview
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn tax(&self) -> ComprarResult<Lookup<String>> {
        self.driver.text(selectors::SUMMARY_TAX).await
    }

    /// Total label on the overview
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn total(&self) -> ComprarResult<Lookup<String>> {
        self.driver.text(selectors::SUMMARY_TOTAL).await
    }

    /// Product names listed on the overview
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn overview_names(&self) -> ComprarResult<Vec<String>> {
        self.driver.all_texts(selectors::INVENTORY_ITEM_NAME).await
    }

    /// Number of line items on the overview
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn overview_count(&self) -> ComprarResult<usize> {
        self.driver.count(selectors::CART_ITEM).await
    }

    /// Confirmation header on the complete screen
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn complete_header(&self) -> ComprarResult<Lookup<String>> {
        self.driver.text(selectors::COMPLETE_HEADER).await
    }

    /// Confirmation body text on the complete screen
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn complete_text(&self) -> ComprarResult<Lookup<String>> {
        self.driver.text(selectors::COMPLETE_TEXT).await
    }

    /// Whether the order-complete screen is showing
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn is_order_complete(&self) -> ComprarResult<bool> {
        self.driver.is_visible(selectors::COMPLETE_HEADER).await
    }

    /// Return to the inventory from the complete screen
    ///
    /// # Errors
    ///
    /// Returns an error if the click fails.
    pub async fn back_home(&self) -> ComprarResult<()> {
        self.driver.click(selectors::BACK_HOME_BUTTON).await
    }

    /// Page heading text
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn page_title(&self) -> ComprarResult<Lookup<String>> {
        self.driver.text(selectors::TITLE).await
    }
}
