//! Cart page object.

use crate::driver::{Lookup, PageDriver};
use crate::result::ComprarResult;
use crate::slug;
use crate::wait;

/// Element selectors for the cart screen
mod selectors {
    pub const TITLE: &str = ".title";
    pub const CART_ITEM: &str = ".cart_item";
    pub const INVENTORY_ITEM_NAME: &str = ".inventory_item_name";
    pub const INVENTORY_ITEM_PRICE: &str = ".inventory_item_price";
    pub const CONTINUE_SHOPPING_BUTTON: &str = "#continue-shopping";
    pub const CHECKOUT_BUTTON: &str = "#checkout";
    pub const SHOPPING_CART_BADGE: &str = ".shopping_cart_badge";
}

/// The cart screen
#[derive(Debug, Clone)]
pub struct CartPage {
    driver: PageDriver,
}

impl CartPage {
    /// Bind the page object to a driver
    #[must_use]
    pub fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Wait until the cart page is rendered
    ///
    /// # Errors
    ///
    /// Returns a timeout if the title never appears.
    pub async fn wait_loaded(&self) -> ComprarResult<()> {
        self.driver.wait_for_visible(selectors::TITLE).await
    }

    /// Number of line items in the cart
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn item_count(&self) -> ComprarResult<usize> {
        self.driver.count(selectors::CART_ITEM).await
    }

    /// Product names currently in the cart
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn item_names(&self) -> ComprarResult<Vec<String>> {
        self.driver.all_texts(selectors::INVENTORY_ITEM_NAME).await
    }

    /// Price labels of the items in the cart
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn item_prices(&self) -> ComprarResult<Vec<String>> {
        self.driver.all_texts(selectors::INVENTORY_ITEM_PRICE).await
    }

    /// Remove a product by display name and wait for the row to go away
    ///
    /// # Errors
    ///
    /// Returns an error if the remove button never appears.
    pub async fn remove(&self, product_name: &str) -> ComprarResult<()> {
        let before = self.item_count().await?;
        self.driver
            .click(&slug::remove_selector(product_name))
            .await?;
        wait::until(wait::WaitOptions::short(), || async move {
            Ok(self.item_count().await? < before)
        })
        .await
    }

    /// Remove every product currently in the cart
    ///
    /// # Errors
    ///
    /// Returns an error if any removal fails.
    pub async fn remove_all(&self) -> ComprarResult<()> {
        for name in self.item_names().await? {
            self.remove(&name).await?;
        }
        Ok(())
    }

    /// Whether a product is listed in the cart
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn contains(&self, product_name: &str) -> ComprarResult<bool> {
        Ok(self
            .item_names()
            .await?
            .iter()
            .any(|n| n == product_name))
    }

    /// Whether the cart holds no items
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn is_empty(&self) -> ComprarResult<bool> {
        Ok(self.item_count().await? == 0)
    }

    /// Go back to the inventory page
    ///
    /// # Errors
    ///
    /// Returns an error if the click fails.
    pub async fn continue_shopping(&self) -> ComprarResult<()> {
        self.driver
            .click(selectors::CONTINUE_SHOPPING_BUTTON)
            .await
    }

    /// Proceed to checkout step one
    ///
    /// # Errors
    ///
    /// Returns an error if the click fails.
    pub async fn begin_checkout(&self) -> ComprarResult<()> {
        self.driver.click(selectors::CHECKOUT_BUTTON).await
    }

    /// Cart badge count; `Absent` when the badge is not rendered
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn badge_count(&self) -> ComprarResult<Lookup<u32>> {
        Ok(match self.driver.text(selectors::SHOPPING_CART_BADGE).await? {
            Lookup::Found(text) => Lookup::Found(text.parse().unwrap_or(0)),
            Lookup::Absent => Lookup::Absent,
        })
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
