//! Inventory (products) page object.

use crate::driver::{Lookup, PageDriver};
use crate::result::ComprarResult;
use crate::slug;
use crate::wait;

/// Element selectors for the inventory screen
mod selectors {
    pub const APP_LOGO: &str = ".app_logo";
    pub const SHOPPING_CART_BADGE: &str = ".shopping_cart_badge";
    pub const SHOPPING_CART_LINK: &str = ".shopping_cart_link";
    pub const BURGER_MENU_BUTTON: &str = "#react-burger-menu-btn";
    pub const INVENTORY_CONTAINER: &str = ".inventory_container";
    pub const INVENTORY_ITEM: &str = ".inventory_item";
    pub const INVENTORY_ITEM_NAME: &str = ".inventory_item_name";
    pub const INVENTORY_ITEM_DESC: &str = ".inventory_item_desc";
    pub const INVENTORY_ITEM_PRICE: &str = ".inventory_item_price";
    pub const ADD_TO_CART_ANY: &str = "[data-test^=\"add-to-cart\"]";
    pub const REMOVE_ANY: &str = "[data-test^=\"remove\"]";
    pub const PRODUCT_SORT_CONTAINER: &str = ".product_sort_container";
    pub const LOGOUT_LINK: &str = "#logout_sidebar_link";
    pub const RESET_LINK: &str = "#reset_sidebar_link";
    pub const CLOSE_MENU_BUTTON: &str = "#react-burger-cross-btn";
}

/// The inventory screen
#[derive(Debug, Clone)]
pub struct InventoryPage {
    driver: PageDriver,
}

impl InventoryPage {
    /// Bind the page object to a driver
    #[must_use]
    pub fn new(driver: PageDriver) -> Self {
        Self { driver }
    }

    /// Wait until the product list is rendered
    ///
    /// # Errors
    ///
    /// Returns a timeout if the container never appears.
    pub async fn wait_loaded(&self) -> ComprarResult<()> {
        self.driver
            .wait_for_visible(selectors::INVENTORY_CONTAINER)
            .await
    }

    /// All product names, in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn product_names(&self) -> ComprarResult<Vec<String>> {
        self.driver.all_texts(selectors::INVENTORY_ITEM_NAME).await
    }

    /// All product price labels, in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn product_prices(&self) -> ComprarResult<Vec<String>> {
        self.driver.all_texts(selectors::INVENTORY_ITEM_PRICE).await
    }

    /// All product descriptions, in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn product_descriptions(&self) -> ComprarResult<Vec<String>> {
        self.driver.all_texts(selectors::INVENTORY_ITEM_DESC).await
    }

    /// Number of products on the page
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn product_count(&self) -> ComprarResult<usize> {
        self.driver.count(selectors::INVENTORY_ITEM).await
    }

    /// Number of visible "Add to cart" buttons
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn add_button_count(&self) -> ComprarResult<usize> {
        self.driver.count(selectors::ADD_TO_CART_ANY).await
    }

    /// Number of visible "Remove" buttons
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn remove_button_count(&self) -> ComprarResult<usize> {
        self.driver.count(selectors::REMOVE_ANY).await
    }

    /// Add a product to the cart by display name
    ///
    /// # Errors
    ///
    /// Returns an error if the derived button never appears.
    pub async fn add_to_cart(&self, product_name: &str) -> ComprarResult<()> {
        self.driver
            .click(&slug::add_to_cart_selector(product_name))
            .await
    }

    /// Remove a product from the cart by display name
    ///
    /// # Errors
    ///
    /// Returns an error if the derived button never appears.
    pub async fn remove_from_cart(&self, product_name: &str) -> ComprarResult<()> {
        self.driver
            .click(&slug::remove_selector(product_name))
            .await
    }

    /// Cart badge count; `Absent` when the badge is not rendered
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn cart_badge_count(&self) -> ComprarResult<Lookup<u32>> {
        Ok(match self.driver.text(selectors::SHOPPING_CART_BADGE).await? {
            Lookup::Found(text) => Lookup::Found(text.parse().unwrap_or(0)),
            Lookup::Absent => Lookup::Absent,
        })
    }

    /// Wait until the badge shows exactly `expected` items
    ///
    /// # Errors
    ///
    /// Returns a timeout if the badge never reaches the count.
    pub async fn wait_for_badge(&self, expected: u32) -> ComprarResult<()> {
        // badge updates are local DOM work, so a short budget is enough
        wait::until(wait::WaitOptions::short(), || async move {
            Ok(self.cart_badge_count().await?.found() == Some(expected))
        })
        .await
    }

    /// Wait until the badge disappears entirely
    ///
    /// # Errors
    ///
    /// Returns a timeout if the badge stays visible.
    pub async fn wait_for_badge_gone(&self) -> ComprarResult<()> {
        self.driver
            .wait_for_hidden(selectors::SHOPPING_CART_BADGE)
            .await
    }

    /// Whether the cart badge is visible
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn is_cart_badge_visible(&self) -> ComprarResult<bool> {
        self.driver
            .is_visible(selectors::SHOPPING_CART_BADGE)
            .await
    }

    /// Whether the header logo is visible
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn is_logo_visible(&self) -> ComprarResult<bool> {
        self.driver.is_visible(selectors::APP_LOGO).await
    }

    /// Whether the cart icon is visible
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn is_cart_link_visible(&self) -> ComprarResult<bool> {
        self.driver.is_visible(selectors::SHOPPING_CART_LINK).await
    }

    /// Open the cart page via the header icon
    ///
    /// # Errors
    ///
    /// Returns an error if the click fails.
    pub async fn open_cart(&self) -> ComprarResult<()> {
        self.driver.click(selectors::SHOPPING_CART_LINK).await
    }

    /// Sort products by option code (`az`, `za`, `lohi`, `hilo`) and wait
    /// until the select reflects the chosen code
    ///
    /// # Errors
    ///
    /// Returns an error if the option is missing or the state never
    /// settles.
    pub async fn sort_by(&self, code: &str) -> ComprarResult<()> {
        self.driver
            .select_option(selectors::PRODUCT_SORT_CONTAINER, code)
            .await?;
        let code = code.to_string();
        wait::until(self.driver.wait_opts(), || {
            let code = code.clone();
            async move {
                Ok(self
                    .driver
                    .selected_value(selectors::PRODUCT_SORT_CONTAINER)
                    .await?
                    .found()
                    == Some(code))
            }
        })
        .await
    }

    /// Price label of a product found by display name
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn price_of(&self, product_name: &str) -> ComprarResult<Lookup<String>> {
        let names = self.product_names().await?;
        let prices = self.product_prices().await?;
        Ok(names
            .iter()
            .position(|n| n == product_name)
            .and_then(|i| prices.get(i).cloned())
            .map_or(Lookup::Absent, Lookup::Found))
    }

    /// Whether a product currently shows its "Remove" button
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot run.
    pub async fn is_product_in_cart(&self, product_name: &str) -> ComprarResult<bool> {
        self.driver
            .is_visible(&slug::remove_selector(product_name))
            .await
    }

    /// Open the burger menu and wait for its entries
    ///
    /// # Errors
    ///
    /// Returns an error if the menu never opens.
    pub async fn open_menu(&self) -> ComprarResult<()> {
        self.driver.click(selectors::BURGER_MENU_BUTTON).await?;
        self.driver.wait_for_visible(selectors::LOGOUT_LINK).await
    }

    /// Close the burger menu
    ///
    /// # Errors
    ///
    /// Returns an error if the close click fails.
    pub async fn close_menu(&self) -> ComprarResult<()> {
        self.driver.click(selectors::CLOSE_MENU_BUTTON).await?;
        self.driver.wait_for_hidden(selectors::LOGOUT_LINK).await
    }

    /// Open the burger menu unless it is already showing
    ///
    /// # Errors
    ///
    /// Returns an error if the menu never opens.
    pub async fn ensure_menu_open(&self) -> ComprarResult<()> {
        if self.driver.is_visible(selectors::LOGOUT_LINK).await? {
            return Ok(());
        }
        self.open_menu().await
    }

    /// Log out through the burger menu
    ///
    /// # Errors
    ///
    /// Returns an error if any menu interaction fails.
    pub async fn logout(&self) -> ComprarResult<()> {
        self.ensure_menu_open().await?;
        self.driver.click(selectors::LOGOUT_LINK).await
    }

    /// Reset the app state through the burger menu
    ///
    /// # Errors
    ///
    /// Returns an error if any menu interaction fails.
    pub async fn reset_app_state(&self) -> ComprarResult<()> {
        self.ensure_menu_open().await?;
        self.driver.click(selectors::RESET_LINK).await?;
        self.close_menu().await
    }
}
