//! Page objects for the storefront.
//!
//! One struct per screen. Each holds a [`PageDriver`](crate::driver::PageDriver)
//! clone and a catalog of element selectors, and exposes the screen's
//! user-facing actions built from the driver primitives. Page objects are
//! stateless beyond the driver handle and live on the per-scenario world.

mod cart;
mod checkout;
mod inventory;
mod login;

pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use inventory::InventoryPage;
pub use login::LoginPage;
