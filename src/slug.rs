//! Product-name slugification.
//!
//! The site derives its `data-test` button ids from product display names.
//! That convention is an implicit coupling between fixtures and markup, so
//! it lives here as one explicit, tested function instead of inline string
//! munging at every call site: lowercase, whitespace runs collapse to a
//! single hyphen, everything else (dots, parentheses) is kept verbatim.
//! `Test.allTheThings() T-Shirt (Red)` becomes
//! `test.allthethings()-t-shirt-(red)`, matching the live markup.

/// Derive the site's product handle from a display name
#[must_use]
pub fn product_handle(name: &str) -> String {
    let mut handle = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            pending_hyphen = !handle.is_empty();
        } else {
            if pending_hyphen {
                handle.push('-');
                pending_hyphen = false;
            }
            handle.extend(ch.to_lowercase());
        }
    }
    handle
}

/// Selector for a product's "Add to cart" button
#[must_use]
pub fn add_to_cart_selector(name: &str) -> String {
    format!("[data-test=\"add-to-cart-{}\"]", product_handle(name))
}

/// Selector for a product's "Remove" button
#[must_use]
pub fn remove_selector(name: &str) -> String {
    format!("[data-test=\"remove-{}\"]", product_handle(name))
}
