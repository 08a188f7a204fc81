//! Inventory browsing and sorting steps.

use cucumber::{then, when};

use comprar::assertion::{self, Assertion};
use comprar::driver::Lookup;
use comprar::fixtures;
use comprar::slug;

use crate::world::ShopWorld;

#[when(expr = "I am on the inventory page")]
async fn on_inventory_page(world: &mut ShopWorld) {
    world.inventory.wait_loaded().await.expect("inventory never loaded");
}

#[then(expr = "I should see {string} products displayed")]
async fn product_count_is(world: &mut ShopWorld, count: String) {
    let expected: usize = count.parse().expect("numeric product count");
    let actual = world.inventory.product_count().await.expect("count query");
    assert_eq!(actual, expected, "product count mismatch");
}

#[then(expr = "all products should have names")]
async fn all_products_named(world: &mut ShopWorld) {
    let names = world.inventory.product_names().await.expect("names query");
    assert!(!names.is_empty(), "no products listed");
    for name in &names {
        assert!(!name.trim().is_empty(), "blank product name");
    }
}

#[then(expr = "all products should have prices")]
async fn all_products_priced(world: &mut ShopWorld) {
    let prices = world.inventory.product_prices().await.expect("prices query");
    assert!(!prices.is_empty(), "no prices listed");
    for price in &prices {
        assertion::ensure(Assertion::matches(price, r"\$\d+\.\d{2}"))
            .unwrap_or_else(|e| panic!("malformed price label: {e}"));
    }
}

#[then(expr = "all products should have descriptions")]
async fn all_products_described(world: &mut ShopWorld) {
    let descriptions = world
        .inventory
        .product_descriptions()
        .await
        .expect("descriptions query");
    assert!(!descriptions.is_empty(), "no descriptions listed");
    for description in &descriptions {
        assert!(!description.trim().is_empty(), "blank product description");
    }
}

#[when(expr = "I sort products by {string}")]
async fn sort_products(world: &mut ShopWorld, label: String) {
    let code = fixtures::sort_code(&label)
        .unwrap_or_else(|| panic!("unknown sort option {label:?}"));
    world.inventory.sort_by(code).await.expect("sort failed");
}

#[then(expr = "products should be sorted alphabetically ascending")]
async fn sorted_names_ascending(world: &mut ShopWorld) {
    let names = world.inventory.product_names().await.expect("names query");
    assert!(
        assertion::non_decreasing(&names),
        "names not in ascending order: {names:?}"
    );
}

#[then(expr = "products should be sorted alphabetically descending")]
async fn sorted_names_descending(world: &mut ShopWorld) {
    let names = world.inventory.product_names().await.expect("names query");
    assert!(
        assertion::non_increasing(&names),
        "names not in descending order: {names:?}"
    );
}

#[then(expr = "products should be sorted by price ascending")]
async fn sorted_prices_ascending(world: &mut ShopWorld) {
    let labels = world.inventory.product_prices().await.expect("prices query");
    let prices = assertion::parse_prices(&labels).expect("parse prices");
    assert!(
        assertion::non_decreasing(&prices),
        "prices not in ascending order: {prices:?}"
    );
}

#[then(expr = "products should be sorted by price descending")]
async fn sorted_prices_descending(world: &mut ShopWorld) {
    let labels = world.inventory.product_prices().await.expect("prices query");
    let prices = assertion::parse_prices(&labels).expect("parse prices");
    assert!(
        assertion::non_increasing(&prices),
        "prices not in descending order: {prices:?}"
    );
}

#[then(expr = "product {string} should have price {string}")]
async fn product_has_price(world: &mut ShopWorld, product_name: String, expected: String) {
    match world
        .inventory
        .price_of(&product_name)
        .await
        .expect("price query")
    {
        Lookup::Found(price) => assert_eq!(price, expected, "price mismatch for {product_name}"),
        Lookup::Absent => panic!("product {product_name:?} not listed"),
    }
}

#[then(expr = "product {string} should be visible")]
async fn product_visible(world: &mut ShopWorld, product_name: String) {
    let names = world.inventory.product_names().await.expect("names query");
    assert!(
        names.iter().any(|n| n == &product_name),
        "product {product_name:?} not listed: {names:?}"
    );
}

#[then(expr = "all products should have {string} buttons")]
async fn all_products_have_buttons(world: &mut ShopWorld, button_text: String) {
    let product_count = world.inventory.product_count().await.expect("count query");
    let button_count = match button_text.as_str() {
        "Add to cart" => world.inventory.add_button_count().await.expect("count query"),
        "Remove" => world.inventory.remove_button_count().await.expect("count query"),
        other => panic!("unknown button {other:?}"),
    };
    assert_eq!(button_count, product_count, "{button_text} button count mismatch");
}

#[then(expr = "no products should have {string} buttons initially")]
async fn no_buttons_initially(world: &mut ShopWorld, button_text: String) {
    assert_eq!(button_text, "Remove", "only Remove buttons start absent");
    let count = world.inventory.remove_button_count().await.expect("count query");
    assert_eq!(count, 0, "expected no Remove buttons, found {count}");
}

#[then(expr = "product {string} should have {string} button")]
async fn product_has_button(world: &mut ShopWorld, product_name: String, button_text: String) {
    let selector = match button_text.as_str() {
        "Add to cart" => slug::add_to_cart_selector(&product_name),
        "Remove" => slug::remove_selector(&product_name),
        other => panic!("unknown button {other:?}"),
    };
    let visible = world.driver.is_visible(&selector).await.expect("visibility query");
    assert!(visible, "{button_text} button for {product_name:?} not visible");
}

#[when(expr = "I reset the app state")]
async fn reset_app_state(world: &mut ShopWorld) {
    world.inventory.reset_app_state().await.expect("reset app state");
}

#[then(expr = "I should see the Swag Labs logo")]
async fn see_logo(world: &mut ShopWorld) {
    let visible = world.inventory.is_logo_visible().await.expect("logo query");
    assert!(visible, "app logo not visible");
}

#[then(expr = "I should see the shopping cart icon")]
async fn see_cart_icon(world: &mut ShopWorld) {
    let visible = world
        .inventory
        .is_cart_link_visible()
        .await
        .expect("cart link query");
    assert!(visible, "shopping cart link not visible");
}
