//! Cart and checkout steps.

use std::collections::HashMap;

use cucumber::gherkin::Step;
use cucumber::{then, when};

use comprar::assertion::{self, Assertion};
use comprar::driver::Lookup;
use comprar::fixtures::paths;

use crate::world::ShopWorld;

#[when(expr = "I add {string} to cart")]
async fn add_to_cart(world: &mut ShopWorld, product_name: String) {
    let before = world
        .inventory
        .cart_badge_count()
        .await
        .expect("badge query")
        .or_default();
    world
        .inventory
        .add_to_cart(&product_name)
        .await
        .expect("add to cart");
    world
        .inventory
        .wait_for_badge(before + 1)
        .await
        .expect("badge never updated");
}

#[when(expr = "I remove {string} from cart")]
async fn remove_from_cart(world: &mut ShopWorld, product_name: String) {
    let before = world
        .inventory
        .cart_badge_count()
        .await
        .expect("badge query")
        .or_default();
    world
        .inventory
        .remove_from_cart(&product_name)
        .await
        .expect("remove from cart");
    if before > 1 {
        world
            .inventory
            .wait_for_badge(before - 1)
            .await
            .expect("badge never updated");
    } else {
        world
            .inventory
            .wait_for_badge_gone()
            .await
            .expect("badge never disappeared");
    }
}

#[when(expr = "I navigate to the cart page")]
async fn navigate_to_cart(world: &mut ShopWorld) {
    world.inventory.open_cart().await.expect("open cart");
    world.cart.wait_loaded().await.expect("cart never loaded");
}

#[when(expr = "I remove {string} from the cart page")]
async fn remove_from_cart_page(world: &mut ShopWorld, product_name: String) {
    world.cart.remove(&product_name).await.expect("remove from cart page");
}

#[when(expr = "I click checkout")]
async fn click_checkout(world: &mut ShopWorld) {
    world.cart.begin_checkout().await.expect("begin checkout");
    world.checkout.wait_loaded().await.expect("checkout never loaded");
}

#[when(expr = "I enter checkout information:")]
async fn enter_checkout_information(world: &mut ShopWorld, step: &Step) {
    let table = step.table.as_ref().expect("step requires a data table");
    let mut rows = table.rows.iter();
    let headers = rows.next().expect("data table needs a header row");
    let values = rows.next().expect("data table needs a data row");
    let data: HashMap<&str, &str> = headers
        .iter()
        .map(String::as_str)
        .zip(values.iter().map(String::as_str))
        .collect();
    world
        .checkout
        .fill_information(
            data.get("firstName").copied().unwrap_or_default(),
            data.get("lastName").copied().unwrap_or_default(),
            data.get("postalCode").copied().unwrap_or_default(),
        )
        .await
        .expect("fill checkout information");
}

#[when(expr = "I complete checkout with {string} {string} {string}")]
async fn complete_checkout(
    world: &mut ShopWorld,
    first_name: String,
    last_name: String,
    postal_code: String,
) {
    world
        .checkout
        .fill_information(&first_name, &last_name, &postal_code)
        .await
        .expect("fill checkout information");
    world
        .checkout
        .continue_to_overview()
        .await
        .expect("continue to overview");
    world.checkout.finish().await.expect("finish checkout");
}

#[when(expr = "I enter first name {string} and last name {string}")]
async fn enter_first_and_last(world: &mut ShopWorld, first_name: String, last_name: String) {
    world.checkout.enter_first_name(&first_name).await.expect("first name");
    world.checkout.enter_last_name(&last_name).await.expect("last name");
}

#[when(expr = "I enter first name {string} and postal code {string}")]
async fn enter_first_and_postal(world: &mut ShopWorld, first_name: String, postal_code: String) {
    world.checkout.enter_first_name(&first_name).await.expect("first name");
    world.checkout.enter_postal_code(&postal_code).await.expect("postal code");
}

#[when(expr = "I enter last name {string} and postal code {string}")]
async fn enter_last_and_postal(world: &mut ShopWorld, last_name: String, postal_code: String) {
    world.checkout.enter_last_name(&last_name).await.expect("last name");
    world.checkout.enter_postal_code(&postal_code).await.expect("postal code");
}

#[when(expr = "I click continue on checkout")]
async fn click_continue(world: &mut ShopWorld) {
    world
        .checkout
        .continue_to_overview()
        .await
        .expect("continue on checkout");
}

#[when(expr = "I click finish on checkout")]
async fn click_finish(world: &mut ShopWorld) {
    world.checkout.finish().await.expect("finish checkout");
}

#[when(expr = "I click cancel on checkout")]
async fn click_cancel(world: &mut ShopWorld) {
    world.checkout.cancel().await.expect("cancel checkout");
}

#[when(expr = "I click continue shopping")]
async fn click_continue_shopping(world: &mut ShopWorld) {
    world.cart.continue_shopping().await.expect("continue shopping");
}

#[when(expr = "I click back to products")]
async fn click_back_to_products(world: &mut ShopWorld) {
    world.checkout.back_home().await.expect("back to products");
}

#[then(expr = "the cart badge should show {string}")]
async fn cart_badge_shows(world: &mut ShopWorld, count: String) {
    let expected: u32 = count.parse().expect("numeric badge count");
    world
        .inventory
        .wait_for_badge(expected)
        .await
        .unwrap_or_else(|_| panic!("badge never showed {expected}"));
}

#[then(expr = "the cart badge should not be visible")]
async fn cart_badge_hidden(world: &mut ShopWorld) {
    world
        .inventory
        .wait_for_badge_gone()
        .await
        .expect("cart badge still visible");
}

#[then(expr = "the cart should contain {string}")]
async fn cart_contains(world: &mut ShopWorld, name_or_count: String) {
    if let Ok(expected) = name_or_count.parse::<usize>() {
        let count = world.cart.item_count().await.expect("item count query");
        assert_eq!(count, expected, "cart item count mismatch");
    } else {
        let present = world
            .cart
            .contains(&name_or_count)
            .await
            .expect("cart contents query");
        assert!(present, "cart does not contain {name_or_count:?}");
    }
}

#[then(expr = "the cart should contain {string} items")]
async fn cart_contains_items(world: &mut ShopWorld, count: String) {
    let expected: usize = count.parse().expect("numeric item count");
    let names = world.cart.item_names().await.expect("item names query");
    assertion::ensure(Assertion::has_count(&names, expected))
        .unwrap_or_else(|e| panic!("cart contents {names:?}: {e}"));
}

#[then(expr = "the cart should be empty")]
async fn cart_is_empty(world: &mut ShopWorld) {
    let empty = world.cart.is_empty().await.expect("cart query");
    assert!(empty, "cart still has items");
}

#[then(expr = "I should see order complete message")]
async fn order_complete(world: &mut ShopWorld) {
    let complete = world
        .checkout
        .is_order_complete()
        .await
        .expect("completion query");
    assertion::ensure(Assertion::is_true(complete, "order completion screen not shown"))
        .unwrap_or_else(|e| panic!("{e}"));
}

#[then(expr = "I should see {string} header")]
async fn see_header(world: &mut ShopWorld, header_text: String) {
    match world
        .checkout
        .complete_header()
        .await
        .expect("header query")
    {
        Lookup::Found(header) => assert!(
            header.contains(&header_text),
            "expected header containing {header_text:?}, got {header:?}"
        ),
        Lookup::Absent => panic!("completion header not found"),
    }
}

#[then(expr = "I should see checkout error {string}")]
async fn checkout_error(world: &mut ShopWorld, expected: String) {
    match world.checkout.error_message().await.expect("error query") {
        Lookup::Found(message) => assert!(
            message.contains(&expected),
            "expected checkout error containing {expected:?}, got {message:?}"
        ),
        Lookup::Absent => panic!("no checkout error displayed"),
    }
}

#[then(expr = "I should be on the inventory page")]
async fn on_inventory(world: &mut ShopWorld) {
    world
        .driver
        .wait_for_url_contains(paths::INVENTORY)
        .await
        .expect("never reached the inventory page");
}

#[then(expr = "I should be on the cart page")]
async fn on_cart(world: &mut ShopWorld) {
    world
        .driver
        .wait_for_url_contains(paths::CART)
        .await
        .expect("never reached the cart page");
}
