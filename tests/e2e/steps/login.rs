//! Login and session steps.

use cucumber::{given, then, when};

use comprar::assertion::{self, Assertion};
use comprar::driver::Lookup;
use comprar::fixtures::{messages, paths};

use crate::world::ShopWorld;

#[given(expr = "I am on the SauceDemo login page")]
async fn on_login_page(world: &mut ShopWorld) {
    let base_url = world.config.base_url.clone();
    world.login.open(&base_url).await.expect("open login page");
}

#[given(expr = "I am logged in as {string}")]
async fn logged_in_as(world: &mut ShopWorld, user_kind: String) {
    world.login_as(&user_kind).await.expect("login failed");
    world.inventory.wait_loaded().await.expect("inventory never loaded");
}

#[when(expr = "I enter username {string} and password {string}")]
async fn enter_credentials(world: &mut ShopWorld, username: String, password: String) {
    world.login.enter_username(&username).await.expect("enter username");
    world.login.enter_password(&password).await.expect("enter password");
}

#[when(expr = "I click the login button")]
async fn click_login(world: &mut ShopWorld) {
    world.login.click_login().await.expect("click login");
}

#[when(expr = "I login with username {string} and password {string}")]
async fn login_with(world: &mut ShopWorld, username: String, password: String) {
    world.login.login(&username, &password).await.expect("login failed");
}

#[when(expr = "I click the error dismiss button")]
async fn dismiss_error(world: &mut ShopWorld) {
    world.login.close_error().await.expect("dismiss error");
}

#[when(expr = "I click the menu button")]
async fn open_menu(world: &mut ShopWorld) {
    world.inventory.open_menu().await.expect("open menu");
}

#[when(expr = "I click the logout button")]
async fn click_logout(world: &mut ShopWorld) {
    world.inventory.logout().await.expect("logout");
}

#[then(expr = "I should be redirected to the inventory page")]
async fn redirected_to_inventory(world: &mut ShopWorld) {
    world
        .driver
        .wait_for_url_contains(paths::INVENTORY)
        .await
        .expect("never reached the inventory page");
}

#[then(expr = "I should see the products page title")]
async fn products_page_title(world: &mut ShopWorld) {
    let visible = world.inventory.is_logo_visible().await.expect("logo query");
    assert!(visible, "app logo not visible");
}

#[then(expr = "I should see an error message {string}")]
async fn error_message_is(world: &mut ShopWorld, expected: String) {
    match world.login.error_message().await.expect("error query") {
        Lookup::Found(message) => {
            assertion::ensure(Assertion::contains(&message, &expected))
                .unwrap_or_else(|e| panic!("{e}"));
        }
        Lookup::Absent => panic!("no error message displayed"),
    }
}

#[then(expr = "I should see an error message")]
async fn error_message_visible(world: &mut ShopWorld) {
    let visible = world.login.is_error_visible().await.expect("error query");
    assert!(visible, "no error message displayed");
}

#[then(expr = "the error message should disappear")]
async fn error_message_gone(world: &mut ShopWorld) {
    let visible = world.login.is_error_visible().await.expect("error query");
    assertion::ensure(Assertion::is_false(visible, "error message still displayed"))
        .unwrap_or_else(|e| panic!("{e}"));
}

#[then(expr = "I should remain on the login page")]
async fn remain_on_login_page(world: &mut ShopWorld) {
    let url = world.driver.current_url().await.expect("url query");
    assert!(
        !url.contains(paths::INVENTORY),
        "unexpectedly reached the inventory page: {url}"
    );
    let on_login = world.login.is_on_login_page().await.expect("login query");
    assert!(on_login, "login form not shown");
}

#[then(expr = "I should see the login result {string}")]
async fn login_result_is(world: &mut ShopWorld, result: String) {
    match result.as_str() {
        "success" => {
            world
                .driver
                .wait_for_url_contains(paths::INVENTORY)
                .await
                .expect("never reached the inventory page");
        }
        "locked_out" => {
            let message = world
                .login
                .error_message()
                .await
                .expect("error query")
                .found()
                .expect("no error message displayed");
            assert!(
                message.contains("locked out"),
                "expected locked-out error, got {message:?}"
            );
        }
        "invalid_credentials" => {
            let message = world
                .login
                .error_message()
                .await
                .expect("error query")
                .found()
                .expect("no error message displayed");
            assert!(
                message.contains("do not match"),
                "expected bad-credentials error, got {message:?}"
            );
        }
        other => panic!("unknown login result {other:?}"),
    }
}

#[then(expr = "I should be redirected back to the login page")]
async fn redirected_back_to_login(world: &mut ShopWorld) {
    world.login.wait_loaded().await.expect("login page never reloaded");
    let url = world.driver.current_url().await.expect("url query");
    assert!(
        !url.contains(paths::INVENTORY),
        "still on the inventory page: {url}"
    );
}

#[then(expr = "I should see the login form")]
async fn see_login_form(world: &mut ShopWorld) {
    let on_login = world.login.is_on_login_page().await.expect("login query");
    assert!(on_login, "login form not shown");
}

#[then(expr = "the locked out error should match exactly")]
async fn locked_out_error_exact(world: &mut ShopWorld) {
    let message = world
        .login
        .error_message()
        .await
        .expect("error query")
        .found()
        .expect("no error message displayed");
    assertion::ensure(Assertion::equals(&messages::LOCKED_OUT, &message.as_str()))
        .unwrap_or_else(|e| panic!("{e}"));
}
