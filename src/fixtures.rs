//! Static test data for the SauceDemo storefront.
//!
//! Users, products, paths, and expected messages are read-only
//! configuration; the dotted-path [`lookup`] accessor mirrors the
//! `users.standard.username` access style used by the feature files.

/// A login credential fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    /// Account name typed into the login form
    pub username: &'static str,
    /// Password typed into the login form
    pub password: &'static str,
    /// Human description for logs
    pub description: &'static str,
}

/// A catalog product fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Display name as rendered on the inventory page
    pub name: &'static str,
    /// Price label as rendered, currency included
    pub price: &'static str,
    /// The site's slug for the product, used in `data-test` ids
    pub id: &'static str,
}

/// Standard user with full access
pub const STANDARD_USER: User = User {
    username: "standard_user",
    password: "secret_sauce",
    description: "Standard user with full access",
};

/// User that has been locked out
pub const LOCKED_OUT_USER: User = User {
    username: "locked_out_user",
    password: "secret_sauce",
    description: "User that has been locked out",
};

/// User with rendering issues
pub const PROBLEM_USER: User = User {
    username: "problem_user",
    password: "secret_sauce",
    description: "User with issues",
};

/// User with performance issues
pub const PERFORMANCE_GLITCH_USER: User = User {
    username: "performance_glitch_user",
    password: "secret_sauce",
    description: "User with performance issues",
};

/// Credentials that match no account
pub const INVALID_USER: User = User {
    username: "invalid_user",
    password: "wrong_password",
    description: "Invalid credentials",
};

/// All user fixtures with their lookup keys
pub const USERS: &[(&str, &User)] = &[
    ("standard", &STANDARD_USER),
    ("locked_out", &LOCKED_OUT_USER),
    ("problem", &PROBLEM_USER),
    ("performance_glitch", &PERFORMANCE_GLITCH_USER),
    ("invalid", &INVALID_USER),
];

/// The six-product catalog
pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Sauce Labs Backpack",
        price: "$29.99",
        id: "sauce-labs-backpack",
    },
    Product {
        name: "Sauce Labs Bike Light",
        price: "$9.99",
        id: "sauce-labs-bike-light",
    },
    Product {
        name: "Sauce Labs Bolt T-Shirt",
        price: "$15.99",
        id: "sauce-labs-bolt-t-shirt",
    },
    Product {
        name: "Sauce Labs Fleece Jacket",
        price: "$49.99",
        id: "sauce-labs-fleece-jacket",
    },
    Product {
        name: "Sauce Labs Onesie",
        price: "$7.99",
        id: "sauce-labs-onesie",
    },
    Product {
        name: "Test.allTheThings() T-Shirt (Red)",
        price: "$15.99",
        id: "test.allthethings()-t-shirt-(red)",
    },
];

/// Site paths, joined onto the configured base URL
pub mod paths {
    /// Inventory page
    pub const INVENTORY: &str = "/inventory.html";
    /// Cart page
    pub const CART: &str = "/cart.html";
    /// Checkout step one
    pub const CHECKOUT_STEP_ONE: &str = "/checkout-step-one.html";
    /// Checkout step two (overview)
    pub const CHECKOUT_STEP_TWO: &str = "/checkout-step-two.html";
    /// Order complete page
    pub const CHECKOUT_COMPLETE: &str = "/checkout-complete.html";
}

/// Default checkout form input
pub mod checkout_info {
    /// First name
    pub const FIRST_NAME: &str = "John";
    /// Last name
    pub const LAST_NAME: &str = "Doe";
    /// Postal code
    pub const POSTAL_CODE: &str = "12345";
}

/// Exact error-message texts rendered by the site
pub mod messages {
    /// Locked-out login attempt
    pub const LOCKED_OUT: &str = "Epic sadface: Sorry, this user has been locked out.";
    /// Wrong credentials
    pub const INVALID_CREDENTIALS: &str =
        "Epic sadface: Username and password do not match any user in this service";
    /// Empty username
    pub const USERNAME_REQUIRED: &str = "Epic sadface: Username is required";
    /// Empty password
    pub const PASSWORD_REQUIRED: &str = "Epic sadface: Password is required";
    /// Empty first name on checkout
    pub const FIRST_NAME_REQUIRED: &str = "Error: First Name is required";
    /// Empty last name on checkout
    pub const LAST_NAME_REQUIRED: &str = "Error: Last Name is required";
    /// Empty postal code on checkout
    pub const POSTAL_CODE_REQUIRED: &str = "Error: Postal Code is required";
    /// Order-complete confirmation header
    pub const ORDER_COMPLETE_HEADER: &str = "Thank you for your order!";
}

/// Translate a human sort label to the site's `<select>` option code
#[must_use]
pub fn sort_code(label: &str) -> Option<&'static str> {
    match label {
        "Name (A to Z)" => Some("az"),
        "Name (Z to A)" => Some("za"),
        "Price (low to high)" => Some("lohi"),
        "Price (high to low)" => Some("hilo"),
        _ => None,
    }
}

/// Look up a user fixture by kind, falling back to the standard user
#[must_use]
pub fn user(kind: &str) -> &'static User {
    USERS
        .iter()
        .find(|(key, _)| *key == kind)
        .map_or(&STANDARD_USER, |(_, u)| u)
}

/// Look up a product fixture by display name
#[must_use]
pub fn product(name: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.name == name)
}

/// Dotted-path accessor over the registry.
///
/// Supported roots: `users.<kind>.{username,password,description}`,
/// `products.<id>.{name,price,id}`, `messages.<key>`,
/// `checkout.{firstName,lastName,postalCode}`.
#[must_use]
pub fn lookup(path: &str) -> Option<&'static str> {
    let mut parts = path.split('.');
    match parts.next()? {
        "users" => {
            let kind = parts.next()?;
            let (_, u) = USERS.iter().find(|(key, _)| *key == kind)?;
            match parts.next()? {
                "username" => Some(u.username),
                "password" => Some(u.password),
                "description" => Some(u.description),
                _ => None,
            }
        }
        "products" => {
            // product ids contain dots, so rejoin everything up to the
            // final field segment
            let rest: Vec<&str> = parts.collect();
            let (field, id_parts) = rest.split_last()?;
            let id = id_parts.join(".");
            let p = PRODUCTS.iter().find(|p| p.id == id)?;
            match *field {
                "name" => Some(p.name),
                "price" => Some(p.price),
                "id" => Some(p.id),
                _ => None,
            }
        }
        "messages" => match parts.next()? {
            "lockedOut" => Some(messages::LOCKED_OUT),
            "invalidCredentials" => Some(messages::INVALID_CREDENTIALS),
            "usernameRequired" => Some(messages::USERNAME_REQUIRED),
            "passwordRequired" => Some(messages::PASSWORD_REQUIRED),
            "firstNameRequired" => Some(messages::FIRST_NAME_REQUIRED),
            "lastNameRequired" => Some(messages::LAST_NAME_REQUIRED),
            "postalCodeRequired" => Some(messages::POSTAL_CODE_REQUIRED),
            _ => None,
        },
        "checkout" => match parts.next()? {
            "firstName" => Some(checkout_info::FIRST_NAME),
            "lastName" => Some(checkout_info::LAST_NAME),
            "postalCode" => Some(checkout_info::POSTAL_CODE),
            _ => None,
        },
        _ => None,
    }
}
