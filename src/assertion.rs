//! Assertions with descriptive failure messages.

use crate::result::{ComprarError, ComprarResult};
use std::fmt::Debug;

/// Result of an assertion
#[derive(Debug, Clone)]
pub struct AssertionResult {
    /// Whether the assertion passed
    pub passed: bool,
    /// Human-readable message
    pub message: String,
}

impl AssertionResult {
    /// Create a passing assertion result
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    /// Create a failing assertion result
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

/// Convert a failing assertion into a scenario-fatal error
///
/// # Errors
///
/// Returns [`ComprarError::AssertionFailed`] carrying the message.
pub fn ensure(result: AssertionResult) -> ComprarResult<()> {
    if result.passed {
        Ok(())
    } else {
        Err(ComprarError::AssertionFailed {
            message: result.message,
        })
    }
}

/// Assertion helpers
#[derive(Debug)]
pub struct Assertion;

impl Assertion {
    /// Assert two values are equal
    #[must_use]
    pub fn equals<T: PartialEq + Debug>(expected: &T, actual: &T) -> AssertionResult {
        if expected == actual {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(format!("expected {expected:?}, got {actual:?}"))
        }
    }

    /// Assert a string contains a substring
    #[must_use]
    pub fn contains(haystack: &str, needle: &str) -> AssertionResult {
        if haystack.contains(needle) {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(format!("expected '{haystack}' to contain '{needle}'"))
        }
    }

    /// Assert a string matches a regex pattern
    #[must_use]
    pub fn matches(text: &str, pattern: &str) -> AssertionResult {
        match regex::Regex::new(pattern) {
            Ok(re) if re.is_match(text) => AssertionResult::pass(),
            Ok(_) => AssertionResult::fail(format!("expected '{text}' to match /{pattern}/")),
            Err(e) => AssertionResult::fail(format!("invalid pattern /{pattern}/: {e}")),
        }
    }

    /// Assert a collection has the expected length
    #[must_use]
    pub fn has_count<T>(items: &[T], expected: usize) -> AssertionResult {
        if items.len() == expected {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(format!("expected {expected} items, got {}", items.len()))
        }
    }

    /// Assert a condition is true
    #[must_use]
    pub fn is_true(condition: bool, message: &str) -> AssertionResult {
        if condition {
            AssertionResult::pass()
        } else {
            AssertionResult::fail(message)
        }
    }

    /// Assert a condition is false
    #[must_use]
    pub fn is_false(condition: bool, message: &str) -> AssertionResult {
        if condition {
            AssertionResult::fail(message)
        } else {
            AssertionResult::pass()
        }
    }
}

/// Parse a currency label like `$29.99` into its numeric value
#[must_use]
pub fn parse_price(label: &str) -> Option<f64> {
    label.trim().trim_start_matches('$').parse().ok()
}

/// Parse a list of currency labels, failing on the first bad one
///
/// # Errors
///
/// Returns [`ComprarError::AssertionFailed`] naming the unparseable label.
pub fn parse_prices(labels: &[String]) -> ComprarResult<Vec<f64>> {
    labels
        .iter()
        .map(|label| {
            parse_price(label).ok_or_else(|| ComprarError::AssertionFailed {
                message: format!("'{label}' is not a price"),
            })
        })
        .collect()
}

/// Check that a sequence is non-decreasing
#[must_use]
pub fn non_decreasing<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

/// Check that a sequence is non-increasing
#[must_use]
pub fn non_increasing<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] >= w[1])
}
