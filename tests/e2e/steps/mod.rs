//! Step definitions, grouped by the screen they exercise.

mod login;
mod inventory;
mod shopping;
