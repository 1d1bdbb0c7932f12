//! Forward/backward navigation across search-result pages.
//!
//! - `url_model`: page number and category from the URL, URL composition
//! - `links`: fallback cascade for "next"/"previous" controls in the DOM
//! - `state`: start/end detection combining DOM, page cap and URL sanity check
//! - `controller`: keyboard shortcuts and the navigation effect

pub mod controller;
pub mod links;
pub mod state;
pub mod url_model;

#[cfg(test)]
mod tests;

pub use controller::{
    BlockReason, KeyEvent, KeyOutcome, NavigationController, NavigationOutcome, Navigator,
};
pub use links::{Direction, LinkResolver};
pub use state::{EndReason, NavigationState};
pub use url_model::{PageLocator, PageUrlModel};
