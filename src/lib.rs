//! Result-page helpers for rental listing searches.
//!
//! Two engines share one page model ([`ListingPage`]):
//!
//! - [`pagination`] works out where the current page sits in the result set
//!   and moves forward/backward on request, with keyboard shortcuts
//! - [`extract`] pulls price, living area, rooms, location and id out of each
//!   listing item

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod pagination;
pub mod parsers;
pub mod results;

// Re-export commonly used types for convenience
pub use config::{KeyMap, PagerConfig};
pub use document::ListingPage;
pub use error::{Error, Result};
pub use extract::{Field, FieldExtractor};
pub use pagination::{
    KeyEvent, KeyOutcome, LinkResolver, NavigationController, NavigationOutcome, NavigationState,
    Navigator, PageUrlModel,
};
pub use results::{ExtractedListing, NavigationStatus};
