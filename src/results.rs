use serde::{Deserialize, Serialize};
use url::Url;

/// Snapshot of where the current page sits within the result set
///
/// Recomputed on every request; the page can change between two reads, so
/// callers should not hold on to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationStatus {
    /// Page number derived from the URL (1 when unnumbered)
    pub current_page: u32,

    /// Nothing to go back to
    pub at_start: bool,

    /// Nothing to go forward to
    pub at_end: bool,

    /// Target of a "next" request, if one can be resolved
    pub next_url: Option<Url>,

    /// Target of a "previous" request, if one can be resolved
    pub prev_url: Option<Url>,
}

/// Facts read from one listing item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedListing {
    /// Monthly rent
    pub price: Option<f64>,

    /// Living area in square meters
    pub area: Option<f64>,

    /// Number of rooms (half rooms allowed)
    pub rooms: Option<f64>,

    /// Five-digit German postal code
    pub postal_code: Option<String>,

    /// City following the postal code
    pub city: Option<String>,

    /// Ad id from the `data-adid` attribute
    pub id: Option<String>,
}

impl ExtractedListing {
    /// Rent per square meter, when both price and area were accepted
    pub fn price_per_sqm(&self) -> Option<f64> {
        match (self.price, self.area) {
            (Some(price), Some(area)) if area > 0.0 => Some(price / area),
            _ => None,
        }
    }
}
