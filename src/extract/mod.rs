//! Heuristic extraction of rental facts from one listing item.
//!
//! Every numeric field runs the same pipeline: dedicated selector, then a
//! text scan, then number normalization, a hard plausibility range and the
//! 2-of-3 confidence gate. A field that fails anywhere is reported absent.

pub mod confidence;
pub mod field;
pub mod normalize;

#[cfg(test)]
mod tests;

pub use confidence::{ConfidenceSignals, looks_like_standalone};
pub use field::Field;
pub use normalize::normalize_number;

use crate::document::ListingPage;
use crate::extract::field::simple_tags;
use crate::parsers::html::element_text;
use crate::results::ExtractedListing;
use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

/// Text-bearing descendants scanned when no dedicated element is found
static TEXT_NODES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span, p").expect("valid text node selector"));

/// Location line of a result-list item ("26409 Wittmund (12 km)")
static LOCATION_PRIMARY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".aditem-main--top--left").expect("valid location selector")
});

/// Postal code followed by a city name
static POSTAL_CITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{5})\b\s+(\p{L}[\p{L} .\-]+)").expect("valid location regex")
});

/// A text fragment considered for one field
#[derive(Debug, Clone, PartialEq)]
struct FieldCandidate {
    raw_text: String,
    parsed_value: Option<f64>,
}

impl FieldCandidate {
    fn new(raw_text: String) -> Self {
        let parsed_value = normalize_number(&raw_text);
        Self {
            raw_text,
            parsed_value,
        }
    }
}

/// Extracts listing facts from result-page items
pub struct FieldExtractor;

impl FieldExtractor {
    /// Extract price, area, rooms, location and id from one listing item.
    ///
    /// The item is marked on the page afterwards; asking again for the same
    /// item of an unchanged page returns the recorded result without
    /// rescanning.
    pub fn extract_from_ad(page: &ListingPage, item: ElementRef<'_>) -> ExtractedListing {
        match page.marker_key(item) {
            Some(key) => Self::extract_marked(page, key, item),
            None => {
                ::log::debug!("Listing item is not part of this page; not marking it");
                Self::extract_item(item)
            }
        }
    }

    /// Extract every listing item on the page, in document order
    pub fn extract_all(page: &ListingPage) -> Vec<ExtractedListing> {
        let listings: Vec<_> = page
            .keyed_listing_items()
            .into_iter()
            .map(|(key, item)| Self::extract_marked(page, key, item))
            .collect();
        ::log::info!("Extracted {} listings from {}", listings.len(), page.location());
        listings
    }

    fn extract_marked(page: &ListingPage, key: usize, item: ElementRef<'_>) -> ExtractedListing {
        if let Some(listing) = page.processed_marker(key) {
            ::log::debug!("Listing {:?} already processed", listing.id);
            return listing;
        }
        let listing = Self::extract_item(item);
        page.mark_processed(key, &listing);
        listing
    }

    fn extract_item(item: ElementRef<'_>) -> ExtractedListing {
        let (postal_code, city) = match Self::extract_location(item) {
            Some((postal_code, city)) => (Some(postal_code), Some(city)),
            None => (None, None),
        };
        let listing = ExtractedListing {
            price: Self::extract_field(item, Field::Price),
            area: Self::extract_field(item, Field::Area),
            rooms: Self::extract_field(item, Field::Rooms),
            postal_code,
            city,
            id: item.value().attr("data-adid").map(str::to_string),
        };
        ::log::debug!("Extracted listing: {:?}", listing);
        listing
    }

    /// Run the candidate search, normalization, range check and gate for one
    /// field
    pub fn extract_field(item: ElementRef<'_>, field: Field) -> Option<f64> {
        let candidate =
            Self::primary_candidate(item, field).or_else(|| Self::secondary_candidate(item, field))?;

        let Some(value) = candidate.parsed_value else {
            ::log::debug!("No number in {} text {:?}", field.name(), candidate.raw_text);
            return None;
        };
        if !field.is_plausible(value) {
            ::log::debug!("Rejecting implausible {} {} from {:?}", field.name(), value, candidate.raw_text);
            return None;
        }

        let signals = ConfidenceSignals::evaluate(&candidate.raw_text, Some(value), field);
        if !signals.passes() {
            ::log::debug!(
                "Rejecting low-confidence {} {} from {:?}: {:?}",
                field.name(),
                value,
                candidate.raw_text,
                signals
            );
            return None;
        }
        Some(value)
    }

    /// Postal code and city from the location line, or the first text node
    /// that carries a five-digit code followed by a name
    pub fn extract_location(item: ElementRef<'_>) -> Option<(String, String)> {
        item.select(&LOCATION_PRIMARY)
            .chain(item.select(&TEXT_NODES))
            .find_map(|element| parse_location(&element_text(element)))
    }

    /// Text of the field's dedicated element; empty text counts as missing
    fn primary_candidate(item: ElementRef<'_>, field: Field) -> Option<FieldCandidate> {
        let from_tags = field.tag_unit().and_then(|unit| {
            item.select(simple_tags())
                .map(element_text)
                .find(|text| unit.is_match(text))
        });
        let from_selector = || {
            field
                .primary_selector()
                .and_then(|selector| item.select(selector).next())
                .map(element_text)
                .filter(|text| !text.is_empty())
        };

        from_tags.or_else(from_selector).map(FieldCandidate::new)
    }

    /// Scan text nodes for the field's number-plus-unit pattern, preferring a
    /// standalone tag over a match inside longer text
    fn secondary_candidate(item: ElementRef<'_>, field: Field) -> Option<FieldCandidate> {
        let matches: Vec<String> = item
            .select(&TEXT_NODES)
            .map(element_text)
            .filter(|text| field.pattern().is_match(text))
            .collect();

        let best = matches
            .iter()
            .find(|text| looks_like_standalone(text))
            .or_else(|| matches.first())?;
        Some(FieldCandidate::new(best.clone()))
    }
}

fn parse_location(text: &str) -> Option<(String, String)> {
    let caps = POSTAL_CITY.captures(text)?;
    let city = caps[2].trim();
    if city.is_empty() {
        return None;
    }
    Some((caps[1].to_string(), city.to_string()))
}
