use regex::Regex;
use scraper::Selector;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d.,]+\s*€(?:$|[^\w])").expect("valid price regex"));
static AREA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d.,]+\s*(?:m²|qm)").expect("valid area regex"));
static ROOMS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d.,]+\s*Zi").expect("valid rooms regex"));

static AREA_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"m²|qm").expect("valid area unit regex"));
static ROOMS_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Zi").expect("valid rooms unit regex"));

/// Price element on the result list, the detail page, and the accessible variant
static PRICE_PRIMARY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        ".aditem-main--middle--price-shipping--price, \
         [data-testid=\"ad-price\"], \
         [aria-label*=\"Preis\"]",
    )
    .expect("valid price selector")
});

/// Tag row under each listing ("72 m²", "2 Zi.")
static SIMPLE_TAGS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".aditem-main--bottom span.simpletag").expect("valid simpletag selector")
});

static AREA_PRIMARY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("[data-testid=\"ad-living-space\"]").expect("valid living space selector")
});

/// A numeric attribute of a listing, each with its own units and sane range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Price,
    Area,
    Rooms,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Price => "price",
            Field::Area => "area",
            Field::Rooms => "rooms",
        }
    }

    /// Number followed by the field's unit
    pub fn pattern(self) -> &'static Regex {
        match self {
            Field::Price => &PRICE_PATTERN,
            Field::Area => &AREA_PATTERN,
            Field::Rooms => &ROOMS_PATTERN,
        }
    }

    /// Hard plausibility limits. Price and area are exclusive ranges, rooms
    /// inclusive.
    pub fn is_plausible(self, value: f64) -> bool {
        match self {
            Field::Price => value > 50.0 && value < 20_000.0,
            Field::Area => value > 5.0 && value < 1_000.0,
            Field::Rooms => ROOMS_RANGE.contains(&value),
        }
    }

    /// Selector of the dedicated element for this field, if the site has one
    pub(crate) fn primary_selector(self) -> Option<&'static Selector> {
        match self {
            Field::Price => Some(&PRICE_PRIMARY),
            Field::Area => Some(&AREA_PRIMARY),
            Field::Rooms => None,
        }
    }

    /// Unit that identifies this field among the simpletags, if any
    pub(crate) fn tag_unit(self) -> Option<&'static Regex> {
        match self {
            Field::Price => None,
            Field::Area => Some(&AREA_UNIT),
            Field::Rooms => Some(&ROOMS_UNIT),
        }
    }
}

const ROOMS_RANGE: RangeInclusive<f64> = 1.0..=12.0;

pub(crate) fn simple_tags() -> &'static Selector {
    &SIMPLE_TAGS
}
