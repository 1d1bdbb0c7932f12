//! DOM side of pagination: finds "next"/"previous" controls.
//!
//! Every direction has an ordered list of tiers, from the classic link down
//! to label text. Each tier is a plain function returning the first element
//! it recognises; the resolver walks the tiers in order.

use crate::document::ListingPage;
use crate::parsers::html::{element_text, has_class, href_like};
use crate::parsers::text::contains_token;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;
use url::Url;

/// Locale tokens the site uses in labels and titles
const NEXT_TOKEN: &str = "nächste";
const PREV_LABEL_TOKEN: &str = "vorherige";
const PREV_TITLE_TOKENS: [&str; 2] = ["zurück", "vorherige"];

static NEXT_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".pagination-next[href]").expect("valid selector"));
static NEXT_DATA_URL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".pagination-next[data-url]").expect("valid selector"));
static PREV_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".pagination-prev[href]").expect("valid selector"));
static PREV_DATA_URL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".pagination-prev[data-url]").expect("valid selector"));
static LABELLED: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[aria-label], [title]").expect("valid selector"));
static NOT_LINKED: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".pagination-not-linked").expect("valid selector"));

/// Which way to page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// One step of the fallback cascade
pub struct Tier {
    pub name: &'static str,
    pub find: fn(&ListingPage) -> Option<ElementRef<'_>>,
}

static NEXT_TIERS: [Tier; 4] = [
    Tier {
        name: "next link",
        find: next_link,
    },
    Tier {
        name: "next data-url",
        find: next_data_url,
    },
    Tier {
        name: "next label",
        find: next_label,
    },
    Tier {
        name: "next not-linked",
        find: next_not_linked,
    },
];

static PREV_TIERS: [Tier; 3] = [
    Tier {
        name: "prev link",
        find: prev_link,
    },
    Tier {
        name: "prev data-url",
        find: prev_data_url,
    },
    Tier {
        name: "prev label",
        find: prev_label,
    },
];

impl Direction {
    /// Tiers for this direction, in priority order
    pub fn tiers(self) -> &'static [Tier] {
        match self {
            Direction::Next => &NEXT_TIERS,
            Direction::Prev => &PREV_TIERS,
        }
    }
}

/// Finds pagination targets and affordances on a page
#[derive(Clone, Copy)]
pub struct LinkResolver<'a> {
    page: &'a ListingPage,
}

impl<'a> LinkResolver<'a> {
    pub fn new(page: &'a ListingPage) -> Self {
        Self { page }
    }

    /// Best "next" URL the DOM offers
    pub fn find_next(&self) -> Option<Url> {
        self.find(Direction::Next)
    }

    /// Best "previous" URL the DOM offers
    pub fn find_prev(&self) -> Option<Url> {
        self.find(Direction::Prev)
    }

    /// True if any tier finds a "next" control, linked or not
    pub fn has_next_affordance(&self) -> bool {
        self.has_affordance(Direction::Next)
    }

    /// True if any tier finds a "previous" control
    pub fn has_prev_affordance(&self) -> bool {
        self.has_affordance(Direction::Prev)
    }

    /// Walks the tiers until one yields a URL that resolves against the
    /// current location. A tier whose element carries no usable target does
    /// not stop the walk.
    pub fn find(&self, direction: Direction) -> Option<Url> {
        direction.tiers().iter().find_map(|tier| {
            let element = (tier.find)(self.page)?;
            let raw = href_like(element)?;
            match self.page.location().join(raw.trim()) {
                Ok(url) => {
                    ::log::debug!("Pagination tier '{}' resolved {}", tier.name, url);
                    Some(url)
                }
                Err(e) => {
                    ::log::debug!("Pagination tier '{}' has bad target {:?}: {}", tier.name, raw, e);
                    None
                }
            }
        })
    }

    pub fn has_affordance(&self, direction: Direction) -> bool {
        direction
            .tiers()
            .iter()
            .any(|tier| (tier.find)(self.page).is_some())
    }
}

fn next_link(page: &ListingPage) -> Option<ElementRef<'_>> {
    page.select_first(&NEXT_LINK)
}

fn next_data_url(page: &ListingPage) -> Option<ElementRef<'_>> {
    page.select_first(&NEXT_DATA_URL)
}

fn next_label(page: &ListingPage) -> Option<ElementRef<'_>> {
    first_labelled(page, |label, title| {
        label.is_some_and(|l| contains_token(l, NEXT_TOKEN))
            || title.is_some_and(|t| contains_token(t, NEXT_TOKEN))
    })
}

/// A "next" that is rendered but not clickable: the page knows a further
/// page exists even though it exposes no target
fn next_not_linked(page: &ListingPage) -> Option<ElementRef<'_>> {
    page.select_all(&NOT_LINKED).into_iter().find(|element| {
        has_class(*element, "pagination-next")
            || element
                .value()
                .attr("title")
                .is_some_and(|t| contains_token(t, NEXT_TOKEN))
            || contains_token(&element_text(*element), NEXT_TOKEN)
    })
}

fn prev_link(page: &ListingPage) -> Option<ElementRef<'_>> {
    page.select_first(&PREV_LINK)
}

fn prev_data_url(page: &ListingPage) -> Option<ElementRef<'_>> {
    page.select_first(&PREV_DATA_URL)
}

fn prev_label(page: &ListingPage) -> Option<ElementRef<'_>> {
    first_labelled(page, |label, title| {
        label.is_some_and(|l| contains_token(l, PREV_LABEL_TOKEN))
            || title.is_some_and(|t| PREV_TITLE_TOKENS.iter().any(|token| contains_token(t, token)))
    })
}

/// First element whose `aria-label`/`title` satisfies the predicate
fn first_labelled<'a>(
    page: &'a ListingPage,
    matches: impl Fn(Option<&str>, Option<&str>) -> bool,
) -> Option<ElementRef<'a>> {
    page.select_all(&LABELLED).into_iter().find(|element| {
        let value = element.value();
        matches(value.attr("aria-label"), value.attr("title"))
    })
}
