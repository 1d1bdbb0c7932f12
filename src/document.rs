use crate::error::Result;
use crate::results::ExtractedListing;
use scraper::{ElementRef, Html, Selector};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::LazyLock;
use url::Url;

/// Listing items on a search-results page
static LISTING_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article[data-adid]").expect("valid listing selector"));

/// The document model both engines read from: a parsed results page plus the
/// location it was loaded from.
///
/// The page is read-only except for the extraction markers. Those live in a
/// `RefCell`, which keeps the type single-threaded on purpose.
pub struct ListingPage {
    html: Html,
    location: Url,
    /// Completed extractions keyed by the element's document-order index
    processed: RefCell<HashMap<usize, ExtractedListing>>,
}

impl ListingPage {
    /// Parse a results page loaded from `location`
    pub fn parse(html: &str, location: &str) -> Result<Self> {
        let location = Url::parse(location)?;
        Ok(Self::from_html(Html::parse_document(html), location))
    }

    /// Wrap an already parsed document
    pub fn from_html(html: Html, location: Url) -> Self {
        Self {
            html,
            location,
            processed: RefCell::new(HashMap::new()),
        }
    }

    /// Current location of the page
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Called by the host after a history push/replace changed the URL
    pub fn set_location(&mut self, location: Url) {
        ::log::debug!("Page location changed: {} -> {}", self.location, location);
        self.location = location;
    }

    /// Called by the host after the DOM changed; markers from the previous
    /// tree no longer refer to the same elements and are dropped
    pub fn replace_html(&mut self, html: &str) {
        self.html = Html::parse_document(html);
        self.processed.borrow_mut().clear();
    }

    /// First element matching the selector, in document order
    pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// All elements matching the selector, in document order
    pub fn select_all(&self, selector: &Selector) -> Vec<ElementRef<'_>> {
        self.html.select(selector).collect()
    }

    /// Every listing item (`article[data-adid]`) on the page
    pub fn listing_items(&self) -> Vec<ElementRef<'_>> {
        self.select_all(&LISTING_ITEM)
    }

    /// Every listing item together with its marker key, from a single walk
    /// of the document
    pub fn keyed_listing_items(&self) -> Vec<(usize, ElementRef<'_>)> {
        self.elements()
            .enumerate()
            .filter(|(_, element)| LISTING_ITEM.matches(element))
            .collect()
    }

    /// Key the element's marker is stored under: its position among all
    /// elements in document order. `None` if the element is not part of
    /// this page.
    pub fn marker_key(&self, element: ElementRef<'_>) -> Option<usize> {
        self.elements().position(|candidate| candidate == element)
    }

    /// Result of an earlier extraction recorded under `key`
    pub fn processed_marker(&self, key: usize) -> Option<ExtractedListing> {
        self.processed.borrow().get(&key).cloned()
    }

    /// Records the extraction result for the element with this key
    pub fn mark_processed(&self, key: usize, listing: &ExtractedListing) {
        self.processed.borrow_mut().insert(key, listing.clone());
    }

    /// Number of elements currently carrying a marker
    pub fn processed_count(&self) -> usize {
        self.processed.borrow().len()
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
    }
}
