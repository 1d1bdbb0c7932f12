use crate::config::PagerConfig;
use crate::document::ListingPage;
use crate::pagination::links::LinkResolver;
use crate::pagination::url_model::PageUrlModel;
use crate::results::NavigationStatus;
use url::Url;

/// Why the current page counts as the end of the result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The DOM offers no "next" control in any form
    NoNextAffordance,
    /// The page number reached the server-side cap
    PageCeiling,
    /// Composing the next page's URL yields the current URL
    NoProgress,
}

/// Start/end detection and target resolution for one page.
///
/// Holds no state of its own: every answer is derived from the page as it
/// is right now, so build a fresh one (or call again) after the page changed.
#[derive(Clone, Copy)]
pub struct NavigationState<'a> {
    page: &'a ListingPage,
    config: &'a PagerConfig,
}

impl<'a> NavigationState<'a> {
    pub fn new(page: &'a ListingPage, config: &'a PagerConfig) -> Self {
        Self { page, config }
    }

    pub fn url_model(&self) -> PageUrlModel<'a> {
        PageUrlModel::new(self.page.location(), self.config)
    }

    pub fn links(&self) -> LinkResolver<'a> {
        LinkResolver::new(self.page)
    }

    pub fn current_page(&self) -> u32 {
        self.url_model().current_page_number()
    }

    /// The server never serves pages past the cap
    pub fn is_at_global_ceiling(&self) -> bool {
        self.current_page() >= self.config.page_cap
    }

    /// Page 1, or no "previous" control. A missing control wins even when URL
    /// arithmetic could produce a lower page.
    pub fn is_at_start(&self) -> bool {
        self.current_page() <= 1 || !self.links().has_prev_affordance()
    }

    pub fn is_at_end(&self) -> bool {
        self.end_reason().is_some()
    }

    /// First end-of-list signal that fires, checked cheapest first
    pub fn end_reason(&self) -> Option<EndReason> {
        let reason = if !self.links().has_next_affordance() {
            Some(EndReason::NoNextAffordance)
        } else if self.is_at_global_ceiling() {
            Some(EndReason::PageCeiling)
        } else {
            let model = self.url_model();
            let intended = model.compose_url(model.current_page_number().saturating_add(1));
            model.is_current(&intended).then_some(EndReason::NoProgress)
        };

        if let Some(reason) = reason {
            ::log::debug!("End of results on page {}: {:?}", self.current_page(), reason);
        }
        reason
    }

    /// Target of a "next" request: the DOM link if there is one, otherwise
    /// URL arithmetic. Never the current URL.
    pub fn resolve_next_url(&self) -> Option<Url> {
        let model = self.url_model();
        if let Some(url) = self.links().find_next().filter(|url| !model.is_current(url)) {
            return Some(url);
        }

        let next = model.compose_url(model.current_page_number().saturating_add(1));
        if model.is_current(&next) {
            ::log::debug!("Next page URL equals the current one; no progress possible");
            return None;
        }
        Some(next)
    }

    /// Target of a "previous" request. Page 1 is usually unnumbered, so a
    /// target of page 1 falls back to the current URL with the page segment
    /// stripped.
    pub fn resolve_prev_url(&self) -> Option<Url> {
        let model = self.url_model();
        if let Some(url) = self.links().find_prev().filter(|url| !model.is_current(url)) {
            return Some(url);
        }

        let current = model.current_page_number();
        let target = current.saturating_sub(1).max(1);
        let mut prev = model.compose_url(target);

        if target == 1 && (current <= 1 || model.is_current(&prev)) {
            prev = model.strip_page_segment();
        }
        if model.is_current(&prev) {
            ::log::debug!("Previous page URL equals the current one; at start");
            return None;
        }
        Some(prev)
    }

    pub fn status(&self) -> NavigationStatus {
        NavigationStatus {
            current_page: self.current_page(),
            at_start: self.is_at_start(),
            at_end: self.is_at_end(),
            next_url: self.resolve_next_url(),
            prev_url: self.resolve_prev_url(),
        }
    }
}
