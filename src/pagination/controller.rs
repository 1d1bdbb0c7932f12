use crate::config::{KeyMap, PagerConfig};
use crate::document::ListingPage;
use crate::pagination::state::NavigationState;
use crate::parsers::html::is_text_input;
use crate::results::NavigationStatus;
use url::Url;

/// The navigation effect supplied by the host: replace the current view
pub trait Navigator {
    /// Load `url` in place of the current page
    fn open_in_place(&mut self, url: &Url);
}

/// A key press as reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key value as the browser reports it (`"d"`, `"D"`, `"ArrowRight"`)
    pub key: String,

    /// Tag name of the focused element, if any
    pub target_tag: Option<String>,

    /// True while an input method is composing text
    pub is_composing: bool,
}

impl KeyEvent {
    /// A plain key press on the page body
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            target_tag: None,
            is_composing: false,
        }
    }

    /// Same key pressed while the given element has focus
    pub fn on(mut self, tag: &str) -> Self {
        self.target_tag = Some(tag.to_string());
        self
    }

    pub fn composing(mut self) -> Self {
        self.is_composing = true;
        self
    }
}

/// Result of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Navigated(Url),
    NotNavigated,
}

impl NavigationOutcome {
    pub fn navigated(&self) -> bool {
        matches!(self, NavigationOutcome::Navigated(_))
    }
}

/// Why a recognized key press did not navigate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// "next" pressed on the last page
    AtEnd,
    /// No target could be resolved, or it is the current page
    NoTarget,
}

/// What happened to a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a navigation key, shortcuts disabled, typing into a field, or IME
    Ignored,
    Navigated(Url),
    Blocked(BlockReason),
}

/// Keyboard-driven navigation bound to one host.
///
/// Owns the enabled flag and the key map; the host creates it, enables it,
/// and feeds it key events together with the page they happened on.
pub struct NavigationController<N: Navigator> {
    navigator: N,
    config: PagerConfig,
    keys: KeyMap,
    enabled: bool,
}

impl<N: Navigator> NavigationController<N> {
    pub fn new(navigator: N, config: PagerConfig) -> Self {
        let keys = config.keys.normalized();
        Self {
            navigator,
            config,
            keys,
            enabled: false,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn keys(&self) -> &KeyMap {
        &self.keys
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn on keyboard navigation, optionally with new keys.
    ///
    /// Calling it again while enabled only updates the key map.
    pub fn enable_shortcuts(&mut self, keys: Option<KeyMap>) {
        if let Some(keys) = keys {
            self.keys = keys.normalized();
        }
        if self.enabled {
            return;
        }
        self.enabled = true;
        ::log::info!(
            "Keyboard navigation enabled (prev=\"{}\", next=\"{}\")",
            self.keys.prev,
            self.keys.next
        );
    }

    /// Turn off keyboard navigation; harmless if already off
    pub fn disable_shortcuts(&mut self) {
        if self.enabled {
            self.enabled = false;
            ::log::info!("Keyboard navigation disabled");
        }
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, page: &ListingPage, event: &KeyEvent) -> KeyOutcome {
        if !self.enabled {
            return KeyOutcome::Ignored;
        }
        if event.is_composing || event.target_tag.as_deref().is_some_and(is_text_input) {
            return KeyOutcome::Ignored;
        }

        let key = event.key.to_lowercase();
        if key == self.keys.prev {
            match self.go_prev(page) {
                NavigationOutcome::Navigated(url) => KeyOutcome::Navigated(url),
                NavigationOutcome::NotNavigated => {
                    ::log::info!("At the first page or no usable previous link");
                    KeyOutcome::Blocked(BlockReason::NoTarget)
                }
            }
        } else if key == self.keys.next {
            if self.state(page).is_at_end() {
                ::log::info!("At the last page; next is blocked");
                return KeyOutcome::Blocked(BlockReason::AtEnd);
            }
            match self.go_next(page) {
                NavigationOutcome::Navigated(url) => KeyOutcome::Navigated(url),
                NavigationOutcome::NotNavigated => {
                    ::log::info!("No progress possible; next is blocked");
                    KeyOutcome::Blocked(BlockReason::NoTarget)
                }
            }
        } else {
            KeyOutcome::Ignored
        }
    }

    /// Navigate to the resolved next page, if any
    pub fn go_next(&mut self, page: &ListingPage) -> NavigationOutcome {
        let target = self.state(page).resolve_next_url();
        self.navigate(page, target.as_ref())
    }

    /// Navigate to the resolved previous page, if any
    pub fn go_prev(&mut self, page: &ListingPage) -> NavigationOutcome {
        let target = self.state(page).resolve_prev_url();
        self.navigate(page, target.as_ref())
    }

    /// Open `url` unless it is absent or the page we are already on
    pub fn navigate(&mut self, page: &ListingPage, url: Option<&Url>) -> NavigationOutcome {
        let Some(url) = url else {
            return NavigationOutcome::NotNavigated;
        };
        if self.state(page).url_model().is_current(url) {
            ::log::debug!("Not navigating to the current page: {}", url);
            return NavigationOutcome::NotNavigated;
        }

        ::log::info!("Navigating to {}", url);
        self.navigator.open_in_place(url);
        NavigationOutcome::Navigated(url.clone())
    }

    /// Fresh status snapshot for a dashboard
    pub fn status(&self, page: &ListingPage) -> NavigationStatus {
        self.state(page).status()
    }

    fn state<'a>(&'a self, page: &'a ListingPage) -> NavigationState<'a> {
        NavigationState::new(page, &self.config)
    }
}
