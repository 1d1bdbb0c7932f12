use crate::config::PagerConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

/// `/seite:N` on the live site, `/page:N` on some mirrors and test pages
static PAGE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(seite|page):(\d+)\b").expect("valid page segment regex"));

/// Category code such as `c203` or `c203l1234`
static CATEGORY_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/(c\d{3,5}[a-z0-9-]*)\b").expect("valid category segment regex")
});

static DUPLICATE_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/{2,}").expect("valid slash regex"));

/// Page number and category read from a results URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLocator {
    pub page_number: u32,
    pub category_segment: String,
}

/// Reads and rewrites the page/category segments of the current location.
///
/// Nothing here fails: a URL that does not look like a results page yields
/// page 1 and the configured default category.
#[derive(Debug, Clone, Copy)]
pub struct PageUrlModel<'a> {
    location: &'a Url,
    config: &'a PagerConfig,
}

impl<'a> PageUrlModel<'a> {
    pub fn new(location: &'a Url, config: &'a PagerConfig) -> Self {
        Self { location, config }
    }

    /// The location all relative URLs are resolved against
    pub fn location(&self) -> &'a Url {
        self.location
    }

    pub fn locator(&self) -> PageLocator {
        PageLocator {
            page_number: self.current_page_number(),
            category_segment: self.category_segment(),
        }
    }

    /// Page number from the path; page 1 is usually left unnumbered
    pub fn current_page_number(&self) -> u32 {
        page_number_in(self.location.path())
    }

    /// Category segment from the path, or the configured default
    pub fn category_segment(&self) -> String {
        CATEGORY_SEGMENT
            .captures(self.location.path())
            .map(|caps| caps[1].to_string())
            .unwrap_or_else(|| self.config.default_category.clone())
    }

    /// Build the URL of `target_page` from the current location.
    ///
    /// An existing page segment is replaced in place. Otherwise a new one goes
    /// right before the category segment, or at the end of the path if the
    /// path has no category segment. Query and fragment are kept.
    pub fn compose_url(&self, target_page: u32) -> Url {
        let target_page = target_page.max(1);
        let path = collapse_slashes(self.location.path());

        let new_path = if let Some(caps) = PAGE_SEGMENT.captures(&path) {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            format!(
                "{}/{}:{}{}",
                &path[..whole.start],
                &caps[1],
                target_page,
                &path[whole.end..]
            )
        } else if let Some(start) = self.category_position(&path) {
            format!(
                "{}/{}:{}{}",
                &path[..start],
                self.config.page_segment_prefix,
                target_page,
                &path[start..]
            )
        } else {
            ::log::debug!("No category segment in {}; appending page segment", path);
            format!(
                "{}/{}:{}",
                path.trim_end_matches('/'),
                self.config.page_segment_prefix,
                target_page
            )
        };

        let mut url = self.location.clone();
        url.set_path(&new_path);
        url
    }

    /// The current URL with its page segment removed (canonical page 1)
    pub fn strip_page_segment(&self) -> Url {
        let stripped = PAGE_SEGMENT.replace(self.location.path(), "");
        let path = collapse_slashes(&stripped);

        let mut url = self.location.clone();
        url.set_path(if path.is_empty() { "/" } else { &path });
        url
    }

    /// Compare two URLs, given as written in the page, after resolving both
    /// against the current location.
    ///
    /// Empty input never matches. Input that cannot be resolved is compared
    /// as a plain string.
    pub fn urls_equivalent(&self, a: &str, b: &str) -> bool {
        if a.trim().is_empty() || b.trim().is_empty() {
            return false;
        }
        match (self.location.join(a), self.location.join(b)) {
            (Ok(a), Ok(b)) => same_page(&a, &b),
            _ => a == b,
        }
    }

    /// True if `url` points at the current page
    pub fn is_current(&self, url: &Url) -> bool {
        same_page(url, self.location)
    }

    /// Byte offset of the slash that starts the category segment. The
    /// configured fallback only counts if it literally is a path segment, so
    /// a page segment is never inserted in front of an unrelated category.
    fn category_position(&self, path: &str) -> Option<usize> {
        if let Some(m) = CATEGORY_SEGMENT.find(path) {
            return Some(m.start());
        }
        let needle = format!("/{}", self.config.default_category);
        path.match_indices(&needle)
            .find(|(start, _)| {
                let rest = &path[start + needle.len()..];
                rest.is_empty() || rest.starts_with('/')
            })
            .map(|(start, _)| start)
    }
}

/// Page number encoded in a path, defaulting to 1. Page 0 reads as 1; a number
/// too large for `u32` saturates so it lands past any page cap.
pub fn page_number_in(path: &str) -> u32 {
    PAGE_SEGMENT
        .captures(path)
        .map(|caps| caps[2].parse::<u32>().unwrap_or(u32::MAX))
        .map_or(1, |page| page.max(1))
}

/// Equality on path (ignoring trailing and doubled slashes), query and fragment
pub fn same_page(a: &Url, b: &Url) -> bool {
    comparable_path(a) == comparable_path(b)
        && a.query() == b.query()
        && a.fragment() == b.fragment()
}

fn comparable_path(url: &Url) -> String {
    collapse_slashes(url.path()).trim_end_matches('/').to_string()
}

fn collapse_slashes(path: &str) -> String {
    DUPLICATE_SLASHES.replace_all(path, "/").into_owned()
}
