use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Key bindings for keyboard-driven navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMap {
    /// Key that requests the previous result page
    #[serde(default = "default_prev_key")]
    pub prev: String,

    /// Key that requests the next result page
    #[serde(default = "default_next_key")]
    pub next: String,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            prev: default_prev_key(),
            next: default_next_key(),
        }
    }
}

impl KeyMap {
    /// Create a key map, lower-casing both keys so matching is case-insensitive
    pub fn new(prev: &str, next: &str) -> Self {
        Self {
            prev: prev.to_lowercase(),
            next: next.to_lowercase(),
        }
    }

    /// Returns a copy with lower-cased keys; empty keys fall back to the defaults
    pub fn normalized(&self) -> Self {
        let prev = if self.prev.trim().is_empty() {
            default_prev_key()
        } else {
            self.prev.trim().to_lowercase()
        };
        let next = if self.next.trim().is_empty() {
            default_next_key()
        } else {
            self.next.trim().to_lowercase()
        };
        Self { prev, next }
    }
}

/// Configuration for the pagination engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Highest result page the server will ever serve
    #[serde(default = "default_page_cap")]
    pub page_cap: u32,

    /// Category segment assumed when none can be read from the URL
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Token used when a page-number segment has to be inserted (`/seite:N`)
    #[serde(default = "default_page_segment_prefix")]
    pub page_segment_prefix: String,

    /// Default navigation hotkeys
    #[serde(default)]
    pub keys: KeyMap,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_cap: default_page_cap(),
            default_category: default_category(),
            page_segment_prefix: default_page_segment_prefix(),
            keys: KeyMap::default(),
        }
    }
}

impl PagerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Override the page cap
    pub fn with_page_cap(mut self, page_cap: u32) -> Self {
        self.page_cap = page_cap.max(1);
        self
    }

    /// Override the fallback category segment
    pub fn with_default_category(mut self, category: &str) -> Self {
        self.default_category = category.to_string();
        self
    }
}

/// Kleinanzeigen limits search results to 50 pages server-side
fn default_page_cap() -> u32 {
    50
}

/// Category code of the rental-apartment listings
fn default_category() -> String {
    "c203".to_string()
}

fn default_page_segment_prefix() -> String {
    "seite".to_string()
}

fn default_prev_key() -> String {
    "a".to_string()
}

fn default_next_key() -> String {
    "d".to_string()
}
