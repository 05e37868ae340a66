//! Client configuration: poll cadence, toast timing, and upload limits.
//!
//! Values come from `<meta name="pinboard:..." content="...">` tags rendered
//! by the backend template. Absent or unparsable values fall back to the
//! defaults below, so a bare page still behaves sensibly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_MESSAGES_POLL_MS: u64 = 3_000;
pub const DEFAULT_PINS_POLL_MS: u64 = 5_000;
pub const DEFAULT_TOAST_TTL_MS: u64 = 3_000;
pub const DEFAULT_TOAST_FADE_MS: u64 = 150;
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub messages_poll: Duration,
    pub pins_poll: Duration,
    pub toast_ttl: Duration,
    pub toast_fade: Duration,
    pub max_upload_bytes: u64,
    pub allowed_extensions: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            messages_poll: Duration::from_millis(DEFAULT_MESSAGES_POLL_MS),
            pins_poll: Duration::from_millis(DEFAULT_PINS_POLL_MS),
            toast_ttl: Duration::from_millis(DEFAULT_TOAST_TTL_MS),
            toast_fade: Duration::from_millis(DEFAULT_TOAST_FADE_MS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
        }
    }
}

impl ClientConfig {
    /// Build config from a key lookup.
    ///
    /// Keys:
    /// - `pinboard:messages-poll-ms`: default 3000
    /// - `pinboard:pins-poll-ms`: default 5000
    /// - `pinboard:toast-ttl-ms`: default 3000
    /// - `pinboard:toast-fade-ms`: default 150
    /// - `pinboard:max-upload-bytes`: default 5 MiB
    /// - `pinboard:allowed-extensions`: comma separated, default `jpg,jpeg,png,gif`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let millis = |key: &str, default: u64| Duration::from_millis(parse_positive_u64(lookup(key), default));
        let allowed_extensions = lookup("pinboard:allowed-extensions")
            .map(|raw| parse_extensions(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| Self::default().allowed_extensions);

        Self {
            messages_poll: millis("pinboard:messages-poll-ms", DEFAULT_MESSAGES_POLL_MS),
            pins_poll: millis("pinboard:pins-poll-ms", DEFAULT_PINS_POLL_MS),
            toast_ttl: millis("pinboard:toast-ttl-ms", DEFAULT_TOAST_TTL_MS),
            toast_fade: millis("pinboard:toast-fade-ms", DEFAULT_TOAST_FADE_MS),
            max_upload_bytes: parse_positive_u64(lookup("pinboard:max-upload-bytes"), DEFAULT_MAX_UPLOAD_BYTES),
            allowed_extensions,
        }
    }

    /// Read config from the current document's `<meta>` tags.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return Self::default();
            };
            Self::from_lookup(|key| {
                let selector = format!("meta[name=\"{key}\"]");
                document
                    .query_selector(&selector)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
                    .map(|meta| meta.content())
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Whether `extension` (any case, no dot) is on the allow list.
    pub fn allows_extension(&self, extension: &str) -> bool {
        let extension = extension.to_ascii_lowercase();
        self.allowed_extensions.iter().any(|e| *e == extension)
    }
}

fn parse_positive_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}
