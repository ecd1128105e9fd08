//! Configuration loaded from environment variables.

use std::env;

/// KV namespace id for the `FEED_ITEMS` binding.
pub const FEED_ITEMS_ID: &str = "FEED_ITEMS_ID";
/// KV namespace id used by `wrangler dev` for the `FEED_ITEMS` binding.
pub const FEED_ITEMS_PREVIEW_ID: &str = "FEED_ITEMS_PREVIEW_ID";
/// Mastodon instance the bot posts to.
pub const MSTDN_URL: &str = "MSTDN_URL";

/// Values substituted into the generated `wrangler.toml`.
///
/// Every field is optional. Nothing is validated here; an unset variable
/// simply renders as an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `FEED_ITEMS_ID`
    pub feed_items_id: Option<String>,
    /// `FEED_ITEMS_PREVIEW_ID`
    pub feed_items_preview_id: Option<String>,
    /// `MSTDN_URL`
    pub mstdn_url: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Unset and non-unicode variables are both treated as absent.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            feed_items_id: lookup(FEED_ITEMS_ID),
            feed_items_preview_id: lookup(FEED_ITEMS_PREVIEW_ID),
            mstdn_url: lookup(MSTDN_URL),
        }
    }

    /// Names of the variables that were not set.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (FEED_ITEMS_ID, &self.feed_items_id),
            (FEED_ITEMS_PREVIEW_ID, &self.feed_items_preview_id),
            (MSTDN_URL, &self.mstdn_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}
