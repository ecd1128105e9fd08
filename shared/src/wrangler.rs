//! The `wrangler.toml` document deployed alongside the worker.

use std::fmt;

use crate::Config;

/// Worker name.
pub const WORKER_NAME: &str = "aws-status-poem-bot";
/// Workers runtime compatibility date.
pub const COMPATIBILITY_DATE: &str = "2023-07-23";
/// Binding name the worker uses for its KV namespace.
pub const FEED_ITEMS_BINDING: &str = "FEED_ITEMS";
/// Run every minute.
pub const CRON_EVERY_MINUTE: &str = "* * * * *";
/// Secrets supplied with `wrangler secret put`, never written to the file.
pub const SECRETS: [&str; 2] = ["OPENAI_API_KEY", "MSTDN_ACCESS_TOKEN"];

/// Fully substituted `wrangler.toml`.
///
/// Only the KV ids and the Mastodon URL vary between runs; everything
/// else is fixed. Values are inserted verbatim, without TOML escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WranglerDocument {
    pub feed_items_id: String,
    pub feed_items_preview_id: String,
    pub mstdn_url: String,
}

impl WranglerDocument {
    /// Build the document, substituting an empty string for unset values.
    pub fn from_config(config: &Config) -> Self {
        Self {
            feed_items_id: config.feed_items_id.clone().unwrap_or_default(),
            feed_items_preview_id: config.feed_items_preview_id.clone().unwrap_or_default(),
            mstdn_url: config.mstdn_url.clone().unwrap_or_default(),
        }
    }

    /// Render the document as `wrangler.toml` text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WranglerDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name = \"{WORKER_NAME}\"")?;
        writeln!(f, "compatibility_date = \"{COMPATIBILITY_DATE}\"")?;
        writeln!(f)?;
        writeln!(f, "[[kv_namespaces]]")?;
        writeln!(f, "binding = \"{FEED_ITEMS_BINDING}\"")?;
        writeln!(f, "id = \"{}\"", self.feed_items_id)?;
        writeln!(f, "preview_id = \"{}\"", self.feed_items_preview_id)?;
        writeln!(f)?;
        writeln!(f, "[triggers]")?;
        writeln!(f, "crons = [\"{CRON_EVERY_MINUTE}\"]")?;
        writeln!(f)?;
        writeln!(f, "[vars]")?;
        writeln!(f, "MSTDN_URL = \"{}\"", self.mstdn_url)?;
        writeln!(f)?;
        writeln!(f, "# Secrets")?;
        for secret in SECRETS {
            writeln!(f, "# - {secret}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Wrangler {
        name: String,
        compatibility_date: String,
        kv_namespaces: Vec<KvNamespace>,
        triggers: Triggers,
        vars: Vars,
    }

    #[derive(Debug, Deserialize)]
    struct KvNamespace {
        binding: String,
        id: String,
        preview_id: String,
    }

    #[derive(Debug, Deserialize)]
    struct Triggers {
        crons: Vec<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Vars {
        #[serde(rename = "MSTDN_URL")]
        mstdn_url: String,
    }

    fn document() -> WranglerDocument {
        WranglerDocument {
            feed_items_id: "kv-123".to_string(),
            feed_items_preview_id: "kv-preview-456".to_string(),
            mstdn_url: "https://mastodon.example".to_string(),
        }
    }

    #[test]
    fn test_render_exact_layout() {
        let expected = r#"name = "aws-status-poem-bot"
compatibility_date = "2023-07-23"

[[kv_namespaces]]
binding = "FEED_ITEMS"
id = "kv-123"
preview_id = "kv-preview-456"

[triggers]
crons = ["* * * * *"]

[vars]
MSTDN_URL = "https://mastodon.example"

# Secrets
# - OPENAI_API_KEY
# - MSTDN_ACCESS_TOKEN
"#;
        assert_eq!(document().render(), expected);
    }

    #[test]
    fn test_render_parses_as_toml() {
        let parsed: Wrangler = toml::from_str(&document().render()).unwrap();

        assert_eq!(parsed.name, "aws-status-poem-bot");
        assert_eq!(parsed.compatibility_date, "2023-07-23");
        assert_eq!(parsed.kv_namespaces.len(), 1);
        assert_eq!(parsed.kv_namespaces[0].binding, "FEED_ITEMS");
        assert_eq!(parsed.kv_namespaces[0].id, "kv-123");
        assert_eq!(parsed.kv_namespaces[0].preview_id, "kv-preview-456");
        assert_eq!(parsed.triggers.crons, vec!["* * * * *"]);
        assert_eq!(parsed.vars.mstdn_url, "https://mastodon.example");
    }

    #[test]
    fn test_missing_values_render_empty() {
        let doc = WranglerDocument::from_config(&Config::default());
        let rendered = doc.render();

        assert!(rendered.contains("id = \"\"\n"));
        assert!(rendered.contains("preview_id = \"\"\n"));
        assert!(rendered.contains("MSTDN_URL = \"\"\n"));

        let parsed: Wrangler = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.kv_namespaces[0].id, "");
        assert_eq!(parsed.vars.mstdn_url, "");
    }

    #[test]
    fn test_values_are_not_transformed() {
        let config = Config {
            feed_items_id: Some("  padded  ".to_string()),
            feed_items_preview_id: Some("UPPER-lower".to_string()),
            mstdn_url: Some("https://m.example/path?x=1&y=2".to_string()),
        };
        let rendered = WranglerDocument::from_config(&config).render();

        assert!(rendered.contains("id = \"  padded  \"\n"));
        assert!(rendered.contains("preview_id = \"UPPER-lower\"\n"));
        assert!(rendered.contains("MSTDN_URL = \"https://m.example/path?x=1&y=2\"\n"));
    }

    #[test]
    fn test_single_every_minute_cron() {
        let rendered = document().render();
        assert_eq!(rendered.matches("crons = ").count(), 1);
        assert!(rendered.contains("crons = [\"* * * * *\"]\n"));
    }

    #[test]
    fn test_secret_comments_are_static() {
        for doc in [document(), WranglerDocument::default()] {
            let rendered = doc.render();
            assert!(rendered.ends_with("# Secrets\n# - OPENAI_API_KEY\n# - MSTDN_ACCESS_TOKEN\n"));
        }
    }
}
