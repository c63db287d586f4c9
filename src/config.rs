//! Enrichment configuration.
//!
//! The core treats `EnrichmentConfig` as an opaque input; only the host
//! constructs one, either from defaults or from the process environment.

use std::env;

/// Default Bible version code. NRSVCE includes the deuterocanonical books.
pub const DEFAULT_BIBLE_VERSION: &str = "NRSVCE";

/// Default cross-reference link template.
///
/// Available placeholders: `{abbrev}`, `{chapter}`, `{chapter2}`, `{verse}`.
pub const DEFAULT_CROSS_REFERENCE_TEMPLATE: &str = "[[{abbrev}-{chapter2}#v{verse}]]";

/// Environment variable overriding the Bible version code.
pub const BIBLE_VERSION_VAR: &str = "BIBLE_VERSION_CODE";

/// Environment variable overriding the cross-reference template.
pub const TEMPLATE_VAR: &str = "CROSS_REFERENCE_TEMPLATE";

/// Environment variable toggling cross-reference links. Any value other
/// than the literal string "false" counts as true.
pub const INCLUDE_CROSS_REFS_VAR: &str = "INCLUDE_CROSS_REFERENCE_LINKS";

/// Options consumed by the enrichment pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentConfig {
    /// Version code appended to Bible Gateway URLs, e.g. "NRSVCE", "KJV".
    pub bible_version: String,
    /// Template for internal cross-reference links.
    pub cross_reference_template: String,
    /// Whether cross-reference links are appended after the external link.
    pub include_cross_reference_links: bool,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            bible_version: DEFAULT_BIBLE_VERSION.to_string(),
            cross_reference_template: DEFAULT_CROSS_REFERENCE_TEMPLATE.to_string(),
            include_cross_reference_links: true,
        }
    }
}

/// Loads configuration from the process environment.
///
/// Unset variables fall back to the defaults; see the `*_VAR` constants for
/// the recognized names.
pub fn load_config() -> EnrichmentConfig {
    load_config_from(|name| env::var(name).ok())
}

/// Loads configuration through an injected variable lookup.
///
/// Keeps the parsing rules testable without touching the real environment.
pub fn load_config_from(lookup: impl Fn(&str) -> Option<String>) -> EnrichmentConfig {
    let defaults = EnrichmentConfig::default();
    EnrichmentConfig {
        bible_version: lookup(BIBLE_VERSION_VAR).unwrap_or(defaults.bible_version),
        cross_reference_template: lookup(TEMPLATE_VAR).unwrap_or(defaults.cross_reference_template),
        include_cross_reference_links: lookup(INCLUDE_CROSS_REFS_VAR)
            .map_or(true, |value| value != "false"),
    }
}
