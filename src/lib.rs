//! verse-tools: scripture and catechism reference enrichment for Markdown.
//!
//! This library provides functionality to:
//! - Detect scriptural references ("1 Samuel 16:1, 16:4-13") and catechism
//!   references ("CCC 528-530") in Markdown text
//! - Resolve book names against the 73-book Catholic canon
//! - Rewrite each reference into a Bible Gateway link plus template-driven
//!   internal cross-reference links
//!
//! The entry point is [`enrich_markdown`]; everything else is exposed for
//! the CLI host and for direct reuse.

pub mod books;
pub mod config;
pub mod enrich;
pub mod links;
pub mod scanner;
pub mod verses;

pub use books::{book_entries, lookup_book, BookInfo};
pub use config::{load_config, load_config_from, EnrichmentConfig};
pub use enrich::enrich_markdown;
pub use links::{
    bible_gateway_link, catechism_link, cross_reference_span, format_cross_reference_link,
};
pub use scanner::{
    existing_link_spans, scan_backtick_refs, scan_bare_refs, scan_catechism_refs, CatechismMatch,
    ScriptureMatch,
};
pub use verses::{parse_verse_spec, VerseRange};
