//! Markdown enrichment pipeline.
//!
//! Runs the three scan passes in a fixed order and splices the synthesized
//! links into the document. The backtick pass goes first because it strips
//! delimiters and so changes what the bare pass would see.

use tracing::debug;

use crate::books::lookup_book;
use crate::config::EnrichmentConfig;
use crate::links::{bible_gateway_link, catechism_link, cross_reference_span};
use crate::scanner::{scan_backtick_refs, scan_bare_refs, scan_catechism_refs, ScriptureMatch};
use crate::verses::parse_verse_spec;

/// Enriches scriptural and catechism references in a markdown document.
///
/// Pure function of the document and configuration: three passes (backtick
/// scriptural, bare scriptural, catechism), each scanning the result of the
/// previous one. Text without references passes through unchanged, and text
/// already inside links is never rewritten, so running the function on its
/// own output is a no-op.
///
/// # Examples
///
/// ```
/// use verse_tools::{enrich_markdown, EnrichmentConfig};
///
/// let config = EnrichmentConfig::default();
/// let enriched = enrich_markdown("Genesis 1:1 says so.", &config);
/// assert!(enriched.contains("[Genesis 1:1](https://www.biblegateway.com/passage/?search=Genesis%201%3A1&version=NRSVCE)"));
/// assert!(enriched.contains("[[Gen-01#v1]]"));
/// ```
pub fn enrich_markdown(document: &str, config: &EnrichmentConfig) -> String {
    let matches = scan_backtick_refs(document);
    debug!(pass = "backtick", count = matches.len(), "scripture scan");
    let result = replace_scripture_matches(document, &matches, config);

    let matches = scan_bare_refs(&result);
    debug!(pass = "bare", count = matches.len(), "scripture scan");
    let result = replace_scripture_matches(&result, &matches, config);

    let matches = scan_catechism_refs(&result);
    debug!(pass = "catechism", count = matches.len(), "catechism scan");
    let replacements = matches
        .iter()
        .map(|m| (m.span, catechism_link(&m.numbers)))
        .collect();
    apply_replacements(&result, replacements)
}

fn replace_scripture_matches(
    text: &str,
    matches: &[ScriptureMatch],
    config: &EnrichmentConfig,
) -> String {
    let replacements = matches
        .iter()
        .map(|m| (m.span, scripture_enrichment(&m.book, &m.tail, config)))
        .collect();
    apply_replacements(text, replacements)
}

/// Builds the replacement text for one scriptural match.
///
/// Unknown books yield the cleaned literal text with no links at all.
fn scripture_enrichment(book: &str, tail: &str, config: &EnrichmentConfig) -> String {
    let clean_ref = collapse_whitespace(&format!("{book} {tail}"));
    let Some(info) = lookup_book(book) else {
        return clean_ref;
    };

    let external = bible_gateway_link(&clean_ref, &config.bible_version);
    if !config.include_cross_reference_links {
        return external;
    }
    let ranges = parse_verse_spec(tail);
    if ranges.is_empty() {
        return external;
    }

    let cross_refs: Vec<String> = ranges
        .iter()
        .map(|range| cross_reference_span(info, *range, &config.cross_reference_template))
        .collect();
    format!("{} ( {} )", external, cross_refs.join(" , "))
}

/// Collapses whitespace runs to single spaces and trims the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splices replacements into the text, working from the end towards the
/// beginning so earlier spans stay valid.
fn apply_replacements(text: &str, mut replacements: Vec<((usize, usize), String)>) -> String {
    if replacements.is_empty() {
        return text.to_string();
    }
    replacements.sort_by(|a, b| b.0 .0.cmp(&a.0 .0));

    let mut result = text.to_string();
    for ((start, end), replacement) in replacements {
        result.replace_range(start..end, &replacement);
    }
    result
}
