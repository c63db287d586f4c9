//! End-to-end enrichment tests against the public library API.
//!
//! These cover the full pipeline: scanning, verse parsing, link synthesis,
//! and splicing, under the default and customized configurations.

mod common;

use common::{gateway_link, SAMPLE_DOCUMENT};
use verse_tools::{enrich_markdown, parse_verse_spec, EnrichmentConfig};

fn default_config() -> EnrichmentConfig {
    EnrichmentConfig::default()
}

fn config_with_version(version: &str) -> EnrichmentConfig {
    EnrichmentConfig {
        bible_version: version.to_string(),
        ..EnrichmentConfig::default()
    }
}

// ============================================
// Tests for scriptural references
// ============================================

#[test]
fn test_single_verse_reference() {
    // Given: Prose with one simple reference
    let document = "Read John 3:16 for hope.";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: External link plus cross-reference, context preserved
    assert_eq!(
        output,
        "Read [John 3:16](https://www.biblegateway.com/passage/?search=John%203%3A16&version=NRSVCE) ( [[John-03#v16]] ) for hope."
    );
}

#[test]
fn test_verse_range() {
    // Given: A reference spanning several verses
    let document = "See Matthew 5:3-12.";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: The range renders as linked endpoints
    assert_eq!(
        output,
        "See [Matthew 5:3-12](https://www.biblegateway.com/passage/?search=Matthew%205%3A3-12&version=NRSVCE) ( [[Matt-05#v3]] - [[Matt-05#v12]] )."
    );
}

#[test]
fn test_multiple_segments_in_same_chapter() {
    // Given: A comma-separated tail repeating the chapter
    let document = "Read 1 Samuel 16:1, 16:4-13 carefully.";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: One external link, one cross-reference per segment
    assert!(
        output.contains(&gateway_link(
            "1 Samuel 16:1, 16:4-13",
            "1%20Samuel%2016%3A1%2C%2016%3A4-13",
            "NRSVCE"
        )),
        "external link missing, got: {}",
        output
    );
    assert!(
        output.contains("( [[1 Sam-16#v1]] , [[1 Sam-16#v4]] - [[1 Sam-16#v13]] )"),
        "cross-references missing, got: {}",
        output
    );
}

#[test]
fn test_implicit_chapter_carries_forward() {
    // Given: A tail where later segments omit the chapter
    let document = "See Psalm 23:1, 4, 6.";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: Bare verse numbers inherit the chapter
    assert!(
        output.contains("( [[Ps-23#v1]] , [[Ps-23#v4]] , [[Ps-23#v6]] )"),
        "chapter carry failed, got: {}",
        output
    );
}

#[test]
fn test_numbered_book() {
    let output = enrich_markdown("Study 2 Corinthians 5:17.", &default_config());
    assert!(output.contains("[2 Corinthians 5:17]("));
    assert!(output.contains("[[2 Cor-05#v17]]"));
}

#[test]
fn test_multiple_references_in_one_text() {
    // Given: Two references in one sentence
    let document = "Genesis 1:1 and John 3:16 are important.";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: Both are rewritten independently
    assert!(output.contains("[Genesis 1:1]("));
    assert!(output.contains("[John 3:16]("));
    assert!(output.contains("[[Gen-01#v1]]"));
    assert!(output.contains("[[John-03#v16]]"));
}

#[test]
fn test_backtick_reference_loses_delimiters() {
    // Given: A backtick-wrapped reference with a stray trailing colon
    let document = "Reference `1 Samuel 16:1, 16:4-13:` in text.";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: The backticks and the colon are gone, the reference is linked
    assert!(output.contains("[1 Samuel 16:1, 16:4-13]("));
    assert!(!output.contains('`'), "backticks should be stripped: {}", output);
}

#[test]
fn test_unknown_book_stays_plain_text() {
    // "Maccabees" without its leading digit is scannable but unmapped
    let document = "Maccabees 3:1 reads oddly.";
    assert_eq!(enrich_markdown(document, &default_config()), document);
}

#[test]
fn test_whitespace_collapses_in_link_label() {
    // Given: A multi-word book name with uneven spacing
    let document = "Wisdom   of  Ben Sira 3:1 teaches.";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: The label is normalized to single spaces
    assert!(
        output.contains("[Wisdom of Ben Sira 3:1]("),
        "label not normalized, got: {}",
        output
    );
    assert!(output.contains("[[Sir-03#v1]]"));
}

// ============================================
// Tests for single-chapter books
// ============================================

#[test]
fn test_single_chapter_book_cited_as_chapter_one() {
    let output = enrich_markdown("Jude 1:3 warns.", &default_config());
    assert!(output.contains("( [[Jude-01#v3]] )"), "got: {}", output);
}

#[test]
fn test_single_chapter_book_odd_chapter_drops_chapter() {
    // Given: A single-chapter book cited with a chapter other than 1
    let document = "Obadiah 2:4 perhaps.";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: The cross-reference uses the chapterless form
    assert!(output.contains("( [[Obad#v4]] )"), "got: {}", output);
}

// ============================================
// Tests for catechism references
// ============================================

#[test]
fn test_catechism_single_paragraph() {
    // Given: One CCC reference
    let document = "Read CCC 528 about Jesus.";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: The reference becomes a search link, context preserved
    assert_eq!(
        output,
        "Read [CCC 528](https://www.catholiccrossreference.online/catechism/#!/search/528) about Jesus."
    );
}

#[test]
fn test_catechism_ranges_and_lists() {
    let output = enrich_markdown("Read CCC 528-530, 610-612 together.", &default_config());
    assert_eq!(
        output,
        "Read [CCC 528-530, 610-612](https://www.catholiccrossreference.online/catechism/#!/search/528-530,%20610-612) together."
    );
}

#[test]
fn test_catechism_comma_separated_values() {
    let output = enrich_markdown("Study CCC 100, 200, 300.", &default_config());
    assert!(output.contains("[CCC 100, 200, 300]("));
    assert!(output.contains("search/100,%20200,%20300"));
}

// ============================================
// Tests for combined documents
// ============================================

#[test]
fn test_scripture_and_catechism_together() {
    // Given: Scriptural and catechism references in one text
    let document = "Read CCC 528. Also see 1 Samuel 16:1, 16:4-13 and Matthew 2:6.";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: Every reference is rewritten
    assert!(output.contains("[CCC 528]("));
    assert!(output.contains("[1 Samuel 16:1, 16:4-13]("));
    assert!(output.contains("[Matthew 2:6]("));
    assert!(output.contains("[[1 Sam-16#v1]]"));
    assert!(output.contains("[[Matt-02#v6]]"));
}

#[test]
fn test_adjacent_scripture_and_catechism_both_enrich() {
    // Given: A catechism reference directly after a scriptural one
    let document = "John 3:16 CCC 528";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: Neither pass shadows the other
    assert!(output.contains("[John 3:16]("), "got: {}", output);
    assert!(output.contains("[CCC 528]("), "got: {}", output);
}

#[test]
fn test_complex_mixed_document() {
    let document = "\
According to Romans 8:28 and CCC 313, all things work together for good.
See also Genesis 50:20 and CCC 312-314 for more context.
";
    let output = enrich_markdown(document, &default_config());

    assert!(output.contains("[Romans 8:28]("));
    assert!(output.contains("[[Rom-08#v28]]"));
    assert!(output.contains("[CCC 313]("));
    assert!(output.contains("[Genesis 50:20]("));
    assert!(output.contains("[CCC 312-314]("));
}

#[test]
fn test_sample_document_enriches_every_form() {
    // Given: The shared sample document
    // When: We enrich it
    let output = enrich_markdown(SAMPLE_DOCUMENT, &default_config());

    // Then: The backtick reference is unwrapped and linked
    assert!(!output.contains('`'), "got: {}", output);
    assert!(output.contains(&gateway_link(
        "Zephaniah 3:14-17",
        "Zephaniah%203%3A14-17",
        "NRSVCE"
    )));
    assert!(output.contains("( [[Zeph-03#v14]] - [[Zeph-03#v17]] )"));

    // And: The bare references across line breaks are linked
    assert!(output.contains(&gateway_link(
        "2 Samuel 7:12-16",
        "2%20Samuel%207%3A12-16",
        "NRSVCE"
    )));
    assert!(output.contains("( [[2 Sam-07#v12]] - [[2 Sam-07#v16]] )"));
    assert!(output.contains("( [[1 Sam-02#v1]] - [[1 Sam-02#v10]] )"));

    // And: The catechism reference is linked
    assert!(output.contains(
        "[CCC 484-486](https://www.catholiccrossreference.online/catechism/#!/search/484-486)"
    ));

    // And: The pre-existing link is left alone, the heading survives
    assert_eq!(output.matches("[John 3:16](").count(), 1);
    assert!(output.contains("# Notes on the Annunciation"));
}

// ============================================
// Tests for existing links and idempotence
// ============================================

#[test]
fn test_existing_markdown_link_is_untouched() {
    let document = "See [John 3:16](https://example.com) already linked.";
    assert_eq!(enrich_markdown(document, &default_config()), document);
}

#[test]
fn test_existing_wiki_link_is_untouched() {
    let document = "The anchor [[Matt-05#v3]] stays as it is.";
    assert_eq!(enrich_markdown(document, &default_config()), document);
}

#[test]
fn test_enriching_twice_changes_nothing() {
    // Given: Documents of every shape
    let documents = [
        SAMPLE_DOCUMENT,
        "Genesis 1:1 says so.",
        "Read CCC 528-530, 610-612 together.",
        "Reference `1 Samuel 16:1, 16:4-13:` in text.",
    ];

    for document in documents {
        // When: We enrich the already-enriched output
        let once = enrich_markdown(document, &default_config());
        let twice = enrich_markdown(&once, &default_config());

        // Then: The second run is a no-op
        assert_eq!(once, twice, "second run rewrote: {}", document);
    }
}

// ============================================
// Tests for configuration
// ============================================

#[test]
fn test_custom_bible_version_lands_in_url() {
    let output = enrich_markdown("John 3:16", &config_with_version("ESV"));
    assert!(output.contains("&version=ESV)"), "got: {}", output);
    assert!(!output.contains("NRSVCE"));
}

#[test]
fn test_custom_cross_reference_template() {
    // Given: A path-style template
    let config = EnrichmentConfig {
        cross_reference_template: "[[Bible/{abbrev}/{chapter}#v{verse}]]".to_string(),
        ..EnrichmentConfig::default()
    };

    // When: We enrich
    let output = enrich_markdown("See Matthew 5:3.", &config);

    // Then: The template drives the cross-reference form
    assert!(output.contains("( [[Bible/Matt/5#v3]] )"), "got: {}", output);
}

#[test]
fn test_cross_references_disabled() {
    // Given: Cross-reference links turned off
    let config = EnrichmentConfig {
        include_cross_reference_links: false,
        ..EnrichmentConfig::default()
    };

    // When: We enrich
    let output = enrich_markdown("John 3:16 stands alone.", &config);

    // Then: Only the external link is emitted
    assert_eq!(
        output,
        "[John 3:16](https://www.biblegateway.com/passage/?search=John%203%3A16&version=NRSVCE) stands alone."
    );
}

// ============================================
// Tests for document structure
// ============================================

#[test]
fn test_markdown_structure_is_preserved() {
    // Given: Markdown with a heading and a list
    let document = "# Header\n\nRead John 3:16.\n\n- List item";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: Only the reference span changes
    assert!(output.starts_with("# Header\n\nRead [John 3:16]("));
    assert!(output.ends_with("\n\n- List item"));
}

#[test]
fn test_multibyte_context_is_preserved() {
    // Given: Multibyte characters around the reference
    let document = "L'Évangile — John 3:16 — amen.";

    // When: We enrich it
    let output = enrich_markdown(document, &default_config());

    // Then: The splice respects character boundaries
    assert!(output.starts_with("L'Évangile — [John 3:16]("));
    assert!(output.ends_with(" — amen."));
}

#[test]
fn test_empty_document() {
    assert_eq!(enrich_markdown("", &default_config()), "");
}

#[test]
fn test_plain_text_passes_through() {
    let document = "This is just plain text with no references.";
    assert_eq!(enrich_markdown(document, &default_config()), document);
}

#[test]
fn test_book_names_without_verses_pass_through() {
    let document = "Genesis and John without verses.";
    assert_eq!(enrich_markdown(document, &default_config()), document);
}

// ============================================
// Property tests
// ============================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    /// Fragments covering every reference shape, link shape, and near-miss
    /// the scanner distinguishes.
    static FRAGMENTS: &[&str] = &[
        "plain prose without any references at all",
        "# A heading",
        "Genesis 1:1",
        "`Matthew 5:3-12`",
        "1 Samuel 16:1, 16:4-13",
        "See Psalm 23:1, 4, 6.",
        "CCC 528-530, 610-612",
        "[John 3:16](https://example.com)",
        "[[Matt-05#v3]]",
        "1 Kings 2:1, 2 John 3:4",
        "(1 John 3:16",
        "Maccabees 3:1",
        "see: John 3:16, amen",
        "Read John 3:16 — truly.",
    ];

    fn document_strategy() -> impl Strategy<Value = String> {
        let separator = prop_oneof![Just(" "), Just("\n"), Just("\n\n")];
        (prop::collection::vec(0..FRAGMENTS.len(), 0..8), separator).prop_map(
            |(picks, separator)| {
                picks
                    .iter()
                    .map(|&i| FRAGMENTS[i])
                    .collect::<Vec<_>>()
                    .join(separator)
            },
        )
    }

    proptest! {
        #[test]
        fn test_enrichment_is_idempotent(document in document_strategy()) {
            let config = EnrichmentConfig::default();
            let once = enrich_markdown(&document, &config);
            let twice = enrich_markdown(&once, &config);
            prop_assert_eq!(&once, &twice, "document: {}", document);
        }

        #[test]
        fn test_verse_parsing_never_panics(spec in "[0-9:,. –-]{0,48}") {
            let _ = parse_verse_spec(&spec);
        }
    }
}
