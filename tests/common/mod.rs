//! Shared test constants and helpers for integration tests.

/// Markdown document exercising every reference form the enricher handles:
/// a backtick-wrapped reference, bare references across line breaks, a
/// catechism reference, and an already-linked passage that must survive
/// untouched.
///
/// Also used by the CLI tests, which feed it through the binary.
pub const SAMPLE_DOCUMENT: &str = "\
# Notes on the Annunciation

The angel's greeting picks up `Zephaniah 3:14-17` and the oracle to David
in 2 Samuel 7:12-16.

Mary's fiat is treated in CCC 484-486; the Magnificat leans on
1 Samuel 2:1-10.

Already linked: [John 3:16](https://www.biblegateway.com/passage/?search=John%203%3A16&version=NRSVCE).
";

/// Expected Bible Gateway link for a reference, given the percent-encoded
/// search query and the version code.
pub fn gateway_link(reference: &str, encoded_query: &str, version: &str) -> String {
    format!(
        "[{}](https://www.biblegateway.com/passage/?search={}&version={})",
        reference, encoded_query, version
    )
}
