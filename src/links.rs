//! Link synthesis.
//!
//! Builds the rendered output forms: the external Bible Gateway citation
//! link, the template-driven internal cross-reference link, and the
//! catechism search link.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::books::BookInfo;
use crate::verses::VerseRange;

/// Base URL of the Bible Gateway passage search.
pub const BIBLE_GATEWAY_SEARCH_URL: &str = "https://www.biblegateway.com/passage/?search=";

/// Base URL of the catechism paragraph search.
pub const CATECHISM_SEARCH_URL: &str =
    "https://www.catholiccrossreference.online/catechism/#!/search/";

/// Builds the external citation link for a scriptural reference.
///
/// The reference text is used verbatim as the link label and
/// percent-encoded as the search parameter.
///
/// # Arguments
///
/// * `reference` - Cleaned citation text, e.g. "Genesis 1:1"
/// * `bible_version` - Version code appended as `&version=`, e.g. "NRSVCE"
pub fn bible_gateway_link(reference: &str, bible_version: &str) -> String {
    format!(
        "[{}]({}{}&version={})",
        reference,
        BIBLE_GATEWAY_SEARCH_URL,
        urlencoding::encode(reference),
        bible_version
    )
}

/// Substitutes one chapter/verse position into a cross-reference template.
///
/// Recognized placeholders: `{abbrev}`, `{chapter}` (unpadded), `{chapter2}`
/// (zero-padded to two digits, wider chapters kept at full width), and
/// `{verse}`. Every occurrence of each placeholder is replaced.
///
/// # Examples
///
/// ```
/// use verse_tools::format_cross_reference_link;
///
/// let link = format_cross_reference_link("Matt", 5, 3, "[[{abbrev}-{chapter2}#v{verse}]]");
/// assert_eq!(link, "[[Matt-05#v3]]");
/// ```
pub fn format_cross_reference_link(
    abbrev: &str,
    chapter: u32,
    verse: u32,
    template: &str,
) -> String {
    template
        .replace("{abbrev}", abbrev)
        .replace("{chapter2}", &format!("{chapter:02}"))
        .replace("{chapter}", &chapter.to_string())
        .replace("{verse}", &verse.to_string())
}

/// Builds the cross-reference portion for one verse range.
///
/// An explicit range produces two links joined by " - "; a range whose ends
/// coincide collapses to a single link.
pub fn cross_reference_span(info: BookInfo, range: VerseRange, template: &str) -> String {
    let start = verse_link(info, range.chapter, range.start_verse, template);
    match range.end_verse {
        Some(end) if end != range.start_verse => {
            let end_link = verse_link(info, range.chapter, end, template);
            format!("{} - {}", start, end_link)
        }
        _ => start,
    }
}

fn verse_link(info: BookInfo, chapter: u32, verse: u32, template: &str) -> String {
    // Single-chapter books cited with a chapter other than 1 are addressed
    // without a chapter element at all.
    if info.single_chapter && chapter != 1 {
        return format!("[[{}#v{}]]", info.abbrev, verse);
    }
    format_cross_reference_link(info.abbrev, chapter, verse, template)
}

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Builds the catechism citation link.
///
/// The label keeps the matched paragraph list as written; the URL parameter
/// encodes whitespace runs as `%20` and leaves digits, hyphens, and commas
/// untouched.
pub fn catechism_link(numbers: &str) -> String {
    let url_param = WHITESPACE_RUN_RE.replace_all(numbers, "%20");
    format!("[CCC {}]({}{})", numbers, CATECHISM_SEARCH_URL, url_param)
}
