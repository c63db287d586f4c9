//! Book registry.
//!
//! Maps canonical book names of the 73-book Catholic canon (plus accepted
//! aliases) to the abbreviations used in cross-reference links.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Metadata for one canonical book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookInfo {
    /// Abbreviation used in cross-reference link targets, e.g. "Gen", "1 Sam".
    pub abbrev: &'static str,
    /// True for books with only one chapter (Obadiah, Philemon, 2 John,
    /// 3 John, Jude); their links omit the chapter number.
    pub single_chapter: bool,
}

const fn book(abbrev: &'static str, single_chapter: bool) -> BookInfo {
    BookInfo {
        abbrev,
        single_chapter,
    }
}

/// Single source of truth for the canon: (normalized name, book info).
/// Keys are lower-case with single internal spaces.
const BOOK_TABLE: &[(&str, BookInfo)] = &[
    // --- Old Testament ---
    ("genesis", book("Gen", false)),
    ("exodus", book("Exod", false)),
    ("leviticus", book("Lev", false)),
    ("numbers", book("Num", false)),
    ("deuteronomy", book("Deut", false)),
    ("joshua", book("Josh", false)),
    ("judges", book("Judg", false)),
    ("ruth", book("Ruth", false)),
    ("1 samuel", book("1 Sam", false)),
    ("2 samuel", book("2 Sam", false)),
    ("1 kings", book("1 Kings", false)),
    ("2 kings", book("2 Kings", false)),
    ("1 chronicles", book("1 Chron", false)),
    ("2 chronicles", book("2 Chron", false)),
    ("ezra", book("Ezr", false)),
    ("nehemiah", book("Neh", false)),
    ("tobit", book("Tob", false)),
    ("judith", book("Jdt", false)),
    ("esther", book("Esth", false)),
    ("1 maccabees", book("1 Macc", false)),
    ("2 maccabees", book("2 Macc", false)),
    ("job", book("Job", false)),
    ("psalm", book("Ps", false)),
    ("psalms", book("Ps", false)),
    ("proverbs", book("Prov", false)),
    ("ecclesiastes", book("Eccles", false)),
    ("song of solomon", book("Song", false)),
    ("song of songs", book("Song", false)),
    ("wisdom", book("Wis", false)),
    ("sirach", book("Sir", false)),
    ("wisdom of ben sira", book("Sir", false)),
    ("ecclesiasticus", book("Sir", false)),
    ("isaiah", book("Isa", false)),
    ("jeremiah", book("Jer", false)),
    ("lamentations", book("Lam", false)),
    ("baruch", book("Bar", false)),
    ("ezekiel", book("Ezek", false)),
    ("daniel", book("Dan", false)),
    ("hosea", book("Hos", false)),
    ("joel", book("Joel", false)),
    ("amos", book("Am", false)),
    ("obadiah", book("Obad", true)),
    ("jonah", book("Jonah", false)),
    ("micah", book("Micah", false)),
    ("nahum", book("Nah", false)),
    ("habakkuk", book("Hab", false)),
    ("zephaniah", book("Zeph", false)),
    ("haggai", book("Hag", false)),
    ("zechariah", book("Zech", false)),
    ("malachi", book("Mal", false)),
    // --- New Testament ---
    ("matthew", book("Matt", false)),
    ("mark", book("Mark", false)),
    ("luke", book("Luke", false)),
    ("john", book("John", false)),
    ("acts", book("Acts", false)),
    ("romans", book("Rom", false)),
    ("1 corinthians", book("1 Cor", false)),
    ("2 corinthians", book("2 Cor", false)),
    ("galatians", book("Gal", false)),
    ("ephesians", book("Ephes", false)),
    ("philippians", book("Phil", false)),
    ("colossians", book("Col", false)),
    ("1 thessalonians", book("1 Thess", false)),
    ("2 thessalonians", book("2 Thess", false)),
    ("1 timothy", book("1 Tim", false)),
    ("2 timothy", book("2 Tim", false)),
    ("titus", book("Titus", false)),
    ("philemon", book("Philem", true)),
    ("hebrews", book("Heb", false)),
    ("james", book("James", false)),
    ("1 peter", book("1 Pet", false)),
    ("2 peter", book("2 Pet", false)),
    ("1 john", book("1 John", false)),
    ("2 john", book("2 John", true)),
    ("3 john", book("3 John", true)),
    ("jude", book("Jude", true)),
    ("revelation", book("Rev", false)),
];

static BOOK_MAP: Lazy<HashMap<&'static str, BookInfo>> =
    Lazy::new(|| BOOK_TABLE.iter().copied().collect());

/// Looks up a book by name.
///
/// Matching is case-insensitive and ignores surrounding whitespace as well as
/// repeated internal whitespace. No partial or fuzzy matching is performed:
/// "Maccabees" without its leading digit is unknown.
///
/// # Arguments
///
/// * `name` - Full book name or alias, e.g. "Genesis", "1 Samuel", "psalms"
///
/// # Returns
///
/// The book's info if the name is recognized, or None.
///
/// # Examples
///
/// ```
/// use verse_tools::lookup_book;
///
/// assert_eq!(lookup_book("1 Samuel").unwrap().abbrev, "1 Sam");
/// assert_eq!(lookup_book("  GENESIS  ").unwrap().abbrev, "Gen");
/// assert!(lookup_book("Maccabees").is_none());
/// ```
pub fn lookup_book(name: &str) -> Option<BookInfo> {
    let normalized = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    BOOK_MAP.get(normalized.as_str()).copied()
}

/// Returns every registry entry as (normalized name, info) pairs, in
/// canonical order. Alias names appear as separate entries.
pub fn book_entries() -> &'static [(&'static str, BookInfo)] {
    BOOK_TABLE
}
