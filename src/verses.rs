//! Verse specification parser.
//!
//! Parses the chapter:verse tail of a scriptural reference, e.g.
//! "16:1, 16:4-13" or "23:1, 4, 6", into typed verse ranges. A chapter stated
//! in one segment carries over to following bare-verse segments.

use once_cell::sync::Lazy;
use regex::Regex;

/// A single chapter/verse selection within one book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRange {
    /// Chapter number, always positive.
    pub chapter: u32,
    /// First (or only) verse of the selection, always positive.
    pub start_verse: u32,
    /// End verse for explicit ranges like "4-13". Equal start and end are
    /// collapsed to a single verse at rendering time, not here.
    pub end_verse: Option<u32>,
}

/// Segment with its own chapter: "16:1", "3.16-18".
static FULL_SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*[:.]\s*(\d+)(?:\s*[-–]\s*(\d+))?$").unwrap());

/// Segment inheriting the running chapter: "4", "4-13".
static BARE_SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:\s*[-–]\s*(\d+))?$").unwrap());

/// Parses a verse specification tail into ordered verse ranges.
///
/// The tail is split on commas. A segment of the form `chapter:verse`
/// (period also accepted as separator) sets the running chapter; a bare
/// `verse` or `verse-verse` segment inherits it. Segments that are malformed,
/// contain a zero, or overflow are skipped without failing the whole parse;
/// a bare-verse segment before any chapter has been stated is likewise
/// skipped.
///
/// # Examples
///
/// ```
/// use verse_tools::{parse_verse_spec, VerseRange};
///
/// let ranges = parse_verse_spec("16:1, 16:4-13");
/// assert_eq!(
///     ranges,
///     vec![
///         VerseRange { chapter: 16, start_verse: 1, end_verse: None },
///         VerseRange { chapter: 16, start_verse: 4, end_verse: Some(13) },
///     ]
/// );
/// ```
pub fn parse_verse_spec(tail: &str) -> Vec<VerseRange> {
    let mut ranges = Vec::new();
    let mut current_chapter: Option<u32> = None;

    for segment in tail.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        if let Some(caps) = FULL_SEGMENT_RE.captures(segment) {
            // A rejected number drops the whole segment, leaving the
            // running chapter untouched.
            if let Some(range) = full_segment_range(&caps) {
                current_chapter = Some(range.chapter);
                ranges.push(range);
            }
        } else if let Some(caps) = BARE_SEGMENT_RE.captures(segment) {
            // Bare verses before any chapter has been stated are skipped.
            if let Some(chapter) = current_chapter {
                if let Some(range) = bare_segment_range(&caps, chapter) {
                    ranges.push(range);
                }
            }
        }
    }

    ranges
}

fn full_segment_range(caps: &regex::Captures) -> Option<VerseRange> {
    let chapter = parse_positive(&caps[1])?;
    let start_verse = parse_positive(&caps[2])?;
    let end_verse = match caps.get(3) {
        Some(m) => Some(parse_positive(m.as_str())?),
        None => None,
    };
    Some(VerseRange {
        chapter,
        start_verse,
        end_verse,
    })
}

fn bare_segment_range(caps: &regex::Captures, chapter: u32) -> Option<VerseRange> {
    let start_verse = parse_positive(&caps[1])?;
    let end_verse = match caps.get(2) {
        Some(m) => Some(parse_positive(m.as_str())?),
        None => None,
    };
    Some(VerseRange {
        chapter,
        start_verse,
        end_verse,
    })
}

/// Parses a digit run as a positive u32; zero and overflow are rejected.
fn parse_positive(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|n| *n > 0)
}
