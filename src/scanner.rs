//! Reference scanner.
//!
//! Finds candidate citation spans for the three grammars: backtick-wrapped
//! scriptural references, bare scriptural references, and catechism ("CCC")
//! references. Candidates inside already-rendered links are filtered out by
//! an explicit span scan instead of regex look-around.

use once_cell::sync::Lazy;
use regex::Regex;

/// A scriptural reference candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptureMatch {
    /// The book token as written, e.g. "1 Samuel".
    pub book: String,
    /// The chapter:verse tail as written, trimmed.
    pub tail: String,
    /// Start and end byte positions of the replaceable span.
    pub span: (usize, usize),
}

/// A catechism reference candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatechismMatch {
    /// The paragraph list as written, trimmed, e.g. "528-530, 610-612".
    pub numbers: String,
    /// Start and end byte positions of the replaceable span.
    pub span: (usize, usize),
}

/// Book names as they may appear in running text. Bare "Samuel", "Kings"
/// etc. are listed so that numbered books match; whether a matched name is
/// actually resolvable is the registry's call, not the scanner's.
const GRAMMAR_BOOK_NAMES: &[&str] = &[
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "Samuel",
    "Kings",
    "Chronicles",
    "Ezra",
    "Nehemiah",
    "Tobit",
    "Judith",
    "Esther",
    "Maccabees",
    "Job",
    "Psalms?",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Song of Songs",
    r"Wisdom(?:\s+of\s+Ben\s+Sira)?",
    "Sirach",
    "Ecclesiasticus",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Baruch",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "Thessalonians",
    "Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "Peter",
    "Jude",
    "Revelation",
];

/// Chapter:verse tail grammar: a first chapter:verse group with an optional
/// range, then up to 16 further comma-separated groups. The repetition cap
/// bounds scan work on pathological digit/comma runs.
const TAIL_PATTERN: &str =
    r"\d+\s*[:.]\s*\d+(?:\s*[-–]\s*\d+)?(?:\s*,\s*(?:\d+\s*[:.]\s*)?\d+(?:\s*[-–]\s*\d+)?){0,16}";

fn book_name_pattern() -> String {
    GRAMMAR_BOOK_NAMES.join("|")
}

/// Backtick-wrapped reference, optional trailing colon inside the backticks.
static BACKTICK_REF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)`((?:[123]\s)?(?:{}))\s+({})\s*:?\s*`",
        book_name_pattern(),
        TAIL_PATTERN
    ))
    .unwrap()
});

/// Pre-filter for bare references: the book token and the whitespace after
/// it. The tail is matched separately so the alternation stays small.
static BOOK_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b((?:[123]\s)?(?:{}))\s+",
        book_name_pattern()
    ))
    .unwrap()
});

/// Anchored tail matcher applied right after a book token.
static TAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\A(?:{})", TAIL_PATTERN)).unwrap());

/// Catechism reference: "CCC" plus comma-separated paragraph numbers/ranges.
static CCC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bCCC\s+(\d+(?:\s*[-–]\s*\d+)?(?:\s*,\s*\d+(?:\s*[-–]\s*\d+)?){0,16})")
        .unwrap()
});

/// Inline markdown link: `[label](target)`.
static MARKDOWN_LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]\([^)]*\)").unwrap());

/// Wiki-style link: `[[target]]`. Treated as existing-link territory so
/// synthesized cross-reference anchors survive re-runs.
static WIKI_LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[[^\]]+\]\]").unwrap());

/// Returns the byte spans of all links already present in the text, in
/// ascending order.
pub fn existing_link_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = MARKDOWN_LINK_RE
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();
    spans.extend(WIKI_LINK_RE.find_iter(text).map(|m| (m.start(), m.end())));
    spans.sort_unstable();
    spans
}

fn overlaps_any(span: (usize, usize), ranges: &[(usize, usize)]) -> bool {
    ranges
        .iter()
        .any(|&(start, end)| span.0 < end && start < span.1)
}

/// True when the character immediately before `pos` is one of `blocked`.
fn preceded_by(text: &str, pos: usize, blocked: &[char]) -> bool {
    text[..pos]
        .chars()
        .next_back()
        .map_or(false, |c| blocked.contains(&c))
}

/// Scans for backtick-wrapped scriptural references.
///
/// The returned span covers the backticks, so replacing it strips them.
pub fn scan_backtick_refs(text: &str) -> Vec<ScriptureMatch> {
    let exclusions = existing_link_spans(text);

    BACKTICK_REF_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0).unwrap();
            let span = (whole.start(), whole.end());
            if overlaps_any(span, &exclusions) {
                return None;
            }
            Some(ScriptureMatch {
                book: caps.get(1).unwrap().as_str().to_string(),
                tail: caps.get(2).unwrap().as_str().trim().to_string(),
                span,
            })
        })
        .collect()
}

/// Scans for bare scriptural references.
///
/// Two-stage matching: the book-token pre-filter finds "1 Samuel " and the
/// anchored tail matcher then claims "16:1, 16:4-13" from the position right
/// after it. Candidates inside existing links, or directly preceded by `[`
/// or `(`, are discarded whole. Scanning resumes after a claimed tail, so
/// accepted matches never overlap.
pub fn scan_bare_refs(text: &str) -> Vec<ScriptureMatch> {
    let exclusions = existing_link_spans(text);
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(caps) = BOOK_TOKEN_RE.captures_at(text, pos) {
        let token = caps.get(0).unwrap();
        let book = caps.get(1).unwrap();
        let tail_start = token.end();

        let Some(tail) = TAIL_RE.find(&text[tail_start..]) else {
            // Book name without a chapter:verse tail; keep looking after
            // the consumed whitespace.
            pos = tail_start;
            continue;
        };
        let end = tail_start + tail.end();
        let span = (book.start(), end);
        pos = end;

        if overlaps_any(span, &exclusions) || preceded_by(text, span.0, &['[', '(']) {
            continue;
        }
        matches.push(ScriptureMatch {
            book: book.as_str().to_string(),
            tail: text[tail_start..end].trim().to_string(),
            span,
        });
    }

    matches
}

/// Scans for catechism references.
pub fn scan_catechism_refs(text: &str) -> Vec<CatechismMatch> {
    let exclusions = existing_link_spans(text);

    CCC_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0).unwrap();
            let span = (whole.start(), whole.end());
            if overlaps_any(span, &exclusions) || preceded_by(text, span.0, &['[']) {
                return None;
            }
            Some(CatechismMatch {
                numbers: caps.get(1).unwrap().as_str().trim().to_string(),
                span,
            })
        })
        .collect()
}
