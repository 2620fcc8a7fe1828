//! Boundary-safe trigger matching
//!
//! A trigger occurrence counts only when it starts at the beginning of the
//! text or right after a whitespace character, and ends at the end of the
//! text or right before whitespace or a Unicode punctuation character.
//! Comparison is case-insensitive per code point.
//!
//! The trailing boundary is a lookahead: it is never part of the match, so
//! `"go go"` yields two matches for `go`. The leading whitespace *is* part
//! of the match and cannot be shared with a previous match's trailing
//! boundary in a way that overlaps it.

use unicode_general_category::{get_general_category, GeneralCategory};

/// A single trigger phrase prepared for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    /// Phrase as written in the preset, trimmed. A trigger like `" cat"`
    /// matches as `cat`; surrounding whitespace never has to appear in the text.
    pub phrase: String,
    /// Position of the phrase in the preset's trigger list
    pub index: usize,
    chars: Vec<char>,
}

impl Trigger {
    fn new(phrase: &str, index: usize) -> Self {
        let phrase = phrase.trim().to_string();
        let chars = phrase.chars().collect();
        Self {
            phrase,
            index,
            chars,
        }
    }

    /// Length in Unicode scalar values
    pub fn char_len(&self) -> usize {
        self.chars.len()
    }
}

/// Triggers in processing order: longest first, ties in preset order.
///
/// Blank triggers are dropped on construction.
#[derive(Debug, Clone, Default)]
pub struct TriggerSet {
    triggers: Vec<Trigger>,
}

impl TriggerSet {
    pub fn new<S: AsRef<str>>(triggers: &[S]) -> Self {
        let mut triggers: Vec<Trigger> = triggers
            .iter()
            .enumerate()
            .map(|(index, phrase)| Trigger::new(phrase.as_ref(), index))
            .filter(|trigger| !trigger.chars.is_empty())
            .collect();

        // `sort_by` is stable, so equal lengths keep preset order.
        triggers.sort_by(|a, b| b.char_len().cmp(&a.char_len()));

        Self { triggers }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

/// A located trigger occurrence.
///
/// Offsets are byte offsets into the scanned text. `start` includes the
/// leading whitespace character when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMatch {
    /// Start of the matched span (leading boundary included)
    pub start: usize,
    /// End of the matched span (trailing boundary excluded)
    pub end: usize,
    /// Leading whitespace consumed by the match; empty at start of text
    pub boundary: String,
    /// The trigger as it appears in the text
    pub text: String,
    /// Index of the matching trigger in the preset's trigger list
    pub trigger: usize,
}

impl TriggerMatch {
    /// The full matched substring, boundary included.
    pub fn matched<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Find every boundary-safe occurrence of `trigger` in `text`, left to right.
///
/// Matches never overlap. Scanning resumes right after the end of the
/// previous match, so the character that closed one match may open the
/// next one.
pub fn find_matches(text: &str, trigger: &Trigger) -> Vec<TriggerMatch> {
    let mut matches = Vec::new();
    if trigger.chars.is_empty() {
        return matches;
    }

    let mut cursor = 0;
    let mut prev: Option<(usize, char)> = None;

    for (pos, c) in text.char_indices() {
        let boundary_start = match prev {
            None if cursor == 0 => Some(pos),
            Some((p, before)) if p >= cursor && is_space(before) => Some(p),
            _ => None,
        };
        prev = Some((pos, c));

        let Some(boundary_start) = boundary_start else {
            continue;
        };
        let Some(end) = match_at(text, pos, &trigger.chars) else {
            continue;
        };
        if !text[end..].chars().next().map_or(true, is_trailing_boundary) {
            continue;
        }

        matches.push(TriggerMatch {
            start: boundary_start,
            end,
            boundary: text[boundary_start..pos].to_string(),
            text: text[pos..end].to_string(),
            trigger: trigger.index,
        });
        cursor = end;
    }

    matches
}

/// Find matches for every trigger of the set against the same text.
///
/// Read-only convenience: each trigger scans the unmodified `text`, so
/// results for different triggers may overlap. The augmenter instead scans
/// trigger by trigger over the evolving text.
pub fn find_all(text: &str, triggers: &TriggerSet) -> Vec<TriggerMatch> {
    triggers
        .iter()
        .flat_map(|trigger| find_matches(text, trigger))
        .collect()
}

/// Compare `pattern` against `text` starting at byte `pos`; return the end
/// byte offset on success.
fn match_at(text: &str, pos: usize, pattern: &[char]) -> Option<usize> {
    let mut chars = text[pos..].char_indices();
    for &expected in pattern {
        let (_, actual) = chars.next()?;
        if !chars_eq_ignore_case(actual, expected) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len(), |(offset, _)| pos + offset))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || simple_lower(a) == simple_lower(b) || simple_upper(a) == simple_upper(b)
}

/// Lowercase mapping when it is a single code point, else the char itself.
fn simple_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Whitespace as a boundary: Unicode White_Space without NEL (U+0085),
/// plus the BOM.
#[inline]
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Unicode general category P*.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

#[inline]
fn is_trailing_boundary(c: char) -> bool {
    is_space(c) || is_punctuation(c)
}
