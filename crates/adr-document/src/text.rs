//! Text utilities shared by every scoring heuristic
//!
//! All term matching is word-bounded: the character before a match and the
//! character after it must not be alphanumeric. A term ending in `*` is a
//! prefix and skips the trailing check. Haystacks are expected lowercase.

/// Characters that carry markup but no content
pub const MARKUP_CHARS: &[char] = &['#', '*', '_', '`', '>', '-', '=', '|', '~'];

/// Whether `raw` contains at least one non-whitespace, non-markup character
#[must_use]
pub fn has_content(raw: &str) -> bool {
    raw.chars()
        .any(|c| !c.is_whitespace() && c != '\u{feff}' && !MARKUP_CHARS.contains(&c))
}

/// Words: whitespace-separated tokens trimmed of surrounding punctuation,
/// keeping only tokens with at least one alphanumeric character
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
}

/// Number of [`words`]
#[must_use]
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Sentences: split at line breaks and at `.`, `!` or `?` followed by
/// whitespace or end of text. Fragments without an alphanumeric character are
/// dropped.
#[must_use]
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for line in text.lines() {
        let mut start = 0;
        let mut chars = line.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if matches!(c, '.' | '!' | '?') {
                let at_break = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
                if at_break {
                    push_sentence(&mut out, &line[start..=i]);
                    start = i + c.len_utf8();
                }
            }
        }
        push_sentence(&mut out, &line[start..]);
    }
    out
}

fn push_sentence<'a>(out: &mut Vec<&'a str>, fragment: &'a str) {
    let fragment = fragment.trim();
    if fragment.chars().any(char::is_alphanumeric) {
        out.push(fragment);
    }
}

/// Occurrences of `term` in `haystack` at word boundaries
#[must_use]
pub fn count_term(haystack: &str, term: &str) -> usize {
    let (needle, prefix) = match term.strip_suffix('*') {
        Some(stem) => (stem, true),
        None => (term, false),
    };
    if needle.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = prefix
            || haystack[end..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            count += 1;
            from = end;
        } else {
            from = start + needle.chars().next().map_or(1, char::len_utf8);
        }
    }
    count
}

/// Whether `term` occurs in `haystack`
#[inline]
#[must_use]
pub fn contains_term(haystack: &str, term: &str) -> bool {
    count_term(haystack, term) > 0
}

/// Whether any of `terms` occurs in `haystack`
#[must_use]
pub fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| contains_term(haystack, t))
}

/// Total occurrences of all `terms`
#[must_use]
pub fn count_terms(haystack: &str, terms: &[&str]) -> usize {
    terms.iter().map(|t| count_term(haystack, t)).sum()
}

/// Terms from `terms` that occur in `haystack`, in list order
#[must_use]
pub fn matched_terms<'t>(haystack: &str, terms: &[&'t str]) -> Vec<&'t str> {
    terms
        .iter()
        .copied()
        .filter(|t| contains_term(haystack, t))
        .collect()
}

/// Section key for a heading: lowercase, non-alphanumerics become spaces,
/// whitespace collapsed
#[must_use]
pub fn normalize_key(heading: &str) -> String {
    let mapped: String = heading
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `count` per 100 of `total`, 0 when `total` is 0
#[inline]
#[must_use]
pub fn per_hundred(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}
