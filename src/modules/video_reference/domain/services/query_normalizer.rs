//! Free-text query normalization.
//!
//! Turns raw user input into either a tsquery expression for the stored
//! lexical vector or, for very short strings the stemmer would ignore, a
//! plain substring term.

/// Queries shorter than this are matched by substring instead of tsquery.
pub const SHORT_QUERY_THRESHOLD: usize = 3;

/// Characters with operator meaning inside a tsquery expression.
const RESERVED: &[char] = &['&', '|', '!', '(', ')', ':'];

/// Normalized form of a raw search string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedQuery {
    /// Short query: substring match over the searchable text columns.
    Contains(String),
    /// Full query: tsquery expression plus the raw term for similarity().
    Lexical { ts_query: String, raw: String },
}

/// Normalize a raw search string. Returns `None` for blank input or input
/// that has no tokens left after stripping reserved characters.
pub fn normalize(raw: &str) -> Option<NormalizedQuery> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.chars().count() < SHORT_QUERY_THRESHOLD {
        return Some(NormalizedQuery::Contains(trimmed.to_string()));
    }

    let ts_query = build_ts_query(trimmed)?;
    Some(NormalizedQuery::Lexical {
        ts_query,
        raw: trimmed.to_string(),
    })
}

/// Build the tsquery expression for a trimmed, non-short search term.
///
/// A term wrapped in one pair of double quotes becomes a phrase query
/// (`<->` adjacency). Otherwise every token gets a `:*` prefix marker and
/// tokens combine as: one token alone, two tokens ANDed, three or more as
/// `t1 & t2 & (t3 | t4 | ...)` so the leading terms stay mandatory.
fn build_ts_query(term: &str) -> Option<String> {
    if let Some(phrase) = term
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        let words: Vec<String> = phrase
            .split_whitespace()
            .map(strip_reserved)
            .filter(|word| !word.is_empty())
            .collect();
        if words.is_empty() {
            return None;
        }
        return Some(words.join(" <-> "));
    }

    let mut words: Vec<String> = term
        .split_whitespace()
        .map(strip_reserved)
        .filter(|word| !word.is_empty())
        .map(|word| format!("{}:*", word))
        .collect();

    match words.len() {
        0 => None,
        1 => Some(words.remove(0)),
        2 => Some(words.join(" & ")),
        _ => {
            let mandatory = words[..2].join(" & ");
            let optional = words[2..].join(" | ");
            Some(format!("{} & ({})", mandatory, optional))
        }
    }
}

fn strip_reserved(word: &str) -> String {
    word.chars().filter(|c| !RESERVED.contains(c)).collect()
}
