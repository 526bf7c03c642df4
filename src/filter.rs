use std::collections::HashMap;
use thiserror::Error;

/// A constraint token that does not have the `<letter>=<position>` shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid constraint '{token}': expected <letter>=<position>, e.g. п=1")]
pub struct ValidationError {
    pub token: String,
}

/// Parses raw `<letter>=<position>` tokens into a position-per-letter map.
///
/// The letter must be a single alphabetic character (case-sensitive, ё/Ё
/// included) and the position a non-negative decimal integer. If the same
/// letter appears twice, the later token wins.
pub fn parse_constraints<I, S>(tokens: I) -> Result<HashMap<char, usize>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut constraints = HashMap::new();
    for token in tokens {
        let token = token.as_ref();
        let (letter, position) = parse_token(token).ok_or_else(|| ValidationError {
            token: token.to_string(),
        })?;
        constraints.insert(letter, position);
    }
    Ok(constraints)
}

fn parse_token(token: &str) -> Option<(char, usize)> {
    let (key, value) = token.split_once('=')?;
    let mut key_chars = key.chars();
    let letter = key_chars.next()?;
    if key_chars.next().is_some() || !letter.is_alphabetic() {
        return None;
    }
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let position = value.parse().ok()?;
    Some((letter, position))
}

/// Conjunction of an optional exact-length requirement and fixed
/// letter-at-position requirements (1-based).
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    pub length: Option<usize>,
    pub positions: HashMap<char, usize>,
}

impl WordFilter {
    pub fn new(length: Option<usize>, positions: HashMap<char, usize>) -> Self {
        Self { length, positions }
    }

    /// True when the word satisfies every constraint. A position past the
    /// end of the word is a non-match, not an error; position 0 has no
    /// 1-based equivalent and matches nothing.
    pub fn matches(&self, word: &str) -> bool {
        if let Some(required) = self.length {
            if word.chars().count() != required {
                return false;
            }
        }
        self.positions.iter().all(|(&letter, &position)| {
            position
                .checked_sub(1)
                .and_then(|idx| word.chars().nth(idx))
                == Some(letter)
        })
    }
}

/// Lazy single-pass view of the words that satisfy the filter. With no
/// constraints this is the identity.
pub fn filter_words<'a>(
    words: &'a [String],
    filter: &'a WordFilter,
) -> impl Iterator<Item = &'a str> {
    words
        .iter()
        .map(String::as_str)
        .filter(move |word| filter.matches(word))
}
