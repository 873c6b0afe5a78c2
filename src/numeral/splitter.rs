//! Splitting digit text against an alphabet
//!
//! An alphabet with uniform digit-text width is split by slicing; anything
//! else is matched digit-by-digit from the front of the input. Matching a
//! position against more than one digit text is a tokenization failure,
//! reported rather than resolved.

use std::collections::HashMap;

use crate::ConversionError;
use super::glyph::Glyph;


/// Parsing and rendering table for an alphabet's digit texts
///
/// Built once per numeral system, the first time a text operation runs.
#[derive(Debug, Clone)]
pub(crate) struct TextTable {
    /// canonical digit text, indexed by digit value
    texts: Vec<String>,
    /// token (exact or folded, per `case_sensitive`) to digit value
    lookup: HashMap<String, u64>,
    /// byte width shared by every digit text, when uniform and nonzero
    fixed_width: Option<usize>,
    /// two digit texts differ only by ASCII case, so folding is disabled
    case_sensitive: bool,
    /// some digit text is a prefix of another under the active case rule
    conflicted: bool,
}

impl TextTable {
    pub fn build<S: Glyph>(symbols: &[S]) -> TextTable {
        let texts: Vec<String> = symbols.iter().map(Glyph::glyph).collect();
        let folded: Vec<String> = texts.iter().map(|t| t.to_ascii_lowercase()).collect();

        let mut fold_sorted: Vec<&str> = folded.iter().map(String::as_str).collect();
        fold_sorted.sort_unstable();
        let case_sensitive = fold_sorted.windows(2).any(|w| w[0] == w[1]);

        let conflicted = if case_sensitive {
            let mut exact_sorted: Vec<&str> = texts.iter().map(String::as_str).collect();
            exact_sorted.sort_unstable();
            adjacent_prefix(&exact_sorted)
        } else {
            adjacent_prefix(&fold_sorted)
        };

        let fixed_width = match texts.first() {
            Some(first) if !first.is_empty() && texts.iter().all(|t| t.len() == first.len()) => {
                Some(first.len())
            }
            _ => None,
        };

        let mut lookup = HashMap::with_capacity(texts.len());
        for (value, text) in texts.iter().enumerate() {
            let key = if case_sensitive {
                text.clone()
            } else {
                folded[value].clone()
            };
            lookup.insert(key, value as u64);
        }

        TextTable {
            texts,
            lookup,
            fixed_width,
            case_sensitive,
            conflicted,
        }
    }

    /// Canonical text of a digit value
    ///
    /// Panics if the value is outside the alphabet.
    pub fn text_of(&self, value: u64) -> &str {
        &self.texts[value as usize]
    }

    /// Look up a whole token under the active case rule
    pub fn value_of(&self, token: &str) -> Option<u64> {
        if self.case_sensitive {
            self.lookup.get(token).copied()
        } else {
            self.lookup.get(&token.to_ascii_lowercase()).copied()
        }
    }

    pub fn fixed_width(&self) -> Option<usize> {
        self.fixed_width
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Split text into digit values, most significant first
    pub fn split(&self, input: &str) -> Result<Vec<u64>, ConversionError> {
        match self.fixed_width {
            Some(width) => self.split_fixed(input, width),
            None => self.split_scan(input),
        }
    }

    fn split_fixed(&self, input: &str, width: usize) -> Result<Vec<u64>, ConversionError> {
        let mut digits = Vec::with_capacity(input.len() / width);
        let mut pos = 0;
        while pos < input.len() {
            let token = match input.get(pos..pos + width) {
                Some(token) => token,
                None => return Err(invalid_at(input, pos)),
            };
            match self.value_of(token) {
                Some(value) => digits.push(value),
                None => return Err(ConversionError::InvalidDigit(token.to_string())),
            }
            pos += width;
        }
        Ok(digits)
    }

    fn split_scan(&self, input: &str) -> Result<Vec<u64>, ConversionError> {
        let mut digits = Vec::new();
        let mut pos = 0;
        while pos < input.len() {
            let tail = &input[pos..];
            let mut matched: Option<(u64, usize)> = None;
            for (value, text) in self.texts.iter().enumerate() {
                if text.is_empty() || !self.token_starts(tail, text) {
                    continue;
                }
                if matched.is_some() {
                    return Err(ConversionError::UnsupportedTokenization);
                }
                matched = Some((value as u64, text.len()));
                if !self.conflicted {
                    break;
                }
            }
            match matched {
                Some((value, len)) => {
                    digits.push(value);
                    pos += len;
                }
                None => return Err(invalid_at(input, pos)),
            }
        }
        Ok(digits)
    }

    fn token_starts(&self, tail: &str, text: &str) -> bool {
        match tail.get(..text.len()) {
            Some(head) if self.case_sensitive => head == text,
            Some(head) => head.eq_ignore_ascii_case(text),
            None => false,
        }
    }

    /// Join canonical digit texts, most significant first
    pub fn render_into(&self, digits: &[u64], out: &mut String) {
        for &d in digits {
            out.push_str(self.text_of(d));
        }
    }
}

/// Prefix test over lexicographically sorted unique texts
///
/// If any text is a prefix of any other, some adjacent sorted pair
/// shows it.
fn adjacent_prefix(sorted: &[&str]) -> bool {
    sorted
        .windows(2)
        .any(|w| !w[0].is_empty() && w[1].starts_with(w[0]))
}

fn invalid_at(input: &str, pos: usize) -> ConversionError {
    debug_assert!(input.is_char_boundary(pos));
    let symbol = input[pos..].chars().next().map(String::from).unwrap_or_default();
    ConversionError::InvalidDigit(symbol)
}


#[cfg(test)]
mod test {
    use super::*;

    include!("splitter.tests.rs");
}
