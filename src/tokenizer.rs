use std::sync::LazyLock;

use regex::Regex;

/// Characters a token can be made of: letters, numerics, underscores, apostrophes and hyphens.
/// Combining marks are not part of the class.
/// Every token lies inside one such run, so runs are split independently.
static WORD_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}_'\-]+").expect("word run pattern must compile")
});

/// Tokenizer
/// Splits a document into word tokens, left to right, keeping duplicates.
///
/// At every position three rules are tried in order:
/// - acronym: two or more uppercase letters not followed by a lowercase one (`USA`)
/// - camel head: a capitalized word directly followed by an uppercase letter (`Foo` in `FooBar`)
/// - general word: two or more word characters, apostrophes or hyphens
///
/// Nothing is case folded, and single characters never become tokens.
///
/// # Examples
/// ```
/// use tf_idf_scorer::Tokenizer;
/// let tokenizer = Tokenizer::new();
/// assert_eq!(tokenizer.tokenize("HTTPServer is up"), vec!["HTTP", "Server", "is", "up"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer
    }

    /// Tokenize a document
    ///
    /// # Arguments
    /// * `document` - raw document text
    ///
    /// # Returns
    /// * `Vec<String>` - tokens in order of occurrence
    pub fn tokenize(&self, document: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for run in WORD_RUN.find_iter(document) {
            split_run(run.as_str(), &mut tokens);
        }
        tokens
    }
}

/// Tokenize a document with the default tokenizer
pub fn tokenize(document: &str) -> Vec<String> {
    Tokenizer::new().tokenize(document)
}

fn split_run(run: &str, tokens: &mut Vec<String>) {
    let chars: Vec<(usize, char)> = run.char_indices().collect();
    let mut pos = 0;
    while pos < chars.len() {
        let rest = &chars[pos..];
        let matched = acronym_len(rest)
            .or_else(|| camel_head_len(rest))
            .or_else(|| (rest.len() >= 2).then_some(rest.len()));
        match matched {
            Some(len) => {
                let start = rest[0].0;
                let end = rest.get(len).map_or(run.len(), |&(idx, _)| idx);
                tokens.push(run[start..end].to_string());
                pos += len;
            }
            None => pos += 1,
        }
    }
}

/// `[A-Z]{2,}` not followed by `[a-z]`, giving back one letter when the greedy run is.
fn acronym_len(chars: &[(usize, char)]) -> Option<usize> {
    let upper = chars
        .iter()
        .take_while(|(_, c)| c.is_ascii_uppercase())
        .count();
    if upper < 2 {
        return None;
    }
    match chars.get(upper) {
        Some((_, c)) if c.is_ascii_lowercase() => (upper > 2).then_some(upper - 1),
        _ => Some(upper),
    }
}

/// `[A-Z][a-z]+` followed by `[A-Z]`.
fn camel_head_len(chars: &[(usize, char)]) -> Option<usize> {
    let (_, first) = chars.first()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    let lower = chars[1..]
        .iter()
        .take_while(|(_, c)| c.is_ascii_lowercase())
        .count();
    if lower == 0 {
        return None;
    }
    match chars.get(1 + lower) {
        Some((_, c)) if c.is_ascii_uppercase() => Some(1 + lower),
        _ => None,
    }
}
