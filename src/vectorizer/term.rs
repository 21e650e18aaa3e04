use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TermFrequency struct
/// Counts how many times each term occurs in a single document.
/// Terms keep the order in which they were first seen.
///
/// # Examples
/// ```
/// use tf_idf_scorer::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("term1");
/// term_freq.add_term("term2");
/// term_freq.add_term("term1");
///
/// assert_eq!(term_freq.term_count("term1"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Set the occurrence count for a term
    /// A count of 0 removes the term.
    ///
    /// # Arguments
    /// * `term` - term
    /// * `count` - Occurrence count
    pub fn set_term_count(&mut self, term: &str, count: u64) -> &mut Self {
        if count == 0 {
            if let Some(old) = self.term_count.shift_remove(term) {
                self.total_term_count -= old;
            }
        } else {
            let current_count = self.term_count.entry(term.to_string()).or_insert(0);
            self.total_term_count = self.total_term_count - *current_count + count;
            *current_count = count;
        }
        self
    }
}

impl<T> From<&[T]> for TermFrequency
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut tf = TermFrequency::new();
        tf.add_terms(terms);
        tf
    }
}

/// Implementation for retrieving information from TermFrequency
impl TermFrequency {
    /// Get iterator over all terms and their counts, in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count
            .iter()
            .map(|(term, &count)| (term.as_str(), count))
    }

    /// Get the total count of all terms
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Get the occurrence count for a specific term
    ///
    /// # Arguments
    /// * `term` - term
    ///
    /// # Returns
    /// * `u64` - Occurrence count for the term, 0 if absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// term_set_iter
    ///
    /// # Returns
    /// * `impl Iterator<Item=&str>` - Iterator over the set of terms
    #[inline]
    pub fn term_set_iter(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(|s| s.as_str())
    }

    /// Get the number of unique terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }
}

/// Count the terms of one tokenized document
///
/// # Arguments
/// * `tokens` - tokens of the document, in any order
///
/// # Returns
/// * `TermFrequency` - occurrence count of every token
pub fn term_frequency<T>(tokens: &[T]) -> TermFrequency
where
    T: AsRef<str>,
{
    TermFrequency::from(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_terms() {
        let tf = term_frequency(&["google", "facebook", "google", "twitter"]);
        assert_eq!(tf.term_count("google"), 2);
        assert_eq!(tf.term_count("facebook"), 1);
        assert_eq!(tf.term_count("twitter"), 1);
        assert_eq!(tf.term_num(), 3);
        assert_eq!(tf.term_sum(), 4);
    }

    #[test]
    fn empty_tokens_give_empty_map() {
        let tf = term_frequency::<&str>(&[]);
        assert!(tf.is_empty());
        assert_eq!(tf.term_sum(), 0);
        assert_eq!(tf.term_count("anything"), 0);
    }

    #[test]
    fn keeps_first_seen_order() {
        let tf = term_frequency(&["b", "a", "b", "c"]);
        let terms: Vec<&str> = tf.term_set_iter().collect();
        assert_eq!(terms, vec!["b", "a", "c"]);
    }

    #[test]
    fn permutation_does_not_change_counts() {
        let a = term_frequency(&["x", "y", "x", "z", "y", "x"]);
        let b = term_frequency(&["z", "x", "y", "y", "x", "x"]);
        assert_eq!(a, b);
    }

    #[test]
    fn set_term_count_keeps_total_in_sync() {
        let mut tf = TermFrequency::new();
        tf.add_terms(&["a", "a", "b"]);
        tf.set_term_count("a", 5);
        assert_eq!(tf.term_sum(), 6);
        tf.set_term_count("b", 0);
        assert_eq!(tf.term_sum(), 5);
        assert_eq!(tf.term_count("b"), 0);
        assert_eq!(tf.term_num(), 1);
    }
}
