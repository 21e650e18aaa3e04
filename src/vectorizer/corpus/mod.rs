use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::TermFrequency;

/// keep document count and document frequency of every term
/// A term counts once per document no matter how often it occurs there.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// number of documents containing each term
    term_counts: IndexMap<String, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Add a document's terms to the corpus
    pub fn add_set(&mut self, freq: &TermFrequency) -> &mut Self {
        self.doc_num += 1;
        for term in freq.term_set_iter() {
            *self.term_counts.entry(term.to_string()).or_insert(0) += 1;
        }
        self
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the number of documents containing `term`
    /// `None` when no document contains it.
    #[inline]
    pub fn doc_freq(&self, term: &str) -> Option<u64> {
        self.term_counts.get(term).copied()
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts
            .iter()
            .map(|(term, &count)| (term.as_str(), count))
    }
}

impl<'a> FromIterator<&'a TermFrequency> for Corpus {
    fn from_iter<I: IntoIterator<Item = &'a TermFrequency>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for freq in iter {
            corpus.add_set(freq);
        }
        corpus
    }
}

/// Build the document frequency of every term over all documents
///
/// # Arguments
/// * `term_freqs` - one TermFrequency per document
///
/// # Returns
/// * `Corpus` - document count and per-term document frequency
pub fn document_frequency(term_freqs: &[TermFrequency]) -> Corpus {
    term_freqs.iter().collect()
}
