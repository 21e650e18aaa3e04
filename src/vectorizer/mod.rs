pub mod corpus;
pub mod term;
pub mod tfidf;

use std::marker::PhantomData;

use log::{debug, trace};
use num::Num;
use rayon::prelude::*;

use crate::tokenizer::Tokenizer;
use crate::vectorizer::{
    corpus::{document_frequency, Corpus},
    term::{term_frequency, TermFrequency},
    tfidf::{DefaultTFIDFEngine, ScoreMap, TFIDFEngine},
};

/// Scores a whole corpus in three phases:
/// count terms per document, build the corpus document frequencies,
/// then weight each document's counts with them.
///
/// `TFIDFScorer<N, E>`:
/// - `N`: score type (`f32` or `f64`)
/// - `E`: TF-IDF calculation engine
#[derive(Debug, Clone)]
pub struct TFIDFScorer<N = f64, E = DefaultTFIDFEngine>
where
    N: Num + Copy,
    E: TFIDFEngine<N>,
{
    tokenizer: Tokenizer,
    _marker: PhantomData<fn() -> (N, E)>,
}

impl<N, E> Default for TFIDFScorer<N, E>
where
    N: Num + Copy,
    E: TFIDFEngine<N>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> TFIDFScorer<N, E>
where
    N: Num + Copy,
    E: TFIDFEngine<N>,
{
    /// Create a scorer with the default tokenizer
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            _marker: PhantomData,
        }
    }

    /// Tokenize and count one document
    pub fn term_frequency(&self, document: &str) -> TermFrequency {
        term_frequency(&self.tokenizer.tokenize(document))
    }

    /// Score every document of the corpus
    ///
    /// # Arguments
    /// * `corpus` - one string per document
    ///
    /// # Returns
    /// * `Vec<ScoreMap<N>>` - one ScoreMap per document, same order as `corpus`
    pub fn tf_idf<T>(&self, corpus: &[T]) -> Vec<ScoreMap<N>>
    where
        T: AsRef<str>,
    {
        let freqs: Vec<TermFrequency> = corpus
            .iter()
            .map(|doc| self.term_frequency(doc.as_ref()))
            .collect();
        let doc_freq = self.collect_corpus(&freqs);
        let doc_num = corpus.len() as u64;

        freqs
            .iter()
            .enumerate()
            .map(|(idx, freq)| {
                trace!("scoring document {idx} ({} terms)", freq.term_num());
                E::score(freq, &doc_freq, doc_num)
            })
            .collect()
    }

    fn collect_corpus(&self, freqs: &[TermFrequency]) -> Corpus {
        let doc_freq = document_frequency(freqs);
        debug!(
            "corpus built: {} documents, {} unique terms",
            doc_freq.doc_num(),
            doc_freq.vocab_size()
        );
        doc_freq
    }
}

impl<N, E> TFIDFScorer<N, E>
where
    N: Num + Copy + Send,
    E: TFIDFEngine<N>,
{
    /// Same result as `tf_idf`, counting and scoring documents on the rayon pool
    /// The corpus document frequencies are still built in one sequential pass.
    pub fn par_tf_idf<T>(&self, corpus: &[T]) -> Vec<ScoreMap<N>>
    where
        T: AsRef<str> + Sync,
    {
        let freqs: Vec<TermFrequency> = corpus
            .par_iter()
            .map(|doc| self.term_frequency(doc.as_ref()))
            .collect();
        let doc_freq = self.collect_corpus(&freqs);
        let doc_num = corpus.len() as u64;

        freqs
            .par_iter()
            .map(|freq| E::score(freq, &doc_freq, doc_num))
            .collect()
    }
}

/// Score a corpus with the default tokenizer and engine
///
/// # Examples
/// ```
/// let scores = tf_idf_scorer::tf_idf(&["horse cowboy", "vultures horse"]);
/// assert_eq!(scores[0]["horse"], 0.0);
/// assert_eq!(scores[0]["cowboy"], 0.30102999566398114);
/// ```
pub fn tf_idf<T>(corpus: &[T]) -> Vec<ScoreMap<f64>>
where
    T: AsRef<str>,
{
    TFIDFScorer::<f64>::new().tf_idf(corpus)
}

/// Parallel version of [`tf_idf`]
pub fn par_tf_idf<T>(corpus: &[T]) -> Vec<ScoreMap<f64>>
where
    T: AsRef<str> + Sync,
{
    TFIDFScorer::<f64>::new().par_tf_idf(corpus)
}
