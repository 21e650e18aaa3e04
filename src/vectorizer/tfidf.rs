use indexmap::IndexMap;
use num::Num;

use crate::vectorizer::{corpus::Corpus, term::TermFrequency};

/// TF-IDF weight of every term of one document, in first-seen order
pub type ScoreMap<N = f64> = IndexMap<String, N>;

pub trait TFIDFEngine<N>
where
    N: Num + Copy,
{
    /// IDF weight of a term
    /// # Arguments
    /// * `doc_num` - number of documents in the corpus
    /// * `doc_freq` - number of documents containing the term, at least 1
    fn idf(doc_num: u64, doc_freq: u64) -> N;

    /// TF weight of a term occurring `count` times in a document
    fn tf(count: u64) -> N;

    /// Score every term of a document
    ///
    /// # Panics
    /// When a term of `freq` is missing from `corpus`. The corpus is built from
    /// every document's terms, so this only happens on misuse.
    fn score(freq: &TermFrequency, corpus: &Corpus, doc_num: u64) -> ScoreMap<N> {
        freq.iter()
            .map(|(term, count)| {
                let doc_freq = match corpus.doc_freq(term) {
                    Some(doc_freq) => doc_freq,
                    None => panic!("term {term:?} has no document frequency in the corpus"),
                };
                (term.to_string(), Self::tf(count) * Self::idf(doc_num, doc_freq))
            })
            .collect()
    }
}

/// デフォルトのTF-IDFエンジン
/// raw count TF times unsmoothed base-10 IDF, `f32` and `f64`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

// log(10.0) is ln(x) / ln(10), which is what the reference scores were computed with
impl TFIDFEngine<f64> for DefaultTFIDFEngine {
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        (doc_num as f64 / doc_freq as f64).log(10.0)
    }

    #[inline]
    fn tf(count: u64) -> f64 {
        count as f64
    }
}

impl TFIDFEngine<f32> for DefaultTFIDFEngine {
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f32 {
        (doc_num as f32 / doc_freq as f32).log(10.0)
    }

    #[inline]
    fn tf(count: u64) -> f32 {
        count as f32
    }
}

/// Score one document's terms against the corpus document frequencies
///
/// # Arguments
/// * `term_freq` - TermFrequency of the document
/// * `doc_freq` - document frequencies of the whole corpus
/// * `num_docs` - number of documents in the corpus
///
/// # Returns
/// * `ScoreMap` - `count * log10(num_docs / doc_freq)` for every term
pub fn score(term_freq: &TermFrequency, doc_freq: &Corpus, num_docs: u64) -> ScoreMap<f64> {
    <DefaultTFIDFEngine as TFIDFEngine<f64>>::score(term_freq, doc_freq, num_docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::corpus::document_frequency;

    const LOG10_2: f64 = 0.30102999566398114;

    #[test]
    fn idf_is_zero_when_term_is_everywhere() {
        assert_eq!(<DefaultTFIDFEngine as TFIDFEngine<f64>>::idf(2, 2), 0.0);
        assert_eq!(<DefaultTFIDFEngine as TFIDFEngine<f64>>::idf(1, 1), 0.0);
        assert_eq!(<DefaultTFIDFEngine as TFIDFEngine<f32>>::idf(7, 7), 0.0);
    }

    #[test]
    fn idf_uses_base_ten() {
        let idf = <DefaultTFIDFEngine as TFIDFEngine<f64>>::idf(2, 1);
        assert_eq!(idf, LOG10_2);
        assert_ne!(idf, 2f64.log10());
        let idf = <DefaultTFIDFEngine as TFIDFEngine<f64>>::idf(1000, 1);
        assert!((idf - 3.0).abs() < 1e-12);
    }

    #[test]
    fn score_multiplies_raw_count() {
        let mut a = TermFrequency::new();
        a.add_terms(&["rare", "rare", "rare", "common"]);
        let mut b = TermFrequency::new();
        b.add_terms(&["common"]);
        let corpus = document_frequency(&[a.clone(), b]);

        let scores = score(&a, &corpus, 2);
        assert_eq!(scores["rare"], 3.0 * LOG10_2);
        assert_eq!(scores["common"], 0.0);
    }

    #[test]
    fn empty_document_scores_nothing() {
        let corpus = document_frequency(&[TermFrequency::new()]);
        assert!(score(&TermFrequency::new(), &corpus, 1).is_empty());
    }

    #[test]
    #[should_panic(expected = "no document frequency")]
    fn missing_document_frequency_panics() {
        let mut doc = TermFrequency::new();
        doc.add_term("orphan");
        score(&doc, &Corpus::new(), 1);
    }
}
