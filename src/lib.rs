/// This crate scores a batch of short documents with TF-IDF.
pub mod error;
pub mod io;
pub mod tokenizer;
pub mod vectorizer;

/// Tokenizer
/// Splits a raw document into word tokens.
/// Acronyms (`USA`) and camel-case heads (`Foo` of `FooBar`) are kept apart,
/// other runs of two or more word characters, apostrophes or hyphens become one token.
/// Single letters and punctuation are dropped, and nothing is lower-cased.
pub use tokenizer::{tokenize, Tokenizer};

/// Term Frequency structure
/// Occurrence count of every term within one document.
pub use vectorizer::term::{term_frequency, TermFrequency};

/// Corpus for TF-IDF scoring
/// This struct does not store document text; it only manages:
/// - The number of documents
/// - The number of documents in which each term appears
///
/// It is the base data for the IDF (Inverse Document Frequency) factor.
pub use vectorizer::corpus::{document_frequency, Corpus};

/// TF IDF Calculation Engine Trait
/// Defines how term counts and document frequencies turn into a weight.
///
/// `DefaultTFIDFEngine` computes `count * log10(doc_num / doc_freq)`
/// with no smoothing, for `f32` and `f64`.
pub use vectorizer::tfidf::{score, DefaultTFIDFEngine, ScoreMap, TFIDFEngine};

/// TF-IDF Scorer
/// Runs the whole pipeline over a corpus given as one string per document.
/// The result holds one `ScoreMap` per document, in corpus order.
pub use vectorizer::{par_tf_idf, tf_idf, TFIDFScorer};

pub use error::{Error, Result};
pub use io::OutputFormat;
