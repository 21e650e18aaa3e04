//! Line-per-document input and score output.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::vectorizer::tfidf::ScoreMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `index<TAB>term=score term=score ...`, one line per document
    #[default]
    Text,
    /// JSON array of term to score objects
    Json,
    /// CBOR array of term to score maps
    Cbor,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "cbor" => Ok(OutputFormat::Cbor),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Read one document per line
/// Empty lines are kept as empty documents; line endings (`\n` or `\r\n`) are dropped.
/// Invalid UTF-8 is replaced with U+FFFD instead of failing the whole corpus.
pub fn read_corpus<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut docs = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let doc = match String::from_utf8(line) {
            Ok(doc) => doc,
            Err(e) => {
                debug!("line {} is not valid UTF-8, decoding lossily", docs.len());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        docs.push(doc);
    }
    Ok(docs)
}

/// Keep the `k` highest scoring terms, highest first
/// Equal scores keep their first-seen order.
pub fn top_terms<N>(scores: &ScoreMap<N>, k: usize) -> ScoreMap<N>
where
    N: PartialOrd + Copy,
{
    let mut entries: Vec<(&String, &N)> = scores.iter().collect();
    entries.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries
        .into_iter()
        .take(k)
        .map(|(term, &score)| (term.clone(), score))
        .collect()
}

/// Write every document's scores in the given format
pub fn write_scores<W, N>(mut writer: W, scores: &[ScoreMap<N>], format: OutputFormat) -> Result<()>
where
    W: Write,
    N: Serialize + Display,
{
    match format {
        OutputFormat::Text => {
            for (idx, doc) in scores.iter().enumerate() {
                write!(writer, "{idx}\t")?;
                for (pos, (term, score)) in doc.iter().enumerate() {
                    if pos > 0 {
                        write!(writer, " ")?;
                    }
                    write!(writer, "{term}={score}")?;
                }
                writeln!(writer)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, scores)?;
            writeln!(writer)?;
        }
        OutputFormat::Cbor => {
            serde_cbor::to_writer(&mut writer, &scores)?;
        }
    }
    writer.flush()?;
    Ok(())
}
