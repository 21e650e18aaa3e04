use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{error, info};
use tf_idf_scorer::{
    io::{read_corpus, top_terms, write_scores},
    OutputFormat, Result, ScoreMap, TFIDFScorer,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Corpus file, one document per line ("-" or nothing reads stdin)
    input: Option<PathBuf>,

    /// Output format: text, json or cbor
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Keep only the K highest scoring terms of each document
    #[arg(short, long, value_name = "K")]
    top: Option<usize>,

    /// Count and score documents on all cores
    #[arg(long)]
    parallel: bool,

    /// The path for output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Cli::parse();

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: &Cli) -> Result<()> {
    let start = Instant::now();
    let corpus = match opts.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => read_corpus(BufReader::new(File::open(path)?))?,
        _ => read_corpus(io::stdin().lock())?,
    };

    let scorer = TFIDFScorer::<f64>::new();
    let mut scores: Vec<ScoreMap> = if opts.parallel {
        scorer.par_tf_idf(&corpus)
    } else {
        scorer.tf_idf(&corpus)
    };
    if let Some(k) = opts.top {
        scores = scores.iter().map(|doc| top_terms(doc, k)).collect();
    }

    let writer: Box<dyn Write> = match &opts.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_scores(writer, &scores, opts.format)?;

    info!(
        "scored {} documents in {:.2?}",
        corpus.len(),
        start.elapsed()
    );
    Ok(())
}
