use anyhow::{Context, bail};
use clap::Parser;
use glove_vocab::{Diagnostics, VocabConfig, VocabError, build_vocab};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract unigram counts from a text corpus", long_about = None)]
struct Args {
    /// Set verbosity level: 0, 1, or 2
    #[arg(short, long, default_value_t = 2)]
    verbose: i32,

    /// Upper bound on vocabulary size, i.e. keep the <int> most frequent words;
    /// 0 for no limit. The minimum frequency words are randomly sampled so as
    /// to obtain an even distribution over the alphabet.
    #[arg(long = "max-vocab", default_value_t = 0)]
    max_vocab: u64,

    /// Lower limit such that words which occur fewer than <int> times are discarded
    #[arg(long = "min-count", default_value_t = 1)]
    min_count: u64,

    /// Write progress messages to this file instead of stderr
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Write the vocabulary to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Number of hash buckets in the counting table
    #[arg(long = "table-size", default_value_t = glove_vocab::table::TABLE_SIZE, hide = true)]
    table_size: usize,

    /// Corpus file (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = VocabConfig {
        verbose: args.verbose,
        min_count: args.min_count,
        max_vocab: args.max_vocab,
        table_size: args.table_size,
    };
    if let Err(msg) = config.validate() {
        bail!("invalid arguments: {msg}");
    }

    // The log sink must open before any corpus is read.
    let mut diag = match &args.log_file {
        Some(path) => Diagnostics::log_file(config.verbose, path)?,
        None => Diagnostics::stderr(config.verbose),
    };

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| VocabError::unavailable("corpus", path, e))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin().lock())),
    };

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file =
                File::create(path).map_err(|e| VocabError::unavailable("output", path, e))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    build_vocab(reader, &mut writer, &config, &mut diag).context("vocabulary run failed")?;
    Ok(())
}
