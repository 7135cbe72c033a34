//! Unigram counting for GloVe.
//!
//! Reads a whitespace-tokenized corpus, counts every distinct token and writes
//! a frequency-ranked vocabulary, one `<word> <count>` line per entry. Ties on
//! count are broken alphabetically so the output is reproducible.

pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod entry;
pub mod error;
pub mod rank;
pub mod table;
pub mod tokens;

pub use config::VocabConfig;
pub use diagnostics::Diagnostics;
pub use emit::write_vocab;
pub use entry::CountEntry;
pub use error::{Result, VocabError};
pub use rank::{Truncation, Vocabulary, rank};
pub use table::CountingTable;
pub use tokens::{MAX_TOKEN_LENGTH, Tokens};

use std::io::{BufRead, Write};

/// What a finished run counted and kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabSummary {
    pub total_tokens: u64,
    pub unique_words: usize,
    pub vocab_size: usize,
    pub truncation: Option<Truncation>,
}

/// Stream every token from `reader` into a counting table.
pub fn count_tokens<R: BufRead>(
    reader: R,
    config: &VocabConfig,
    diag: &mut Diagnostics,
) -> Result<CountingTable> {
    let mut table = CountingTable::with_buckets(config.table_size)?;
    diag.start_progress()?;
    for token in Tokens::new(reader) {
        table.observe(&token?)?;
        if table.total_tokens() % 100_000 == 0 {
            diag.progress(table.total_tokens())?;
        }
    }
    diag.finish_progress(table.total_tokens())?;
    Ok(table)
}

/// Count, rank and write a vocabulary. The final vocabulary size is always
/// reported to `diag`, whatever the verbosity.
pub fn build_vocab<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    config: &VocabConfig,
    diag: &mut Diagnostics,
) -> Result<VocabSummary> {
    diag.header("BUILDING VOCABULARY")?;

    let table = count_tokens(reader, config, diag)?;
    let total_tokens = table.total_tokens();
    let entries = table.into_entries()?;
    diag.above(1, &format!("Counted {} unique words.", entries.len()))?;

    let vocab = rank(entries, config.size_limit(), config.min_count);
    match vocab.truncation() {
        Some(Truncation::MinCount(min)) => {
            diag.above(0, &format!("Truncating vocabulary at min count {min}."))?
        }
        Some(Truncation::MaxSize(max)) => {
            diag.above(0, &format!("Truncating vocabulary at size {max}."))?
        }
        None => {}
    }

    write_vocab(writer, vocab.entries())?;

    diag.say(&format!("Using vocabulary of size {}.\n", vocab.len()))?;
    diag.flush()?;

    Ok(VocabSummary {
        total_tokens,
        unique_words: vocab.unique_words(),
        vocab_size: vocab.len(),
        truncation: vocab.truncation(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::tests::captured;
    use std::io::Cursor;

    fn small_config(min_count: u64, max_vocab: u64) -> VocabConfig {
        VocabConfig {
            min_count,
            max_vocab,
            table_size: 1024,
            ..VocabConfig::default()
        }
    }

    fn run(input: &[u8], config: &VocabConfig) -> (String, VocabSummary, String) {
        let (mut diag, log) = captured(config.verbose);
        let mut out = Vec::new();
        let summary = build_vocab(Cursor::new(input), &mut out, config, &mut diag).unwrap();
        (String::from_utf8(out).unwrap(), summary, log.text())
    }

    #[test]
    fn ranks_distinct_counts() {
        let (out, summary, log) = run(b"a b a c b a", &small_config(1, 0));
        assert_eq!(out, "a 3\nb 2\nc 1\n");
        assert_eq!(summary.total_tokens, 6);
        assert_eq!(summary.unique_words, 3);
        assert_eq!(summary.vocab_size, 3);
        assert_eq!(summary.truncation, None);
        assert!(log.contains("BUILDING VOCABULARY"));
        assert!(log.contains("Processed 6 tokens."));
        assert!(log.contains("Counted 3 unique words."));
        assert!(log.contains("Using vocabulary of size 3."));
    }

    #[test]
    fn min_count_drops_rare_words() {
        let (out, summary, log) = run(b"x x y y z", &small_config(2, 0));
        assert_eq!(out, "x 2\ny 2\n");
        assert_eq!(summary.truncation, Some(Truncation::MinCount(2)));
        assert!(log.contains("Truncating vocabulary at min count 2."));
        assert!(log.contains("Using vocabulary of size 2."));
    }

    #[test]
    fn max_vocab_is_logged() {
        let (out, summary, log) = run(b"a a a b b c", &small_config(1, 2));
        assert_eq!(out, "a 3\nb 2\n");
        assert_eq!(summary.truncation, Some(Truncation::MaxSize(2)));
        assert!(log.contains("Truncating vocabulary at size 2."));
    }

    #[test]
    fn over_length_tokens_collapse() {
        let prefix = "p".repeat(MAX_TOKEN_LENGTH);
        let input = format!("{prefix}AAA {prefix}BBB {prefix}");
        let (out, summary, _) = run(input.as_bytes(), &small_config(1, 0));
        assert_eq!(out, format!("{prefix} 3\n"));
        assert_eq!(summary.unique_words, 1);
    }

    #[test]
    fn empty_input_reports_zero() {
        let (out, summary, log) = run(b"", &small_config(1, 0));
        assert!(out.is_empty());
        assert_eq!(summary.vocab_size, 0);
        assert_eq!(summary.total_tokens, 0);
        assert!(log.contains("Using vocabulary of size 0."));
    }

    #[test]
    fn quiet_run_still_reports_size() {
        let config = VocabConfig {
            verbose: 0,
            ..small_config(2, 0)
        };
        let (_, _, log) = run(b"x x y", &config);
        assert!(!log.contains("Truncating"));
        assert!(!log.contains("Processed"));
        assert!(log.contains("Using vocabulary of size 1."));
    }

    #[test]
    fn counts_are_conserved() {
        let text = "the cat sat on the mat and the dog sat on the log ".repeat(50);
        let config = small_config(1, 0);
        let (mut diag, _) = captured(0);
        let table = count_tokens(Cursor::new(text.as_bytes()), &config, &mut diag).unwrap();
        let words = text.split_whitespace().count() as u64;
        assert_eq!(table.total_tokens(), words);
        assert_eq!(table.iter().map(|e| e.count).sum::<u64>(), words);
        assert_eq!(table.get(b"the"), Some(200));
    }
}
