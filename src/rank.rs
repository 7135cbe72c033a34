//! Turn drained counts into the final, deterministically ordered vocabulary.

use crate::entry::CountEntry;
use rayon::prelude::*;

/// Why the vocabulary is shorter than the number of unique words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// Stopped at the first entry whose count fell below this threshold.
    MinCount(u64),
    /// Cut to this many entries by the size limit.
    MaxSize(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<CountEntry>,
    unique_words: usize,
    truncation: Option<Truncation>,
}

impl Vocabulary {
    pub fn entries(&self) -> &[CountEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CountEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct tokens before any truncation.
    pub fn unique_words(&self) -> usize {
        self.unique_words
    }

    pub fn truncation(&self) -> Option<Truncation> {
        self.truncation
    }
}

/// Sort, size-limit and min-count filter the counted entries.
///
/// `max_size` of `None` (or a limit not smaller than the entry count) keeps
/// every entry. When a limit does apply, the full set is first sorted by
/// frequency alone: words sharing the boundary count land in arbitrary order,
/// so the cut does not favour the start of the alphabet. Only the surviving
/// prefix is then sorted with the alphabetical tie-break.
pub fn rank(mut vocab: Vec<CountEntry>, max_size: Option<usize>, min_count: u64) -> Vocabulary {
    let unique_words = vocab.len();
    let max_vocab = match max_size {
        Some(m) if m > 0 && m < unique_words => {
            vocab.par_sort_unstable_by(CountEntry::cmp_by_count);
            m
        }
        _ => unique_words,
    };

    vocab[..max_vocab].par_sort_unstable();
    vocab.truncate(max_vocab);

    let cut = vocab
        .iter()
        .position(|e| e.count < min_count)
        .unwrap_or(max_vocab);

    let truncation = if cut < max_vocab {
        Some(Truncation::MinCount(min_count))
    } else if max_vocab < unique_words {
        Some(Truncation::MaxSize(max_vocab))
    } else {
        None
    };
    vocab.truncate(cut);

    Vocabulary {
        entries: vocab,
        unique_words,
        truncation,
    }
}
