/// Run parameters, passed explicitly to counting and ranking instead of
/// living in global variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabConfig {
    /// 0, 1, or 2. Only affects diagnostic output.
    pub verbose: i32,
    /// Minimum occurrences for inclusion in the vocabulary.
    pub min_count: u64,
    /// Cap on vocabulary size before min-count filtering; 0 for no limit.
    pub max_vocab: u64,
    /// Number of hash buckets in the counting table.
    pub table_size: usize,
}

impl Default for VocabConfig {
    fn default() -> Self {
        VocabConfig {
            verbose: 2,
            min_count: 1,
            max_vocab: 0,
            table_size: crate::table::TABLE_SIZE,
        }
    }
}

impl VocabConfig {
    /// `max_vocab` as an in-memory size limit; `None` means unlimited.
    pub fn size_limit(&self) -> Option<usize> {
        match self.max_vocab {
            0 => None,
            n => Some(usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0..=2).contains(&self.verbose) {
            return Err(format!("verbose must be 0, 1 or 2, got {}", self.verbose));
        }
        if self.table_size == 0 {
            return Err("table size must be at least 1".to_string());
        }
        Ok(())
    }
}
