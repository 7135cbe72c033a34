//! Token counting table.
//!
//! Fixed number of buckets with chaining, bitwise hash, and move-to-front on
//! access (Hugh Williams' scheme). With Zipfian token frequencies the common
//! words end up at the head of their chain, so most lookups stop at the first
//! comparison. The bucket count never changes.

use crate::entry::CountEntry;
use crate::error::{Result, VocabError};

pub const TABLE_SIZE: usize = 1_048_576;
pub const HASH_SEED: u32 = 1_159_241;

/// Simple bitwise hash, reduced to a bucket index in `0..tsize`.
pub fn bitwise_hash(word: &[u8], tsize: usize, seed: u32) -> usize {
    let mut h = seed;
    for &c in word {
        // bytes enter the mix as signed chars
        h ^= (h << 5).wrapping_add(c as i8 as u32).wrapping_add(h >> 2);
    }
    (h & 0x7fff_ffff) as usize % tsize
}

pub struct CountingTable {
    buckets: Vec<Vec<CountEntry>>,
    unique: usize,
    total: u64,
}

impl CountingTable {
    pub fn new() -> Result<Self> {
        Self::with_buckets(TABLE_SIZE)
    }

    pub fn with_buckets(tsize: usize) -> Result<Self> {
        let tsize = tsize.max(1);
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(tsize)
            .map_err(|e| VocabError::out_of_memory(tsize, e))?;
        buckets.resize_with(tsize, Vec::new);
        Ok(CountingTable {
            buckets,
            unique: 0,
            total: 0,
        })
    }

    /// Record one occurrence of `token`.
    pub fn observe(&mut self, token: &[u8]) -> Result<()> {
        debug_assert!(!token.is_empty(), "tokens are never empty");
        let hval = bitwise_hash(token, self.buckets.len(), HASH_SEED);
        let chain = &mut self.buckets[hval];
        self.total += 1;

        match chain.iter().position(|rec| rec.word == token) {
            Some(pos) => {
                chain[pos].count += 1;
                if pos > 0 {
                    // move to front on access
                    chain[..=pos].rotate_right(1);
                }
            }
            None => {
                // new records are not moved to front
                chain
                    .try_reserve(1)
                    .map_err(|e| VocabError::out_of_memory(1, e))?;
                let mut word = Vec::new();
                word.try_reserve_exact(token.len())
                    .map_err(|e| VocabError::out_of_memory(token.len(), e))?;
                word.extend_from_slice(token);
                chain.push(CountEntry { word, count: 1 });
                self.unique += 1;
            }
        }
        Ok(())
    }

    pub fn get(&self, token: &[u8]) -> Option<u64> {
        let hval = bitwise_hash(token, self.buckets.len(), HASH_SEED);
        self.buckets[hval]
            .iter()
            .find(|rec| rec.word == token)
            .map(|rec| rec.count)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.unique
    }

    pub fn is_empty(&self) -> bool {
        self.unique == 0
    }

    /// Number of tokens observed, i.e. the sum of all counts.
    pub fn total_tokens(&self) -> u64 {
        self.total
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Every entry exactly once, bucket by bucket, in current chain order.
    pub fn iter(&self) -> impl Iterator<Item = &CountEntry> {
        self.buckets.iter().flat_map(|chain| chain.iter())
    }

    /// Migrate all entries into a flat array for ranking, consuming the table.
    pub fn into_entries(self) -> Result<Vec<CountEntry>> {
        let mut vocab: Vec<CountEntry> = Vec::new();
        for chain in self.buckets {
            vocab
                .try_reserve(chain.len())
                .map_err(|e| VocabError::out_of_memory(chain.len(), e))?;
            vocab.extend(chain);
        }
        debug_assert_eq!(vocab.len(), self.unique);
        Ok(vocab)
    }

    #[cfg(test)]
    fn chain(&self, idx: usize) -> &[CountEntry] {
        &self.buckets[idx]
    }
}
