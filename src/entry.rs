use std::cmp::Ordering;
use std::io::{self, Write};

/// One distinct token and the number of times it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountEntry {
    pub word: Vec<u8>,
    pub count: u64,
}

impl CountEntry {
    pub fn new(word: impl Into<Vec<u8>>, count: u64) -> Self {
        CountEntry {
            word: word.into(),
            count,
        }
    }

    /// Frequency order without a tie-break: equal counts compare `Equal`.
    pub fn cmp_by_count(&self, other: &Self) -> Ordering {
        other.count.cmp(&self.count)
    }

    /// Word as text, for messages and tests. Non-UTF-8 bytes are replaced.
    pub fn word_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.word)
    }

    /// Write one `<word> <count>\n` line.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.word)?;
        writeln!(writer, " {}", self.count)
    }
}

impl Ord for CountEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // rank order: count descending, then word ascending byte by byte
        self.cmp_by_count(other)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for CountEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
