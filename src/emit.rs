use crate::entry::CountEntry;
use std::io::{self, Write};

/// Write the vocabulary, one `<word> <count>` line per entry, in rank order.
pub fn write_vocab<W: Write>(writer: &mut W, entries: &[CountEntry]) -> io::Result<()> {
    for entry in entries {
        entry.write_to(writer)?;
    }
    writer.flush()
}
