//! Whitespace tokenizer over raw bytes.
//!
//! A token is a maximal run of non-whitespace bytes. Runs longer than
//! [`MAX_TOKEN_LENGTH`] are cut to that length and the remainder of the run
//! is skipped, so two long words sharing a prefix count as the same token.

use std::io::{self, BufRead, ErrorKind};

pub const MAX_TOKEN_LENGTH: usize = 1000;

/// Same set as C `isspace` in the "C" locale; note `\x0B` (vertical tab),
/// which `u8::is_ascii_whitespace` does not include.
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Lazily yields tokens from a buffered reader.
pub struct Tokens<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Tokens {
            reader,
            done: false,
        }
    }

    /// Reads the next token, `Ok(None)` on clean end of input.
    fn read_token(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut token = Vec::new();
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                return Ok(if token.is_empty() { None } else { Some(token) });
            }

            let mut used = 0;
            let mut finished = false;
            for &b in buf {
                used += 1;
                if is_space(b) {
                    if !token.is_empty() {
                        finished = true;
                        break;
                    }
                } else if token.len() < MAX_TOKEN_LENGTH {
                    token.push(b);
                }
            }
            self.reader.consume(used);
            if finished {
                return Ok(Some(token));
            }
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn collect(input: &[u8]) -> Vec<Vec<u8>> {
        Tokens::new(Cursor::new(input))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn splits_on_all_c_whitespace() {
        let tokens = collect(b"  a\tbb\ncc\x0Bd\x0Ce\r\nf  ");
        let expected: Vec<Vec<u8>> = ["a", "bb", "cc", "d", "e", "f"]
            .iter()
            .map(|s| s.as_bytes().to_vec())
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert!(collect(b"").is_empty());
        assert!(collect(b" \n\t\r\n").is_empty());
    }

    #[test]
    fn long_runs_are_truncated_and_remainder_dropped() {
        let mut input = vec![b'x'; MAX_TOKEN_LENGTH + 250];
        input.extend_from_slice(b" tail");
        let tokens = collect(&input);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].len(), MAX_TOKEN_LENGTH);
        assert_eq!(tokens[1], b"tail");
    }

    #[test]
    fn no_whitespace_is_one_token() {
        let input = vec![b'q'; 3 * MAX_TOKEN_LENGTH];
        let tokens = collect(&input);
        assert_eq!(tokens, vec![vec![b'q'; MAX_TOKEN_LENGTH]]);
    }

    #[test]
    fn tokens_span_buffer_boundaries() {
        // capacity 4 forces every token to be assembled across refills
        let reader = BufReader::with_capacity(4, Cursor::new(&b"alphabet soup is tasty"[..]));
        let tokens: Vec<Vec<u8>> = Tokens::new(reader).map(|t| t.unwrap()).collect();
        assert_eq!(
            tokens,
            vec![
                b"alphabet".to_vec(),
                b"soup".to_vec(),
                b"is".to_vec(),
                b"tasty".to_vec()
            ]
        );
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let tokens = collect(b"\xff\xfe caf\xc3\xa9");
        assert_eq!(tokens, vec![vec![0xff, 0xfe], b"caf\xc3\xa9".to_vec()]);
    }

    struct Failing;
    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk gone"))
        }
    }

    #[test]
    fn read_errors_are_yielded_once() {
        let mut tokens = Tokens::new(BufReader::new(Failing));
        assert!(matches!(tokens.next(), Some(Err(_))));
        assert!(tokens.next().is_none());
    }
}
