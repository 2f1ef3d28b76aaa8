//! Line splitting
//!
//! Splits text the way a buffered line reader does: `\n`, `\r\n` and a lone
//! `\r` each end a line, the line break is not part of the line, and a break
//! at the very end of the input does not start another (empty) line.

/// Borrowing iterator over the lines of a text
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    remaining: &'a str,
}

/// Split `text` into lines
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { remaining: text }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.remaining.is_empty() {
            return None;
        }

        let bytes = self.remaining.as_bytes();
        match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(pos) => {
                let line = &self.remaining[..pos];
                let skip = if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.remaining = &self.remaining[pos + skip..];
                Some(line)
            }
            None => {
                let line = self.remaining;
                self.remaining = "";
                Some(line)
            }
        }
    }
}

impl std::iter::FusedIterator for Lines<'_> {}
