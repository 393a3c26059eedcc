/// A cursor over a character buffer.
///
/// Positions are reported as 1-based lines and 1-based columns. Before the
/// first character of a line has been read the column is `0`.
pub trait Scanner {
    /// Consumes and returns the next character, or `None` at the end.
    fn read(&mut self) -> Option<char>;
    /// Returns the line of the last consumed character.
    fn line(&self) -> usize;
    /// Returns the column of the last consumed character.
    fn column(&self) -> usize;
    /// Returns the next character without consuming it.
    fn peek(&self) -> Option<char>;
    /// Returns the line of the next character.
    fn peek_line(&self) -> usize;
    /// Returns the column of the next character.
    ///
    /// At the end of input this is the column just past the last character.
    fn peek_column(&self) -> usize;
    /// Steps back over the last consumed character.
    fn unread(&mut self);
    /// Steps back over `count` consumed characters.
    fn unread_many(&mut self, count: usize) {
        for _ in 0..count {
            self.unread();
        }
    }
    /// Rewinds to the beginning of the buffer.
    fn reset(&mut self);
}

/// A [`Scanner`] over an in-memory string.
///
/// Line and column numbers are computed once on construction, so moving the
/// cursor in either direction is constant time.
///
/// A `\n` always starts a new line. A `\r` starts a new line only when it does
/// not sit next to a `\n`, so `\r\n` and `\n\r` count as one line break.
///
/// # Example
/// ```
/// use formulary::io::scanner::{Scanner, StringScanner};
///
/// let mut scanner = StringScanner::new("ab\ncd");
/// assert_eq!(scanner.read(), Some('a'));
/// assert_eq!((scanner.line(), scanner.column()), (1, 1));
///
/// scanner.read();
/// scanner.read();
/// assert_eq!((scanner.peek_line(), scanner.peek_column()), (2, 1));
///
/// scanner.unread();
/// assert_eq!(scanner.peek(), Some('\n'));
/// ```
#[derive(Debug, Clone)]
pub struct StringScanner {
    chars:     Vec<char>,
    positions: Vec<(usize, usize)>,
    consumed:  usize,
}

impl StringScanner {
    /// Creates a scanner positioned before the first character of `content`.
    #[must_use]
    pub fn new(content: &str) -> Self {
        let chars: Vec<char> = content.chars().collect();
        let mut positions = Vec::with_capacity(chars.len());
        let (mut line, mut column) = (1, 0);

        for (index, &ch) in chars.iter().enumerate() {
            if is_line_break(&chars, index) {
                line += 1;
                column = 0;
            } else if ch != '\r' && ch != '\n' {
                column += 1;
            }
            positions.push((line, column));
        }

        Self { chars,
               positions,
               consumed: 0 }
    }

    /// Returns the number of characters consumed so far.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.consumed
    }

    fn position_before(&self, consumed: usize) -> (usize, usize) {
        consumed.checked_sub(1)
                .and_then(|index| self.positions.get(index).copied())
                .unwrap_or((1, 0))
    }
}

/// Tests whether the character at `index` terminates a line.
fn is_line_break(chars: &[char], index: usize) -> bool {
    match chars[index] {
        '\n' => true,
        '\r' => {
            let before = index.checked_sub(1).map(|i| chars[i]);
            let after = chars.get(index + 1).copied();
            before != Some('\n') && after != Some('\n')
        },
        _ => false,
    }
}

impl Scanner for StringScanner {
    fn read(&mut self) -> Option<char> {
        let ch = self.chars.get(self.consumed).copied()?;
        self.consumed += 1;
        Some(ch)
    }

    fn line(&self) -> usize {
        self.position_before(self.consumed).0
    }

    fn column(&self) -> usize {
        self.position_before(self.consumed).1
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.consumed).copied()
    }

    fn peek_line(&self) -> usize {
        self.positions
            .get(self.consumed)
            .map_or_else(|| self.position_before(self.consumed).0, |p| p.0)
    }

    fn peek_column(&self) -> usize {
        self.positions
            .get(self.consumed)
            .map_or_else(|| self.position_before(self.consumed).1 + 1, |p| p.1)
    }

    fn unread(&mut self) {
        self.consumed = self.consumed.saturating_sub(1);
    }

    fn reset(&mut self) {
        self.consumed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_is_one_line_break() {
        let mut scanner = StringScanner::new("a\r\nb\rc");
        let mut positions = Vec::new();
        while scanner.read().is_some() {
            positions.push((scanner.line(), scanner.column()));
        }

        assert_eq!(positions, vec![(1, 1), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1)]);
    }

    #[test]
    fn unread_and_reset_rewind() {
        let mut scanner = StringScanner::new("xyz");
        scanner.unread();
        assert_eq!(scanner.peek(), Some('x'));

        scanner.read();
        scanner.read();
        scanner.unread_many(5);
        assert_eq!(scanner.offset(), 0);

        scanner.read();
        scanner.reset();
        assert_eq!((scanner.peek(), scanner.peek_line(), scanner.peek_column()), (Some('x'), 1, 1));
    }

    #[test]
    fn end_of_input_is_past_the_last_column() {
        let mut scanner = StringScanner::new("ab");
        scanner.read();
        scanner.read();

        assert_eq!(scanner.peek(), None);
        assert_eq!((scanner.peek_line(), scanner.peek_column()), (1, 3));
    }
}
