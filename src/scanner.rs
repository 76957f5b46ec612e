//! Character scanner with one character of pushback.
//!
//! The scanner owns a cursor over the input text and tracks the line and
//! column of the next character for error reporting. It has no parsing logic
//! and no failure modes: running out of input is reported as `None`.

pub struct Scanner<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    // Last character handed out by `get`, with the line/column it was read at.
    last: Option<(char, usize, usize)>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner {
            input,
            position: 0,
            line: 1,
            column: 1,
            last: None,
        }
    }

    /// Consumes and returns the next character, or `None` at end of input.
    pub fn get(&mut self) -> Option<char> {
        let Some(ch) = self.input[self.position..].chars().next() else {
            self.last = None;
            return None;
        };
        self.last = Some((ch, self.line, self.column));
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Pushes back the character returned by the previous `get`.
    ///
    /// Only one character can be pushed back; a second call without an
    /// intervening `get` does nothing.
    pub fn unget(&mut self) {
        debug_assert!(self.last.is_some(), "unget without a preceding get");
        if let Some((ch, line, column)) = self.last.take() {
            self.position -= ch.len_utf8();
            self.line = line;
            self.column = column;
        }
    }

    /// Consumes up to `n` characters and returns them verbatim.
    ///
    /// The result is shorter than `n` when the input runs out.
    pub fn read(&mut self, n: usize) -> String {
        let mut text = String::with_capacity(n);
        for _ in 0..n {
            match self.get() {
                Some(ch) => text.push(ch),
                None => break,
            }
        }
        text
    }

    /// Line of the next character (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column of the next character (1-based).
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_until_end() {
        let mut scanner = Scanner::new("ab");
        assert_eq!(scanner.get(), Some('a'));
        assert_eq!(scanner.get(), Some('b'));
        assert_eq!(scanner.get(), None);
        assert_eq!(scanner.get(), None);
        assert!(scanner.at_end());
    }

    #[test]
    fn test_unget_replays_last_char() {
        let mut scanner = Scanner::new("xy");
        assert_eq!(scanner.get(), Some('x'));
        scanner.unget();
        assert_eq!(scanner.get(), Some('x'));
        assert_eq!(scanner.get(), Some('y'));
    }

    #[test]
    fn test_unget_multibyte() {
        let mut scanner = Scanner::new("é!");
        assert_eq!(scanner.get(), Some('é'));
        scanner.unget();
        assert_eq!(scanner.get(), Some('é'));
        assert_eq!(scanner.get(), Some('!'));
    }

    #[test]
    fn test_unget_restores_position() {
        let mut scanner = Scanner::new("a\nb");
        scanner.get();
        scanner.get();
        assert_eq!((scanner.line(), scanner.column()), (2, 1));
        scanner.unget();
        assert_eq!((scanner.line(), scanner.column()), (1, 2));
    }

    #[test]
    fn test_read_literal_tail() {
        let mut scanner = Scanner::new("rue, x");
        assert_eq!(scanner.read(3), "rue");
        assert_eq!(scanner.get(), Some(','));
    }

    #[test]
    fn test_read_short_at_end() {
        let mut scanner = Scanner::new("al");
        assert_eq!(scanner.read(4), "al");
        assert_eq!(scanner.get(), None);
    }
}
