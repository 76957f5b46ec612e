//! Text decoding.
//!
//! This module provides the [`Decoder`], a single-pass recursive-descent
//! parser that reads the document one character at a time through a
//! [`Scanner`] and builds the [`Table`] tree.
//!
//! ## Overview
//!
//! - **Top level**: whitespace and `#` comments are skipped, `[name]` opens a
//!   new table under the root, anything else starts a `key = value` pair.
//! - **Active table**: bare pairs go to the root until the first header, then
//!   to the most recently opened header table.
//! - **Values**: basic strings, unsigned integers, arrays and inline tables,
//!   nested to any depth up to [`DecodeOptions::max_depth`]. Boolean literals
//!   are opt-in through [`DecodeOptions::bool_literals`].
//! - **Errors**: the first problem aborts the whole decode; no partial tree is
//!   returned.
//!
//! ## Usage
//!
//! Most users should use [`decode`](crate::decode) in the crate root:
//!
//! ```rust
//! use serde_minitoml::Decoder;
//!
//! let root = Decoder::new("title = \"example\" # trailing").decode().unwrap();
//! assert_eq!(root.get("title").unwrap().as_str().unwrap(), "example");
//! ```

use crate::scanner::Scanner;
use crate::{DecodeOptions, Error, Result, Table, Value};
use tracing::{debug, trace};

/// The document decoder.
///
/// Created via [`Decoder::new`] or [`Decoder::with_options`] and consumed by
/// [`Decoder::decode`].
pub struct Decoder<'a> {
    scanner: Scanner<'a>,
    options: DecodeOptions,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, DecodeOptions::default())
    }

    pub fn with_options(input: &'a str, options: DecodeOptions) -> Self {
        Decoder {
            scanner: Scanner::new(input),
            options,
            depth: 0,
        }
    }

    /// Decodes the whole input and returns the root table.
    ///
    /// # Errors
    ///
    /// Returns the first syntax, end-of-input or recursion-limit error found.
    pub fn decode(mut self) -> Result<Table> {
        let mut root = Table::new();
        // Header table currently receiving pairs; it joins the root when the
        // next header starts or the input ends.
        let mut active: Option<(String, Table)> = None;

        loop {
            match self.scanner.get() {
                None => break,
                Some(' ' | '\t' | '\n') => {}
                Some('#') => self.skip_comment(),
                Some('[') => {
                    let name = self.parse_table_name()?;
                    trace!(name = %name, line = self.scanner.line(), "opening table");
                    if let Some((prev_name, prev)) = active.replace((name, Table::new())) {
                        close_table(&mut root, prev_name, prev);
                    }
                }
                Some(_) => {
                    self.scanner.unget();
                    let target = match active.as_mut() {
                        Some((_, table)) => table,
                        None => &mut root,
                    };
                    self.parse_key_value(target)?;
                }
            }
        }

        if let Some((name, table)) = active {
            close_table(&mut root, name, table);
        }
        Ok(root)
    }

    fn syntax_error(&self, msg: &str) -> Error {
        Error::syntax(self.scanner.line(), self.scanner.column(), msg)
    }

    fn eof_error(&self, expected: &str) -> Error {
        Error::unexpected_eof(self.scanner.line(), self.scanner.column(), expected)
    }

    /// Reads a header name up to the closing `]`; the `[` is already consumed.
    fn parse_table_name(&mut self) -> Result<String> {
        let mut name = String::new();
        loop {
            match self.scanner.get() {
                None => return Err(self.eof_error("table name missing")),
                Some(']') => return Ok(name),
                Some(ch) => name.push(ch),
            }
        }
    }

    /// Parses one `key = value` pair into `table`.
    ///
    /// Spaces and tabs are dropped from the key. If the input ends before the
    /// `=`, nothing is inserted and no error is raised.
    fn parse_key_value(&mut self, table: &mut Table) -> Result<()> {
        let mut key = String::new();
        loop {
            match self.scanner.get() {
                None => return Ok(()),
                Some('=') => break,
                Some(' ' | '\t') => {}
                Some(ch) => key.push(ch),
            }
        }

        let value = self.parse_value()?;
        if table.contains_key(&key) {
            debug!(key = %key, line = self.scanner.line(), "duplicate key overwrites earlier value");
        }
        table.insert(key, value);
        Ok(())
    }

    fn parse_value(&mut self) -> Result<Value> {
        loop {
            match self.scanner.get() {
                None => return Err(self.eof_error("no value found")),
                Some(' ' | '\t' | '\n') => {}
                Some('"') => return Ok(Value::String(self.parse_string()?)),
                Some(ch) if ch.is_ascii_digit() => {
                    return Ok(Value::Integer(self.parse_integer(ch)?))
                }
                Some('{') => {
                    self.enter()?;
                    let table = self.parse_inline_table()?;
                    self.depth -= 1;
                    return Ok(Value::Table(table));
                }
                Some('[') => {
                    self.enter()?;
                    let items = self.parse_array()?;
                    self.depth -= 1;
                    return Ok(Value::Array(items));
                }
                Some('t') if self.options.bool_literals => {
                    return Ok(Value::Bool(self.parse_literal("rue", true)?))
                }
                Some('f') if self.options.bool_literals => {
                    return Ok(Value::Bool(self.parse_literal("alse", false)?))
                }
                Some(ch) => {
                    return Err(self.syntax_error(&format!("bad value start {ch:?}")));
                }
            }
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(Error::recursion_limit(
                self.scanner.line(),
                self.scanner.column(),
                self.options.max_depth,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Reads a basic string body; the opening quote is already consumed.
    fn parse_string(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.scanner.get() {
                None => return Err(self.eof_error("unterminated string")),
                Some('"') => return Ok(text),
                Some('\\') => text.push(self.parse_escape()?),
                Some(ch) => text.push(ch),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char> {
        match self.scanner.get() {
            None => Err(self.eof_error("unterminated string")),
            Some(ch @ ('"' | '/' | '\\')) => Ok(ch),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('r') => Ok('\r'),
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('u') => self.parse_packed_code_point(),
            Some(other) => Err(self.syntax_error(&format!("unknown escape sequence \\{other}"))),
        }
    }

    /// `\u` takes the next four characters as raw bytes, most significant
    /// first, and packs their low 8 bits into one code point.
    fn parse_packed_code_point(&mut self) -> Result<char> {
        let raw = self.scanner.read(4);
        if raw.chars().count() < 4 {
            return Err(self.eof_error("four characters after \\u"));
        }

        let code = raw
            .chars()
            .fold(0u32, |acc, ch| (acc << 8) | (u32::from(ch) & 0xFF));
        char::from_u32(code)
            .ok_or_else(|| self.syntax_error(&format!("invalid code point {code:#x} in \\u escape")))
    }

    fn parse_integer(&mut self, first: char) -> Result<i64> {
        let mut digits = String::from(first);
        loop {
            match self.scanner.get() {
                Some(ch) if ch.is_ascii_digit() => digits.push(ch),
                Some(_) => {
                    self.scanner.unget();
                    break;
                }
                None => break,
            }
        }

        digits
            .parse::<i64>()
            .map_err(|_| self.syntax_error(&format!("integer {digits} out of range")))
    }

    /// Matches the rest of `true` or `false` after its first letter.
    fn parse_literal(&mut self, tail: &str, value: bool) -> Result<bool> {
        let found = self.scanner.read(tail.chars().count());
        if found == tail {
            Ok(value)
        } else {
            Err(self.syntax_error(&format!("corrupt literal, expected `{value}`")))
        }
    }

    /// Reads array elements up to `]`; the `[` is already consumed.
    fn parse_array(&mut self) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        loop {
            match self.scanner.get() {
                None => return Err(self.eof_error("no value found before end of input")),
                Some(' ' | '\t' | '\n' | ',') => {}
                Some('#') => self.skip_comment(),
                Some(']') => return Ok(items),
                Some(_) => {
                    self.scanner.unget();
                    items.push(self.parse_value()?);
                }
            }
        }
    }

    /// Reads pairs up to `}`; the `{` is already consumed.
    ///
    /// Newlines are not skipped here, so a line break inside the braces
    /// becomes part of the next key.
    fn parse_inline_table(&mut self) -> Result<Table> {
        let mut table = Table::new();
        loop {
            match self.scanner.get() {
                None => return Err(self.eof_error("unterminated inline table")),
                Some(' ' | '\t' | ',') => {}
                Some('}') => return Ok(table),
                Some(_) => {
                    self.scanner.unget();
                    self.parse_key_value(&mut table)?;
                }
            }
        }
    }

    fn skip_comment(&mut self) {
        while let Some(ch) = self.scanner.get() {
            if ch == '\n' {
                break;
            }
        }
    }
}

fn close_table(root: &mut Table, name: String, table: Table) {
    if root.contains_key(&name) {
        debug!(name = %name, "table header overwrites earlier value");
    }
    root.insert(name, Value::Table(table));
}
