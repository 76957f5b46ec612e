//! Accepted Syntax
//!
//! This module documents the subset of TOML understood by the decoder.
//! Anything not listed here is rejected or, in the few places noted below,
//! read in a way that differs from full TOML.
//!
//! # Overview
//!
//! A document is a sequence of `key = value` pairs, `[name]` table headers,
//! `#` comments and whitespace (space, tab, newline). It is read in one pass,
//! one character at a time.
//!
//! ```text
//! # top-level pairs land in the root table
//! title = "example"
//!
//! [database]
//! ports = [8000, 8001, 8002]
//! limits = { connections = 5000, retries = 3 }
//! ```
//!
//! # Tables
//!
//! Pairs before the first header belong to the root table. `[name]` creates
//! a new table, stores it in the root under `name` and sends the following
//! pairs to it until the next header.
//!
//! **Rules**:
//! - Everything between `[` and `]` is the name, verbatim (no trimming,
//!   quoting or dotted paths)
//! - Repeating a header replaces the earlier table
//! - A missing `]` is an error
//!
//! # Keys
//!
//! A key is every character up to `=` with spaces and tabs removed, so
//! `my key = 1` defines `mykey`. Assigning the same key twice keeps the last
//! value. If the document ends before `=`, the unfinished pair is dropped
//! without an error.
//!
//! # Values
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | String | `"double quoted"` | `name = "Tom"` |
//! | Integer | ASCII digits, no sign | `port = 8080` |
//! | Array | `[ v, v, ... ]` | `ids = [1, 2, 3]` |
//! | Inline table | `{ k = v, ... }` | `point = { x = 1, y = 2 }` |
//! | Boolean | `true` / `false` | only with `DecodeOptions::with_bool_literals(true)` |
//!
//! Not supported: floats, signed integers, `_` separators, base prefixes,
//! exponents, literal and multi-line strings, dates, `[[array.of.tables]]`.
//!
//! ## Strings
//!
//! **Escape sequences**:
//! ```text
//! \"  \/  \\   - the character itself
//! \b  \f       - backspace, form feed
//! \r  \n  \t   - carriage return, newline, tab
//! \uABCD       - four raw characters packed as bytes A B C D
//! ```
//!
//! `\u` does not read hex digits: the low 8 bits of each of the next four
//! characters form one 32-bit code point, most significant first. The result
//! must be a valid Unicode scalar value. Any other escape is an error.
//!
//! A `#` inside a string is ordinary text.
//!
//! ## Arrays
//!
//! Elements may be separated by any mix of commas, spaces, tabs and
//! newlines, and `#` comments may appear between them. Element types may be
//! mixed and arrays nest freely:
//!
//! ```text
//! data = [ [1, 2], ["a", "b", "c"], ]  # trailing comma is fine
//! ```
//!
//! ## Inline Tables
//!
//! Pairs are separated by commas, spaces or tabs. A newline is not a
//! separator: it becomes the first character of the next key.
//!
//! # Nesting Limit
//!
//! Arrays and inline tables may nest up to `DecodeOptions::max_depth` levels
//! (128 by default).
//!
//! # Limitations
//!
//! - No encoder: the crate only reads documents
//! - `\r` is not whitespace, so CRLF line endings leak into keys

// This module contains only documentation; no implementation code
