//! Lexical comment scanner for C and C++ source text.
//!
//! This is not a preprocessor and not a tokenizer for the full language. It
//! only knows enough to find comments: it skips over string, character and
//! raw string literals, numbers with digit separators, and `#include <...>`
//! header names so that comment-like text inside them is ignored.

use std::path::Path;
use std::sync::Arc;

use crate::comment::Comment;
use crate::position::LineIndex;
use crate::report::{Event, Reporter};

/// Scan `source` and return every comment in file order.
///
/// Lexical problems outside preprocessor directives (an unterminated literal
/// or block comment) are reported as [`Event::ScanDiagnostic`]; inside a
/// directive they are swallowed. An unterminated block comment is still
/// returned, running to the end of the input.
pub fn scan_comments(file: &Path, source: &str, reporter: &mut dyn Reporter) -> Vec<Comment> {
    let mut scanner = Scanner::new(file, source, reporter);
    scanner.run();
    scanner.comments
}

/// Identifier prefixes that turn the following `"` into a raw string literal.
const RAW_STRING_PREFIXES: &[&str] = &["R", "LR", "uR", "UR", "u8R"];

/// Raw string delimiters are at most 16 characters long.
const MAX_RAW_DELIMITER: usize = 16;

struct Scanner<'a, R: Reporter + ?Sized> {
    file: Arc<Path>,
    source: &'a str,
    bytes: &'a [u8],
    index: LineIndex,
    pos: usize,
    /// Only whitespace seen since the last newline.
    at_line_start: bool,
    in_directive: bool,
    comments: Vec<Comment>,
    reporter: &'a mut R,
}

impl<'a, R: Reporter + ?Sized> Scanner<'a, R> {
    fn new(file: &Path, source: &'a str, reporter: &'a mut R) -> Self {
        Self {
            file: Arc::from(file),
            source,
            bytes: source.as_bytes(),
            index: LineIndex::new(source),
            pos: 0,
            at_line_start: true,
            in_directive: false,
            comments: Vec::new(),
            reporter,
        }
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn run(&mut self) {
        while let Some(b) = self.peek_at(0) {
            match b {
                b'\n' => {
                    self.pos += 1;
                    self.at_line_start = true;
                    self.in_directive = false;
                }
                b' ' | b'\t' | b'\r' | 0x0b | 0x0c => self.pos += 1,
                b'\\' => self.skip_backslash(),
                b'/' if self.peek_at(1) == Some(b'/') => self.line_comment(),
                b'/' if self.peek_at(1) == Some(b'*') => self.block_comment(),
                _ => {
                    self.token(b);
                }
            }
        }
    }

    /// Dispatch for any byte that starts a non-comment token.
    fn token(&mut self, b: u8) {
        let first_on_line = self.at_line_start;
        self.at_line_start = false;
        match b {
            b'#' if first_on_line => self.directive(),
            b'"' => self.quoted(b'"', "string literal not terminated"),
            b'\'' => self.quoted(b'\'', "character literal not terminated"),
            b'0'..=b'9' => self.number(),
            b'.' if self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) => self.number(),
            b if is_ident_start(b) => self.identifier(),
            _ => self.pos += 1,
        }
    }

    /// A backslash-newline splices two physical lines into one logical line.
    fn skip_backslash(&mut self) {
        match (self.peek_at(1), self.peek_at(2)) {
            (Some(b'\n'), _) => self.pos += 2,
            (Some(b'\r'), Some(b'\n')) => self.pos += 3,
            _ => {
                self.at_line_start = false;
                self.pos += 1;
            }
        }
    }

    fn line_comment(&mut self) {
        let start = self.pos;
        let mut end = self.bytes.len();
        let mut cursor = start;
        while let Some(offset) = self.bytes[cursor..].iter().position(|&b| b == b'\n') {
            let newline = cursor + offset;
            if continues_line(&self.bytes[start..newline]) {
                cursor = newline + 1;
                continue;
            }
            end = newline;
            break;
        }
        let text = self.source[start..end].trim_end_matches('\r');
        self.push_comment(start, text);
        // The newline itself is left for `run` so directive state resets.
        self.pos = end;
    }

    fn block_comment(&mut self) {
        let start = self.pos;
        let end = match self.source[start + 2..].find("*/") {
            Some(offset) => start + 2 + offset + 2,
            None => {
                self.diagnostic(start, "comment not terminated");
                self.bytes.len()
            }
        };
        let text = &self.source[start..end];
        self.push_comment(start, text);
        self.pos = end;
    }

    fn push_comment(&mut self, start: usize, text: &str) {
        let position = self.index.position(&self.file, start);
        self.comments.push(Comment::new(text, position));
    }

    fn directive(&mut self) {
        self.in_directive = true;
        self.pos += 1;
        self.skip_blanks();
        let name_start = self.pos;
        while self.peek_at(0).is_some_and(is_ident_continue) {
            self.pos += 1;
        }
        let name = &self.source[name_start..self.pos];
        if matches!(name, "include" | "include_next" | "import") {
            self.skip_blanks();
            if self.peek_at(0) == Some(b'<') {
                self.header_name();
            }
        }
    }

    /// `<path>` in an include directive; may contain `//` or `/*`.
    fn header_name(&mut self) {
        while let Some(b) = self.peek_at(0) {
            match b {
                b'\n' => return,
                b'>' => {
                    self.pos += 1;
                    return;
                }
                _ => self.pos += 1,
            }
        }
    }

    fn skip_blanks(&mut self) {
        while matches!(self.peek_at(0), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
    }

    fn quoted(&mut self, quote: u8, unterminated: &str) {
        let start = self.pos;
        self.pos += 1;
        while let Some(b) = self.peek_at(0) {
            match (b, self.peek_at(1)) {
                (b'\\', Some(b'\r')) if self.peek_at(2) == Some(b'\n') => self.pos += 3,
                (b'\\', _) => self.pos += 2,
                (b'\n', _) => break,
                (b, _) if b == quote => {
                    self.pos += 1;
                    return;
                }
                _ => self.pos += 1,
            }
        }
        self.pos = self.pos.min(self.bytes.len());
        self.diagnostic(start, unterminated);
    }

    fn raw_string(&mut self) {
        let start = self.pos;
        let delimiter_start = start + 1;
        let Some(open) = self.bytes[delimiter_start..]
            .iter()
            .take(MAX_RAW_DELIMITER + 1)
            .position(|&b| b == b'(')
        else {
            self.quoted(b'"', "string literal not terminated");
            return;
        };
        let delimiter = &self.source[delimiter_start..delimiter_start + open];
        if delimiter
            .bytes()
            .any(|b| matches!(b, b' ' | b')' | b'\\' | b'\t' | b'\n' | b'\r'))
        {
            self.quoted(b'"', "string literal not terminated");
            return;
        }
        let body_start = delimiter_start + open + 1;
        let closing = format!("){delimiter}\"");
        match self.source[body_start..].find(&closing) {
            Some(offset) => self.pos = body_start + offset + closing.len(),
            None => {
                self.diagnostic(start, "raw string literal not terminated");
                self.pos = self.bytes.len();
            }
        }
    }

    /// A preprocessing number: digits, letters, `.`, `'` digit separators and
    /// exponent signs.
    fn number(&mut self) {
        self.pos += 1;
        while let Some(b) = self.peek_at(0) {
            match b {
                b'+' | b'-' => {
                    let prev = self.bytes[self.pos - 1];
                    if !matches!(prev, b'e' | b'E' | b'p' | b'P') {
                        return;
                    }
                }
                b'.' | b'\'' | b'_' => {}
                b if b.is_ascii_alphanumeric() => {}
                _ => return,
            }
            self.pos += 1;
        }
    }

    fn identifier(&mut self) {
        let start = self.pos;
        while self.peek_at(0).is_some_and(is_ident_continue) {
            self.pos += 1;
        }
        let word = &self.source[start..self.pos];
        if self.peek_at(0) == Some(b'"') && RAW_STRING_PREFIXES.contains(&word) {
            self.raw_string();
        }
    }

    fn diagnostic(&mut self, offset: usize, message: &str) {
        if self.in_directive {
            return;
        }
        let (line, column) = self.index.line_col(offset);
        self.reporter.report(Event::ScanDiagnostic {
            file: self.file.to_path_buf(),
            line,
            column,
            message: message.to_string(),
        });
    }
}

const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

const fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

/// Whether a physical line ends in a backslash (ignoring a trailing `\r`).
fn continues_line(line: &[u8]) -> bool {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    line.ends_with(b"\\")
}
