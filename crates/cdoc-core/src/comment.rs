//! Comment records produced by the scanner.

use crate::declaration::Declaration;
use crate::position::SourcePosition;

/// A lexical comment, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub position: SourcePosition,
}

impl Comment {
    pub fn new(text: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    /// Line on which the comment ends.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn end_line(&self) -> u32 {
        self.position.line + self.text.matches('\n').count() as u32
    }

    /// Position just past the last character of the comment.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn end_position(&self) -> SourcePosition {
        let column = match self.text.rfind('\n') {
            Some(newline) => (self.text.len() - newline) as u32,
            None => self.position.column + self.text.len() as u32,
        };
        SourcePosition {
            file: self.position.file.clone(),
            line: self.end_line(),
            column,
        }
    }

    /// `//` comment (possibly several merged lines) rather than `/* */`.
    #[must_use]
    pub fn is_line_comment(&self) -> bool {
        self.text.starts_with("//")
    }
}

/// A comment adopted as documentation of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocComment<'a> {
    pub declaration: &'a Declaration,
    pub comment: &'a Comment,
}
