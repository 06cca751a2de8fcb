//! Source positions and byte-offset to line/column translation.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A location inside a source file. Lines and columns are 1-based; columns
/// count bytes, which is also what the C/C++ parser reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    pub file: Arc<Path>,
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    pub fn new(file: impl Into<Arc<Path>>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Whether `self` comes strictly before `other`, comparing `(line, column)`.
    ///
    /// The file is not part of the comparison: positions are only ever
    /// compared within one file.
    #[must_use]
    pub fn precedes(&self, other: &Self) -> bool {
        self.line_col() < other.line_col()
    }

    #[must_use]
    pub const fn line_col(&self) -> (u32, u32) {
        (self.line, self.column)
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// Byte offsets of every line start in a text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { starts }
    }

    /// 1-based `(line, column)` of a byte offset. Offsets past the end of the
    /// text land on the last line.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn line_col(&self, offset: usize) -> (u32, u32) {
        let line = self.starts.partition_point(|&start| start <= offset) - 1;
        let column = offset - self.starts[line];
        (line as u32 + 1, column as u32 + 1)
    }

    /// Build a [`SourcePosition`] for a byte offset.
    #[must_use]
    pub fn position(&self, file: &Arc<Path>, offset: usize) -> SourcePosition {
        let (line, column) = self.line_col(offset);
        SourcePosition {
            file: Arc::clone(file),
            line,
            column,
        }
    }
}
