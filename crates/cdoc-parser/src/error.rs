//! Parser error types for cdoc-parser.

use std::path::PathBuf;

use crate::tree::SyntaxTree;

/// Errors that can occur while parsing a source file.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Syntax error at {}:{line}:{column}", path.display())]
    Syntax {
        path: PathBuf,
        line: u32,
        column: u32,
    },
}

/// A failed parse together with whatever tree was recovered.
///
/// `partial` may be empty (unsupported language) or contain every
/// declaration outside the broken region.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ParseFailure {
    pub partial: SyntaxTree,
    pub error: ParserError,
}
