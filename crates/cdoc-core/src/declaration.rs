use std::fmt;

use crate::position::SourcePosition;

/// The declaration kinds that can carry a doc comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Variable,
    Function,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable => f.write_str("variable"),
            Self::Function => f.write_str("function"),
        }
    }
}

/// A top-level declaration found by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub position: SourcePosition,
    pub kind: DeclKind,
}

impl Declaration {
    pub fn new(name: impl Into<String>, position: SourcePosition, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            position,
            kind,
        }
    }
}
