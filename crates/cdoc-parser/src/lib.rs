//! # cdoc-parser
//!
//! C/C++ front end for cdoc, built on the tree-sitter grammars bundled with
//! ast-grep.
//!
//! [`SourceParser::parse`] turns a file into an immutable [`SyntaxTree`] of
//! declaration nodes with positions and spelled names. The native tree never
//! leaves `parse`. [`global_declarations`] then picks the top-level variables
//! and functions (or those of the single top-level namespace) that doc
//! comments are attached to.

mod convert;
pub mod declarations;
pub mod error;
pub mod parser;
pub mod tree;

pub use declarations::global_declarations;
pub use error::{ParseFailure, ParserError};
pub use parser::{Language, ParserArgs, SourceParser, TreeSitterParser, detect_language};
pub use tree::{NodeKind, SyntaxTree, TreeNode};
