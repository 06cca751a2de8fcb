//! # cdoc-core
//!
//! Moves documentation comments between C/C++ source files and a JSON
//! sidecar keyed by identifier.
//!
//! The crate holds everything that does not need a C/C++ front end:
//! - **Scanning**: [`scan_comments`] tokenizes source text into raw comments
//! - **Merging**: [`merge_line_comments`] stacks adjacent `//` lines into blocks
//! - **Association**: [`associate`] pairs comments with the declarations that
//!   follow them, [`plan_insertions`] does the reverse for injection
//! - **Storage**: [`CommentMap`] and the [`sidecar`] JSON file
//! - **Rewriting**: [`rewrite`] re-inserts comments above their declarations
//!
//! Declarations come from `cdoc-parser`; this crate only sees their names
//! and positions.
//!
//! The adjacency rules (a comment documents a declaration that starts on the
//! same or the next line; `//` lines on consecutive lines form one block) are
//! heuristics. Unusual formatting can produce mis-associations.

pub mod association;
pub mod comment;
pub mod declaration;
pub mod error;
pub mod mapping;
pub mod merge;
pub mod position;
pub mod report;
pub mod rewrite;
pub mod scanner;
pub mod sidecar;

pub use association::{associate, normalize_comment, plan_insertions};
pub use comment::{Comment, DocComment};
pub use declaration::{DeclKind, Declaration};
pub use error::CoreError;
pub use mapping::CommentMap;
pub use merge::merge_line_comments;
pub use position::{LineIndex, SourcePosition};
pub use report::{Event, Reporter, TracingReporter};
pub use rewrite::{Rewrite, rewrite};
pub use scanner::scan_comments;
