//! # cdoc-cli
//!
//! Shared code behind the `cdoc2json` and `addcdocs` binaries.
//!
//! `cdoc2json` reads C/C++ sources and writes every doc comment that sits
//! directly above a top-level variable or function into a JSON object keyed
//! by identifier. `addcdocs` reads that JSON back and inserts each comment
//! above the declaration of the same name, rewriting a file only when its
//! text changes.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
