//! Structured events for non-fatal problems.
//!
//! Components never write to a log directly. They hand an [`Event`] to the
//! [`Reporter`] they were given; the binaries plug in [`TracingReporter`],
//! tests collect into a `Vec<Event>`.

use std::path::PathBuf;

/// A non-fatal problem noticed while processing a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The comment scanner hit malformed input outside a preprocessor directive.
    ScanDiagnostic {
        file: PathBuf,
        line: u32,
        column: u32,
        message: String,
    },

    /// An identifier was documented twice with different comments; `new` wins.
    DuplicateComment {
        identifier: String,
        old: String,
        new: String,
    },

    /// The C/C++ parser failed; whatever it produced is used (or nothing).
    ParseFailed { file: PathBuf, message: String },
}

/// Sink for [`Event`]s.
pub trait Reporter {
    fn report(&mut self, event: Event);
}

impl Reporter for Vec<Event> {
    fn report(&mut self, event: Event) {
        self.push(event);
    }
}

/// Reports every event as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, event: Event) {
        match event {
            Event::ScanDiagnostic {
                file,
                line,
                column,
                message,
            } => {
                tracing::warn!(file = %file.display(), line, column, "{message}");
            }
            Event::DuplicateComment {
                identifier,
                old,
                new,
            } => {
                tracing::warn!(
                    %identifier,
                    ?old,
                    ?new,
                    "doc comment for {identifier:?} already present"
                );
            }
            Event::ParseFailed { file, message } => {
                tracing::warn!(file = %file.display(), "parse failed: {message}");
            }
        }
    }
}
