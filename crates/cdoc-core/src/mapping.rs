//! Identifier to doc comment mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::report::{Event, Reporter};

/// Maps identifiers to the full text of their doc comment.
///
/// Keys are kept sorted so the JSON sidecar is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentMap {
    entries: BTreeMap<String, String>,
}

impl CommentMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `comment` for `identifier`.
    ///
    /// Overwriting a different existing comment reports an
    /// [`Event::DuplicateComment`]; the new value always wins.
    pub fn put(
        &mut self,
        identifier: impl Into<String>,
        comment: impl Into<String>,
        reporter: &mut dyn Reporter,
    ) {
        let identifier = identifier.into();
        let comment = comment.into();
        match self.entries.get(&identifier) {
            Some(old) if *old != comment => reporter.report(Event::DuplicateComment {
                identifier: identifier.clone(),
                old: old.clone(),
                new: comment.clone(),
            }),
            _ => {}
        }
        self.entries.insert(identifier, comment);
    }

    /// The comment recorded for `identifier`, if any.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CommentMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
