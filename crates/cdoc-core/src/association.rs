//! Pairing comments with declarations, in both directions.
//!
//! Extraction walks declarations and comments together in one forward
//! sweep. A comment documents a declaration when it ends on the line the
//! declaration starts on, or on the line right before it. This is a
//! proximity heuristic, not a parse of intent: a trailing comment on the
//! previous statement is adopted by the next declaration.

use std::collections::BTreeMap;

use crate::comment::{Comment, DocComment};
use crate::declaration::Declaration;
use crate::mapping::CommentMap;

/// Largest gap, in lines, between a comment's end and a declaration's start.
const MAX_LINE_GAP: u32 = 1;

/// Pair each declaration with the comment directly above it.
///
/// Both slices must be sorted by position. Comments are visited once: every
/// comment that ends before a declaration starts is consumed by that
/// declaration, and the closest qualifying one is adopted. Declarations
/// without a qualifying comment are left out.
#[must_use]
pub fn associate<'a>(
    declarations: &'a [Declaration],
    comments: &'a [Comment],
) -> Vec<DocComment<'a>> {
    let mut docs = Vec::new();
    let mut cursor = 0;
    for declaration in declarations {
        let mut adopted = None;
        while let Some(comment) = comments.get(cursor) {
            if declaration.position.precedes(&comment.end_position()) {
                break;
            }
            if declaration.position.line.saturating_sub(comment.end_line()) <= MAX_LINE_GAP {
                adopted = Some(comment);
            }
            cursor += 1;
        }
        if let Some(comment) = adopted {
            docs.push(DocComment {
                declaration,
                comment,
            });
        }
    }
    docs
}

/// Strip one `/` from every line that starts with `///`.
#[must_use]
pub fn normalize_comment(comment: &str) -> String {
    comment
        .split('\n')
        .map(|line| {
            if line.starts_with("///") {
                &line[1..]
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Map target line → normalized comment for every declaration that has an
/// entry in `docs`. When two declarations start on the same line the later
/// one wins.
#[must_use]
pub fn plan_insertions(declarations: &[Declaration], docs: &CommentMap) -> BTreeMap<u32, String> {
    let mut insertions = BTreeMap::new();
    for declaration in declarations {
        if let Some(comment) = docs.get(&declaration.name) {
            insertions.insert(declaration.position.line, normalize_comment(comment));
        }
    }
    insertions
}
