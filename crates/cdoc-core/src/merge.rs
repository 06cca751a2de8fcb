//! Coalescing of stacked `//` comments into one documentation block.

use crate::comment::Comment;

/// Merge every run of `//` comments on consecutive lines into one comment.
///
/// A comment joins the run when it is a line comment and starts on the line
/// right after the run ends. The merged text is the original texts joined by
/// `\n` and keeps the position of the first comment. Block comments are never
/// merged. `comments` must be in file order.
#[must_use]
pub fn merge_line_comments(comments: Vec<Comment>) -> Vec<Comment> {
    let mut merged: Vec<Comment> = Vec::with_capacity(comments.len());
    for comment in comments {
        match merged.last_mut() {
            Some(run) if continues_run(run, &comment) => {
                run.text.push('\n');
                run.text.push_str(&comment.text);
            }
            _ => merged.push(comment),
        }
    }
    merged
}

fn continues_run(run: &Comment, next: &Comment) -> bool {
    run.is_line_comment() && next.is_line_comment() && next.position.line == run.end_line() + 1
}
