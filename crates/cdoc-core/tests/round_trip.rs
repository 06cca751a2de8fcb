//! Extraction and injection through the public API, with declarations
//! supplied by hand instead of a C parser.

use std::path::Path;

use cdoc_core::{
    CommentMap, DeclKind, Declaration, Event, SourcePosition, associate, merge_line_comments,
    plan_insertions, rewrite, scan_comments,
};
use pretty_assertions::assert_eq;

fn decl(name: &str, line: u32, column: u32, kind: DeclKind) -> Declaration {
    Declaration::new(name, SourcePosition::new(Path::new("t.c"), line, column), kind)
}

fn extract(source: &str, decls: &[Declaration], docs: &mut CommentMap, events: &mut Vec<Event>) {
    let comments = merge_line_comments(scan_comments(Path::new("t.c"), source, events));
    for doc in associate(decls, &comments) {
        docs.put(&doc.declaration.name, &doc.comment.text, events);
    }
}

#[test]
fn extract_then_reinject_into_stripped_copy() {
    let original = "// does foo\nint foo() {}\n";
    let mut docs = CommentMap::new();
    let mut events = Vec::new();
    extract(
        original,
        &[decl("foo", 2, 1, DeclKind::Function)],
        &mut docs,
        &mut events,
    );
    assert_eq!(
        serde_json::to_string(&docs).expect("json"),
        r#"{"foo":"// does foo"}"#
    );

    let stripped = "int foo() {}\n";
    let plan = plan_insertions(&[decl("foo", 1, 1, DeclKind::Function)], &docs);
    let out = rewrite(stripped, &plan);
    assert!(out.changed);
    assert_eq!(out.text, original);
    assert!(events.is_empty());
}

#[test]
fn reinjecting_into_original_is_a_no_op() {
    let original = "\
#include <stdio.h>

/// Counts things.
/// Twice.
static int counter;

/* Entry point. */
int main(void) {
    // not documentation
    return counter;
}
";
    let decls = [
        decl("counter", 5, 1, DeclKind::Variable),
        decl("main", 8, 1, DeclKind::Function),
    ];
    let mut docs = CommentMap::new();
    let mut events = Vec::new();
    extract(original, &decls, &mut docs, &mut events);
    assert_eq!(docs.get("counter"), Some("/// Counts things.\n/// Twice."));
    assert_eq!(docs.get("main"), Some("/* Entry point. */"));

    let out = rewrite(original, &plan_insertions(&decls, &docs));
    assert!(!out.changed);
    assert_eq!(out.text, original);
}

#[test]
fn later_file_overwrites_with_one_warning() {
    let mut docs: CommentMap = [("bar", "// old")].into_iter().collect();
    let mut events = Vec::new();
    extract(
        "// new bar comment\nint bar;\n",
        &[decl("bar", 2, 1, DeclKind::Variable)],
        &mut docs,
        &mut events,
    );
    assert_eq!(docs.get("bar"), Some("// new bar comment"));
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        Event::DuplicateComment { identifier, .. } if identifier == "bar"
    ));
}

#[test]
fn triple_slash_comment_is_injected_with_one_slash_less() {
    let docs: CommentMap = [("f", "/// line one\n/// line two\n// plain")]
        .into_iter()
        .collect();
    let out = rewrite(
        "void f(void);\n",
        &plan_insertions(&[decl("f", 1, 1, DeclKind::Function)], &docs),
    );
    assert_eq!(out.text, "// line one\n// line two\n// plain\nvoid f(void);\n");
}

#[test]
fn unmatched_mapping_leaves_text_alone() {
    let docs: CommentMap = [("other", "// other")].into_iter().collect();
    let source = "int x;\n";
    let out = rewrite(
        source,
        &plan_insertions(&[decl("x", 1, 1, DeclKind::Variable)], &docs),
    );
    assert!(!out.changed);
    assert_eq!(out.text, source);
}
