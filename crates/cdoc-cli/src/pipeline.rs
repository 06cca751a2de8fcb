//! Per-file processing shared by both binaries.
//!
//! Each function handles one file's text end to end and never touches the
//! file system; the command handlers own reading and writing.

use std::path::Path;

use cdoc_core::{
    CommentMap, Event, Reporter, Rewrite, associate, merge_line_comments, plan_insertions,
    rewrite, scan_comments,
};
use cdoc_parser::{ParserArgs, SourceParser, SyntaxTree, global_declarations};

/// A comment adopted by a declaration during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub identifier: String,
    /// `file:line:column` of the declaration.
    pub location: String,
    pub comment: String,
}

/// Scan → merge → declarations → associate, storing every adopted comment
/// in `docs`.
///
/// A file the parser rejects contributes nothing.
pub fn extract_source(
    path: &Path,
    source: &str,
    parser: &dyn SourceParser,
    args: &ParserArgs,
    docs: &mut CommentMap,
    reporter: &mut dyn Reporter,
) -> Vec<Extracted> {
    tracing::debug!(path = %path.display(), "parsing");
    let tree = match parser.parse(path, source, args) {
        Ok(tree) => tree,
        Err(failure) => {
            reporter.report(Event::ParseFailed {
                file: path.to_path_buf(),
                message: failure.to_string(),
            });
            return Vec::new();
        }
    };

    let comments = merge_line_comments(scan_comments(path, source, reporter));
    let declarations = global_declarations(&tree);
    let extracted: Vec<Extracted> = associate(&declarations, &comments)
        .into_iter()
        .map(|doc| Extracted {
            identifier: doc.declaration.name.clone(),
            location: doc.declaration.position.to_string(),
            comment: doc.comment.text.clone(),
        })
        .collect();

    for doc in &extracted {
        docs.put(doc.identifier.as_str(), doc.comment.as_str(), reporter);
    }
    tracing::debug!(
        path = %path.display(),
        declarations = declarations.len(),
        comments = comments.len(),
        adopted = extracted.len(),
        "extracted doc comments"
    );
    extracted
}

/// Parse `source` and re-insert the comments `docs` holds for its
/// declarations.
///
/// A parse failure is reported and the partial tree is used, which may mean
/// nothing is inserted.
pub fn inject_source(
    path: &Path,
    source: &str,
    parser: &dyn SourceParser,
    args: &ParserArgs,
    docs: &CommentMap,
    reporter: &mut dyn Reporter,
) -> Rewrite {
    let tree = parse_lenient(path, source, parser, args, reporter);
    let declarations = global_declarations(&tree);
    let insertions = plan_insertions(&declarations, docs);
    tracing::debug!(
        path = %path.display(),
        declarations = declarations.len(),
        insertions = insertions.len(),
        "planned insertions"
    );
    rewrite(source, &insertions)
}

fn parse_lenient(
    path: &Path,
    source: &str,
    parser: &dyn SourceParser,
    args: &ParserArgs,
    reporter: &mut dyn Reporter,
) -> SyntaxTree {
    parser.parse(path, source, args).unwrap_or_else(|failure| {
        reporter.report(Event::ParseFailed {
            file: path.to_path_buf(),
            message: failure.to_string(),
        });
        failure.partial
    })
}

#[cfg(test)]
mod tests {
    use cdoc_parser::TreeSitterParser;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn extracts_comments_above_declarations() {
        let source = "\
// Global counter.
int counter;

/* Adds two numbers. */
int add(int a, int b) { return a + b; }

int undocumented;
";
        let mut docs = CommentMap::new();
        let mut events = Vec::new();
        let extracted = extract_source(
            Path::new("m.c"),
            source,
            &TreeSitterParser,
            &ParserArgs::default(),
            &mut docs,
            &mut events,
        );

        assert!(events.is_empty());
        assert_eq!(extracted.len(), 2);
        assert_eq!(extracted[1].location, "m.c:5:1");
        assert_eq!(docs.get("counter"), Some("// Global counter."));
        assert_eq!(docs.get("add"), Some("/* Adds two numbers. */"));
        assert_eq!(docs.get("undocumented"), None);
    }

    #[test]
    fn rejected_file_contributes_nothing() {
        let mut docs = CommentMap::new();
        let mut events = Vec::new();
        let extracted = extract_source(
            Path::new("m.c"),
            "// doc\nint ok;\n@@@\n",
            &TreeSitterParser,
            &ParserArgs::default(),
            &mut docs,
            &mut events,
        );

        assert!(extracted.is_empty());
        assert!(docs.is_empty());
        assert!(matches!(events.as_slice(), [Event::ParseFailed { .. }]));
    }

    #[test]
    fn injects_above_declarations() {
        let docs: CommentMap = [("counter", "/// Global counter."), ("add", "/* Adds. */")]
            .into_iter()
            .collect();
        let mut events = Vec::new();
        let result = inject_source(
            Path::new("m.c"),
            "int counter;\n\nint add(int a, int b) { return a + b; }\n",
            &TreeSitterParser,
            &ParserArgs::default(),
            &docs,
            &mut events,
        );

        assert!(result.changed);
        assert_eq!(
            result.text,
            "// Global counter.\nint counter;\n\n/* Adds. */\nint add(int a, int b) { return a + b; }\n"
        );
        assert!(events.is_empty());
    }

    #[rstest]
    #[case::trailing("int a; // trailing\nint b;\n", "// trailing")]
    #[case::merged_run("int a; // x\n// y\nint b;\n", "// x\n// y")]
    #[case::split_declaration("// doc\nstatic int\nfoo(void);\n", "// doc")]
    fn reinjecting_extracted_comments_is_a_no_op(#[case] source: &str, #[case] comment: &str) {
        let path = Path::new("m.c");
        let args = ParserArgs::default();
        let mut docs = CommentMap::new();
        let mut events = Vec::new();
        let extracted =
            extract_source(path, source, &TreeSitterParser, &args, &mut docs, &mut events);
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].comment, comment);

        let result = inject_source(path, source, &TreeSitterParser, &args, &docs, &mut events);
        assert_eq!(result.text, source);
        assert!(!result.changed);
        assert!(events.is_empty());
    }

    #[test]
    fn partial_tree_is_used_after_parse_failure() {
        let docs: CommentMap = [("ok", "// fine")].into_iter().collect();
        let mut events = Vec::new();
        let result = inject_source(
            Path::new("m.c"),
            "int ok;\n@@@\n",
            &TreeSitterParser,
            &ParserArgs::default(),
            &docs,
            &mut events,
        );

        assert_eq!(result.text, "// fine\nint ok;\n@@@\n");
        assert!(matches!(events.as_slice(), [Event::ParseFailed { .. }]));
    }
}
