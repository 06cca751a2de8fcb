//! Re-inserting doc comments into source text.

use std::collections::BTreeMap;

/// Result of [`rewrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// `text` differs from the original; callers only write when set.
    pub changed: bool,
}

/// Emit `original` with each comment in `insertions` placed on its own
/// line(s) directly above its 1-based target line.
///
/// Original lines are kept as they are, in order. Output lines end in `\n`
/// whatever the input used; a missing final newline stays missing. A comment
/// that already sits right above its target (or ends on the target line) is
/// not inserted again. If nothing is inserted the original text comes back
/// untouched with `changed == false`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn rewrite(original: &str, insertions: &BTreeMap<u32, String>) -> Rewrite {
    let lines = split_lines(original);
    let trailing_newline = original.ends_with('\n');

    let extra: usize = insertions.values().map(|c| c.len() + 1).sum();
    let mut text = String::with_capacity(original.len() + extra);
    let mut inserted = false;
    for (idx, line) in lines.iter().enumerate() {
        if let Some(comment) = insertions.get(&(idx as u32 + 1)) {
            if !already_documented(&lines, idx, comment) {
                text.push_str(comment);
                text.push('\n');
                inserted = true;
            }
        }
        text.push_str(line);
        if idx + 1 < lines.len() || trailing_newline {
            text.push('\n');
        }
    }

    if !inserted {
        return Rewrite {
            text: original.to_string(),
            changed: false,
        };
    }
    let changed = text != original;
    Rewrite { text, changed }
}

/// Split on `\n`, dropping a trailing `\r` from each line and the empty
/// piece after a final newline.
fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Whether the normalized `comment` already occupies the lines right above
/// `lines[idx]`, or ends at the start of `lines[idx]` itself. Indentation and
/// `///` versus `//` are ignored. The first line of a comment may trail code
/// on the same line (`int a; // doc`).
fn already_documented(lines: &[&str], idx: usize, comment: &str) -> bool {
    let wanted: Vec<&str> = comment.split('\n').map(str::trim).collect();
    let Some((last, leading)) = wanted.split_last() else {
        return false;
    };
    let k = wanted.len();

    let above = idx >= k
        && lines[idx - k..idx]
            .iter()
            .zip(&wanted)
            .enumerate()
            .all(|(i, (have, want))| {
                let have = comparable(have);
                if i == 0 {
                    have.ends_with(*want)
                } else {
                    have == *want
                }
            });
    if above {
        return true;
    }

    idx + 1 >= k
        && lines[idx + 1 - k..idx]
            .iter()
            .zip(leading)
            .all(|(have, want)| comparable(have) == *want)
        && comparable(lines[idx]).starts_with(last)
}

/// An original source line as it would look after normalization.
fn comparable(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix('/')
        .filter(|rest| rest.starts_with("//"))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plan(entries: &[(u32, &str)]) -> BTreeMap<u32, String> {
        entries
            .iter()
            .map(|&(line, comment)| (line, comment.to_string()))
            .collect()
    }

    #[test]
    fn inserts_comment_above_target_line() {
        let out = rewrite("int foo() {}\n", &plan(&[(1, "// does foo")]));
        assert_eq!(out.text, "// does foo\nint foo() {}\n");
        assert!(out.changed);
    }

    #[test]
    fn multi_line_comment_and_several_targets() {
        let original = "#include <x.h>\nint a;\n\nvoid b(void);\n";
        let out = rewrite(original, &plan(&[(2, "// a\n// more a"), (4, "/* b */")]));
        assert_eq!(
            out.text,
            "#include <x.h>\n// a\n// more a\nint a;\n\n/* b */\nvoid b(void);\n"
        );
    }

    #[test]
    fn empty_plan_is_unchanged() {
        let original = "int x;\r\nint y;";
        let out = rewrite(original, &BTreeMap::new());
        assert_eq!(out.text, original);
        assert!(!out.changed);
    }

    #[test]
    fn out_of_range_target_is_ignored() {
        let out = rewrite("int x;\n", &plan(&[(9, "// nope")]));
        assert!(!out.changed);
    }

    #[test]
    fn normalizes_crlf_when_inserting() {
        let out = rewrite("int x;\r\nint y;\r\n", &plan(&[(2, "// y")]));
        assert_eq!(out.text, "int x;\n// y\nint y;\n");
        assert!(out.changed);
    }

    #[test]
    fn keeps_missing_final_newline() {
        let out = rewrite("int x;\nint y;", &plan(&[(2, "// y")]));
        assert_eq!(out.text, "int x;\n// y\nint y;");
    }

    #[test]
    fn existing_comment_above_is_not_duplicated() {
        let original = "// does foo\nint foo() {}\n";
        let out = rewrite(original, &plan(&[(2, "// does foo")]));
        assert_eq!(out.text, original);
        assert!(!out.changed);
    }

    #[test]
    fn existing_triple_slash_comment_matches_normalized_form() {
        let original = "namespace n {\n    /// doc\n    /// more\n    int x;\n}\n";
        let out = rewrite(original, &plan(&[(4, "// doc\n// more")]));
        assert!(!out.changed);
    }

    #[test]
    fn same_line_comment_is_not_duplicated() {
        let original = "/* x */ int x;\n";
        let out = rewrite(original, &plan(&[(1, "/* x */")]));
        assert!(!out.changed);
    }

    #[test]
    fn trailing_comment_on_previous_line_is_not_duplicated() {
        let original = "int a; // trailing\nint b;\n";
        let out = rewrite(original, &plan(&[(2, "// trailing")]));
        assert_eq!(out.text, original);
        assert!(!out.changed);
    }

    #[test]
    fn merged_run_starting_after_code_is_not_duplicated() {
        let original = "int a; // x\n// y\nint b;\n";
        let out = rewrite(original, &plan(&[(3, "// x\n// y")]));
        assert_eq!(out.text, original);
        assert!(!out.changed);
    }

    #[test]
    fn only_first_comment_line_may_trail_code() {
        let original = "// x\nint a; // y\nint b;\n";
        let out = rewrite(original, &plan(&[(3, "// x\n// y")]));
        assert!(out.changed);
    }

    #[test]
    fn different_comment_above_still_inserts() {
        let original = "// stale\nint foo;\n";
        let out = rewrite(original, &plan(&[(2, "// fresh")]));
        assert_eq!(out.text, "// stale\n// fresh\nint foo;\n");
    }

    #[test]
    fn restores_stripped_comment_exactly() {
        let original = "// does foo\nint foo() {}\n";
        let stripped = "int foo() {}\n";
        let out = rewrite(stripped, &plan(&[(1, "// does foo")]));
        assert_eq!(out.text, original);
    }
}
