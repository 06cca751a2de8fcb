//! The parser seam and its tree-sitter implementation.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use ast_grep_language::{LanguageExt, SupportLang};

use crate::convert::Converter;
use crate::error::{ParseFailure, ParserError};
use crate::tree::SyntaxTree;

/// Anything that can turn a C/C++ file into a [`SyntaxTree`].
pub trait SourceParser {
    /// Parse `source`, the contents of `path`.
    ///
    /// # Errors
    /// Returns a [`ParseFailure`] carrying the best-effort partial tree when
    /// the file cannot be parsed cleanly.
    fn parse(&self, path: &Path, source: &str, args: &ParserArgs)
    -> Result<SyntaxTree, ParseFailure>;
}

/// Extra arguments for the parser, as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserArgs(Vec<String>);

impl ParserArgs {
    #[must_use]
    pub const fn new(args: Vec<String>) -> Self {
        Self(args)
    }

    /// Split a `|`-separated list, dropping empty items.
    #[must_use]
    pub fn from_pipe_separated(raw: &str) -> Self {
        raw.split('|').filter(|arg| !arg.is_empty()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Language forced by `-x`, `--language=` or `-std=`; the last one wins.
    #[must_use]
    pub fn language(&self) -> Option<Language> {
        let mut language = None;
        let mut args = self.iter();
        while let Some(arg) = args.next() {
            let value = if arg == "-x" {
                args.next()
            } else if let Some(std) = arg
                .strip_prefix("-std=")
                .or_else(|| arg.strip_prefix("--std="))
            {
                language = Some(if std.contains("++") {
                    Language::Cpp
                } else {
                    Language::C
                });
                continue;
            } else {
                arg.strip_prefix("--language=")
                    .or_else(|| arg.strip_prefix("-x"))
            };
            match value {
                Some("c" | "c-header") => language = Some(Language::C),
                Some("c++" | "c++-header") => language = Some(Language::Cpp),
                _ => {}
            }
        }
        language
    }
}

impl<S: Into<String>> FromIterator<S> for ParserArgs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// The grammars cdoc can parse with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cpp,
}

impl Language {
    const fn support_lang(self) -> SupportLang {
        match self {
            Self::C => SupportLang::C,
            Self::Cpp => SupportLang::Cpp,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::C => f.write_str("c"),
            Self::Cpp => f.write_str("c++"),
        }
    }
}

/// Detect the language from a file extension.
///
/// Returns `None` for unrecognized extensions.
#[must_use]
pub fn detect_language(path: &Path) -> Option<Language> {
    let ext = path.extension()?.to_str()?;
    match ext {
        "c" | "h" => Some(Language::C),
        "cc" | "cpp" | "cxx" | "c++" | "hh" | "hpp" | "hxx" | "h++" | "ipp" | "inl" => {
            Some(Language::Cpp)
        }
        _ => None,
    }
}

/// [`SourceParser`] over the tree-sitter C and C++ grammars.
///
/// Only the language selection in [`ParserArgs`] means anything here; the
/// grammars parse text without a preprocessor, so include paths and macro
/// definitions are accepted and ignored. Both branches of `#if`/`#else`
/// blocks are seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSitterParser;

impl SourceParser for TreeSitterParser {
    fn parse(
        &self,
        path: &Path,
        source: &str,
        args: &ParserArgs,
    ) -> Result<SyntaxTree, ParseFailure> {
        let file: Arc<Path> = Arc::from(path);
        let Some(language) = args.language().or_else(|| detect_language(path)) else {
            return Err(ParseFailure {
                partial: SyntaxTree::empty(file),
                error: ParserError::UnsupportedLanguage(path.display().to_string()),
            });
        };
        if !args.is_empty() {
            tracing::debug!(
                path = %path.display(),
                %language,
                args = ?args.iter().collect::<Vec<_>>(),
                "only language selection is used from parser arguments"
            );
        }

        // The native tree lives only in this scope.
        let grep = language.support_lang().ast_grep(source);
        let mut converter = Converter::new(file, source);
        let tree = converter.translation_unit(&grep.root());

        match converter.first_error() {
            None => Ok(tree),
            Some((line, column)) => Err(ParseFailure {
                partial: tree,
                error: ParserError::Syntax {
                    path: path.to_path_buf(),
                    line,
                    column,
                },
            }),
        }
    }
}
