//! Command-line definitions for both binaries.

use std::path::{Path, PathBuf};

use cdoc_config::CdocConfig;
use cdoc_parser::ParserArgs;
use clap::{Args, Parser};

/// Logging flags shared by both binaries.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LogFlags {
    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl LogFlags {
    /// Default filter when `CDOC_LOG` is not set.
    #[must_use]
    pub const fn level(self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// `cdoc2json`: collect doc comments into a JSON file.
#[derive(Debug, Parser)]
#[command(
    name = "cdoc2json",
    version,
    about = "Extract C/C++ doc comments into a JSON file keyed by identifier"
)]
pub struct ExtractCli {
    /// Source files to scan
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output path for the JSON file [default: sidecar.path from config, doc_comments.json]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pipe-separated parser arguments, e.g. "-x|c++|-I./include"
    #[arg(long, alias = "clang_args", value_name = "A|B", allow_hyphen_values = true)]
    pub clang_args: Option<String>,

    /// Start from the existing output file instead of an empty mapping
    #[arg(long)]
    pub append: bool,

    /// Print every adopted comment to stdout
    #[arg(long)]
    pub print: bool,

    #[command(flatten)]
    pub log: LogFlags,
}

impl ExtractCli {
    #[must_use]
    pub fn output_path(&self, config: &CdocConfig) -> PathBuf {
        sidecar_path(self.output.as_deref(), config)
    }

    #[must_use]
    pub fn parser_args(&self, config: &CdocConfig) -> ParserArgs {
        parser_args(self.clang_args.as_deref(), config)
    }
}

/// `addcdocs`: put doc comments from a JSON file back into sources.
#[derive(Debug, Parser)]
#[command(
    name = "addcdocs",
    version,
    about = "Insert doc comments from a JSON file above their C/C++ declarations"
)]
pub struct InjectCli {
    /// Source files to rewrite in place
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Doc comments JSON path [default: sidecar.path from config, doc_comments.json]
    #[arg(short, long, alias = "json_path", value_name = "PATH")]
    pub json_path: Option<PathBuf>,

    /// Pipe-separated parser arguments, e.g. "-x|c++|-I./include"
    #[arg(long, alias = "clang_args", value_name = "A|B", allow_hyphen_values = true)]
    pub clang_args: Option<String>,

    /// Report which files would change without writing them
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub log: LogFlags,
}

impl InjectCli {
    #[must_use]
    pub fn json_path(&self, config: &CdocConfig) -> PathBuf {
        sidecar_path(self.json_path.as_deref(), config)
    }

    #[must_use]
    pub fn parser_args(&self, config: &CdocConfig) -> ParserArgs {
        parser_args(self.clang_args.as_deref(), config)
    }
}

fn sidecar_path(flag: Option<&Path>, config: &CdocConfig) -> PathBuf {
    flag.map_or_else(|| PathBuf::from(&config.sidecar.path), Path::to_path_buf)
}

fn parser_args(flag: Option<&str>, config: &CdocConfig) -> ParserArgs {
    flag.map_or_else(
        || ParserArgs::new(config.parser.args.clone()),
        ParserArgs::from_pipe_separated,
    )
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clap_commands_are_valid() {
        ExtractCli::command().debug_assert();
        InjectCli::command().debug_assert();
    }

    #[test]
    fn extract_defaults_come_from_config() {
        let cli = ExtractCli::try_parse_from(["cdoc2json", "a.c", "b.h"]).expect("cli should parse");
        let config = CdocConfig::default();

        assert_eq!(cli.files, vec![PathBuf::from("a.c"), PathBuf::from("b.h")]);
        assert_eq!(cli.output_path(&config), PathBuf::from("doc_comments.json"));
        assert!(cli.parser_args(&config).is_empty());
        assert!(!cli.append);
        assert_eq!(cli.log.level(), "warn");
    }

    #[test]
    fn flags_override_config() {
        let mut config = CdocConfig::default();
        config.sidecar.path = "from-config.json".to_string();
        config.parser.args = vec!["-std=c11".to_string()];

        let cli = ExtractCli::try_parse_from([
            "cdoc2json",
            "--output",
            "out.json",
            "--clang-args",
            "-m32|-I./include",
            "a.c",
        ])
        .expect("cli should parse");
        assert_eq!(cli.output_path(&config), PathBuf::from("out.json"));
        assert_eq!(
            cli.parser_args(&config).iter().collect::<Vec<_>>(),
            vec!["-m32", "-I./include"]
        );

        let cli = ExtractCli::try_parse_from(["cdoc2json", "a.c"]).expect("cli should parse");
        assert_eq!(cli.output_path(&config), PathBuf::from("from-config.json"));
        assert_eq!(
            cli.parser_args(&config).iter().collect::<Vec<_>>(),
            vec!["-std=c11"]
        );
    }

    #[test]
    fn underscore_spellings_are_accepted() {
        let cli = InjectCli::try_parse_from([
            "addcdocs",
            "--json_path",
            "docs.json",
            "--clang_args",
            "-x|c++",
            "a.h",
        ])
        .expect("cli should parse");
        let config = CdocConfig::default();
        assert_eq!(cli.json_path(&config), PathBuf::from("docs.json"));
        assert_eq!(cli.parser_args(&config).iter().collect::<Vec<_>>(), vec!["-x", "c++"]);
    }

    #[test]
    fn files_are_required() {
        assert!(ExtractCli::try_parse_from(["cdoc2json"]).is_err());
        assert!(InjectCli::try_parse_from(["addcdocs", "--dry-run"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(InjectCli::try_parse_from(["addcdocs", "-q", "-v", "a.c"]).is_err());
        let cli = InjectCli::try_parse_from(["addcdocs", "-v", "a.c"]).expect("cli should parse");
        assert_eq!(cli.log.level(), "debug");
        let cli = InjectCli::try_parse_from(["addcdocs", "-q", "a.c"]).expect("cli should parse");
        assert_eq!(cli.log.level(), "error");
    }
}
