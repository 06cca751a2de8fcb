use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use cdoc_config::CdocConfig;
use cdoc_core::{Reporter, sidecar};
use cdoc_parser::SourceParser;

use crate::cli::InjectCli;
use crate::pipeline::inject_source;

/// Handle `addcdocs`.
///
/// The sidecar is loaded in full before any source is read. A file is only
/// written when its text actually changes; with `--dry-run` the would-be
/// changes are listed on `out` instead. Returns the files that changed.
///
/// # Errors
/// Fails if the sidecar cannot be read or decoded, if a source file cannot
/// be read, or if a changed file cannot be written.
pub fn handle(
    cli: &InjectCli,
    config: &CdocConfig,
    parser: &dyn SourceParser,
    reporter: &mut dyn Reporter,
    out: &mut dyn Write,
) -> anyhow::Result<Vec<PathBuf>> {
    let json_path = cli.json_path(config);
    let args = cli.parser_args(config);
    let docs = sidecar::load(&json_path)?;
    tracing::debug!(path = %json_path.display(), entries = docs.len(), "loaded doc comments");

    let mut changed = Vec::new();
    for path in &cli.files {
        let source = super::read_source(path)?;
        let rewritten = inject_source(path, &source, parser, &args, &docs, reporter);
        if !rewritten.changed {
            tracing::debug!(path = %path.display(), "unchanged");
            continue;
        }
        if cli.dry_run {
            writeln!(out, "would update {}", path.display())
                .context("failed to write to stdout")?;
        } else {
            tracing::debug!(path = %path.display(), "adding comments");
            fs::write(path, &rewritten.text)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        changed.push(path.clone());
    }
    Ok(changed)
}
