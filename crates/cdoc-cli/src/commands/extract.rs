use std::io::Write;

use anyhow::Context;
use cdoc_config::CdocConfig;
use cdoc_core::{CommentMap, Reporter, sidecar};
use cdoc_parser::SourceParser;

use crate::cli::ExtractCli;
use crate::pipeline::extract_source;

/// Handle `cdoc2json`.
///
/// Every file is read and processed in order into one mapping, which is
/// written once at the end. `out` receives the `--print` listing.
///
/// # Errors
/// Fails if a source file cannot be read, if `--append` names an output file
/// that cannot be decoded, or if the output cannot be written.
pub fn handle(
    cli: &ExtractCli,
    config: &CdocConfig,
    parser: &dyn SourceParser,
    reporter: &mut dyn Reporter,
    out: &mut dyn Write,
) -> anyhow::Result<CommentMap> {
    let output = cli.output_path(config);
    let args = cli.parser_args(config);

    let mut docs = if cli.append && output.exists() {
        sidecar::load(&output).context("cannot append to existing output")?
    } else {
        CommentMap::new()
    };

    for path in &cli.files {
        let source = super::read_source(path)?;
        let extracted = extract_source(path, &source, parser, &args, &mut docs, reporter);
        if cli.print {
            for doc in &extracted {
                writeln!(out, "{} {}\n{}\n", doc.location, doc.identifier, doc.comment)
                    .context("failed to write to stdout")?;
            }
        }
    }

    tracing::debug!(path = %output.display(), entries = docs.len(), "creating");
    sidecar::save(&output, &docs)?;
    Ok(docs)
}
