use anyhow::Context;
use cdoc_cli::{cli::ExtractCli, commands, logging};
use cdoc_config::CdocConfig;
use cdoc_core::TracingReporter;
use cdoc_parser::TreeSitterParser;
use clap::Parser;

fn main() {
    if let Err(error) = run() {
        eprintln!("cdoc2json error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = ExtractCli::parse();
    logging::init_tracing(cli.log)?;
    let config = CdocConfig::load().context("failed to load configuration")?;

    let mut stdout = std::io::stdout().lock();
    commands::extract::handle(
        &cli,
        &config,
        &TreeSitterParser,
        &mut TracingReporter,
        &mut stdout,
    )?;
    Ok(())
}
