use anyhow::Context;
use cdoc_cli::{cli::InjectCli, commands, logging};
use cdoc_config::CdocConfig;
use cdoc_core::TracingReporter;
use cdoc_parser::TreeSitterParser;
use clap::Parser;

fn main() {
    if let Err(error) = run() {
        eprintln!("addcdocs error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = InjectCli::parse();
    logging::init_tracing(cli.log)?;
    let config = CdocConfig::load().context("failed to load configuration")?;

    let mut stdout = std::io::stdout().lock();
    let changed = commands::inject::handle(
        &cli,
        &config,
        &TreeSitterParser,
        &mut TracingReporter,
        &mut stdout,
    )?;
    tracing::info!(files = changed.len(), "done");
    Ok(())
}
