//! The `subsort` command: resolve config and archive, then restructure.

use super::cli::Cli;
use crate::services::config::{load_config, ConfigOverrides, RestructureConfig};
use crate::services::discovery;
use crate::services::restructure::{RestructureEngine, RestructureSummary};
use crate::types::errors::CommandResult;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

/// Merge the optional config file with command-line flags.
pub fn build_config(cli: &Cli) -> CommandResult<RestructureConfig> {
    let base = match &cli.config {
        Some(path) => load_config(path)?,
        None => RestructureConfig::default(),
    };

    Ok(base.with_overrides(ConfigOverrides {
        cs_identifier: cli.cs_identifier,
        remove_unwanted: cli.remove_unwanted,
        target_root: cli.output_dir.clone(),
    }))
}

/// The archive given with `--archive`, or the one found in the working directory.
pub fn resolve_archive_path<R: BufRead, W: Write>(
    cli: &Cli,
    interactive: bool,
    input: &mut R,
    output: &mut W,
) -> CommandResult<PathBuf> {
    if let Some(archive) = &cli.archive {
        return Ok(archive.clone());
    }

    let work_dir = cli.working_dir();
    log::info!("Working in '{}'", work_dir.display());
    discovery::resolve_archive(&work_dir, interactive, input, output)
}

/// Run one restructuring with explicit I/O handles for the selection prompt.
pub fn execute_with_io<R: BufRead, W: Write>(
    cli: &Cli,
    interactive: bool,
    input: &mut R,
    output: &mut W,
) -> CommandResult<RestructureSummary> {
    let config = build_config(cli)?;
    let archive = resolve_archive_path(cli, interactive, input, output)?;

    RestructureEngine::with_log_reporter(config).run(&archive)
}

/// Run one restructuring against the process's stdin/stderr.
pub fn execute(cli: &Cli) -> CommandResult<RestructureSummary> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();
    let mut output = std::io::stderr();

    execute_with_io(cli, interactive, &mut input, &mut output)
}
