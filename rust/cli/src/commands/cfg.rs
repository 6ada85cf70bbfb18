//! Cfg command handler: show the resolved configuration and where each
//! value came from.

use std::io::Write;

use crate::config::load_with_sources;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let src = &resolved.sources;

    writeln!(
        out,
        "iterations = {} ({})",
        cfg.iterations,
        src.iterations.label()
    )?;
    writeln!(out, "persona = {} ({})", cfg.persona, src.persona.label())?;
    match cfg.seed {
        Some(seed) => writeln!(out, "seed = {} ({})", seed, src.seed.label())?,
        None => writeln!(out, "seed = random ({})", src.seed.label())?,
    }
    match &cfg.log {
        Some(log) => writeln!(out, "log = {} ({})", log, src.log.label())?,
        None => writeln!(out, "log = off ({})", src.log.label())?,
    }
    Ok(())
}
