// src/app.rs
use crate::config::AppConfig;
use crate::error::Result;
use crate::presentation;
use std::io::Write;

/// Run one invocation, writing the report to `out`.
///
/// The report is written only after every file has been tallied; on error
/// nothing but the `-v` echo has reached `out`.
///
/// # Errors
/// The first engine failure, or a failure to serialize/write the report.
pub fn run(config: &AppConfig, out: &mut impl Write) -> Result<()> {
    if config.verbose {
        out.write_all(presentation::render_verbose(&config.engine.inputs).as_bytes())?;
        out.flush()?;
    }

    let set = filecount_engine::run(&config.engine)?;
    tracing::debug!(files = set.len(), "run complete");

    let report = presentation::render(&set, config)?;
    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(())
}
