// src/main.rs
use anyhow::Result;
use clap::Parser;
use filecount::cli::Args;
use filecount::config::AppConfig;
use filecount::{app, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("filecount: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.quiet);

    let config = AppConfig::try_from(args)?;
    let stdout = std::io::stdout();
    app::run(&config, &mut stdout.lock())?;
    Ok(())
}
