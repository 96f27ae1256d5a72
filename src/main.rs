use std::io::{self, Write};

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

// Stdout carries the program output, so logs go to stderr
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

fn main() -> Result<()> {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let _ = WriteLogger::init(LOG_LEVEL, log_config, io::stderr());

    log::info!("intro_exercises starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    intro_exercises::runner::run(&mut out)?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
