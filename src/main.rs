use anyhow::Result;
use std::io::{self, Write};

use server_manager::{app, logging};

fn main() -> Result<()> {
    logging::init_logging("warn");
    tracing::debug!(version = server_manager::VERSION, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let now = chrono::Local::now().naive_local();
    app::run(&mut out, now)?;
    out.flush()?;
    Ok(())
}
