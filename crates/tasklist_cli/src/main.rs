//! Terminal front end for the task list.
//!
//! # Responsibility
//! - Wire environment logging configuration into the core.
//! - Run one interactive session over stdin/stdout.

mod command;
mod session;

use log::info;
use std::io;
use std::process::ExitCode;
use tasklist_core::LogConfig;

fn main() -> ExitCode {
    if let Some(config) = LogConfig::from_env() {
        if let Err(err) = config.init() {
            eprintln!("tasklist: logging disabled: {err}");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match session::run(stdin.lock(), stdout.lock()) {
        Ok(()) => {
            info!("event=session_end module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("tasklist: {err}");
            ExitCode::FAILURE
        }
    }
}
