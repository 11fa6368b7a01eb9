use std::io;
use std::process::ExitCode;

use capture_board::session::{self, SessionConfig};

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let config = match SessionConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("usage: capture_board [--max-black N] [--min-black N] [--no-highlight]");
            return ExitCode::from(2);
        }
    };
    log::debug!("starting session with {config:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match session::run(config, stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("i/o error: {e}");
            ExitCode::FAILURE
        }
    }
}
