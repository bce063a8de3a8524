use std::process::ExitCode;

use nshell::core::config::ShellConfig;
use nshell::error::ShellError;
use nshell::shell::Shell;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_env("NSHELL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run() {
        // only the low byte survives, as with exit(3)
        Ok(code) => ExitCode::from((code & 0xff) as u8),
        Err(e) => {
            eprintln!("nshell: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<i32, ShellError> {
    let config = ShellConfig::from_env()?;
    let mut shell = Shell::new(config)?;

    println!("nshell v{}", env!("CARGO_PKG_VERSION"));
    Ok(shell.run())
}
