use std::io::ErrorKind;
use std::process::ExitCode;

use clap::Parser;
use pianolabs::cli::{Args, run};
use tracing::info;

/// True when the failure is stdout closing under us (e.g. piping to `head`).
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == ErrorKind::BrokenPipe)
    })
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr, stdout carries `render` and `manifest` output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    info!("pianolabs v{}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[pianolabs] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
