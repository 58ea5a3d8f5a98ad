//! `docpage` - documentation article page renderer

use clap::Parser;
use tokio_util::sync::CancellationToken;

use docpage::cli::args::Cli;
use docpage::cli::commands;
use docpage::error::ExitCode;
use docpage::observability::init_logging;

#[derive(Debug, Clone, Copy)]
enum Signal {
    Interrupt,
    Terminate,
}

impl Signal {
    const fn exit_code(self) -> i32 {
        match self {
            Self::Interrupt => ExitCode::INTERRUPTED,
            Self::Terminate => ExitCode::TERMINATED,
        }
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> Signal {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => tokio::select! {
            _ = tokio::signal::ctrl_c() => Signal::Interrupt,
            _ = sigterm.recv() => Signal::Terminate,
        },
        Err(e) => {
            tracing::warn!(error = %e, "failed to register SIGTERM handler");
            let _ = tokio::signal::ctrl_c().await;
            Signal::Interrupt
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Signal {
    let _ = tokio::signal::ctrl_c().await;
    Signal::Interrupt
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    let cancel = CancellationToken::new();

    // First signal shuts down gracefully, the second forces exit
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        eprintln!("\nShutting down gracefully... (press Ctrl+C again to force)");
        signal_cancel.cancel();

        let second = wait_for_signal().await;
        std::process::exit(second.exit_code());
    });

    match commands::dispatch(cli, cancel).await {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
