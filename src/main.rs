//! Serial Logger - Main Entry Point
//!
//! Records deduplicated serial lines until Ctrl+C, then saves them to
//! `serial_data.csv`.

use std::process::ExitCode;

use anyhow::Context;
use serial_logger::{
    run_session, LoggerConfig, LoggerError, SerialLineSource, SessionOutcome, StopHandle,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,serial_logger=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(LoggerConfig::default()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: LoggerConfig) -> anyhow::Result<ExitCode> {
    let source = SerialLineSource::open(&config)?;

    println!(
        "Monitoring serial port {}... Press Ctrl+C to stop.",
        source.port_name()
    );

    let stop = StopHandle::new();
    let handler_stop = stop.clone();
    ctrlc::set_handler(move || {
        tracing::debug!("Received Ctrl+C");
        handler_stop.stop();
    })
    .context("Failed to install Ctrl+C handler")?;

    let result = run_session(source, &config, &stop, |record| {
        println!("{}", record.console_line());
    });

    for line in shutdown_notices(stop.is_stopped(), &result) {
        println!("{}", line);
    }

    let outcome = result
        .with_context(|| format!("Failed to save data to {}", config.output_path.display()))?;

    match outcome.read_error {
        Some(err) => {
            eprintln!("Serial reading stopped: {}", err);
            Ok(ExitCode::FAILURE)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}

/// Console lines printed once the session is over, whether or not the
/// CSV could be written.
fn shutdown_notices(
    stop_requested: bool,
    result: &Result<SessionOutcome, LoggerError>,
) -> Vec<String> {
    let mut lines = Vec::new();
    let read_failed = matches!(result, Ok(outcome) if outcome.read_error.is_some());
    if stop_requested && !read_failed {
        lines.push("\nSerial reading interrupted!".to_string());
    }
    if let Ok(outcome) = result {
        lines.push(format!(
            "Data successfully saved in {}",
            outcome.summary.output_path.display()
        ));
    }
    lines
}
