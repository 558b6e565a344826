//! consent-probe: exercise the platform consent service from a terminal.
//!
//! Prints one JSON document per invocation on stdout; logs go to stderr.

use std::future::Future;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn, Instrument};

use consent_adapter::{
    native_verifier, AuthenticationRequest, AvailabilityStatus, CancellationSource,
    ConsentAdapter, ConsentApi, ConsentConfig, Metrics, SecureValueRequest,
    SetSecureValueRequest,
};
use consent_telemetry::{consent_span, init_logging, service_span, TelemetryConfig};

/// Probe the operating system's user-consent service
#[derive(Parser, Debug)]
#[command(name = "consent-probe")]
#[command(about = "Check availability of, and prompt through, the platform consent service")]
struct Args {
    /// Log level filter (overrides CONSENT_LOG_LEVEL / RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report whether consent verification can be used
    Availability,

    /// Show the consent prompt
    Authenticate {
        /// Message shown in the prompt
        #[arg(short, long)]
        reason: String,

        /// Give up after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Check availability first and skip the prompt if unavailable
        #[arg(long)]
        precheck: bool,
    },

    /// Read a secure value
    SecureGet(SecureValueArgs),

    /// Store a secure value
    SecureSet {
        #[command(flatten)]
        target: SecureValueArgs,

        /// Value to store
        #[arg(long)]
        value: String,
    },

    /// Delete a secure value
    SecureRemove(SecureValueArgs),
}

#[derive(clap::Args, Debug)]
struct SecureValueArgs {
    #[arg(long)]
    service_id: String,

    #[arg(long)]
    key: String,
}

#[derive(Serialize)]
struct AvailabilityReport {
    status: AvailabilityStatus,
    available: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    block_on_detached(run(args))?
}

/// Drive `future` on a fresh runtime and shut it down without waiting for
/// blocking-pool threads. A cancelled or timed-out prompt leaves its native
/// join running until the dialog closes; the process must not wait for it.
fn block_on_detached<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;
    let output = runtime.block_on(future);
    runtime.shutdown_background();
    Ok(output)
}

async fn run(args: Args) -> Result<ExitCode> {
    let mut telemetry = TelemetryConfig::from_env().with_json_logs(args.json_logs);
    if let Some(level) = &args.log_level {
        telemetry = telemetry.with_log_level(level.clone());
    }
    init_logging(&telemetry).context("Failed to initialize logging")?;

    dispatch(args).instrument(service_span(&telemetry)).await
}

async fn dispatch(args: Args) -> Result<ExitCode> {
    let mut config = ConsentConfig::from_env().context("Invalid consent configuration")?;
    if let Command::Authenticate {
        timeout_ms,
        precheck,
        ..
    } = &args.command
    {
        if let Some(ms) = timeout_ms {
            config = config.with_verification_timeout(Some(Duration::from_millis(*ms)));
        }
        if *precheck {
            config = config.with_precheck_availability(true);
        }
    }

    let metrics = std::sync::Arc::new(Metrics::new());
    let adapter = ConsentAdapter::try_with_config(native_verifier(), config)
        .context("Invalid consent configuration")?
        .with_metrics(metrics.clone());

    let exit = match args.command {
        Command::Availability => {
            let status = adapter.check_availability().await;
            print_json(&AvailabilityReport {
                status,
                available: status == AvailabilityStatus::Available,
            })?;
            ExitCode::SUCCESS
        }
        Command::Authenticate { reason, .. } => {
            let span = consent_span!("authenticate", reason_len = reason.len());
            let source = CancellationSource::new();
            let token = source.token();

            let prompt = adapter
                .authenticate(AuthenticationRequest::new(reason), Some(token))
                .instrument(span);
            tokio::pin!(prompt);

            let result = tokio::select! {
                result = &mut prompt => result,
                _ = tokio::signal::ctrl_c() => {
                    warn!("Interrupted, cancelling consent prompt");
                    source.cancel();
                    prompt.await
                }
            };

            print_json(&result)?;
            if result.is_authenticated() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::SecureGet(target) => {
            print_json(&adapter.get_secure_value(target.into_request(), None).await)?;
            ExitCode::FAILURE
        }
        Command::SecureSet { target, value } => {
            let request = SetSecureValueRequest {
                service_id: target.service_id,
                key: target.key,
                value,
                reason: None,
            };
            print_json(&adapter.set_secure_value(request, None).await)?;
            ExitCode::FAILURE
        }
        Command::SecureRemove(target) => {
            print_json(&adapter.remove_secure_value(target.into_request(), None).await)?;
            ExitCode::FAILURE
        }
    };

    info!(metrics = ?metrics.snapshot(), "Probe finished");
    Ok(exit)
}

impl SecureValueArgs {
    fn into_request(self) -> SecureValueRequest {
        SecureValueRequest {
            service_id: self.service_id,
            key: self.key,
            reason: None,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_authenticate() {
        let args = Args::try_parse_from([
            "consent-probe",
            "authenticate",
            "--reason",
            "Unlock app",
            "--timeout-ms",
            "1500",
            "--precheck",
        ])
        .unwrap();

        match args.command {
            Command::Authenticate {
                reason,
                timeout_ms,
                precheck,
            } => {
                assert_eq!(reason, "Unlock app");
                assert_eq!(timeout_ms, Some(1500));
                assert!(precheck);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_secure_set_with_global_flags() {
        let args = Args::try_parse_from([
            "consent-probe",
            "secure-set",
            "--service-id",
            "app",
            "--key",
            "token",
            "--value",
            "s3cret",
            "--json-logs",
        ])
        .unwrap();

        assert!(args.json_logs);
        assert!(matches!(args.command, Command::SecureSet { .. }));
    }

    #[test]
    fn test_abandoned_blocking_join_does_not_delay_exit() {
        let started = std::time::Instant::now();

        let timed_out = block_on_detached(async {
            let join = tokio::task::spawn_blocking(|| std::thread::sleep(Duration::from_secs(3)));
            tokio::time::timeout(Duration::from_millis(100), join)
                .await
                .is_err()
        })
        .unwrap();

        assert!(timed_out);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_authenticate_requires_reason() {
        assert!(Args::try_parse_from(["consent-probe", "authenticate"]).is_err());
    }
}
