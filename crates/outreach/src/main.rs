// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outreach - cold-outreach campaign automation.
//!
//! Two independent batch jobs over one CSV dataset: `generate` drafts a
//! personalized email per organisation through a local Ollama model, and
//! `send` delivers the drafts through an SMTP relay, tracking delivery
//! state so either job resumes where it left off.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use outreach_config::OutreachConfig;
use outreach_core::OutreachError;
use outreach_driver::{
    BatchOutcome, install_signal_handler, run_generation, run_send, run_test_burst,
};
use outreach_ollama::OllamaGenerator;
use outreach_smtp::SmtpSender;
use outreach_store::Table;

/// Outreach - cold-outreach campaign automation.
#[derive(Parser, Debug)]
#[command(name = "outreach", version, about, long_about = None)]
struct Cli {
    /// Explicit config file path (skips the XDG hierarchy).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a draft for every record that does not have one yet.
    Generate,
    /// Send drafted emails through the SMTP relay.
    Send {
        /// Deliver a bounded test burst to your own address instead of
        /// the targets. Sends real email; never marks records.
        #[arg(long)]
        dry_run: bool,

        /// Restrict eligibility to records previously marked FAILED.
        #[arg(long)]
        retry_fails: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            outreach_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.campaign.log_level);

    if let Err(err) = run(cli.command, &config).await {
        error!(error = %err, "batch aborted");
        std::process::exit(1);
    }
}

fn load_config(
    path: Option<&Path>,
) -> Result<OutreachConfig, Vec<outreach_config::ConfigError>> {
    match path {
        Some(path) => outreach_config::load_and_validate_path(path),
        None => outreach_config::load_and_validate(),
    }
}

fn init_tracing(log_level: &str) {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(command: Commands, config: &OutreachConfig) -> Result<(), OutreachError> {
    let cancel = install_signal_handler();
    let dataset = Path::new(&config.campaign.dataset_path);

    let outcome = match command {
        Commands::Generate => {
            let mut table = Table::load(dataset)?;
            info!(
                dataset = %dataset.display(),
                records = table.len(),
                model = %config.ollama.model,
                "loaded dataset for generation"
            );
            let generator = OllamaGenerator::new(&config.ollama, &config.campaign);
            run_generation(
                &mut table,
                &generator,
                Duration::from_secs(config.ollama.generate_delay_secs),
                &cancel,
            )
            .await?
        }
        Commands::Send {
            dry_run: true,
            retry_fails,
        } => {
            let table = Table::load(dataset)?;
            let operator = config.smtp.username.clone().ok_or_else(|| {
                OutreachError::Config(
                    "smtp.username is required for a test burst (it is the recipient)".to_string(),
                )
            })?;
            // The burst delivers real mail to the operator, so it needs a
            // live transport despite the flag's name.
            let sender = SmtpSender::connect(&config.smtp)?;
            run_test_burst(
                &table,
                &sender,
                &operator,
                retry_fails,
                config.smtp.test_burst_limit,
                Duration::from_secs(config.smtp.test_burst_delay_secs),
                &cancel,
            )
            .await?
        }
        Commands::Send {
            dry_run: false,
            retry_fails,
        } => {
            let mut table = Table::load(dataset)?;
            info!(
                dataset = %dataset.display(),
                records = table.len(),
                relay = %config.smtp.host,
                "loaded dataset for sending"
            );
            let sender = SmtpSender::connect(&config.smtp)?;
            run_send(
                &mut table,
                &sender,
                retry_fails,
                Duration::from_secs(config.smtp.send_delay_secs),
                &cancel,
            )
            .await?
        }
    };

    match outcome {
        BatchOutcome::NoMoreWork => info!("done"),
        BatchOutcome::Interrupted => info!("stopped by operator, progress preserved"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_send_flags() {
        let cli = Cli::try_parse_from(["outreach", "send", "--dry-run", "--retry-fails"])
            .expect("flags should parse");
        match cli.command {
            Commands::Send {
                dry_run,
                retry_fails,
            } => {
                assert!(dry_run);
                assert!(retry_fails);
            }
            other => panic!("expected send, got {other:?}"),
        }
    }

    #[test]
    fn cli_parses_generate_with_config_path() {
        let cli = Cli::try_parse_from(["outreach", "generate", "--config", "/tmp/outreach.toml"])
            .expect("should parse");
        assert!(matches!(cli.command, Commands::Generate));
        assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/outreach.toml")));
    }

    #[test]
    fn default_config_is_usable() {
        let config = load_config(None);
        // Defaults must validate whether or not a local outreach.toml exists.
        if let Ok(config) = config {
            assert!(!config.campaign.dataset_path.is_empty());
        }
    }
}
