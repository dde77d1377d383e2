// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the outreach pipeline.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level outreach configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values; SMTP credentials are validated lazily, only when a live send
/// actually needs them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutreachConfig {
    /// Campaign identity and dataset settings.
    #[serde(default)]
    pub campaign: CampaignConfig,

    /// Local model (Ollama) generation settings.
    #[serde(default)]
    pub ollama: OllamaConfig,

    /// SMTP relay settings.
    #[serde(default)]
    pub smtp: SmtpConfig,
}

/// Campaign identity: who the emails are from and what dataset drives them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CampaignConfig {
    /// Name the emails are signed with.
    #[serde(default = "default_sender_name")]
    pub sender_name: String,

    /// Role line used in the prompt, e.g. "Aspiring Product Manager".
    #[serde(default = "default_sender_role")]
    pub sender_role: String,

    /// One-sentence positioning used as the prompt's hook.
    #[serde(default = "default_value_proposition")]
    pub value_proposition: String,

    /// Path to the CSV dataset of target organisations.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            sender_name: default_sender_name(),
            sender_role: default_sender_role(),
            value_proposition: default_value_proposition(),
            dataset_path: default_dataset_path(),
            log_level: default_log_level(),
        }
    }
}

fn default_sender_name() -> String {
    "[Your Name]".to_string()
}

fn default_sender_role() -> String {
    "[Your Role]".to_string()
}

fn default_value_proposition() -> String {
    "[Your Unique Value Proposition]".to_string()
}

fn default_dataset_path() -> String {
    "sample.csv".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Local model generation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OllamaConfig {
    /// Model identifier passed to `ollama run`.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the local Ollama HTTP API (used for the unload hook).
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Seconds to sleep between generations. Generous by default: the
    /// local model is a single-capacity resource.
    #[serde(default = "default_generate_delay_secs")]
    pub generate_delay_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            generate_delay_secs: default_generate_delay_secs(),
        }
    }
}

fn default_model() -> String {
    "llama3.1:8b".to_string()
}

fn default_api_base() -> String {
    "http://localhost:11434".to_string()
}

fn default_generate_delay_secs() -> u64 {
    30
}

/// SMTP relay settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SmtpConfig {
    /// Relay hostname.
    #[serde(default = "default_smtp_host")]
    pub host: String,

    /// Relay port (STARTTLS submission).
    #[serde(default = "default_smtp_port")]
    pub port: u16,

    /// Account username; also the From address and the test-burst
    /// recipient. `None` restricts the tool to dry-run sends.
    #[serde(default)]
    pub username: Option<String>,

    /// Account password (app password for Gmail-style relays).
    #[serde(default)]
    pub password: Option<String>,

    /// Seconds to sleep between live sends.
    #[serde(default = "default_send_delay_secs")]
    pub send_delay_secs: u64,

    /// Seconds to pause between test-burst deliveries.
    #[serde(default = "default_test_burst_delay_secs")]
    pub test_burst_delay_secs: u64,

    /// Maximum number of messages a test burst delivers.
    #[serde(default = "default_test_burst_limit")]
    pub test_burst_limit: usize,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: None,
            password: None,
            send_delay_secs: default_send_delay_secs(),
            test_burst_delay_secs: default_test_burst_delay_secs(),
            test_burst_limit: default_test_burst_limit(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_send_delay_secs() -> u64 {
    1
}

fn default_test_burst_delay_secs() -> u64 {
    2
}

fn default_test_burst_limit() -> usize {
    10
}
