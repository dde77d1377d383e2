// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./outreach.toml` > `~/.config/outreach/outreach.toml`
//! > `/etc/outreach/outreach.toml` with environment variable overrides via
//! the `OUTREACH_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::OutreachConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/outreach/outreach.toml` (system-wide)
/// 3. `~/.config/outreach/outreach.toml` (user XDG config)
/// 4. `./outreach.toml` (local directory)
/// 5. `OUTREACH_*` environment variables
pub fn load_config() -> Result<OutreachConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OutreachConfig::default()))
        .merge(Toml::file("/etc/outreach/outreach.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("outreach/outreach.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("outreach.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<OutreachConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OutreachConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<OutreachConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OutreachConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `OUTREACH_CAMPAIGN_SENDER_NAME` must
/// map to `campaign.sender_name`, not `campaign.sender.name`.
fn env_provider() -> Env {
    Env::prefixed("OUTREACH_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: OUTREACH_SMTP_SEND_DELAY_SECS -> "smtp_send_delay_secs"
        let mapped = key
            .as_str()
            .replacen("campaign_", "campaign.", 1)
            .replacen("ollama_", "ollama.", 1)
            .replacen("smtp_", "smtp.", 1);
        mapped.into()
    })
}
