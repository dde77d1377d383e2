// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort model unload against the local Ollama HTTP API.
//!
//! Posting `keep_alive: 0` to `/api/generate` asks the daemon to evict the
//! model immediately instead of holding it for its idle timeout. The hook
//! runs on every driver exit path and must never fail the batch: errors
//! are logged and dropped.

use serde_json::json;
use tracing::{info, warn};

/// Ask the daemon at `api_base` to release `model` from memory.
pub async fn unload_model(api_base: &str, model: &str) {
    let url = format!("{}/api/generate", api_base.trim_end_matches('/'));
    let payload = json!({ "model": model, "keep_alive": 0 });

    match reqwest::Client::new().post(&url).json(&payload).send().await {
        Ok(response) if response.status().is_success() => {
            info!(model, "model unloaded");
        }
        Ok(response) => {
            warn!(model, status = %response.status(), "model unload request rejected");
        }
        Err(err) => {
            warn!(model, error = %err, "failed to reach ollama for unload");
        }
    }
}
