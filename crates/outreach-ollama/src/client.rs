// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Draft generator backed by a local `ollama run` invocation.
//!
//! The process is spawned synchronously per record and its full stdout is
//! captured; this call is the suspension point of the generation loop.
//! Empty output and non-zero exits are retried within a two-attempt
//! budget; a missing binary aborts the batch.

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use outreach_config::model::{CampaignConfig, OllamaConfig};
use outreach_core::{GenerateError, Generator, OrgContext};

use crate::prompt::render_prompt;
use crate::unload;

/// Executable looked up on PATH.
const OLLAMA_BIN: &str = "ollama";

/// Total attempts per record when output is empty or the process exits
/// non-zero.
const MAX_ATTEMPTS: u32 = 2;

/// Generator client spawning `ollama run <model> <prompt>`.
pub struct OllamaGenerator {
    campaign: CampaignConfig,
    model: String,
    api_base: String,
    /// Overridable for tests; always [`OLLAMA_BIN`] in production.
    binary: String,
}

impl OllamaGenerator {
    pub fn new(ollama: &OllamaConfig, campaign: &CampaignConfig) -> Self {
        Self {
            campaign: campaign.clone(),
            model: ollama.model.clone(),
            api_base: ollama.api_base.clone(),
            binary: OLLAMA_BIN.to_string(),
        }
    }

    #[cfg(test)]
    fn with_binary(mut self, binary: &str) -> Self {
        self.binary = binary.to_string();
        self
    }

    /// One spawn-and-capture attempt. Classifies the three failure shapes:
    /// missing binary (fatal), spawn error, non-zero exit.
    async fn invoke(&self, prompt: &str) -> Result<String, GenerateError> {
        let output = Command::new(&self.binary)
            .arg("run")
            .arg(&self.model)
            .arg(prompt)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    GenerateError::BinaryMissing(self.binary.clone())
                } else {
                    GenerateError::Spawn(e)
                }
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(GenerateError::Process {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[async_trait]
impl Generator for OllamaGenerator {
    /// Produce raw draft text for one organisation.
    ///
    /// Never returns empty text as success: whitespace-only output counts
    /// as a failed attempt and is retried within the budget.
    async fn generate(&self, org: &OrgContext) -> Result<String, GenerateError> {
        let prompt = render_prompt(&self.campaign, org);
        let mut last_error = GenerateError::Empty {
            attempts: MAX_ATTEMPTS,
        };

        for attempt in 1..=MAX_ATTEMPTS {
            debug!(org = %org.name, attempt, "invoking model");
            match self.invoke(&prompt).await {
                Ok(text) if !text.trim().is_empty() => return Ok(text),
                Ok(_) => {
                    warn!(org = %org.name, attempt, "model output was empty, retrying");
                    last_error = GenerateError::Empty { attempts: attempt };
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!(org = %org.name, attempt, error = %err, "model invocation failed");
                    last_error = err;
                }
            }
        }

        Err(last_error)
    }

    /// Ask the Ollama daemon to release the model from memory.
    async fn unload(&self) {
        unload::unload_model(&self.api_base, &self.model).await;
    }
}
