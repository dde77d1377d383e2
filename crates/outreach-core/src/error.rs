// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the outreach pipeline.

use thiserror::Error;

/// The primary error type for operations that abort a batch.
///
/// Per-record failures (an empty model response, a bounced email) are
/// represented as values and recorded into the dataset instead; only
/// conditions with no meaningful continuation cross this boundary.
#[derive(Debug, Error)]
pub enum OutreachError {
    /// The dataset file is missing or unparsable. Fatal: there is no
    /// partial state to protect and nothing to retry against.
    #[error("dataset unavailable: {source}")]
    Dataset {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A generator failure severe enough to abort the whole batch
    /// (currently only a missing model binary).
    #[error("generator error: {0}")]
    Generator(#[from] GenerateError),

    /// Configuration errors surfaced outside the diagnostic path.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Failures from a single draft-generation attempt sequence.
///
/// Only [`GenerateError::BinaryMissing`] is fatal to the batch; the other
/// variants leave the record untouched so it is retried on the next run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The model returned empty or whitespace-only output on every attempt.
    #[error("model produced empty output after {attempts} attempts")]
    Empty { attempts: u32 },

    /// The model process ran but exited non-zero on every attempt.
    #[error("model process exited with {status}: {stderr}")]
    Process { status: String, stderr: String },

    /// The generator executable was not found on PATH. Nothing has been
    /// written, so this propagates and aborts the batch.
    #[error("generator command `{0}` not found")]
    BinaryMissing(String),

    /// Spawning the process failed for a reason other than a missing binary.
    #[error("failed to spawn generator process: {0}")]
    Spawn(#[source] std::io::Error),
}

impl GenerateError {
    /// Whether this failure should abort the whole batch rather than be
    /// recorded and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GenerateError::BinaryMissing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_binary_is_fatal() {
        assert!(GenerateError::BinaryMissing("ollama".into()).is_fatal());
        assert!(!GenerateError::Empty { attempts: 2 }.is_fatal());
        assert!(
            !GenerateError::Process {
                status: "exit status: 1".into(),
                stderr: "boom".into(),
            }
            .is_fatal()
        );
        assert!(
            !GenerateError::Spawn(std::io::Error::other("no pty")).is_fatal()
        );
    }

    #[test]
    fn generate_error_converts_to_outreach_error() {
        let err: OutreachError = GenerateError::BinaryMissing("ollama".into()).into();
        assert!(matches!(err, OutreachError::Generator(_)));
    }
}
