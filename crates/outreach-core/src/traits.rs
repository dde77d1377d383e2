// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service trait seams the batch driver is generic over.
//!
//! The concrete clients (`outreach-ollama`, `outreach-smtp`) implement
//! these; tests substitute recording mocks.

use async_trait::async_trait;

use crate::error::GenerateError;
use crate::types::{OrgContext, OutgoingMail, SendOutcome};

/// A draft generator: prompt context in, raw model text out.
///
/// `generate` is the suspension point of the generation loop; nothing else
/// proceeds until it returns. Implementations must never return empty text
/// as success.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Produce raw draft text for one organisation, or fail.
    async fn generate(&self, org: &OrgContext) -> Result<String, GenerateError>;

    /// Ask the backing service to release held resources. Best-effort:
    /// failures are logged by the implementation, never surfaced.
    async fn unload(&self);
}

/// An email transport: message in, outcome out.
///
/// All transport errors are folded into [`SendOutcome::Failed`] so the
/// driver can mark the record and continue.
#[async_trait]
pub trait Sender: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> SendOutcome;
}
