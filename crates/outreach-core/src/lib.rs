// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the outreach pipeline.
//!
//! This crate provides the error taxonomy, the record delivery-state model,
//! and the service trait seams (`Generator`, `Sender`) that the batch
//! driver is generic over. The concrete service clients live in their own
//! crates and depend on this one.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{GenerateError, OutreachError};
pub use traits::{Generator, Sender};
pub use types::{Draft, OrgContext, OutgoingMail, SendOutcome, SendState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_state_serializes_with_serde() {
        let state = SendState::Failed("2024-01-01T00:00:00".into());
        let json = serde_json::to_string(&state).expect("should serialize");
        let parsed: SendState = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(state, parsed);
    }

    #[test]
    fn trait_objects_are_constructible() {
        // The driver holds these behind generics; verify object safety
        // holds too in case a caller needs dynamic dispatch.
        fn _assert_generator(_: &dyn Generator) {}
        fn _assert_sender(_: &dyn Sender) {}
    }
}
