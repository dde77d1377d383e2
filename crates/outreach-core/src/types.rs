// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the outreach pipeline crates.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Format used for timestamps written into the dataset. Matches the
/// ISO-8601 form the historical tool wrote, so existing rows keep parsing.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Prefix tagging a failed delivery in the `sent_at` field.
const FAILED_PREFIX: &str = "FAILED_";

/// Delivery state of one record.
///
/// The dataset stores this in a single human-readable text field: empty
/// for unsent, a bare ISO-8601 timestamp for sent, or `FAILED_<timestamp>`
/// for a failed attempt. This enum is the in-memory representation; the
/// string form exists only at the storage boundary via [`SendState::from_field`]
/// and [`SendState::to_field`]. Timestamps are carried as their original
/// text so a load/save cycle never rewrites a row it did not touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendState {
    /// No delivery has been attempted.
    Unsent,
    /// Delivered successfully at the carried timestamp.
    Sent(String),
    /// Last delivery attempt failed at the carried timestamp.
    Failed(String),
}

impl SendState {
    /// Parse the single-string storage form.
    pub fn from_field(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            SendState::Unsent
        } else if let Some(ts) = trimmed.strip_prefix(FAILED_PREFIX) {
            SendState::Failed(ts.to_string())
        } else {
            SendState::Sent(trimmed.to_string())
        }
    }

    /// Serialize back to the single-string storage form.
    pub fn to_field(&self) -> String {
        match self {
            SendState::Unsent => String::new(),
            SendState::Sent(ts) => ts.clone(),
            SendState::Failed(ts) => format!("{FAILED_PREFIX}{ts}"),
        }
    }

    /// A `Sent` state stamped with the current local time.
    pub fn sent_now() -> Self {
        SendState::Sent(Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    /// A `Failed` state stamped with the current local time.
    pub fn failed_now() -> Self {
        SendState::Failed(Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn is_unsent(&self) -> bool {
        matches!(self, SendState::Unsent)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SendState::Failed(_))
    }
}

/// The per-record inputs a draft is generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgContext {
    /// Organisation name, as ingested.
    pub name: String,
    /// Free-text description; `None` or empty triggers the placeholder
    /// substitution in the prompt.
    pub description: Option<String>,
}

/// A parsed draft: the structured result of one generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub subject: String,
    pub body: String,
}

/// A fully prepared email, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Result of one delivery attempt.
///
/// Transport failures are values, not errors: the batch driver records
/// them into the dataset and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    Failed(String),
}

impl SendOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent)
    }
}
