// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SMTP delivery for the outreach pipeline.
//!
//! Implements the [`Sender`](outreach_core::Sender) seam over lettre's
//! async SMTP transport, with an explicit dry-run construction that never
//! opens a connection.

pub mod sender;

pub use sender::SmtpSender;
