// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resumable batch driver for the outreach pipeline.
//!
//! Both phases share one control shape: select the first eligible record,
//! invoke the external service, update the record, persist the whole
//! table, sleep, repeat. Processing is strictly sequential; the only
//! suspension points are the service call and the fixed delay, and
//! cancellation is observed at both.

use std::collections::HashSet;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use outreach_store::{Record, Table};

pub mod burst;
pub mod content;
pub mod eligibility;
pub mod generate;
pub mod send;
pub mod shutdown;

pub use burst::run_test_burst;
pub use generate::run_generation;
pub use send::run_send;
pub use shutdown::install_signal_handler;

/// How a batch pass ended. Both are normal, non-error terminations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// No record satisfied the eligibility predicate.
    NoMoreWork,
    /// The operator cancelled; persisted progress is retained.
    Interrupted,
}

/// Scan the table top-to-bottom for the first eligible record not yet
/// visited this pass.
pub(crate) fn select_next(
    table: &Table,
    visited: &HashSet<usize>,
    eligible: impl Fn(Record<'_>) -> bool,
) -> Option<usize> {
    (0..table.len()).find(|idx| !visited.contains(idx) && eligible(table.record(*idx)))
}

/// Sleep for `delay`, returning `false` if cancelled before it elapses.
pub(crate) async fn interruptible_sleep(delay: Duration, cancel: &CancellationToken) -> bool {
    tokio::select! {
        _ = cancel.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}
