// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive test burst: deliver a bounded preview to the operator.
//!
//! Despite the `--dry-run` flag that triggers it, this mode sends real
//! email, rerouted to the operator's own address with a `[TEST]` subject
//! prefix. It never mutates `send_state` and never persists, which the
//! `&Table` borrow enforces at the type level.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use outreach_core::{OutreachError, SendOutcome, Sender};
use outreach_store::Table;

use crate::content::prepare_mail;
use crate::eligibility::eligible_for_send;
use crate::BatchOutcome;

/// Deliver up to `limit` eligible drafts to `operator`, pausing `pause`
/// between sends. Eligibility follows the same predicate as the live send
/// phase, including the retry-fails restriction.
pub async fn run_test_burst<S: Sender>(
    table: &Table,
    sender: &S,
    operator: &str,
    retry_fails: bool,
    limit: usize,
    pause: Duration,
    cancel: &CancellationToken,
) -> Result<BatchOutcome, OutreachError> {
    let candidates: Vec<usize> = (0..table.len())
        .filter(|&idx| eligible_for_send(&table.record(idx), retry_fails))
        .take(limit)
        .collect();

    if candidates.is_empty() {
        info!("no records eligible for a test burst in this mode");
        return Ok(BatchOutcome::NoMoreWork);
    }

    info!(
        count = candidates.len(),
        operator, "starting test burst to operator inbox"
    );

    for idx in candidates {
        if cancel.is_cancelled() {
            return Ok(BatchOutcome::Interrupted);
        }

        let record = table.record(idx);
        info!(org = %record.organisation(), "testing draft");

        // Recipient override: the operator gets the mail, not the target.
        let mail = prepare_mail(&record, operator, true);
        match sender.send(&mail).await {
            SendOutcome::Sent => info!(subject = %mail.subject, "test email delivered"),
            SendOutcome::Failed(reason) => {
                warn!(org = %record.organisation(), reason = %reason, "test email failed");
            }
        }

        tokio::select! {
            _ = cancel.cancelled() => return Ok(BatchOutcome::Interrupted),
            _ = tokio::time::sleep(pause) => {}
        }
    }

    info!("test burst complete, check your inbox");
    Ok(BatchOutcome::NoMoreWork)
}
