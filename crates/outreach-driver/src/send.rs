// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Send phase: deliver each eligible draft and record the outcome.
//!
//! Success writes a timestamp into `sent_at`; failure writes a
//! `FAILED_<timestamp>` marker so the batch moves past the record. A
//! missing recipient is bad input data, not a transient failure: the
//! record is skipped silently with nothing written, left for manual
//! correction.

use std::collections::HashSet;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use outreach_core::{OutreachError, SendOutcome, SendState, Sender};
use outreach_store::Table;

use crate::content::prepare_mail;
use crate::eligibility::eligible_for_send;
use crate::{BatchOutcome, interruptible_sleep, select_next};

/// Run the send phase to completion or interruption.
///
/// In retry-fails mode only previously-failed records are eligible; a
/// repeat failure refreshes the failure timestamp and the record is not
/// re-attempted until the next run.
pub async fn run_send<S: Sender>(
    table: &mut Table,
    sender: &S,
    retry_fails: bool,
    delay: Duration,
    cancel: &CancellationToken,
) -> Result<BatchOutcome, OutreachError> {
    if retry_fails {
        info!("send mode: retrying previously failed records");
    } else {
        info!("send mode: sending new records");
    }

    // Attempted or skipped this pass; never re-selected until next run.
    let mut visited: HashSet<usize> = HashSet::new();
    let mut sent = 0usize;
    let mut failed = 0usize;
    let mut skipped = 0usize;

    loop {
        if cancel.is_cancelled() {
            info!(sent, failed, skipped, "sending interrupted");
            return Ok(BatchOutcome::Interrupted);
        }

        let Some(idx) = select_next(table, &visited, |r| eligible_for_send(&r, retry_fails))
        else {
            info!(sent, failed, skipped, "no more records to send");
            return Ok(BatchOutcome::NoMoreWork);
        };
        visited.insert(idx);

        let record = table.record(idx);
        let org = record.organisation().to_string();
        let recipient = record.recipient().trim().to_string();

        if recipient.is_empty() {
            // Left unmarked on purpose: this needs a data fix, not a retry.
            warn!(org = %org, "skipping record with missing recipient");
            skipped += 1;
            continue;
        }

        info!(org = %org, to = %recipient, "sending email");
        let mail = prepare_mail(&record, &recipient, false);

        match sender.send(&mail).await {
            SendOutcome::Sent => {
                table.set_send_state(idx, &SendState::sent_now());
                sent += 1;
                info!(org = %org, "sent");
            }
            SendOutcome::Failed(reason) => {
                table.set_send_state(idx, &SendState::failed_now());
                failed += 1;
                warn!(org = %org, reason = %reason, "send failed, marked in dataset");
            }
        }
        table.save()?;

        if !interruptible_sleep(delay, cancel).await {
            info!(sent, failed, skipped, "sending interrupted during delay");
            return Ok(BatchOutcome::Interrupted);
        }
    }
}
