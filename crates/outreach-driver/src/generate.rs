// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generation phase: fill each eligible record with a parsed draft.
//!
//! One record fully completes (invoke, update, persist, delay) before the
//! next begins. The whole table is saved after every update, so an abrupt
//! termination loses at most the record in flight. The model-unload hook
//! runs on every exit path, including fatal errors and interruption.

use std::collections::HashSet;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use outreach_core::{Generator, OutreachError};
use outreach_ollama::parse_draft;
use outreach_store::Table;

use crate::eligibility::eligible_for_generation;
use crate::{BatchOutcome, interruptible_sleep, select_next};

/// Run the generation phase to completion, interruption, or fatal error.
///
/// Per-record failures leave the record untouched (its empty fields make
/// it eligible again on the next run) and the loop continues; only a
/// missing generator binary aborts the batch.
pub async fn run_generation<G: Generator>(
    table: &mut Table,
    generator: &G,
    delay: Duration,
    cancel: &CancellationToken,
) -> Result<BatchOutcome, OutreachError> {
    let result = generation_pass(table, generator, delay, cancel).await;
    info!("releasing model resources");
    generator.unload().await;
    result
}

async fn generation_pass<G: Generator>(
    table: &mut Table,
    generator: &G,
    delay: Duration,
    cancel: &CancellationToken,
) -> Result<BatchOutcome, OutreachError> {
    let total = table.len();
    // Records attempted this pass. A failed record stays untouched in the
    // table but must not be re-selected until the next run.
    let mut attempted: HashSet<usize> = HashSet::new();
    let mut generated = 0usize;
    let mut failed = 0usize;

    info!(total, "starting draft generation");

    loop {
        if cancel.is_cancelled() {
            info!(generated, failed, "generation interrupted");
            return Ok(BatchOutcome::Interrupted);
        }

        let Some(idx) = select_next(table, &attempted, |r| eligible_for_generation(&r)) else {
            info!(generated, failed, "no more records to generate");
            return Ok(BatchOutcome::NoMoreWork);
        };
        attempted.insert(idx);

        let org = table.record(idx).org_context();
        info!(
            record = idx + 1,
            total,
            org = %org.name,
            "generating draft"
        );

        match generator.generate(&org).await {
            Ok(raw) => {
                let draft = parse_draft(&raw);
                table.set_draft(idx, &raw, &draft.subject, &draft.body);
                table.save()?;
                generated += 1;
                info!(org = %org.name, subject = %draft.subject, "draft stored");
            }
            Err(err) if err.is_fatal() => {
                warn!(org = %org.name, error = %err, "aborting batch");
                return Err(err.into());
            }
            Err(err) => {
                // Record stays untouched; it will be retried next run.
                warn!(org = %org.name, error = %err, "generation failed, record left for retry");
                failed += 1;
            }
        }

        if !interruptible_sleep(delay, cancel).await {
            info!(generated, failed, "generation interrupted during delay");
            return Ok(BatchOutcome::Interrupted);
        }
    }
}
