// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record eligibility predicates for the two pipeline phases.

use outreach_store::Record;

/// A record is eligible for (re-)generation only while both parsed fields
/// are empty. Raw output alone does not count: a crash between writing
/// `email_raw` and the parsed fields cannot happen (they are set
/// together), and a row hand-edited back to empty should regenerate.
pub fn eligible_for_generation(record: &Record<'_>) -> bool {
    record.subject().trim().is_empty() && record.body().trim().is_empty()
}

/// A record is eligible for sending when it has a subject and its delivery
/// state matches the mode: unsent normally, previously-failed in
/// retry-fails mode.
pub fn eligible_for_send(record: &Record<'_>, retry_fails: bool) -> bool {
    if record.subject().trim().is_empty() {
        return false;
    }
    let state = record.send_state();
    if retry_fails {
        state.is_failed()
    } else {
        state.is_unsent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    use outreach_store::Table;
    use tempfile::TempDir;

    fn table(dir: &TempDir, content: &str) -> Table {
        let path: PathBuf = dir.path().join("t.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        Table::load(&path).unwrap()
    }

    #[test]
    fn generation_requires_both_fields_empty() {
        let dir = TempDir::new().unwrap();
        let table = table(
            &dir,
            "Organisation Name,email_subject,email_body\n\
             Fresh,,\n\
             Subject only,Hi,\n\
             Body only,,Yo\n\
             Done,Hi,Yo\n",
        );

        assert!(eligible_for_generation(&table.record(0)));
        assert!(!eligible_for_generation(&table.record(1)));
        assert!(!eligible_for_generation(&table.record(2)));
        assert!(!eligible_for_generation(&table.record(3)));
    }

    #[test]
    fn send_modes_partition_by_state() {
        let dir = TempDir::new().unwrap();
        let table = table(
            &dir,
            "Organisation Name,email_subject,sent_at\n\
             Unsent,Hi,\n\
             Failed,Hi,FAILED_2024-01-01T00:00:00\n\
             Sent,Hi,2024-01-01T00:00:00\n\
             NoDraft,,\n",
        );

        // Normal mode: only the unsent drafted record.
        assert!(eligible_for_send(&table.record(0), false));
        assert!(!eligible_for_send(&table.record(1), false));
        assert!(!eligible_for_send(&table.record(2), false));
        assert!(!eligible_for_send(&table.record(3), false));

        // Retry-fails mode: only the failed record.
        assert!(!eligible_for_send(&table.record(0), true));
        assert!(eligible_for_send(&table.record(1), true));
        assert!(!eligible_for_send(&table.record(2), true));
        assert!(!eligible_for_send(&table.record(3), true));
    }
}
