// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Header-indexed CSV table with whole-file persistence.
//!
//! The dataset is small (hundreds of rows), so the durability unit is the
//! entire table: load once, mutate in memory, rewrite the whole file after
//! every record update. That bounds crash loss to the record in flight.
//! Saves go through a temp file + rename so a crash mid-write never leaves
//! a truncated table behind.
//!
//! Known limitation: there is no file locking. Two driver instances
//! pointed at the same dataset will interleave whole-file writes and
//! silently drop each other's updates.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use outreach_core::OutreachError;

use crate::record::Record;

/// Columns the pipeline writes. Created with empty defaults on load when a
/// freshly ingested dataset does not carry them yet. Every CSV cell is
/// already text, so no further type coercion is needed.
pub const REQUIRED_COLUMNS: &[&str] = &["email_subject", "email_body", "email_raw", "sent_at"];

/// Identity columns, set at ingestion time and never mutated here.
pub const COL_ORGANISATION: &str = "Organisation Name";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_RECIPIENT: &str = "Emails";

pub const COL_SUBJECT: &str = "email_subject";
pub const COL_BODY: &str = "email_body";
pub const COL_RAW: &str = "email_raw";
pub const COL_SENT_AT: &str = "sent_at";

/// The in-memory dataset: headers plus rows of text cells.
///
/// Unknown columns round-trip untouched; the store never interprets
/// anything outside the identity and status columns.
#[derive(Debug, Clone)]
pub struct Table {
    path: PathBuf,
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Load the dataset from `path`, appending any missing required
    /// columns with empty defaults.
    ///
    /// A missing or unparsable file is fatal: there is nothing to resume
    /// against, so the caller must abort rather than retry.
    pub fn load(path: &Path) -> Result<Self, OutreachError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| OutreachError::Dataset { source: Box::new(e) })?;

        let mut headers: Vec<String> = reader
            .headers()
            .map_err(|e| OutreachError::Dataset { source: Box::new(e) })?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| OutreachError::Dataset { source: Box::new(e) })?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            // Short rows are padded so every cell lookup stays in bounds.
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        for col in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == col) {
                debug!(column = col, "adding missing status column");
                headers.push((*col).to_string());
                for row in &mut rows {
                    row.push(String::new());
                }
            }
        }

        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            headers,
            index,
            rows,
        })
    }

    /// Rewrite the whole table to its backing file.
    ///
    /// Writes to a sibling temp file first, then renames over the original,
    /// so the on-disk table is always either the old or the new state.
    pub fn save(&self) -> Result<(), OutreachError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp = parent.join(format!(
            ".{}.tmp",
            self.path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "dataset".to_string())
        ));

        {
            let mut writer = csv::Writer::from_path(&tmp)
                .map_err(|e| OutreachError::Dataset { source: Box::new(e) })?;
            writer
                .write_record(&self.headers)
                .map_err(|e| OutreachError::Dataset { source: Box::new(e) })?;
            for row in &self.rows {
                writer
                    .write_record(row)
                    .map_err(|e| OutreachError::Dataset { source: Box::new(e) })?;
            }
            writer
                .flush()
                .map_err(|e| OutreachError::Dataset { source: Box::new(e) })?;
        }

        std::fs::rename(&tmp, &self.path)
            .map_err(|e| OutreachError::Dataset { source: Box::new(e) })?;
        debug!(path = %self.path.display(), rows = self.rows.len(), "table saved");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Typed read-only view over one row.
    pub fn record(&self, idx: usize) -> Record<'_> {
        Record::new(self, idx)
    }

    /// Cell lookup by column name; absent columns and out-of-range rows
    /// read as empty, mirroring how the status columns start life.
    pub(crate) fn cell(&self, idx: usize, column: &str) -> &str {
        match (self.index.get(column), self.rows.get(idx)) {
            (Some(&col), Some(row)) => row.get(col).map(String::as_str).unwrap_or(""),
            _ => "",
        }
    }

    fn set_cell(&mut self, idx: usize, column: &str, value: String) {
        if let Some(&col) = self.index.get(column)
            && let Some(row) = self.rows.get_mut(idx)
            && let Some(cell) = row.get_mut(col)
        {
            *cell = value;
        }
    }

    /// Record a completed generation: raw model output plus parsed fields.
    pub fn set_draft(&mut self, idx: usize, raw: &str, subject: &str, body: &str) {
        self.set_cell(idx, COL_RAW, raw.to_string());
        self.set_cell(idx, COL_SUBJECT, subject.to_string());
        self.set_cell(idx, COL_BODY, body.to_string());
    }

    /// Record a delivery outcome in the single-string `sent_at` form.
    pub fn set_send_state(&mut self, idx: usize, state: &outreach_core::SendState) {
        self.set_cell(idx, COL_SENT_AT, state.to_field());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use outreach_core::SendState;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).expect("create csv");
        f.write_all(content.as_bytes()).expect("write csv");
        path
    }

    const INGESTED: &str = "\
Organisation Name,Description,Emails
Acme Corp,Widgets at scale,jobs@acme.test
Globex,,hello@globex.test
";

    #[test]
    fn missing_file_is_dataset_error() {
        let err = Table::load(Path::new("/nonexistent/targets.csv")).unwrap_err();
        assert!(matches!(err, OutreachError::Dataset { .. }));
    }

    #[test]
    fn load_appends_missing_status_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "t.csv", INGESTED);
        let table = Table::load(&path).unwrap();

        for col in REQUIRED_COLUMNS {
            assert!(
                table.headers().iter().any(|h| h == col),
                "missing column {col}"
            );
        }
        assert_eq!(table.len(), 2);
        assert_eq!(table.record(0).subject(), "");
        assert_eq!(table.record(0).send_state(), SendState::Unsent);
    }

    #[test]
    fn unknown_columns_survive_a_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "t.csv",
            "Organisation Name,Emails,Founded,Notes\nAcme Corp,jobs@acme.test,1999,keep me\n",
        );

        let table = Table::load(&path).unwrap();
        table.save().unwrap();

        let reloaded = Table::load(&path).unwrap();
        assert_eq!(reloaded.cell(0, "Founded"), "1999");
        assert_eq!(reloaded.cell(0, "Notes"), "keep me");
    }

    #[test]
    fn draft_and_send_state_persist() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "t.csv", INGESTED);

        let mut table = Table::load(&path).unwrap();
        table.set_draft(0, "<email>raw</email>", "Hi Acme", "Dear team");
        table.set_send_state(1, &SendState::Failed("2024-01-01T00:00:00".into()));
        table.save().unwrap();

        let reloaded = Table::load(&path).unwrap();
        assert_eq!(reloaded.record(0).subject(), "Hi Acme");
        assert_eq!(reloaded.record(0).body(), "Dear team");
        assert_eq!(reloaded.record(0).raw(), "<email>raw</email>");
        assert_eq!(
            reloaded.record(1).send_state(),
            SendState::Failed("2024-01-01T00:00:00".into())
        );
    }

    #[test]
    fn multiline_body_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "t.csv", INGESTED);

        let mut table = Table::load(&path).unwrap();
        let body = "Dear Hiring Team,\n\nI noticed your work.\n\nBest regards,\nAlex";
        table.set_draft(0, "raw", "Subject", body);
        table.save().unwrap();

        let reloaded = Table::load(&path).unwrap();
        assert_eq!(reloaded.record(0).body(), body);
    }

    #[test]
    fn identity_fields_are_exposed() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "t.csv", INGESTED);
        let table = Table::load(&path).unwrap();

        let rec = table.record(0);
        assert_eq!(rec.organisation(), "Acme Corp");
        assert_eq!(rec.description(), "Widgets at scale");
        assert_eq!(rec.recipient(), "jobs@acme.test");

        // Empty description reads as empty, not as an error.
        assert_eq!(table.record(1).description(), "");
    }
}
