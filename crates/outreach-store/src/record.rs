// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed read-only view over one table row.

use outreach_core::{OrgContext, SendState};

use crate::table::{
    COL_BODY, COL_DESCRIPTION, COL_ORGANISATION, COL_RAW, COL_RECIPIENT, COL_SENT_AT, COL_SUBJECT,
    Table,
};

/// One row of the dataset, read through its well-known columns.
///
/// Mutation goes through the [`Table`] setters so every write stays
/// visible to the persistence layer.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
    idx: usize,
}

impl<'a> Record<'a> {
    pub(crate) fn new(table: &'a Table, idx: usize) -> Self {
        Self { table, idx }
    }

    pub fn index(&self) -> usize {
        self.idx
    }

    pub fn organisation(&self) -> &'a str {
        self.table.cell(self.idx, COL_ORGANISATION)
    }

    pub fn description(&self) -> &'a str {
        self.table.cell(self.idx, COL_DESCRIPTION)
    }

    pub fn recipient(&self) -> &'a str {
        self.table.cell(self.idx, COL_RECIPIENT)
    }

    pub fn subject(&self) -> &'a str {
        self.table.cell(self.idx, COL_SUBJECT)
    }

    pub fn body(&self) -> &'a str {
        self.table.cell(self.idx, COL_BODY)
    }

    pub fn raw(&self) -> &'a str {
        self.table.cell(self.idx, COL_RAW)
    }

    pub fn send_state(&self) -> SendState {
        SendState::from_field(self.table.cell(self.idx, COL_SENT_AT))
    }

    /// The generation inputs for this record. An empty description becomes
    /// `None`; the prompt layer substitutes its placeholder.
    pub fn org_context(&self) -> OrgContext {
        let description = self.description().trim();
        OrgContext {
            name: self.organisation().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        }
    }
}
