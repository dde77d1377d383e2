// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Durable row store for the outreach dataset.
//!
//! Wraps a header-indexed CSV file in a [`Table`] that is loaded once,
//! mutated in memory, and rewritten wholesale after every record update.
//! See the module docs on [`table`] for the durability and locking
//! trade-offs.

pub mod record;
pub mod table;

pub use record::Record;
pub use table::{REQUIRED_COLUMNS, Table};
