// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort extraction of structured fields from raw model output.
//!
//! The generator is asked for `<subject>`/`<body>` tags but is not
//! guaranteed to comply, so parsing never fails: missing structure
//! degrades to documented fallbacks instead of discarding the draft.

use std::sync::LazyLock;

use regex::Regex;

use outreach_core::Draft;

/// Subject used when no `<subject>` tag is present in the output.
pub const NO_SUBJECT_FALLBACK: &str = "(No Subject Detected)";

// (?is): case-insensitive, dot matches newlines. Lazy match keeps the
// first tag pair when the model repeats itself.
static SUBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<subject>(.*?)</subject>").expect("static regex"));
static BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body>(.*?)</body>").expect("static regex"));

/// Parse a raw model response into a draft.
///
/// Subject falls back to [`NO_SUBJECT_FALLBACK`]; body falls back to the
/// entire trimmed raw text so a malformed response loses nothing.
pub fn parse_draft(raw: &str) -> Draft {
    let subject = SUBJECT_RE
        .captures(raw)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| NO_SUBJECT_FALLBACK.to_string());

    let body = BODY_RE
        .captures(raw)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| raw.trim().to_string());

    Draft { subject, body }
}
