// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content preparation shared by the send loop and the test burst.

use outreach_core::OutgoingMail;
use outreach_store::Record;

/// Subject prefix applied to test-burst deliveries.
pub const TEST_PREFIX: &str = "[TEST] ";

/// Strip model indentation artifacts: trim the whole body, then strip
/// leading whitespace from every line. Blank lines between paragraphs
/// survive.
pub fn clean_body(body: &str) -> String {
    body.trim()
        .lines()
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the outgoing mail for a drafted record.
///
/// `test` reroutes nothing by itself; the caller chooses the recipient.
/// It only controls the `[TEST]` subject prefix.
pub fn prepare_mail(record: &Record<'_>, to: &str, test: bool) -> OutgoingMail {
    let subject = record.subject().trim();
    OutgoingMail {
        to: to.to_string(),
        subject: if test {
            format!("{TEST_PREFIX}{subject}")
        } else {
            subject.to_string()
        },
        body: clean_body(record.body()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_body_strips_leading_indentation_per_line() {
        let raw = "  Dear Hiring Team,\n\n    I noticed your work.\n\n  Best regards,\n  Alex  ";
        assert_eq!(
            clean_body(raw),
            "Dear Hiring Team,\n\nI noticed your work.\n\nBest regards,\nAlex"
        );
    }

    #[test]
    fn clean_body_of_empty_input_is_empty() {
        assert_eq!(clean_body("   \n  \n"), "");
    }
}
