// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SMTP delivery through lettre with STARTTLS and credential auth.
//!
//! Every transport failure is folded into [`SendOutcome::Failed`] so the
//! batch driver can mark the record and continue; nothing in the send path
//! panics or propagates. Dry-run mode never touches the transport.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use outreach_config::model::SmtpConfig;
use outreach_core::{OutgoingMail, OutreachError, SendOutcome, Sender};

/// Sender client over a fixed relay.
#[derive(Debug)]
pub struct SmtpSender {
    from: Mailbox,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpSender {
    /// Build a live sender. Requires credentials; fails fast at
    /// construction so a half-configured relay is caught before the batch
    /// starts, not on the first record.
    pub fn connect(config: &SmtpConfig) -> Result<Self, OutreachError> {
        let (Some(username), Some(password)) = (&config.username, &config.password) else {
            return Err(OutreachError::Config(
                "smtp.username and smtp.password are required for live sending".to_string(),
            ));
        };

        let from = username
            .parse::<Mailbox>()
            .map_err(|e| OutreachError::Config(format!("smtp.username is not a mailbox: {e}")))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| OutreachError::Config(format!("invalid smtp relay: {e}")))?
            .port(config.port)
            .credentials(Credentials::new(username.clone(), password.clone()))
            .build();

        Ok(Self {
            from,
            transport: Some(transport),
        })
    }

    /// Build a dry-run sender: logs intent, reports success, sends nothing.
    /// Falls back to a placeholder From when no username is configured.
    ///
    /// The CLI's `--dry-run` flag does NOT route here; it triggers the
    /// test burst, which delivers real mail to the operator and therefore
    /// uses [`SmtpSender::connect`]. This constructor is the offline
    /// building block for callers and tests that want a sender with no
    /// transport at all.
    pub fn dry_run(config: &SmtpConfig) -> Self {
        let from = config
            .username
            .as_deref()
            .and_then(|u| u.parse().ok())
            .unwrap_or_else(|| "outreach@localhost".parse().expect("static mailbox"));
        Self {
            from,
            transport: None,
        }
    }

    fn build_message(&self, mail: &OutgoingMail) -> Result<Message, String> {
        let to = mail
            .to
            .parse::<Mailbox>()
            .map_err(|e| format!("invalid recipient `{}`: {e}", mail.to))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(mail.subject.clone())
            .multipart(MultiPart::mixed().singlepart(SinglePart::plain(mail.body.clone())))
            .map_err(|e| format!("failed to build message: {e}"))
    }
}

#[async_trait]
impl Sender for SmtpSender {
    async fn send(&self, mail: &OutgoingMail) -> SendOutcome {
        // Dry run succeeds unconditionally: intent is logged, nothing is
        // validated or transmitted.
        let Some(transport) = &self.transport else {
            info!(to = %mail.to, subject = %mail.subject, "[dry run] would send email");
            return SendOutcome::Sent;
        };

        let message = match self.build_message(mail) {
            Ok(message) => message,
            Err(reason) => return SendOutcome::Failed(reason),
        };

        match transport.send(message).await {
            Ok(response) => {
                debug!(to = %mail.to, code = %response.code(), "smtp accepted message");
                SendOutcome::Sent
            }
            Err(err) => SendOutcome::Failed(format!("smtp delivery failed: {err}")),
        }
    }
}
