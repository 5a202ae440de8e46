// src/notify/email.rs
//! Best-effort email delivery over the Outlook STARTTLS relay.

use anyhow::{Context, Result};
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::{authentication::Credentials, AsyncSmtpTransport};
use lettre::{AsyncTransport, Tokio1Executor};
use tracing::info;

use crate::config::AppConfig;

const SMTP_HOST: &str = "smtp-mail.outlook.com";
const SMTP_PORT: u16 = 587;

pub struct EmailNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailNotifier {
    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        let creds = Credentials::new(cfg.smtp_user.clone(), cfg.smtp_pass.clone());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(SMTP_HOST)
            .context("building SMTP transport")?
            .port(SMTP_PORT)
            .credentials(creds)
            .build();

        let from: Mailbox = cfg.smtp_user.parse().context("invalid sender address")?;
        let to: Mailbox = cfg.recipient.parse().context("invalid recipient address")?;

        Ok(Self { mailer, from, to })
    }

    /// Send one HTML notification. The caller decides whether a send failure
    /// matters; here it is just an error value.
    pub async fn send(&self, subject: &str, html_body: &str) -> Result<()> {
        let msg = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(header::ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .context("building email")?;

        self.mailer.send(msg).await.context("sending email")?;
        info!(to = %self.to, subject, "notification email sent");
        Ok(())
    }
}
