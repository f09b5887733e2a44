use anyhow::Context;
use hnf_config::EmailConfig;
use hnf_email_contracts::EmailService;
use hnf_email_impl::EmailServiceImpl;
use tracing::{info, warn};

/// Connect to the configured SMTP server, or fall back to logging emails.
pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    let Some(smtp_url) = &config.smtp_url else {
        warn!("No smtp server configured, emails will only be logged");
        return Ok(EmailServiceImpl::log(config.from.clone()));
    };

    info!("Connecting to smtp server");
    let email = EmailServiceImpl::smtp(smtp_url, config.from.clone())?;
    email
        .ping()
        .await
        .context("Failed to connect to SMTP server")?;
    Ok(email)
}
