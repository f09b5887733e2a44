use anyhow::{anyhow, Context};
use hnf_email_contracts::{Email, EmailService};
use hnf_models::email_address::EmailAddressWithName;
use hnf_utils::Apply;
use lettre::{
    message::{header, MessageBuilder},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::info;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: Transport,
}

#[derive(Debug, Clone)]
enum Transport {
    /// Write every email to the application log instead of delivering it.
    Log,
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
}

impl EmailServiceImpl {
    pub fn smtp(url: &str, from: EmailAddressWithName) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)
            .context("Invalid smtp url")?
            .build();

        Ok(Self {
            from,
            transport: Transport::Smtp(transport),
        })
    }

    pub fn log(from: EmailAddressWithName) -> Self {
        Self {
            from,
            transport: Transport::Log,
        }
    }

    fn message(&self, email: Email) -> anyhow::Result<Message> {
        Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .apply_map(email.reply_to.map(|x| x.0), MessageBuilder::reply_to)
            .subject(email.subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(email.body)
            .context("Failed to build email message")
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let transport = match &self.transport {
            Transport::Log => {
                info!(
                    from = %self.from,
                    recipient = %email.recipient,
                    reply_to = email.reply_to.as_ref().map(tracing::field::display),
                    subject = %email.subject,
                    body = %email.body,
                    "Recorded email"
                );
                return Ok(true);
            }
            Transport::Smtp(transport) => transport,
        };

        let message = self.message(email)?;

        transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match &self.transport {
            Transport::Log => Ok(()),
            Transport::Smtp(transport) => transport
                .test_connection()
                .await?
                .then_some(())
                .ok_or_else(|| anyhow!("Failed to ping smtp server")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email {
            recipient: "contact@example.com".parse().unwrap(),
            subject: "The Subject".into(),
            body: "Hello World!".into(),
            reply_to: Some("Jane Doe <jane@example.com>".parse().unwrap()),
        }
    }

    #[test]
    fn message_headers() {
        let sut = EmailServiceImpl::log("website@example.com".parse().unwrap());

        let message = sut.message(email()).unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("website@example.com"));
        assert!(formatted.contains("contact@example.com"));
        assert!(formatted.contains("jane@example.com"));
        assert!(formatted.contains("Subject: The Subject"));
        assert!(formatted.contains("text/plain"));
        assert!(formatted.contains("Hello World!"));
    }

    #[test]
    fn invalid_smtp_url() {
        let result = EmailServiceImpl::smtp("http://nope", "website@example.com".parse().unwrap());
        assert!(result.is_err());
    }
}
