use std::sync::Arc;

use hnf_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use hnf_di::Build;
use hnf_email_contracts::{Email, EmailService};
use hnf_models::{
    contact::{ContactSubmission, ContactSubmissionDraft},
    email_address::EmailAddressWithName,
};
use tracing::debug;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Email> {
    email: Email,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// The inbox contact form submissions are sent to
    pub email: Arc<EmailAddressWithName>,
}

impl<EmailS> ContactFeatureService for ContactFeatureServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn submit(&self, draft: ContactSubmissionDraft) -> Result<(), ContactSubmitError> {
        let submission = draft.validate().map_err(|errors| {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Rejected contact submission");
            ContactSubmitError::Validation(errors)
        })?;

        let email = self.make_email(submission);

        if !self.email.send(email).await? {
            return Err(ContactSubmitError::Send);
        }

        Ok(())
    }
}

impl<EmailS> ContactFeatureServiceImpl<EmailS> {
    fn make_email(&self, submission: ContactSubmission) -> Email {
        let ContactSubmission {
            name,
            email,
            subject,
            message,
        } = submission;

        Email {
            recipient: (*self.config.email).clone(),
            subject: format!("[Contact Form] {}", *subject),
            body: format!("Message from {} ({}):\n\n{}", *name, email, *message),
            reply_to: Some(email.with_name(name.into_inner())),
        }
    }
}
