use std::future::Future;

use hnf_models::contact::{ContactSubmissionDraft, ContactValidationErrors};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact form submission and record it.
    ///
    /// Nothing is recorded if the submission is invalid.
    fn submit(
        &self,
        draft: ContactSubmissionDraft,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Invalid contact submission: {0}")]
    Validation(ContactValidationErrors),
    #[error("Failed to send message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        draft: ContactSubmissionDraft,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
