use std::future::Future;

use hnf_models::contact::{ContactField, ContactSubmission};
use serde::Deserialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Post a validated submission to the contact endpoint of the backend.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<ContactApiResult>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactApiResult {
    /// The backend recorded the submission.
    Sent,
    /// The backend rejected individual fields.
    Rejected(Vec<ContactApiFieldError>),
    /// The backend failed to record the submission.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactApiFieldError {
    pub field: ContactField,
    pub message: String,
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_submit(mut self, submission: ContactSubmission, result: ContactApiResult) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
