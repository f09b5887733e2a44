//! Controller behind the contact form.
//!
//! The controller owns the field values, the per-field error messages and the
//! submission status of one form instance. It is meant to be shared between
//! the input bindings and the submit action, so all methods take `&self`.
//!
//! Status transitions:
//!
//! ```text
//! Idle | Succeeded | Failed --submit--> Submitting --+--> Succeeded (fields reset)
//!                                                   +--> Failed (fields kept)
//! ```
//!
//! A submit issued while another one is in flight is ignored.

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use hnf_extern_contracts::contact::{ContactApiResult, ContactApiService};
use hnf_models::contact::{ContactField, ContactSubmission, ContactSubmissionDraft};
use tracing::warn;

pub const SENT_NOTICE: &str = "Message sent successfully!";
pub const FAILED_NOTICE: &str = "Failed to send message. Please try again.";

#[derive(Debug)]
pub struct ContactFormController<Api> {
    api: Api,
    state: Mutex<FormState>,
}

#[derive(Debug, Default)]
struct FormState {
    fields: ContactSubmissionDraft,
    errors: BTreeMap<ContactField, String>,
    status: FormStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission of this form is still in flight; nothing was sent.
    AlreadySubmitting,
    /// Client side validation failed; nothing was sent.
    Invalid,
    Sent,
    /// The backend rejected individual fields.
    Rejected,
    Failed,
}

impl<Api> ContactFormController<Api> {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            state: Default::default(),
        }
    }

    /// Update a field. Any error shown for this field is cleared.
    pub fn set_field(&self, field: ContactField, value: impl Into<String>) {
        let mut state = self.lock();
        state.fields.set(field, value.into());
        state.errors.remove(&field);
    }

    pub fn fields(&self) -> ContactSubmissionDraft {
        self.lock().fields.clone()
    }

    pub fn field_error(&self, field: ContactField) -> Option<String> {
        self.lock().errors.get(&field).cloned()
    }

    pub fn field_errors(&self) -> BTreeMap<ContactField, String> {
        self.lock().errors.clone()
    }

    pub fn status(&self) -> FormStatus {
        self.lock().status
    }

    /// The notice to show after the last submission finished.
    pub fn notice(&self) -> Option<&'static str> {
        match self.status() {
            FormStatus::Succeeded => Some(SENT_NOTICE),
            FormStatus::Failed => Some(FAILED_NOTICE),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate the fields and move to `Submitting`.
    ///
    /// The check and the transition happen under one lock, so concurrent
    /// calls cannot both start a submission.
    fn begin(&self) -> Result<ContactSubmission, SubmitOutcome> {
        let mut state = self.lock();
        if state.status == FormStatus::Submitting {
            return Err(SubmitOutcome::AlreadySubmitting);
        }

        match state.fields.clone().validate() {
            Ok(submission) => {
                state.errors.clear();
                state.status = FormStatus::Submitting;
                Ok(submission)
            }
            Err(errors) => {
                state.errors = errors
                    .into_iter()
                    .map(|err| (err.field, err.kind.to_string()))
                    .collect();
                state.status = FormStatus::Idle;
                Err(SubmitOutcome::Invalid)
            }
        }
    }
}

impl<Api: ContactApiService> ContactFormController<Api> {
    pub async fn submit(&self) -> SubmitOutcome {
        let submission = match self.begin() {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };

        let _in_flight = InFlight(self);
        let result = self.api.submit(submission).await;

        let mut state = self.lock();
        match result {
            Ok(ContactApiResult::Sent) => {
                state.fields = Default::default();
                state.errors.clear();
                state.status = FormStatus::Succeeded;
                SubmitOutcome::Sent
            }
            Ok(ContactApiResult::Rejected(errors)) => {
                state.errors = errors
                    .into_iter()
                    .map(|err| (err.field, err.message))
                    .collect();
                state.status = FormStatus::Failed;
                SubmitOutcome::Rejected
            }
            Ok(ContactApiResult::Failed) => {
                state.status = FormStatus::Failed;
                SubmitOutcome::Failed
            }
            Err(err) => {
                warn!("Failed to submit contact form: {err:#}");
                state.status = FormStatus::Failed;
                SubmitOutcome::Failed
            }
        }
    }
}

/// Returns the form to `Idle` if a submission is dropped before it finished.
struct InFlight<'a, Api>(&'a ContactFormController<Api>);

impl<Api> Drop for InFlight<'_, Api> {
    fn drop(&mut self) {
        let mut state = self.0.lock();
        if state.status == FormStatus::Submitting {
            state.status = FormStatus::Idle;
        }
    }
}
