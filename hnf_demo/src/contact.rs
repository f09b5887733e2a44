use std::sync::LazyLock;

use hnf_models::contact::{ContactSubmission, ContactSubmissionDraft};

/// A valid submission, as typed into the contact form.
pub static JANE: LazyLock<ContactSubmissionDraft> = LazyLock::new(|| ContactSubmissionDraft {
    name: "Jane Doe".into(),
    email: "jane@example.com".into(),
    subject: "Inquiry".into(),
    message: "Hello there".into(),
});

pub static JANE_SUBMISSION: LazyLock<ContactSubmission> =
    LazyLock::new(|| JANE.clone().validate().unwrap());

/// Rejected because the name is empty.
pub static NAMELESS: LazyLock<ContactSubmissionDraft> = LazyLock::new(|| ContactSubmissionDraft {
    name: "".into(),
    email: "jane@example.com".into(),
    subject: "Inquiry".into(),
    message: "Hello".into(),
});

/// Rejected because the email address is malformed.
pub static BAD_EMAIL: LazyLock<ContactSubmissionDraft> = LazyLock::new(|| ContactSubmissionDraft {
    name: "Jane".into(),
    email: "not-an-email".into(),
    subject: "Inquiry".into(),
    message: "Hello".into(),
});
