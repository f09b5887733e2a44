//! The contact form schema.
//!
//! [`ContactSubmissionDraft`] is what a user typed (or what arrived over the
//! wire) and is not trusted. [`ContactSubmissionDraft::validate`] turns it
//! into a normalized [`ContactSubmission`] or reports every field that failed.
//! Both the form controller and the submission handler validate through this
//! module, so they always enforce the same rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{email_address::EmailAddress, macros::nutype_string};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub subject: ContactSubject,
    pub message: ContactMessageBody,
}

nutype_string!(
    /// Full name of the person contacting the agency
    ContactName(sanitize(trim), validate(not_empty, len_char_max = 256),)
);

nutype_string!(
    /// Subject line of a contact message
    ContactSubject(sanitize(trim), validate(not_empty, len_char_max = 256),)
);

nutype_string!(
    /// Free text of a contact message
    ContactMessageBody(sanitize(trim), validate(not_empty, len_char_max = 4096),)
);

impl ContactName {
    pub const MAX_LENGTH: usize = 256;
}

impl ContactSubject {
    pub const MAX_LENGTH: usize = 256;
}

impl ContactMessageBody {
    pub const MAX_LENGTH: usize = 4096;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmissionDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmissionDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Validate all fields of the draft.
    ///
    /// Every field is checked, so the returned error lists all failures and
    /// not just the first one.
    pub fn validate(self) -> Result<ContactSubmission, ContactValidationErrors> {
        let mut errors = Vec::new();

        let name = check(
            &mut errors,
            ContactField::Name,
            ContactName::try_new(self.name).map_err(Into::into),
        );
        let email = check(&mut errors, ContactField::Email, parse_email(&self.email));
        let subject = check(
            &mut errors,
            ContactField::Subject,
            ContactSubject::try_new(self.subject).map_err(Into::into),
        );
        let message = check(
            &mut errors,
            ContactField::Message,
            ContactMessageBody::try_new(self.message).map_err(Into::into),
        );

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(ContactSubmission {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(ContactValidationErrors(errors)),
        }
    }
}

fn check<T>(
    errors: &mut Vec<ContactFieldError>,
    field: ContactField,
    result: Result<T, ContactFieldErrorKind>,
) -> Option<T> {
    result
        .map_err(|kind| errors.push(ContactFieldError { field, kind }))
        .ok()
}

fn parse_email(email: &str) -> Result<EmailAddress, ContactFieldErrorKind> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ContactFieldErrorKind::Required);
    }
    email
        .parse()
        .map_err(|_| ContactFieldErrorKind::InvalidEmail)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFieldErrorKind {
    #[error("required")]
    Required,
    #[error("must be at most {max} characters")]
    TooLong { max: usize },
    #[error("not a valid address")]
    InvalidEmail,
}

macro_rules! field_error_from {
    ($($error:ident => $max:expr),* $(,)?) => { $(
        impl From<$error> for ContactFieldErrorKind {
            fn from(value: $error) -> Self {
                match value {
                    $error::NotEmptyViolated => Self::Required,
                    $error::LenCharMaxViolated => Self::TooLong { max: $max },
                }
            }
        }
    )* };
}

field_error_from! {
    ContactNameError => ContactName::MAX_LENGTH,
    ContactSubjectError => ContactSubject::MAX_LENGTH,
    ContactMessageBodyError => ContactMessageBody::MAX_LENGTH,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {kind}")]
pub struct ContactFieldError {
    pub field: ContactField,
    pub kind: ContactFieldErrorKind,
}

/// The non-empty list of field failures of a rejected draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactValidationErrors(Vec<ContactFieldError>);

impl ContactValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ContactFieldError> {
        self.0.iter()
    }

    pub fn get(&self, field: ContactField) -> Option<ContactFieldErrorKind> {
        self.0.iter().find(|x| x.field == field).map(|x| x.kind)
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.iter().map(|x| x.field)
    }
}

impl std::fmt::Display for ContactValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            err.fmt(f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ContactValidationErrors {}

impl IntoIterator for ContactValidationErrors {
    type Item = ContactFieldError;
    type IntoIter = std::vec::IntoIter<ContactFieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use hnf_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn draft(name: &str, email: &str, subject: &str, message: &str) -> ContactSubmissionDraft {
        ContactSubmissionDraft {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[test]
    fn valid() {
        // Act
        let result = draft("Jane Doe", "jane@example.com", "Inquiry", "Hello there").validate();

        // Assert
        let submission = result.unwrap();
        assert_eq!(*submission.name, "Jane Doe");
        assert_eq!(submission.email.as_str(), "jane@example.com");
        assert_eq!(*submission.subject, "Inquiry");
        assert_eq!(*submission.message, "Hello there");
    }

    #[test]
    fn normalizes_whitespace() {
        let submission = draft(" Jane ", " jane@example.com\n", "\tInquiry", "Hello\n\n")
            .validate()
            .unwrap();

        assert_eq!(*submission.name, "Jane");
        assert_eq!(submission.email.as_str(), "jane@example.com");
        assert_eq!(*submission.subject, "Inquiry");
        assert_eq!(*submission.message, "Hello");
    }

    #[test]
    fn empty_name() {
        let result = draft("", "jane@example.com", "Inquiry", "Hello").validate();

        let errors = result.unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), [ContactField::Name]);
        assert_eq!(
            errors.get(ContactField::Name),
            Some(ContactFieldErrorKind::Required)
        );
    }

    #[test]
    fn whitespace_only_is_required() {
        let result = draft("Jane", "jane@example.com", "   ", "\n\t").validate();

        let errors = result.unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            [ContactField::Subject, ContactField::Message]
        );
    }

    #[test]
    fn invalid_email() {
        let result = draft("Jane", "not-an-email", "Inquiry", "Hello").validate();

        let errors = result.unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), [ContactField::Email]);
        assert_matches!(
            errors.get(ContactField::Email),
            Some(ContactFieldErrorKind::InvalidEmail)
        );
        assert_eq!(errors.to_string(), "email: not a valid address");
    }

    #[test]
    fn missing_everything() {
        let errors = ContactSubmissionDraft::default().validate().unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), ContactField::ALL);
        assert!(errors
            .iter()
            .all(|err| err.kind == ContactFieldErrorKind::Required));
        assert_eq!(
            errors.to_string(),
            "name: required; email: required; subject: required; message: required"
        );
    }

    #[test]
    fn length_limits() {
        let at_limit = "x".repeat(ContactMessageBody::MAX_LENGTH);
        draft("Jane", "jane@example.com", "Inquiry", &at_limit)
            .validate()
            .unwrap();

        let over_limit = "x".repeat(ContactMessageBody::MAX_LENGTH + 1);
        let long_name = "x".repeat(ContactName::MAX_LENGTH + 1);
        let errors = draft(&long_name, "jane@example.com", "Inquiry", &over_limit)
            .validate()
            .unwrap_err();

        assert_eq!(
            errors.get(ContactField::Name),
            Some(ContactFieldErrorKind::TooLong { max: 256 })
        );
        assert_eq!(
            errors.get(ContactField::Message),
            Some(ContactFieldErrorKind::TooLong { max: 4096 })
        );
        assert_eq!(
            errors.iter().next().unwrap().to_string(),
            "name: must be at most 256 characters"
        );
    }

    #[test]
    fn draft_fields() {
        let mut draft = ContactSubmissionDraft::default();
        for field in ContactField::ALL {
            draft.set(field, field.to_string());
        }

        for field in ContactField::ALL {
            assert_eq!(draft.get(field), field.as_str());
        }
        assert_eq!(
            serde_json::to_value(ContactField::Subject).unwrap(),
            serde_json::json!("subject")
        );
    }
}
