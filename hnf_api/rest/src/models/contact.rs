use hnf_models::contact::{ContactField, ContactSubmissionDraft, ContactValidationErrors};
use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::Value;

/// Body of a contact form submission.
///
/// Missing and `null` fields are accepted here and rejected by validation,
/// so they are reported per field instead of as a malformed body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    /// Full name of the user
    #[serde(default)]
    pub name: Option<String>,
    /// Email address of the user
    #[serde(default)]
    pub email: Option<String>,
    /// Subject of the message
    #[serde(default)]
    pub subject: Option<String>,
    /// Content of the message
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiContactSubmission {
    /// Parse a request body, which must be a JSON object.
    ///
    /// The derived `Deserialize` would also accept a positional array.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        match serde_json::from_slice(body)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Err(serde_json::Error::custom(
                "contact submission must be a JSON object",
            )),
        }
    }
}

impl From<ApiContactSubmission> for ContactSubmissionDraft {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            subject: value.subject.unwrap_or_default(),
            message: value.message.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactValidationError {
    pub message: &'static str,
    pub errors: Vec<ApiFieldError>,
}

#[derive(Debug, Serialize)]
pub struct ApiFieldError {
    pub field: ContactField,
    pub message: String,
}

impl ApiContactValidationError {
    pub fn new(message: &'static str, errors: ContactValidationErrors) -> Self {
        Self {
            message,
            errors: errors
                .into_iter()
                .map(|err| ApiFieldError {
                    field: err.field,
                    message: err.kind.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_json_object() {
        let submission =
            ApiContactSubmission::from_json(br#"{"name": "Jane Doe", "email": null}"#).unwrap();

        assert_eq!(
            ContactSubmissionDraft::from(submission),
            ContactSubmissionDraft {
                name: "Jane Doe".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn from_json_positional_array() {
        let result = ApiContactSubmission::from_json(
            br#"["Jane Doe", "jane@example.com", "Inquiry", "Hello there"]"#,
        );

        assert!(result.is_err());
    }
}
