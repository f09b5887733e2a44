use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use hnf_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use tracing::warn;

use super::error;
use crate::models::{
    contact::{ApiContactSubmission, ApiContactValidationError},
    ApiMessage,
};

const SENT: &str = "Message sent successfully";
const FAILED: &str = "Failed to send message";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(service: State<Arc<impl ContactFeatureService>>, body: Bytes) -> Response {
    let submission = match ApiContactSubmission::from_json(&body) {
        Ok(submission) => submission,
        Err(err) => {
            warn!("Failed to parse contact submission: {err}");
            return error(StatusCode::INTERNAL_SERVER_ERROR, FAILED);
        }
    };

    match service.submit(submission.into()).await {
        Ok(()) => Json(ApiMessage { message: SENT }).into_response(),
        Err(ContactSubmitError::Validation(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiContactValidationError::new(FAILED, errors)),
        )
            .into_response(),
        Err(ContactSubmitError::Send) => {
            tracing::error!("Contact submission was rejected by the email transport");
            error(StatusCode::INTERNAL_SERVER_ERROR, FAILED)
        }
        Err(ContactSubmitError::Other(err)) => {
            tracing::error!("Failed to record contact submission: {err:#}");
            error(StatusCode::INTERNAL_SERVER_ERROR, FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use hnf_core_contact_contracts::MockContactFeatureService;
    use hnf_demo::contact::{BAD_EMAIL, JANE, NAMELESS};
    use hnf_models::contact::ContactSubmissionDraft;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    async fn post(service: MockContactFeatureService, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::post("/api/contact")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap();
        let response = router(Arc::new(service)).oneshot(request).await.unwrap();
        let code = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (code, serde_json::from_slice(&body).unwrap())
    }

    fn to_json(draft: &ContactSubmissionDraft) -> String {
        json!({
            "name": draft.name,
            "email": draft.email,
            "subject": draft.subject,
            "message": draft.message,
        })
        .to_string()
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(JANE.clone(), Ok(()));

        // Act
        let (code, body) = post(service, to_json(&JANE)).await;

        // Assert
        assert_eq!(code, StatusCode::OK);
        assert_eq!(body, json!({"message": "Message sent successfully"}));
    }

    #[tokio::test]
    async fn missing_name() {
        // Arrange
        let errors = NAMELESS.clone().validate().unwrap_err();
        let service = MockContactFeatureService::new().with_submit(
            NAMELESS.clone(),
            Err(ContactSubmitError::Validation(errors)),
        );

        // Act
        let (code, body) = post(service, to_json(&NAMELESS)).await;

        // Assert
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "message": "Failed to send message",
                "errors": [{"field": "name", "message": "required"}],
            })
        );
    }

    #[tokio::test]
    async fn invalid_email() {
        // Arrange
        let errors = BAD_EMAIL.clone().validate().unwrap_err();
        let service = MockContactFeatureService::new().with_submit(
            BAD_EMAIL.clone(),
            Err(ContactSubmitError::Validation(errors)),
        );

        // Act
        let (code, body) = post(service, to_json(&BAD_EMAIL)).await;

        // Assert
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["errors"],
            json!([{"field": "email", "message": "not a valid address"}])
        );
        assert!(!body.to_string().contains("not-an-email"));
    }

    #[tokio::test]
    async fn absent_fields_are_validated() {
        // Arrange
        let draft = ContactSubmissionDraft {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            subject: String::new(),
            message: String::new(),
        };
        let errors = draft.clone().validate().unwrap_err();
        let service = MockContactFeatureService::new()
            .with_submit(draft, Err(ContactSubmitError::Validation(errors)));

        // Act
        let (code, body) = post(
            service,
            r#"{"name": "Jane", "email": "jane@example.com", "subject": null}"#,
        )
        .await;

        // Assert
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["errors"],
            json!([
                {"field": "subject", "message": "required"},
                {"field": "message", "message": "required"},
            ])
        );
    }

    #[tokio::test]
    async fn malformed_body() {
        for body in [
            "not json at all",
            "",
            "null",
            r#""Jane Doe""#,
            "[1, 2, 3]",
            "[]",
            r#"["Jane Doe", "jane@example.com", "Inquiry", "Hello there"]"#,
            r#"{"name": 42}"#,
        ] {
            // Arrange
            let service = MockContactFeatureService::new();

            // Act
            let (code, response) = post(service, body).await;

            // Assert
            assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR, "{body}");
            assert_eq!(response, json!({"message": "Failed to send message"}));
        }
    }

    #[tokio::test]
    async fn send_failed() {
        // Arrange
        let service =
            MockContactFeatureService::new().with_submit(JANE.clone(), Err(ContactSubmitError::Send));

        // Act
        let (code, body) = post(service, to_json(&JANE)).await;

        // Assert
        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Failed to send message"}));
    }

    #[tokio::test]
    async fn unexpected_error() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            JANE.clone(),
            Err(ContactSubmitError::Other(anyhow::anyhow!("smtp down"))),
        );

        // Act
        let (code, body) = post(service, to_json(&JANE)).await;

        // Assert
        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Failed to send message"}));
    }
}
