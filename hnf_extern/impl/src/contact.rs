use std::sync::Arc;

use anyhow::Context;
use hnf_di::Build;
use hnf_extern_contracts::contact::{ContactApiFieldError, ContactApiResult, ContactApiService};
use hnf_models::contact::ContactSubmission;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone, Build)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    #[state]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    submit_endpoint: Arc<Url>,
}

impl ContactApiServiceConfig {
    /// `api_url` is the base url of the backend serving the contact endpoint.
    pub fn new(mut api_url: Url) -> anyhow::Result<Self> {
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        let submit_endpoint = api_url
            .join("api/contact")
            .context("Failed to build contact endpoint URL")?;

        Ok(Self {
            submit_endpoint: submit_endpoint.into(),
        })
    }
}

impl ContactApiService for ContactApiServiceImpl {
    async fn submit(&self, submission: ContactSubmission) -> anyhow::Result<ContactApiResult> {
        let request = SubmitRequest {
            name: &submission.name,
            email: submission.email.as_str(),
            subject: &submission.subject,
            message: &submission.message,
        };

        let response = self
            .http
            .post((*self.config.submit_endpoint).clone())
            .json(&request)
            .send()
            .await
            .context("Failed to send contact request")?;

        match response.status() {
            status if status.is_success() => Ok(ContactApiResult::Sent),
            StatusCode::BAD_REQUEST => response
                .json::<RejectedResponse>()
                .await
                .map(|response| ContactApiResult::Rejected(response.errors))
                .context("Failed to deserialize contact rejection"),
            status => {
                warn!(%status, "Contact request failed");
                Ok(ContactApiResult::Failed)
            }
        }
    }
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct RejectedResponse {
    errors: Vec<ContactApiFieldError>,
}
