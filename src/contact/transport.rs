use std::future::Future;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use super::form::ContactSubmission;

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Failed to send message: endpoint answered {0}")]
    Rejected(StatusCode),
    #[error("Failed to send message: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Invalid contact endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// The mail-sending collaborator behind the contact form.
pub trait ContactTransport {
    fn send(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), SubmissionError>>;
}

/// Posts the submission as JSON. Any 2xx answer counts as delivered.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

impl ContactTransport for HttpTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        // `json` sets the `Content-Type: application/json` header
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Rejected(status));
        }
        Ok(())
    }
}
