//! HTTP client for the submit endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::form::Submission;

/// Path of the submit endpoint, relative to the server base URL
pub const SUBMIT_PATH: &str = "/api/submit-form";

/// Result of one attempt to persist a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Persistence acknowledged the record
    Created,
    /// The server answered with a non-success status
    Rejected { status: u16 },
    /// The request never got an answer
    Unreachable { reason: String },
}

impl Delivery {
    pub fn is_created(&self) -> bool {
        matches!(self, Delivery::Created)
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Something that can carry a submission to the persistence boundary
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Send exactly one request. No retries.
    async fn send(&self, submission: &Submission) -> Delivery;
}

/// Posts submissions as JSON to `POST /api/submit-form`
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    client: Client,
    endpoint: String,
}

impl SubmissionClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SUBMIT_PATH),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for SubmissionClient {
    async fn send(&self, submission: &Submission) -> Delivery {
        tracing::debug!(endpoint = %self.endpoint, "submitting form");

        match self.client.post(&self.endpoint).json(submission).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    tracing::info!(status = status.as_u16(), "form submission accepted");
                    Delivery::Created
                } else {
                    tracing::warn!(status = status.as_u16(), "form submission rejected");
                    Delivery::Rejected {
                        status: status.as_u16(),
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "form submission failed to reach server");
                Delivery::Unreachable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Contact, NoWebsiteProfile, Profile};

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = SubmissionClient::new("http://localhost:3000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000/api/submit-form");

        let client = SubmissionClient::new("https://forms.example.com", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), "https://forms.example.com/api/submit-form");
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig::default();
        let client = SubmissionClient::from_config(&config).unwrap();
        assert!(client.endpoint().ends_with(SUBMIT_PATH));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Nothing listens on port 1
        let client = SubmissionClient::new("http://127.0.0.1:1", Duration::from_secs(5)).unwrap();
        let submission = Submission {
            contact: Contact {
                name: "Jo".to_string(),
                company_name: "Ac".to_string(),
                email: "a@b.co".to_string(),
                phone: "1234567890".to_string(),
            },
            profile: Profile::WithoutWebsite(NoWebsiteProfile::default()),
        };

        let delivery = client.send(&submission).await;
        assert!(matches!(delivery, Delivery::Unreachable { .. }));
        assert!(!delivery.is_created());
    }
}
