//! HTTP client for the summarization inference endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    config::Settings,
    error::{Error, Result},
    summary::LengthParams,
};

const USER_AGENT: &str = concat!("briefly/", env!("CARGO_PKG_VERSION"));

/// One request, one response, no retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Request body sent to the inference endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRequest {
    /// Full prompt, instruction plus input text.
    pub inputs: String,
    /// Model length bounds; omitted from the wire when unconstrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<LengthParams>,
}

/// One candidate result; the endpoint answers with an ordered list of these.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryCandidate {
    #[serde(default)]
    pub summary_text: String,
}

/// Capability seam over the remote service, so tests can substitute a stub
/// without network access.
pub trait Summarizer {
    /// Perform the single summarization call.
    fn summarize(
        &self,
        request: &SummaryRequest,
    ) -> impl std::future::Future<Output = Result<Vec<SummaryCandidate>>> + Send;
}

/// Client for the HuggingFace Inference API.
#[derive(Debug, Clone)]
pub struct HfClient {
    http: Client,
    api_url: String,
    token: String,
}

impl HfClient {
    /// Build a client from settings; fails fast when the token is absent.
    pub fn new(settings: &Settings) -> Result<Self> {
        let token = settings.bearer_token()?.to_string();
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Network {
                message: e.to_string(),
            })?;
        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
            token,
        })
    }
}

impl Summarizer for HfClient {
    async fn summarize(&self, request: &SummaryRequest) -> Result<Vec<SummaryCandidate>> {
        debug!(url = %self.api_url, "sending summarization request");

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let candidates: Vec<SummaryCandidate> =
            serde_json::from_str(&body).map_err(|e| Error::Decode {
                message: e.to_string(),
            })?;

        info!(candidates = candidates.len(), "response received");
        Ok(candidates)
    }
}
