use serde::Serialize;
use tracing::{debug, warn};
use ureq::http::Response;
use ureq::{Agent, Body};

use intake_core::api_paths;
use intake_core::models::envelope::ApiEnvelope;
use intake_core::models::submission::IntakeSubmission;
use intake_core::models::tracking::AbandonmentEvent;

use crate::api::IntakeApi;
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Blocking JSON-over-HTTP transport for the persistence API.
///
/// No timeout and no retry: a failed submission is retried by the user.
pub struct HttpApi {
    agent: Agent,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        // Non-2xx replies still carry an envelope worth logging.
        let agent = Agent::new_with_config(
            Agent::config_builder()
                .http_status_as_error(false)
                .build(),
        );
        Self {
            agent,
            base_url: config.base_url.clone(),
        }
    }

    /// POST `body` as JSON. Non-2xx statuses become `ClientError::Status`.
    fn send<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<(String, Response<Body>), ClientError> {
        let url = api_paths::join(&self.base_url, path);
        let mut resp = self
            .agent
            .post(&url)
            .send_json(body)
            .map_err(|e| ClientError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = resp.status();
        debug!(url = %url, status = status.as_u16(), "persistence API responded");

        if !status.is_success() {
            let message = resp
                .body_mut()
                .read_json::<ApiEnvelope>()
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_default();
            warn!(
                url = %url,
                status = status.as_u16(),
                message = %message,
                "persistence API error"
            );
            return Err(ClientError::Status {
                url,
                status: status.as_u16(),
            });
        }

        Ok((url, resp))
    }
}

impl IntakeApi for HttpApi {
    fn save_patient(&self, submission: &IntakeSubmission) -> Result<ApiEnvelope, ClientError> {
        let (url, mut resp) = self.send(api_paths::PATIENTS, submission)?;
        resp.body_mut()
            .read_json::<ApiEnvelope>()
            .map_err(|e| ClientError::ResponseParse(format!("{url}: {e}")))
    }

    /// Only the status matters; the tracking endpoint's body is ignored.
    fn track(&self, event: &AbandonmentEvent) -> Result<(), ClientError> {
        self.send(api_paths::ABANDONMENT, event).map(|_| ())
    }
}
