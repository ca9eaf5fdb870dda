use shared_types::{ApiErrorBody, GenerateBioResponse, HealthResponse, ProfileInput};

use crate::config::ClientConfig;
use crate::error::{Stage, SubmitError, TransportError};
use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::race::race_timeout;
use crate::state::{RequestState, SubmissionResult};
use crate::timer::Timer;

/// Stateless orchestration of one submission: health probe, then the
/// generation request, each under its own timeout.
#[derive(Debug, Clone)]
pub struct BioService<C, T> {
    config: ClientConfig,
    client: C,
    timer: T,
}

impl<C: HttpClient, T: Timer> BioService<C, T> {
    pub fn new(config: ClientConfig, client: C, timer: T) -> Self {
        Self {
            config,
            client,
            timer,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Confirm the backend answers before doing real work.
    pub async fn check_health(&self) -> Result<(), SubmitError> {
        let request =
            HttpRequest::get(self.config.health_url()).header("Accept", "application/json");
        let response = self.send_timed(request, Stage::HealthCheck).await?;

        if !response.is_success() {
            tracing::warn!(
                status = response.status,
                "Health check returned non-success status"
            );
            return Err(SubmitError::ServerUnavailable {
                status: response.status,
            });
        }

        match response.json::<HealthResponse>() {
            Ok(health) => tracing::debug!(status = %health.status, "Backend healthy"),
            Err(_) => tracing::debug!(http_status = response.status, "Backend reachable"),
        }
        Ok(())
    }

    /// Send the profile and unwrap the generated bio.
    pub async fn generate(&self, input: &ProfileInput) -> Result<String, SubmitError> {
        let request = HttpRequest::post(self.config.generate_url())
            .header("Accept", "application/json")
            .json(input)
            .map_err(|e| SubmitError::InvalidResponse {
                reason: format!("could not encode profile: {e}"),
            })?;
        let response = self.send_timed(request, Stage::Generate).await?;

        if !response.is_success() {
            let server_message = response
                .json::<ApiErrorBody>()
                .ok()
                .and_then(|body| body.error);
            tracing::warn!(
                status = response.status,
                has_server_message = server_message.is_some(),
                "Bio generation failed"
            );
            return Err(SubmitError::HttpError {
                status: response.status,
                server_message,
            });
        }

        let body: GenerateBioResponse =
            response.json().map_err(|e| SubmitError::InvalidResponse {
                reason: e.to_string(),
            })?;
        tracing::info!(bio_len = body.bio.len(), "Bio generated");
        Ok(body.bio)
    }

    /// Run both calls in order, reporting loading phases through `on_phase`.
    ///
    /// The generation request is never issued unless the health check
    /// succeeded.
    pub async fn submit_with<F>(&self, input: &ProfileInput, mut on_phase: F) -> SubmissionResult
    where
        F: FnMut(RequestState),
    {
        on_phase(RequestState::Checking);
        if let Err(err) = self.check_health().await {
            tracing::warn!(kind = err.kind(), error = %err, "Submission stopped at health check");
            return SubmissionResult::Failure(err);
        }

        on_phase(RequestState::Submitting);
        let result = self.generate(input).await;
        if let Err(err) = &result {
            tracing::warn!(kind = err.kind(), error = %err, "Submission failed");
        }
        result.into()
    }

    pub async fn submit(&self, input: &ProfileInput) -> SubmissionResult {
        self.submit_with(input, |_| {}).await
    }

    async fn send_timed(
        &self,
        request: HttpRequest,
        stage: Stage,
    ) -> Result<HttpResponse, SubmitError> {
        let timeout = match stage {
            Stage::HealthCheck => self.config.health_timeout,
            Stage::Generate => self.config.generate_timeout,
        };
        tracing::debug!(stage = stage.as_str(), url = %request.url, ?timeout, "Sending request");

        match race_timeout(self.client.send(request), &self.timer, timeout).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(TransportError::Timeout)) | Err(_) => {
                tracing::warn!(stage = stage.as_str(), ?timeout, "Request timed out");
                Err(SubmitError::RequestTimeout { stage })
            }
            Ok(Err(TransportError::Network { message })) => {
                tracing::warn!(stage = stage.as_str(), %message, "Backend unreachable");
                Err(SubmitError::ConnectionError {
                    endpoint: self.config.endpoint_label(),
                    stage,
                })
            }
        }
    }
}
