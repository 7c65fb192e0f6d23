use serde::de::DeserializeOwned;

use crate::{
    config::ClientConfig,
    error::ClientError,
    form::ModelChoice,
    wire::{ErrorBody, PredictionInput, PredictionResult, ServiceInfo},
};

/// Something that can turn a validated form into a prediction.
pub trait Predict {
    /// Runs exactly one prediction attempt.
    ///
    /// # Errors
    /// Returns a `ClientError` if the attempt fails for any reason.
    fn predict(
        &self,
        model: ModelChoice,
        input: &PredictionInput,
    ) -> Result<PredictionResult, ClientError>;
}

impl<P: Predict + ?Sized> Predict for &P {
    fn predict(
        &self,
        model: ModelChoice,
        input: &PredictionInput,
    ) -> Result<PredictionResult, ClientError> {
        (**self).predict(model, input)
    }
}

/// Blocking HTTP client for the prediction service.
///
/// Cloning is cheap, clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl HttpPredictor {
    /// Creates a new `HttpPredictor`.
    ///
    /// # Args
    /// * `config` - Service location and timeouts.
    ///
    /// # Returns
    /// A client ready to issue requests.
    pub fn new(config: ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.connect_timeout())
            .timeout_read(config.timeout())
            .timeout_write(config.timeout())
            .build();

        Self { agent, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the service's self-description from `GET /`.
    ///
    /// # Errors
    /// Same failure modes as [`Predict::predict`].
    pub fn service_info(&self) -> Result<ServiceInfo, ClientError> {
        let url = self.config.info_url();
        log::debug!("GET {url}");

        let response = self.agent.get(&url).call();
        parse_json(&url, response)
    }
}

impl Predict for HttpPredictor {
    fn predict(
        &self,
        model: ModelChoice,
        input: &PredictionInput,
    ) -> Result<PredictionResult, ClientError> {
        let url = self.config.predict_url();
        log::debug!("POST {url}?model={}", model.code());

        let response = self
            .agent
            .post(&url)
            .query("model", model.code())
            .send_json(input);

        parse_json(&url, response)
    }
}

/// Maps a raw ureq outcome onto a typed body or a `ClientError`.
fn parse_json<T: DeserializeOwned>(
    url: &str,
    response: Result<ureq::Response, ureq::Error>,
) -> Result<T, ClientError> {
    let response = match response {
        Ok(response) => response,
        Err(ureq::Error::Status(status, response)) => {
            log_error_body(status, response);
            return Err(ClientError::RequestFailed { status });
        }
        Err(ureq::Error::Transport(transport)) => {
            return Err(ClientError::Transport {
                url: url.to_string(),
                source: Box::new(transport),
            });
        }
    };

    // ureq only reports >= 400 as errors.
    let status = response.status();
    if !(200..300).contains(&status) {
        return Err(ClientError::RequestFailed { status });
    }

    let body = response.into_string()?;
    serde_json::from_str(&body).map_err(ClientError::InvalidResponse)
}

fn log_error_body(status: u16, response: ureq::Response) {
    let Ok(body) = response.into_string() else {
        return;
    };

    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody { error }) => log::warn!("service answered {status}: {error}"),
        Err(_) => log::warn!("service answered {status}"),
    }
}
