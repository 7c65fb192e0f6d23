use habits::{HttpPredictor, PresenceRule, Settings};

/// What every screen needs to reach the prediction service.
#[derive(Debug, Clone)]
pub struct Context {
    pub predictor: HttpPredictor,
    pub rule: PresenceRule,
}

impl Context {
    pub fn new(settings: &Settings) -> Self {
        log::info!(
            "using prediction service at {} (presence rule: {})",
            settings.client.base_url(),
            settings.presence_rule
        );
        Self {
            predictor: HttpPredictor::new(settings.client.clone()),
            rule: settings.presence_rule,
        }
    }

    pub fn base_url(&self) -> &str {
        self.predictor.config().base_url()
    }
}

#[cfg(test)]
impl Context {
    /// A context pointing at a port nothing should listen on.
    pub(crate) fn offline() -> Self {
        Self {
            predictor: HttpPredictor::new(
                habits::ClientConfig::new("http://127.0.0.1:9").expect("valid test url"),
            ),
            rule: PresenceRule::Explicit,
        }
    }
}
