pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod metrics;
pub mod session;
pub mod validate;
pub mod wire;

pub use client::{HttpPredictor, Predict};
pub use config::{ClientConfig, Settings};
pub use error::{ClientError, ConfigError};
pub use form::{Field, FormState, ModelChoice};
pub use session::{Completion, Pane, Phase, Session, Submission, Ticket};
pub use validate::{FormErrors, PresenceRule, validate};
pub use wire::{HealthStatus, ModelName, PredictionInput, PredictionResult, ServiceInfo};
