use std::{error::Error, fmt, io};

/// Failures of a single call to the prediction service.
#[derive(Debug)]
pub enum ClientError {
    /// The service answered with a status outside `2xx`.
    RequestFailed { status: u16 },
    /// The request never got an answer (DNS, refused connection, timeout...).
    Transport {
        url: String,
        source: Box<ureq::Transport>,
    },
    /// A `2xx` body that does not have the expected shape.
    InvalidResponse(serde_json::Error),
    /// The response body could not be read.
    Io(io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed { status } => write!(f, "request failed with status {status}"),
            Self::Transport { url, source } => write!(f, "could not reach {url}: {source}"),
            Self::InvalidResponse(e) => write!(f, "invalid response body: {e}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport { source, .. } => Some(source.as_ref()),
            Self::InvalidResponse(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::RequestFailed { .. } => None,
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Invalid or missing configuration, caught before anything is sent.
#[derive(Debug)]
pub enum ConfigError {
    MissingVar(&'static str),
    InvalidUrl {
        value: String,
        source: url::ParseError,
    },
    UnsupportedScheme {
        value: String,
        scheme: String,
    },
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVar(var) => write!(f, "missing environment variable {var}"),
            Self::InvalidUrl { value, source } => write!(f, "invalid url '{value}': {source}"),
            Self::UnsupportedScheme { value, scheme } => {
                write!(f, "unsupported scheme '{scheme}' in '{value}', expected http or https")
            }
            Self::InvalidValue { var, value, reason } => {
                write!(f, "invalid value '{value}' for {var}: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidUrl { source, .. } => Some(source),
            _ => None,
        }
    }
}
