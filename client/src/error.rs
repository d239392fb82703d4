use thiserror::Error;

/// Broad class of a failed submission, used by the view to pick wording
/// and by callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Timeout,
    Network,
    Server,
}

/// Every way a submission can end without a prediction.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("Please select an image first")]
    NoImageSelected,
    #[error("Request timed out. The server might be down or not responding.")]
    Timeout,
    #[error("Cannot connect to the server. Please make sure the backend is running at {endpoint}")]
    Unreachable { endpoint: String, detail: String },
    #[error("Server responded with error: {status} {status_text}. {body}")]
    Server {
        status: u16,
        status_text: String,
        body: String,
    },
    #[error("Server returned an unreadable prediction: {0}")]
    MalformedResponse(String),
}

impl PredictError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PredictError::NoImageSelected => ErrorKind::Validation,
            PredictError::Timeout => ErrorKind::Timeout,
            PredictError::Unreachable { .. } => ErrorKind::Network,
            PredictError::Server { .. } | PredictError::MalformedResponse(_) => ErrorKind::Server,
        }
    }
}

/// Transport-level failure: the request never produced an HTTP status.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid endpoint URL {url:?}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Endpoint {0:?} must use http or https")]
    UnsupportedScheme(String),
}
