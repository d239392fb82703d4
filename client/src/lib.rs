mod call;
pub mod config;
pub mod controller;
pub mod error;
pub mod health;
pub mod image;
pub mod transport;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod http;

pub use config::ClientConfig;
pub use controller::{
    BeginSubmit, PendingSubmission, RequestState, SubmitOutcome, UploadPredictController, execute,
};
pub use error::{ConfigError, ErrorKind, PredictError, TransportError};
pub use health::check_backend;
pub use image::{Preview, ReadSequence, SelectedImage};
pub use transport::{PredictTransport, RawResponse, Timer};
pub use shared::{ClassLabel, HealthResponse, PredictionResponse};
