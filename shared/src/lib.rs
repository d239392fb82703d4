use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{AsRefStr, Display, EnumString};

/// Multipart part name the prediction endpoint reads the upload from.
pub const IMAGE_FIELD: &str = "image";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, AsRefStr)]
pub enum ClassLabel {
    Infected,
    Healthy,
    #[serde(rename = "Not Infected")]
    #[strum(serialize = "Not Infected")]
    NotInfected,
}

impl ClassLabel {
    pub fn is_infected(self) -> bool {
        self == ClassLabel::Infected
    }
}

/// Body of a successful `POST /predict`.
///
/// Anything the backend sends besides `result` and `probability` is kept
/// verbatim in `extra` and never inspected.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResponse {
    pub result: ClassLabel,
    pub probability: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `GET /` on the inference backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub model_path: Option<String>,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "success"
    }
}
