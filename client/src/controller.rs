//! The upload-and-predict interaction flow.
//!
//! ```text
//! Idle --select_image--> Idle        (image replaced, prediction/error cleared)
//! Idle --submit, no image--> Idle    (validation error)
//! Idle --submit--> Submitting --settled--> Idle (prediction xor error)
//! ```
//!
//! Hosts that cannot hold `&mut` across an await (a UI event loop) use
//! [`UploadPredictController::begin_submit`], [`execute`] and
//! [`UploadPredictController::finish`]; everything else calls
//! [`UploadPredictController::submit`].

use crate::call::{bounded, decode};
use crate::config::ClientConfig;
use crate::error::PredictError;
use crate::image::{Preview, SelectedImage};
use crate::transport::{PredictTransport, Timer};
use shared::PredictionResponse;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Submitting,
}

/// Everything one submission needs, detached from the controller.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    image: SelectedImage,
    endpoint: String,
    timeout: Duration,
    generation: u64,
}

impl PendingSubmission {
    pub fn image(&self) -> &SelectedImage {
        &self.image
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub enum BeginSubmit {
    Started(PendingSubmission),
    /// A submission is already in flight; nothing changed.
    Busy,
    /// No image selected; the validation error is now the controller's error.
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Settled(Result<PredictionResponse, PredictError>),
    Busy,
    /// The image changed while the request was in flight.
    Discarded,
}

#[derive(Debug)]
pub struct UploadPredictController {
    config: ClientConfig,
    state: RequestState,
    selected: Option<SelectedImage>,
    preview: Option<Preview>,
    prediction: Option<PredictionResponse>,
    error: Option<PredictError>,
    generation: u64,
}

impl UploadPredictController {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            state: RequestState::Idle,
            selected: None,
            preview: None,
            prediction: None,
            error: None,
            generation: 0,
        }
    }

    /// Replaces the selection and returns its generation, which the caller
    /// hands back to [`Self::attach_preview`] once the preview is ready.
    pub fn select_image(&mut self, image: SelectedImage) -> u64 {
        self.generation += 1;
        log::info!(
            "Selected {} ({}, {} bytes) as selection {}",
            image.name(),
            image.media_type(),
            image.len(),
            self.generation
        );
        self.selected = Some(image);
        self.preview = None;
        self.prediction = None;
        self.error = None;
        self.generation
    }

    /// Stores `preview` if it belongs to the current selection.
    pub fn attach_preview(&mut self, generation: u64, preview: Preview) -> bool {
        if generation != self.generation || self.selected.is_none() {
            log::debug!(
                "Dropping preview for selection {} (current is {})",
                generation,
                self.generation
            );
            return false;
        }
        self.preview = Some(preview);
        true
    }

    pub fn begin_submit(&mut self) -> BeginSubmit {
        if self.state == RequestState::Submitting {
            log::debug!("Submit ignored, a request is already in flight");
            return BeginSubmit::Busy;
        }

        let Some(image) = self.selected.clone() else {
            self.error = Some(PredictError::NoImageSelected);
            return BeginSubmit::Rejected;
        };

        self.state = RequestState::Submitting;
        self.error = None;
        self.prediction = None;

        BeginSubmit::Started(PendingSubmission {
            image,
            endpoint: self.config.endpoint().to_string(),
            timeout: self.config.timeout(),
            generation: self.generation,
        })
    }

    /// Applies the outcome of `pending`. Always leaves the controller Idle.
    pub fn finish(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<PredictionResponse, PredictError>,
    ) -> SubmitOutcome {
        self.state = RequestState::Idle;

        if pending.generation != self.generation {
            log::warn!(
                "Discarding outcome for selection {}, image was replaced (now {})",
                pending.generation,
                self.generation
            );
            return SubmitOutcome::Discarded;
        }

        match &outcome {
            Ok(prediction) => {
                log::info!(
                    "Prediction for selection {}: {} ({:.3})",
                    pending.generation,
                    prediction.result,
                    prediction.probability
                );
                self.prediction = Some(prediction.clone());
                self.error = None;
            }
            Err(err) => {
                log::error!("Prediction for selection {} failed: {}", pending.generation, err);
                self.prediction = None;
                self.error = Some(err.clone());
            }
        }
        SubmitOutcome::Settled(outcome)
    }

    pub async fn submit<T, C>(&mut self, transport: &T, timer: &C) -> SubmitOutcome
    where
        T: PredictTransport,
        C: Timer,
    {
        match self.begin_submit() {
            BeginSubmit::Busy => SubmitOutcome::Busy,
            BeginSubmit::Rejected => SubmitOutcome::Settled(Err(PredictError::NoImageSelected)),
            BeginSubmit::Started(pending) => {
                let outcome = execute(&pending, transport, timer).await;
                self.finish(pending, outcome)
            }
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn request_state(&self) -> RequestState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == RequestState::Submitting
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_submitting()
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn prediction(&self) -> Option<&PredictionResponse> {
        self.prediction.as_ref()
    }

    pub fn error(&self) -> Option<&PredictError> {
        self.error.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Performs the bounded request for `pending`. Single attempt, no retry.
pub async fn execute<T, C>(
    pending: &PendingSubmission,
    transport: &T,
    timer: &C,
) -> Result<PredictionResponse, PredictError>
where
    T: PredictTransport,
    C: Timer,
{
    log::info!(
        "Sending {} to {} (selection {}, timeout {:?})",
        pending.image.name(),
        pending.endpoint,
        pending.generation,
        pending.timeout
    );

    let response = bounded(
        &pending.endpoint,
        pending.timeout,
        timer,
        transport.post_image(&pending.endpoint, &pending.image),
    )
    .await?;

    let prediction: PredictionResponse = decode(response)?;
    if !(0.0..=1.0).contains(&prediction.probability) {
        return Err(PredictError::MalformedResponse(format!(
            "probability {} is outside [0, 1]",
            prediction.probability
        )));
    }
    Ok(prediction)
}
