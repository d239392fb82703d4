use crate::error::TransportError;
use crate::image::SelectedImage;
use std::future::Future;
use std::time::Duration;

/// What came back from the backend once a status line was received.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    /// `None` when the body could not be read.
    pub body: Option<String>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP seam between the controller and the platform's client.
///
/// Implementations perform a single attempt and never retry. Dropping the
/// returned future must abort the request.
#[allow(async_fn_in_trait)]
pub trait PredictTransport {
    /// POSTs `image` as multipart form data under [`shared::IMAGE_FIELD`].
    async fn post_image(&self, url: &str, image: &SelectedImage) -> Result<RawResponse, TransportError>;

    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// Source of the deadline used to bound a request.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
