use crate::error::TransportError;
use crate::image::SelectedImage;
use crate::transport::{PredictTransport, RawResponse, Timer};
use reqwest::multipart::{Form, Part};
use std::future::Future;
use std::time::Duration;

const UNKNOWN_STATUS: &str = "Unknown Status";

/// Native transport over `reqwest`.
///
/// No client-level timeout is configured; the deadline is owned by the
/// caller's [`Timer`].
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A media type reqwest refuses is not a reason to fail the upload; the
/// part is sent without one and the backend sniffs the bytes.
fn image_part(image: &SelectedImage) -> Part {
    let part = || Part::bytes(image.bytes().to_vec()).file_name(image.name().to_string());
    part().mime_str(image.media_type()).unwrap_or_else(|e| {
        log::warn!("Sending {} without media type {:?}: {}", image.name(), image.media_type(), e);
        part()
    })
}

async fn into_raw(response: reqwest::Response) -> RawResponse {
    let status = response.status();
    RawResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or(UNKNOWN_STATUS).to_string(),
        body: response.text().await.ok(),
    }
}

impl PredictTransport for ReqwestTransport {
    async fn post_image(&self, url: &str, image: &SelectedImage) -> Result<RawResponse, TransportError> {
        let form = Form::new().part(shared::IMAGE_FIELD, image_part(image));

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(into_raw(response).await)
    }

    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(into_raw(response).await)
    }
}

#[derive(Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}
