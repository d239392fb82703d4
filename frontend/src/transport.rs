use client::{PredictTransport, RawResponse, SelectedImage, Timer, TransportError};
use gloo_file::Blob;
use gloo_net::http::{Request, Response};
use std::future::Future;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, FormData};

/// Browser transport over `fetch`.
#[derive(Clone, Copy, Default)]
pub struct GlooTransport;

#[derive(Clone, Copy, Default)]
pub struct GlooTimer;

/// Aborts the underlying fetch when the request future is dropped.
struct AbortOnDrop(AbortController);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

fn js_err(context: &str, err: JsValue) -> TransportError {
    TransportError(format!("{}: {:?}", context, err))
}

async fn into_raw(response: Response) -> RawResponse {
    RawResponse {
        status: response.status(),
        status_text: response.status_text(),
        body: response.text().await.ok(),
    }
}

impl PredictTransport for GlooTransport {
    async fn post_image(&self, url: &str, image: &SelectedImage) -> Result<RawResponse, TransportError> {
        let form = FormData::new().map_err(|e| js_err("FormData", e))?;
        let blob = Blob::new_with_options(image.bytes(), Some(image.media_type()));
        form.append_with_blob_and_filename(shared::IMAGE_FIELD, blob.as_ref(), image.name())
            .map_err(|e| js_err("FormData.append", e))?;

        let abort = AbortOnDrop(AbortController::new().map_err(|e| js_err("AbortController", e))?);
        let request = Request::post(url)
            .abort_signal(Some(&abort.0.signal()))
            .body(form)
            .map_err(|e| TransportError(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(into_raw(response).await)
    }

    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let abort = AbortOnDrop(AbortController::new().map_err(|e| js_err("AbortController", e))?);
        let response = Request::get(url)
            .abort_signal(Some(&abort.0.signal()))
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(into_raw(response).await)
    }
}

impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}
