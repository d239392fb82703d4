use crate::error::{PredictError, TransportError};
use crate::transport::{RawResponse, Timer};
use futures::future::{Either, select};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::pin;
use std::time::Duration;

const UNREADABLE_BODY: &str = "Unknown error";

/// Races `call` against `timer`. The losing future is dropped, which
/// cancels an in-flight request when the deadline wins.
pub(crate) async fn bounded<F, C>(
    endpoint: &str,
    timeout: Duration,
    timer: &C,
    call: F,
) -> Result<RawResponse, PredictError>
where
    F: Future<Output = Result<RawResponse, TransportError>>,
    C: Timer,
{
    let call = pin!(call);
    let deadline = pin!(timer.sleep(timeout));

    match select(call, deadline).await {
        Either::Left((Ok(response), _)) => Ok(response),
        Either::Left((Err(TransportError(detail)), _)) => {
            log::warn!("Request to {} failed before a response: {}", endpoint, detail);
            Err(PredictError::Unreachable {
                endpoint: endpoint.to_string(),
                detail,
            })
        }
        Either::Right(((), _)) => {
            log::warn!("Request to {} aborted after {:?}", endpoint, timeout);
            Err(PredictError::Timeout)
        }
    }
}

/// Turns a received response into `T`, or the matching server error.
pub(crate) fn decode<T: DeserializeOwned>(response: RawResponse) -> Result<T, PredictError> {
    if !response.is_success() {
        return Err(PredictError::Server {
            status: response.status,
            status_text: response.status_text,
            body: response.body.unwrap_or_else(|| UNREADABLE_BODY.to_string()),
        });
    }

    let body = response
        .body
        .ok_or_else(|| PredictError::MalformedResponse("response body could not be read".into()))?;
    serde_json::from_str(&body).map_err(|e| PredictError::MalformedResponse(e.to_string()))
}
