use crate::call::{bounded, decode};
use crate::config::ClientConfig;
use crate::error::PredictError;
use crate::transport::{PredictTransport, Timer};
use shared::HealthResponse;

/// Asks the backend root whether the prediction service is up.
///
/// Uses the same deadline and error mapping as a submission.
pub async fn check_backend<T, C>(
    config: &ClientConfig,
    transport: &T,
    timer: &C,
) -> Result<HealthResponse, PredictError>
where
    T: PredictTransport,
    C: Timer,
{
    let url = config.health_url();
    log::info!("Checking backend status at {}", url);

    let response = bounded(&url, config.timeout(), timer, transport.get(&url)).await?;
    let health: HealthResponse = decode(response)?;

    if health.is_ok() {
        log::info!("Backend reports: {}", health.message);
    } else {
        log::warn!("Backend status {:?}: {}", health.status, health.message);
    }
    Ok(health)
}
