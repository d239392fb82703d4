use client::ClientConfig;
use web_sys::UrlSearchParams;

/// `?endpoint=` on the page URL wins over the endpoint baked in at build
/// time through `PREDICT_ENDPOINT`.
pub fn resolve_config() -> ClientConfig {
    let from_query = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("endpoint"));
    let endpoint = from_query.or_else(|| option_env!("PREDICT_ENDPOINT").map(str::to_string));

    match ClientConfig::from_lookup(|_| endpoint.clone()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; falling back to the default endpoint", e);
            ClientConfig::default()
        }
    }
}
