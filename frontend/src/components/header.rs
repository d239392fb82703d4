use super::super::Model;
use yew::prelude::*;

/// Renders the application header and the backend status line.
pub fn render_header(model: &Model) -> Html {
    html! {
        <header class="app-header">
            <h1>{"Cow Lumpy Disease Detection"}</h1>
            <p class="subtitle">{"Upload an image to check if a cow has lumpy disease"}</p>
            { render_backend_status(model) }
        </header>
    }
}

fn render_backend_status(model: &Model) -> Html {
    match &model.backend_status {
        None => html! {
            <p class="backend-status checking">{"Checking prediction service..."}</p>
        },
        Some(Ok(health)) if health.is_ok() => html! {
            <p class="backend-status online">{ &health.message }</p>
        },
        Some(Ok(health)) => html! {
            <p class="backend-status degraded">{ format!("{}: {}", health.status, health.message) }</p>
        },
        Some(Err(e)) => html! {
            <p class="backend-status offline" title={e.to_string()}>
                { format!("Prediction service unavailable at {}", model.controller.config().endpoint()) }
            </p>
        },
    }
}
