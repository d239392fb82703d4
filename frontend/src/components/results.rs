use super::super::Model;
use client::view::{DISEASE_INFO, PLACEHOLDER_TEXT, ResultPanel, ResultView};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let body = match ResultPanel::from_controller(&model.controller) {
        ResultPanel::Placeholder => html! {
            <div class="no-results-message">{ PLACEHOLDER_TEXT }</div>
        },
        ResultPanel::Error(message) => html! {
            <div class="error-message">
                <p>{ message }</p>
            </div>
        },
        ResultPanel::Result(view) => render_prediction(&view),
    };

    html! {
        <section class="results-section">
            <h2>{"Results"}</h2>
            { body }
        </section>
    }
}

fn render_prediction(view: &ResultView) -> Html {
    html! {
        <div class="results-container">
            <div class={classes!("result-card", view.variant.css_class())}>
                <h3>{ &view.label }</h3>
                <p>{ format!("Confidence: {}", view.confidence) }</p>
            </div>

            <div class="info-section">
                <h3>{"What is Lumpy Disease?"}</h3>
                <p>{ DISEASE_INFO }</p>
            </div>

            if !view.remediation.is_empty() {
                <div class="alert-box">
                    <h3>{"Recommended Actions:"}</h3>
                    <ul>
                        { for view.remediation.iter().map(|step| html! { <li>{ *step }</li> }) }
                    </ul>
                </div>
            }
        </div>
    }
}
