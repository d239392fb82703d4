use super::super::Model;
use yew::prelude::*;

pub fn render_preview_area(model: &Model) -> Html {
    if model.reading_file {
        return html! {
            <div class="loading-preview">
                <p>{"Loading preview..."}</p>
            </div>
        };
    }

    let Some(image) = model.controller.selected() else {
        return html! {
            <div class="upload-placeholder">
                <p class="upload-text">{"Click to upload an image"}</p>
                <p class="file-types">{"PNG, JPG, JPEG up to 10MB"}</p>
            </div>
        };
    };

    match model.controller.preview() {
        Some(preview) => html! {
            <div class="preview-container" title={image.name().to_string()}>
                <img id="image-preview" src={preview.as_str().to_string()} alt="Preview" />
                <div class="preview-overlay">
                    <span class="change-image">{"Change Image"}</span>
                </div>
            </div>
        },
        None => html! {
            <div class="loading-preview">
                <p>{ format!("Preparing preview of {}...", image.name()) }</p>
            </div>
        },
    }
}
