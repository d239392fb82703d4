use super::super::{Model, Msg};
use super::preview_area::render_preview_area;
use super::utils::{debounce, first_image_file, render_notice};
use client::view::SubmitButton;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let picked = input.files().as_ref().map(first_image_file);

        input.set_value("");

        match picked {
            Some(Ok(file)) => Msg::FileChosen(file),
            Some(Err(notice)) => Msg::SetNotice(Some(notice)),
            None => Msg::SetNotice(None),
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    let trigger_file_input = Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("image-upload"));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    let button = SubmitButton::from_controller(&model.controller);

    html! {
        <div class="upload-section">
            <input
                type="file"
                id="image-upload"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, move || trigger_file_input.emit(()))}
            >
                { render_preview_area(model) }
            </div>

            { render_notice(model) }

            <button
                class={classes!("analyze-btn", model.controller.is_submitting().then_some("processing"))}
                onclick={link.callback(|_| Msg::Submit)}
                disabled={!button.enabled}
            >
                { button.label }
            </button>
        </div>
    }
}
