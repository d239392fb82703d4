use super::super::{Model, Msg};
use super::utils::first_image_file;
use crate::transport::{GlooTimer, GlooTransport};
use client::{BeginSubmit, ClientConfig, Preview, SelectedImage, check_backend, execute};
use gloo_file::File as GlooFile;
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    let name = file.name();
    let media_type = file.raw_mime_type();

    // Any newer choice, valid or not, supersedes reads still in flight.
    let token = model.reads.begin();

    if !media_type.starts_with("image/") {
        log::warn!("Skipping non-image file: {}", name);
        model.notice = Some(format!("Skipped non-image file: {}", name));
        model.reading_file = false;
        return true;
    }

    model.notice = None;
    model.reading_file = true;

    let link = ctx.link().clone();
    spawn_local(async move {
        match gloo_file::futures::read_as_bytes(&file).await {
            Ok(bytes) => {
                link.send_message(Msg::ImageLoaded(token, SelectedImage::new(name, media_type, bytes)))
            }
            Err(e) => {
                log::error!("Failed to read {}: {}", name, e);
                link.send_message(Msg::ReadFailed(token, format!("Could not read {}: {}", name, e)))
            }
        }
    });

    true
}

pub fn handle_image_loaded(model: &mut Model, ctx: &Context<Model>, token: u64, image: SelectedImage) -> bool {
    if !model.reads.is_current(token) {
        log::debug!("Dropping superseded read of {}", image.name());
        return false;
    }

    model.reading_file = false;
    let generation = model.controller.select_image(image.clone());

    let link = ctx.link().clone();
    spawn_local(async move {
        let preview = Preview::encode(&image);
        link.send_message(Msg::PreviewReady(generation, preview));
    });

    true
}

pub fn handle_read_failed(model: &mut Model, token: u64, notice: String) -> bool {
    if !model.reads.is_current(token) {
        return false;
    }
    model.reading_file = false;
    model.notice = Some(notice);
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.controller.begin_submit() {
        BeginSubmit::Started(pending) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = execute(&pending, &GlooTransport, &GlooTimer).await;
                link.send_message(Msg::Settled(pending, outcome));
            });
            true
        }
        BeginSubmit::Rejected => true,
        BeginSubmit::Busy => false,
    }
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let file_list = event.data_transfer().and_then(|dt| dt.files());
    match file_list.as_ref().map(first_image_file) {
        Some(Ok(file)) => ctx.link().send_message(Msg::FileChosen(file)),
        Some(Err(notice)) => {
            model.reads.begin();
            model.reading_file = false;
            model.notice = Some(notice);
        }
        None => {}
    }

    true
}

pub fn check_backend_status(ctx: &Context<Model>, config: ClientConfig) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let status = check_backend(&config, &GlooTransport, &GlooTimer).await;
        link.send_message(Msg::BackendChecked(status));
    });
}
