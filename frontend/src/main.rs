mod components;
mod config;
mod transport;

use client::{
    HealthResponse, PendingSubmission, PredictError, PredictionResponse, Preview, ReadSequence,
    SelectedImage, UploadPredictController,
};
use gloo_file::File as GlooFile;
use web_sys::DragEvent;
use yew::prelude::*;

pub struct Model {
    controller: UploadPredictController,
    is_dragging: bool,
    reading_file: bool,
    reads: ReadSequence,
    /// Problems with the picked file itself, before the controller sees it.
    notice: Option<String>,
    backend_status: Option<Result<HealthResponse, PredictError>>,
}

pub enum Msg {
    // File selection
    FileChosen(GlooFile),
    ImageLoaded(u64, SelectedImage),
    ReadFailed(u64, String),
    PreviewReady(u64, Preview),
    SetNotice(Option<String>),

    // Prediction
    Submit,
    Settled(PendingSubmission, Result<PredictionResponse, PredictError>),
    BackendChecked(Result<HealthResponse, PredictError>),

    // Input events
    SetDragging(bool),
    HandleDrop(DragEvent),
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let controller = UploadPredictController::new(config::resolve_config());
        log::info!("Prediction endpoint: {}", controller.config().endpoint());

        components::handlers::check_backend_status(ctx, controller.config().clone());

        Self {
            controller,
            is_dragging: false,
            reading_file: false,
            reads: ReadSequence::default(),
            notice: None,
            backend_status: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use components::handlers;

        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::ImageLoaded(token, image) => handlers::handle_image_loaded(self, ctx, token, image),
            Msg::ReadFailed(token, notice) => handlers::handle_read_failed(self, token, notice),
            Msg::PreviewReady(generation, preview) => {
                self.controller.attach_preview(generation, preview)
            }
            Msg::SetNotice(notice) => {
                if notice.is_some() {
                    self.reads.begin();
                }
                self.notice = notice;
                self.reading_file = false;
                true
            }

            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::Settled(pending, outcome) => {
                self.controller.finish(pending, outcome);
                true
            }
            Msg::BackendChecked(status) => {
                self.backend_status = Some(status);
                true
            }

            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { components::header::render_header(self) }

                <main class="main-content">
                    { components::upload_section::render_upload_section(self, ctx) }
                    { components::results::render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"© 2025 Cow Lumpy Disease Detection System"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
