use super::super::Model;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

/// Only one image is analysed at a time; extra files are ignored.
pub fn first_image_file(file_list: &FileList) -> Result<GlooFile, String> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .find(|file| file.type_().starts_with("image/"))
        .map(GlooFile::from)
        .ok_or_else(|| "No valid image file selected.".to_string())
}

pub fn render_notice(model: &Model) -> Html {
    if let Some(notice) = &model.notice {
        html! {
            <div class="notice-message">
                <p>{ notice }</p>
            </div>
        }
    } else {
        html! {}
    }
}
