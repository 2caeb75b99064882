//! Resume drop zone with drag & drop and click-to-browse.
//!
//! Emits a [`FileCandidate`] for the first file picked or dropped; type
//! validation happens in the workflow.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::services::{candidate_from_file, first_file};
use crate::SUPPORTED_FORMATS_HINT;
use prepfoundry::config::ACCEPTED_EXTENSIONS;
use prepfoundry::FileCandidate;

#[component]
pub fn UploadZone(#[prop(into)] on_file: Callback<FileCandidate>) -> impl IntoView {
    let (is_dragging, set_is_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = first_file(input.files()) {
            on_file.call(candidate_from_file(&file));
        }
        // Clear so picking the same file again still fires `change`.
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_drag_leave = move |_: DragEvent| set_is_dragging.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        let files = ev.data_transfer().and_then(|dt| dt.files());
        if let Some(file) = first_file(files) {
            on_file.call(candidate_from_file(&file));
        }
    };

    let open_file_selector = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div class="card card-narrow">
            <div
                class="upload-zone"
                class:dragging=move || is_dragging.get()
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=open_file_selector
            >
                <input
                    type="file"
                    node_ref=file_input
                    accept=ACCEPTED_EXTENSIONS
                    class="hidden"
                    on:change=on_file_change
                    on:click=|ev| ev.stop_propagation()
                />
                <div class="icon-circle">"📤"</div>
                <h3 class="upload-title">"Upload your resume"</h3>
                <p class="upload-hint">"Drag and drop your file here, or click to browse"</p>
                <p class="upload-hint small">{SUPPORTED_FORMATS_HINT}</p>
            </div>
        </div>
    }
}
