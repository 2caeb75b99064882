//! Toast stack rendered from the [`NoticeBoard`].

use leptos::*;

use crate::services::NoticeBoard;

#[component]
pub fn Toaster() -> impl IntoView {
    let board = NoticeBoard::use_board();
    let notices = board.notices();

    view! {
        <div class="toaster" role="status">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice: crate::Notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("toast {}", notice.level.css_class())>
                            <div class="toast-body">
                                <div class="toast-title">{notice.title}</div>
                                <div class="toast-description">{notice.description}</div>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| board.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
