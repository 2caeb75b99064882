use leptos::*;
use leptos_router::use_location;

use crate::{BRAND_INITIALS, CHECKER_PATH, HOME_PATH};
use prepfoundry::config::APP_NAME;

const LINKS: [(&str, &str); 2] = [(HOME_PATH, "Home"), (CHECKER_PATH, "Resume Checker")];

/// Listed but not navigable from the menu yet.
const DISABLED_LINK: &str = "Future Features";

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let pathname = use_location().pathname;

    let is_active = move |path: &str| pathname.with(|current| current == path);
    let close_menu = move |_| set_menu_open.set(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let links = move |class: &'static str| {
        LINKS
            .iter()
            .map(move |&(path, label)| {
                view! {
                    <a
                        href=path
                        class=class
                        class:active=move || is_active(path)
                        on:click=close_menu
                    >
                        {label}
                    </a>
                }
                .into_view()
            })
            .chain(std::iter::once(
                view! {
                    <span class=format!("{class} nav-disabled") aria-disabled="true">
                        {DISABLED_LINK}
                    </span>
                }
                .into_view(),
            ))
            .collect_view()
    };

    view! {
        <header class="navbar">
            <div class="container navbar-inner">
                <a href=HOME_PATH class="brand" on:click=close_menu>
                    <span class="brand-mark">{BRAND_INITIALS}</span>
                    <span class="brand-name">{APP_NAME}</span>
                </a>

                <nav class="nav-desktop">
                    {links("nav-link")}
                    <a href=CHECKER_PATH class="btn btn-primary btn-sm">"Try Now"</a>
                </nav>

                <button
                    class="menu-toggle"
                    aria-label=move || if menu_open.get() { "Close Menu" } else { "Open Menu" }
                    on:click=toggle_menu
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get() fallback=|| view! {}>
                <nav class="nav-mobile">
                    {links("nav-link-mobile")}
                    <a href=CHECKER_PATH class="btn btn-primary btn-block" on:click=close_menu>
                        "Try Now"
                    </a>
                </nav>
            </Show>
        </header>
    }
}
