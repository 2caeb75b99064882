use leptos::*;
use prepfoundry::SelectedFile;

/// Chosen file with the buttons to analyze it or start over.
#[component]
pub fn SelectedFileCard(
    file: SelectedFile,
    #[prop(into)] on_analyze: Callback<()>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card card-narrow fade-in">
            <div class="file-row">
                <div class="file-info">
                    <div class="icon-circle small">"📄"</div>
                    <div>
                        <p class="file-name">{file.name().to_string()}</p>
                        <p class="muted small">
                            {format!("{} · {}", file.display_size(), file.kind().label())}
                        </p>
                    </div>
                </div>
                <button class="btn btn-ghost btn-sm" aria-label="Remove file" on:click=move |_| on_reset.call(())>
                    "✕"
                </button>
            </div>

            <div class="button-row">
                <button class="btn btn-primary grow" on:click=move |_| on_analyze.call(())>
                    "📊 Analyze Resume"
                </button>
                <button class="btn btn-outline" on:click=move |_| on_reset.call(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
