//! Log Panel Component
//!
//! Collapsible view of the logger's recent lines, shown with `?debug`.

use leptos::prelude::*;
use web_logger::LogHandle;

#[component]
pub fn LogPanel(logs: LogHandle) -> impl IntoView {
    let (lines, set_lines) = signal(logs.recent_lines());
    let refresh = move |_| set_lines.set(logs.recent_lines());

    view! {
        <details class="log-panel">
            <summary>"Recent log"</summary>
            <button type="button" class="log-refresh" on:click=refresh>"Refresh"</button>
            <pre class="log-lines">{move || lines.get().join("\n")}</pre>
        </details>
    }
}
