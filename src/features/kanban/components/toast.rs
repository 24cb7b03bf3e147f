use leptos::prelude::*;

#[component]
pub fn Toast(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <div id="toast" class="toast" class:show=move || message.with(|m| m.is_some())>
            <span id="toast-message">{move || message.get().unwrap_or_default()}</span>
        </div>
    }
}
