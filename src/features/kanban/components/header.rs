use leptos::prelude::*;

#[component]
pub fn KanbanHeader(form_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <div class="kanban-header-left">
                <h1>"Task Board"</h1>
            </div>
            <div class="kanban-actions">
                <button
                    id="createTaskBtn"
                    class="btn-primary kanban-header-btn"
                    title="Create task"
                    on:click=move |_| form_open.set(true)
                >"🞦"</button>
            </div>
        </header>
    }
}
