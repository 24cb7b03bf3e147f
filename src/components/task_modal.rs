use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::core::models::TaskStatus;
use crate::features::kanban::services::TaskForm;

#[component]
pub fn TaskModal(
    form_open: RwSignal<bool>,
    min_due: RwSignal<String>,
    on_submit: Box<dyn Fn(TaskForm) + 'static>,
) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TaskStatus::Pending.as_str().to_string());
    let (due_date, set_due_date) = signal(String::new());

    let reset_form = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_status.set(TaskStatus::Pending.as_str().to_string());
        set_due_date.set(String::new());
    };

    // The controller closes the form by flipping `form_open`; the dialog
    // follows the signal and clears its fields whenever it closes.
    Effect::new(move |_| {
        let open = form_open.get();
        if let Some(dialog) = dialog_ref.get() {
            if open {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else {
                dialog.close();
                reset_form();
            }
        }
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();
        on_submit(TaskForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            status: status.get_untracked(),
            due_date: due_date.get_untracked(),
        });
    };

    let close_modal = move |_| form_open.set(false);

    view! {
        <dialog node_ref=dialog_ref id="taskFormModal" class="task-modal" on:close=move |_| form_open.set(false)>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"CREATE TASK"</h3>
                    <button type="button" id="closeModalBtn" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form id="taskForm" on:submit=handle_submit>
                    <div class="form-group">
                        <label for="title">"TITLE"</label>
                        <input
                            id="title"
                            type="text"
                            placeholder="Task title..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="description">"DESCRIPTION"</label>
                        <textarea
                            id="description"
                            placeholder="Task description..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="status">"STATUS"</label>
                        <select
                            id="status"
                            on:change=move |ev| set_status.set(event_target_value(&ev))
                            prop:value=move || status.get()
                        >
                            {TaskStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="dueDate">"DUE DATE"</label>
                        <input
                            id="dueDate"
                            type="datetime-local"
                            min=move || min_due.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                            prop:value=move || due_date.get()
                            required
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" id="cancelBtn" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"CREATE"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
