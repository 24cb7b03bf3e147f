use leptos::ev::{DragEvent, MouseEvent};
use leptos::prelude::*;

use crate::features::kanban::hooks::BoardHandle;
use crate::features::kanban::services::TaskCard;

use super::DRAG_FORMAT;

#[component]
pub fn TaskCardView(card: TaskCard, handle: BoardHandle) -> impl IntoView {
    let TaskCard { task_id, dom_id, title, description, badge, .. } = card;
    let badge_class = format!("due-date {}", badge.css_class());

    let on_drag_start = move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            if let Err(e) = dt.set_data(DRAG_FORMAT, &task_id.to_string()) {
                tracing::warn!("Could not attach task {} to drag: {:?}", task_id, e);
            }
        }
    };

    let on_delete = move |ev: MouseEvent| {
        ev.stop_propagation();
        handle.delete(task_id);
    };

    view! {
        <div class="task-card" id=dom_id draggable="true" on:dragstart=on_drag_start>
            <span class="delete-btn" title="Delete task" on:click=on_delete>"🗑"</span>
            <h3>{title}</h3>
            <p>{description}</p>
            <div class=badge_class>
                <span class="time-icon">"⏰"</span>
                " "
                {badge.label}
            </div>
        </div>
    }
}
