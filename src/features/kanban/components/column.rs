use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::models::TaskStatus;
use crate::features::kanban::hooks::{BoardHandle, SignalBoard};

use super::task_card::TaskCardView;
use super::DRAG_FORMAT;

#[component]
pub fn KanbanColumn(
    status: TaskStatus,
    column_id: &'static str,
    board: SignalBoard,
    handle: BoardHandle,
) -> impl IntoView {
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        match ev.data_transfer().and_then(|dt| dt.get_data(DRAG_FORMAT).ok()) {
            Some(raw_task_id) if !raw_task_id.is_empty() => handle.drop_task(raw_task_id, column_id),
            _ => tracing::warn!("Drop on {} carried no task id", column_id),
        }
    };

    view! {
        <div
            class="kanban-column column"
            id=column_id
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=on_drop
        >
            <div class="column-header">
                <h3>{status.as_str()}</h3>
                <span class="task-count">{move || board.count_in(column_id)}</span>
            </div>
            <div class="column-content">
                {move || {
                    board
                        .cards_in(column_id)
                        .into_iter()
                        .map(|card| view! { <TaskCardView card=card handle=handle /> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
