use leptos::prelude::*;

use crate::components::TaskModal;
use crate::features::kanban::hooks::BoardHook;
use crate::features::kanban::services::TaskForm;

use super::{KanbanBoard, KanbanColumn, KanbanHeader, Toast};

#[component]
pub fn KanbanPage(hook: BoardHook) -> impl IntoView {
    let BoardHook { board, toast, columns, handle } = hook;

    let create_task = Box::new(move |form: TaskForm| handle.create(form)) as Box<dyn Fn(TaskForm) + 'static>;

    view! {
        <div class="kanban-page">
            <div class="main-content">
                <KanbanHeader form_open=board.form_open />
                <KanbanBoard>
                    {columns
                        .columns()
                        .map(|(status, column_id)| {
                            view! { <KanbanColumn status=status column_id=column_id board=board handle=handle /> }
                        })
                        .collect::<Vec<_>>()}
                </KanbanBoard>
            </div>
            <TaskModal form_open=board.form_open min_due=board.min_due on_submit=create_task />
            <Toast message=toast />
        </div>
    }
}
