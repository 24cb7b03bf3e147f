use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::features::kanban::{use_board, KanbanPage};

#[component]
pub fn App() -> impl IntoView {
    let board = use_board(BoardConfig::from_build_env());

    view! {
        <main class="app">
            {match board {
                Ok(hook) => view! { <KanbanPage hook=hook /> }.into_any(),
                Err(e) => {
                    tracing::error!("Board failed to start: {}", e);
                    view! { <div class="board-error">{format!("Board failed to start: {e}")}</div> }
                        .into_any()
                }
            }}
        </main>
    }
}
