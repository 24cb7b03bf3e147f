use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::BoardConfig;
use crate::core::clock::SystemClock;
use crate::core::columns::ColumnTable;
use crate::core::models::TaskId;
use crate::core::services::HttpTaskRepository;
use crate::error::BoardError;
use crate::features::kanban::services::{
    BoardContext, BoardController, DueBadge, RenderTarget, TaskCard, TaskForm, UserPrompt,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCard {
    pub column_id: &'static str,
    pub card: TaskCard,
}

/// `RenderTarget` backed by Leptos signals; the column components read from
/// these.
#[derive(Clone, Copy)]
pub struct SignalBoard {
    pub cards: RwSignal<Vec<PlacedCard>>,
    pub min_due: RwSignal<String>,
    pub form_open: RwSignal<bool>,
}

impl SignalBoard {
    pub fn new() -> Self {
        Self {
            cards: RwSignal::new(Vec::new()),
            min_due: RwSignal::new(String::new()),
            form_open: RwSignal::new(false),
        }
    }

    pub fn cards_in(&self, column_id: &str) -> Vec<TaskCard> {
        self.cards.with(|cards| {
            cards
                .iter()
                .filter(|placed| placed.column_id == column_id)
                .map(|placed| placed.card.clone())
                .collect()
        })
    }

    pub fn count_in(&self, column_id: &str) -> usize {
        self.cards
            .with(|cards| cards.iter().filter(|placed| placed.column_id == column_id).count())
    }
}

impl Default for SignalBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for SignalBoard {
    fn place(&self, card: TaskCard, column_id: &'static str) {
        self.cards.update(|cards| {
            cards.retain(|placed| placed.card.task_id != card.task_id);
            cards.push(PlacedCard { column_id, card });
        });
    }

    fn remove(&self, id: TaskId) -> bool {
        let mut removed = false;
        self.cards.update(|cards| {
            let before = cards.len();
            cards.retain(|placed| placed.card.task_id != id);
            removed = cards.len() != before;
        });
        removed
    }

    fn update_badge(&self, id: TaskId, badge: DueBadge) {
        self.cards.update(|cards| {
            if let Some(placed) = cards.iter_mut().find(|placed| placed.card.task_id == id) {
                placed.card.badge = badge;
            }
        });
    }

    fn set_min_due(&self, value: String) {
        self.min_due.set(value);
    }

    fn close_create_form(&self) {
        self.form_open.set(false);
    }
}

/// `window.alert`/`window.confirm` plus the toast signal.
#[derive(Clone, Copy)]
pub struct BrowserPrompt {
    message: RwSignal<Option<String>>,
    shown: RwSignal<u64>,
    duration: Duration,
}

impl BrowserPrompt {
    pub fn new(duration: Duration) -> Self {
        Self {
            message: RwSignal::new(None),
            shown: RwSignal::new(0),
            duration,
        }
    }

    pub fn message(&self) -> RwSignal<Option<String>> {
        self.message
    }
}

impl UserPrompt for BrowserPrompt {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .map(|w| w.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }

    fn toast(&self, message: &str) {
        let shown = self.shown.get_untracked() + 1;
        self.shown.set(shown);
        self.message.set(Some(message.to_string()));

        // Only the latest toast clears itself
        let (message, counter, duration) = (self.message, self.shown, self.duration);
        spawn_local(async move {
            gloo_timers::future::sleep(duration).await;
            if counter.get_untracked() == shown {
                message.set(None);
            }
        });
    }
}

/// Copyable handle the components use to reach the controller.
#[derive(Clone, Copy)]
pub struct BoardHandle {
    controller: StoredValue<Rc<BoardController>, LocalStorage>,
}

impl BoardHandle {
    fn spawn<F, Fut>(&self, run: F)
    where
        F: FnOnce(Rc<BoardController>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        match self.controller.try_with_value(Rc::clone) {
            Some(controller) => spawn_local(run(controller)),
            None => tracing::warn!("Board controller is gone, ignoring action"),
        }
    }

    pub fn drop_task(&self, raw_task_id: String, column_id: &'static str) {
        self.spawn(move |controller| async move {
            controller.drop_task(&raw_task_id, column_id).await;
        });
    }

    pub fn delete(&self, id: TaskId) {
        self.spawn(move |controller| async move {
            controller.delete(id).await;
        });
    }

    pub fn create(&self, form: TaskForm) {
        self.spawn(move |controller| async move {
            controller.create(form).await;
        });
    }

    pub fn stop(&self) {
        if let Some(controller) = self.controller.try_with_value(Rc::clone) {
            controller.stop();
        }
    }
}

#[derive(Clone)]
pub struct BoardHook {
    pub board: SignalBoard,
    pub toast: RwSignal<Option<String>>,
    pub columns: ColumnTable,
    pub handle: BoardHandle,
}

/// Builds the controller over the browser collaborators, starts it, and
/// stops it when the owning component is cleaned up.
pub fn use_board(config: BoardConfig) -> Result<BoardHook, BoardError> {
    let config = config.validate()?;
    let board = SignalBoard::new();
    let prompt = BrowserPrompt::new(config.toast_duration);
    let toast = prompt.message();
    let repository = HttpTaskRepository::from_config(&config);
    tracing::info!("Task API at {}", repository.base_url());

    let controller = Rc::new(BoardController::new(BoardContext {
        config,
        repository: Rc::new(repository),
        view: Rc::new(board),
        prompt: Rc::new(prompt),
        clock: Rc::new(SystemClock),
    })?);
    let columns = controller.columns().clone();

    {
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            controller.start().await;
        });
    }

    let handle = BoardHandle {
        controller: StoredValue::new_local(controller),
    };
    on_cleanup(move || handle.stop());

    Ok(BoardHook {
        board,
        toast,
        columns,
        handle,
    })
}
