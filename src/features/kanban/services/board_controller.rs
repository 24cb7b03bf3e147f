//! Board orchestration: initial load, drag-and-drop status changes, create
//! and delete flows, and the minute-aligned refresh.
//!
//! Every mutation waits for the backend before touching the board, so a
//! failed call leaves the cards exactly as they were.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use crate::config::BoardConfig;
use crate::core::clock::Clock;
use crate::core::columns::ColumnTable;
use crate::core::models::{Task, TaskId, TaskStatus};
use crate::core::services::TaskRepository;
use crate::error::BoardError;

use super::refresh::{RefreshCycle, RefreshSchedule};
use super::render_target::{RenderTarget, UserPrompt};
use super::renderer::{DueBadge, TaskCardRenderer};
use super::task_form::{format_datetime_local, TaskForm};

pub const FETCH_FAILED: &str = "An error occurred while fetching tasks.";
pub const CREATE_FAILED: &str = "Error creating task";
pub const UPDATE_FAILED: &str = "Error updating task status";
pub const DELETE_FAILED: &str = "Error deleting task";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this task?";
pub const TASK_CREATED: &str = "Task created successfully!";
pub const TASK_DELETED: &str = "Task deleted successfully!";

/// Collaborators handed to the controller at construction.
pub struct BoardContext {
    pub config: BoardConfig,
    pub repository: Rc<dyn TaskRepository>,
    pub view: Rc<dyn RenderTarget>,
    pub prompt: Rc<dyn UserPrompt>,
    pub clock: Rc<dyn Clock>,
}

pub struct BoardController {
    config: BoardConfig,
    repository: Rc<dyn TaskRepository>,
    view: Rc<dyn RenderTarget>,
    prompt: Rc<dyn UserPrompt>,
    clock: Rc<dyn Clock>,
    renderer: TaskCardRenderer,
    // Tasks with a card on the board, as last confirmed by the backend
    tasks: RefCell<BTreeMap<TaskId, Task>>,
    dropping: RefCell<HashSet<TaskId>>,
    refresh: RefCell<Option<RefreshCycle>>,
}

// Marks a task as having a drop in flight until dropped.
struct InFlight<'a> {
    set: &'a RefCell<HashSet<TaskId>>,
    id: TaskId,
}

impl<'a> InFlight<'a> {
    fn claim(set: &'a RefCell<HashSet<TaskId>>, id: TaskId) -> Option<Self> {
        if set.borrow_mut().insert(id) {
            Some(Self { set, id })
        } else {
            None
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.set.borrow_mut().remove(&self.id);
    }
}

impl BoardController {
    pub fn new(context: BoardContext) -> Result<Self, BoardError> {
        Self::with_columns(context, ColumnTable::default())
    }

    pub fn with_columns(context: BoardContext, columns: ColumnTable) -> Result<Self, BoardError> {
        columns.validate()?;
        let renderer = TaskCardRenderer::new(context.config.display_zone, columns);
        Ok(Self {
            config: context.config,
            repository: context.repository,
            view: context.view,
            prompt: context.prompt,
            clock: context.clock,
            renderer,
            tasks: RefCell::new(BTreeMap::new()),
            dropping: RefCell::new(HashSet::new()),
            refresh: RefCell::new(None),
        })
    }

    pub fn columns(&self) -> &ColumnTable {
        self.renderer.columns()
    }

    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.tasks.borrow().get(&id).cloned()
    }

    /// Loads the board, then keeps it fresh until [`stop`](Self::stop).
    pub async fn start(self: &Rc<Self>) {
        self.load().await;
        self.start_refresh();
    }

    pub fn start_refresh(self: &Rc<Self>) {
        if self.is_refreshing() {
            return;
        }
        let schedule = RefreshSchedule::new(self.config.refresh_period);
        let weak = Rc::downgrade(self);
        let cycle = RefreshCycle::spawn(schedule, Rc::clone(&self.clock), move || {
            if let Some(controller) = weak.upgrade() {
                controller.refresh();
            }
        });
        *self.refresh.borrow_mut() = Some(cycle);
    }

    pub fn stop(&self) {
        if let Some(cycle) = self.refresh.borrow_mut().take() {
            cycle.stop();
            debug!("Board refresh stopped");
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh
            .borrow()
            .as_ref()
            .is_some_and(|cycle| !cycle.is_stopped())
    }

    pub fn min_due_bound(&self, now: DateTime<Utc>) -> String {
        format_datetime_local(now + self.config.min_due_lead, self.config.display_zone)
    }

    /// Fetches every task and renders it. A failed fetch leaves an empty
    /// board behind an alert.
    pub async fn load(&self) -> usize {
        let tasks = match self.repository.list_tasks().await {
            Ok(tasks) => tasks,
            Err(e) => {
                error!("Failed to fetch tasks: {}", e);
                self.prompt.alert(FETCH_FAILED);
                Vec::new()
            }
        };
        let count = tasks.len();
        for task in tasks {
            self.show(task);
        }
        self.view.set_min_due(self.min_due_bound(self.clock.now()));
        info!("Board loaded with {} tasks", count);
        count
    }

    /// Re-badges every card and moves the create form's lower bound.
    pub fn refresh(&self) {
        let now = self.clock.now();
        let badges: Vec<(TaskId, DueBadge)> = self
            .tasks
            .borrow()
            .values()
            .map(|task| (task.id, self.renderer.badge(task.due_date, now)))
            .collect();
        for (id, badge) in badges {
            self.view.update_badge(id, badge);
        }
        self.view.set_min_due(self.min_due_bound(now));
    }

    pub async fn create(&self, form: TaskForm) -> Option<TaskId> {
        let draft = match form.into_draft(self.config.display_zone) {
            Ok(draft) => draft,
            Err(e) => {
                warn!("Rejected create form: {}", e);
                self.prompt.alert(&e.to_string());
                return None;
            }
        };

        match self.repository.create_task(&draft).await {
            Ok(task) => {
                let id = task.id;
                self.show(task);
                self.view.close_create_form();
                self.prompt.toast(TASK_CREATED);
                Some(id)
            }
            Err(e) => {
                error!("Failed to create task '{}': {}", draft.title, e);
                self.prompt.alert(CREATE_FAILED);
                None
            }
        }
    }

    /// Handles a card dropped on the column with element id `column_id`.
    /// `raw_task_id` is the drag payload.
    pub async fn drop_task(&self, raw_task_id: &str, column_id: &str) -> bool {
        let Ok(id) = raw_task_id.parse::<TaskId>() else {
            warn!("Ignoring drop with payload '{}'", raw_task_id);
            return false;
        };
        let Some(status) = self.columns().status_for(column_id) else {
            warn!("Ignoring drop on unknown column '{}'", column_id);
            return false;
        };
        let Some(_in_flight) = InFlight::claim(&self.dropping, id) else {
            debug!("Task {} is already moving, ignoring drop", id);
            return false;
        };

        // Re-read so the re-rendered card carries the backend's other fields
        let mut task = match self.repository.get_task(id).await {
            Ok(task) => task,
            Err(e) => {
                error!("Failed to fetch task {} before status change: {}", id, e);
                self.prompt.alert(UPDATE_FAILED);
                return false;
            }
        };

        if let Err(e) = self.repository.update_status(id, status).await {
            error!("Failed to move task {} to {}: {}", id, status, e);
            self.prompt.alert(UPDATE_FAILED);
            return false;
        }

        // A delete may have finished while the PATCH was outstanding
        if !self.tasks.borrow().contains_key(&id) {
            info!("Task {} was deleted during its move, not re-rendering", id);
            return false;
        }

        debug!("Task {} moved from {} to {}", id, task.status, status);
        task.update_status(status);
        self.renderer.remove_by_id(self.view.as_ref(), id);
        self.show(task);
        true
    }

    pub async fn delete(&self, id: TaskId) -> bool {
        if !self.prompt.confirm(CONFIRM_DELETE) {
            debug!("Delete of task {} cancelled", id);
            return false;
        }

        match self.repository.delete_task(id).await {
            Ok(()) => {
                self.renderer.remove_by_id(self.view.as_ref(), id);
                self.tasks.borrow_mut().remove(&id);
                self.prompt.toast(TASK_DELETED);
                true
            }
            Err(e) => {
                error!("Failed to delete task {}: {}", id, e);
                self.prompt.alert(DELETE_FAILED);
                false
            }
        }
    }

    fn show(&self, task: Task) {
        let card = self.renderer.render(&task, self.clock.now());
        self.renderer.place(self.view.as_ref(), card, task.status);
        self.tasks.borrow_mut().insert(task.id, task);
    }

    pub fn status_of(&self, id: TaskId) -> Option<TaskStatus> {
        self.tasks.borrow().get(&id).map(|task| task.status)
    }
}

impl Drop for BoardController {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};
    use futures::channel::oneshot;

    use crate::core::clock::DisplayZone;
    use crate::core::models::TaskDraft;
    use crate::core::urgency::UrgencyTier;
    use crate::error::ApiError;
    use crate::features::kanban::services::renderer::TaskCard;

    #[derive(Default)]
    struct MemoryRepository {
        tasks: RefCell<BTreeMap<TaskId, Task>>,
        next_id: Cell<i64>,
        requests: RefCell<Vec<String>>,
        fail_list: Cell<bool>,
        fail_create: Cell<Option<u16>>,
        fail_update: Cell<Option<u16>>,
        fail_delete: Cell<Option<u16>>,
        patch_gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl MemoryRepository {
        fn hold_next_patch(&self) -> oneshot::Sender<()> {
            let (release, gate) = oneshot::channel();
            *self.patch_gate.borrow_mut() = Some(gate);
            release
        }

        fn with_tasks(tasks: Vec<Task>) -> Self {
            let repo = Self::default();
            for task in tasks {
                repo.next_id.set(repo.next_id.get().max(task.id.0));
                repo.tasks.borrow_mut().insert(task.id, task);
            }
            repo
        }

        fn log(&self, line: String) {
            self.requests.borrow_mut().push(line);
        }

        fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl TaskRepository for MemoryRepository {
        async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
            self.log("GET /tasks".into());
            if self.fail_list.get() {
                return Err(ApiError::Network("connection refused".into()));
            }
            Ok(self.tasks.borrow().values().cloned().collect())
        }

        async fn get_task(&self, id: TaskId) -> Result<Task, ApiError> {
            self.log(format!("GET /tasks/{id}"));
            self.tasks
                .borrow()
                .get(&id)
                .cloned()
                .ok_or(ApiError::Http { status: 400 })
        }

        async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
            self.log("POST /tasks".into());
            if let Some(status) = self.fail_create.get() {
                return Err(ApiError::Http { status });
            }
            let id = TaskId(self.next_id.get() + 1);
            self.next_id.set(id.0);
            let task = Task {
                id,
                title: draft.title.clone(),
                description: Some(draft.description.clone()),
                status: draft.status,
                due_date: draft.due_date,
            };
            self.tasks.borrow_mut().insert(id, task.clone());
            Ok(task)
        }

        async fn update_status(&self, id: TaskId, status: TaskStatus) -> Result<(), ApiError> {
            self.log(format!("PATCH /tasks/{id}/ {{\"status\":\"{status}\"}}"));
            if let Some(code) = self.fail_update.get() {
                return Err(ApiError::Http { status: code });
            }
            let applied = match self.tasks.borrow_mut().get_mut(&id) {
                Some(task) => {
                    task.status = status;
                    Ok(())
                }
                None => Err(ApiError::Http { status: 400 }),
            };
            // Applied on the backend, response held until released
            let gate = self.patch_gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            applied
        }

        async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
            self.log(format!("DELETE /tasks/{id}/"));
            if let Some(status) = self.fail_delete.get() {
                return Err(ApiError::Http { status });
            }
            self.tasks.borrow_mut().remove(&id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingBoard {
        cards: RefCell<Vec<(&'static str, TaskCard)>>,
        min_due: RefCell<Option<String>>,
        form_closed: Cell<usize>,
    }

    impl RecordingBoard {
        fn column_of(&self, id: TaskId) -> Vec<&'static str> {
            self.cards
                .borrow()
                .iter()
                .filter(|(_, card)| card.task_id == id)
                .map(|(column, _)| *column)
                .collect()
        }

        fn card(&self, id: TaskId) -> Option<TaskCard> {
            self.cards
                .borrow()
                .iter()
                .find(|(_, card)| card.task_id == id)
                .map(|(_, card)| card.clone())
        }
    }

    impl RenderTarget for RecordingBoard {
        fn place(&self, card: TaskCard, column_id: &'static str) {
            self.cards.borrow_mut().push((column_id, card));
        }

        fn remove(&self, id: TaskId) -> bool {
            let mut cards = self.cards.borrow_mut();
            let before = cards.len();
            cards.retain(|(_, card)| card.task_id != id);
            cards.len() != before
        }

        fn update_badge(&self, id: TaskId, badge: DueBadge) {
            for (_, card) in self.cards.borrow_mut().iter_mut() {
                if card.task_id == id {
                    card.badge = badge.clone();
                }
            }
        }

        fn set_min_due(&self, value: String) {
            *self.min_due.borrow_mut() = Some(value);
        }

        fn close_create_form(&self) {
            self.form_closed.set(self.form_closed.get() + 1);
        }
    }

    struct ScriptedPrompt {
        confirm_answer: Cell<bool>,
        alerts: RefCell<Vec<String>>,
        toasts: RefCell<Vec<String>>,
    }

    impl Default for ScriptedPrompt {
        fn default() -> Self {
            Self {
                confirm_answer: Cell::new(true),
                alerts: RefCell::new(Vec::new()),
                toasts: RefCell::new(Vec::new()),
            }
        }
    }

    impl UserPrompt for ScriptedPrompt {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, _message: &str) -> bool {
            self.confirm_answer.get()
        }

        fn toast(&self, message: &str) {
            self.toasts.borrow_mut().push(message.to_string());
        }
    }

    struct FixedClock(Cell<DateTime<Utc>>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0.get()
        }
    }

    struct Harness {
        repo: Rc<MemoryRepository>,
        board: Rc<RecordingBoard>,
        prompt: Rc<ScriptedPrompt>,
        clock: Rc<FixedClock>,
        controller: BoardController,
    }

    fn start_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 30).unwrap()
    }

    fn task(id: i64, status: TaskStatus, due: DateTime<Utc>) -> Task {
        Task {
            id: TaskId(id),
            title: format!("Task {id}"),
            description: Some("details".into()),
            status,
            due_date: due,
        }
    }

    fn harness(tasks: Vec<Task>) -> Harness {
        let repo = Rc::new(MemoryRepository::with_tasks(tasks));
        let board = Rc::new(RecordingBoard::default());
        let prompt = Rc::new(ScriptedPrompt::default());
        let clock = Rc::new(FixedClock(Cell::new(start_time())));
        let context = BoardContext {
            config: BoardConfig::default().with_display_zone(DisplayZone::utc()),
            repository: repo.clone(),
            view: board.clone(),
            prompt: prompt.clone(),
            clock: clock.clone(),
        };
        let controller = BoardController::new(context).unwrap();
        Harness { repo, board, prompt, clock, controller }
    }

    #[tokio::test]
    async fn load_renders_each_task_in_its_column() {
        let h = harness(vec![
            task(1, TaskStatus::Pending, start_time() + Duration::days(3)),
            task(2, TaskStatus::InProgress, start_time() + Duration::hours(2)),
            task(3, TaskStatus::Done, start_time() - Duration::hours(2)),
        ]);

        assert_eq!(h.controller.load().await, 3);

        assert_eq!(h.board.column_of(TaskId(1)), vec!["pending-list"]);
        assert_eq!(h.board.column_of(TaskId(2)), vec!["in-progress-list"]);
        assert_eq!(h.board.column_of(TaskId(3)), vec!["done-list"]);
        assert_eq!(h.board.card(TaskId(3)).unwrap().badge.tier, UrgencyTier::Overdue);
        assert_eq!(h.board.min_due.borrow().as_deref(), Some("2025-06-10T12:01"));
        assert!(h.prompt.alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn failed_load_alerts_and_leaves_board_empty() {
        let h = harness(vec![task(1, TaskStatus::Pending, start_time())]);
        h.repo.fail_list.set(true);

        assert_eq!(h.controller.load().await, 0);

        assert!(h.board.cards.borrow().is_empty());
        assert_eq!(*h.prompt.alerts.borrow(), vec![FETCH_FAILED.to_string()]);
        assert!(h.board.min_due.borrow().is_some());
    }

    #[tokio::test]
    async fn loading_twice_keeps_one_card_per_task() {
        let h = harness(vec![task(5, TaskStatus::Pending, start_time() + Duration::days(1))]);
        h.controller.load().await;
        h.controller.load().await;

        assert_eq!(h.board.cards.borrow().len(), 1);
        assert_eq!(h.board.card(TaskId(5)).unwrap().dom_id, "task-5");
    }

    #[tokio::test]
    async fn created_task_appears_on_time_in_pending() {
        let h = harness(vec![]);
        let due = start_time() + Duration::days(2);
        let form = TaskForm {
            title: "A".into(),
            description: String::new(),
            status: "Pending".into(),
            due_date: format_datetime_local(due, DisplayZone::utc()),
        };

        let id = h.controller.create(form).await.unwrap();

        assert_eq!(h.board.column_of(id), vec!["pending-list"]);
        let card = h.board.card(id).unwrap();
        assert_eq!(card.title, "A");
        assert_eq!(card.badge.css_class(), "on-time");
        assert_eq!(h.board.form_closed.get(), 1);
        assert_eq!(*h.prompt.toasts.borrow(), vec![TASK_CREATED.to_string()]);

        // Fetched back from the backend it still lands in Pending
        h.board.cards.borrow_mut().clear();
        h.controller.load().await;
        assert_eq!(h.board.column_of(id), vec!["pending-list"]);
    }

    #[tokio::test]
    async fn failed_create_keeps_form_open() {
        let h = harness(vec![]);
        h.repo.fail_create.set(Some(422));
        let form = TaskForm {
            title: "A".into(),
            description: String::new(),
            status: "Done".into(),
            due_date: "2025-06-12T10:00".into(),
        };

        assert_eq!(h.controller.create(form).await, None);

        assert!(h.board.cards.borrow().is_empty());
        assert_eq!(h.board.form_closed.get(), 0);
        assert_eq!(*h.prompt.alerts.borrow(), vec![CREATE_FAILED.to_string()]);
        assert!(h.prompt.toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn unparsable_due_date_never_reaches_the_backend() {
        let h = harness(vec![]);
        let form = TaskForm {
            title: "A".into(),
            description: String::new(),
            status: "Pending".into(),
            due_date: String::new(),
        };

        assert_eq!(h.controller.create(form).await, None);

        assert!(h.repo.requests().is_empty());
        assert_eq!(*h.prompt.alerts.borrow(), vec!["Invalid due date".to_string()]);
    }

    #[tokio::test]
    async fn drop_moves_card_after_backend_confirms() {
        let h = harness(vec![task(4, TaskStatus::Pending, start_time() + Duration::days(2))]);
        h.controller.load().await;

        assert!(h.controller.drop_task("4", "done-list").await);

        assert_eq!(
            h.repo.requests(),
            vec![
                "GET /tasks".to_string(),
                "GET /tasks/4".to_string(),
                "PATCH /tasks/4/ {\"status\":\"Done\"}".to_string(),
            ]
        );
        assert_eq!(h.board.column_of(TaskId(4)), vec!["done-list"]);
        assert_eq!(h.controller.status_of(TaskId(4)), Some(TaskStatus::Done));
    }

    #[tokio::test]
    async fn rejected_drop_leaves_card_in_place() {
        let h = harness(vec![task(4, TaskStatus::Pending, start_time() + Duration::days(2))]);
        h.controller.load().await;
        h.repo.fail_update.set(Some(500));

        assert!(!h.controller.drop_task("4", "done-list").await);

        assert_eq!(h.board.column_of(TaskId(4)), vec!["pending-list"]);
        assert_eq!(h.controller.status_of(TaskId(4)), Some(TaskStatus::Pending));
        assert_eq!(*h.prompt.alerts.borrow(), vec![UPDATE_FAILED.to_string()]);
    }

    #[tokio::test]
    async fn drop_of_vanished_task_alerts_without_patching() {
        let h = harness(vec![task(4, TaskStatus::Pending, start_time() + Duration::days(2))]);
        h.controller.load().await;
        h.repo.tasks.borrow_mut().clear();

        assert!(!h.controller.drop_task("4", "in-progress-list").await);

        assert!(!h.repo.requests().iter().any(|r| r.starts_with("PATCH")));
        assert_eq!(h.board.column_of(TaskId(4)), vec!["pending-list"]);
        assert_eq!(h.prompt.alerts.borrow().len(), 1);
    }

    #[tokio::test]
    async fn bad_drop_targets_are_ignored() {
        let h = harness(vec![task(4, TaskStatus::Pending, start_time() + Duration::days(2))]);
        h.controller.load().await;

        assert!(!h.controller.drop_task("4", "Done-list").await);
        assert!(!h.controller.drop_task("four", "done-list").await);

        assert_eq!(h.repo.requests(), vec!["GET /tasks".to_string()]);
        assert!(h.prompt.alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn drop_is_ignored_while_the_same_task_is_moving() {
        let h = harness(vec![
            task(4, TaskStatus::Pending, start_time() + Duration::days(2)),
            task(5, TaskStatus::Pending, start_time() + Duration::days(2)),
        ]);
        h.controller.load().await;
        let release = h.repo.hold_next_patch();

        let (first, second, other) = futures::join!(
            h.controller.drop_task("4", "done-list"),
            h.controller.drop_task("4", "in-progress-list"),
            async {
                let other = h.controller.drop_task("5", "in-progress-list").await;
                let _ = release.send(());
                other
            }
        );

        assert!(first);
        assert!(!second);
        assert!(other);
        assert_eq!(
            h.repo.requests(),
            vec![
                "GET /tasks".to_string(),
                "GET /tasks/4".to_string(),
                "PATCH /tasks/4/ {\"status\":\"Done\"}".to_string(),
                "GET /tasks/5".to_string(),
                "PATCH /tasks/5/ {\"status\":\"In Progress\"}".to_string(),
            ]
        );
        assert_eq!(h.board.column_of(TaskId(4)), vec!["done-list"]);
        assert_eq!(h.board.column_of(TaskId(5)), vec!["in-progress-list"]);
    }

    #[tokio::test]
    async fn delete_during_move_keeps_the_card_gone() {
        let h = harness(vec![task(4, TaskStatus::Pending, start_time() + Duration::days(2))]);
        h.controller.load().await;
        let release = h.repo.hold_next_patch();

        let (moved, deleted) = futures::join!(h.controller.drop_task("4", "done-list"), async {
            let deleted = h.controller.delete(TaskId(4)).await;
            let _ = release.send(());
            deleted
        });

        assert!(!moved);
        assert!(deleted);
        assert!(h.repo.tasks.borrow().is_empty());
        assert!(h.board.column_of(TaskId(4)).is_empty());
        assert!(h.controller.task(TaskId(4)).is_none());
        assert!(h.prompt.alerts.borrow().is_empty());

        h.controller.refresh();
        assert!(h.board.cards.borrow().is_empty());
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let h = harness(vec![task(8, TaskStatus::InProgress, start_time() + Duration::days(2))]);
        h.controller.load().await;
        h.prompt.confirm_answer.set(false);

        assert!(!h.controller.delete(TaskId(8)).await);

        assert_eq!(h.repo.requests(), vec!["GET /tasks".to_string()]);
        assert_eq!(h.board.column_of(TaskId(8)), vec!["in-progress-list"]);
    }

    #[tokio::test]
    async fn confirmed_delete_removes_card() {
        let h = harness(vec![task(8, TaskStatus::InProgress, start_time() + Duration::days(2))]);
        h.controller.load().await;

        assert!(h.controller.delete(TaskId(8)).await);

        assert!(h.board.cards.borrow().is_empty());
        assert!(h.controller.task(TaskId(8)).is_none());
        assert_eq!(*h.prompt.toasts.borrow(), vec![TASK_DELETED.to_string()]);
    }

    #[tokio::test]
    async fn failed_delete_keeps_card() {
        let h = harness(vec![task(8, TaskStatus::Done, start_time() + Duration::days(2))]);
        h.controller.load().await;
        h.repo.fail_delete.set(Some(500));

        assert!(!h.controller.delete(TaskId(8)).await);

        assert_eq!(h.board.column_of(TaskId(8)), vec!["done-list"]);
        assert_eq!(*h.prompt.alerts.borrow(), vec![DELETE_FAILED.to_string()]);
    }

    #[tokio::test]
    async fn refresh_reclassifies_and_moves_min_bound() {
        let h = harness(vec![task(1, TaskStatus::Pending, start_time() + Duration::minutes(90))]);
        h.controller.load().await;
        assert_eq!(h.board.card(TaskId(1)).unwrap().badge.tier, UrgencyTier::Urgent);

        h.clock.0.set(Utc.with_ymd_and_hms(2025, 6, 10, 13, 31, 0).unwrap());
        h.controller.refresh();

        let card = h.board.card(TaskId(1)).unwrap();
        assert_eq!(card.badge.tier, UrgencyTier::Overdue);
        assert!(card.badge.label.ends_with("(Overdue)"));
        assert_eq!(h.board.min_due.borrow().as_deref(), Some("2025-06-10T13:32"));
        assert_eq!(h.board.cards.borrow().len(), 1);
    }

    #[test]
    fn min_due_bound_is_one_minute_ahead() {
        let h = harness(vec![]);
        let now = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 10).unwrap();
        assert_eq!(h.controller.min_due_bound(now), "2026-01-01T00:00");
    }

    #[test]
    fn broken_column_table_fails_construction() {
        let context = BoardContext {
            config: BoardConfig::default(),
            repository: Rc::new(MemoryRepository::default()),
            view: Rc::new(RecordingBoard::default()),
            prompt: Rc::new(ScriptedPrompt::default()),
            clock: Rc::new(FixedClock(Cell::new(start_time()))),
        };
        let columns = ColumnTable::new(vec![(TaskStatus::Pending, "pending-list")]);
        assert!(matches!(
            BoardController::with_columns(context, columns),
            Err(BoardError::Columns(_))
        ));
    }
}
