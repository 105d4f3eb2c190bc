//! The board hierarchy service.
//!
//! Every mutation runs validate → store → trail → broadcast as one unit
//! behind the store lock; the in-memory store is not safe for concurrent
//! writers. The mutating caller gets its result once store and trail have
//! committed; delivery to subscribers proceeds through the channel buffers
//! on its own. Trail appends and broadcasts are best-effort side channels:
//! when the owning board cannot be resolved they are skipped and the
//! mutation still succeeds.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use syncboard_core::{BoardError, BoardResult, PageRequest, Paginated, SyncConfig};
use syncboard_domain::{
    task_update_message, ActivityEntry, Board, BoardId, List, ListId, ListUpdate, ListWithTasks,
    NewBoard, NewList, NewTask, Task, TaskId, TaskUpdate, UserId,
};
use syncboard_realtime::{BoardChannelHub, BoardEvent, BoardStateSource};
use syncboard_store::{ListField, Query, RecordStore, SortDirection, TaskField};

use crate::activity::ActivityTrail;

pub struct BoardService {
    store: Mutex<RecordStore>,
    trail: Mutex<ActivityTrail>,
    hub: Arc<BoardChannelHub>,
}

impl Default for BoardService {
    fn default() -> Self {
        Self::with_config(&SyncConfig::default())
    }
}

impl BoardService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &SyncConfig) -> Self {
        Self {
            store: Mutex::new(RecordStore::new()),
            trail: Mutex::new(ActivityTrail::new(config.activity_capacity)),
            hub: Arc::new(BoardChannelHub::new(config.event_buffer)),
        }
    }

    /// The broadcast hub viewers subscribe through.
    pub fn hub(&self) -> Arc<BoardChannelHub> {
        Arc::clone(&self.hub)
    }

    pub async fn create_board(
        &self,
        owner_id: UserId,
        title: &str,
        description: Option<String>,
    ) -> BoardResult<Board> {
        validate_title(title)?;

        let mut store = self.store.lock().await;
        let board = store.boards.create(NewBoard {
            owner_id,
            title: title.to_string(),
            description,
        });

        tracing::info!(board_id = %board.id, "board created");
        Ok(board)
    }

    /// All boards, unsorted, sliced into the requested page. Visibility is
    /// not filtered per user; any authenticated caller sees every board.
    pub async fn list_boards(&self, request: PageRequest) -> BoardResult<Paginated<Board>> {
        let store = self.store.lock().await;
        let all = store.boards.find_many(Query::new());
        Ok(request.paginate(&all))
    }

    /// Authoritative read model of one board: lists in position order, each
    /// with its tasks in position order. This is what viewers re-fetch.
    pub async fn board_lists(&self, board_id: BoardId) -> BoardResult<Vec<ListWithTasks>> {
        let store = self.store.lock().await;
        Ok(lists_with_tasks(&store, board_id))
    }

    pub async fn create_list(
        &self,
        actor: UserId,
        board_id: BoardId,
        title: &str,
        position: i32,
    ) -> BoardResult<List> {
        validate_title(title)?;

        let mut store = self.store.lock().await;
        let list = store.lists.create(NewList {
            board_id,
            title: title.to_string(),
            position,
        });

        self.record_activity(board_id, actor, format!("Created list \"{}\"", list.title))
            .await;
        self.hub
            .publish(board_id, BoardEvent::ListCreated { list: list.clone() })
            .await;
        Ok(list)
    }

    /// Title/position merge. List updates are deliberately absent from the
    /// activity trail: reordering would drown everything else out.
    pub async fn update_list(&self, list_id: ListId, update: ListUpdate) -> BoardResult<List> {
        let mut store = self.store.lock().await;
        let list = store.lists.update(ListField::Id, list_id, update)?;

        self.hub
            .publish(list.board_id, BoardEvent::ListUpdated { list: list.clone() })
            .await;
        Ok(list)
    }

    /// Removes the list and cascade-deletes its tasks; orphans would be
    /// unreachable through every read path. The cascade emits no per-task
    /// events, viewers re-fetch the whole board on `LIST_DELETED` anyway.
    pub async fn delete_list(&self, actor: UserId, list_id: ListId) -> BoardResult<List> {
        let mut store = self.store.lock().await;
        let list = store.lists.delete(ListField::Id, list_id)?;

        let orphaned = store
            .tasks
            .find_many(Query::new().filter(TaskField::ListId, list_id));
        for task in &orphaned {
            let _ = store.tasks.delete(TaskField::Id, task.id);
        }
        if !orphaned.is_empty() {
            tracing::debug!(%list_id, count = orphaned.len(), "cascade-deleted tasks of removed list");
        }

        self.record_activity(
            list.board_id,
            actor,
            format!("Deleted list \"{}\"", list.title),
        )
        .await;
        self.hub
            .publish(list.board_id, BoardEvent::ListDeleted { list_id })
            .await;
        Ok(list)
    }

    pub async fn create_task(
        &self,
        actor: UserId,
        list_id: ListId,
        title: &str,
        description: Option<String>,
        position: i32,
        assignee_id: Option<UserId>,
    ) -> BoardResult<Task> {
        validate_title(title)?;

        let mut store = self.store.lock().await;
        let task = store.tasks.create(NewTask {
            list_id,
            title: title.to_string(),
            description,
            position,
            assignee_id,
        });

        match store.lists.find_unique(ListField::Id, list_id) {
            Some(list) => {
                self.record_activity(
                    list.board_id,
                    actor,
                    format!("Created task \"{}\"", task.title),
                )
                .await;
                self.hub
                    .publish(list.board_id, BoardEvent::TaskCreated { task: task.clone() })
                    .await;
            }
            None => {
                tracing::warn!(%list_id, "owning list unresolved, skipping activity and broadcast");
            }
        }
        Ok(task)
    }

    /// Merges the patch, then derives exactly one activity message from the
    /// before/after pair: moved across lists beats assigned beats a generic
    /// update.
    pub async fn update_task(
        &self,
        actor: UserId,
        task_id: TaskId,
        update: TaskUpdate,
    ) -> BoardResult<Task> {
        let mut store = self.store.lock().await;
        let before = store
            .tasks
            .find_unique(TaskField::Id, task_id)
            .ok_or_else(|| BoardError::not_found("task"))?;
        let task = store.tasks.update(TaskField::Id, task_id, update)?;

        if let Some(list) = store.lists.find_unique(ListField::Id, task.list_id) {
            self.record_activity(list.board_id, actor, task_update_message(&before, &task))
                .await;
            self.hub
                .publish(list.board_id, BoardEvent::TaskUpdated { task: task.clone() })
                .await;
        } else {
            tracing::warn!(%task_id, "owning list unresolved, skipping activity and broadcast");
        }
        Ok(task)
    }

    pub async fn delete_task(&self, actor: UserId, task_id: TaskId) -> BoardResult<Task> {
        let mut store = self.store.lock().await;
        let task = store.tasks.delete(TaskField::Id, task_id)?;

        if let Some(list) = store.lists.find_unique(ListField::Id, task.list_id) {
            self.record_activity(
                list.board_id,
                actor,
                format!("Deleted task \"{}\"", task.title),
            )
            .await;
            self.hub
                .publish(list.board_id, BoardEvent::TaskDeleted { task_id })
                .await;
        }
        Ok(task)
    }

    /// The board's slice of the global trail, most recent first.
    pub async fn board_activity(&self, board_id: BoardId) -> Vec<ActivityEntry> {
        let trail = self.trail.lock().await;
        trail.for_board(board_id)
    }

    async fn record_activity(&self, board_id: BoardId, actor: UserId, message: String) {
        let mut trail = self.trail.lock().await;
        let entry = trail.append(board_id, actor, message);
        tracing::debug!(%board_id, message = %entry.message, "activity recorded");
    }
}

#[async_trait]
impl BoardStateSource for BoardService {
    async fn fetch_board_state(&self, board_id: BoardId) -> BoardResult<Vec<ListWithTasks>> {
        self.board_lists(board_id).await
    }
}

fn lists_with_tasks(store: &RecordStore, board_id: BoardId) -> Vec<ListWithTasks> {
    store
        .lists
        .find_many(
            Query::new()
                .filter(ListField::BoardId, board_id)
                .order_by(ListField::Position, SortDirection::Asc),
        )
        .into_iter()
        .map(|list| {
            let tasks = store.tasks.find_many(
                Query::new()
                    .filter(TaskField::ListId, list.id)
                    .order_by(TaskField::Position, SortDirection::Asc),
            );
            ListWithTasks { list, tasks }
        })
        .collect()
}

fn validate_title(title: &str) -> BoardResult<()> {
    if title.trim().is_empty() {
        return Err(BoardError::Validation("title must not be empty".to_string()));
    }
    Ok(())
}
