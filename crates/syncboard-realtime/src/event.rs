use serde::{Deserialize, Serialize};

use syncboard_domain::{List, ListId, Task, TaskId};

/// Name of the notification carrying a [`BoardEvent`] on the transport.
pub const BOARD_UPDATED: &str = "board-updated";

/// Change notification fanned out to every viewer of a board.
///
/// The payload is attached for convenience but is not guaranteed sufficient
/// to patch local state; correct viewers re-fetch the full board on any
/// event (see the viewer module).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BoardEvent {
    #[serde(rename = "LIST_CREATED")]
    ListCreated { list: List },
    #[serde(rename = "LIST_UPDATED")]
    ListUpdated { list: List },
    #[serde(rename = "LIST_DELETED")]
    ListDeleted { list_id: ListId },
    #[serde(rename = "TASK_CREATED")]
    TaskCreated { task: Task },
    #[serde(rename = "TASK_UPDATED")]
    TaskUpdated { task: Task },
    #[serde(rename = "TASK_DELETED")]
    TaskDeleted { task_id: TaskId },
}

impl BoardEvent {
    /// The wire name carried in the `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            BoardEvent::ListCreated { .. } => "LIST_CREATED",
            BoardEvent::ListUpdated { .. } => "LIST_UPDATED",
            BoardEvent::ListDeleted { .. } => "LIST_DELETED",
            BoardEvent::TaskCreated { .. } => "TASK_CREATED",
            BoardEvent::TaskUpdated { .. } => "TASK_UPDATED",
            BoardEvent::TaskDeleted { .. } => "TASK_DELETED",
        }
    }
}
