//! Activity entries and the message rules that derive them.
//!
//! Entries are denormalized summaries of mutations, never a source of
//! truth. The message-selection function is pure so the service layer and
//! tests share one definition of the rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::BoardId;
use crate::task::Task;
use crate::user::UserId;

/// One human-readable line in a board's activity trail. Immutable once
/// created. The id is time-based (unix millis) rather than a uuid: it is
/// opaque, never used for lookup, and the trail is best-effort diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: i64,
    pub board_id: BoardId,
    pub user_id: UserId,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn new(board_id: BoardId, user_id: UserId, message: String) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            board_id,
            user_id,
            message,
            created_at: now,
        }
    }
}

/// Pick the single activity message for a task update.
///
/// Priority: moved across lists > assigned to someone > generic update.
/// The title is read from the post-update record.
pub fn task_update_message(before: &Task, after: &Task) -> String {
    if before.list_id != after.list_id {
        format!("Moved task \"{}\"", after.title)
    } else if before.assignee_id != after.assignee_id && after.assignee_id.is_some() {
        format!("Assigned task \"{}\"", after.title)
    } else {
        format!("Updated task \"{}\"", after.title)
    }
}
