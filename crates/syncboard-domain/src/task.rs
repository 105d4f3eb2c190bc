use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field_update::FieldUpdate;
use crate::list::ListId;
use crate::user::UserId;

pub type TaskId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub list_id: ListId,
    pub title: String,
    pub description: Option<String>,
    pub position: i32,
    pub assignee_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub list_id: ListId,
    pub title: String,
    pub description: Option<String>,
    pub position: i32,
    pub assignee_id: Option<UserId>,
}

/// Partial update for a task. Reassigning `list_id` is how a task moves
/// across lists; optional fields use the three-state `FieldUpdate` so they
/// can be cleared as well as set.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: FieldUpdate<String>,
    pub position: Option<i32>,
    pub list_id: Option<ListId>,
    pub assignee_id: FieldUpdate<UserId>,
}

impl Task {
    pub fn apply(&mut self, update: TaskUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        update.description.apply_to(&mut self.description);
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(list_id) = update.list_id {
            self.list_id = list_id;
        }
        update.assignee_id.apply_to(&mut self.assignee_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: Uuid::new_v4(),
            list_id: Uuid::new_v4(),
            title: "Fix bug".to_string(),
            description: Some("crashes on save".to_string()),
            position: 0,
            assignee_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_apply_merges_only_provided_fields() {
        let mut t = task();
        let original_list = t.list_id;

        t.apply(TaskUpdate {
            position: Some(3),
            ..Default::default()
        });

        assert_eq!(t.position, 3);
        assert_eq!(t.list_id, original_list);
        assert_eq!(t.title, "Fix bug");
        assert_eq!(t.description.as_deref(), Some("crashes on save"));
    }

    #[test]
    fn test_apply_can_clear_optional_fields() {
        let mut t = task();
        t.assignee_id = Some(Uuid::new_v4());

        t.apply(TaskUpdate {
            description: FieldUpdate::Clear,
            assignee_id: FieldUpdate::Clear,
            ..Default::default()
        });

        assert!(t.description.is_none());
        assert!(t.assignee_id.is_none());
    }

    #[test]
    fn test_apply_moves_across_lists() {
        let mut t = task();
        let target = Uuid::new_v4();

        t.apply(TaskUpdate {
            list_id: Some(target),
            ..Default::default()
        });

        assert_eq!(t.list_id, target);
    }
}
