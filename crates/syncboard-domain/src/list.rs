use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::BoardId;

pub type ListId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub board_id: BoardId,
    pub title: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewList {
    pub board_id: BoardId,
    pub title: String,
    pub position: i32,
}

/// Partial update for a list; absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct ListUpdate {
    pub title: Option<String>,
    pub position: Option<i32>,
}

impl List {
    pub fn apply(&mut self, update: ListUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
    }
}
