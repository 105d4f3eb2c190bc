use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::UserId;

pub type BoardId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Caller-provided fields for board creation; the store assigns the rest.
#[derive(Debug, Clone)]
pub struct NewBoard {
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
}
