//! Schema impls binding the domain entities to the generic store.

use chrono::{DateTime, Utc};
use syncboard_domain::{
    Board, List, ListUpdate, NewBoard, NewList, NewTask, NewUser, Task, TaskUpdate, User,
};
use uuid::Uuid;

use crate::memory::Table;
use crate::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardField {
    Id,
    OwnerId,
}

impl Record for Board {
    type Draft = NewBoard;
    // Board edits (title/description) happen outside this core.
    type Patch = ();
    type Field = BoardField;

    const ENTITY: &'static str = "board";

    fn assemble(draft: NewBoard, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            owner_id: draft.owner_id,
            created_at,
        }
    }

    fn field(&self, field: BoardField) -> FieldValue {
        match field {
            BoardField::Id => self.id.into(),
            BoardField::OwnerId => self.owner_id.into(),
        }
    }

    fn apply(&mut self, _patch: ()) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Id,
    BoardId,
    Position,
}

impl Record for List {
    type Draft = NewList;
    type Patch = ListUpdate;
    type Field = ListField;

    const ENTITY: &'static str = "list";

    fn assemble(draft: NewList, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            board_id: draft.board_id,
            title: draft.title,
            position: draft.position,
            created_at,
        }
    }

    fn field(&self, field: ListField) -> FieldValue {
        match field {
            ListField::Id => self.id.into(),
            ListField::BoardId => self.board_id.into(),
            ListField::Position => self.position.into(),
        }
    }

    fn apply(&mut self, patch: ListUpdate) {
        List::apply(self, patch);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Id,
    ListId,
    Position,
    AssigneeId,
    CreatedAt,
}

impl Record for Task {
    type Draft = NewTask;
    type Patch = TaskUpdate;
    type Field = TaskField;

    const ENTITY: &'static str = "task";

    fn assemble(draft: NewTask, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            list_id: draft.list_id,
            title: draft.title,
            description: draft.description,
            position: draft.position,
            assignee_id: draft.assignee_id,
            created_at,
        }
    }

    fn field(&self, field: TaskField) -> FieldValue {
        match field {
            TaskField::Id => self.id.into(),
            TaskField::ListId => self.list_id.into(),
            TaskField::Position => self.position.into(),
            TaskField::AssigneeId => self.assignee_id.into(),
            TaskField::CreatedAt => self.created_at.into(),
        }
    }

    fn apply(&mut self, patch: TaskUpdate) {
        Task::apply(self, patch);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Username,
}

impl Record for User {
    type Draft = NewUser;
    // Users are owned by the credential service, never mutated here.
    type Patch = ();
    type Field = UserField;

    const ENTITY: &'static str = "user";

    fn assemble(draft: NewUser, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username: draft.username,
            created_at,
        }
    }

    fn field(&self, field: UserField) -> FieldValue {
        match field {
            UserField::Id => self.id.into(),
            UserField::Username => self.username.clone().into(),
        }
    }

    fn apply(&mut self, _patch: ()) {}
}

/// One table per entity kind, the whole persistence surface of the core.
#[derive(Default)]
pub struct RecordStore {
    pub boards: Table<Board>,
    pub lists: Table<List>,
    pub tasks: Table<Task>,
    pub users: Table<User>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}
