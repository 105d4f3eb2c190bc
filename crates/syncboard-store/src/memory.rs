//! Insertion-ordered in-memory tables.
//!
//! Substitute for a real persistence engine: one table per entity kind,
//! equality filters, stable single-field sort, shallow-merge updates. No
//! transactions, no foreign keys, no uniqueness beyond the assigned id.
//! Not safe for concurrent writers; callers serialize access.

use chrono::Utc;
use syncboard_core::{BoardError, BoardResult};
use uuid::Uuid;

use crate::record::{FieldValue, Query, Record, SortDirection};

pub struct Table<R: Record> {
    rows: Vec<R>,
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Table<R> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Assign a fresh id and creation timestamp, append, return the record.
    pub fn create(&mut self, draft: R::Draft) -> R {
        let record = R::assemble(draft, Uuid::new_v4(), Utc::now());
        self.rows.push(record.clone());
        record
    }

    /// First record whose field equals `value`, if any.
    pub fn find_unique(&self, field: R::Field, value: impl Into<FieldValue>) -> Option<R> {
        let value = value.into();
        self.rows.iter().find(|row| row.field(field) == value).cloned()
    }

    /// All records matching the filter conjunction, optionally sorted.
    ///
    /// The sort is stable, so records with equal keys keep their insertion
    /// order. An empty filter matches everything.
    pub fn find_many(&self, query: Query<R::Field>) -> Vec<R> {
        let mut results: Vec<R> = self
            .rows
            .iter()
            .filter(|row| {
                query
                    .filter
                    .iter()
                    .all(|(field, value)| row.field(*field) == *value)
            })
            .cloned()
            .collect();

        if let Some((field, direction)) = query.order_by {
            results.sort_by(|a, b| {
                let ordering = a.field(field).compare(&b.field(field));
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        results
    }

    /// Shallow-merge `patch` into the first matching record.
    pub fn update(
        &mut self,
        field: R::Field,
        value: impl Into<FieldValue>,
        patch: R::Patch,
    ) -> BoardResult<R> {
        let value = value.into();
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.field(field) == value)
            .ok_or_else(|| BoardError::not_found(R::ENTITY))?;

        row.apply(patch);
        Ok(row.clone())
    }

    /// Remove and return the first matching record.
    pub fn delete(&mut self, field: R::Field, value: impl Into<FieldValue>) -> BoardResult<R> {
        let value = value.into();
        let index = self
            .rows
            .iter()
            .position(|row| row.field(field) == value)
            .ok_or_else(|| BoardError::not_found(R::ENTITY))?;

        Ok(self.rows.remove(index))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ListField, TaskField};
    use syncboard_domain::{FieldUpdate, List, NewList, NewTask, Task, TaskUpdate};

    fn new_task(list_id: Uuid, title: &str, position: i32) -> NewTask {
        NewTask {
            list_id,
            title: title.to_string(),
            description: None,
            position,
            assignee_id: None,
        }
    }

    #[test]
    fn test_create_assigns_unique_ids_and_monotonic_timestamps() {
        let mut tasks: Table<Task> = Table::new();
        let list_id = Uuid::new_v4();

        let created: Vec<Task> = (0..5)
            .map(|i| tasks.create(new_task(list_id, &format!("t{i}"), i)))
            .collect();

        for (i, a) in created.iter().enumerate() {
            for b in &created[i + 1..] {
                assert_ne!(a.id, b.id);
                assert!(a.created_at <= b.created_at);
            }
        }
    }

    #[test]
    fn test_find_unique_first_match_or_none() {
        let mut lists: Table<List> = Table::new();
        let board_id = Uuid::new_v4();
        let first = lists.create(NewList {
            board_id,
            title: "Todo".to_string(),
            position: 0,
        });
        lists.create(NewList {
            board_id,
            title: "Done".to_string(),
            position: 1,
        });

        let found = lists.find_unique(ListField::BoardId, board_id).unwrap();
        assert_eq!(found.id, first.id);
        assert!(lists.find_unique(ListField::Id, Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_find_many_position_sort_is_monotone_and_stable() {
        let mut tasks: Table<Task> = Table::new();
        let list_id = Uuid::new_v4();
        tasks.create(new_task(list_id, "c", 2));
        tasks.create(new_task(list_id, "a1", 0));
        tasks.create(new_task(list_id, "b", 1));
        tasks.create(new_task(list_id, "a2", 0));

        let ordered = tasks.find_many(
            Query::new()
                .filter(TaskField::ListId, list_id)
                .order_by(TaskField::Position, SortDirection::Asc),
        );

        for pair in ordered.windows(2) {
            assert!(pair[0].position <= pair[1].position);
        }
        // Equal positions keep insertion order
        assert_eq!(ordered[0].title, "a1");
        assert_eq!(ordered[1].title, "a2");
    }

    #[test]
    fn test_find_many_descending() {
        let mut tasks: Table<Task> = Table::new();
        let list_id = Uuid::new_v4();
        tasks.create(new_task(list_id, "low", 0));
        tasks.create(new_task(list_id, "high", 9));

        let ordered = tasks.find_many(
            Query::new().order_by(TaskField::Position, SortDirection::Desc),
        );

        assert_eq!(ordered[0].title, "high");
        assert_eq!(ordered[1].title, "low");
    }

    #[test]
    fn test_creation_timestamp_order_matches_insertion_order() {
        let mut tasks: Table<Task> = Table::new();
        let list_id = Uuid::new_v4();
        for title in ["first", "second", "third"] {
            tasks.create(new_task(list_id, title, 0));
        }

        let by_creation = tasks.find_many(
            Query::new().order_by(TaskField::CreatedAt, SortDirection::Asc),
        );

        let titles: Vec<&str> = by_creation.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_filter_is_a_conjunction() {
        let mut tasks: Table<Task> = Table::new();
        let list_a = Uuid::new_v4();
        let list_b = Uuid::new_v4();
        let assignee = Uuid::new_v4();

        let mut draft = new_task(list_a, "mine", 0);
        draft.assignee_id = Some(assignee);
        tasks.create(draft);
        tasks.create(new_task(list_a, "unowned", 1));
        tasks.create(new_task(list_b, "other list", 0));

        let mine = tasks.find_many(
            Query::new()
                .filter(TaskField::ListId, list_a)
                .filter(TaskField::AssigneeId, Some(assignee)),
        );

        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "mine");
    }

    #[test]
    fn test_update_merges_and_moving_relocates() {
        let mut tasks: Table<Task> = Table::new();
        let list_a = Uuid::new_v4();
        let list_b = Uuid::new_v4();
        let task = tasks.create(new_task(list_a, "movable", 0));

        tasks
            .update(
                TaskField::Id,
                task.id,
                TaskUpdate {
                    list_id: Some(list_b),
                    ..Default::default()
                },
            )
            .unwrap();

        let in_a = tasks.find_many(Query::new().filter(TaskField::ListId, list_a));
        let in_b = tasks.find_many(Query::new().filter(TaskField::ListId, list_b));
        assert!(in_a.iter().all(|t| t.id != task.id));
        assert!(in_b.iter().any(|t| t.id == task.id));
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut tasks: Table<Task> = Table::new();
        let err = tasks
            .update(TaskField::Id, Uuid::new_v4(), TaskUpdate::default())
            .unwrap_err();
        assert!(matches!(err, BoardError::NotFound(_)));
    }

    #[test]
    fn test_delete_returns_record_and_missing_leaves_store_unchanged() {
        let mut tasks: Table<Task> = Table::new();
        let list_id = Uuid::new_v4();
        let task = tasks.create(new_task(list_id, "doomed", 0));
        tasks.create(new_task(list_id, "survivor", 1));

        let deleted = tasks.delete(TaskField::Id, task.id).unwrap();
        assert_eq!(deleted.id, task.id);
        assert_eq!(tasks.len(), 1);

        let err = tasks.delete(TaskField::Id, task.id).unwrap_err();
        assert!(matches!(err, BoardError::NotFound(_)));
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_clearing_assignee_via_field_update() {
        let mut tasks: Table<Task> = Table::new();
        let list_id = Uuid::new_v4();
        let mut draft = new_task(list_id, "owned", 0);
        draft.assignee_id = Some(Uuid::new_v4());
        let task = tasks.create(draft);

        let updated = tasks
            .update(
                TaskField::Id,
                task.id,
                TaskUpdate {
                    assignee_id: FieldUpdate::Clear,
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(updated.assignee_id.is_none());
    }
}
