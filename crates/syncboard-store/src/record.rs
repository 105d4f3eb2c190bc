//! Typed record schemas for the ordered store.
//!
//! Each entity kind declares a `Field` enum (its queryable columns), a
//! `Draft` (caller-provided creation data) and a `Patch` (shallow-merge
//! update). The store stays generic; the schemas stay statically typed.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use uuid::Uuid;

/// Comparable value union covering every queryable field type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Id(Uuid),
    OptId(Option<Uuid>),
    Text(String),
    Int(i64),
    Time(DateTime<Utc>),
}

impl FieldValue {
    /// Ordering within the same variant; mismatched variants compare equal
    /// so a bad query degrades to insertion order instead of panicking.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Id(a), FieldValue::Id(b)) => a.cmp(b),
            (FieldValue::OptId(a), FieldValue::OptId(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Time(a), FieldValue::Time(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        FieldValue::Id(value)
    }
}

impl From<Option<Uuid>> for FieldValue {
    fn from(value: Option<Uuid>) -> Self {
        FieldValue::OptId(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Time(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Exact-match conjunction filter plus an optional single-field sort.
#[derive(Debug, Clone)]
pub struct Query<F> {
    pub filter: Vec<(F, FieldValue)>,
    pub order_by: Option<(F, SortDirection)>,
}

impl<F> Default for Query<F> {
    fn default() -> Self {
        Self {
            filter: Vec::new(),
            order_by: None,
        }
    }
}

impl<F> Query<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, field: F, value: impl Into<FieldValue>) -> Self {
        self.filter.push((field, value.into()));
        self
    }

    pub fn order_by(mut self, field: F, direction: SortDirection) -> Self {
        self.order_by = Some((field, direction));
        self
    }
}

/// Schema contract every stored entity implements.
pub trait Record: Clone + Send + Sync + 'static {
    /// Caller-provided creation data; the store adds id and timestamp.
    type Draft;
    /// Shallow-merge update applied by `Table::update`.
    type Patch;
    /// Queryable columns.
    type Field: Copy + Eq + Send + Sync;

    /// Entity kind name used in NotFound errors.
    const ENTITY: &'static str;

    fn assemble(draft: Self::Draft, id: Uuid, created_at: DateTime<Utc>) -> Self;
    fn field(&self, field: Self::Field) -> FieldValue;
    fn apply(&mut self, patch: Self::Patch);
}
