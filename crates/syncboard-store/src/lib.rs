pub mod entities;
pub mod memory;
pub mod record;

pub use entities::{BoardField, ListField, RecordStore, TaskField, UserField};
pub use memory::Table;
pub use record::{FieldValue, Query, Record, SortDirection};
