use serde::{Deserialize, Serialize};

use crate::list::List;
use crate::task::Task;

/// Read-model a viewer renders: one list with its tasks, both in position
/// order. Flattened on the wire so the list fields sit at the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWithTasks {
    #[serde(flatten)]
    pub list: List,
    pub tasks: Vec<Task>,
}
