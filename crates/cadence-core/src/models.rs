use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use sqlx::FromRow;

/// A scheduled task as stored in the `scheduler` table.
///
/// `date` is kept in its `YYYYMMDD` storage form and `repeat` is the raw rule
/// text; neither is parsed until a flow needs it. On the wire the id travels
/// as a decimal string.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub repeat: String,
}

impl Task {
    /// Whether the task carries a recurrence rule.
    pub fn is_recurring(&self) -> bool {
        !self.repeat.is_empty()
    }
}

/// Data required to create a task. The id is assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub repeat: String,
}

impl NewTask {
    pub(crate) fn into_task(self, id: i64) -> Task {
        Task {
            id,
            date: self.date,
            title: self.title,
            comment: self.comment,
            repeat: self.repeat,
        }
    }
}

/// Outcome of marking a task as done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// One-off task; it has been removed from the store.
    Deleted(Task),
    /// Recurring task moved to its next occurrence.
    Rescheduled(Task),
}
