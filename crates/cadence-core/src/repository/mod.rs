use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{NewTask, Task};
use crate::query::TaskSearch;
use async_trait::async_trait;

pub mod tasks;

/// Storage operations for tasks. The core only talks to storage through
/// this trait; [`SqliteRepository`] is the production implementation.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn add_task(&self, data: NewTask) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    async fn find_tasks(&self, search: &TaskSearch, limit: u32) -> Result<Vec<Task>, CoreError>;
    async fn update_task(&self, task: &Task) -> Result<(), CoreError>;
    async fn update_task_date(&self, id: i64, date: &str) -> Result<(), CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
}

/// SQLite implementation of the repository pattern
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
