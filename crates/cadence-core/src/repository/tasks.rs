use crate::date::format_date;
use crate::error::CoreError;
use crate::models::{NewTask, Task};
use crate::query::TaskSearch;
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTask) -> Result<Task, CoreError> {
        let result = sqlx::query(
            r#"INSERT INTO scheduler (date, title, comment, repeat)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&data.date)
        .bind(&data.title)
        .bind(&data.comment)
        .bind(&data.repeat)
        .execute(self.pool())
        .await?;

        Ok(data.into_task(result.last_insert_rowid()))
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as(
            "SELECT id, date, title, comment, repeat FROM scheduler WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(task)
    }

    async fn find_tasks(&self, search: &TaskSearch, limit: u32) -> Result<Vec<Task>, CoreError> {
        let mut query_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, date, title, comment, repeat FROM scheduler");

        match search {
            TaskSearch::All => {}
            TaskSearch::Date(date) => {
                query_builder.push(" WHERE date = ");
                query_builder.push_bind(format_date(*date));
            }
            TaskSearch::Text(text) => {
                let pattern = format!("%{}%", text);
                query_builder.push(" WHERE title LIKE ");
                query_builder.push_bind(pattern.clone());
                query_builder.push(" OR comment LIKE ");
                query_builder.push_bind(pattern);
            }
        }

        query_builder.push(" ORDER BY date, id LIMIT ");
        query_builder.push_bind(i64::from(limit));

        let tasks = query_builder.build_query_as::<Task>().fetch_all(self.pool()).await?;
        Ok(tasks)
    }

    async fn update_task(&self, task: &Task) -> Result<(), CoreError> {
        let result = sqlx::query(
            r#"UPDATE scheduler
            SET date = $1, title = $2, comment = $3, repeat = $4
            WHERE id = $5
            "#,
        )
        .bind(&task.date)
        .bind(&task.title)
        .bind(&task.comment)
        .bind(&task.repeat)
        .bind(task.id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(task.id.to_string()));
        }
        Ok(())
    }

    async fn update_task_date(&self, id: i64, date: &str) -> Result<(), CoreError> {
        let result = sqlx::query("UPDATE scheduler SET date = $1 WHERE id = $2")
            .bind(date)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
