use chrono::NaiveDate;
use tracing::{debug, info};

use crate::date::{format_date, parse_date};
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTask, Task};
use crate::query::TaskSearch;
use crate::recurrence::next_occurrence;
use crate::repository::TaskRepository;
use crate::rule::RecurrenceRule;
use crate::validation::normalize;

/// Task flows on top of an injected [`TaskRepository`].
///
/// `today` is always passed in by the caller so every flow stays
/// deterministic under test.
#[derive(Debug, Clone)]
pub struct TaskService<R> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates and stores a new task.
    pub async fn create_task(&self, data: NewTask, today: NaiveDate) -> Result<Task, CoreError> {
        let mut candidate = data.into_task(0);
        normalize(&mut candidate, today)?;

        let task = self
            .repo
            .add_task(NewTask {
                date: candidate.date,
                title: candidate.title,
                comment: candidate.comment,
                repeat: candidate.repeat,
            })
            .await?;
        info!(id = task.id, date = %task.date, repeat = %task.repeat, "task created");
        Ok(task)
    }

    /// Validates and overwrites an existing task.
    pub async fn update_task(&self, mut task: Task, today: NaiveDate) -> Result<Task, CoreError> {
        normalize(&mut task, today)?;
        self.repo.update_task(&task).await?;
        debug!(id = task.id, date = %task.date, "task updated");
        Ok(task)
    }

    /// Marks a task as done.
    ///
    /// One-off tasks are deleted. Recurring tasks move to the first occurrence
    /// after their own current date.
    pub async fn complete_task(&self, id: i64) -> Result<CompletionResult, CoreError> {
        let mut task = self.get_task(id).await?;

        if !task.is_recurring() {
            self.repo.delete_task(id).await?;
            info!(id, "one-off task completed and deleted");
            return Ok(CompletionResult::Deleted(task));
        }

        let current = parse_date(&task.date)?;
        let rule: RecurrenceRule = task.repeat.parse()?;
        let next = format_date(next_occurrence(current, current, &rule)?);

        self.repo.update_task_date(id, &next).await?;
        info!(id, from = %task.date, to = %next, rule = rule.kind(), "task rescheduled");
        task.date = next;
        Ok(CompletionResult::Rescheduled(task))
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, CoreError> {
        self.repo
            .find_task_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    pub async fn list_tasks(&self, search: &str, limit: u32) -> Result<Vec<Task>, CoreError> {
        self.repo.find_tasks(&TaskSearch::parse(search), limit).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete_task(id).await?;
        info!(id, "task deleted");
        Ok(())
    }
}
