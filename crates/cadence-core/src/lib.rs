//! # Cadence Core Library
//!
//! Recurring task scheduling: a small rule language, the engine that moves a
//! task to its next due date, and the SQLite storage behind it.
//!
//! ## Features
//!
//! - **Rule Language**: `d <n>`, `y`, `w <weekdays>` and `m <days> [<months>]`
//!   parsed into a closed [`rule::RecurrenceRule`] enum
//! - **Bounded Search**: every rule either yields a date or fails with
//!   [`error::CoreError::RuleExhausted`]; nothing loops forever
//! - **Task Validation**: default and backfill logic for created and edited tasks
//! - **Injected Storage**: the store sits behind [`repository::TaskRepository`]
//!
//! ## Core Modules
//!
//! - [`date`]: `YYYYMMDD` parsing and formatting
//! - [`rule`]: Recurrence rule parser and canonical rendering
//! - [`recurrence`]: Next-occurrence engine
//! - [`validation`]: Task normalization before storage
//! - [`db`]: Database connection and migration management
//! - [`models`]: Core data structures and transfer objects
//! - [`repository`]: Data access layer with Repository pattern
//! - [`service`]: Create, update and complete flows
//! - [`query`]: Search parameter parsing
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cadence_core::{db, models::NewTask, repository::SqliteRepository, service::TaskService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = db::establish_connection("scheduler.db", 5).await?;
//!     let service = TaskService::new(SqliteRepository::new(pool));
//!
//!     let today = chrono::Local::now().date_naive();
//!     let task = service
//!         .create_task(
//!             NewTask {
//!                 title: "Water the plants".to_string(),
//!                 repeat: "d 3".to_string(),
//!                 ..Default::default()
//!             },
//!             today,
//!         )
//!         .await?;
//!     println!("Created task {} due {}", task.id, task.date);
//!
//!     Ok(())
//! }
//! ```

pub mod date;
pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod recurrence;
pub mod repository;
pub mod rule;
pub mod service;
pub mod validation;
