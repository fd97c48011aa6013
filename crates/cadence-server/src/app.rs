use axum::{
    routing::{get, post},
    Router,
};
use cadence_core::repository::SqliteRepository;
use cadence_core::service::TaskService;
use chrono::NaiveDate;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::http;

/// Shared state handed to every handler as `Arc<AppState>`.
pub struct AppState {
    pub config: Config,
    pub service: TaskService<SqliteRepository>,
}

impl AppState {
    pub fn new(config: Config, service: TaskService<SqliteRepository>) -> Self {
        Self { config, service }
    }

    /// The server's local calendar date.
    pub fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.web_dir);

    Router::new()
        .route("/api/nextdate", get(http::nextdate::next_date_handler))
        .route("/api/tasks", get(http::tasks::list_tasks))
        .route(
            "/api/task",
            get(http::tasks::get_task)
                .post(http::tasks::create_task)
                .put(http::tasks::update_task)
                .delete(http::tasks::delete_task),
        )
        .route("/api/task/done", post(http::tasks::complete_task))
        .fallback_service(static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
