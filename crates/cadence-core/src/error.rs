use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    /// Rule text that does not follow the `d`/`y`/`w`/`m` grammar.
    #[error("{0}")]
    InvalidRepeat(String),

    /// A date string that is not a real `YYYYMMDD` calendar day.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A well-formed rule that cannot produce a next date.
    #[error("no next date: {0}")]
    RuleExhausted(String),

    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    /// True for errors caused by the caller's input rather than by storage.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidRepeat(_)
                | CoreError::InvalidDate(_)
                | CoreError::RuleExhausted(_)
                | CoreError::Validation(_)
        )
    }
}
