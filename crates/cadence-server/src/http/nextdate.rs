use axum::{extract::Query, http::StatusCode};
use cadence_core::date::parse_date;
use cadence_core::recurrence::next_date;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct NextDateParams {
    pub now: Option<String>,
    pub date: Option<String>,
    pub repeat: Option<String>,
}

/// GET /api/nextdate?now=YYYYMMDD&date=YYYYMMDD&repeat=RULE
///
/// Answers with the next date as plain text. `now` defaults to today.
pub async fn next_date_handler(
    Query(params): Query<NextDateParams>,
) -> Result<String, (StatusCode, String)> {
    let now = match params.now.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => parse_date(raw).map_err(bad_request)?,
        None => chrono::Local::now().date_naive(),
    };
    let date = params.date.unwrap_or_default();
    let repeat = params.repeat.unwrap_or_default();

    let next = next_date(now, &date, &repeat).map_err(bad_request)?;
    debug!(%date, %repeat, %next, "computed next date");
    Ok(next)
}

fn bad_request(err: cadence_core::error::CoreError) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, err.to_string())
}
