use chrono::NaiveDate;

/// Search criteria for listing tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSearch {
    All,
    /// Exact due date, entered as `DD.MM.YYYY`.
    Date(NaiveDate),
    /// Substring of the title or the comment.
    Text(String),
}

impl TaskSearch {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return TaskSearch::All;
        }
        match NaiveDate::parse_from_str(input, "%d.%m.%Y") {
            Ok(date) => TaskSearch::Date(date),
            Err(_) => TaskSearch::Text(input.to_string()),
        }
    }
}
