use chrono::NaiveDate;

use crate::date::{format_date, parse_date};
use crate::error::CoreError;
use crate::models::Task;
use crate::recurrence::next_occurrence;
use crate::rule::RecurrenceRule;

/// Normalizes a task before it is stored.
///
/// # Behavior
/// - Trims the title and rejects tasks without one.
/// - An empty date becomes `today`.
/// - A past one-off task is pulled forward to `today`.
/// - A past recurring task jumps to its first occurrence after `today`.
/// - For current or future recurring tasks the rule is checked and the date left alone.
///
/// Rule and date failures are reported as [`CoreError::Validation`] with the
/// underlying message.
pub fn normalize(task: &mut Task, today: NaiveDate) -> Result<(), CoreError> {
    task.title = task.title.trim().to_string();
    if task.title.is_empty() {
        return Err(CoreError::Validation("title required".to_string()));
    }

    if task.date.is_empty() {
        task.date = format_date(today);
        return Ok(());
    }

    let date = parse_date(&task.date).map_err(|_| {
        CoreError::Validation("invalid date format, expected YYYYMMDD".to_string())
    })?;

    if !task.is_recurring() {
        if date < today {
            task.date = format_date(today);
        }
        return Ok(());
    }

    let next = task
        .repeat
        .parse::<RecurrenceRule>()
        .and_then(|rule| next_occurrence(today, date, &rule))
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    if date < today {
        task.date = format_date(next);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn task(date: &str, repeat: &str) -> Task {
        Task {
            id: 1,
            date: date.to_string(),
            title: "x".to_string(),
            comment: String::new(),
            repeat: repeat.to_string(),
        }
    }

    #[rstest]
    #[case("", "", "20240101")]
    #[case("", "d 5", "20240101")]
    #[case("20200101", "", "20240101")]
    #[case("20240101", "", "20240101")]
    #[case("20250101", "", "20250101")]
    #[case("20231230", "d 5", "20240104")]
    #[case("20231201", "m -1", "20240131")]
    #[case("20240301", "d 5", "20240301")]
    #[case("20240101", "w 1", "20240101")]
    fn test_normalize_dates(#[case] date: &str, #[case] repeat: &str, #[case] expected: &str) {
        let mut t = task(date, repeat);
        normalize(&mut t, today()).unwrap();
        assert_eq!(t.date, expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_title_required(#[case] title: &str) {
        let mut t = task("20240101", "");
        t.title = title.to_string();
        match normalize(&mut t, today()) {
            Err(CoreError::Validation(msg)) => assert_eq!(msg, "title required"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[rstest]
    #[case("  x  ", "x")]
    #[case("\tDentist\n", "Dentist")]
    #[case("Call mom", "Call mom")]
    fn test_title_is_trimmed(#[case] title: &str, #[case] expected: &str) {
        let mut t = task("20240101", "");
        t.title = title.to_string();
        normalize(&mut t, today()).unwrap();
        assert_eq!(t.title, expected);
    }

    #[rstest]
    #[case("2024-01-01", "")]
    #[case("20241301", "d 1")]
    #[case("tomorrow", "")]
    fn test_invalid_date(#[case] date: &str, #[case] repeat: &str) {
        let mut t = task(date, repeat);
        match normalize(&mut t, today()) {
            Err(CoreError::Validation(msg)) => {
                assert_eq!(msg, "invalid date format, expected YYYYMMDD")
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(t.date, date);
    }

    #[rstest]
    #[case("20200101", "d 0", "invalid days: 0")]
    #[case("20300101", "k 34", "invalid repeat")]
    #[case("20300101", "w 8", "invalid weekday: 8")]
    fn test_rule_errors_are_wrapped(#[case] date: &str, #[case] repeat: &str, #[case] msg: &str) {
        let mut t = task(date, repeat);
        match normalize(&mut t, today()) {
            Err(CoreError::Validation(m)) => assert_eq!(m, msg),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(t.date, date);
    }

    #[test]
    fn test_unsatisfiable_rule_is_a_validation_error() {
        let mut t = task("20300101", "m 31 2");
        assert!(matches!(normalize(&mut t, today()), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for (date, repeat) in [("20231215", "d 7"), ("20220101", "y"), ("", "m 15"), ("20240505", "w 2,4")] {
            let mut t = task(date, repeat);
            normalize(&mut t, today()).unwrap();
            let first = t.date.clone();
            normalize(&mut t, today()).unwrap();
            assert_eq!(t.date, first);
        }
    }
}
