use chrono::{Datelike, Days, Months, NaiveDate};
use std::collections::BTreeSet;

use crate::date::{first_of_next_month, format_date, is_representable, last_day_of_month, parse_date};
use crate::error::CoreError;
use crate::rule::RecurrenceRule;

/// Upper bound on the number of candidate days a search may visit.
pub const MAX_SEARCH_ITERATIONS: usize = 10_000;

/// Computes the next date strictly after `now` on which a task governed by
/// `rule` falls due, counting from its previously scheduled date `start`.
///
/// # Behavior
/// - Daily and yearly rules always advance `start` at least once, even when
///   `start` is already after `now`.
/// - Weekly rules ignore `start` and search from the day after `now`.
/// - Monthly rules may return `start` itself when it matches and lies after `now`.
///
/// Rules that can never produce a date (for example `m 31 2`) fail with
/// [`CoreError::RuleExhausted`] once the search bound is reached.
pub fn next_occurrence(
    now: NaiveDate,
    start: NaiveDate,
    rule: &RecurrenceRule,
) -> Result<NaiveDate, CoreError> {
    let next = match rule {
        RecurrenceRule::Daily { interval_days } => next_daily(rule, now, start, *interval_days)?,
        RecurrenceRule::Yearly => next_yearly(rule, now, start)?,
        RecurrenceRule::Weekly { weekdays } => next_weekly(rule, now, weekdays)?,
        RecurrenceRule::Monthly { days, months } => next_monthly(rule, now, start, days, months)?,
    };

    if !is_representable(next) {
        return Err(exhausted(rule, "next date is beyond year 9999"));
    }
    Ok(next)
}

/// String-level entry point: parses `start` and `repeat`, returns the
/// next date in `YYYYMMDD` form.
pub fn next_date(now: NaiveDate, start: &str, repeat: &str) -> Result<String, CoreError> {
    let start = parse_date(start)?;
    let rule: RecurrenceRule = repeat.parse()?;
    next_occurrence(now, start, &rule).map(format_date)
}

fn exhausted(rule: &RecurrenceRule, reason: &str) -> CoreError {
    CoreError::RuleExhausted(format!("{} rule '{}': {}", rule.kind(), rule, reason))
}

fn next_daily(
    rule: &RecurrenceRule,
    now: NaiveDate,
    start: NaiveDate,
    interval_days: u32,
) -> Result<NaiveDate, CoreError> {
    if interval_days == 0 {
        return Err(exhausted(rule, "a zero-day interval never advances"));
    }

    let interval = i64::from(interval_days);
    let steps = if start > now {
        1
    } else {
        (now - start).num_days() / interval + 1
    };

    u64::try_from(steps * interval)
        .ok()
        .and_then(|days| start.checked_add_days(Days::new(days)))
        .ok_or_else(|| exhausted(rule, "date out of range"))
}

fn next_yearly(rule: &RecurrenceRule, now: NaiveDate, start: NaiveDate) -> Result<NaiveDate, CoreError> {
    // Every candidate is derived from the anchor so a Feb 29 start returns to
    // Feb 29 in leap years instead of drifting to Feb 28 for good.
    let mut years = (now.year() - start.year()).max(1) as u32;
    for _ in 0..MAX_SEARCH_ITERATIONS {
        let candidate = start
            .checked_add_months(Months::new(years * 12))
            .ok_or_else(|| exhausted(rule, "date out of range"))?;
        if candidate > now {
            return Ok(candidate);
        }
        years += 1;
    }
    Err(exhausted(rule, "search limit reached"))
}

fn next_weekly(
    rule: &RecurrenceRule,
    now: NaiveDate,
    weekdays: &BTreeSet<u32>,
) -> Result<NaiveDate, CoreError> {
    let mut candidate = now;
    for _ in 0..7 {
        candidate = candidate
            .succ_opt()
            .ok_or_else(|| exhausted(rule, "date out of range"))?;
        // ISO numbering: Monday = 1 .. Sunday = 7
        let weekday = candidate.weekday().number_from_monday();
        if weekdays.contains(&weekday) {
            return Ok(candidate);
        }
    }
    Err(exhausted(rule, "no weekday selected"))
}

fn next_monthly(
    rule: &RecurrenceRule,
    now: NaiveDate,
    start: NaiveDate,
    days: &BTreeSet<i32>,
    months: &BTreeSet<u32>,
) -> Result<NaiveDate, CoreError> {
    let out_of_range = || exhausted(rule, "date out of range");

    // Nothing on or before `now` can be returned, so the walk may begin
    // at whichever of `start` and `now + 1` comes later.
    let mut candidate = start.max(now.succ_opt().ok_or_else(out_of_range)?);

    for _ in 0..MAX_SEARCH_ITERATIONS {
        if !months.is_empty() && !months.contains(&candidate.month()) {
            candidate = first_of_next_month(candidate).ok_or_else(out_of_range)?;
            continue;
        }

        let last_day = last_day_of_month(candidate) as i32;
        let day = candidate.day() as i32;
        let matches = days.iter().any(|&marker| match marker {
            -1 => day == last_day,
            -2 => day == last_day - 1,
            marker => day == marker,
        });
        if matches {
            return Ok(candidate);
        }

        candidate = candidate.succ_opt().ok_or_else(out_of_range)?;
    }

    Err(exhausted(rule, "search limit reached"))
}
