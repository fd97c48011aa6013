//! The recurrence rule mini-language.
//!
//! | text            | rule                                          |
//! |-----------------|-----------------------------------------------|
//! | `d 7`           | every 7 days (1..=400)                        |
//! | `y`             | every year on the same month and day          |
//! | `w 1,3`         | every Monday and Wednesday (1=Mon .. 7=Sun)   |
//! | `m 1,-1`        | first and last day of every month             |
//! | `m 15 1,7`      | the 15th of January and July                  |
//!
//! In monthly rules `-1` is the last day of the month and `-2` the day before it.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

pub const MAX_INTERVAL_DAYS: u32 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceRule {
    Daily { interval_days: u32 },
    Yearly,
    Weekly { weekdays: BTreeSet<u32> },
    Monthly { days: BTreeSet<i32>, months: BTreeSet<u32> },
}

impl RecurrenceRule {
    /// Short name of the rule kind, used in log fields and messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RecurrenceRule::Daily { .. } => "daily",
            RecurrenceRule::Yearly => "yearly",
            RecurrenceRule::Weekly { .. } => "weekly",
            RecurrenceRule::Monthly { .. } => "monthly",
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "y" {
            return Ok(RecurrenceRule::Yearly);
        }

        let parts: Vec<&str> = s.split(' ').collect();
        match parts[0] {
            "d" if parts.len() > 1 => parse_daily(&parts),
            "w" if parts.len() > 1 => parse_weekly(&parts),
            "m" if parts.len() > 1 => parse_monthly(&parts),
            _ => Err(CoreError::InvalidRepeat("invalid repeat".to_string())),
        }
    }
}

fn parse_daily(parts: &[&str]) -> Result<RecurrenceRule, CoreError> {
    if parts.len() != 2 {
        return Err(CoreError::InvalidRepeat("invalid repeat format for d".to_string()));
    }
    let interval_days = parse_in_range(parts[1], 1, MAX_INTERVAL_DAYS as i64)
        .ok_or_else(|| CoreError::InvalidRepeat(format!("invalid days: {}", parts[1])))?;
    Ok(RecurrenceRule::Daily { interval_days: interval_days as u32 })
}

fn parse_weekly(parts: &[&str]) -> Result<RecurrenceRule, CoreError> {
    if parts.len() != 2 {
        return Err(CoreError::InvalidRepeat("invalid repeat format for w".to_string()));
    }
    let weekdays = parse_list(parts[1], "weekday", |n| (1..=7).contains(&n))?
        .into_iter()
        .map(|n| n as u32)
        .collect();
    Ok(RecurrenceRule::Weekly { weekdays })
}

fn parse_monthly(parts: &[&str]) -> Result<RecurrenceRule, CoreError> {
    if parts.len() > 3 {
        return Err(CoreError::InvalidRepeat("invalid repeat format for m".to_string()));
    }
    let days = parse_list(parts[1], "day", |n| n != 0 && (-2..=31).contains(&n))?
        .into_iter()
        .map(|n| n as i32)
        .collect();
    let months = match parts.get(2) {
        Some(list) => parse_list(list, "month", |n| (1..=12).contains(&n))?
            .into_iter()
            .map(|n| n as u32)
            .collect(),
        None => BTreeSet::new(),
    };
    Ok(RecurrenceRule::Monthly { days, months })
}

/// Parses a comma separated list where every element must satisfy `valid`.
fn parse_list(
    list: &str,
    what: &str,
    valid: impl Fn(i64) -> bool,
) -> Result<BTreeSet<i64>, CoreError> {
    list.split(',')
        .map(|token| {
            token
                .parse::<i64>()
                .ok()
                .filter(|n| valid(*n))
                .ok_or_else(|| CoreError::InvalidRepeat(format!("invalid {}: {}", what, token)))
        })
        .collect()
}

fn parse_in_range(token: &str, min: i64, max: i64) -> Option<i64> {
    token.parse::<i64>().ok().filter(|n| (min..=max).contains(n))
}

fn join<T: fmt::Display>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceRule::Daily { interval_days } => write!(f, "d {}", interval_days),
            RecurrenceRule::Yearly => write!(f, "y"),
            RecurrenceRule::Weekly { weekdays } => write!(f, "w {}", join(weekdays)),
            RecurrenceRule::Monthly { days, months } if months.is_empty() => {
                write!(f, "m {}", join(days))
            }
            RecurrenceRule::Monthly { days, months } => {
                write!(f, "m {} {}", join(days), join(months))
            }
        }
    }
}
