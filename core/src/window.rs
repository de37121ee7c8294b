//! Time window resolution from free-form filter text
//!
//! Turns phrases like "last 7 days" or "yesterday" into a concrete
//! `[start, end]` window. Matching is case-insensitive substring search,
//! first branch wins, so ambiguous text resolves to the earliest branch
//! in the table ("last 7 days" hits the week branch before the generic
//! N-days pattern).

use std::sync::LazyLock;

use chrono::{DateTime, Duration, Local, NaiveDate};
use regex::Regex;

static DAYS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*days?").expect("days pattern is valid")
});

/// A resolved time interval used to filter transactions by timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    /// Human-readable name of the window ("all" when unbounded)
    pub label: String,
    /// Inclusive lower bound; `None` means all history
    pub start: Option<DateTime<Local>>,
    /// Upper bound; now, except for single-day windows with a fixed end
    pub end: DateTime<Local>,
}

impl TimeWindow {
    /// Resolve a free-form filter against the current local time
    pub fn resolve(input: Option<&str>) -> Self {
        Self::resolve_at(input, Local::now())
    }

    /// Resolve a free-form filter against an explicit "now"
    pub fn resolve_at(input: Option<&str>, now: DateTime<Local>) -> Self {
        let text = match input {
            Some(raw) if !raw.trim().is_empty() => raw.to_lowercase(),
            _ => return Self::unbounded(now),
        };
        let text = text.trim();

        if text.contains("today") {
            return Self {
                label: "today".to_string(),
                start: Some(day_start(now.date_naive(), now)),
                end: now,
            };
        }
        if text.contains("yesterday") {
            let date = now.date_naive() - Duration::days(1);
            return Self {
                label: "yesterday".to_string(),
                start: Some(day_start(date, now)),
                end: day_end(date, now),
            };
        }
        if text.contains("week") || text.contains("7 days") {
            return Self::days_back("last week", 7, now);
        }
        if text.contains("month") || text.contains("30 days") {
            return Self::days_back("last month", 30, now);
        }
        if text.contains("3 months") || text.contains("90 days") {
            return Self::days_back("last 3 months", 90, now);
        }
        if text.contains("year") || text.contains("365 days") {
            return Self::days_back("last year", 365, now);
        }
        if let Some(captures) = DAYS_PATTERN.captures(text) {
            if let Ok(days) = captures[1].parse::<i64>() {
                return Self::days_back(format!("last {} days", days), days, now);
            }
        }

        Self::unbounded(now)
    }

    /// Window covering all history
    fn unbounded(now: DateTime<Local>) -> Self {
        Self {
            label: "all".to_string(),
            start: None,
            end: now,
        }
    }

    fn days_back(label: impl Into<String>, days: i64, now: DateTime<Local>) -> Self {
        Self {
            label: label.into(),
            start: Some(now - Duration::days(days)),
            end: now,
        }
    }

    /// Whether this window restricts history at all
    pub fn is_filtered(&self) -> bool {
        self.label != "all"
    }

    /// Lower bound as milliseconds since epoch
    pub fn start_ms(&self) -> Option<u64> {
        self.start.map(|start| start.timestamp_millis().max(0) as u64)
    }
}

/// Local midnight of the given date; DST gaps fall back to `now`
fn day_start(date: NaiveDate, fallback: DateTime<Local>) -> DateTime<Local> {
    date.and_hms_opt(0, 0, 0)
        .and_then(|ndt| ndt.and_local_timezone(Local).earliest())
        .unwrap_or(fallback)
}

/// Last millisecond of the given date
fn day_end(date: NaiveDate, fallback: DateTime<Local>) -> DateTime<Local> {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .and_then(|ndt| ndt.and_local_timezone(Local).earliest())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon(year: i32, month: u32, day: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid test time")
    }

    #[test]
    fn test_no_input_is_unbounded() {
        let window = TimeWindow::resolve_at(None, noon(2024, 3, 15));
        assert_eq!(window.label, "all");
        assert!(window.start.is_none());
        assert!(!window.is_filtered());

        let window = TimeWindow::resolve_at(Some("   "), noon(2024, 3, 15));
        assert_eq!(window.label, "all");
    }

    #[test]
    fn test_unrecognized_text_is_unbounded() {
        let window = TimeWindow::resolve_at(Some("everything ever"), noon(2024, 3, 15));
        assert_eq!(window.label, "all");
        assert!(window.start.is_none());
    }

    #[test]
    fn test_today_starts_at_midnight() {
        let now = noon(2024, 3, 15);
        let window = TimeWindow::resolve_at(Some("show me today"), now);
        assert_eq!(window.label, "today");
        let start = window.start.expect("bounded");
        assert_eq!(start, day_start(now.date_naive(), now));
        assert_eq!(window.end, now);
    }

    #[test]
    fn test_yesterday_has_fixed_bounds() {
        // Scenario: "yesterday" on 2024-03-15 covers all of 2024-03-14.
        let now = noon(2024, 3, 15);
        let window = TimeWindow::resolve_at(Some("yesterday"), now);
        assert_eq!(window.label, "yesterday");

        let expected_date = NaiveDate::from_ymd_opt(2024, 3, 14).expect("valid date");
        assert_eq!(window.start.expect("bounded"), day_start(expected_date, now));
        assert_eq!(window.end, day_end(expected_date, now));
        assert_eq!(window.end.time().to_string(), "23:59:59.999");
    }

    #[test]
    fn test_last_seven_days_takes_week_branch() {
        // "last 7 days" must resolve via the week branch, not the generic
        // N-days pattern; both produce the same bounds but not the same label.
        let now = noon(2024, 3, 15);
        let window = TimeWindow::resolve_at(Some("last 7 days"), now);
        assert_eq!(window.label, "last week");
        assert_eq!(window.start.expect("bounded"), now - Duration::days(7));
    }

    #[test]
    fn test_month_and_year_phrases() {
        let now = noon(2024, 3, 15);
        assert_eq!(
            TimeWindow::resolve_at(Some("this month"), now).label,
            "last month"
        );
        assert_eq!(
            TimeWindow::resolve_at(Some("30 days"), now).label,
            "last month"
        );
        assert_eq!(
            TimeWindow::resolve_at(Some("last year"), now).label,
            "last year"
        );
        assert_eq!(
            TimeWindow::resolve_at(Some("365 days"), now).label,
            "last year"
        );
    }

    #[test]
    fn test_ninety_days_reaches_three_month_branch() {
        // "3 months" itself is shadowed by the "month" branch; the 90-day
        // window is reachable through its numeric alias only.
        let now = noon(2024, 3, 15);
        let window = TimeWindow::resolve_at(Some("90 days"), now);
        assert_eq!(window.label, "last 3 months");
        assert_eq!(window.start.expect("bounded"), now - Duration::days(90));

        let shadowed = TimeWindow::resolve_at(Some("3 months"), now);
        assert_eq!(shadowed.label, "last month");
    }

    #[test]
    fn test_generic_day_count() {
        let now = noon(2024, 3, 15);
        let window = TimeWindow::resolve_at(Some("last 45 days"), now);
        assert_eq!(window.label, "last 45 days");
        assert_eq!(window.start.expect("bounded"), now - Duration::days(45));

        let window = TimeWindow::resolve_at(Some("3 days"), now);
        assert_eq!(window.label, "last 3 days");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let now = noon(2024, 3, 15);
        assert_eq!(
            TimeWindow::resolve_at(Some("YESTERDAY"), now).label,
            "yesterday"
        );
        assert_eq!(
            TimeWindow::resolve_at(Some("Last Week"), now).label,
            "last week"
        );
    }

    #[test]
    fn test_start_ms_matches_start_instant() {
        let now = noon(2024, 3, 15);
        let window = TimeWindow::resolve_at(Some("7 days"), now);
        let start = window.start.expect("bounded");
        assert_eq!(window.start_ms(), Some(start.timestamp_millis() as u64));
        assert_eq!(TimeWindow::resolve_at(None, now).start_ms(), None);
    }
}
