use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Durations the calendar offers, in minutes.
pub const ALLOWED_DURATIONS: [u32; 3] = [60, 90, 120];
pub const DEFAULT_DURATION: u32 = 60;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CourtId(pub String);

impl CourtId {
    pub fn new(id: impl Into<String>) -> Self {
        CourtId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    All,
    Indoor,
    Outdoor,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::All, Environment::Indoor, Environment::Outdoor];

    /// Lenient parse used for query strings; unknown values fall back to `All`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("indoor") => Environment::Indoor,
            Some("outdoor") => Environment::Outdoor,
            _ => Environment::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::All => "all",
            Environment::Indoor => "indoor",
            Environment::Outdoor => "outdoor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Environment::All => "All courts",
            Environment::Indoor => "Indoor",
            Environment::Outdoor => "Outdoor",
        }
    }

    /// Whether a court with the given outdoor flag belongs in this view.
    pub fn admits(&self, outdoor: bool) -> bool {
        match self {
            Environment::All => true,
            Environment::Indoor => !outdoor,
            Environment::Outdoor => outdoor,
        }
    }
}

/// Filters that drive which calendar page is rendered.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFilters {
    pub date: NaiveDate,
    pub duration: u32,
    pub environment: Environment,
}

impl CalendarFilters {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            duration: DEFAULT_DURATION,
            environment: Environment::All,
        }
    }

    /// Normalise raw query parameters. Anything missing or malformed falls
    /// back to `today`, 60 minutes and all courts respectively.
    pub fn from_query(
        date: Option<&str>,
        duration: Option<&str>,
        environment: Option<&str>,
        today: NaiveDate,
    ) -> Self {
        Self {
            date: parse_date(date).unwrap_or(today),
            duration: parse_duration(duration),
            environment: Environment::from_query(environment),
        }
    }

    pub fn shifted(self, days: i64) -> Self {
        let date = self
            .date
            .checked_add_signed(chrono::Duration::days(days))
            .unwrap_or(self.date);
        Self { date, ..self }
    }

    pub fn with_date(self, date: NaiveDate) -> Self {
        Self { date, ..self }
    }

    pub fn with_duration(self, duration: u32) -> Self {
        Self { duration, ..self }
    }

    pub fn with_environment(self, environment: Environment) -> Self {
        Self {
            environment,
            ..self
        }
    }

    pub fn date_iso(&self) -> String {
        format_date(self.date)
    }

    pub fn to_query_string(&self) -> String {
        format!(
            "date={}&duration={}&env={}",
            urlencoding::encode(&self.date_iso()),
            self.duration,
            urlencoding::encode(self.environment.as_str()),
        )
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn parse_duration(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|d| ALLOWED_DURATIONS.contains(d))
        .unwrap_or(DEFAULT_DURATION)
}

/// One block of the submitted selection, as carried in `selected_slots`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SelectedSlot {
    pub court_id: CourtId,
    pub start: String,
    pub duration: u32,
}

/// Form body posted by the calendar's reserve form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReservationSubmission {
    /// JSON encoded `Vec<SelectedSlot>`.
    pub selected_slots: String,
    pub date: NaiveDate,
    pub duration: u32,
    pub env: Environment,
}

impl ReservationSubmission {
    pub fn new(slots: &[SelectedSlot], filters: &CalendarFilters) -> Self {
        Self {
            selected_slots: Self::encode_slots(slots),
            date: filters.date,
            duration: filters.duration,
            env: filters.environment,
        }
    }

    /// JSON for the `selected_slots` field. `SelectedSlot` only holds strings
    /// and integers, which serde_json always encodes into a `String`.
    pub fn encode_slots(slots: &[SelectedSlot]) -> String {
        serde_json::to_string(slots).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn slots(&self) -> Result<Vec<SelectedSlot>, serde_json::Error> {
        serde_json::from_str(&self.selected_slots)
    }

    pub fn filters(&self) -> CalendarFilters {
        CalendarFilters {
            date: self.date,
            duration: self.duration,
            environment: self.env,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_query_defaults() {
        let today = day(2025, 3, 14);
        let filters = CalendarFilters::from_query(None, None, None, today);

        assert_eq!(filters.date, today);
        assert_eq!(filters.duration, 60);
        assert_eq!(filters.environment, Environment::All);
    }

    #[test]
    fn test_from_query_rejects_bad_values() {
        let today = day(2025, 3, 14);
        let filters =
            CalendarFilters::from_query(Some("14/03/2025"), Some("45"), Some("rooftop"), today);

        assert_eq!(filters.date, today);
        assert_eq!(filters.duration, 60);
        assert_eq!(filters.environment, Environment::All);

        let empty = CalendarFilters::from_query(Some(""), Some("abc"), Some(""), today);
        assert_eq!(empty.date, today);
        assert_eq!(empty.duration, 60);
    }

    #[test]
    fn test_from_query_accepts_valid_values() {
        let filters = CalendarFilters::from_query(
            Some("2025-07-01"),
            Some("120"),
            Some("OUTDOOR"),
            day(2025, 3, 14),
        );

        assert_eq!(filters.date, day(2025, 7, 1));
        assert_eq!(filters.duration, 120);
        assert_eq!(filters.environment, Environment::Outdoor);
    }

    #[test]
    fn test_shift_crosses_month_and_year() {
        let filters = CalendarFilters::new(day(2024, 12, 31));
        assert_eq!(filters.shifted(1).date, day(2025, 1, 1));
        assert_eq!(filters.shifted(1).shifted(-1).date, day(2024, 12, 31));

        let leap = CalendarFilters::new(day(2024, 3, 1));
        assert_eq!(leap.shifted(-1).date, day(2024, 2, 29));
    }

    #[test]
    fn test_query_string() {
        let filters = CalendarFilters::new(day(2025, 1, 5))
            .with_duration(90)
            .with_environment(Environment::Indoor);

        assert_eq!(filters.to_query_string(), "date=2025-01-05&duration=90&env=indoor");
    }

    #[test]
    fn test_environment_admits() {
        assert!(Environment::All.admits(true));
        assert!(Environment::All.admits(false));
        assert!(Environment::Indoor.admits(false));
        assert!(!Environment::Indoor.admits(true));
        assert!(Environment::Outdoor.admits(true));
        assert!(!Environment::Outdoor.admits(false));
    }

    #[test]
    fn test_submission_carries_slots_and_filters() {
        let filters = CalendarFilters::new(day(2025, 5, 2)).with_duration(90);
        let slots = vec![SelectedSlot {
            court_id: CourtId::new("3"),
            start: "10:30".to_string(),
            duration: 90,
        }];

        let submission = ReservationSubmission::new(&slots, &filters);

        assert_eq!(
            submission.selected_slots,
            r#"[{"court_id":"3","start":"10:30","duration":90}]"#
        );
        assert_eq!(submission.slots().unwrap(), slots);
        assert_eq!(submission.filters(), filters);
    }

    #[test]
    fn test_encode_empty_selection() {
        assert_eq!(ReservationSubmission::encode_slots(&[]), "[]");
    }
}
