//! Grid source for the dev host: court availability read once from a JSON
//! file and turned into a `SlotGrid` per requested day.

use crate::reservations::{CourtAvailability, DaySchedule, SlotGrid, SlotStatus};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use shared_types::{CourtId, Environment};
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const DEFAULT_FIXTURE_PATH: &str = "fixtures/courts.json";

static FIXTURE: OnceLock<CourtFixture> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read grid fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid grid fixture: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),
    #[error("grid fixture already initialized")]
    AlreadyInitialized,
    #[error("grid fixture not initialized")]
    NotInitialized,
}

#[derive(Deserialize)]
struct RawFixture {
    #[serde(default)]
    slot_minutes: Option<u32>,
    #[serde(default)]
    opening: Option<String>,
    #[serde(default)]
    closing: Option<String>,
    courts: Vec<RawCourt>,
}

#[derive(Deserialize, Default)]
struct RawMarks {
    #[serde(default)]
    busy: Vec<String>,
    #[serde(default)]
    mine: Vec<String>,
    #[serde(default)]
    blocked: Vec<String>,
}

#[derive(Deserialize)]
struct RawCourt {
    id: CourtId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    outdoor: bool,
    /// Marks applied on every day.
    #[serde(flatten)]
    marks: RawMarks,
    /// Extra marks for specific `YYYY-MM-DD` days.
    #[serde(default)]
    days: BTreeMap<NaiveDate, RawMarks>,
}

type Marks = Vec<(String, SlotStatus)>;

/// One court of the fixture: its recurring marks plus per-day marks.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureCourt {
    pub base: CourtAvailability,
    pub days: BTreeMap<NaiveDate, Marks>,
}

impl FixtureCourt {
    pub fn availability_on(&self, date: NaiveDate) -> CourtAvailability {
        let mut availability = self.base.clone();
        for (start, status) in self.days.get(&date).into_iter().flatten() {
            availability.mark(start.clone(), *status);
        }
        availability
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CourtFixture {
    pub schedule: DaySchedule,
    pub courts: Vec<FixtureCourt>,
}

impl CourtFixture {
    pub fn grid_for(&self, date: NaiveDate, environment: Environment) -> SlotGrid {
        SlotGrid::build(
            &self.schedule,
            self.courts.iter().map(|court| court.availability_on(date)),
            environment,
        )
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, FixtureError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| FixtureError::InvalidTime(value.to_string()))
}

fn parse_marks(raw: RawMarks) -> Result<Marks, FixtureError> {
    let groups = [
        (raw.busy, SlotStatus::Busy),
        (raw.mine, SlotStatus::Mine),
        (raw.blocked, SlotStatus::Blocked),
    ];
    let mut marks = Vec::new();
    for (starts, status) in groups {
        for start in starts {
            marks.push((parse_time(&start)?.format("%H:%M").to_string(), status));
        }
    }
    Ok(marks)
}

pub fn parse_fixture(json: &str) -> Result<CourtFixture, FixtureError> {
    let raw: RawFixture = serde_json::from_str(json)?;

    let defaults = DaySchedule::default();
    let schedule = DaySchedule {
        opening: raw.opening.as_deref().map(parse_time).transpose()?.unwrap_or(defaults.opening),
        closing: raw.closing.as_deref().map(parse_time).transpose()?.unwrap_or(defaults.closing),
        slot_minutes: raw.slot_minutes.unwrap_or(defaults.slot_minutes),
    };

    let courts = raw
        .courts
        .into_iter()
        .map(|court| {
            let mut base = CourtAvailability::new(court.id, court.name, court.outdoor);
            for (start, status) in parse_marks(court.marks)? {
                base.mark(start, status);
            }
            let days = court
                .days
                .into_iter()
                .map(|(date, marks)| Ok((date, parse_marks(marks)?)))
                .collect::<Result<BTreeMap<_, _>, FixtureError>>()?;
            Ok(FixtureCourt { base, days })
        })
        .collect::<Result<Vec<_>, FixtureError>>()?;

    Ok(CourtFixture { schedule, courts })
}

/// Loads the fixture named by `COURT_GRID_FIXTURE` (or the default path).
pub fn init_fixture() -> Result<&'static CourtFixture, FixtureError> {
    let path = std::env::var("COURT_GRID_FIXTURE")
        .unwrap_or_else(|_| DEFAULT_FIXTURE_PATH.to_string());

    let raw = std::fs::read_to_string(&path).map_err(|source| FixtureError::Io {
        path: path.clone(),
        source,
    })?;
    let fixture = parse_fixture(&raw)?;

    FIXTURE
        .set(fixture)
        .map_err(|_| FixtureError::AlreadyInitialized)?;
    get_fixture()
}

pub fn get_fixture() -> Result<&'static CourtFixture, FixtureError> {
    FIXTURE.get().ok_or(FixtureError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "slot_minutes": 30,
        "opening": "08:00",
        "closing": "10:00",
        "courts": [
            {"id": "1", "name": "Hall A", "outdoor": false, "busy": ["08:30"], "blocked": ["08:30"],
             "days": {"2025-06-02": {"busy": ["09:30"]}}},
            {"id": "2", "name": "Garden", "outdoor": true, "mine": ["09:00"]}
        ]
    }"#;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_fixture() {
        let fixture = parse_fixture(SAMPLE).unwrap();

        assert_eq!(fixture.schedule.slot_minutes, 30);
        assert_eq!(fixture.schedule.time_labels(), vec!["08:00", "08:30", "09:00", "09:30"]);
        assert_eq!(fixture.courts.len(), 2);
        assert_eq!(fixture.courts[0].base.unavailable["08:30"], SlotStatus::Blocked);
        assert_eq!(fixture.courts[1].base.unavailable["09:00"], SlotStatus::Mine);
        assert_eq!(
            fixture.courts[0].days[&day(2025, 6, 2)],
            vec![("09:30".to_string(), SlotStatus::Busy)]
        );
    }

    #[test]
    fn test_grid_for_environment() {
        let fixture = parse_fixture(SAMPLE).unwrap();
        let date = day(2025, 6, 1);

        let outdoor = fixture.grid_for(date, Environment::Outdoor);
        assert_eq!(outdoor.courts.len(), 1);
        assert_eq!(outdoor.courts[0].name, "Garden");
        assert!(outdoor.slot(&CourtId::new("2"), 2).unwrap().is_disabled());

        assert_eq!(fixture.grid_for(date, Environment::All).courts.len(), 2);
    }

    #[test]
    fn test_grid_depends_on_date() {
        let fixture = parse_fixture(SAMPLE).unwrap();
        let hall = CourtId::new("1");

        let plain = fixture.grid_for(day(2025, 6, 1), Environment::All);
        let marked = fixture.grid_for(day(2025, 6, 2), Environment::All);

        assert_eq!(plain.slot(&hall, 3).unwrap().status, SlotStatus::Free);
        assert_eq!(marked.slot(&hall, 3).unwrap().status, SlotStatus::Busy);
        // recurring marks apply on both days
        assert!(plain.slot(&hall, 1).unwrap().is_disabled());
        assert!(marked.slot(&hall, 1).unwrap().is_disabled());
    }

    #[test]
    fn test_day_marks_keep_blocked_precedence() {
        let fixture = parse_fixture(
            r#"{"courts": [{"id": "1", "blocked": ["09:00"], "days": {"2025-06-02": {"mine": ["09:00"]}}}]}"#,
        )
        .unwrap();

        let grid = fixture.grid_for(day(2025, 6, 2), Environment::All);
        assert_eq!(grid.slot(&CourtId::new("1"), 4).unwrap().status, SlotStatus::Blocked);
    }

    #[test]
    fn test_defaults_when_schedule_missing() {
        let fixture = parse_fixture(r#"{"courts": [{"id": "7"}]}"#).unwrap();

        assert_eq!(fixture.schedule, DaySchedule::default());
        assert_eq!(fixture.grid_for(day(2025, 6, 1), Environment::All).courts[0].name, "Court");
    }

    #[test]
    fn test_invalid_time_is_rejected() {
        let err = parse_fixture(r#"{"courts": [{"id": "1", "busy": ["noon"]}]}"#).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidTime(ref t) if t == "noon"));

        let err = parse_fixture(r#"{"courts": [{"id": "1", "days": {"2025-06-02": {"busy": ["25:00"]}}}]}"#)
            .unwrap_err();
        assert!(matches!(err, FixtureError::InvalidTime(ref t) if t == "25:00"));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(parse_fixture("{"), Err(FixtureError::Json(_))));
        assert!(matches!(
            parse_fixture(r#"{"courts": [{"id": "1", "days": {"June 2": {}}}]}"#),
            Err(FixtureError::Json(_))
        ));
    }
}
