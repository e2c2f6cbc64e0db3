use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use shared_types::{CourtId, Environment};
use std::collections::HashMap;

pub const DEFAULT_SLOT_MINUTES: u32 = 30;
pub const DEFAULT_COURT_NAME: &str = "Court";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    #[default]
    Free,
    Busy,
    Mine,
    Blocked,
}

impl SlotStatus {
    pub fn is_free(&self) -> bool {
        matches!(self, SlotStatus::Free)
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            SlotStatus::Free => None,
            SlotStatus::Busy => Some("Busy"),
            SlotStatus::Mine => Some("Mine"),
            SlotStatus::Blocked => Some("Blocked"),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            SlotStatus::Free => 0,
            SlotStatus::Busy | SlotStatus::Mine => 1,
            SlotStatus::Blocked => 2,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Slot {
    pub start: String,
    pub time_index: usize,
    pub status: SlotStatus,
}

impl Slot {
    pub fn is_disabled(&self) -> bool {
        !self.status.is_free()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CourtRow {
    pub id: CourtId,
    pub name: String,
    pub outdoor: bool,
    pub slots: Vec<Slot>,
}

impl CourtRow {
    pub fn slot(&self, time_index: usize) -> Option<&Slot> {
        self.slots.iter().find(|s| s.time_index == time_index)
    }
}

/// Opening hours and granularity for one day of the calendar.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DaySchedule {
    pub opening: NaiveTime,
    pub closing: NaiveTime,
    pub slot_minutes: u32,
}

impl Default for DaySchedule {
    fn default() -> Self {
        Self {
            opening: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or_default(),
            closing: NaiveTime::from_hms_opt(22, 0, 0).unwrap_or_default(),
            slot_minutes: DEFAULT_SLOT_MINUTES,
        }
    }
}

impl DaySchedule {
    /// `HH:MM` labels from opening up to, not including, closing.
    pub fn time_labels(&self) -> Vec<String> {
        let step = chrono::Duration::minutes(i64::from(normalize_slot_minutes(self.slot_minutes)));
        let mut labels = Vec::new();
        let mut t = self.opening;
        while t < self.closing {
            labels.push(t.format("%H:%M").to_string());
            let (next, wrapped) = t.overflowing_add_signed(step);
            if wrapped != 0 {
                break;
            }
            t = next;
        }
        labels
    }
}

/// Known unavailability for a court, keyed by `HH:MM` start label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourtAvailability {
    pub id: CourtId,
    pub name: String,
    pub outdoor: bool,
    pub unavailable: HashMap<String, SlotStatus>,
}

impl CourtAvailability {
    pub fn new(id: CourtId, name: impl Into<String>, outdoor: bool) -> Self {
        Self {
            id,
            name: name.into(),
            outdoor,
            unavailable: HashMap::new(),
        }
    }

    /// Marks a start label; a stronger status (blocked over busy/mine) wins.
    pub fn mark(&mut self, start: impl Into<String>, status: SlotStatus) {
        let entry = self.unavailable.entry(start.into()).or_default();
        if status.precedence() >= entry.precedence() {
            *entry = status;
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SlotGrid {
    pub slot_minutes: u32,
    pub times: Vec<String>,
    pub courts: Vec<CourtRow>,
}

impl SlotGrid {
    pub fn build(
        schedule: &DaySchedule,
        courts: impl IntoIterator<Item = CourtAvailability>,
        environment: Environment,
    ) -> Self {
        let times = schedule.time_labels();
        let courts = courts
            .into_iter()
            .filter(|court| environment.admits(court.outdoor))
            .map(|court| {
                let slots = times
                    .iter()
                    .enumerate()
                    .map(|(time_index, start)| Slot {
                        start: start.clone(),
                        time_index,
                        status: court.unavailable.get(start).copied().unwrap_or_default(),
                    })
                    .collect();
                let name = if court.name.trim().is_empty() {
                    DEFAULT_COURT_NAME.to_string()
                } else {
                    court.name
                };
                CourtRow {
                    id: court.id,
                    name,
                    outdoor: court.outdoor,
                    slots,
                }
            })
            .collect();

        Self {
            slot_minutes: normalize_slot_minutes(schedule.slot_minutes),
            times,
            courts,
        }
    }

    pub fn court(&self, court_id: &CourtId) -> Option<&CourtRow> {
        self.courts.iter().find(|c| &c.id == court_id)
    }

    pub fn slot(&self, court_id: &CourtId, time_index: usize) -> Option<&Slot> {
        self.court(court_id)?.slot(time_index)
    }

    pub fn court_name(&self, court_id: &CourtId) -> &str {
        self.court(court_id)
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_COURT_NAME)
    }
}

pub fn normalize_slot_minutes(slot_minutes: u32) -> u32 {
    if slot_minutes == 0 {
        DEFAULT_SLOT_MINUTES
    } else {
        slot_minutes
    }
}

/// Number of grid cells a reservation of `duration` minutes occupies.
pub fn cells_needed(duration: u32, slot_minutes: u32) -> usize {
    let slot_minutes = normalize_slot_minutes(slot_minutes);
    let cells = (f64::from(duration) / f64::from(slot_minutes)).round() as usize;
    cells.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_schedule_labels() {
        let labels = DaySchedule::default().time_labels();

        assert_eq!(labels.len(), 30);
        assert_eq!(labels.first().map(String::as_str), Some("07:00"));
        assert_eq!(labels.last().map(String::as_str), Some("21:30"));
    }

    #[test]
    fn test_schedule_with_zero_granularity_uses_default() {
        let schedule = DaySchedule {
            opening: hm(8, 0),
            closing: hm(9, 0),
            slot_minutes: 0,
        };

        assert_eq!(schedule.time_labels(), vec!["08:00", "08:30"]);
    }

    #[test]
    fn test_cells_needed() {
        assert_eq!(cells_needed(60, 30), 2);
        assert_eq!(cells_needed(90, 30), 3);
        assert_eq!(cells_needed(120, 30), 4);
        assert_eq!(cells_needed(60, 60), 1);
        assert_eq!(cells_needed(10, 30), 1);
        assert_eq!(cells_needed(0, 30), 1);
        // halves round up
        assert_eq!(cells_needed(45, 30), 2);
        assert_eq!(cells_needed(75, 30), 3);
        assert_eq!(cells_needed(60, 0), 2);
    }

    #[test]
    fn test_cells_needed_matches_formula() {
        for granularity in [5u32, 10, 15, 20, 30, 45, 60] {
            for duration in (0..=240).step_by(5) {
                let expected = ((duration as f64 / granularity as f64).round() as usize).max(1);
                assert_eq!(cells_needed(duration, granularity), expected);
            }
        }
    }

    #[test]
    fn test_blocked_wins_over_reservation() {
        let mut court = CourtAvailability::new(CourtId::new("1"), "Center", false);
        court.mark("09:00", SlotStatus::Blocked);
        court.mark("09:00", SlotStatus::Busy);
        court.mark("10:00", SlotStatus::Mine);

        assert_eq!(court.unavailable["09:00"], SlotStatus::Blocked);
        assert_eq!(court.unavailable["10:00"], SlotStatus::Mine);
    }

    #[test]
    fn test_build_filters_environment_and_marks_status() {
        let mut indoor = CourtAvailability::new(CourtId::new("1"), "Hall", false);
        indoor.mark("07:30", SlotStatus::Busy);
        let outdoor = CourtAvailability::new(CourtId::new("2"), "", true);
        let schedule = DaySchedule::default();

        let grid = SlotGrid::build(&schedule, vec![indoor.clone(), outdoor.clone()], Environment::Indoor);
        assert_eq!(grid.courts.len(), 1);
        assert_eq!(grid.courts[0].id, CourtId::new("1"));
        let slot = grid.slot(&CourtId::new("1"), 1).unwrap();
        assert_eq!(slot.start, "07:30");
        assert!(slot.is_disabled());
        assert!(!grid.slot(&CourtId::new("1"), 0).unwrap().is_disabled());

        let all = SlotGrid::build(&schedule, vec![indoor, outdoor], Environment::All);
        assert_eq!(all.courts.len(), 2);
        assert_eq!(all.court_name(&CourtId::new("2")), DEFAULT_COURT_NAME);
        assert!(all.slot(&CourtId::new("2"), 30).is_none());
    }
}
