use super::grid::{cells_needed, SlotGrid};
use shared_types::{CalendarFilters, CourtId, ReservationSubmission, SelectedSlot};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("This time can't be selected at this duration (part of it is taken or out of range).")]
    Unavailable,
    #[error("This slot overlaps a reservation you already selected.")]
    Overlap,
    #[error("Select at least one slot first.")]
    EmptySelection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Available,
    SelectedStart,
    SelectedCovered,
    Disabled,
}

impl CellState {
    pub fn is_selected(&self) -> bool {
        matches!(self, CellState::SelectedStart | CellState::SelectedCovered)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CellState::Available => "slot",
            CellState::SelectedStart => "slot sel-start",
            CellState::SelectedCovered => "slot sel-cover",
            CellState::Disabled => "slot disabled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionKey {
    pub court_id: CourtId,
    pub start: String,
    pub duration: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionEntry {
    pub key: SelectionKey,
    pub court_name: String,
    /// Time indices covered by the block, first one is the start cell.
    pub cells: Vec<usize>,
}

impl SelectionEntry {
    pub fn chip_label(&self) -> String {
        format!("{} • {} • {} min", self.court_name, self.key.start, self.key.duration)
    }

    pub fn to_selected_slot(&self) -> SelectedSlot {
        SelectedSlot {
            court_id: self.key.court_id.clone(),
            start: self.key.start.clone(),
            duration: self.key.duration,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SelectionChange {
    Added(SelectionKey),
    Removed(SelectionKey),
    Unchanged,
}

/// Owns the grid and the current selection for one calendar page.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionManager {
    grid: SlotGrid,
    states: HashMap<(CourtId, usize), CellState>,
    entries: Vec<SelectionEntry>,
}

impl SelectionManager {
    pub fn new(grid: SlotGrid) -> Self {
        let states = grid
            .courts
            .iter()
            .flat_map(|court| {
                court.slots.iter().map(move |slot| {
                    let state = if slot.is_disabled() {
                        CellState::Disabled
                    } else {
                        CellState::Available
                    };
                    ((court.id.clone(), slot.time_index), state)
                })
            })
            .collect();

        Self {
            grid,
            states,
            entries: Vec::new(),
        }
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    pub fn cell_state(&self, court_id: &CourtId, time_index: usize) -> Option<CellState> {
        self.states.get(&(court_id.clone(), time_index)).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.entries.iter()
    }

    pub fn contains(&self, key: &SelectionKey) -> bool {
        self.entries.iter().any(|e| &e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn title(&self) -> String {
        format!("Selected: {} slots", self.entries.len())
    }

    /// Handles a click on the cell at `(court_id, time_index)` while the page
    /// duration is `duration` minutes.
    pub fn click(
        &mut self,
        court_id: &CourtId,
        time_index: usize,
        duration: u32,
    ) -> Result<SelectionChange, SelectionError> {
        let Some(slot) = self.grid.slot(court_id, time_index) else {
            return Ok(SelectionChange::Unchanged);
        };
        if self.cell_state(court_id, time_index) == Some(CellState::Disabled) {
            return Ok(SelectionChange::Unchanged);
        }

        let key = SelectionKey {
            court_id: court_id.clone(),
            start: slot.start.clone(),
            duration,
        };
        if self.remove(&key) {
            return Ok(SelectionChange::Removed(key));
        }

        let needed = cells_needed(duration, self.grid.slot_minutes);
        let mut cells = Vec::with_capacity(needed);
        for index in time_index..time_index + needed {
            match self.cell_state(court_id, index) {
                None | Some(CellState::Disabled) => return Err(SelectionError::Unavailable),
                Some(state) if state.is_selected() => return Err(SelectionError::Overlap),
                Some(_) => cells.push(index),
            }
        }

        for (position, index) in cells.iter().enumerate() {
            let state = if position == 0 {
                CellState::SelectedStart
            } else {
                CellState::SelectedCovered
            };
            self.states.insert((court_id.clone(), *index), state);
        }

        let court_name = self.grid.court_name(court_id).to_string();
        self.entries.push(SelectionEntry {
            key: key.clone(),
            court_name,
            cells,
        });

        Ok(SelectionChange::Added(key))
    }

    /// Drops the entry for `key` and frees its cells. Returns false when the
    /// key is not selected.
    pub fn remove(&mut self, key: &SelectionKey) -> bool {
        let Some(position) = self.entries.iter().position(|e| &e.key == key) else {
            return false;
        };
        let entry = self.entries.remove(position);
        for index in entry.cells {
            self.states
                .insert((entry.key.court_id.clone(), index), CellState::Available);
        }
        true
    }

    pub fn payload(&self) -> Vec<SelectedSlot> {
        self.entries.iter().map(SelectionEntry::to_selected_slot).collect()
    }

    pub fn payload_json(&self) -> String {
        ReservationSubmission::encode_slots(&self.payload())
    }

    /// Gate for the reserve form: an empty selection must not be submitted.
    pub fn submission(
        &self,
        filters: &CalendarFilters,
    ) -> Result<ReservationSubmission, SelectionError> {
        if self.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        Ok(ReservationSubmission::new(&self.payload(), filters))
    }
}
