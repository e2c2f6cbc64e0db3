pub mod filters;
pub mod grid;
pub mod selection;
pub mod toast;

pub use grid::{cells_needed, CourtAvailability, CourtRow, DaySchedule, Slot, SlotGrid, SlotStatus};
pub use selection::{
    CellState, SelectionChange, SelectionEntry, SelectionError, SelectionKey, SelectionManager,
};
pub use toast::{ToastState, TOAST_DURATION};
