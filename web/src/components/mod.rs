pub mod court_grid;
pub mod error;
pub mod filter_bar;
pub mod loading;
pub mod notice_toast;
pub mod reservation_calendar;
pub mod selection_summary;

// Re-export commonly used types
pub use court_grid::CourtGrid;
pub use error::ErrorView;
pub use filter_bar::FilterBar;
pub use loading::LoadingView;
pub use notice_toast::{NoticeToast, Toaster};
pub use reservation_calendar::ReservationCalendar;
pub use selection_summary::SelectionSummary;
