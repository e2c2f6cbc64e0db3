pub mod calendar;
pub mod not_found;

pub use calendar::CalendarPage;
pub use not_found::NotFound;
