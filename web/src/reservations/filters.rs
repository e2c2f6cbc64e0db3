use chrono::NaiveDate;
use shared_types::CalendarFilters;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Prev,
    Next,
    Today,
}

impl NavAction {
    pub fn label(&self) -> &'static str {
        match self {
            NavAction::Prev => "← Previous day",
            NavAction::Next => "Next day →",
            NavAction::Today => "Today",
        }
    }

    pub fn apply(&self, filters: CalendarFilters, today: NaiveDate) -> CalendarFilters {
        match self {
            NavAction::Prev => filters.shifted(-1),
            NavAction::Next => filters.shifted(1),
            NavAction::Today => filters.with_date(today),
        }
    }
}

/// Today's date in the viewer's local time zone.
pub fn today_local() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Filters for a page request. A missing or malformed `date` means the
/// viewer's today, which is only known once `client_today` is set in the
/// browser; until then there are no filters to render.
pub fn resolve_filters(
    date: Option<&str>,
    duration: Option<&str>,
    environment: Option<&str>,
    client_today: Option<NaiveDate>,
) -> Option<CalendarFilters> {
    let today = shared_types::parse_date(date).or(client_today)?;
    Some(CalendarFilters::from_query(date, duration, environment, today))
}

pub fn loading_message(filters: Option<&CalendarFilters>) -> String {
    match filters {
        Some(filters) => format!("Loading courts for {}...", filters.date_iso()),
        None => "Finding today's courts...".to_string(),
    }
}

/// Date input change; an empty value means today.
pub fn with_date_input(filters: CalendarFilters, value: &str, today: NaiveDate) -> CalendarFilters {
    filters.with_date(shared_types::parse_date(Some(value)).unwrap_or(today))
}

pub fn calendar_href(filters: &CalendarFilters) -> String {
    format!("?{}", filters.to_query_string())
}

/// Re-requests the calendar page for `filters`. This is a full navigation so
/// the current selection is dropped along with the page.
pub fn reload_with(filters: &CalendarFilters) {
    let href = calendar_href(filters);
    let Some(window) = web_sys::window() else {
        leptos::logging::warn!("No window available, cannot navigate to {}", href);
        return;
    };
    if let Err(e) = window.location().set_href(&href) {
        leptos::logging::error!("Failed to navigate to {}: {:?}", href, e);
    }
}
