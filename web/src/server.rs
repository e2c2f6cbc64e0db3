use crate::reservations::SlotGrid;
use leptos::prelude::*;
use leptos::server;
use chrono::NaiveDate;
use shared_types::Environment;

#[server]
pub async fn load_slot_grid(
    date: NaiveDate,
    environment: Environment,
) -> Result<SlotGrid, ServerFnError> {
    use crate::fixture::get_fixture;

    match get_fixture() {
        Ok(fixture) => Ok(fixture.grid_for(date, environment)),
        Err(e) => Err(ServerFnError::new(format!("Grid source error: {}", e))),
    }
}

/// Receives the reserve form. The dev host only decodes and logs the
/// selection, then sends the browser back to the same calendar view.
#[cfg(feature = "ssr")]
pub async fn receive_reservation(
    axum::Form(submission): axum::Form<shared_types::ReservationSubmission>,
) -> Result<axum::response::Redirect, (axum::http::StatusCode, String)> {
    use crate::reservations::filters::calendar_href;

    let slots = submission.slots().map_err(|e| {
        tracing::warn!("Rejected reservation form: {}", e);
        (
            axum::http::StatusCode::BAD_REQUEST,
            format!("Invalid selected_slots: {}", e),
        )
    })?;

    tracing::info!(
        date = %submission.date,
        duration = submission.duration,
        env = submission.env.as_str(),
        count = slots.len(),
        "Received reservation request"
    );
    for slot in &slots {
        tracing::debug!(
            court_id = %slot.court_id,
            start = %slot.start,
            duration = slot.duration,
            "Requested slot"
        );
    }

    let href = calendar_href(&submission.filters());
    Ok(axum::response::Redirect::to(&format!("/{}", href)))
}
