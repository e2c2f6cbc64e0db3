use crate::components::{ErrorView, LoadingView, ReservationCalendar};
use crate::reservations::filters::{loading_message, resolve_filters, today_local};
use crate::server::load_slot_grid;
use chrono::NaiveDate;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Calendar page driven entirely by the `date`, `duration` and `env` query
/// parameters.
#[component]
pub fn CalendarPage() -> impl IntoView {
    let query = use_query_map();

    // Effects never run during SSR, so a page without a date renders the
    // same placeholder on both sides and picks the viewer's day after
    // hydration.
    let client_today = RwSignal::new(None::<NaiveDate>);
    Effect::new(move |_| client_today.set(Some(today_local())));

    let filters = Memo::new(move |_| {
        let query = query.read();
        resolve_filters(
            query.get("date").as_deref(),
            query.get("duration").as_deref(),
            query.get("env").as_deref(),
            client_today.get(),
        )
    });

    let grid_resource = Resource::new(
        move || filters.get(),
        |filters| async move {
            match filters {
                Some(filters) => load_slot_grid(filters.date, filters.environment)
                    .await
                    .map(|grid| Some((filters, grid))),
                None => Ok(None),
            }
        },
    );

    let placeholder = move || {
        view! { <LoadingView message=loading_message(filters.get_untracked().as_ref())/> }
    };

    view! {
        <div class="calendar-page">
            <h1 class="calendar-page-title">
                {move || match filters.get() {
                    Some(filters) => format!("Court reservations, {}", filters.date_iso()),
                    None => "Court reservations".to_string(),
                }}
            </h1>
            <Suspense fallback=placeholder>
                {move || {
                    grid_resource.get().map(|result| match result {
                        Ok(Some((filters, grid))) => view! {
                            <ReservationCalendar grid=grid filters=filters/>
                        }
                        .into_any(),
                        Ok(None) => placeholder().into_any(),
                        Err(e) => {
                            leptos::logging::error!("Failed to load slot grid: {}", e);
                            view! {
                                <ErrorView message=Some(format!("Could not load the calendar: {}", e))/>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
