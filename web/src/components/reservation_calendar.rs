use super::{CourtGrid, FilterBar, NoticeToast, SelectionSummary, Toaster};
use crate::reservations::{SelectionChange, SelectionManager, SlotGrid};
use leptos::logging::log;
use leptos::prelude::*;
use shared_types::{CalendarFilters, CourtId};

/// One calendar page: filters, the slot grid and the pending selection. The
/// selection lives only as long as this component.
#[component]
pub fn ReservationCalendar(grid: SlotGrid, filters: CalendarFilters) -> impl IntoView {
    let manager = RwSignal::new(SelectionManager::new(grid));
    let toaster = Toaster::new();
    let duration = filters.duration;

    let on_slot = Callback::new(move |(court_id, index): (CourtId, usize)| {
        match manager.try_update(|m| m.click(&court_id, index, duration)) {
            Some(Ok(SelectionChange::Added(key))) => {
                log!("Selected {} at {} ({} min)", key.court_id, key.start, key.duration);
            }
            Some(Ok(SelectionChange::Removed(key))) => {
                log!("Removed {} at {} ({} min)", key.court_id, key.start, key.duration);
            }
            Some(Ok(SelectionChange::Unchanged)) | None => {}
            Some(Err(e)) => toaster.notify(e.to_string()),
        }
    });

    view! {
        <div class="resv-page">
            <FilterBar filters=filters/>
            <div class="resv-layout">
                <div class="resv-grid">
                    <CourtGrid manager=manager on_slot=on_slot/>
                </div>
                <aside class="resv-sidebar">
                    <SelectionSummary manager=manager filters=filters toaster=toaster/>
                </aside>
            </div>
            <NoticeToast toaster=toaster/>
        </div>
    }
}
