use crate::reservations::{CellState, CourtRow, SelectionManager};
use leptos::prelude::*;
use shared_types::CourtId;

#[component]
pub fn CourtGrid(
    manager: RwSignal<SelectionManager>,
    on_slot: Callback<(CourtId, usize)>,
) -> impl IntoView {
    // The layout never changes after load, only the cell states do.
    let grid = manager.with_untracked(|m| m.grid().clone());

    if grid.courts.is_empty() {
        return view! {
            <div class="court-grid-empty">
                <p>"No courts match this filter."</p>
            </div>
        }
        .into_any();
    }

    let header = grid
        .times
        .iter()
        .map(|time| view! { <div class="court-grid-time">{time.clone()}</div> })
        .collect_view();

    let rows = grid
        .courts
        .into_iter()
        .map(|court| view! { <CourtGridRow court=court manager=manager on_slot=on_slot/> })
        .collect_view();

    view! {
        <div class="court-grid" data-slot-minutes=grid.slot_minutes.to_string()>
            <div class="court-grid-header">
                <div class="court-grid-corner"></div>
                {header}
            </div>
            {rows}
        </div>
    }
    .into_any()
}

#[component]
fn CourtGridRow(
    court: CourtRow,
    manager: RwSignal<SelectionManager>,
    on_slot: Callback<(CourtId, usize)>,
) -> impl IntoView {
    let CourtRow {
        id,
        name,
        outdoor,
        slots,
    } = court;

    let cells = slots
        .into_iter()
        .map(|slot| {
            let index = slot.time_index;
            let state_id = id.clone();
            let click_id = id.clone();
            let state = Memo::new(move |_| {
                manager.with(|m| m.cell_state(&state_id, index).unwrap_or(CellState::Disabled))
            });
            let title = format!("{} • {}", name, slot.start);

            view! {
                <button
                    type="button"
                    class=move || state.get().css_class()
                    aria-pressed=move || if state.get().is_selected() { "true" } else { "false" }
                    disabled=slot.is_disabled()
                    title=title
                    data-court-id=id.to_string()
                    data-time-index=index.to_string()
                    on:click=move |_| on_slot.run((click_id.clone(), index))
                >
                    {slot.status.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="court-grid-row">
            <div class="court-grid-name">
                {name.clone()}
                {outdoor.then(|| view! { <span class="court-grid-badge">"outdoor"</span> })}
            </div>
            {cells}
        </div>
    }
}
