use super::notice_toast::Toaster;
use crate::reservations::{SelectionEntry, SelectionManager};
use crate::SUBMIT_ENDPOINT;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::*;
use shared_types::CalendarFilters;

#[component]
pub fn SelectionSummary(
    manager: RwSignal<SelectionManager>,
    filters: CalendarFilters,
    toaster: Toaster,
) -> impl IntoView {
    let entries = move || manager.with(|m| m.entries().cloned().collect::<Vec<_>>());
    let payload = move || manager.with(SelectionManager::payload_json);
    let is_empty = move || manager.with(SelectionManager::is_empty);

    let on_submit = move |ev: SubmitEvent| {
        match manager.with_untracked(|m| m.submission(&filters)) {
            Ok(submission) => {
                log!(
                    "Submitting reservation for {} ({} min, {})",
                    submission.date,
                    submission.duration,
                    submission.env.as_str()
                );
            }
            Err(e) => {
                ev.prevent_default();
                toaster.notify(e.to_string());
            }
        }
    };

    let remove = move |entry: &SelectionEntry| {
        let key = entry.key.clone();
        move |_: leptos::ev::MouseEvent| {
            let removed = manager.try_update(|m| m.remove(&key)).unwrap_or(false);
            if removed {
                log!("Removed {} at {} ({} min)", key.court_id, key.start, key.duration);
            }
        }
    };

    view! {
        <form class="reserve-form" method="post" action=SUBMIT_ENDPOINT on:submit=on_submit>
            <input type="hidden" name="selected_slots" prop:value=payload/>
            <input type="hidden" name="date" value=filters.date_iso()/>
            <input type="hidden" name="duration" value=filters.duration.to_string()/>
            <input type="hidden" name="env" value=filters.environment.as_str()/>

            <h3 class="reserve-title">{move || manager.with(SelectionManager::title)}</h3>

            <div class="chip-list">
                <For
                    each=entries
                    key=|entry: &SelectionEntry| entry.key.clone()
                    children=move |entry: SelectionEntry| {
                        let on_remove = remove(&entry);
                        view! {
                            <span class="chip">
                                <span>{entry.chip_label()}</span>
                                <button type="button" aria-label="Remove" on:click=on_remove>
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>

            <button type="submit" class="reserve-btn" disabled=is_empty>
                "Reserve"
            </button>
        </form>
    }
}
