use crate::reservations::filters::{reload_with, today_local, with_date_input, NavAction};
use leptos::prelude::*;
use shared_types::{parse_duration, CalendarFilters, Environment, ALLOWED_DURATIONS};
use thaw::{Button, ButtonAppearance};

/// Date, duration and court filters. Every change reloads the page with the
/// new query.
#[component]
pub fn FilterBar(filters: CalendarFilters) -> impl IntoView {
    let navigate = move |action: NavAction| reload_with(&action.apply(filters, today_local()));

    let duration_options = ALLOWED_DURATIONS
        .iter()
        .map(|duration| {
            let duration = *duration;
            view! {
                <option value=duration.to_string() selected=duration == filters.duration>
                    {format!("{} min", duration)}
                </option>
            }
        })
        .collect_view();

    let environment_options = Environment::ALL
        .iter()
        .map(|environment| {
            let environment = *environment;
            view! {
                <option value=environment.as_str() selected=environment == filters.environment>
                    {environment.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="filter-bar">
            <div class="filter-nav">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| navigate(NavAction::Prev)>
                    {NavAction::Prev.label()}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| navigate(NavAction::Today)>
                    {NavAction::Today.label()}
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| navigate(NavAction::Next)>
                    {NavAction::Next.label()}
                </Button>
            </div>

            <label class="filter-field">
                <span>"Date"</span>
                <input
                    type="date"
                    name="date"
                    value=filters.date_iso()
                    on:change=move |ev| {
                        reload_with(&with_date_input(filters, &event_target_value(&ev), today_local()));
                    }
                />
            </label>

            <label class="filter-field">
                <span>"Duration"</span>
                <select
                    name="duration"
                    on:change=move |ev| {
                        let duration = parse_duration(Some(&event_target_value(&ev)));
                        reload_with(&filters.with_duration(duration));
                    }
                >
                    {duration_options}
                </select>
            </label>

            <label class="filter-field">
                <span>"Courts"</span>
                <select
                    name="env"
                    on:change=move |ev| {
                        let environment = Environment::from_query(Some(&event_target_value(&ev)));
                        reload_with(&filters.with_environment(environment));
                    }
                >
                    {environment_options}
                </select>
            </label>
        </div>
    }
}
