use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Placeholder for the court grid while it is fetched.
#[component]
pub fn LoadingView(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-container" role="status" aria-live="polite">
            <Spinner size=SpinnerSize::Medium />
            <span class="loading-message">{message}</span>
        </div>
    }
}
