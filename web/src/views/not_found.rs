use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NotFound() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"There is no calendar at this address."</p>
            <button
                type="button"
                on:click=move |_| {
                    navigate("/", Default::default());
                }
            >
                "Open today's calendar"
            </button>
        </div>
    }
}
