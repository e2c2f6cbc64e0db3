use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(message: Option<String>) -> impl IntoView {
    view! {
        <div class="error-container">
            <MessageBar intent=MessageBarIntent::Error>
                {message.unwrap_or_else(|| "The calendar could not be loaded. Please try again.".to_string())}
            </MessageBar>
            <a class="error-back-link" href="/">"Back to today"</a>
        </div>
    }
}
