use crate::reservations::{ToastState, TOAST_DURATION};
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Handle for the page's transient notice. Copy it into any handler that
/// needs to tell the user something.
#[derive(Clone, Copy)]
pub struct Toaster {
    state: RwSignal<ToastState>,
    timer: StoredValue<Option<TimeoutHandle>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ToastState::default()),
            timer: StoredValue::new(None),
        }
    }

    /// Replaces whatever is showing and restarts the dismissal timer.
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        let state = self.state;
        let Some(generation) = state.try_update(|toast| toast.show(message)) else {
            return;
        };

        if let Some(previous) = self.timer.get_value() {
            previous.clear();
        }

        match set_timeout_with_handle(
            move || {
                state.update(|toast| {
                    toast.dismiss(generation);
                });
            },
            TOAST_DURATION,
        ) {
            Ok(handle) => self.timer.set_value(Some(handle)),
            Err(e) => leptos::logging::warn!("Failed to schedule notice dismissal: {:?}", e),
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NoticeToast(toaster: Toaster) -> impl IntoView {
    let state = toaster.state;

    view! {
        <div
            class="toast"
            class:show=move || state.with(ToastState::is_visible)
            role="status"
            aria-live="polite"
        >
            {move || state.with(|toast| toast.message().map(|message| {
                let message = message.to_string();
                view! {
                    <MessageBar intent=MessageBarIntent::Warning>{message}</MessageBar>
                }
            }))}
        </div>
    }
}
