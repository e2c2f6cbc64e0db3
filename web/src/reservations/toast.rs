use std::time::Duration;

/// How long a notice stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(2400);

/// The currently shown notice. Each `show` bumps the generation so a timer
/// scheduled for an older message can't hide a newer one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    message: Option<String>,
    generation: u64,
}

impl ToastState {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message.into());
        self.generation
    }

    /// Hides the notice if `generation` is still the latest one.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_dismiss() {
        let mut toast = ToastState::default();
        let generation = toast.show("Select at least one slot first.");

        assert_eq!(toast.message(), Some("Select at least one slot first."));
        assert!(toast.dismiss(generation));
        assert!(!toast.is_visible());
        assert!(!toast.dismiss(generation));
    }

    #[test]
    fn test_latest_message_wins() {
        let mut toast = ToastState::default();
        let first = toast.show("first");
        let second = toast.show("second");

        assert_eq!(toast.message(), Some("second"));
        assert!(!toast.dismiss(first));
        assert_eq!(toast.message(), Some("second"));
        assert!(toast.dismiss(second));
    }

    #[test]
    fn test_duration() {
        assert_eq!(TOAST_DURATION.as_millis(), 2400);
    }
}
