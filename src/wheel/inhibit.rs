//! Middle-button scroll inhibition.
//!
//! Holding the middle button usually means the user is doing something else
//! (button scrolling, middle-drag), so wheel input in that window is dropped.
//! Devices with `ignore_middle_button_inhibit` route real scroll motion through
//! the same gesture and are never inhibited.

use super::WheelDispatch;
use crate::event::{ButtonEvent, ButtonState, BTN_MIDDLE};

/// Next inhibition state after a button transition.
///
/// Buttons other than the middle one leave `current` unchanged, except that
/// `always_allow` forces `false` regardless.
pub fn middle_button_inhibits(
    button: u16,
    state: ButtonState,
    current: bool,
    always_allow: bool,
) -> bool {
    if always_allow {
        return false;
    }
    if button == BTN_MIDDLE {
        state == ButtonState::Pressed
    } else {
        current
    }
}

impl WheelDispatch {
    /// Updates inhibition from a physical button transition. Independent of the
    /// frame cycle; repeated identical reports are harmless.
    pub fn notify_physical_button(&mut self, event: &ButtonEvent) {
        let inhibited = middle_button_inhibits(
            event.button,
            event.state,
            self.state.is_inhibited,
            self.ignore_middle_button_inhibit,
        );
        if inhibited != self.state.is_inhibited {
            log::debug!(
                "{}: wheel {}",
                self.meta,
                if inhibited { "inhibited" } else { "released" }
            );
        }
        self.state.is_inhibited = inhibited;
    }
}
