//! Scroll-wheel normalization for one device.
//!
//! [`WheelDispatch`] owns a device's [`WheelState`] and runs the per-device
//! pipeline:
//!
//! 1. [`process_relative`](WheelDispatch::process_relative) folds every raw
//!    `REL_*WHEEL*` event into the accumulators as it arrives.
//! 2. [`notify_physical_button`](WheelDispatch::notify_physical_button) tracks the
//!    middle button and suppresses scrolling while it is held.
//! 3. [`handle_state`](WheelDispatch::handle_state) runs once per frame and turns
//!    the accumulators into zero to four [`AxisEvent`](crate::event::AxisEvent)s,
//!    then zeroes them.
//!
//! Whether high-resolution values must be synthesized from legacy clicks is
//! decided at construction and may be switched on later if a device turns out
//! to have lied about its capabilities.
//!
//! Everything here is single-threaded and run-to-completion; the owner
//! guarantees events for one device are delivered in order.

mod emulation;
mod flush;
mod inhibit;
mod state;

pub use emulation::{needs_emulation, INCORRECTLY_ENABLED_HIRES_DOC};
pub use inhibit::middle_button_inhibits;
pub use state::{WheelCoords, WheelState};

use crate::device::{ClickAngle, DeviceDescriptor, DEFAULT_MOUSE_DPI};
use crate::event::{RelativeEvent, WheelCode, V120_PER_CLICK};
use crate::metadata::DeviceMeta;

/// How a device's accumulated wheel motion is posted. Chosen once at setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelBehavior {
    /// Legacy and high-resolution wheel notifications per axis.
    Standard,
    /// Vertical sign inverted and posted as continuous scrolling only.
    ReversedGeometry,
}

/// Per-device wheel pipeline.
#[derive(Debug)]
pub struct WheelDispatch {
    state: WheelState,
    behavior: WheelBehavior,
    click_angle: ClickAngle,
    dpi: u32,
    ignore_middle_button_inhibit: bool,
    meta: DeviceMeta,
    /// Set by ingestion, cleared by the flush.
    pending: bool,
}

impl WheelDispatch {
    /// Sets up wheel handling for a device.
    pub fn new(descriptor: &DeviceDescriptor) -> Self {
        let state = WheelState {
            emulate_hi_res_wheel: needs_emulation(&descriptor.capabilities),
            ..WheelState::default()
        };

        let behavior = if descriptor.quirks.reversed_wheel {
            WheelBehavior::ReversedGeometry
        } else {
            WheelBehavior::Standard
        };

        log::debug!(
            "{}: wheel setup: {:?}, hi-res emulation {}",
            descriptor.meta,
            behavior,
            if state.emulate_hi_res_wheel { "on" } else { "off" }
        );

        Self {
            state,
            behavior,
            click_angle: descriptor.click_angle,
            dpi: match descriptor.dpi {
                0 => DEFAULT_MOUSE_DPI,
                dpi => dpi,
            },
            ignore_middle_button_inhibit: descriptor.quirks.ignore_middle_button_inhibit,
            meta: descriptor.meta.clone(),
            pending: false,
        }
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn behavior(&self) -> WheelBehavior {
        self.behavior
    }

    /// Whether wheel events arrived since the last flush.
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    /// Folds one relative event into the accumulators. Codes other than the
    /// four wheel codes are ignored.
    pub fn process_relative(&mut self, event: &RelativeEvent) {
        let Some(code) = WheelCode::from_code(event.code) else {
            return;
        };
        let state = &mut self.state;
        let value = event.value;
        match code {
            WheelCode::Wheel => {
                state.lo_res.y = state.lo_res.y.saturating_add(value);
                if state.emulate_hi_res_wheel {
                    state.hi_res.y = state
                        .hi_res
                        .y
                        .saturating_add(value.saturating_mul(V120_PER_CLICK));
                }
            }
            WheelCode::HWheel => {
                state.lo_res.x = state.lo_res.x.saturating_add(value);
                if state.emulate_hi_res_wheel {
                    state.hi_res.x = state
                        .hi_res
                        .x
                        .saturating_add(value.saturating_mul(V120_PER_CLICK));
                }
            }
            WheelCode::WheelHiRes => {
                state.hi_res.y = state.hi_res.y.saturating_add(value);
                state.hi_res_event_received = true;
            }
            WheelCode::HWheelHiRes => {
                state.hi_res.x = state.hi_res.x.saturating_add(value);
                state.hi_res_event_received = true;
            }
        }
        self.pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DeviceQuirks, WheelCapabilities};
    use crate::event::{REL_HWHEEL, REL_HWHEEL_HI_RES, REL_WHEEL, REL_WHEEL_HI_RES};

    const REL_X: u16 = 0x00;
    const REL_DIAL: u16 = 0x07;

    fn rel(code: u16, value: i32) -> RelativeEvent {
        RelativeEvent {
            time: 0,
            code,
            value,
        }
    }

    #[test]
    fn setup_decides_emulation_and_behavior() {
        let legacy = WheelDispatch::new(&DeviceDescriptor::wheel_mouse(
            "legacy",
            WheelCapabilities::legacy(),
        ));
        assert!(legacy.state().emulate_hi_res_wheel());
        assert_eq!(legacy.behavior(), WheelBehavior::Standard);

        let scrollpoint = WheelDispatch::new(
            &DeviceDescriptor::wheel_mouse("scrollpoint", WheelCapabilities::hi_res()).with_quirks(
                DeviceQuirks {
                    reversed_wheel: true,
                    ..DeviceQuirks::default()
                },
            ),
        );
        assert!(!scrollpoint.state().emulate_hi_res_wheel());
        assert_eq!(scrollpoint.behavior(), WheelBehavior::ReversedGeometry);
    }

    #[test]
    fn legacy_events_accumulate_with_emulation() {
        let mut wheel = WheelDispatch::new(&DeviceDescriptor::wheel_mouse(
            "legacy",
            WheelCapabilities::legacy(),
        ));
        wheel.process_relative(&rel(REL_WHEEL, 2));
        wheel.process_relative(&rel(REL_WHEEL, -1));
        wheel.process_relative(&rel(REL_HWHEEL, -3));

        let state = wheel.state();
        assert_eq!(state.lo_res(), WheelCoords { x: -3, y: 1 });
        assert_eq!(state.hi_res(), WheelCoords { x: -360, y: 120 });
        assert!(!state.hi_res_event_received());
        assert!(wheel.has_pending());
    }

    #[test]
    fn hi_res_events_accumulate_and_latch() {
        let mut wheel = WheelDispatch::new(&DeviceDescriptor::wheel_mouse(
            "hires",
            WheelCapabilities::hi_res(),
        ));
        wheel.process_relative(&rel(REL_WHEEL_HI_RES, 30));
        wheel.process_relative(&rel(REL_WHEEL_HI_RES, 30));
        wheel.process_relative(&rel(REL_HWHEEL_HI_RES, -15));
        wheel.process_relative(&rel(REL_WHEEL, 1));

        let state = wheel.state();
        assert_eq!(state.hi_res(), WheelCoords { x: -15, y: 60 });
        assert_eq!(state.lo_res(), WheelCoords { x: 0, y: 1 });
        assert!(state.hi_res_event_received());
    }

    #[test]
    fn unrelated_codes_are_ignored() {
        let mut wheel = WheelDispatch::new(&DeviceDescriptor::wheel_mouse(
            "mouse",
            WheelCapabilities::legacy(),
        ));
        wheel.process_relative(&rel(REL_X, 5));
        wheel.process_relative(&rel(REL_DIAL, 1));
        assert!(wheel.state().lo_res().is_zero());
        assert!(wheel.state().hi_res().is_zero());
        assert!(!wheel.has_pending());
    }
}
