//! High-resolution wheel emulation.
//!
//! Kernels before 5.0, and some drivers since, only emit `REL_WHEEL` and
//! `REL_HWHEEL`. Downstream consumers always expect a v120 stream, so for those
//! devices every legacy click is also accumulated as 120 high-resolution units.

use super::WheelDispatch;
use crate::device::WheelCapabilities;
use crate::event::V120_PER_CLICK;

/// Where operators can read about devices that advertise high-resolution
/// scrolling without ever sending it.
pub const INCORRECTLY_ENABLED_HIRES_DOC: &str =
    "https://wayland.freedesktop.org/libinput/doc/latest/incorrectly-enabled-hires.html";

/// True if either wheel has a legacy code without its high-resolution twin.
///
/// The result applies to the whole device, not to the offending axis.
pub fn needs_emulation(caps: &WheelCapabilities) -> bool {
    (caps.wheel && !caps.wheel_hi_res) || (caps.hwheel && !caps.hwheel_hi_res)
}

impl WheelDispatch {
    /// Turns emulation on for a device that advertised high-resolution codes but
    /// has only ever sent legacy ones. The pending legacy clicks are rescaled
    /// into the high-resolution accumulators so this frame still scrolls.
    pub(super) fn correct_missing_hi_res(&mut self) {
        let state = &mut self.state;
        if state.emulate_hi_res_wheel || state.hi_res_event_received || state.lo_res.is_zero() {
            return;
        }
        log::warn!(
            "{}: kernel bug: device supports high-resolution scroll but only \
             low-resolution events have been received. See {} for details",
            self.meta,
            INCORRECTLY_ENABLED_HIRES_DOC
        );
        state.emulate_hi_res_wheel = true;
        state.hi_res = state.lo_res.scaled(V120_PER_CLICK);
    }
}
