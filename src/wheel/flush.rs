//! End-of-frame reduction of the accumulators into axis notifications.
//!
//! Vertical notifications negate the kernel value (kernel: positive is away
//! from the user; ours: positive is down), horizontal ones keep it.

use super::{WheelBehavior, WheelCoords, WheelDispatch};
use crate::device::DEFAULT_MOUSE_DPI;
use crate::emitter::AxisEmitter;
use crate::event::{AxisEvent, AxisKind, NormalizedCoords, ScrollAxis, V120_PER_CLICK};

impl WheelDispatch {
    /// Flushes the accumulators at the end of a frame.
    ///
    /// Does nothing while the device lacks the pointer capability; the
    /// accumulators are kept in that case. Inhibited input is discarded.
    pub fn handle_state(
        &mut self,
        time: u64,
        pointer_capable: bool,
        emitter: &mut dyn AxisEmitter,
    ) {
        self.pending = false;
        if !pointer_capable {
            return;
        }

        self.correct_missing_hi_res();

        if self.state.is_inhibited {
            self.state.clear();
            return;
        }

        match self.behavior {
            WheelBehavior::Standard => self.flush_wheel(time, emitter),
            WheelBehavior::ReversedGeometry => self.flush_reversed(time, emitter),
        }
    }

    fn flush_wheel(&mut self, time: u64, emitter: &mut dyn AxisEmitter) {
        let angle = self.click_angle;
        let state = &mut self.state;
        let v120_per_click = f64::from(V120_PER_CLICK);

        if state.hi_res.y != 0 {
            let value = -f64::from(state.hi_res.y);
            emit(
                emitter,
                time,
                AxisKind::Wheel {
                    axis: ScrollAxis::Vertical,
                    v120: value,
                    degrees: value / v120_per_click * angle.y,
                },
            );
            state.hi_res.y = 0;
        }

        if state.lo_res.y != 0 {
            let value = state.lo_res.y.saturating_neg();
            emit(
                emitter,
                time,
                AxisKind::LegacyWheel {
                    axis: ScrollAxis::Vertical,
                    discrete: value,
                    degrees: f64::from(value) * angle.y,
                },
            );
            state.lo_res.y = 0;
        }

        if state.hi_res.x != 0 {
            let value = f64::from(state.hi_res.x);
            emit(
                emitter,
                time,
                AxisKind::Wheel {
                    axis: ScrollAxis::Horizontal,
                    v120: value,
                    degrees: value / v120_per_click * angle.x,
                },
            );
            state.hi_res.x = 0;
        }

        if state.lo_res.x != 0 {
            let value = state.lo_res.x;
            emit(
                emitter,
                time,
                AxisKind::LegacyWheel {
                    axis: ScrollAxis::Horizontal,
                    discrete: value,
                    degrees: f64::from(value) * angle.x,
                },
            );
            state.lo_res.x = 0;
        }
    }

    /// Posts the inverted high-resolution motion as unaccelerated continuous
    /// scrolling. Legacy clicks are never posted for these devices.
    fn flush_reversed(&mut self, time: u64, emitter: &mut dyn AxisEmitter) {
        let hi_res = WheelCoords {
            x: self.state.hi_res.x,
            y: self.state.hi_res.y.saturating_neg(),
        };
        self.state.clear();

        let delta = self.normalize(hi_res);
        if !delta.is_zero() {
            emit(emitter, time, AxisKind::Continuous { delta });
        }
    }

    fn normalize(&self, delta: WheelCoords) -> NormalizedCoords {
        let scale = f64::from(DEFAULT_MOUSE_DPI) / f64::from(self.dpi);
        NormalizedCoords {
            x: f64::from(delta.x) * scale,
            y: f64::from(delta.y) * scale,
        }
    }
}

fn emit(emitter: &mut dyn AxisEmitter, time: u64, kind: AxisKind) {
    log::trace!("wheel: {time} {kind:?}");
    emitter.notify_axis(&AxisEvent { time, kind });
}
