/// An `(x, y)` pair of wheel accumulators. `x` is the horizontal wheel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelCoords {
    pub x: i32,
    pub y: i32,
}

impl WheelCoords {
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    pub(crate) fn scaled(self, factor: i32) -> Self {
        Self {
            x: self.x.saturating_mul(factor),
            y: self.y.saturating_mul(factor),
        }
    }
}

/// Accumulators and latches for one device's wheel axes.
///
/// The accumulators are zeroed by every flush that gets past the pointer
/// capability check. `emulate_hi_res_wheel` and `hi_res_event_received` only
/// ever go from `false` to `true`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WheelState {
    pub(crate) lo_res: WheelCoords,
    pub(crate) hi_res: WheelCoords,
    pub(crate) emulate_hi_res_wheel: bool,
    pub(crate) hi_res_event_received: bool,
    pub(crate) is_inhibited: bool,
}

impl WheelState {
    /// Pending legacy clicks.
    pub fn lo_res(&self) -> WheelCoords {
        self.lo_res
    }

    /// Pending high-resolution units.
    pub fn hi_res(&self) -> WheelCoords {
        self.hi_res
    }

    /// Whether legacy clicks are multiplied into the high-resolution stream.
    pub fn emulate_hi_res_wheel(&self) -> bool {
        self.emulate_hi_res_wheel
    }

    pub fn hi_res_event_received(&self) -> bool {
        self.hi_res_event_received
    }

    pub fn is_inhibited(&self) -> bool {
        self.is_inhibited
    }

    pub(crate) fn clear(&mut self) {
        self.lo_res = WheelCoords::default();
        self.hi_res = WheelCoords::default();
    }
}
