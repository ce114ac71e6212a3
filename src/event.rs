//! Raw device events and emitted axis notifications.
//!
//! The input side mirrors what the kernel hands us: relative-axis events with an
//! evdev code and a signed value, physical button transitions, and the frame
//! marker (`SYN_REPORT`) that closes a processing cycle.
//!
//! The output side is what [`AxisEmitter`](crate::emitter::AxisEmitter)s receive:
//! one [`AxisEvent`] per axis and resolution.
//!
//! ## Value conventions
//! - **Legacy wheel:** `discrete` counts physical detents ("clicks").
//! - **High-resolution wheel:** `v120` is in units of 1/120 of a click, so a single
//!   detent on a legacy-only device arrives as `±120.0`.
//! - **Degrees:** physical rotation, derived from the device's click angle.
//! - **Sign:** vertical notifications are negated relative to the kernel value,
//!   horizontal notifications are not.

use serde::{Deserialize, Serialize};

/// Kernel code for the legacy horizontal wheel.
pub const REL_HWHEEL: u16 = 0x06;
/// Kernel code for the legacy vertical wheel.
pub const REL_WHEEL: u16 = 0x08;
/// Kernel code for the high-resolution vertical wheel.
pub const REL_WHEEL_HI_RES: u16 = 0x0b;
/// Kernel code for the high-resolution horizontal wheel.
pub const REL_HWHEEL_HI_RES: u16 = 0x0c;

pub const BTN_LEFT: u16 = 0x110;
pub const BTN_RIGHT: u16 = 0x111;
pub const BTN_MIDDLE: u16 = 0x112;

/// Number of high-resolution units in one legacy click.
pub const V120_PER_CLICK: i32 = 120;

/// The relative codes the wheel ingestor cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WheelCode {
    Wheel,
    HWheel,
    WheelHiRes,
    HWheelHiRes,
}

impl WheelCode {
    /// Classifies an evdev `REL_*` code. Unrelated relative axes (pointer motion,
    /// dials, ...) share the channel and yield `None`.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            REL_WHEEL => Some(Self::Wheel),
            REL_HWHEEL => Some(Self::HWheel),
            REL_WHEEL_HI_RES => Some(Self::WheelHiRes),
            REL_HWHEEL_HI_RES => Some(Self::HWheelHiRes),
            _ => None,
        }
    }

    pub fn code(self) -> u16 {
        match self {
            Self::Wheel => REL_WHEEL,
            Self::HWheel => REL_HWHEEL,
            Self::WheelHiRes => REL_WHEEL_HI_RES,
            Self::HWheelHiRes => REL_HWHEEL_HI_RES,
        }
    }
}

/// One `EV_REL` event as read from the kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelativeEvent {
    /// Event time in microseconds.
    pub time: u64,
    /// Raw `REL_*` code.
    pub code: u16,
    pub value: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonState {
    Released,
    Pressed,
}

/// A physical button transition (`EV_KEY` with a `BTN_*` code).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonEvent {
    pub time: u64,
    pub button: u16,
    pub state: ButtonState,
}

/// Everything a [`Device`](crate::device::Device) can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceEvent {
    Relative(RelativeEvent),
    Button(ButtonEvent),
    /// End of a hardware frame (`SYN_REPORT`).
    Frame { time: u64 },
}

impl DeviceEvent {
    pub fn time(&self) -> u64 {
        match self {
            Self::Relative(e) => e.time,
            Self::Button(e) => e.time,
            Self::Frame { time } => *time,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollAxis {
    Vertical,
    Horizontal,
}

/// Where a scroll notification originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisSource {
    Wheel,
    Continuous,
}

/// A delta normalized to the default 1000 DPI resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedCoords {
    pub x: f64,
    pub y: f64,
}

impl NormalizedCoords {
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// The payload of a scroll notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisKind {
    /// High-resolution wheel movement.
    Wheel {
        axis: ScrollAxis,
        v120: f64,
        degrees: f64,
    },
    /// Legacy wheel movement in whole clicks.
    LegacyWheel {
        axis: ScrollAxis,
        discrete: i32,
        degrees: f64,
    },
    /// Unaccelerated continuous scrolling.
    Continuous { delta: NormalizedCoords },
}

impl AxisKind {
    pub fn source(&self) -> AxisSource {
        match self {
            Self::Wheel { .. } | Self::LegacyWheel { .. } => AxisSource::Wheel,
            Self::Continuous { .. } => AxisSource::Continuous,
        }
    }

    /// The wheel axis, `None` for continuous scrolling which may carry both.
    pub fn axis(&self) -> Option<ScrollAxis> {
        match self {
            Self::Wheel { axis, .. } | Self::LegacyWheel { axis, .. } => Some(*axis),
            Self::Continuous { .. } => None,
        }
    }
}

/// Timestamped scroll notification handed to an emitter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisEvent {
    /// Time of the frame that produced this notification, in microseconds.
    pub time: u64,
    pub kind: AxisKind,
}
