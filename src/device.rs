//! Device descriptors and the [`Device`] trait.
//!
//! A [`DeviceDescriptor`] is everything the wheel core needs to know about a
//! device, captured once at setup: pointer capability, DPI, per-axis click
//! angle, which wheel codes the kernel advertises, and behavioral quirks.
//! Discovering these values (udev, hwdb, quirk files) is the caller's job;
//! descriptors can also be written by hand in TOML, see [`crate::config`].

use crate::event::DeviceEvent;
use crate::metadata::DeviceMeta;
use serde::{Deserialize, Serialize};

/// Resolution that normalized deltas are expressed in.
pub const DEFAULT_MOUSE_DPI: u32 = 1000;

/// Degrees of rotation per click when the hardware database is silent.
pub const DEFAULT_WHEEL_CLICK_ANGLE: f64 = 15.0;

/// A source of raw device events.
pub trait Device {
    /// Drains events queued since the last poll.
    fn poll(&mut self) -> Vec<DeviceEvent>;
    fn name(&self) -> &str;
    fn id(&self) -> &str;
    fn descriptor(&self) -> &DeviceDescriptor;
}

/// Degrees of physical rotation per legacy click, per axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickAngle {
    /// Horizontal wheel.
    pub x: f64,
    /// Vertical wheel.
    pub y: f64,
}

impl Default for ClickAngle {
    fn default() -> Self {
        Self {
            x: DEFAULT_WHEEL_CLICK_ANGLE,
            y: DEFAULT_WHEEL_CLICK_ANGLE,
        }
    }
}

/// Which wheel codes the kernel advertises for the device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelCapabilities {
    /// `REL_WHEEL`
    pub wheel: bool,
    /// `REL_HWHEEL`
    pub hwheel: bool,
    /// `REL_WHEEL_HI_RES`
    pub wheel_hi_res: bool,
    /// `REL_HWHEEL_HI_RES`
    pub hwheel_hi_res: bool,
}

impl WheelCapabilities {
    /// A wheel mouse as seen on kernels before 5.0: legacy codes only.
    pub fn legacy() -> Self {
        Self {
            wheel: true,
            hwheel: true,
            ..Self::default()
        }
    }

    /// Legacy and high-resolution codes on both axes.
    pub fn hi_res() -> Self {
        Self {
            wheel: true,
            hwheel: true,
            wheel_hi_res: true,
            hwheel_hi_res: true,
        }
    }
}

/// Per-device behavioral overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceQuirks {
    /// Never suppress scrolling while the middle button is held.
    ///
    /// Set for keyboards like the Lenovo TrackPoint Keyboard II, which send their
    /// own scroll events when the trackpoint moves with the middle button down.
    pub ignore_middle_button_inhibit: bool,

    /// The wheel is really a small joystick with reversed vertical geometry
    /// (Lenovo ScrollPoint). Its output is posted as continuous scrolling.
    pub reversed_wheel: bool,
}

/// Everything the wheel core reads from its owning device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceDescriptor {
    pub meta: DeviceMeta,
    /// Whether the device currently has the pointer seat capability.
    pub pointer: bool,
    pub dpi: u32,
    pub click_angle: ClickAngle,
    pub capabilities: WheelCapabilities,
    pub quirks: DeviceQuirks,
}

impl Default for DeviceDescriptor {
    fn default() -> Self {
        Self {
            meta: DeviceMeta::default(),
            pointer: true,
            dpi: DEFAULT_MOUSE_DPI,
            click_angle: ClickAngle::default(),
            capabilities: WheelCapabilities::default(),
            quirks: DeviceQuirks::default(),
        }
    }
}

impl DeviceDescriptor {
    /// A pointer-capable wheel device with default DPI and click angle.
    pub fn wheel_mouse(name: &str, capabilities: WheelCapabilities) -> Self {
        Self {
            meta: DeviceMeta::named(name),
            capabilities,
            ..Self::default()
        }
    }

    pub fn with_click_angle(mut self, x: f64, y: f64) -> Self {
        self.click_angle = ClickAngle { x, y };
        self
    }

    pub fn with_quirks(mut self, quirks: DeviceQuirks) -> Self {
        self.quirks = quirks;
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }
}
