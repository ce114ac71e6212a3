//! Device identity.
//!
//! [`DeviceMeta`] is a lightweight, cloneable description of a device used for
//! log prefixes and diagnostics. Collaborators populate what they know; unknown
//! fields remain `None`.
//!
//! # Conventions
//! - `bus` is a short, human-readable bus hint like `"usb"` or `"bluetooth"`.
//! - `name` should be the kernel-reported device name when available.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of metadata describing a single device.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceMeta {
    /// Human-readable device name.
    pub name: Option<String>,

    /// High-level bus classification (e.g., `"usb"`, `"bluetooth"`).
    pub bus: Option<String>,

    /// Vendor ID, if known.
    pub vid: Option<u16>,

    /// Product ID, if known.
    pub pid: Option<u16>,
}

impl DeviceMeta {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl fmt::Display for DeviceMeta {
    /// `name (vid:pid)`, falling back to `"unknown device"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or("unknown device"))?;
        if let (Some(vid), Some(pid)) = (self.vid, self.pid) {
            write!(f, " ({vid:04x}:{pid:04x})")?;
        }
        Ok(())
    }
}
