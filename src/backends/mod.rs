//! Event sources for `wheelnorm`.
//!
//! Implementations of [`Device`](crate::device::Device). Real evdev nodes are
//! read by the host application; this crate only ships a scripted device.

pub mod virtual_input;

pub use virtual_input::VirtualDevice;
