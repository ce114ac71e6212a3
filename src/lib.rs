//! wheelnorm — scroll-wheel normalization for pointer devices.
//!
//! Turns raw evdev wheel events (`REL_WHEEL`, `REL_HWHEEL` and their `_HI_RES`
//! twins) into consistent legacy ("clicks") and high-resolution ("v120") scroll
//! notifications, working around devices that advertise high-resolution
//! scrolling but never send it.

pub mod backends;
pub mod config;
pub mod device;
pub mod emitter;
pub mod error;
pub mod event;
pub mod logger;
pub mod manager;
pub mod metadata;
pub mod wheel;

pub use device::*;
pub use emitter::*;
pub use error::ConfigError;
pub use event::*;
pub use logger::AxisLogger;
pub use manager::*;
pub use metadata::DeviceMeta;
pub use wheel::{WheelBehavior, WheelDispatch, WheelState};
