//! Loading [`DeviceDescriptor`]s from TOML.
//!
//! Every field is optional and falls back to the defaults documented on
//! [`DeviceDescriptor`]:
//!
//! ```toml
//! pointer = true
//! dpi = 1000
//!
//! [meta]
//! name = "Lenovo TrackPoint Keyboard II"
//! vid = 0x17ef
//! pid = 0x60e1
//!
//! [click_angle]
//! x = 15.0
//! y = 15.0
//!
//! [capabilities]
//! wheel = true
//! wheel_hi_res = true
//!
//! [quirks]
//! ignore_middle_button_inhibit = true
//! ```

use crate::device::DeviceDescriptor;
use crate::error::ConfigError;
use std::path::Path;

impl DeviceDescriptor {
    /// Parses and validates a descriptor.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let descriptor: Self = toml::from_str(s)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    /// Rejects values that would make degree or DPI conversion meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [('x', self.click_angle.x), ('y', self.click_angle.y)] {
            if !value.is_finite() || value == 0.0 {
                return Err(ConfigError::InvalidClickAngle { axis, value });
            }
        }
        if self.dpi == 0 {
            return Err(ConfigError::InvalidDpi);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DEFAULT_MOUSE_DPI, DEFAULT_WHEEL_CLICK_ANGLE};

    #[test]
    fn empty_is_default() {
        let d = DeviceDescriptor::from_toml_str("").unwrap();
        assert_eq!(d, DeviceDescriptor::default());
        assert!(d.pointer);
        assert_eq!(d.dpi, DEFAULT_MOUSE_DPI);
        assert_eq!(d.click_angle.y, DEFAULT_WHEEL_CLICK_ANGLE);
    }

    #[test]
    fn full_descriptor() {
        let d = DeviceDescriptor::from_toml_str(
            r#"
            pointer = true
            dpi = 800

            [meta]
            name = "Lenovo TrackPoint Keyboard II"
            vid = 0x17ef
            pid = 0x60e1

            [click_angle]
            x = 20.0
            y = 10.0

            [capabilities]
            wheel = true
            wheel_hi_res = true

            [quirks]
            ignore_middle_button_inhibit = true
            "#,
        )
        .unwrap();

        assert_eq!(d.dpi, 800);
        assert_eq!(d.meta.vid, Some(0x17ef));
        assert_eq!(d.click_angle.x, 20.0);
        assert_eq!(d.click_angle.y, 10.0);
        assert!(d.capabilities.wheel && d.capabilities.wheel_hi_res);
        assert!(!d.capabilities.hwheel && !d.capabilities.hwheel_hi_res);
        assert!(d.quirks.ignore_middle_button_inhibit);
        assert!(!d.quirks.reversed_wheel);
    }

    #[test]
    fn rejects_bad_values() {
        let err = DeviceDescriptor::from_toml_str("[click_angle]\ny = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidClickAngle { axis: 'y', .. }));

        let err = DeviceDescriptor::from_toml_str("dpi = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDpi));

        let err = DeviceDescriptor::from_toml_str("dpi = \"high\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file() {
        let err = DeviceDescriptor::from_path("/nonexistent/wheelnorm/device.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
