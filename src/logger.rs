use crate::emitter::AxisEmitter;
use crate::event::{AxisEvent, AxisKind};

/// An emitter that writes every scroll notification to the `log` facade.
pub struct AxisLogger {
    label: String,
    level: log::Level,
}

impl AxisLogger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level: log::Level::Info,
        }
    }

    pub fn with_level(mut self, level: log::Level) -> Self {
        self.level = level;
        self
    }
}

impl AxisEmitter for AxisLogger {
    fn notify_axis(&mut self, event: &AxisEvent) {
        match event.kind {
            AxisKind::Wheel {
                axis,
                v120,
                degrees,
            } => log::log!(
                self.level,
                "[{}] {} wheel {:?} v120={} degrees={:.2}",
                self.label,
                event.time,
                axis,
                v120,
                degrees
            ),
            AxisKind::LegacyWheel {
                axis,
                discrete,
                degrees,
            } => log::log!(
                self.level,
                "[{}] {} legacy {:?} discrete={} degrees={:.2}",
                self.label,
                event.time,
                axis,
                discrete,
                degrees
            ),
            AxisKind::Continuous { delta } => log::log!(
                self.level,
                "[{}] {} continuous dx={:.3} dy={:.3}",
                self.label,
                event.time,
                delta.x,
                delta.y
            ),
        }
    }
}
