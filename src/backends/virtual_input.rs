//! Scripted device for demos and tests.
//!
//! [`VirtualDevice`] queues raw events the way a kernel device node would
//! deliver them. Each helper stamps the event with the current virtual time;
//! [`frame`](VirtualDevice::frame) closes the frame and advances the clock.

use crate::device::{Device, DeviceDescriptor};
use crate::event::{
    ButtonEvent, ButtonState, DeviceEvent, RelativeEvent, REL_HWHEEL, REL_HWHEEL_HI_RES,
    REL_WHEEL, REL_WHEEL_HI_RES,
};

/// Microseconds between frames.
const FRAME_INTERVAL_US: u64 = 8_000;

pub struct VirtualDevice {
    id: String,
    name: String,
    descriptor: DeviceDescriptor,
    now: u64,
    events: Vec<DeviceEvent>,
}

impl VirtualDevice {
    pub fn new(id: &str, descriptor: DeviceDescriptor) -> Self {
        let name = descriptor
            .meta
            .name
            .clone()
            .unwrap_or_else(|| id.to_string());
        Self {
            id: id.to_string(),
            name,
            descriptor,
            now: 0,
            events: Vec::new(),
        }
    }

    /// Inject a raw event. Its timestamp is kept as given.
    pub fn feed(&mut self, event: DeviceEvent) {
        self.events.push(event);
    }

    /// Queue any `EV_REL` code.
    pub fn relative(&mut self, code: u16, value: i32) -> &mut Self {
        self.feed(DeviceEvent::Relative(RelativeEvent {
            time: self.now,
            code,
            value,
        }));
        self
    }

    pub fn wheel(&mut self, clicks: i32) -> &mut Self {
        self.relative(REL_WHEEL, clicks)
    }

    pub fn hwheel(&mut self, clicks: i32) -> &mut Self {
        self.relative(REL_HWHEEL, clicks)
    }

    pub fn wheel_hi_res(&mut self, v120: i32) -> &mut Self {
        self.relative(REL_WHEEL_HI_RES, v120)
    }

    pub fn hwheel_hi_res(&mut self, v120: i32) -> &mut Self {
        self.relative(REL_HWHEEL_HI_RES, v120)
    }

    pub fn press(&mut self, button: u16) -> &mut Self {
        self.button(button, ButtonState::Pressed)
    }

    pub fn release(&mut self, button: u16) -> &mut Self {
        self.button(button, ButtonState::Released)
    }

    fn button(&mut self, button: u16, state: ButtonState) -> &mut Self {
        self.feed(DeviceEvent::Button(ButtonEvent {
            time: self.now,
            button,
            state,
        }));
        self
    }

    /// Queue `SYN_REPORT` and advance the clock.
    pub fn frame(&mut self) -> &mut Self {
        self.feed(DeviceEvent::Frame { time: self.now });
        self.now += FRAME_INTERVAL_US;
        self
    }

    /// Change the descriptor's pointer capability, e.g. to simulate a device
    /// that gains or loses its pointer seat capability.
    pub fn set_pointer(&mut self, pointer: bool) {
        self.descriptor.pointer = pointer;
    }
}

impl Device for VirtualDevice {
    fn poll(&mut self) -> Vec<DeviceEvent> {
        std::mem::take(&mut self.events)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn descriptor(&self) -> &DeviceDescriptor {
        &self.descriptor
    }
}
