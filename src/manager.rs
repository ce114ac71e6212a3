use crate::device::Device;
use crate::emitter::AxisEmitter;
use crate::event::DeviceEvent;
use crate::wheel::WheelDispatch;

struct ManagedDevice {
    device: Box<dyn Device>,
    wheel: WheelDispatch,
}

/// Drives the wheel pipeline for a set of devices.
///
/// Relative events go to the ingestor, button events to the inhibition gate,
/// and a frame with pending wheel work triggers a flush.
#[derive(Default)]
pub struct DeviceManager {
    devices: Vec<ManagedDevice>,
}

impl DeviceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a device; its wheel state is initialized from its descriptor.
    pub fn add_device<D: Device + 'static>(&mut self, device: D) {
        let wheel = WheelDispatch::new(device.descriptor());
        log::debug!("added device {} ({})", device.id(), device.name());
        self.devices.push(ManagedDevice {
            device: Box::new(device),
            wheel,
        });
    }

    /// Removes a device and drops its wheel state. Returns whether it existed.
    pub fn remove_device(&mut self, id: &str) -> bool {
        let before = self.devices.len();
        self.devices.retain(|d| d.device.id() != id);
        before != self.devices.len()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Wheel state for a device, by id.
    pub fn wheel(&self, id: &str) -> Option<&WheelDispatch> {
        self.devices
            .iter()
            .find(|d| d.device.id() == id)
            .map(|d| &d.wheel)
    }

    /// Polls every device and processes what it reported.
    pub fn poll_all(&mut self, emitter: &mut dyn AxisEmitter) {
        for managed in self.devices.iter_mut() {
            for event in managed.device.poll() {
                match event {
                    DeviceEvent::Relative(e) => managed.wheel.process_relative(&e),
                    DeviceEvent::Button(e) => managed.wheel.notify_physical_button(&e),
                    DeviceEvent::Frame { time } => {
                        if managed.wheel.has_pending() {
                            let pointer = managed.device.descriptor().pointer;
                            managed.wheel.handle_state(time, pointer, emitter);
                        }
                    }
                }
            }
        }
    }
}
