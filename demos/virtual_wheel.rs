use wheelnorm::backends::VirtualDevice;
use wheelnorm::{
    AxisEmitter, AxisEvent, AxisKind, DeviceDescriptor, DeviceManager, WheelCapabilities, BTN_MIDDLE,
};

struct Printer;

impl AxisEmitter for Printer {
    fn notify_axis(&mut self, event: &AxisEvent) {
        match event.kind {
            AxisKind::Wheel { axis, v120, degrees } => {
                println!("{:>8}us {:?} v120={} ({:.1}°)", event.time, axis, v120, degrees);
            }
            AxisKind::LegacyWheel { axis, discrete, degrees } => {
                println!("{:>8}us {:?} clicks={} ({:.1}°)", event.time, axis, discrete, degrees);
            }
            AxisKind::Continuous { delta } => {
                println!("{:>8}us continuous dx={:.2} dy={:.2}", event.time, delta.x, delta.y);
            }
        }
    }
}

fn main() {
    // A mouse that claims hi-res support but only ever sends legacy clicks.
    let mut device = VirtualDevice::new(
        "virtual:demo",
        DeviceDescriptor::wheel_mouse("Demo Wheel", WheelCapabilities::hi_res()),
    );

    device.wheel(1).frame();
    device.wheel(2).hwheel(-1).frame();
    device.press(BTN_MIDDLE).wheel(5).frame();
    device.release(BTN_MIDDLE).wheel(-1).frame();

    let mut manager = DeviceManager::new();
    manager.add_device(device);
    manager.poll_all(&mut Printer);
}
