mod device;
mod error;
mod listener;
mod xinput;

pub use device::{list_devices, DeviceInfo, DeviceSelector};
pub use error::DeviceError;
pub use listener::{key_event, EventSource};
pub use xinput::XInputToggle;
