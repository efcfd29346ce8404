use crate::device::{self, DeviceSelector};
use crate::error::DeviceError;
use evdev::{Device, EventType, InputEvent};
use macro_engine::{DispatchOutcome, Dispatcher, KeyEvent, Transition};
use std::path::{Path, PathBuf};

/// Converts a raw event into a key transition. Anything other than a key or
/// button press or release, auto-repeat included, is dropped.
pub fn key_event(event: &InputEvent) -> Option<KeyEvent> {
    if event.event_type() != EventType::KEY {
        return None;
    }

    match Transition::from_value(event.value())? {
        Transition::Repeat => None,
        transition => Some(KeyEvent::new(event.code(), transition)),
    }
}

pub struct EventSource {
    device: Device,
    path: PathBuf,
}

impl EventSource {
    pub fn open(selector: &DeviceSelector) -> Result<Self, DeviceError> {
        let path = selector.resolve()?;
        let device = device::open(&path)?;

        log::info!(
            "Listening on {} ({})",
            path.display(),
            device.name().unwrap_or("unnamed device")
        );

        Ok(Self { device, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Blocks until the device reports the next synced batch and returns its
    /// key transitions in order. The batch may be empty.
    pub fn next_batch(&mut self) -> Result<Vec<KeyEvent>, DeviceError> {
        let events = self.device.fetch_events().map_err(DeviceError::Read)?;

        Ok(events.filter_map(|event| key_event(&event)).collect())
    }

    /// Feeds every key transition into the dispatcher. Returns only when the
    /// device can no longer be read.
    pub fn run(&mut self, dispatcher: &mut Dispatcher) -> Result<(), DeviceError> {
        loop {
            for event in self.next_batch()? {
                match dispatcher.handle_event(event) {
                    DispatchOutcome::Fired { binding } => {
                        log::debug!("Binding #{} fired", binding);
                    }
                    outcome => {
                        log::trace!("{:?} -> {:?}", event, outcome);
                    }
                }
            }
        }
    }
}
