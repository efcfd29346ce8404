use crate::loader;
use anyhow::{Context, Result};
use config::{Config, ConfigError, DeviceConfig, MacroConfig};
use input_listener::{DeviceSelector, EventSource, XInputToggle};
use log::{error, info, warn};
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use std::sync::Arc;
use std::thread;

pub struct MacrodApp {
    config: Arc<Config>,
}

impl Default for MacrodApp {
    fn default() -> Self {
        Self::new()
    }
}

impl MacrodApp {
    pub fn new() -> Self {
        Self {
            config: Config::global(),
        }
    }

    pub fn with_config(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn run(self) -> Result<()> {
        info!("Starting macrod ...");

        let macro_config = MacroConfig::load(&self.config.config_files())
            .context("Failed to load configuration")?;
        let mut dispatcher = loader::build_dispatcher(&macro_config, &self.config.scheme)?;

        let device = &macro_config.device;
        let selector = DeviceSelector::from_parts(
            device.path.as_deref(),
            device.xid,
            device.name.as_deref(),
        )
        .ok_or(ConfigError::MissingDevice)?;

        let mut source = EventSource::open(&selector)
            .with_context(|| format!("Failed to open input device by {}", selector))?;

        let toggle = match device.default_state {
            Some(enabled) => {
                let toggle = Self::xinput_toggle(device, &source)?;
                toggle.set_state(enabled)?;
                Some(toggle)
            }
            None => None,
        };

        thread::spawn(move || {
            if let Err(e) = Self::setup_signal_handlers(toggle) {
                error!("Failed to setup signal handlers: {}", e);
            }
        });

        info!("macrod is running");

        let result = source.run(&mut dispatcher);

        if let Some(toggle) = toggle {
            if let Err(e) = toggle.restore() {
                error!("Failed to restore device state: {}", e);
            }
        }

        result.context("Input device stopped")
    }

    fn xinput_toggle(device: &DeviceConfig, source: &EventSource) -> Result<XInputToggle> {
        // Names are not unique in X, the event node is.
        let toggle = match device.xid {
            Some(xid) => XInputToggle::new(xid)?,
            None => XInputToggle::for_path(source.path())?,
        };

        Ok(toggle)
    }

    fn setup_signal_handlers(toggle: Option<XInputToggle>) -> Result<()> {
        let mut signals = Signals::new([SIGTERM, SIGINT, SIGHUP])?;
        info!("Signal handlers installed for SIGTERM, SIGINT, SIGHUP");

        if let Some(sig) = signals.forever().next() {
            match sig {
                SIGTERM => info!("Received SIGTERM signal"),
                SIGINT => info!("Received SIGINT signal (Ctrl+C)"),
                SIGHUP => info!("Received SIGHUP signal"),
                _ => warn!("Received signal {}", sig),
            }

            if let Some(toggle) = toggle {
                match toggle.restore() {
                    Ok(()) => info!("Device state restored"),
                    Err(e) => error!("Failed to restore device state: {}", e),
                }
            }

            info!("Process termination");
            std::process::exit(0);
        }

        Ok(())
    }
}
