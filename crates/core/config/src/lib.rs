mod config;
mod error;
mod header;
mod macro_config;

pub use config::Config;
pub use error::ConfigError;
pub use header::split_header;
pub use macro_config::{BindingSpec, DeviceConfig, MacroConfig};
