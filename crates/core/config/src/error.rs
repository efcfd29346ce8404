use macro_engine::UnknownNamespace;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config {0} must be a JSON object")]
    NotAnObject(String),

    #[error("No config file to load, pass --config or create the defaults file")]
    NoConfigFiles,

    #[error("Scheme {0:?} not found under \"expressions\"")]
    MissingScheme(String),

    #[error("Invalid binding in scheme {scheme:?}: {reason}")]
    InvalidBinding { scheme: String, reason: String },

    #[error(transparent)]
    InvalidNamespace(#[from] UnknownNamespace),

    #[error("reset_key and wildcard_key must differ, both are {0:?}")]
    ConflictingKeys(String),

    #[error("No input device configured, set one of device.path, device.name or device.xid")]
    MissingDevice,
}
