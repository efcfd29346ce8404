use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("No input device named {0:?}")]
    NotFound(String),

    #[error("{count} input devices are named {name:?}, select one by path or xid")]
    Ambiguous { name: String, count: usize },

    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read events: {0}")]
    Read(#[source] io::Error),

    #[error("xinput error: {0}")]
    XInput(String),

    #[error("Failed to run xinput: {0}")]
    XInputSpawn(#[source] io::Error),
}
