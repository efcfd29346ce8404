use crate::error::DeviceError;
use crate::xinput;
use evdev::Device;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSelector {
    Path(PathBuf),
    Name(String),
    XId(u32),
}

impl DeviceSelector {
    /// Picks the most specific way of finding the device: path, then X
    /// input id, then name.
    pub fn from_parts(
        path: Option<&Path>,
        xid: Option<u32>,
        name: Option<&str>,
    ) -> Option<Self> {
        if let Some(path) = path {
            Some(DeviceSelector::Path(path.to_path_buf()))
        } else if let Some(xid) = xid {
            Some(DeviceSelector::XId(xid))
        } else {
            name.map(|name| DeviceSelector::Name(name.to_string()))
        }
    }

    pub fn resolve(&self) -> Result<PathBuf, DeviceError> {
        match self {
            DeviceSelector::Path(path) => Ok(path.clone()),
            DeviceSelector::XId(xid) => xinput::device_node(*xid),
            DeviceSelector::Name(name) => {
                let devices = list_devices();
                let candidates: Vec<_> = devices
                    .iter()
                    .filter(|info| info.name.as_deref() == Some(name.as_str()))
                    .collect();
                pick_single(name, &candidates)
            }
        }
    }
}

impl fmt::Display for DeviceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceSelector::Path(path) => write!(f, "path {}", path.display()),
            DeviceSelector::Name(name) => write!(f, "name {:?}", name),
            DeviceSelector::XId(xid) => write!(f, "xid {}", xid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub path: PathBuf,
    pub name: Option<String>,
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.path.display(),
            self.name.as_deref().unwrap_or("<unnamed>")
        )
    }
}

/// Every event device that can report key or button events, sorted by path.
pub fn list_devices() -> Vec<DeviceInfo> {
    let mut devices: Vec<_> = evdev::enumerate()
        .filter(|(_, device)| device.supported_keys().is_some())
        .map(|(path, device)| DeviceInfo {
            path,
            name: device.name().map(str::to_string),
        })
        .collect();

    devices.sort_by(|a, b| a.path.cmp(&b.path));
    devices
}

pub(crate) fn open(path: &Path) -> Result<Device, DeviceError> {
    Device::open(path).map_err(|source| DeviceError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn pick_single(name: &str, candidates: &[&DeviceInfo]) -> Result<PathBuf, DeviceError> {
    match candidates {
        [] => Err(DeviceError::NotFound(name.to_string())),
        [only] => Ok(only.path.clone()),
        many => Err(DeviceError::Ambiguous {
            name: name.to_string(),
            count: many.len(),
        }),
    }
}
