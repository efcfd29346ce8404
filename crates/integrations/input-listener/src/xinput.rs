use crate::error::DeviceError;
use std::path::{Path, PathBuf};
use std::process::Command;

const ENABLED_PROP: &str = "Device Enabled";
const NODE_PROP: &str = "Device Node";

/// Enables or disables a device for the X server so its events reach only
/// this process. Remembers the state found at startup so it can be put back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XInputToggle {
    xid: u32,
    initial: bool,
}

impl XInputToggle {
    pub fn new(xid: u32) -> Result<Self, DeviceError> {
        let initial = read_enabled(xid)?;
        log::debug!("xinput device {} initially enabled: {}", xid, initial);

        Ok(Self { xid, initial })
    }

    pub fn for_path(path: &Path) -> Result<Self, DeviceError> {
        Self::new(xid_for_path(path)?)
    }

    pub fn xid(&self) -> u32 {
        self.xid
    }

    pub fn initial_state(&self) -> bool {
        self.initial
    }

    pub fn state(&self) -> Result<bool, DeviceError> {
        read_enabled(self.xid)
    }

    pub fn set_state(&self, enabled: bool) -> Result<(), DeviceError> {
        log::info!(
            "{} xinput device {}",
            if enabled { "Enabling" } else { "Disabling" },
            self.xid
        );

        let value = if enabled { "1" } else { "0" };
        run_xinput(&["set-prop", &self.xid.to_string(), ENABLED_PROP, value])?;
        Ok(())
    }

    pub fn restore(&self) -> Result<(), DeviceError> {
        self.set_state(self.initial)
    }
}

/// Finds the X input id whose device node is `path`. One physical device
/// often shows up several times under the same name; the node tells them
/// apart.
pub fn xid_for_path(path: &Path) -> Result<u32, DeviceError> {
    let ids = parse_id_list(&run_xinput(&["list", "--id-only"])?);

    let props = ids.into_iter().filter_map(|xid| {
        match run_xinput(&["list-props", &xid.to_string()]) {
            Ok(props) => Some((xid, props)),
            Err(e) => {
                log::debug!("Skipping xinput device {}: {}", xid, e);
                None
            }
        }
    });

    pick_by_node(path, props).ok_or_else(|| {
        DeviceError::XInput(format!("no X input device reads {}", path.display()))
    })
}

pub fn device_node(xid: u32) -> Result<PathBuf, DeviceError> {
    let output = run_xinput(&["list-props", &xid.to_string()])?;

    parse_device_node(&output)
        .ok_or_else(|| DeviceError::XInput(format!("device {} has no device node", xid)))
}

fn read_enabled(xid: u32) -> Result<bool, DeviceError> {
    let output = run_xinput(&["list-props", &xid.to_string()])?;

    parse_enabled(&output).ok_or_else(|| {
        DeviceError::XInput(format!("device {} has no {:?} property", xid, ENABLED_PROP))
    })
}

fn run_xinput(args: &[&str]) -> Result<String, DeviceError> {
    let output = Command::new("xinput")
        .args(args)
        .output()
        .map_err(DeviceError::XInputSpawn)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DeviceError::XInput(format!(
            "xinput {} failed: {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

// Lines look like `\tDevice Enabled (142):\t1`.
fn property_value<'a>(props: &'a str, name: &str) -> Option<&'a str> {
    props.lines().find_map(|line| {
        let line = line.trim();
        let rest = line.strip_prefix(name)?;
        let (_, value) = rest.split_once(':')?;
        Some(value.trim())
    })
}

fn parse_enabled(props: &str) -> Option<bool> {
    match property_value(props, ENABLED_PROP)? {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

fn parse_id_list(output: &str) -> Vec<u32> {
    output
        .lines()
        .filter_map(|line| line.trim().parse().ok())
        .collect()
}

fn pick_by_node<I, S>(path: &Path, props: I) -> Option<u32>
where
    I: IntoIterator<Item = (u32, S)>,
    S: AsRef<str>,
{
    props
        .into_iter()
        .find(|(_, props)| parse_device_node(props.as_ref()).as_deref() == Some(path))
        .map(|(xid, _)| xid)
}

fn parse_device_node(props: &str) -> Option<PathBuf> {
    let value = property_value(props, NODE_PROP)?;
    let path = value.trim_matches('"');

    (!path.is_empty()).then(|| PathBuf::from(path))
}
