use crate::error::ConfigError;
use crate::header::split_header;
use macro_engine::Namespace;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub xid: Option<u32>,
    /// Enabled state to put the device in for the X server while running.
    #[serde(default, deserialize_with = "deserialize_state")]
    pub default_state: Option<bool>,
}

impl DeviceConfig {
    pub fn is_configured(&self) -> bool {
        self.path.is_some() || self.name.is_some() || self.xid.is_some()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StateValue {
    Flag(bool),
    Level(u8),
}

fn deserialize_state<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StateValue>::deserialize(deserializer)?;
    Ok(value.map(|state| match state {
        StateValue::Flag(enabled) => enabled,
        StateValue::Level(level) => level != 0,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSpec {
    pub handler: String,
    pub params: HashMap<String, String>,
    pub pattern: String,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MacroConfig {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default = "default_namespace")]
    namespace: String,
    #[serde(default = "default_reset_key")]
    reset_key: String,
    #[serde(default = "default_wildcard_key")]
    wildcard_key: String,
    #[serde(default)]
    expressions: Map<String, Value>,
}

fn default_namespace() -> String {
    "key".to_string()
}

fn default_reset_key() -> String {
    "ESC".to_string()
}

fn default_wildcard_key() -> String {
    "ENTER".to_string()
}

impl MacroConfig {
    /// Reads every file in order and merges their top-level keys, later files
    /// replacing earlier ones.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, ConfigError> {
        if paths.is_empty() {
            return Err(ConfigError::NoConfigFiles);
        }

        let mut merged = Map::new();

        for path in paths {
            let path = path.as_ref();
            log::info!("Loading config from {}", path.display());

            let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

            merged.extend(parse_layer(&text, &path.display().to_string())?);
        }

        Self::from_map(merged, "merged config")
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let layer = parse_layer(text, "inline config")?;
        Self::from_map(layer, "inline config")
    }

    fn from_map(map: Map<String, Value>, origin: &str) -> Result<Self, ConfigError> {
        let config: MacroConfig =
            serde_json::from_value(Value::Object(map)).map_err(|source| ConfigError::Json {
                origin: origin.to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.namespace()?;

        if self.reset_key().eq_ignore_ascii_case(self.wildcard_key()) {
            return Err(ConfigError::ConflictingKeys(self.reset_key().to_string()));
        }

        Ok(())
    }

    pub fn namespace(&self) -> Result<Namespace, ConfigError> {
        Ok(self.namespace.parse::<Namespace>()?)
    }

    pub fn reset_key(&self) -> &str {
        strip_brackets(&self.reset_key)
    }

    pub fn wildcard_key(&self) -> &str {
        strip_brackets(&self.wildcard_key)
    }

    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.expressions.keys().map(String::as_str)
    }

    /// Flattens one scheme into bindings, keeping the order of headers and
    /// of patterns within each header as written in the file.
    pub fn bindings(&self, scheme: &str) -> Result<Vec<BindingSpec>, ConfigError> {
        let headers = self
            .expressions
            .get(scheme)
            .ok_or_else(|| ConfigError::MissingScheme(scheme.to_string()))?;

        let invalid = |reason: String| ConfigError::InvalidBinding {
            scheme: scheme.to_string(),
            reason,
        };

        let headers = headers
            .as_object()
            .ok_or_else(|| invalid("scheme must map handler headers to objects".to_string()))?;

        let mut specs = Vec::new();

        for (header, patterns) in headers {
            let (handler, params) = split_header(header);
            if handler.is_empty() {
                return Err(invalid("empty handler header".to_string()));
            }

            let patterns = patterns.as_object().ok_or_else(|| {
                invalid(format!("header {:?} must map patterns to commands", header))
            })?;

            for (pattern, command) in patterns {
                let command = command.as_str().ok_or_else(|| {
                    invalid(format!("command for pattern {:?} must be a string", pattern))
                })?;

                specs.push(BindingSpec {
                    handler: handler.clone(),
                    params: params.clone(),
                    pattern: pattern.clone(),
                    command: command.to_string(),
                });
            }
        }

        log::debug!("Scheme {:?} has {} bindings", scheme, specs.len());
        Ok(specs)
    }
}

fn parse_layer(text: &str, origin: &str) -> Result<Map<String, Value>, ConfigError> {
    let json = strip_comments(text);

    let value: Value = serde_json::from_str(&json).map_err(|source| ConfigError::Json {
        origin: origin.to_string(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::NotAnObject(origin.to_string())),
    }
}

fn strip_comments(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_brackets(name: &str) -> &str {
    name.strip_prefix('<')
        .and_then(|inner| inner.strip_suffix('>'))
        .unwrap_or(name)
}
