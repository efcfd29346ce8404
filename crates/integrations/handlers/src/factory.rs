use crate::dummy::DummyHandler;
use crate::pipe::{PipeHandler, PipeMode};
use crate::shell::ShellHandler;
use crate::template::Template;
use macro_engine::{HandlerError, MacroHandler};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    Dummy,
    Shell,
    Pipe,
}

impl HandlerKind {
    pub fn all() -> impl Iterator<Item = HandlerKind> {
        [HandlerKind::Dummy, HandlerKind::Shell, HandlerKind::Pipe].into_iter()
    }

    pub fn name(self) -> &'static str {
        match self {
            HandlerKind::Dummy => "dummy",
            HandlerKind::Shell => "shell",
            HandlerKind::Pipe => "pipe",
        }
    }

    /// Parameters this kind accepts, with their defaults.
    pub fn defaults(self) -> &'static [(&'static str, &'static str)] {
        match self {
            HandlerKind::Dummy => &[],
            HandlerKind::Shell => &[("user", "nobody")],
            HandlerKind::Pipe => &[("path", "/dev/null"), ("mode", "w")],
        }
    }
}

impl FromStr for HandlerKind {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandlerKind::all()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| HandlerError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Produces handlers of one kind sharing one set of parameters, one per
/// command string.
#[derive(Debug, Clone)]
pub struct HandlerFactory {
    kind: HandlerKind,
    params: HashMap<String, String>,
}

impl HandlerFactory {
    pub fn new(kind: &str, params: HashMap<String, String>) -> Result<Self, HandlerError> {
        let kind: HandlerKind = kind.parse()?;
        let defaults = kind.defaults();

        // Lowest name first so the same config always reports the same one.
        if let Some((name, value)) = params
            .iter()
            .filter(|(name, _)| !defaults.iter().any(|(known, _)| known == name))
            .min_by(|a, b| a.0.cmp(b.0))
        {
            return Err(HandlerError::InvalidParam {
                name: name.clone(),
                value: value.clone(),
            });
        }

        let mut merged: HashMap<String, String> = defaults
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        merged.extend(params);

        let factory = Self {
            kind,
            params: merged,
        };
        factory.validate()?;

        Ok(factory)
    }

    pub fn kind(&self) -> HandlerKind {
        self.kind
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn build(&self, command: &str) -> Result<Box<dyn MacroHandler>, HandlerError> {
        let template = Template::parse(command)?;

        let handler: Box<dyn MacroHandler> = match self.kind {
            HandlerKind::Dummy => Box::new(DummyHandler),
            HandlerKind::Shell => Box::new(ShellHandler::new(template, self.required("user")?)),
            HandlerKind::Pipe => Box::new(PipeHandler::new(
                template,
                self.required("path")?,
                self.required("mode")?.parse::<PipeMode>()?,
            )),
        };

        Ok(handler)
    }

    fn validate(&self) -> Result<(), HandlerError> {
        match self.kind {
            HandlerKind::Dummy => {}
            HandlerKind::Shell => {
                self.required("user")?;
            }
            HandlerKind::Pipe => {
                self.required("path")?;
                self.required("mode")?.parse::<PipeMode>()?;
            }
        }
        Ok(())
    }

    fn required(&self, name: &str) -> Result<&str, HandlerError> {
        match self.param(name) {
            Some(value) if !value.is_empty() => Ok(value),
            value => Err(HandlerError::InvalidParam {
                name: name.to_string(),
                value: value.unwrap_or_default().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in HandlerKind::all() {
            assert_eq!(kind.name().parse::<HandlerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind() {
        assert!(matches!(
            HandlerFactory::new("callback", HashMap::new()),
            Err(HandlerError::UnknownKind(kind)) if kind == "callback"
        ));
    }

    #[test]
    fn test_defaults_are_filled_in() {
        let shell = HandlerFactory::new("shell", HashMap::new()).unwrap();
        let pipe = HandlerFactory::new("pipe", params(&[("mode", "a")])).unwrap();

        assert_eq!(shell.param("user"), Some("nobody"));
        assert_eq!(pipe.param("path"), Some("/dev/null"));
        assert_eq!(pipe.param("mode"), Some("a"));
    }

    #[test]
    fn test_unknown_param() {
        assert!(matches!(
            HandlerFactory::new("dummy", params(&[("user", "bob")])),
            Err(HandlerError::InvalidParam { name, .. }) if name == "user"
        ));
    }

    #[test]
    fn test_first_unknown_param_by_name_is_reported() {
        for _ in 0..8 {
            let result = HandlerFactory::new(
                "pipe",
                params(&[("zeta", "1"), ("mode", "a"), ("alpha", "2"), ("omega", "3")]),
            );

            assert!(matches!(
                result,
                Err(HandlerError::InvalidParam { name, value }) if name == "alpha" && value == "2"
            ));
        }
    }

    #[test]
    fn test_invalid_pipe_mode() {
        assert!(matches!(
            HandlerFactory::new("pipe", params(&[("mode", "r")])),
            Err(HandlerError::InvalidParam { name, value }) if name == "mode" && value == "r"
        ));
    }

    #[test]
    fn test_empty_user() {
        assert!(matches!(
            HandlerFactory::new("shell", params(&[("user", "")])),
            Err(HandlerError::InvalidParam { .. })
        ));
    }

    #[test]
    fn test_build_rejects_bad_template() {
        let factory = HandlerFactory::new("dummy", HashMap::new()).unwrap();

        assert!(factory.build("ok {}").is_ok());
        assert!(matches!(
            factory.build("broken {"),
            Err(HandlerError::Template(_))
        ));
    }
}
