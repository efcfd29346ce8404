use crate::template::Template;
use macro_engine::{HandlerError, MacroHandler};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeMode {
    Truncate,
    Append,
}

impl FromStr for PipeMode {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" => Ok(PipeMode::Truncate),
            "a" => Ok(PipeMode::Append),
            _ => Err(HandlerError::InvalidParam {
                name: "mode".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Writes the filled command text to a file or FIFO, opened anew on every
/// match.
#[derive(Debug)]
pub struct PipeHandler {
    template: Template,
    path: PathBuf,
    mode: PipeMode,
}

impl PipeHandler {
    pub fn new(template: Template, path: impl Into<PathBuf>, mode: PipeMode) -> Self {
        Self {
            template,
            path: path.into(),
            mode,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> PipeMode {
        self.mode
    }
}

impl MacroHandler for PipeHandler {
    fn invoke(&self, captures: &[String]) -> Result<(), HandlerError> {
        let text = self.template.fill(captures)?;

        let mut options = OpenOptions::new();
        match self.mode {
            PipeMode::Truncate => options.write(true).create(true).truncate(true),
            PipeMode::Append => options.append(true).create(true),
        };

        let mut file = options.open(&self.path)?;
        file.write_all(text.as_bytes())?;

        log::debug!("Wrote {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }
}
