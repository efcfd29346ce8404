use crate::template::Template;
use macro_engine::{HandlerError, MacroHandler};
use std::process::{Command, Stdio};

#[derive(Debug)]
pub struct ShellHandler {
    template: Template,
    user: String,
}

impl ShellHandler {
    pub fn new(template: Template, user: &str) -> Self {
        Self {
            template,
            user: user.to_string(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn command(&self, captures: &[String]) -> Result<Command, HandlerError> {
        let script = self.template.fill(captures)?;

        let mut command = Command::new("sudo");
        command
            .args(["-u", &self.user, "sh", "-c", &script])
            .stdin(Stdio::null())
            .stdout(Stdio::null());

        Ok(command)
    }
}

impl MacroHandler for ShellHandler {
    fn invoke(&self, captures: &[String]) -> Result<(), HandlerError> {
        let mut command = self.command(captures)?;
        log::info!("Running as {}: {:?}", self.user, command);

        let status = command.status()?;
        if !status.success() {
            return Err(HandlerError::Failed(format!(
                "'{}' exited with {}",
                self.template.source(),
                status
            )));
        }

        Ok(())
    }
}
