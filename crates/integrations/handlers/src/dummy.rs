use macro_engine::{HandlerError, MacroHandler};

/// Accepts the match and does nothing. Useful to swallow a pattern.
#[derive(Debug, Default)]
pub struct DummyHandler;

impl MacroHandler for DummyHandler {
    fn invoke(&self, captures: &[String]) -> Result<(), HandlerError> {
        log::debug!("Dummy handler called with {:?}", captures);
        Ok(())
    }
}
