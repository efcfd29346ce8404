use crate::error::HandlerError;
use std::fmt::Debug;

pub trait MacroHandler: Send + Sync + Debug {
    fn invoke(&self, captures: &[String]) -> Result<(), HandlerError>;
}
