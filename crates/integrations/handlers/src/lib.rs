mod dummy;
mod factory;
mod pipe;
mod shell;
mod template;

pub use dummy::DummyHandler;
pub use factory::{HandlerFactory, HandlerKind};
pub use pipe::{PipeHandler, PipeMode};
pub use shell::ShellHandler;
pub use template::Template;
