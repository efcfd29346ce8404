mod compiler;
mod error;
mod handler;
mod matcher;
mod translator;
mod types;

pub mod dispatcher;
pub mod expression;
pub mod parser;

pub use compiler::compile;
pub use dispatcher::{Binding, Dispatcher};
pub use error::{HandlerError, PatternError};
pub use expression::Expression;
pub use handler::MacroHandler;
pub use matcher::Matcher;
pub use parser::{parse, parse_pattern, Node};
pub use translator::{EvdevTranslator, Namespace, Translator, UnknownNamespace};
pub use types::{
    DispatchOutcome, DispatcherState, KeyEvent, MatchResult, MatchState, Transition,
};
