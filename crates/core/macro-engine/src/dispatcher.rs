use crate::expression::Expression;
use crate::handler::MacroHandler;
use crate::types::{DispatchOutcome, DispatcherState, KeyEvent, MatchState, Transition};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

#[derive(Debug)]
pub struct Binding {
    pub expression: Expression,
    pub handler: Box<dyn MacroHandler>,
}

/// Owns the live event buffer and decides, after every event, whether to
/// keep accumulating, fire a binding, or start over.
#[derive(Debug)]
pub struct Dispatcher {
    buffer: Vec<KeyEvent>,
    reset: Expression,
    bindings: Vec<Binding>,
}

impl Dispatcher {
    pub fn new(reset: Expression) -> Self {
        Self {
            buffer: Vec::new(),
            reset,
            bindings: Vec::new(),
        }
    }

    pub fn add_binding(&mut self, expression: Expression, handler: Box<dyn MacroHandler>) {
        log::debug!(
            "Binding #{}: '{}' -> {:?}",
            self.bindings.len(),
            expression.pattern(),
            handler
        );
        self.bindings.push(Binding {
            expression,
            handler,
        });
    }

    pub fn with_binding(mut self, expression: Expression, handler: Box<dyn MacroHandler>) -> Self {
        self.add_binding(expression, handler);
        self
    }

    pub fn handle_event(&mut self, event: KeyEvent) -> DispatchOutcome {
        if event.transition == Transition::Repeat {
            return DispatchOutcome::Ignored;
        }

        self.buffer.push(event);
        log::trace!("Buffer: {:?}", self.buffer);

        if self.reset.process(&self.buffer).0 == MatchState::Accept {
            log::debug!("Reset key pressed, dropping {} buffered events", self.buffer.len());
            self.clear();
            return DispatchOutcome::Reset;
        }

        let mut retain = false;

        for (index, binding) in self.bindings.iter().enumerate() {
            let (state, captures) = binding.expression.process(&self.buffer);

            match state {
                MatchState::Accept => {
                    log::debug!(
                        "Pattern '{}' matched with captures {:?}",
                        binding.expression.pattern(),
                        captures
                    );
                    run_handler(binding, &captures);
                    self.buffer.clear();
                    return DispatchOutcome::Fired { binding: index };
                }
                MatchState::Partial => retain = true,
                MatchState::Reject => {}
            }
        }

        if retain {
            DispatchOutcome::Retained
        } else {
            log::debug!("No pattern can match, flushing {} events", self.buffer.len());
            self.clear();
            DispatchOutcome::Flushed
        }
    }

    pub fn state(&self) -> DispatcherState {
        if self.buffer.is_empty() {
            DispatcherState::Empty
        } else {
            DispatcherState::Accumulating
        }
    }

    pub fn buffer(&self) -> &[KeyEvent] {
        &self.buffer
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

fn run_handler(binding: &Binding, captures: &[String]) {
    let pattern = binding.expression.pattern();

    match panic::catch_unwind(AssertUnwindSafe(|| binding.handler.invoke(captures))) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            log::error!("Handler for '{}' failed: {}", pattern, e);
        }
        Err(payload) => {
            log::error!(
                "Handler for '{}' panicked: {}",
                pattern,
                panic_message(payload.as_ref())
            );
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic payload".to_string()
    }
}
