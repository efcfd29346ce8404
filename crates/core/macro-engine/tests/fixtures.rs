#![allow(dead_code)]

use crossbeam_channel::{unbounded, Receiver, Sender};
use macro_engine::*;
use std::sync::Arc;
use std::time::Duration;

pub const KEY_ESC: u16 = 1;
pub const KEY_ENTER: u16 = 28;
pub const KEY_A: u16 = 30;
pub const KEY_B: u16 = 48;
pub const KEY_C: u16 = 46;
pub const KEY_SYSRQ: u16 = 99;

#[derive(Debug)]
pub struct RecordingHandler {
    id: usize,
    sender: Sender<(usize, Vec<String>)>,
}

impl MacroHandler for RecordingHandler {
    fn invoke(&self, captures: &[String]) -> Result<(), HandlerError> {
        let _ = self.sender.send((self.id, captures.to_vec()));
        Ok(())
    }
}

#[derive(Debug)]
pub struct FailingHandler;

impl MacroHandler for FailingHandler {
    fn invoke(&self, _captures: &[String]) -> Result<(), HandlerError> {
        Err(HandlerError::Failed("exit status 1".to_string()))
    }
}

#[derive(Debug)]
pub struct PanickingHandler;

impl MacroHandler for PanickingHandler {
    fn invoke(&self, _captures: &[String]) -> Result<(), HandlerError> {
        panic!("handler exploded");
    }
}

pub fn keyboard() -> Arc<dyn Translator> {
    Arc::new(EvdevTranslator::keyboard())
}

pub struct TestDispatcher {
    dispatcher: Dispatcher,
    sender: Sender<(usize, Vec<String>)>,
    receiver: Receiver<(usize, Vec<String>)>,
}

impl TestDispatcher {
    pub fn new(reset_code: u16) -> Self {
        let (sender, receiver) = unbounded();

        Self {
            dispatcher: Dispatcher::new(Expression::reset(reset_code, keyboard())),
            sender,
            receiver,
        }
    }

    /// Registers `pattern` with a handler that reports `id` back to the test.
    pub fn with_pattern(self, pattern: &str, id: usize) -> Self {
        let handler = Box::new(RecordingHandler {
            id,
            sender: self.sender.clone(),
        });
        self.with_handler(pattern, handler)
    }

    pub fn with_handler(mut self, pattern: &str, handler: Box<dyn MacroHandler>) -> Self {
        let expression = Expression::new(pattern, KEY_ENTER, keyboard())
            .unwrap_or_else(|e| panic!("Pattern {:?} should compile: {}", pattern, e));
        self.dispatcher.add_binding(expression, handler);
        self
    }

    pub fn press(&mut self, code: u16) -> DispatchOutcome {
        self.dispatcher.handle_event(KeyEvent::press(code))
    }

    pub fn release(&mut self, code: u16) -> DispatchOutcome {
        self.dispatcher.handle_event(KeyEvent::release(code))
    }

    pub fn tap(&mut self, code: u16) -> DispatchOutcome {
        let outcome = self.press(code);
        if outcome == DispatchOutcome::Retained {
            self.release(code)
        } else {
            outcome
        }
    }

    pub fn send(&mut self, event: KeyEvent) -> DispatchOutcome {
        self.dispatcher.handle_event(event)
    }

    pub fn state(&self) -> DispatcherState {
        self.dispatcher.state()
    }

    pub fn buffered(&self) -> &[KeyEvent] {
        self.dispatcher.buffer()
    }

    pub fn expect_fired(&self, expected_id: usize, expected_captures: &[&str]) {
        let (id, captures) = self
            .receiver
            .recv_timeout(Duration::from_millis(100))
            .unwrap_or_else(|_| panic!("Expected binding {} to fire", expected_id));

        assert_eq!(id, expected_id, "wrong binding fired");
        assert_eq!(captures, expected_captures);
    }

    pub fn expect_nothing_fired(&self) {
        if let Ok((id, captures)) = self.receiver.try_recv() {
            panic!("Expected no handler call, but binding {} fired with {:?}", id, captures);
        }
    }
}
