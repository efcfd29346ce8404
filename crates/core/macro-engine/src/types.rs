#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Press,
    Release,
    Repeat,
}

impl Transition {
    /// Maps an evdev `EV_KEY` value onto a transition.
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Transition::Release),
            1 => Some(Transition::Press),
            2 => Some(Transition::Repeat),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: u16,
    pub transition: Transition,
}

impl KeyEvent {
    pub fn new(code: u16, transition: Transition) -> Self {
        Self { code, transition }
    }

    pub fn press(code: u16) -> Self {
        Self::new(code, Transition::Press)
    }

    pub fn release(code: u16) -> Self {
        Self::new(code, Transition::Release)
    }

    pub fn is_press(&self) -> bool {
        self.transition == Transition::Press
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Accept,
    Reject,
    Partial,
}

/// Outcome of running a matcher over a buffer.
///
/// `remainder` borrows from the evaluated buffer and is always one of its
/// suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub state: MatchState,
    pub remainder: &'a [KeyEvent],
    pub captures: Vec<Vec<KeyEvent>>,
}

impl<'a> MatchResult<'a> {
    pub fn accept(remainder: &'a [KeyEvent]) -> Self {
        Self {
            state: MatchState::Accept,
            remainder,
            captures: Vec::new(),
        }
    }

    pub fn reject(remainder: &'a [KeyEvent]) -> Self {
        Self {
            state: MatchState::Reject,
            remainder,
            captures: Vec::new(),
        }
    }

    pub fn partial(remainder: &'a [KeyEvent]) -> Self {
        Self {
            state: MatchState::Partial,
            remainder,
            captures: Vec::new(),
        }
    }

    pub fn with_captures(mut self, captures: Vec<Vec<KeyEvent>>) -> Self {
        self.captures = captures;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    Empty,
    Accumulating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Repeat transitions never reach the buffer.
    Ignored,
    /// The reset key was seen; the buffer was cleared before any binding ran.
    Reset,
    /// Binding at this index accepted and its handler was invoked.
    Fired { binding: usize },
    /// At least one binding still needs more events.
    Retained,
    /// Every binding rejected the buffer.
    Flushed,
}
