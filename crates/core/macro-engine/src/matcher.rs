use crate::types::{KeyEvent, MatchResult, MatchState, Transition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    Button { code: u16, transition: Transition },
    Wildcard { terminator: u16 },
    Sequence(Vec<Matcher>),
}

impl Matcher {
    pub fn button(code: u16) -> Self {
        Matcher::Button {
            code,
            transition: Transition::Press,
        }
    }

    pub fn button_release(code: u16) -> Self {
        Matcher::Button {
            code,
            transition: Transition::Release,
        }
    }

    pub fn wildcard(terminator: u16) -> Self {
        Matcher::Wildcard { terminator }
    }

    pub fn sequence(children: Vec<Matcher>) -> Self {
        Matcher::Sequence(children)
    }

    pub fn evaluate<'a>(&self, keys: &'a [KeyEvent]) -> MatchResult<'a> {
        match self {
            Matcher::Button { code, transition } => match_button(*code, *transition, keys),
            Matcher::Wildcard { terminator } => match_wildcard(*terminator, keys),
            Matcher::Sequence(children) => match_sequence(children, keys),
        }
    }
}

// While waiting for a press, anything that is not a press is skipped. While
// waiting for a release, other releases are skipped but a press rejects.
fn match_button(code: u16, transition: Transition, mut keys: &[KeyEvent]) -> MatchResult<'_> {
    loop {
        let Some((first, rest)) = keys.split_first() else {
            return MatchResult::partial(keys);
        };

        let same_transition = first.transition == transition;
        let same_code = first.code == code;

        match transition {
            Transition::Release => {
                if !same_transition {
                    return MatchResult::reject(keys);
                }
                if !same_code {
                    keys = rest;
                    continue;
                }
            }
            _ => {
                if !same_transition {
                    keys = rest;
                    continue;
                }
                if !same_code {
                    return MatchResult::reject(keys);
                }
            }
        }

        return MatchResult::accept(rest);
    }
}

fn match_wildcard(terminator: u16, keys: &[KeyEvent]) -> MatchResult<'_> {
    let mut run = Vec::new();

    for (n, key) in keys.iter().enumerate() {
        if !key.is_press() {
            continue;
        }
        if key.code == terminator {
            return MatchResult::accept(&keys[n + 1..]).with_captures(vec![run]);
        }
        run.push(*key);
    }

    MatchResult::partial(&keys[keys.len()..])
}

// Partial does not stop the loop: later children still run on whatever the
// partial child left, and the last executed child decides the outcome.
fn match_sequence<'a>(children: &[Matcher], keys: &'a [KeyEvent]) -> MatchResult<'a> {
    let mut state = MatchState::Accept;
    let mut keys = keys;
    let mut captures = Vec::new();

    for child in children {
        let result = child.evaluate(keys);
        state = result.state;
        keys = result.remainder;

        if state == MatchState::Reject {
            break;
        }
        captures.extend(result.captures);
    }

    MatchResult {
        state,
        remainder: keys,
        captures,
    }
}
