use crate::compiler::compile;
use crate::error::PatternError;
use crate::matcher::Matcher;
use crate::parser::parse_pattern;
use crate::translator::Translator;
use crate::types::{KeyEvent, MatchState};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Expression {
    pattern: String,
    matcher: Matcher,
    terminator: u16,
    translator: Arc<dyn Translator>,
}

impl Expression {
    pub fn new(
        pattern: &str,
        terminator: u16,
        translator: Arc<dyn Translator>,
    ) -> Result<Self, PatternError> {
        let node = parse_pattern(pattern)?;
        let matcher = compile(&node, terminator, translator.as_ref())?;

        Ok(Self {
            pattern: pattern.to_string(),
            matcher,
            terminator,
            translator,
        })
    }

    /// A lone wildcard ending on `reset_code`: accepts as soon as that key is
    /// pressed, whatever came before it.
    pub fn reset(reset_code: u16, translator: Arc<dyn Translator>) -> Self {
        Self {
            pattern: "*".to_string(),
            matcher: Matcher::wildcard(reset_code),
            terminator: reset_code,
            translator,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn terminator(&self) -> u16 {
        self.terminator
    }

    /// Runs the pattern over the whole buffer. Events left unconsumed turn
    /// the answer into a rejection.
    pub fn process(&self, keys: &[KeyEvent]) -> (MatchState, Vec<String>) {
        let result = self.matcher.evaluate(keys);

        let state = if result.remainder.is_empty() {
            result.state
        } else {
            MatchState::Reject
        };

        let captures = result
            .captures
            .iter()
            .map(|run| self.render(run))
            .collect();

        (state, captures)
    }

    fn render(&self, run: &[KeyEvent]) -> String {
        run.iter()
            .map(|key| {
                self.translator.render(key.code).unwrap_or_else(|| {
                    log::debug!("No text for code {} in pattern '{}'", key.code, self.pattern);
                    String::new()
                })
            })
            .collect()
    }
}
