use crate::error::PatternError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Button(String),
    Wildcard,
    Sequence(Vec<Node>),
}

// sequence := literal sequence | literal
// literal  := button | wildcard
// button   := [0-9a-zA-Z] | "<" [0-9a-zA-Z_]* ">"
// wildcard := "*"

/// Parses as many literals as possible from the front of `text`.
///
/// Returns the tree together with the text that was not consumed. When not
/// even one literal can be read, no tree is returned and the whole input is
/// handed back.
pub fn parse(text: &str) -> (Option<Node>, &str) {
    match parse_sequence(text) {
        Some((items, rest)) => (Some(Node::Sequence(items)), rest),
        None => (None, text),
    }
}

/// Parses a complete pattern; any leftover text is an error.
pub fn parse_pattern(text: &str) -> Result<Node, PatternError> {
    match parse(text) {
        (Some(node), "") => Ok(node),
        _ => Err(PatternError::InvalidPattern(text.to_string())),
    }
}

fn parse_sequence(text: &str) -> Option<(Vec<Node>, &str)> {
    let (first, mut rest) = parse_literal(text)?;
    let mut items = vec![first];

    while let Some((literal, next)) = parse_literal(rest) {
        items.push(literal);
        rest = next;
    }

    Some((items, rest))
}

fn parse_literal(text: &str) -> Option<(Node, &str)> {
    parse_button(text).or_else(|| parse_wildcard(text))
}

fn parse_button(text: &str) -> Option<(Node, &str)> {
    let first = text.chars().next()?;

    if first.is_ascii_alphanumeric() {
        return Some((Node::Button(first.to_string()), &text[1..]));
    }

    let inner = text.strip_prefix('<')?;
    let name_len = inner
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(inner.len());
    let (name, rest) = inner.split_at(name_len);
    let rest = rest.strip_prefix('>')?;

    Some((Node::Button(name.to_string()), rest))
}

fn parse_wildcard(text: &str) -> Option<(Node, &str)> {
    text.strip_prefix('*').map(|rest| (Node::Wildcard, rest))
}
