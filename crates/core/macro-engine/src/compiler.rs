use crate::error::PatternError;
use crate::matcher::Matcher;
use crate::parser::Node;
use crate::translator::Translator;

/// Lowers a parsed pattern into a matcher. Every button name is resolved
/// here, so an unknown name fails before any event is seen.
pub fn compile(
    node: &Node,
    terminator: u16,
    translator: &dyn Translator,
) -> Result<Matcher, PatternError> {
    match node {
        Node::Button(name) => translator
            .resolve(name)
            .map(Matcher::button)
            .ok_or_else(|| PatternError::UnknownSymbol(name.clone())),
        Node::Wildcard => Ok(Matcher::wildcard(terminator)),
        Node::Sequence(items) => items
            .iter()
            .map(|item| compile(item, terminator, translator))
            .collect::<Result<Vec<_>, _>>()
            .map(Matcher::sequence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_pattern;
    use crate::translator::EvdevTranslator;

    fn compile_text(text: &str) -> Result<Matcher, PatternError> {
        let node = parse_pattern(text)?;
        compile(&node, 28, &EvdevTranslator::keyboard())
    }

    #[test]
    fn test_compile_buttons_and_wildcard() {
        assert_eq!(
            compile_text("a*b").unwrap(),
            Matcher::sequence(vec![
                Matcher::button(30),
                Matcher::wildcard(28),
                Matcher::button(48),
            ])
        );
        assert_eq!(
            compile_text("<Enter>").unwrap(),
            Matcher::sequence(vec![Matcher::button(28)])
        );
    }

    #[test]
    fn test_unknown_name_fails_at_compile_time() {
        assert_eq!(
            compile_text("a<NoSuchKey>"),
            Err(PatternError::UnknownSymbol("NoSuchKey".to_string()))
        );
        assert_eq!(
            compile_text("<>"),
            Err(PatternError::UnknownSymbol(String::new()))
        );
    }

    #[test]
    fn test_pointer_namespace() {
        let node = parse_pattern("<left><right>").unwrap();
        let matcher = compile(&node, 0, &EvdevTranslator::pointer()).unwrap();

        assert_eq!(
            matcher,
            Matcher::sequence(vec![Matcher::button(272), Matcher::button(273)])
        );
    }
}
