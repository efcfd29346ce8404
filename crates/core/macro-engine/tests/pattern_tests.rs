mod fixtures;

use fixtures::*;
use macro_engine::{compile, parse, parse_pattern, KeyEvent, Matcher, MatchState, Transition};

fn all_events() -> Vec<KeyEvent> {
    let transitions = [Transition::Release, Transition::Press, Transition::Repeat];
    [KEY_ENTER, KEY_A, KEY_C, KEY_B]
        .iter()
        .flat_map(|&code| transitions.iter().map(move |&t| KeyEvent::new(code, t)))
        .collect()
}

fn permutations_of_three(events: &[KeyEvent]) -> Vec<Vec<KeyEvent>> {
    let mut keysets = Vec::new();
    for i in 0..events.len() {
        for j in 0..events.len() {
            for k in 0..events.len() {
                if i != j && j != k && i != k {
                    keysets.push(vec![events[i], events[j], events[k]]);
                }
            }
        }
    }
    keysets
}

mod tests {
    use super::*;

    #[test]
    fn test_compiled_patterns_agree_with_hand_built_matchers() {
        let cases = vec![
            ("a", Matcher::sequence(vec![Matcher::button(KEY_A)])),
            ("<Enter>", Matcher::sequence(vec![Matcher::button(KEY_ENTER)])),
            (
                "ab",
                Matcher::sequence(vec![Matcher::button(KEY_A), Matcher::button(KEY_B)]),
            ),
            (
                "a*b",
                Matcher::sequence(vec![
                    Matcher::button(KEY_A),
                    Matcher::wildcard(KEY_ENTER),
                    Matcher::button(KEY_B),
                ]),
            ),
        ];
        let keysets = permutations_of_three(&all_events());
        assert_eq!(keysets.len(), 12 * 11 * 10);

        for (text, expected) in cases {
            let node = parse_pattern(text).unwrap();
            let compiled = compile(&node, KEY_ENTER, keyboard().as_ref()).unwrap();

            for keys in &keysets {
                let actual = compiled.evaluate(keys);
                let wanted = expected.evaluate(keys);
                assert_eq!(actual.state, wanted.state, "{:?} over {:?}", text, keys);
                assert_eq!(actual.captures, wanted.captures, "{:?} over {:?}", text, keys);
            }
        }
    }

    #[test]
    fn test_single_button_sequence_behaves_like_the_button() {
        let single = Matcher::button(KEY_A);
        let wrapped = Matcher::sequence(vec![Matcher::button(KEY_A)]);

        for keys in permutations_of_three(&all_events()) {
            assert_eq!(single.evaluate(&keys), wrapped.evaluate(&keys));
        }
    }

    #[test]
    fn test_wildcard_never_rejects_any_keyset() {
        let wild = Matcher::wildcard(KEY_ENTER);

        for keys in permutations_of_three(&all_events()) {
            assert_ne!(wild.evaluate(&keys).state, MatchState::Reject, "{:?}", keys);
        }
    }

    #[test]
    fn test_remainder_is_always_a_suffix() {
        let matchers = [
            Matcher::button(KEY_A),
            Matcher::button_release(KEY_A),
            Matcher::wildcard(KEY_ENTER),
            Matcher::sequence(vec![Matcher::wildcard(KEY_ENTER), Matcher::button(KEY_B)]),
        ];

        for keys in permutations_of_three(&all_events()) {
            for matcher in &matchers {
                let remainder = matcher.evaluate(&keys).remainder;
                assert!(keys.ends_with(remainder), "{:?} over {:?}", matcher, keys);
            }
        }
    }

    #[test]
    fn test_reparsing_gives_identical_trees() {
        for text in ["a", "ab", "a*b", "<Enter>a", "***", "<F12>z9"] {
            assert_eq!(parse(text), parse(text));
            assert_eq!(parse_pattern(text).unwrap(), parse_pattern(text).unwrap());
        }
    }
}
