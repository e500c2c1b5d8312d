use regfsm::{PatternError, PatternErrorKind, StateKind, compile};

fn error_kind(pattern: &str) -> PatternErrorKind {
    match compile(pattern) {
        Err(err) => err.kind(),
        Ok(automaton) => panic!("expected {:?} to fail, got {:?}", pattern, automaton),
    }
}

#[test]
fn repetition_without_operand_fails() {
    assert_eq!(error_kind("*abc"), PatternErrorKind::NothingToRepeat);
    assert_eq!(error_kind("+xyz"), PatternErrorKind::NothingToRepeat);
    assert_eq!(error_kind("*"), PatternErrorKind::NothingToRepeat);
}

#[test]
fn unclosed_class_fails() {
    assert_eq!(error_kind("[abc"), PatternErrorKind::UnterminatedClass);
    assert_eq!(error_kind("a[^"), PatternErrorKind::UnterminatedClass);
    assert_eq!(error_kind("["), PatternErrorKind::UnterminatedClass);
}

#[test]
fn unsupported_operators_fail() {
    for pattern in ["a|b", "(a)", "a?", "^a", "a$", "]", "\\d", "a b", "-"] {
        assert_eq!(
            error_kind(pattern),
            PatternErrorKind::InvalidToken,
            "pattern {:?}",
            pattern
        );
    }
}

#[test]
fn first_error_wins() {
    match compile("a|[b") {
        Err(PatternError::InvalidToken { offset, found }) => {
            assert_eq!(offset, 1);
            assert_eq!(found, '|');
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn error_messages_name_the_problem() {
    let err = compile("ab*+[").expect_err("unterminated class");
    assert_eq!(err.message(), "unterminated character class");
    assert_eq!(err.to_string(), "unterminated character class at offset 4");

    let err = compile("+").expect_err("nothing to repeat");
    assert_eq!(err.to_string(), "nothing to repeat at offset 0");

    let err = compile("a%").expect_err("invalid operation");
    assert_eq!(err.to_string(), "invalid operation '%' at offset 1");
}

#[test]
fn start_and_termination_bracket_the_graph() {
    let automaton = compile("a*4.+hi").expect("pattern compiles");
    let states = automaton.states();
    assert_eq!(states.len(), 7);
    assert_eq!(states[0].kind, StateKind::Start);
    assert_eq!(states[6].kind, StateKind::Termination);
    assert!(
        states[1..6]
            .iter()
            .all(|state| !matches!(state.kind, StateKind::Start | StateKind::Termination))
    );

    let graph = automaton.graph();
    // The start state is never the target of an edge.
    assert!(automaton.edges().iter().all(|id| *id != graph.start()));
}

#[test]
fn only_repetition_creates_cycles() {
    let automaton = compile("a*b+[xy]*.c").expect("pattern compiles");
    let graph = automaton.graph();
    for (index, _) in automaton.states().iter().enumerate() {
        let id = regfsm::StateId::new(index as u16);
        for target in graph.edges_of(id) {
            assert!(
                target.index() >= index,
                "edge {} -> {} points backwards",
                index,
                target.index()
            );
            if target.index() == index {
                assert!(automaton.states()[index].repeat.is_repeatable());
            }
        }
    }
}
