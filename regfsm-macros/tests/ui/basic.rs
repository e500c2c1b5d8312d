use regfsm::Fsm;
use regfsm_macros::regex_fsm;

fn main() {
    let automaton = regex_fsm!("a*4.+hi");
    assert!(automaton.is_match("aaaaaa4uhi"));
    assert!(automaton.is_match("4uhi"));
    assert!(!automaton.is_match("meow"));

    let empty = regex_fsm!("");
    assert!(empty.is_match(""));
    assert!(!empty.is_match("x"));
}
