use regfsm::{Fsm, StaticAutomaton};
use regfsm_macros::regex_fsm;

fn hex() -> &'static StaticAutomaton {
    regex_fsm!("[0-9a-fA-F]+")
}

fn main() {
    let hex = hex();
    assert!(hex.is_match("c0ffee"));
    assert!(!hex.is_match("coffee"));

    let not_lower = regex_fsm!("[^a-z]*");
    assert!(not_lower.is_match("ABC123"));
    assert!(!not_lower.is_match("abc"));
}
