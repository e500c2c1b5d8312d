use regfsm_macros::regex_fsm;

fn main() {
    let _ = regex_fsm!("*abc");
}
