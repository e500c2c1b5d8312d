#![no_std]
#![forbid(unsafe_code)]
#![doc = "Pattern compiler shared by `regfsm` and `regfsm-macros`."]

extern crate alloc;

mod graph;
mod nfa;
mod pattern;
mod state;

pub use crate::graph::Graph;
pub use crate::nfa::{Automaton, build_automaton, compile};
pub use crate::pattern::{
    Atom, ClassItem, ClassSpec, PatternError, PatternErrorKind, Token, tokenize,
};
pub use crate::state::{CharRange, Repetition, Span, State, StateId, StateKind};
