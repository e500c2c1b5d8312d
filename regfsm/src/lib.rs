#![no_std]
#![forbid(unsafe_code)]
#![doc = "Regfsm: a small NFA-backed pattern matcher with `.`, `*`, `+` and `[...]` classes."]

extern crate alloc;

mod bitset;
mod matcher;
mod packed;

pub use matcher::{Advance, Matcher};
pub use packed::StaticAutomaton;
pub use regfsm_compiler::{
    Automaton, CharRange, Graph, PatternError, PatternErrorKind, Repetition, Span, State,
    StateId, StateKind, compile,
};

/// Anything that can hand out a [`Graph`] to simulate.
pub trait Fsm {
    fn graph(&self) -> Graph<'_>;

    /// Does the whole of `input` match?
    fn is_match(&self, input: &str) -> bool {
        matcher::run(self.graph(), input)
    }

    /// Streaming matcher positioned at the start state.
    fn matcher(&self) -> Matcher<'_> {
        Matcher::new(self.graph())
    }
}

impl Fsm for Automaton {
    fn graph(&self) -> Graph<'_> {
        Automaton::graph(self)
    }
}

impl Fsm for StaticAutomaton {
    fn graph(&self) -> Graph<'_> {
        StaticAutomaton::graph(self)
    }
}

impl<F: Fsm + ?Sized> Fsm for &F {
    fn graph(&self) -> Graph<'_> {
        (**self).graph()
    }
}

/// Test `input` against a compiled automaton.
///
/// Matching never fails and never mutates the automaton.
pub fn matches<F: Fsm + ?Sized>(automaton: &F, input: &str) -> bool {
    automaton.is_match(input)
}

pub mod prelude {
    pub use crate::matcher::{Advance, Matcher};
    pub use crate::packed::StaticAutomaton;
    pub use crate::{Fsm, matches};
    pub use regfsm_compiler::{Automaton, PatternError, PatternErrorKind, compile};
}
