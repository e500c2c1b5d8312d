use regfsm_compiler::{CharRange, Graph, State, StateId, StateKind};
use core::fmt;

/// Automaton backed by `'static` tables.
///
/// This is what `regex_fsm!` expands to: the pattern is compiled while the
/// crate is built and the tables are embedded in the binary, so no work
/// happens at runtime before the first match.
#[derive(Copy, Clone)]
pub struct StaticAutomaton {
    states: &'static [State],
    edges: &'static [StateId],
    members: &'static [StateKind],
    ranges: &'static [CharRange],
}

impl StaticAutomaton {
    pub const fn from_parts(
        states: &'static [State],
        edges: &'static [StateId],
        members: &'static [StateKind],
        ranges: &'static [CharRange],
    ) -> Self {
        Self {
            states,
            edges,
            members,
            ranges,
        }
    }

    pub const fn graph(&self) -> Graph<'static> {
        Graph::new(self.states, self.edges, self.members, self.ranges)
    }
}

impl fmt::Debug for StaticAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.graph().fmt(f)
    }
}
