use crate::state::{CharRange, Span, State, StateId, StateKind};
use core::fmt;

/// Borrowed view over an automaton's flat tables.
///
/// State `0` is the start state and the last state is the termination state.
/// Both the runtime-built [`crate::Automaton`] and build-time emitted tables
/// hand out this view, so the matcher only ever deals with one shape.
#[derive(Copy, Clone)]
pub struct Graph<'a> {
    states: &'a [State],
    edges: &'a [StateId],
    members: &'a [StateKind],
    ranges: &'a [CharRange],
}

impl<'a> Graph<'a> {
    pub const fn new(
        states: &'a [State],
        edges: &'a [StateId],
        members: &'a [StateKind],
        ranges: &'a [CharRange],
    ) -> Self {
        Self {
            states,
            edges,
            members,
            ranges,
        }
    }

    pub const fn start(&self) -> StateId {
        StateId::new(0)
    }

    pub const fn termination(&self) -> StateId {
        StateId::new(self.states.len().saturating_sub(1) as u16)
    }

    pub const fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> &'a [State] {
        self.states
    }

    pub fn state(&self, id: StateId) -> Option<&'a State> {
        self.states.get(id.index())
    }

    pub fn edges_of(&self, id: StateId) -> &'a [StateId] {
        match self.state(id) {
            Some(state) => state.edges.slice(self.edges),
            None => &[],
        }
    }

    /// Whether `id` has an edge straight into the termination state.
    pub fn reaches_termination(&self, id: StateId) -> bool {
        let termination = self.termination();
        self.edges_of(id).contains(&termination)
    }

    pub fn members(&self, span: Span) -> &'a [StateKind] {
        span.slice(self.members)
    }

    pub fn ranges(&self, span: Span) -> &'a [CharRange] {
        span.slice(self.ranges)
    }

    /// Does `kind` accept `symbol`?
    pub fn matches_symbol(&self, kind: &StateKind, symbol: char) -> bool {
        match kind {
            StateKind::Start | StateKind::Termination => false,
            StateKind::Literal(ch) => *ch == symbol,
            StateKind::Wildcard => true,
            StateKind::Range { ranges, negated } => {
                self.ranges(*ranges).iter().any(|range| range.contains(symbol)) != *negated
            }
            StateKind::Class { members, negated } => {
                self.members(*members)
                    .iter()
                    .any(|member| self.matches_symbol(member, symbol))
                    != *negated
            }
        }
    }

    fn fmt_kind(&self, kind: &StateKind, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match kind {
            StateKind::Start => f.write_str("start"),
            StateKind::Termination => f.write_str("accept"),
            StateKind::Literal(ch) => write!(f, "{:?}", ch),
            StateKind::Wildcard => f.write_str("any"),
            StateKind::Range { ranges, negated } => {
                f.write_str(if *negated { "range[^" } else { "range[" })?;
                for (i, range) in self.ranges(*ranges).iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}", range)?;
                }
                f.write_str("]")
            }
            StateKind::Class { members, negated } => {
                f.write_str(if *negated { "class[^" } else { "class[" })?;
                for (i, member) in self.members(*members).iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    match member {
                        // A single-range member reads better inline.
                        StateKind::Range {
                            ranges,
                            negated: false,
                        } if ranges.len == 1 => {
                            for range in self.ranges(*ranges) {
                                write!(f, "{:?}", range)?;
                            }
                        }
                        other => self.fmt_kind(other, f)?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Debug for Graph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, state) in self.states.iter().enumerate() {
            write!(f, "{}: ", index)?;
            self.fmt_kind(&state.kind, f)?;
            f.write_str(state.repeat.marker())?;
            f.write_str(" -> [")?;
            for (i, target) in state.edges.slice(self.edges).iter().enumerate() {
                if i != 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", target.raw())?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}", self.start, self.end)
    }
}
