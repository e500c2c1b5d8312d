use crate::graph::Graph;
use crate::pattern::{Atom, ClassItem, ClassSpec, PatternError, Token, tokenize};
use crate::state::{CharRange, Repetition, Span, State, StateId, StateKind};
use alloc::vec::Vec;
use core::fmt;

/// Compiled pattern.
///
/// Owns the flat state, edge, class-member and range tables. There is no way
/// to mutate an automaton once [`compile`] has returned it.
#[derive(Clone, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<State>,
    edges: Vec<StateId>,
    members: Vec<StateKind>,
    ranges: Vec<CharRange>,
}

impl Automaton {
    pub fn graph(&self) -> Graph<'_> {
        Graph::new(&self.states, &self.edges, &self.members, &self.ranges)
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn edges(&self) -> &[StateId] {
        &self.edges
    }

    pub fn members(&self) -> &[StateKind] {
        &self.members
    }

    pub fn ranges(&self) -> &[CharRange] {
        &self.ranges
    }
}

impl fmt::Debug for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.graph().fmt(f)
    }
}

/// Compile `pattern` into an automaton.
///
/// Fails on the first malformed construct; nothing is built in that case.
pub fn compile(pattern: &str) -> Result<Automaton, PatternError> {
    let tokens = tokenize(pattern).inspect_err(|err| {
        log::debug!("rejected pattern {:?}: {}", pattern, err);
    })?;
    let automaton = build_automaton(&tokens)?;
    log::debug!(
        "compiled pattern {:?} into {} states and {} edges",
        pattern,
        automaton.states.len(),
        automaton.edges.len()
    );
    Ok(automaton)
}

/// Lay out `[start, tokens.., termination]` and wire the transitions.
pub fn build_automaton(tokens: &[Token]) -> Result<Automaton, PatternError> {
    // start + termination
    if tokens.len() + 2 > u16::MAX as usize {
        let offset = tokens
            .get(u16::MAX as usize - 2)
            .map(|token| token.offset)
            .unwrap_or_default();
        return Err(PatternError::TooManyStates { offset });
    }

    let mut builder = Builder::default();
    builder.push(StateKind::Start, Repetition::Once);
    for token in tokens {
        let kind = builder.emit_atom(&token.atom);
        builder.push(kind, token.repeat);
    }
    builder.push(StateKind::Termination, Repetition::Once);
    builder.wire();

    Ok(builder.finish())
}

#[derive(Default)]
struct Builder {
    kinds: Vec<StateKind>,
    repeats: Vec<Repetition>,
    members: Vec<StateKind>,
    ranges: Vec<CharRange>,
    successors: Vec<Vec<StateId>>,
}

impl Builder {
    fn push(&mut self, kind: StateKind, repeat: Repetition) {
        self.kinds.push(kind);
        self.repeats.push(repeat);
        self.successors.push(Vec::new());
    }

    fn emit_atom(&mut self, atom: &Atom) -> StateKind {
        match atom {
            Atom::Literal(ch) => StateKind::Literal(*ch),
            Atom::Wildcard => StateKind::Wildcard,
            Atom::Class(class) => self.emit_class(class),
        }
    }

    fn emit_class(&mut self, class: &ClassSpec) -> StateKind {
        let first = self.members.len() as u32;
        for item in &class.items {
            let member = match *item {
                ClassItem::Char(ch) => StateKind::Literal(ch),
                ClassItem::Range { start, end } => {
                    let ranges = Span::new(self.ranges.len() as u32, 1);
                    self.ranges.push(CharRange::new(start, end));
                    // Negation applies once, at the class level.
                    StateKind::Range {
                        ranges,
                        negated: false,
                    }
                }
            };
            self.members.push(member);
        }
        StateKind::Class {
            members: Span::new(first, class.items.len() as u32),
            negated: class.negated,
        }
    }

    /// For every slot after the start state: repeatable states loop on
    /// themselves, the previous state links to the slot, and a `*` slot is
    /// bypassed by one edge from the previous state to the slot after it.
    fn wire(&mut self) {
        for index in 1..self.kinds.len() {
            let prev = index - 1;
            if self.repeats[index].is_repeatable() {
                self.link(index, index);
            }
            self.link(prev, index);
            // Termination is never starred, so `index + 1` stays in bounds.
            if self.repeats[index] == Repetition::ZeroOrMore {
                self.link(prev, index + 1);
            }
        }
    }

    fn link(&mut self, from: usize, to: usize) {
        let target = StateId::new(to as u16);
        let successors = &mut self.successors[from];
        if !successors.contains(&target) {
            successors.push(target);
        }
    }

    fn finish(self) -> Automaton {
        let mut states = Vec::with_capacity(self.kinds.len());
        let mut edges = Vec::new();
        for ((kind, repeat), successors) in self
            .kinds
            .into_iter()
            .zip(self.repeats)
            .zip(self.successors)
        {
            let span = Span::new(edges.len() as u32, successors.len() as u32);
            edges.extend(successors);
            states.push(State::new(kind, repeat, span));
        }
        Automaton {
            states,
            edges,
            members: self.members,
            ranges: self.ranges,
        }
    }
}
