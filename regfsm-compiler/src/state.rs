//! Automaton node model.
//!
//! All per-state data is plain `Copy` data so that an automaton can either be
//! built at runtime into owned tables or emitted as `static` tables by the
//! `regex_fsm!` macro. Variable-length data (outgoing edges, class members and
//! character ranges) lives in flat tables owned by the automaton; a state only
//! records a [`Span`] into the relevant table.

/// Index of a state inside an automaton's state table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u16);

impl StateId {
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Window `[first, first + len)` into one of the automaton's flat tables.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub first: u32,
    pub len: u32,
}

impl Span {
    pub const EMPTY: Span = Span::new(0, 0);

    pub const fn new(first: u32, len: u32) -> Self {
        Self { first, len }
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn slice<'a, T>(&self, table: &'a [T]) -> &'a [T] {
        let start = (self.first as usize).min(table.len());
        let end = start.saturating_add(self.len as usize).min(table.len());
        &table[start..end]
    }
}

/// Inclusive character range.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct CharRange {
    pub start: char,
    pub end: char,
}

impl CharRange {
    pub const fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    pub const fn contains(&self, symbol: char) -> bool {
        self.start as u32 <= symbol as u32 && symbol as u32 <= self.end as u32
    }
}

/// How many consecutive times a state's match test may be applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Repetition {
    #[default]
    Once,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl Repetition {
    pub const fn is_repeatable(self) -> bool {
        !matches!(self, Repetition::Once)
    }

    pub(crate) const fn marker(self) -> &'static str {
        match self {
            Repetition::Once => "",
            Repetition::ZeroOrMore => "*",
            Repetition::OneOrMore => "+",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StateKind {
    /// Entry point; never matches a symbol.
    Start,
    /// Accept marker. An edge *into* this state signals acceptance.
    Termination,
    Literal(char),
    Wildcard,
    /// Any of the ranges in `ranges`, XOR `negated`.
    Range { ranges: Span, negated: bool },
    /// Any of the sub-states in `members`, XOR `negated`. Members are
    /// `Literal`/`Range` kinds and are never linked into the graph.
    Class { members: Span, negated: bool },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub kind: StateKind,
    pub repeat: Repetition,
    pub edges: Span,
}

impl State {
    pub const fn new(kind: StateKind, repeat: Repetition, edges: Span) -> Self {
        Self {
            kind,
            repeat,
            edges,
        }
    }
}
