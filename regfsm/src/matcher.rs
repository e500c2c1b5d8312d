use crate::bitset::Bitset;
use regfsm_compiler::{Graph, StateId};

/// Result of feeding one symbol into a [`Matcher`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// At least one state accepted the symbol.
    Progress,
    /// No state can continue. The matcher stays rejected until
    /// [`Matcher::reset`]; `consumed` counts the symbols fed before this one.
    Reject { consumed: usize },
}

/// Subset simulation of an automaton, one symbol at a time.
///
/// The matcher only borrows the automaton, so any number of matchers can run
/// over the same compiled pattern, including from different threads.
pub struct Matcher<'a> {
    graph: Graph<'a>,
    current: Bitset,
    next: Bitset,
    consumed: usize,
    rejected: bool,
}

impl<'a> Matcher<'a> {
    pub fn new(graph: Graph<'a>) -> Self {
        let count = graph.state_count();
        let mut matcher = Self {
            graph,
            current: Bitset::new(count),
            next: Bitset::new(count),
            consumed: 0,
            rejected: false,
        };
        matcher.reset();
        matcher
    }

    pub fn reset(&mut self) {
        self.current.clear();
        self.next.clear();
        self.current.insert(self.graph.start().index());
        self.consumed = 0;
        self.rejected = false;
    }

    /// Number of symbols accepted so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of states reachable after the symbols fed so far.
    pub fn active_states(&self) -> usize {
        self.current.len()
    }

    pub fn advance(&mut self, symbol: char) -> Advance {
        if self.rejected {
            return Advance::Reject {
                consumed: self.consumed,
            };
        }

        self.next.clear();
        for index in self.current.iter() {
            for &target in self.graph.edges_of(StateId::new(index as u16)) {
                let accepts = self
                    .graph
                    .state(target)
                    .is_some_and(|state| self.graph.matches_symbol(&state.kind, symbol));
                if accepts {
                    self.next.insert(target.index());
                }
            }
        }

        if self.next.is_empty() {
            log::trace!(
                "rejected {:?} after {} symbols",
                symbol,
                self.consumed
            );
            self.rejected = true;
            self.current.clear();
            return Advance::Reject {
                consumed: self.consumed,
            };
        }

        core::mem::swap(&mut self.current, &mut self.next);
        self.consumed += 1;
        log::trace!(
            "consumed {:?}, {} active states",
            symbol,
            self.current.len()
        );
        Advance::Progress
    }

    /// Whether the symbols fed so far form a complete match.
    pub fn is_accepting(&self) -> bool {
        !self.rejected
            && self
                .current
                .iter()
                .any(|index| self.graph.reaches_termination(StateId::new(index as u16)))
    }
}

/// Run the whole of `input` through `graph`.
pub fn run(graph: Graph<'_>, input: &str) -> bool {
    let mut matcher = Matcher::new(graph);
    for symbol in input.chars() {
        if let Advance::Reject { .. } = matcher.advance(symbol) {
            return false;
        }
    }
    matcher.is_accepting()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regfsm_compiler::compile;

    #[test]
    fn advance_reports_progress_then_rejects() {
        let automaton = compile("ab").expect("pattern compiles");
        let mut matcher = Matcher::new(automaton.graph());
        assert_eq!(matcher.advance('a'), Advance::Progress);
        assert!(!matcher.is_accepting());
        assert_eq!(matcher.advance('b'), Advance::Progress);
        assert!(matcher.is_accepting());
        assert_eq!(matcher.advance('b'), Advance::Reject { consumed: 2 });
        assert!(!matcher.is_accepting());
        assert_eq!(matcher.advance('a'), Advance::Reject { consumed: 2 });
    }

    #[test]
    fn reset_restores_the_start_state() {
        let automaton = compile("a+").expect("pattern compiles");
        let mut matcher = Matcher::new(automaton.graph());
        assert_eq!(matcher.advance('b'), Advance::Reject { consumed: 0 });
        matcher.reset();
        assert_eq!(matcher.consumed(), 0);
        assert_eq!(matcher.advance('a'), Advance::Progress);
        assert!(matcher.is_accepting());
    }

    #[test]
    fn frontier_is_deduplicated() {
        // 'a'* and '.' both accept 'a'; the star state stays a single entry.
        let automaton = compile("a*.").expect("pattern compiles");
        let mut matcher = Matcher::new(automaton.graph());
        for _ in 0..4 {
            assert_eq!(matcher.advance('a'), Advance::Progress);
            assert_eq!(matcher.active_states(), 2);
        }
        assert!(matcher.is_accepting());
    }

    #[test]
    fn empty_input_depends_on_start_edges() {
        assert!(run(compile("").expect("compiles").graph(), ""));
        assert!(run(compile("a*").expect("compiles").graph(), ""));
        assert!(!run(compile("a").expect("compiles").graph(), ""));
        assert!(!run(compile("a+").expect("compiles").graph(), ""));
    }
}
