use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Set of state indices, sized to the automaton it tracks.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Bitset {
    data: Vec<bool>,
    len: usize,
}

impl Bitset {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            data: vec![false; size],
            len: 0,
        }
    }

    /// Returns `true` if `bit` was not already present.
    pub(crate) fn insert(&mut self, bit: usize) -> bool {
        match self.data.get_mut(bit) {
            Some(slot) if !*slot => {
                *slot = true;
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn clear(&mut self) {
        self.data.iter_mut().for_each(|flag| *flag = false);
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, flag)| **flag)
            .map(|(idx, _)| idx)
    }
}

impl fmt::Debug for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
