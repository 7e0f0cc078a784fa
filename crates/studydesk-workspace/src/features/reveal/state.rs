use std::collections::VecDeque;

use crate::features::messages::Generation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId(pub u64);

/// One in-progress reveal.
#[derive(Debug)]
pub struct RevealRun {
    pub id: RevealId,
    pub generation: Generation,
    /// Index of the target turn in the message store.
    pub index: usize,
    pub(super) pending: VecDeque<char>,
}

impl RevealRun {
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

#[derive(Debug, Default)]
pub struct RevealState {
    next_id: u64,
    pub(super) active: Option<RevealRun>,
}

impl RevealState {
    pub fn is_revealing(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&RevealRun> {
        self.active.as_ref()
    }

    /// Drops the active run. Characters not yet revealed are discarded.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub(super) fn next_id(&mut self) -> RevealId {
        let id = RevealId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}
