//! Bounded, most-recent-first log of mutation summaries.
//!
//! One global sequence across all boards, capped so a long-running process
//! cannot grow it without bound. Best-effort diagnostics, not an audit
//! trail; callers serialize appends behind a single lock.

use std::collections::VecDeque;

use syncboard_domain::{ActivityEntry, BoardId, UserId};

pub const DEFAULT_ACTIVITY_CAPACITY: usize = 100;

pub struct ActivityTrail {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl Default for ActivityTrail {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_CAPACITY)
    }
}

impl ActivityTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Insert at the head; evict from the tail past capacity.
    pub fn append(&mut self, board_id: BoardId, user_id: UserId, message: String) -> ActivityEntry {
        let entry = ActivityEntry::new(board_id, user_id, message);
        self.entries.push_front(entry.clone());
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
        entry
    }

    /// One board's entries, most recent first. No per-board cap.
    pub fn for_board(&self, board_id: BoardId) -> Vec<ActivityEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.board_id == board_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
