// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by a running query, read back by the caller once it has
//! pulled as many results as it wants.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    CandidatesExamined,
    MatchesYielded,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
