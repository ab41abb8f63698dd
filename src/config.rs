// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tunable limits of the property engine.
//!
//! The defaults reproduce the classic behaviour. The binary lets both happy
//! number limits be overridden from the command line or the environment.

/// Maximum number of digit-square steps taken before a number is declared sad.
///
/// Every known happy-number orbit reaches 1 or re-enters a cycle within a few
/// dozen steps; the budget is an implementation-defined cap, not a proven bound.
pub const DEFAULT_HAPPY_STEP_BUDGET: usize = 500;

/// Initial capacity of the set of values already visited by a happy-number orbit.
pub const DEFAULT_HAPPY_SEEN_CAPACITY: usize = 100;

/// Largest step budget the binary accepts.
pub const MAX_HAPPY_STEP_BUDGET: usize = 10_000;

/// Largest seen-set capacity the binary accepts.
pub const MAX_HAPPY_SEEN_CAPACITY: usize = 10_000;

/// Limits applied when iterating the happy-number map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HappyLimits {
    /// Steps allowed before giving up and reporting "not happy".
    pub step_budget: usize,
    /// Preallocated size of the visited-values set, never more than the step
    /// budget. It grows past this when needed.
    pub seen_capacity: usize,
}

impl Default for HappyLimits {
    fn default() -> Self {
        Self {
            step_budget: DEFAULT_HAPPY_STEP_BUDGET,
            seen_capacity: DEFAULT_HAPPY_SEEN_CAPACITY,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub happy: HappyLimits,
}

impl Config {
    pub fn new(happy: HappyLimits) -> Self {
        Self { happy }
    }
}
