// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for request validation.

use crate::catalog::Property;
use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;
use thiserror::Error;

/// A pair of filters that no number can satisfy together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conflict {
    /// Both members of a mutually exclusive pair are included, or both excluded.
    Pair(Property, Property),

    /// The same property is both included and excluded.
    Negated(Property),
}

impl fmt::Display for Conflict {
    /// Format as "[EVEN, ODD]" or "[EVEN, -EVEN]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::Pair(a, b) => write!(f, "[{}, {}]", a, b),
            Conflict::Negated(property) => write!(f, "[{}, -{}]", property, property),
        }
    }
}

/// Problems found while validating a request.
///
/// Validation never stops at the first problem, so a request may carry
/// several of these.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro)]
pub enum ValidationError {
    /// The first token is missing, not an integer, or negative.
    #[error("starting number is not a natural number")]
    NonNaturalStart,

    /// The second token is not an integer, or not positive.
    #[error("count is not a natural number")]
    NonNaturalCount,

    /// Property names that are not in the catalog, in input order.
    #[error("unknown properties: {}", .0.join(", "))]
    UnknownPropertyNames(Vec<String>),

    /// Filters that exclude every number.
    #[error("mutually exclusive properties: {0}")]
    MutuallyExclusive(Conflict),
}
