// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The closed catalog of number properties.
//!
//! Every property the engine can test is a variant of [`Property`]. The
//! declaration order is the catalog order: property tables, one-line
//! summaries and set iteration all follow it.
//!
//! # Examples
//!
//! ```
//! use amazing_numbers::catalog::{lookup, Property};
//!
//! assert_eq!(lookup("even"), Some(Property::Even));
//! assert_eq!(lookup("Palindromic"), Some(Property::Palindromic));
//! assert_eq!(lookup("prime"), None);
//! assert_eq!(Property::Sunny.to_string(), "SUNNY");
//! ```

pub mod property_set;

pub use property_set::PropertySet;

use std::str::FromStr;
use strum::EnumCount;
use strum_macros::{AsRefStr, Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// A boolean classification of an integer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumCountMacro,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[repr(u8)]
pub enum Property {
    Even,
    Odd,
    Buzz,
    Duck,
    Palindromic,
    Gapful,
    Spy,
    Square,
    Sunny,
    Jumping,
    Happy,
    Sad,
}

/// All properties in catalog order.
pub const ALL: [Property; Property::COUNT] = [
    Property::Even,
    Property::Odd,
    Property::Buzz,
    Property::Duck,
    Property::Palindromic,
    Property::Gapful,
    Property::Spy,
    Property::Square,
    Property::Sunny,
    Property::Jumping,
    Property::Happy,
    Property::Sad,
];

/// Pairs of properties that no integer can hold together.
///
/// Requiring both members of a pair, or excluding both, describes an empty
/// set of numbers.
pub const MUTUALLY_EXCLUSIVE: [(Property, Property); 4] = [
    (Property::Even, Property::Odd),
    (Property::Duck, Property::Spy),
    (Property::Sunny, Property::Square),
    (Property::Happy, Property::Sad),
];

impl Property {
    /// Position of the property in catalog order.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Resolve a property name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<Property> {
    Property::from_str(name).ok()
}
