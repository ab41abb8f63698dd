// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PropertySet type for representing sets of properties as bitsets.
//!
//! Bit i is set when the property at catalog position i is in the set.
//!
//! # Examples
//!
//! ```
//! use amazing_numbers::catalog::{Property, PropertySet};
//!
//! let mut set = PropertySet::empty();
//! set.insert(Property::Odd);
//! set.insert(Property::Even);
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(format!("{}", set), "[EVEN, ODD]");
//! ```

use crate::catalog::{Property, ALL};
use std::fmt;
use strum::EnumCount;

/// A set of properties represented as a bitset.
///
/// Iteration always follows catalog order, whatever the insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PropertySet(u16);

impl PropertySet {
    /// Create an empty property set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a set containing every property in the catalog.
    pub const fn full() -> Self {
        Self((1 << Property::COUNT) - 1)
    }

    /// Create a property set from a slice of properties.
    pub fn from_properties(properties: &[Property]) -> Self {
        properties.iter().copied().collect()
    }

    pub fn contains(self, property: Property) -> bool {
        (self.0 >> property.index()) & 1 != 0
    }

    pub fn insert(&mut self, property: Property) {
        self.0 |= 1 << property.index();
    }

    /// Number of properties in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Properties present in both sets.
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// True if every property of `other` is also in `self`.
    pub fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Iterate over the properties in catalog order.
    pub fn iter(self) -> impl Iterator<Item = Property> {
        ALL.into_iter().filter(move |&property| self.contains(property))
    }
}

impl FromIterator<Property> for PropertySet {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        let mut set = Self::empty();
        for property in iter {
            set.insert(property);
        }
        set
    }
}

impl fmt::Display for PropertySet {
    /// Format a property set as "[EVEN, ODD]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, property) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", property)?;
        }
        write!(f, "]")
    }
}
