// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property evaluation engine.
//!
//! The engine maps an integer to a boolean for each property of the
//! [catalog](crate::catalog). Dispatch goes through a closed table from
//! [`Property`] to a test function; the only state the engine carries is its
//! [`Config`], which bounds the happy-number iteration.
//!
//! # Example
//!
//! ```
//! use amazing_numbers::catalog::{Property, PropertySet};
//! use amazing_numbers::engine::Classifier;
//!
//! let classifier = Classifier::default();
//! assert!(classifier.evaluate(7, Property::Buzz));
//!
//! let included = PropertySet::from_properties(&[Property::Odd, Property::Happy]);
//! let excluded = PropertySet::from_properties(&[Property::Square]);
//! assert!(classifier.evaluate_all(7, included, excluded));
//! assert!(!classifier.evaluate_all(1, included, excluded));
//! ```

pub mod digits;
pub mod properties;

use crate::catalog::{Property, PropertySet, ALL};
use crate::config::Config;
use strum::EnumCount;

/// A property test, given the classifier it runs under.
type PropertyTest = fn(&Classifier, i64) -> bool;

/// The test implementing each property.
fn test_for(property: Property) -> PropertyTest {
    match property {
        Property::Even => |_, value| properties::is_even(value),
        Property::Odd => |_, value| properties::is_odd(value),
        Property::Buzz => |_, value| properties::is_buzz(value),
        Property::Duck => |_, value| properties::is_duck(value),
        Property::Palindromic => |_, value| properties::is_palindromic(value),
        Property::Gapful => |_, value| properties::is_gapful(value),
        Property::Spy => |_, value| properties::is_spy(value),
        Property::Square => |_, value| properties::is_perfect_square(value),
        Property::Sunny => |_, value| properties::is_sunny(value),
        Property::Jumping => |_, value| properties::is_jumping(value),
        Property::Happy => |classifier, value| properties::is_happy(value, &classifier.config.happy),
        Property::Sad => |classifier, value| properties::is_sad(value, &classifier.config.happy),
    }
}

/// Evaluates properties of integers under a fixed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    config: Config,
}

impl Classifier {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Whether `value` has `property`.
    pub fn evaluate(&self, value: i64, property: Property) -> bool {
        test_for(property)(self, value)
    }

    /// True iff every included property holds and no excluded one does.
    ///
    /// Stops at the first failing test; included properties are checked
    /// before excluded ones, each in catalog order.
    pub fn evaluate_all(&self, value: i64, included: PropertySet, excluded: PropertySet) -> bool {
        included.iter().all(|property| self.evaluate(value, property))
            && !excluded.iter().any(|property| self.evaluate(value, property))
    }

    /// Every property paired with its value, in catalog order.
    pub fn all_values(&self, value: i64) -> [(Property, bool); Property::COUNT] {
        ALL.map(|property| (property, self.evaluate(value, property)))
    }

    /// The set of properties `value` has.
    pub fn satisfied(&self, value: i64) -> PropertySet {
        ALL.into_iter()
            .filter(|&property| self.evaluate(value, property))
            .collect()
    }
}

/// [`Classifier::evaluate`] under the default configuration.
pub fn evaluate(value: i64, property: Property) -> bool {
    Classifier::default().evaluate(value, property)
}

/// [`Classifier::evaluate_all`] under the default configuration.
pub fn evaluate_all(value: i64, included: PropertySet, excluded: PropertySet) -> bool {
    Classifier::default().evaluate_all(value, included, excluded)
}

/// [`Classifier::all_values`] under the default configuration.
pub fn all_values(value: i64) -> [(Property, bool); Property::COUNT] {
    Classifier::default().all_values(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HappyLimits;

    #[test]
    fn test_all_values_of_one() {
        let expected = [
            (Property::Even, false),
            (Property::Odd, true),
            (Property::Buzz, false),
            (Property::Duck, false),
            (Property::Palindromic, true),
            (Property::Gapful, false),
            (Property::Spy, true),
            (Property::Square, true),
            (Property::Sunny, false),
            (Property::Jumping, true),
            (Property::Happy, true),
            (Property::Sad, false),
        ];
        assert_eq!(all_values(1), expected);
    }

    #[test]
    fn test_dispatch_reaches_each_property() {
        // 100: even, duck, gapful, square, happy
        let satisfied = Classifier::default().satisfied(100);
        assert_eq!(
            satisfied,
            PropertySet::from_properties(&[
                Property::Even,
                Property::Duck,
                Property::Gapful,
                Property::Square,
                Property::Happy,
            ])
        );
        assert!(evaluate(17, Property::Buzz));
        assert!(evaluate(1124, Property::Spy));
        assert!(evaluate(8, Property::Sunny));
        assert!(evaluate(3456, Property::Jumping));
        assert!(evaluate(4, Property::Sad));
    }

    #[test]
    fn test_oversized_seen_capacity_is_usable() {
        let classifier = Classifier::new(Config::new(HappyLimits {
            step_budget: 500,
            seen_capacity: usize::MAX,
        }));
        assert!(classifier.evaluate(7, Property::Happy));
        assert!(classifier.evaluate(2, Property::Sad));
    }

    #[test]
    fn test_evaluate_all_with_empty_filters() {
        assert!(evaluate_all(42, PropertySet::empty(), PropertySet::empty()));
    }

    #[test]
    fn test_evaluate_all_applies_exclusions() {
        let included = PropertySet::from_properties(&[Property::Even]);
        let excluded = PropertySet::from_properties(&[Property::Square]);
        assert!(evaluate_all(2, included, excluded));
        assert!(!evaluate_all(4, included, excluded));
        assert!(!evaluate_all(3, included, excluded));
    }

    #[test]
    fn test_classifier_uses_its_happy_limits() {
        let classifier = Classifier::new(Config::new(HappyLimits {
            step_budget: 1,
            seen_capacity: 1,
        }));
        // 19 -> 82 -> 68 -> 100 -> 1
        assert!(!classifier.evaluate(19, Property::Happy));
        assert!(classifier.evaluate(19, Property::Sad));
        assert!(Classifier::default().evaluate(19, Property::Happy));
    }
}
