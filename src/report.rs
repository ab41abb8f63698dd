// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text rendering of results and validation errors.

use crate::catalog::{Property, PropertySet};
use crate::query::QueryResult;
use crate::request::{Mode, ValidationError};

pub const WELCOME: &str = "Welcome to Amazing Numbers!\n";

pub const INSTRUCTIONS: &str = "Supported requests:
- enter a natural number to know its properties;
- enter two natural numbers to obtain the properties of the list:
  * the first parameter represents a starting number;
  * the second parameter shows how many consecutive numbers are to be printed;
- two natural numbers and properties to search for;
- a property preceded by minus must not be present in numbers;
- separate the parameters with one space;
- enter 0 to exit.";

pub const PROMPT: &str = "Enter a request:";

pub const GOODBYE: &str = "Goodbye!";

fn label(property: Property) -> String {
    property.as_ref().to_lowercase()
}

/// The full property table of one number.
///
/// ```text
/// Properties of 1
/// even: false
/// odd: true
/// ...
/// ```
pub fn property_list(result: &QueryResult) -> String {
    let mut text = format!("Properties of {}", result.number());
    for (property, holds) in result.table() {
        text.push_str(&format!("\n{}: {}", label(property), holds));
    }
    text
}

/// One line naming the properties a number has, e.g. `100 is even, duck, gapful`.
pub fn one_liner(result: &QueryResult) -> String {
    let names: Vec<String> = result.satisfied().iter().map(label).collect();
    format!("{} is {}", result.number(), names.join(", "))
}

/// Render a result the way its query mode asks for.
pub fn render(result: &QueryResult, mode: Mode) -> String {
    match mode {
        Mode::Single => property_list(result),
        Mode::Filtered => one_liner(result),
        Mode::Exit => unreachable!("exit requests yield no results"),
    }
}

/// The message shown to the user for a validation error.
pub fn error_message(error: &ValidationError) -> String {
    match error {
        ValidationError::NonNaturalStart => {
            "The first parameter should be a natural number or zero.".to_string()
        }
        ValidationError::NonNaturalCount => {
            "The second parameter should be a natural number.".to_string()
        }
        ValidationError::UnknownPropertyNames(names) => {
            let (noun, verb) = if names.len() == 1 {
                ("property", "is")
            } else {
                ("properties", "are")
            };
            format!(
                "The {} [{}] {} wrong.\nAvailable properties: {}",
                noun,
                names.join(", "),
                verb,
                PropertySet::full()
            )
        }
        ValidationError::MutuallyExclusive(conflict) => format!(
            "The request contains mutually exclusive properties: {}\n\
             There are no numbers with these properties.",
            conflict
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Classifier;
    use crate::request::Conflict;

    fn result(number: i64) -> QueryResult {
        QueryResult::classify(&Classifier::default(), number)
    }

    #[test]
    fn test_property_list() {
        let expected = "Properties of 1\n\
                        even: false\n\
                        odd: true\n\
                        buzz: false\n\
                        duck: false\n\
                        palindromic: true\n\
                        gapful: false\n\
                        spy: true\n\
                        square: true\n\
                        sunny: false\n\
                        jumping: true\n\
                        happy: true\n\
                        sad: false";
        assert_eq!(property_list(&result(1)), expected);
    }

    #[test]
    fn test_one_liner() {
        assert_eq!(one_liner(&result(100)), "100 is even, duck, gapful, square, happy");
        assert_eq!(
            one_liner(&result(101)),
            "101 is odd, duck, palindromic, jumping, sad"
        );
    }

    #[test]
    fn test_render_by_mode() {
        assert!(render(&result(7), Mode::Single).starts_with("Properties of 7\n"));
        assert!(render(&result(7), Mode::Filtered).starts_with("7 is odd, buzz"));
    }

    #[test]
    #[should_panic(expected = "exit requests yield no results")]
    fn test_render_exit_is_unreachable() {
        render(&result(7), Mode::Exit);
    }

    #[test]
    fn test_unknown_property_messages() {
        let single = ValidationError::UnknownPropertyNames(vec!["FOO".to_string()]);
        assert_eq!(
            error_message(&single),
            "The property [FOO] is wrong.\nAvailable properties: \
             [EVEN, ODD, BUZZ, DUCK, PALINDROMIC, GAPFUL, SPY, SQUARE, SUNNY, JUMPING, HAPPY, SAD]"
        );

        let several =
            ValidationError::UnknownPropertyNames(vec!["FOO".to_string(), "BAR".to_string()]);
        assert!(error_message(&several).starts_with("The properties [FOO, BAR] are wrong.\n"));
    }

    #[test]
    fn test_exclusive_message() {
        let error = ValidationError::MutuallyExclusive(Conflict::Pair(Property::Even, Property::Odd));
        assert_eq!(
            error_message(&error),
            "The request contains mutually exclusive properties: [EVEN, ODD]\n\
             There are no numbers with these properties."
        );
    }

    #[test]
    fn test_number_messages() {
        assert_eq!(
            error_message(&ValidationError::NonNaturalStart),
            "The first parameter should be a natural number or zero."
        );
        assert_eq!(
            error_message(&ValidationError::NonNaturalCount),
            "The second parameter should be a natural number."
        );
    }
}
