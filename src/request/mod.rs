// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parsing and validation of request lines.
//!
//! A request line is a sequence of whitespace-separated tokens:
//!
//! ```text
//! <start> [<count> [[-]<property> ...]]
//! ```
//!
//! - `start` is the first number to classify; `0` ends the session.
//! - `count` switches to filtered mode: report the first `count` numbers from
//!   `start` that pass the filters. Without it, the full property table of
//!   `start` is reported.
//! - Each property token is required; a leading `-` excludes it instead.
//!
//! Parsing never fails. Problems are found by [`validate`], which reports all
//! of them in one pass, and [`Request::into_query`] turns an error-free request
//! into a [`Query`].
//!
//! # Example
//!
//! ```
//! use amazing_numbers::request::{parse, validate, Mode, ValidationError};
//!
//! let request = parse("1 10 even -square");
//! assert_eq!(request.mode(), Mode::Filtered);
//! assert!(validate(&request).is_empty());
//!
//! let request = parse("1 1 foo -bar");
//! assert_eq!(
//!     validate(&request),
//!     vec![ValidationError::UnknownPropertyNames(vec!["FOO".into(), "BAR".into()])]
//! );
//! ```

pub mod errors;

pub use errors::{Conflict, ValidationError};

use crate::catalog::{self, PropertySet, MUTUALLY_EXCLUSIVE};
use tracing::debug;

/// Prefix marking a property as excluded.
pub const EXCLUDE_MARKER: char = '-';

/// Starting number that ends the session.
pub const EXIT_VALUE: i64 = 0;

/// What a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// End the session.
    Exit,

    /// The full property table of one number.
    Single,

    /// The first `count` numbers from the start that pass the filters.
    Filtered,
}

/// One parsed request line, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// `None` when the token is missing or not an integer.
    starting_number: Option<i64>,
    /// `None` when the token is not an integer.
    count: Option<i64>,
    mode: Mode,
    included: PropertySet,
    excluded: PropertySet,
    unknown_names: Vec<String>,
}

/// A validated request, ready to run.
///
/// `starting_number` and `count` are natural numbers (except for [`Mode::Exit`])
/// and the filters are satisfiable as far as the exclusion table can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    starting_number: i64,
    count: i64,
    mode: Mode,
    included: PropertySet,
    excluded: PropertySet,
}

fn is_natural(value: i64) -> bool {
    value > 0
}

impl Request {
    fn exit() -> Self {
        Self {
            starting_number: Some(EXIT_VALUE),
            count: Some(0),
            mode: Mode::Exit,
            included: PropertySet::empty(),
            excluded: PropertySet::empty(),
            unknown_names: Vec::new(),
        }
    }

    pub fn starting_number(&self) -> Option<i64> {
        self.starting_number
    }

    pub fn count(&self) -> Option<i64> {
        self.count
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_exit(&self) -> bool {
        self.mode == Mode::Exit
    }

    pub fn included(&self) -> PropertySet {
        self.included
    }

    pub fn excluded(&self) -> PropertySet {
        self.excluded
    }

    /// Property names not found in the catalog, upper-cased, in input order.
    pub fn unknown_names(&self) -> &[String] {
        &self.unknown_names
    }

    /// Validate the request, returning the runnable query or every error found.
    pub fn into_query(self) -> Result<Query, Vec<ValidationError>> {
        let errors = validate(&self);
        match (self.starting_number, self.count) {
            (Some(starting_number), Some(count)) if errors.is_empty() => Ok(Query {
                starting_number,
                count,
                mode: self.mode,
                included: self.included,
                excluded: self.excluded,
            }),
            _ => Err(errors),
        }
    }
}

impl Query {
    pub fn starting_number(&self) -> i64 {
        self.starting_number
    }

    /// Number of results the query yields at most.
    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn included(&self) -> PropertySet {
        self.included
    }

    pub fn excluded(&self) -> PropertySet {
        self.excluded
    }
}

/// Parse one request line.
///
/// Property names are matched without regard to case; unknown names are kept
/// upper-cased for reporting.
pub fn parse(line: &str) -> Request {
    let line = line.to_uppercase();
    let mut tokens = line.split_whitespace();

    let starting_number = tokens.next().and_then(|token| token.parse::<i64>().ok());
    if starting_number == Some(EXIT_VALUE) {
        debug!("exit requested");
        return Request::exit();
    }

    let (count, mode) = match tokens.next() {
        None => (Some(1), Mode::Single),
        Some(token) => (token.parse::<i64>().ok(), Mode::Filtered),
    };

    let mut included = PropertySet::empty();
    let mut excluded = PropertySet::empty();
    let mut unknown_names = Vec::new();
    for token in tokens {
        let (name, filter) = match token.strip_prefix(EXCLUDE_MARKER) {
            Some(name) => (name, &mut excluded),
            None => (token, &mut included),
        };
        match catalog::lookup(name) {
            Some(property) => filter.insert(property),
            None => unknown_names.push(name.to_string()),
        }
    }

    debug!(
        ?starting_number,
        ?count,
        ?mode,
        %included,
        %excluded,
        unknown = unknown_names.len(),
        "parsed request"
    );

    Request {
        starting_number,
        count,
        mode,
        included,
        excluded,
        unknown_names,
    }
}

/// Every problem with `request`, in reporting order.
///
/// The order is: starting number, count, exclusive pairs (in table order),
/// properties both included and excluded (in catalog order), unknown names.
/// An exit request is always valid.
pub fn validate(request: &Request) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if request.is_exit() {
        return errors;
    }

    if !request.starting_number.is_some_and(is_natural) {
        errors.push(ValidationError::NonNaturalStart);
    }
    if !request.count.is_some_and(is_natural) {
        errors.push(ValidationError::NonNaturalCount);
    }

    for (a, b) in MUTUALLY_EXCLUSIVE {
        let pair = PropertySet::from_properties(&[a, b]);
        if request.included.is_superset(pair) || request.excluded.is_superset(pair) {
            errors.push(ValidationError::MutuallyExclusive(Conflict::Pair(a, b)));
        }
    }
    for property in request.included.intersection(request.excluded).iter() {
        errors.push(ValidationError::MutuallyExclusive(Conflict::Negated(property)));
    }

    if !request.unknown_names.is_empty() {
        errors.push(ValidationError::UnknownPropertyNames(
            request.unknown_names.clone(),
        ));
    }
    errors
}
