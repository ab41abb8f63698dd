// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Query execution.
//!
//! [`QueryExecutor::run`] turns a validated [`Query`] into a lazy iterator of
//! [`QueryResult`]s. Candidates are only classified when the caller pulls the
//! next result, so a caller that stops early never pays for the rest.
//!
//! - [`Mode::Single`] yields exactly one result, for the starting number.
//! - [`Mode::Filtered`] scans `start, start + 1, ...` and yields the first
//!   `count` numbers that have every included property and no excluded one.
//!   The scan also ends if the next candidate would overflow `i64`.
//! - [`Mode::Exit`] yields nothing.
//!
//! A query holds no state of its own, so running it again yields the same
//! sequence.
//!
//! # Example
//!
//! ```
//! use amazing_numbers::engine::Classifier;
//! use amazing_numbers::query::QueryExecutor;
//! use amazing_numbers::request::parse;
//!
//! let query = parse("1 5 even").into_query().unwrap();
//! let classifier = Classifier::default();
//! let numbers: Vec<i64> = QueryExecutor::new(&classifier)
//!     .run(&query)
//!     .map(|result| result.number())
//!     .collect();
//! assert_eq!(numbers, vec![2, 4, 6, 8, 10]);
//! ```

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::catalog::{Property, PropertySet, ALL};
use crate::engine::Classifier;
use crate::request::{Mode, Query};
use tracing::{debug, trace};

/// A classified number: every property of the catalog with its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryResult {
    number: i64,
    satisfied: PropertySet,
}

impl QueryResult {
    /// Classify `number` against the whole catalog.
    pub fn classify(classifier: &Classifier, number: i64) -> Self {
        Self {
            number,
            satisfied: classifier.satisfied(number),
        }
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    /// The properties the number has, in catalog order.
    pub fn satisfied(&self) -> PropertySet {
        self.satisfied
    }

    pub fn holds(&self, property: Property) -> bool {
        self.satisfied.contains(property)
    }

    /// Every property paired with its value, in catalog order.
    pub fn table(&self) -> impl Iterator<Item = (Property, bool)> + '_ {
        ALL.into_iter().map(move |property| (property, self.holds(property)))
    }
}

/// Runs queries against a classifier.
#[derive(Debug, Clone, Copy)]
pub struct QueryExecutor<'a> {
    classifier: &'a Classifier,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(classifier: &'a Classifier) -> Self {
        Self { classifier }
    }

    /// Start a query. Nothing is evaluated until the iterator is pulled.
    pub fn run(&self, query: &Query) -> Matches<'a> {
        let remaining = match query.mode() {
            Mode::Exit => 0,
            Mode::Single => 1,
            Mode::Filtered => query.count().max(0),
        };
        debug!(
            start = query.starting_number(),
            count = query.count(),
            mode = ?query.mode(),
            "running query"
        );
        Matches {
            classifier: self.classifier,
            mode: query.mode(),
            included: query.included(),
            excluded: query.excluded(),
            next_candidate: Some(query.starting_number()),
            remaining,
            statistics: Statistics::new(),
        }
    }
}

/// Lazy sequence of results of one query.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    classifier: &'a Classifier,
    mode: Mode,
    included: PropertySet,
    excluded: PropertySet,
    /// `None` once the candidates have run past `i64::MAX`.
    next_candidate: Option<i64>,
    remaining: i64,
    statistics: Statistics,
}

impl Matches<'_> {
    /// Counters for the candidates examined and results yielded so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn take_candidate(&mut self) -> Option<i64> {
        let candidate = self.next_candidate?;
        self.next_candidate = candidate.checked_add(1);
        self.statistics.increment_counter(Counters::CandidatesExamined);
        Some(candidate)
    }

    fn emit(&mut self, number: i64) -> QueryResult {
        self.remaining -= 1;
        self.statistics.increment_counter(Counters::MatchesYielded);
        if self.remaining == 0 {
            self.finish();
        }
        QueryResult::classify(self.classifier, number)
    }

    fn finish(&self) {
        debug!(
            examined = self.statistics.get(Counters::CandidatesExamined),
            matched = self.statistics.get(Counters::MatchesYielded),
            "query finished"
        );
    }
}

impl Iterator for Matches<'_> {
    type Item = QueryResult;

    fn next(&mut self) -> Option<QueryResult> {
        if self.remaining <= 0 {
            return None;
        }
        match self.mode {
            Mode::Exit => None,
            Mode::Single => {
                let number = self.take_candidate()?;
                Some(self.emit(number))
            }
            Mode::Filtered => loop {
                let Some(candidate) = self.take_candidate() else {
                    debug!("candidates exhausted at i64::MAX");
                    self.remaining = 0;
                    self.finish();
                    return None;
                };
                if self
                    .classifier
                    .evaluate_all(candidate, self.included, self.excluded)
                {
                    return Some(self.emit(candidate));
                }
                trace!(candidate, "rejected");
            },
        }
    }
}
