// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use amazing_numbers::{parse, Classifier, QueryExecutor, QueryResult};

/// Parse and validate `line`, panicking on validation errors.
pub fn query(line: &str) -> amazing_numbers::Query {
    match parse(line).into_query() {
        Ok(query) => query,
        Err(errors) => panic!("{:?} should be valid, got {:?}", line, errors),
    }
}

/// Run `line` under the default configuration and collect every result.
pub fn run(line: &str) -> Vec<QueryResult> {
    let classifier = Classifier::default();
    QueryExecutor::new(&classifier).run(&query(line)).collect()
}

/// The numbers yielded by `line`.
pub fn numbers(line: &str) -> Vec<i64> {
    run(line).iter().map(QueryResult::number).collect()
}
