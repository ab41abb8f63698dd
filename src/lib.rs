// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Classify integers by a fixed catalog of numeric properties.
//!
//! # Architecture
//!
//! Leaves first:
//!
//! - [`catalog`]: the closed set of [`Property`] values, their names and the
//!   table of mutually exclusive pairs.
//! - [`engine`]: one test per property, dispatched by [`Classifier`].
//! - [`request`]: parses a request line into a [`Request`] and validates it
//!   into a [`Query`], collecting every [`ValidationError`] in one pass.
//! - [`query`]: runs a query as a lazy iterator of [`QueryResult`]s.
//!
//! Around the core sit the [`config`] limits, the text [`report`]s and the
//! interactive [`session`] used by the `amazing` binary.
//!
//! # Example
//!
//! ```
//! use amazing_numbers::{parse, Classifier, QueryExecutor};
//!
//! let query = parse("100 3 gapful").into_query().unwrap();
//! let classifier = Classifier::default();
//! let found: Vec<i64> = QueryExecutor::new(&classifier)
//!     .run(&query)
//!     .map(|result| result.number())
//!     .collect();
//! assert_eq!(found, vec![100, 105, 108]);
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod query;
pub mod report;
pub mod request;
pub mod session;

// Re-export commonly used types
pub use catalog::{Property, PropertySet};
pub use config::{Config, HappyLimits};
pub use engine::Classifier;
pub use query::{QueryExecutor, QueryResult};
pub use request::{parse, validate, Mode, Query, Request, ValidationError};
