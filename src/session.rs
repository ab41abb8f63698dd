// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interactive session: read requests line by line and print the answers.
//!
//! The session ends on a request with starting number 0 or at end of input.

use crate::engine::Classifier;
use crate::query::QueryExecutor;
use crate::report;
use crate::request;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Failures of the session itself. Bad requests are never errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read request: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Run a session over `input`, writing everything to `output`.
///
/// Returns the number of requests answered (valid or not).
pub fn run<R: BufRead, W: Write>(
    classifier: &Classifier,
    input: R,
    mut output: W,
) -> Result<usize, SessionError> {
    writeln!(output, "{}", report::WELCOME)?;
    writeln!(output, "{}", report::INSTRUCTIONS)?;

    let executor = QueryExecutor::new(classifier);
    let mut answered = 0;
    let mut lines = input.lines();
    loop {
        writeln!(output, "{}", report::PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("end of input");
            break;
        };
        let line = line.map_err(SessionError::Read)?;
        if line.trim().is_empty() {
            writeln!(output, "{}", report::INSTRUCTIONS)?;
            continue;
        }

        let request = request::parse(&line);
        if request.is_exit() {
            break;
        }
        answered += 1;

        match request.into_query() {
            Ok(query) => {
                for result in executor.run(&query) {
                    writeln!(output, "{}", report::render(&result, query.mode()))?;
                }
            }
            Err(errors) => {
                info!(errors = errors.len(), "rejected request");
                for error in &errors {
                    writeln!(output, "{}", report::error_message(error))?;
                }
            }
        }
    }

    writeln!(output, "{}", report::GOODBYE)?;
    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> (usize, String) {
        let mut output = Vec::new();
        let answered = run(&Classifier::default(), Cursor::new(input), &mut output)
            .expect("in-memory session");
        (answered, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn test_exit_immediately() {
        let (answered, output) = session("0\n");
        assert_eq!(answered, 0);
        assert!(output.starts_with("Welcome to Amazing Numbers!"));
        assert!(output.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn test_single_then_exit() {
        let (answered, output) = session("1\n0\n");
        assert_eq!(answered, 1);
        assert!(output.contains("Properties of 1\neven: false\nodd: true\n"));
    }

    #[test]
    fn test_filtered_request() {
        let (_, output) = session("1 3 even\n0\n");
        assert!(output.contains("2 is even"));
        assert!(output.contains("4 is even"));
        assert!(output.contains("6 is even"));
        assert!(!output.contains("8 is even"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (answered, output) = session("1 1 even odd\n5\n0\n");
        assert_eq!(answered, 2);
        assert!(output.contains("mutually exclusive properties: [EVEN, ODD]"));
        assert!(output.contains("Properties of 5"));
    }

    #[test]
    fn test_blank_line_repeats_instructions() {
        let (answered, output) = session("\n0\n");
        assert_eq!(answered, 0);
        assert_eq!(output.matches("Supported requests:").count(), 2);
    }

    #[test]
    fn test_transcript_has_no_extra_blank_lines() {
        let (_, output) = session("100 2\n0\n");
        let expected = format!(
            "Welcome to Amazing Numbers!\n\n{}\n\
             Enter a request:\n\
             100 is even, duck, gapful, square, happy\n\
             101 is odd, duck, palindromic, jumping, sad\n\
             Enter a request:\n\
             Goodbye!\n",
            report::INSTRUCTIONS
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (answered, output) = session("7");
        assert_eq!(answered, 1);
        assert!(output.contains("Properties of 7"));
        assert!(output.trim_end().ends_with("Goodbye!"));
    }
}
