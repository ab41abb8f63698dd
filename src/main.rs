// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interactive Amazing Numbers session.

use amazing_numbers::config::{
    DEFAULT_HAPPY_SEEN_CAPACITY, DEFAULT_HAPPY_STEP_BUDGET, MAX_HAPPY_SEEN_CAPACITY,
    MAX_HAPPY_STEP_BUDGET,
};
use amazing_numbers::{session, Classifier, Config, HappyLimits};
use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "amazing", version, about = "Classify integers by their properties")]
struct Cli {
    /// Steps of the digit-square map tried before a number is declared sad
    #[arg(
        long,
        env = "AMAZING_HAPPY_STEP_BUDGET",
        default_value_t = DEFAULT_HAPPY_STEP_BUDGET,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_HAPPY_STEP_BUDGET as u64)
    )]
    happy_step_budget: usize,

    /// Initial capacity of the visited set used to detect happy-number cycles
    #[arg(
        long,
        env = "AMAZING_HAPPY_SEEN_CAPACITY",
        default_value_t = DEFAULT_HAPPY_SEEN_CAPACITY,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_HAPPY_SEEN_CAPACITY as u64)
    )]
    happy_seen_capacity: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> Config {
        Config::new(HappyLimits {
            step_budget: self.happy_step_budget,
            seen_capacity: self.happy_seen_capacity,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with answers
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cli.log_level)
            .with_context(|| format!("invalid log level {:?}", cli.log_level))?,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let classifier = Classifier::new(cli.config());
    let answered = session::run(&classifier, io::stdin().lock(), io::stdout().lock())?;
    tracing::debug!(answered, "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("amazing").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_give_default_config() {
        let cli = parse(&[]).expect("no arguments");
        assert_eq!(cli.config(), Config::default());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_flags_override_limits() {
        let cli = parse(&["--happy-step-budget", "50", "--happy-seen-capacity", "8"])
            .expect("limits in range");
        assert_eq!(
            cli.config(),
            Config::new(HappyLimits {
                step_budget: 50,
                seen_capacity: 8,
            })
        );
    }

    #[test]
    fn test_limits_at_bounds_are_accepted() {
        let budget = MAX_HAPPY_STEP_BUDGET.to_string();
        let capacity = MAX_HAPPY_SEEN_CAPACITY.to_string();
        let cli = parse(&[
            "--happy-step-budget",
            &budget,
            "--happy-seen-capacity",
            &capacity,
        ])
        .expect("limits at the bounds");
        assert_eq!(cli.config().happy.step_budget, MAX_HAPPY_STEP_BUDGET);
        assert_eq!(cli.config().happy.seen_capacity, MAX_HAPPY_SEEN_CAPACITY);
        assert!(parse(&["--happy-seen-capacity", "0"]).is_ok());
    }

    #[test]
    fn test_out_of_range_limits_are_rejected() {
        let budget = (MAX_HAPPY_STEP_BUDGET + 1).to_string();
        let capacity = (MAX_HAPPY_SEEN_CAPACITY + 1).to_string();
        assert!(parse(&["--happy-step-budget", "0"]).is_err());
        assert!(parse(&["--happy-step-budget", &budget]).is_err());
        assert!(parse(&["--happy-seen-capacity", &capacity]).is_err());
        assert!(parse(&["--happy-seen-capacity", "18446744073709551615"]).is_err());
        assert!(parse(&["--happy-seen-capacity", "-1"]).is_err());
    }
}
