//! Print the spacetime field of a rule as text.
//!
//! Usage: `cargo run -p trine --example spacetime -- [RULE] [WIDTH] [STEPS] [SEED]`
//!
//! Every argument is optional; omitted ones fall back to the
//! [`RunConfig`] defaults. Set `RUST_LOG=debug` to see engine events.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use trine::prelude::*;

fn parse_args() -> Result<RunConfig, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = RunConfig::default();

    if let Some(rule) = args.first() {
        config.rule_index = rule.parse().map_err(|e: InvalidArgument| e.to_string())?;
    }
    if let Some(width) = args.get(1) {
        config.width = width
            .parse()
            .map_err(|e| format!("bad width {width:?}: {e}"))?;
    }
    if let Some(steps) = args.get(2) {
        config.time_steps = steps.parse().map_err(|e: InvalidArgument| e.to_string())?;
    }
    if let Some(seed) = args.get(3) {
        config.seed = Some(seed.parse().map_err(|e| format!("bad seed {seed:?}: {e}"))?);
    }
    Ok(config)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid arguments");
            return ExitCode::FAILURE;
        }
    };

    let automaton = match config.run() {
        Ok(automaton) => automaton,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        rule = %config.rule_index,
        table = %automaton.rule_table(),
        width = config.width,
        steps = automaton.time(),
        total_us = automaton.last_metrics().total_us,
        "run complete"
    );

    for row in automaton.spacetime() {
        println!("{row}");
    }
    ExitCode::SUCCESS
}
