//! `alu`: runs one operation on the gate-level 4-bit ALU.
//!
//! **Usage:**
//! ```text
//! alu [--json] [--trace] [--log <FILTER>] -a 0xH 0xH    ADD
//! alu [--json] [--trace] [--log <FILTER>] -d 0xH 0xH    AND
//! alu [--json] [--trace] [--log <FILTER>] -d 0xH        NOT
//! ```
//!
//! **Output** (stdout):
//! ```text
//! -> 0x<H> = <D>    ADD (signed D) and AND (unsigned D)
//! -> 0x<H>          NOT
//! ```
//!
//! Logs and the gate trace go to stderr. Exits non-zero on any malformed
//! invocation.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use alu4::gate::{GateTrace, TracingGates};
use alu4::{invocation, Alu, Outcome};

/// Gate-level 4-bit ALU.
#[derive(Parser)]
#[command(
    name = "alu",
    about = "Simulate a 4-bit ALU built from logic gates",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Print the outcome as a JSON object instead of the `->` line.
    #[arg(long)]
    json: bool,

    /// Print every gate evaluation to stderr.
    #[arg(long)]
    trace: bool,

    /// Log filter directive, e.g. `debug` or `alu4=trace`. Falls back to
    /// `ALU4_LOG`, then `warn`.
    #[arg(long)]
    log: Option<String>,

    /// Operation flag followed by its operands: `-a 0xH 0xH`, `-d 0xH 0xH`
    /// or `-d 0xH`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    invocation: Vec<String>,
}

/// JSON form of one run.
#[derive(Serialize)]
struct Report<'a> {
    instruction: String,
    #[serde(flatten)]
    outcome: &'a Outcome,
    hex: String,
    bits: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a GateTrace>,
}

const LOG_ENV: &str = "ALU4_LOG";
const DEFAULT_LOG: &str = "warn";

/// An explicit `--log` must parse; a bad `ALU4_LOG` only costs a warning.
fn init_logging(explicit: Option<&str>) -> Result<()> {
    let mut rejected = None;
    let filter = match explicit {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid log filter: {}", directives))?,
        None => match EnvFilter::try_from_env(LOG_ENV) {
            Ok(filter) => filter,
            Err(err) => {
                if std::env::var_os(LOG_ENV).is_some() {
                    rejected = Some(err);
                }
                EnvFilter::new(DEFAULT_LOG)
            }
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    if let Some(err) = rejected {
        tracing::warn!(%err, "ignoring invalid {} filter, using `{}`", LOG_ENV, DEFAULT_LOG);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref())?;

    let instruction = invocation::parse(&args.invocation)
        .with_context(|| format!("Invalid invocation: alu {}", args.invocation.join(" ")))?;
    tracing::info!(%instruction, "parsed invocation");

    let (outcome, trace) = if args.trace {
        let alu = Alu::with_gates(TracingGates::scalar());
        let outcome = alu.execute(instruction);
        let trace = alu.into_gates().into_trace();
        tracing::debug!(gates = trace.len(), "gate evaluations");
        (outcome, Some(trace))
    } else {
        (Alu::new().execute(instruction), None)
    };

    if args.json {
        let report = Report {
            instruction: instruction.to_string(),
            outcome: &outcome,
            hex: format!("0x{}", outcome.hex_digit()),
            bits: outcome.result.to_string(),
            trace: trace.as_ref(),
        };
        let json =
            serde_json::to_string(&report).context("Failed to serialize outcome to JSON")?;
        println!("{}", json);
    } else {
        println!("{}", outcome);
        if let Some(trace) = &trace {
            eprintln!("{}", trace);
        }
    }

    Ok(())
}
