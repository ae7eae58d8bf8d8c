//! nudge
//!
//! Command-line front end for litnudge.

use std::io::{self, BufRead};
use std::process;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;

use litnudge::{locate, DecimalContext, Direction, LiteralSpan, Nudger};

/// Increment or decrement the literal digit under a cursor
#[derive(Parser, Debug)]
#[command(name = "nudge")]
#[command(version)]
#[command(about = "Increment or decrement the literal digit under a cursor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Starting precision for fractional literals (grows as needed)
    #[arg(long, global = true, default_value_t = litnudge::value::DEFAULT_PRECISION)]
    precision: u64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Increment the digit at INDEX
    Inc {
        /// Char index of the cursor
        index: usize,

        /// Line to edit (read from stdin if omitted)
        line: Option<String>,
    },
    /// Decrement the digit at INDEX
    Dec {
        /// Char index of the cursor
        index: usize,

        /// Line to edit (read from stdin if omitted)
        line: Option<String>,
    },
    /// Show the literal under INDEX without changing it
    Inspect {
        /// Char index of the cursor
        index: usize,

        /// Line to inspect (read from stdin if omitted)
        line: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct Inspection {
    index: usize,
    span: Option<LiteralSpan>,
    text: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Inc { index, line } => nudge(cli, *index, line.as_deref(), Direction::Increment),
        Commands::Dec { index, line } => nudge(cli, *index, line.as_deref(), Direction::Decrement),
        Commands::Inspect { index, line } => inspect(cli, *index, line.as_deref()),
    }
}

fn nudge(cli: &Cli, index: usize, line: Option<&str>, direction: Direction) -> anyhow::Result<()> {
    let line = read_line(line)?;
    let mut nudger = Nudger::with_context(DecimalContext::with_precision(cli.precision));

    let edit = nudger.nudge(&line, index, direction)?;
    if edit.is_noop(&line) {
        log::info!("no literal at index {}", index);
    }

    if cli.json {
        println!("{}", serde_json::to_string(&edit)?);
    } else {
        println!("{}", edit.line);
        println!("{}", edit.offset);
    }
    Ok(())
}

fn inspect(cli: &Cli, index: usize, line: Option<&str>) -> anyhow::Result<()> {
    let line = read_line(line)?;
    let chars: Vec<char> = line.chars().collect();
    if index >= chars.len() {
        bail!("index {} is past the end of a {}-character line", index, chars.len());
    }

    let span = locate(&line, index);
    let text = span.map(|s| chars[s.start..s.end].iter().collect::<String>());
    let report = Inspection { index, span, text };

    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    match (&report.span, &report.text) {
        (Some(span), Some(text)) => {
            let kind = match span.base {
                Some(base) => format!("{:?}", base).to_lowercase(),
                None => "boolean".to_string(),
            };
            println!("{} {} [{}, {})", kind, text, span.start, span.end);
        }
        _ => println!("no literal"),
    }
    Ok(())
}

/// Use the line given on the command line, or the first line of stdin
fn read_line(line: Option<&str>) -> anyhow::Result<String> {
    if let Some(line) = line {
        return Ok(line.to_string());
    }

    let mut buf = String::new();
    io::stdin()
        .lock()
        .read_line(&mut buf)
        .context("Failed to read line from stdin")?;

    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}
