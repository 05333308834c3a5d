//! # Reckon CLI Application
//!
//! Command-line front end for the fraction and triangle calculators.
//!
//! ## Usage
//!
//! ```text
//! calc_cli fraction 1/2 + 1/4 [--mixed]
//! calc_cli triangle --sides 3 4 5
//! calc_cli triangle --base-height 6 4
//! calc_cli json < request.json
//! calc_cli                        (interactive prompts)
//! ```
//!
//! `--settings <file.json>` may be given anywhere to load [`CalcSettings`].
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::env;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;

use calc_core::calculations::fraction::{self, FractionInput, FractionOperation, OperandInput};
use calc_core::calculations::triangle::{self, TriangleInput};
use calc_core::calculations::CalculationItem;
use calc_core::{CalcError, CalcResult, CalcSettings};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage:
  calc_cli fraction <a> <op> <b> [--mixed]   e.g. fraction 1/2 + 1/4
  calc_cli triangle --sides <a> <b> <c>
  calc_cli triangle --base-height <base> <height>
  calc_cli json                              read a JSON request from stdin
  calc_cli                                   interactive mode

Options:
  --settings <file>   JSON settings (right_angle_tolerance, decimal_places, mixed_numbers)";

enum Command {
    Fraction { first: String, op: String, second: String, mixed: bool },
    TriangleSides { a: f64, b: f64, c: f64 },
    TriangleBaseHeight { base: f64, height: f64 },
    Json,
    Interactive,
    Help,
}

fn main() -> ExitCode {
    init_logging();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let settings = match take_settings(&mut args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let command = match parse_command(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let outcome = match command {
        Command::Fraction { first, op, second, mixed } => run_fraction(&first, &op, &second, mixed, &settings),
        Command::TriangleSides { a, b, c } => run_triangle(TriangleInput::from_sides(a, b, c), &settings),
        Command::TriangleBaseHeight { base, height } => {
            run_triangle(TriangleInput::from_base_height(base, height), &settings)
        }
        Command::Json => run_json(&settings),
        Command::Interactive => run_interactive(&settings),
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Remove `--settings <path>` from the arguments and load the file.
fn take_settings(args: &mut Vec<String>) -> CalcResult<CalcSettings> {
    let Some(pos) = args.iter().position(|a| a == "--settings") else {
        return Ok(CalcSettings::default());
    };
    if pos + 1 >= args.len() {
        return Err(CalcError::missing_operand("--settings <file>"));
    }
    let path = args.remove(pos + 1);
    args.remove(pos);

    debug!(path = %path, "loading settings");
    let json = fs::read_to_string(&path)
        .map_err(|e| CalcError::invalid_input("--settings", path.as_str(), e.to_string()))?;
    CalcSettings::from_json_str(&json)
}

fn parse_command(args: &[String]) -> Result<Command, String> {
    let Some(name) = args.first() else {
        return Ok(Command::Interactive);
    };

    match name.as_str() {
        "fraction" => {
            let mixed = args.iter().any(|a| a == "--mixed");
            let operands: Vec<&String> = args[1..].iter().filter(|a| *a != "--mixed").collect();
            match operands.as_slice() {
                [first, op, second] => Ok(Command::Fraction {
                    first: first.to_string(),
                    op: op.to_string(),
                    second: second.to_string(),
                    mixed,
                }),
                _ => Err("fraction expects <a> <op> <b>".to_string()),
            }
        }
        "triangle" => match args.get(1).map(String::as_str) {
            Some("--sides") => {
                let values = parse_numbers(&args[2..], 3)?;
                Ok(Command::TriangleSides {
                    a: values[0],
                    b: values[1],
                    c: values[2],
                })
            }
            Some("--base-height") => {
                let values = parse_numbers(&args[2..], 2)?;
                Ok(Command::TriangleBaseHeight {
                    base: values[0],
                    height: values[1],
                })
            }
            _ => Err("triangle expects --sides or --base-height".to_string()),
        },
        "json" => Ok(Command::Json),
        "help" | "-h" | "--help" => Ok(Command::Help),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_numbers(args: &[String], count: usize) -> Result<Vec<f64>, String> {
    if args.len() != count {
        return Err(format!("Expected {} numbers, got {}", count, args.len()));
    }
    args.iter()
        .map(|a| a.parse::<f64>().map_err(|_| format!("Not a number: {}", a)))
        .collect()
}

/// Split `"3/4"` into numerator and denominator fields; `"3"` leaves the
/// denominator empty.
fn operand_fields(text: &str) -> OperandInput {
    match text.split_once('/') {
        Some((n, d)) => OperandInput::new(n, d),
        None => OperandInput::whole(text),
    }
}

// ============================================================================
// Fraction
// ============================================================================

fn run_fraction(first: &str, op: &str, second: &str, mixed: bool, settings: &CalcSettings) -> CalcResult<()> {
    let operation: FractionOperation = op.parse()?;
    let input = FractionInput {
        label: "CLI".to_string(),
        first: operand_fields(first),
        second: operand_fields(second),
        operation,
        mixed: if mixed { Some(true) } else { None },
    };

    let result = fraction::calculate_with_settings(&input, settings)?;

    println!("═══════════════════════════════════════");
    println!("  FRACTION RESULT");
    println!("═══════════════════════════════════════");
    println!();
    println!("  {} {} {} = {}", first, operation, second, result.display);
    println!("  Decimal: {}", settings.format_value(result.decimal));
    println!();
    Ok(())
}

// ============================================================================
// Triangle
// ============================================================================

fn run_triangle(input: TriangleInput, settings: &CalcSettings) -> CalcResult<()> {
    let summary = triangle::summarize(&input, settings);

    println!("═══════════════════════════════════════");
    println!("  TRIANGLE RESULT");
    println!("═══════════════════════════════════════");
    println!();
    println!("  Area:      {}", summary.area.format(settings));
    println!("  Perimeter: {}", summary.perimeter.format(settings));
    println!("  Type:      {}", summary.shape);
    println!();
    println!("  RESULT: {}", if summary.is_valid { "VALID" } else { "INVALID" });
    println!();

    match summary.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

// ============================================================================
// JSON
// ============================================================================

/// Read one `CalculationItem` from stdin, print the output or error as JSON.
fn run_json(settings: &CalcSettings) -> CalcResult<()> {
    let mut request = String::new();
    io::stdin()
        .read_to_string(&mut request)
        .map_err(|e| CalcError::invalid_input("stdin", "", e.to_string()))?;

    let item: CalculationItem = serde_json::from_str(&request)?;
    debug!(label = %item.label(), calc_type = item.calc_type(), "json request");

    match item.run(settings) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            println!("{}", serde_json::to_string_pretty(&e)?);
            Err(e)
        }
    }
}

// ============================================================================
// Interactive
// ============================================================================

fn prompt(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_f64(text: &str) -> Option<f64> {
    let answer = prompt(text)?;
    if answer.is_empty() {
        return None;
    }
    match answer.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(input = %answer, "ignoring non-numeric input");
            None
        }
    }
}

fn run_interactive(settings: &CalcSettings) -> CalcResult<()> {
    println!("Reckon CLI - Fraction and Triangle Calculator");
    println!("=============================================");
    println!();

    let choice = prompt("Calculator [fraction/triangle] (f/t): ").unwrap_or_default();
    println!();

    if choice.starts_with('t') {
        println!("Leave sides blank to use base and height instead.");
        let input = TriangleInput {
            label: "Interactive".to_string(),
            a: prompt_f64("Side a: "),
            b: prompt_f64("Side b: "),
            c: prompt_f64("Side c: "),
            ..Default::default()
        };
        let input = if input.a.is_none() && input.b.is_none() && input.c.is_none() {
            TriangleInput {
                base: prompt_f64("Base: "),
                height: prompt_f64("Height: "),
                ..input
            }
        } else {
            input
        };
        println!();
        run_triangle(input, settings)
    } else {
        let first = prompt("First fraction (e.g. 1/2): ").unwrap_or_default();
        let op = prompt("Operation (+ - * /): ").unwrap_or_default();
        let second = prompt("Second fraction (e.g. 1/4): ").unwrap_or_default();
        let mixed = prompt("Show as mixed number? (y/N): ").is_some_and(|a| a.eq_ignore_ascii_case("y"));
        println!();
        run_fraction(&first, &op, &second, mixed, settings)
    }
}
