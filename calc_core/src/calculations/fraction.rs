//! # Fraction Calculation
//!
//! Two fractions typed into text fields, one operation, one reduced result.
//!
//! ## Input Conventions
//!
//! - Numerators must be integers; an empty or non-integer numerator is
//!   [`CalcError::MissingOperand`]
//! - An empty denominator means a whole number (denominator 1)
//! - A zero denominator, or dividing by a zero fraction, is
//!   [`CalcError::DivisionByZero`]
//! - Every result, including division, is reduced to lowest terms:
//!   `1/2 ÷ 1/4` is `2/1`, displayed as `2`
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::fraction::{calculate, FractionInput, FractionOperation, OperandInput};
//!
//! let input = FractionInput {
//!     label: "F-1".to_string(),
//!     first: OperandInput::new("1", "2"),
//!     second: OperandInput::new("1", "4"),
//!     operation: FractionOperation::Add,
//!     mixed: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.display, "3/4");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::registry::{Equation, EquationTracker, EquationUsage};
use crate::errors::{CalcError, CalcResult};
use crate::rational::{Fraction, MixedNumber};
use crate::settings::CalcSettings;

// ============================================================================
// Operation
// ============================================================================

/// One of the four fraction operations.
///
/// Serialized as its symbol: `"+"`, `"-"`, `"*"`, `"/"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FractionOperation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl FractionOperation {
    pub fn symbol(&self) -> &'static str {
        match self {
            FractionOperation::Add => "+",
            FractionOperation::Subtract => "-",
            FractionOperation::Multiply => "*",
            FractionOperation::Divide => "/",
        }
    }

    /// The registry entry for this operation
    pub fn equation(&self) -> Equation {
        match self {
            FractionOperation::Add => Equation::FractionAddition,
            FractionOperation::Subtract => Equation::FractionSubtraction,
            FractionOperation::Multiply => Equation::FractionMultiplication,
            FractionOperation::Divide => Equation::FractionDivision,
        }
    }

    /// Apply the operation to two fractions
    pub fn apply(&self, lhs: &Fraction, rhs: &Fraction) -> CalcResult<Fraction> {
        match self {
            FractionOperation::Add => lhs.checked_add(rhs),
            FractionOperation::Subtract => lhs.checked_sub(rhs),
            FractionOperation::Multiply => lhs.checked_mul(rhs),
            FractionOperation::Divide => lhs.checked_div(rhs),
        }
    }
}

impl fmt::Display for FractionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Accepts symbols (`+ - * x × / ÷`) and names (`add`, `subtract`, ...).
impl FromStr for FractionOperation {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "plus" => Ok(FractionOperation::Add),
            "-" | "−" | "subtract" | "minus" => Ok(FractionOperation::Subtract),
            "*" | "x" | "×" | "multiply" | "times" => Ok(FractionOperation::Multiply),
            "/" | "÷" | "divide" | "over" => Ok(FractionOperation::Divide),
            _ => Err(CalcError::invalid_input(
                "operation",
                s,
                "Expected one of + - * / (or add, subtract, multiply, divide)",
            )),
        }
    }
}

// ============================================================================
// Operands
// ============================================================================

/// A fraction as typed into a form: raw numerator and denominator text.
///
/// ## JSON Example
///
/// ```json
/// { "numerator": "3", "denominator": "4" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperandInput {
    /// Integer text; required
    pub numerator: String,

    /// Integer text; empty means 1
    #[serde(default)]
    pub denominator: String,
}

impl OperandInput {
    pub fn new(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        OperandInput {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// Whole number with an empty denominator field
    pub fn whole(numerator: impl Into<String>) -> Self {
        OperandInput::new(numerator, "")
    }

    /// Parse into a reduced fraction. `field` names the operand in errors.
    pub fn parse(&self, field: &str) -> CalcResult<Fraction> {
        parse_operand_field(field, &self.numerator, &self.denominator)
    }
}

/// Parse numerator/denominator text into a reduced fraction.
///
/// # Errors
/// - [`CalcError::MissingOperand`] when the numerator is empty or not an integer
/// - [`CalcError::InvalidInput`] when a non-empty denominator is not an integer
/// - [`CalcError::DivisionByZero`] when the denominator is zero
///
/// # Example
/// ```rust
/// use calc_core::calculations::fraction::parse_operand;
///
/// assert_eq!(parse_operand("6", "").unwrap().to_string(), "6");
/// assert_eq!(parse_operand("2", "-4").unwrap().to_string(), "-1/2");
/// assert!(parse_operand("", "4").is_err());
/// ```
pub fn parse_operand(numerator: &str, denominator: &str) -> CalcResult<Fraction> {
    parse_operand_field("operand", numerator, denominator)
}

fn parse_operand_field(field: &str, numerator: &str, denominator: &str) -> CalcResult<Fraction> {
    let numerator: i64 = numerator
        .trim()
        .parse()
        .map_err(|_| CalcError::missing_operand(format!("{}.numerator", field)))?;

    let denominator = denominator.trim();
    let denominator: i64 = if denominator.is_empty() {
        1
    } else {
        denominator.parse().map_err(|_| {
            CalcError::invalid_input(
                format!("{}.denominator", field),
                denominator,
                "Denominator must be an integer",
            )
        })?
    };

    Fraction::new(numerator, denominator)
}

// ============================================================================
// Input / Result
// ============================================================================

/// Input parameters for a fraction calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1",
///   "first": { "numerator": "7", "denominator": "4" },
///   "second": { "numerator": "1", "denominator": "4" },
///   "operation": "+",
///   "mixed": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractionInput {
    /// User label for this calculation
    #[serde(default)]
    pub label: String,

    pub first: OperandInput,

    pub second: OperandInput,

    pub operation: FractionOperation,

    /// Render as a mixed number; `None` follows [`CalcSettings::mixed_numbers`]
    #[serde(default)]
    pub mixed: Option<bool>,
}

/// Result of a fraction calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fraction": { "numerator": 2, "denominator": 1 },
///   "display": "2",
///   "mixed_number": { "negative": false, "whole": 2, "numerator": 0, "denominator": 1 },
///   "decimal": 2.0,
///   "equations": ["FractionDivision", "GreatestCommonDivisor", "Simplification"],
///   "steps": [
///     { "equation": "FractionDivision", "context": "1/2 / 1/4" },
///     { "equation": "GreatestCommonDivisor", "context": "1/2 / 1/4" },
///     { "equation": "Simplification", "context": "1/2 / 1/4" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionResult {
    /// Reduced result
    pub fraction: Fraction,

    /// Text to show the user (mixed form when requested)
    pub display: String,

    pub mixed_number: MixedNumber,

    /// Nearest floating-point value
    pub decimal: f64,

    /// Formulas applied, in order
    pub equations: Vec<Equation>,

    /// Every formula application with the operands it saw
    pub steps: Vec<EquationUsage>,
}

/// Run a fraction calculation with default settings.
pub fn calculate(input: &FractionInput) -> CalcResult<FractionResult> {
    calculate_with_settings(input, &CalcSettings::default())
}

/// Run a fraction calculation.
///
/// # Returns
///
/// * `Ok(FractionResult)` - Reduced result and its renderings
/// * `Err(CalcError)` - `MissingOperand`, `InvalidInput`, `DivisionByZero` or `Overflow`
pub fn calculate_with_settings(input: &FractionInput, settings: &CalcSettings) -> CalcResult<FractionResult> {
    debug!(label = %input.label, operation = %input.operation, "fraction calculation");

    let mut tracker = EquationTracker::new();
    let result = evaluate(input, &mut tracker).inspect_err(|err| {
        debug!(label = %input.label, error = %err, "fraction calculation failed");
    })?;

    let mixed = input.mixed.unwrap_or(settings.mixed_numbers);
    let mixed_number = result.to_mixed();
    if mixed {
        tracker.record(Equation::MixedNumber, result.to_string());
    }

    let display = if mixed { mixed_number.to_string() } else { result.to_string() };

    Ok(FractionResult {
        fraction: result,
        display,
        mixed_number,
        decimal: result.to_f64(),
        equations: tracker.unique_equations(),
        steps: tracker.into_usages(),
    })
}

fn evaluate(input: &FractionInput, tracker: &mut EquationTracker) -> CalcResult<Fraction> {
    let lhs = input.first.parse("first")?;
    let rhs = input.second.parse("second")?;

    let context = format!("{} {} {}", lhs, input.operation, rhs);
    tracker.record(input.operation.equation(), context.clone());
    let result = input.operation.apply(&lhs, &rhs)?;
    tracker.record(Equation::GreatestCommonDivisor, context.clone());
    tracker.record(Equation::Simplification, context);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(first: (&str, &str), op: FractionOperation, second: (&str, &str)) -> FractionInput {
        FractionInput {
            label: "Test".to_string(),
            first: OperandInput::new(first.0, first.1),
            second: OperandInput::new(second.0, second.1),
            operation: op,
            mixed: None,
        }
    }

    #[test]
    fn test_half_plus_quarter() {
        let result = calculate(&input(("1", "2"), FractionOperation::Add, ("1", "4"))).unwrap();
        assert_eq!(result.fraction.parts(), (3, 4));
        assert_eq!(result.display, "3/4");
        assert!((result.decimal - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_mixed_display_without_whole_part() {
        let mut calc = input(("1", "2"), FractionOperation::Add, ("1", "4"));
        calc.mixed = Some(true);
        let result = calculate(&calc).unwrap();
        assert_eq!(result.display, "3/4");
        assert!(result.equations.contains(&Equation::MixedNumber));
    }

    #[test]
    fn test_mixed_display_with_whole_part() {
        let mut calc = input(("7", "4"), FractionOperation::Add, ("3", "4"));
        calc.mixed = Some(true);
        assert_eq!(calculate(&calc).unwrap().display, "2 1/2");
    }

    #[test]
    fn test_mixed_from_settings() {
        let calc = input(("7", "2"), FractionOperation::Multiply, ("1", ""));
        let settings = CalcSettings {
            mixed_numbers: true,
            ..CalcSettings::default()
        };
        assert_eq!(calculate_with_settings(&calc, &settings).unwrap().display, "3 1/2");

        let mut explicit = calc.clone();
        explicit.mixed = Some(false);
        assert_eq!(calculate_with_settings(&explicit, &settings).unwrap().display, "7/2");
    }

    #[test]
    fn test_division_is_reduced() {
        let result = calculate(&input(("1", "2"), FractionOperation::Divide, ("1", "4"))).unwrap();
        assert_eq!(result.fraction.parts(), (2, 1));
        assert_eq!(result.display, "2");
        assert_eq!(
            result.equations,
            vec![Equation::FractionDivision, Equation::GreatestCommonDivisor, Equation::Simplification]
        );
    }

    #[test]
    fn test_steps_record_operands() {
        let result = calculate(&input(("2", "4"), FractionOperation::Add, ("1", "4"))).unwrap();
        assert_eq!(result.steps.len(), 3);
        assert!(result.steps.iter().all(|step| step.context == "1/2 + 1/4"));
        assert_eq!(result.steps[1].equation, Equation::GreatestCommonDivisor);
    }

    #[test]
    fn test_division_by_zero_fraction() {
        let err = calculate(&input(("1", "2"), FractionOperation::Divide, ("0", "1"))).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero { .. }));
    }

    #[test]
    fn test_zero_denominator_operand() {
        let err = calculate(&input(("1", "0"), FractionOperation::Add, ("1", "2"))).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero { .. }));
    }

    #[test]
    fn test_missing_numerator() {
        let err = calculate(&input(("", "2"), FractionOperation::Add, ("1", "2"))).unwrap_err();
        assert_eq!(err, CalcError::missing_operand("first.numerator"));

        let err = calculate(&input(("1", "2"), FractionOperation::Add, ("1.5", "2"))).unwrap_err();
        assert_eq!(err, CalcError::missing_operand("second.numerator"));
    }

    #[test]
    fn test_empty_denominator_is_whole() {
        let result = calculate(&input(("3", ""), FractionOperation::Subtract, ("1", "2"))).unwrap();
        assert_eq!(result.fraction.parts(), (5, 2));
    }

    #[test]
    fn test_bad_denominator() {
        let err = calculate(&input(("3", "abc"), FractionOperation::Add, ("1", "2"))).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_operands_canonical() {
        let a = calculate(&input(("-1", "2"), FractionOperation::Add, ("0", "1"))).unwrap();
        let b = calculate(&input(("1", "-2"), FractionOperation::Add, ("0", "1"))).unwrap();
        assert_eq!(a.fraction, b.fraction);
        assert_eq!(a.display, "-1/2");
    }

    #[test]
    fn test_operation_parsing() {
        assert_eq!("+".parse::<FractionOperation>().unwrap(), FractionOperation::Add);
        assert_eq!("×".parse::<FractionOperation>().unwrap(), FractionOperation::Multiply);
        assert_eq!("÷".parse::<FractionOperation>().unwrap(), FractionOperation::Divide);
        assert_eq!("Subtract".parse::<FractionOperation>().unwrap(), FractionOperation::Subtract);
        assert!("%".parse::<FractionOperation>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = r#"{
            "first": { "numerator": "7", "denominator": "4" },
            "second": { "numerator": "1" },
            "operation": "/"
        }"#;
        let calc: FractionInput = serde_json::from_str(json).unwrap();
        assert_eq!(calc.operation, FractionOperation::Divide);
        assert_eq!(calc.second.denominator, "");

        let result = calculate(&calc).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["fraction"]["numerator"], 7);
        assert_eq!(value["fraction"]["denominator"], 4);
        assert_eq!(value["equations"][0], "FractionDivision");
    }
}
