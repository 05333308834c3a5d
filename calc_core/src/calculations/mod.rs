//! # Calculations
//!
//! This module contains all calculation types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`fraction`] - Four-operation fraction calculator
//! - [`triangle`] - Triangle area, perimeter and classification
//!
//! ## JSON Requests
//!
//! [`CalculationItem`] wraps any input behind a `"type"` tag so a single
//! JSON document can name the calculation to run:
//!
//! ```rust
//! use calc_core::calculations::{CalculationItem, CalculationOutput};
//! use calc_core::settings::CalcSettings;
//!
//! let item: CalculationItem = serde_json::from_str(
//!     r#"{ "type": "Triangle", "a": 3.0, "b": 4.0, "c": 5.0 }"#,
//! ).unwrap();
//!
//! match item.run(&CalcSettings::default()).unwrap() {
//!     CalculationOutput::Triangle(result) => assert!((result.area - 6.0).abs() < 1e-9),
//!     other => panic!("unexpected output: {:?}", other),
//! }
//! ```

pub mod fraction;
pub mod triangle;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::CalcSettings;

// Re-export commonly used types
pub use fraction::{FractionInput, FractionOperation, FractionResult, OperandInput};
pub use triangle::{Measurement, TriangleInput, TriangleResult, TriangleSummary};

/// Enum wrapper for all calculation types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Fraction arithmetic
    Fraction(FractionInput),
    /// Triangle solver
    Triangle(TriangleInput),
}

/// Result of running a [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Fraction(FractionResult),
    Triangle(TriangleResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Fraction(f) => &f.label,
            CalculationItem::Triangle(t) => &t.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Fraction(_) => "Fraction",
            CalculationItem::Triangle(_) => "Triangle",
        }
    }

    /// Run the wrapped calculation.
    pub fn run(&self, settings: &CalcSettings) -> CalcResult<CalculationOutput> {
        match self {
            CalculationItem::Fraction(input) => {
                fraction::calculate_with_settings(input, settings).map(CalculationOutput::Fraction)
            }
            CalculationItem::Triangle(input) => {
                triangle::calculate_with_settings(input, settings).map(CalculationOutput::Triangle)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_dispatch() {
        let json = r#"{
            "type": "Fraction",
            "label": "F-1",
            "first": { "numerator": "1", "denominator": "2" },
            "second": { "numerator": "1", "denominator": "4" },
            "operation": "+"
        }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.label(), "F-1");
        assert_eq!(item.calc_type(), "Fraction");

        match item.run(&CalcSettings::default()).unwrap() {
            CalculationOutput::Fraction(result) => assert_eq!(result.display, "3/4"),
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_output_tagging() {
        let item = CalculationItem::Triangle(TriangleInput::from_base_height(6.0, 4.0));
        let output = item.run(&CalcSettings::default()).unwrap();
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["type"], "Triangle");
        assert_eq!(value["area"], 12.0);
    }
}
