//! # Calculation Settings
//!
//! Tunables shared by every calculation. Settings are plain data passed into
//! the calculation functions; nothing is stored between calls.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "right_angle_tolerance": 0.0001,
//!   "decimal_places": 2,
//!   "mixed_numbers": false
//! }
//! ```
//!
//! Missing keys take their default value, so `{}` is a valid settings file.

use serde::{Deserialize, Serialize};

use crate::equations::triangle::RIGHT_ANGLE_TOLERANCE;
use crate::errors::{CalcError, CalcResult};

/// Upper bound on `decimal_places`
pub const MAX_DECIMAL_PLACES: usize = 10;

/// Global calculation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Tolerance ε for |s0² + s1² − s2²| < ε in the right-angle test
    pub right_angle_tolerance: f64,

    /// Decimal places used when formatting real-valued results
    pub decimal_places: usize,

    /// Render fraction results as mixed numbers by default
    pub mixed_numbers: bool,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            right_angle_tolerance: RIGHT_ANGLE_TOLERANCE,
            decimal_places: 2,
            mixed_numbers: false,
        }
    }
}

impl CalcSettings {
    /// Parse settings from JSON text and validate them.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: CalcSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.right_angle_tolerance.is_finite() || self.right_angle_tolerance <= 0.0 {
            return Err(CalcError::invalid_input(
                "right_angle_tolerance",
                self.right_angle_tolerance.to_string(),
                "Tolerance must be a positive finite number",
            ));
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(CalcError::invalid_input(
                "decimal_places",
                self.decimal_places.to_string(),
                format!("At most {} decimal places are supported", MAX_DECIMAL_PLACES),
            ));
        }
        Ok(())
    }

    /// Format a real value with the configured precision
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimal_places, value)
    }
}
