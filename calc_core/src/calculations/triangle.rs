//! # Triangle Calculation
//!
//! Area, perimeter and classification of a plane triangle.
//!
//! ## Input Modes
//!
//! A [`TriangleInput`] carries optional sides `a`, `b`, `c` and an optional
//! `base`/`height` pair. The mode is resolved as follows:
//!
//! 1. All three sides given: sides mode (Heron's formula), base/height ignored
//! 2. Otherwise base and height given: base-height mode (area only)
//! 3. Otherwise any side given: sides mode with missing sides as `0.0`,
//!    which never forms a valid triangle
//! 4. Otherwise: [`CalcError::InsufficientData`]
//!
//! In base-height mode the perimeter is [`Measurement::Unavailable`], which
//! is distinct from an invalid triangle.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::triangle::{calculate, TriangleInput};
//!
//! let result = calculate(&TriangleInput::from_sides(3.0, 4.0, 5.0)).unwrap();
//! assert!((result.area - 6.0).abs() < 1e-9);
//! assert_eq!(result.classification.unwrap().to_string(), "Scalene, Right-angled");
//!
//! let result = calculate(&TriangleInput::from_base_height(6.0, 4.0)).unwrap();
//! assert!((result.area - 12.0).abs() < 1e-9);
//! assert!(!result.perimeter.is_computed());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::registry::{Equation, EquationTracker, EquationUsage};
use crate::equations::triangle::{
    base_height_area, classify_by_angles, classify_by_sides, heron_area, interior_angles, is_right_angled,
    perimeter, validate_sides, AngleClass, SideClass,
};
use crate::errors::{CalcError, CalcResult};
use crate::settings::CalcSettings;

// ============================================================================
// Input
// ============================================================================

/// Input parameters for a triangle calculation.
///
/// ## JSON Example (three sides)
///
/// ```json
/// { "label": "T-1", "a": 3.0, "b": 4.0, "c": 5.0 }
/// ```
///
/// ## JSON Example (base and height)
///
/// ```json
/// { "label": "T-2", "base": 6.0, "height": 4.0 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleInput {
    /// User label for this calculation
    pub label: String,

    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,

    pub base: Option<f64>,
    /// Perpendicular height over `base`
    pub height: Option<f64>,
}

/// Resolved input mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TriangleMode {
    Sides { a: f64, b: f64, c: f64 },
    BaseHeight { base: f64, height: f64 },
}

impl TriangleInput {
    pub fn from_sides(a: f64, b: f64, c: f64) -> Self {
        TriangleInput {
            a: Some(a),
            b: Some(b),
            c: Some(c),
            ..Default::default()
        }
    }

    pub fn from_base_height(base: f64, height: f64) -> Self {
        TriangleInput {
            base: Some(base),
            height: Some(height),
            ..Default::default()
        }
    }

    /// Validate that every supplied value is a finite number.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("a", self.a),
            ("b", self.b),
            ("c", self.c),
            ("base", self.base),
            ("height", self.height),
        ];
        for (field, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(CalcError::invalid_input(field, v.to_string(), "Value must be a finite number"));
                }
            }
        }
        Ok(())
    }

    /// Pick the input mode.
    pub fn resolve(&self) -> CalcResult<TriangleMode> {
        self.validate()?;

        if let (Some(a), Some(b), Some(c)) = (self.a, self.b, self.c) {
            return Ok(TriangleMode::Sides { a, b, c });
        }

        if let (Some(base), Some(height)) = (self.base, self.height) {
            if base <= 0.0 {
                return Err(CalcError::invalid_input("base", base.to_string(), "Base must be positive"));
            }
            if height <= 0.0 {
                return Err(CalcError::invalid_input("height", height.to_string(), "Height must be positive"));
            }
            return Ok(TriangleMode::BaseHeight { base, height });
        }

        if self.a.is_some() || self.b.is_some() || self.c.is_some() {
            return Ok(TriangleMode::Sides {
                a: self.a.unwrap_or(0.0),
                b: self.b.unwrap_or(0.0),
                c: self.c.unwrap_or(0.0),
            });
        }

        Err(CalcError::insufficient_data(
            "Provide three sides, or a base and a height",
        ))
    }
}

// ============================================================================
// Result
// ============================================================================

/// A derived quantity that may be computed, unavailable or invalid.
///
/// ## JSON
///
/// ```json
/// { "status": "computed", "value": 12.0 }
/// { "status": "unavailable" }
/// { "status": "invalid" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Measurement {
    Computed(f64),
    /// Not determined by the given data
    Unavailable,
    /// The data does not describe a triangle
    Invalid,
}

impl Measurement {
    pub fn value(&self) -> Option<f64> {
        match self {
            Measurement::Computed(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Measurement::Computed(_))
    }

    /// Number with the configured precision, or a status word
    pub fn format(&self, settings: &CalcSettings) -> String {
        match self {
            Measurement::Computed(v) => settings.format_value(*v),
            Measurement::Unavailable => "Unavailable".to_string(),
            Measurement::Invalid => "Invalid".to_string(),
        }
    }
}

/// Side and angle classification together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleClassification {
    pub sides: SideClass,
    pub angles: AngleClass,
    /// Same test as `angles == Right`, kept as a flat flag for consumers
    pub right_angled: bool,
}

impl TriangleClassification {
    /// Display tags: the side class, plus "Right-angled" when it applies
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = vec![self.sides.display_name()];
        if self.right_angled {
            tags.push(AngleClass::Right.display_name());
        }
        tags
    }
}

/// `"Scalene"`, `"Isosceles, Right-angled"`, ...
impl fmt::Display for TriangleClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags().join(", "))
    }
}

/// Results from a triangle calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mode": { "mode": "sides", "a": 3.0, "b": 4.0, "c": 5.0 },
///   "area": 6.0,
///   "perimeter": { "status": "computed", "value": 12.0 },
///   "classification": { "sides": "Scalene", "angles": "Right", "right_angled": true },
///   "angles_deg": [36.87, 53.13, 90.0],
///   "equations": ["TriangleInequality", "HeronArea", "Perimeter", "SideClassification", "PythagoreanTest", "InteriorAngles"],
///   "steps": [{ "equation": "TriangleInequality", "context": "sides 3, 4, 5" }, ...]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleResult {
    pub mode: TriangleMode,

    pub area: f64,

    /// Unavailable in base-height mode
    pub perimeter: Measurement,

    /// Only in sides mode
    pub classification: Option<TriangleClassification>,

    /// Interior angles opposite a, b, c in degrees (sides mode only)
    pub angles_deg: Option<[f64; 3]>,

    /// Formulas applied, in order
    pub equations: Vec<Equation>,

    /// Every formula application with the values it saw
    pub steps: Vec<EquationUsage>,
}

/// Run a triangle calculation with default settings.
pub fn calculate(input: &TriangleInput) -> CalcResult<TriangleResult> {
    calculate_with_settings(input, &CalcSettings::default())
}

/// Run a triangle calculation.
///
/// # Returns
///
/// * `Ok(TriangleResult)` - Area, perimeter and classification
/// * `Err(CalcError)` - `InvalidTriangle`, `InsufficientData` or `InvalidInput`
pub fn calculate_with_settings(input: &TriangleInput, settings: &CalcSettings) -> CalcResult<TriangleResult> {
    debug!(label = %input.label, "triangle calculation");

    let mode = input.resolve()?;
    let mut tracker = EquationTracker::new();

    let result = match mode {
        TriangleMode::Sides { a, b, c } => solve_sides(a, b, c, settings, &mut tracker),
        TriangleMode::BaseHeight { base, height } => solve_base_height(base, height, &mut tracker),
    };

    let (area, perimeter, classification, angles_deg) = result.inspect_err(|err| {
        debug!(label = %input.label, error = %err, "triangle calculation failed");
    })?;

    Ok(TriangleResult {
        mode,
        area,
        perimeter,
        classification,
        angles_deg,
        equations: tracker.unique_equations(),
        steps: tracker.into_usages(),
    })
}

type Solution = (f64, Measurement, Option<TriangleClassification>, Option<[f64; 3]>);

fn solve_sides(a: f64, b: f64, c: f64, settings: &CalcSettings, tracker: &mut EquationTracker) -> CalcResult<Solution> {
    let context = format!("sides {}, {}, {}", a, b, c);

    tracker.record(Equation::TriangleInequality, context.clone());
    if !validate_sides(a, b, c) {
        return Err(CalcError::invalid_triangle(a, b, c));
    }

    tracker.record(Equation::HeronArea, context.clone());
    let area = finite("area", heron_area(a, b, c))?;

    tracker.record(Equation::Perimeter, context.clone());
    let perimeter = finite("perimeter", perimeter(a, b, c))?;

    tracker.record(Equation::SideClassification, context.clone());
    tracker.record(Equation::PythagoreanTest, context.clone());
    let classification = TriangleClassification {
        sides: classify_by_sides(a, b, c),
        angles: classify_by_angles(a, b, c, settings.right_angle_tolerance),
        right_angled: is_right_angled(a, b, c, settings.right_angle_tolerance),
    };

    tracker.record(Equation::InteriorAngles, context);
    let angles = interior_angles(a, b, c);

    Ok((area, Measurement::Computed(perimeter), Some(classification), Some(angles)))
}

fn solve_base_height(base: f64, height: f64, tracker: &mut EquationTracker) -> CalcResult<Solution> {
    tracker.record(Equation::BaseHeightArea, format!("base {}, height {}", base, height));
    let area = finite("area", base_height_area(base, height))?;
    Ok((area, Measurement::Unavailable, None, None))
}

// Overflowing inputs surface as errors, never as inf/NaN results
fn finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Result is not a finite number"))
    }
}

// ============================================================================
// Display Summary
// ============================================================================

/// Field-by-field view of a calculation for display.
///
/// Unlike [`calculate`], this never fails: a failure is folded into the
/// field states (`Invalid` for a bad triangle, `Unavailable` for missing
/// data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleSummary {
    pub area: Measurement,
    pub perimeter: Measurement,
    /// Classification text, or the reason there is none
    pub shape: String,
    pub is_valid: bool,
    /// The underlying failure, if any
    pub error: Option<CalcError>,
}

/// Run a calculation and fold the outcome into a [`TriangleSummary`].
///
/// # Example
/// ```rust
/// use calc_core::calculations::triangle::{summarize, Measurement, TriangleInput};
/// use calc_core::settings::CalcSettings;
///
/// let summary = summarize(&TriangleInput::from_sides(1.0, 2.0, 3.0), &CalcSettings::default());
/// assert!(!summary.is_valid);
/// assert_eq!(summary.area, Measurement::Invalid);
/// assert_eq!(summary.shape, "Not a valid triangle");
/// ```
pub fn summarize(input: &TriangleInput, settings: &CalcSettings) -> TriangleSummary {
    match calculate_with_settings(input, settings) {
        Ok(result) => TriangleSummary {
            area: Measurement::Computed(result.area),
            perimeter: result.perimeter,
            shape: result
                .classification
                .map(|c| c.to_string())
                .unwrap_or_else(|| "Unclassified".to_string()),
            is_valid: true,
            error: None,
        },
        Err(err) => {
            let (field_state, shape) = match &err {
                CalcError::InsufficientData { .. } => (Measurement::Unavailable, "Insufficient data".to_string()),
                CalcError::InvalidTriangle { .. } => (Measurement::Invalid, "Not a valid triangle".to_string()),
                other => (Measurement::Invalid, other.to_string()),
            };
            TriangleSummary {
                area: field_state,
                perimeter: field_state,
                shape,
                is_valid: false,
                error: Some(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_three_four_five() {
        let result = calculate(&TriangleInput::from_sides(3.0, 4.0, 5.0)).unwrap();
        assert!(approx_eq(result.area, 6.0), "A = {}", result.area);
        assert_eq!(result.perimeter, Measurement::Computed(12.0));

        let class = result.classification.unwrap();
        assert_eq!(class.sides, SideClass::Scalene);
        assert_eq!(class.angles, AngleClass::Right);
        assert!(class.right_angled);
        assert_eq!(class.tags(), vec!["Scalene", "Right-angled"]);

        let settings = CalcSettings::default();
        assert_eq!(settings.format_value(result.area), "6.00");
        assert_eq!(result.perimeter.format(&settings), "12.00");
    }

    #[test]
    fn test_equilateral_is_not_isosceles() {
        let result = calculate(&TriangleInput::from_sides(5.0, 5.0, 5.0)).unwrap();
        let class = result.classification.unwrap();
        assert_eq!(class.sides, SideClass::Equilateral);
        assert_eq!(class.to_string(), "Equilateral");
        assert!(!class.right_angled);
    }

    #[test]
    fn test_isosceles_obtuse() {
        let result = calculate(&TriangleInput::from_sides(2.0, 2.0, 3.0)).unwrap();
        let class = result.classification.unwrap();
        assert_eq!(class.sides, SideClass::Isosceles);
        assert_eq!(class.angles, AngleClass::Obtuse);
    }

    #[test]
    fn test_degenerate_is_invalid() {
        let err = calculate(&TriangleInput::from_sides(1.0, 2.0, 3.0)).unwrap_err();
        assert_eq!(err, CalcError::invalid_triangle(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_base_height_mode() {
        let result = calculate(&TriangleInput::from_base_height(6.0, 4.0)).unwrap();
        assert!(approx_eq(result.area, 12.0));
        assert_eq!(result.perimeter, Measurement::Unavailable);
        assert!(result.classification.is_none());
        assert_eq!(result.equations, vec![Equation::BaseHeightArea]);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].context, "base 6, height 4");
    }

    #[test]
    fn test_area_at_extreme_scales() {
        let large = calculate(&TriangleInput::from_sides(1e154, 1e154, 1e154)).unwrap();
        assert!(large.area.is_finite());
        assert!(large.area > 4.3e307 && large.area < 4.34e307, "A = {}", large.area);

        let small = calculate(&TriangleInput::from_sides(1e-120, 1e-120, 1e-120)).unwrap();
        assert!(small.area > 0.0);
        assert!(small.area > 4.3e-241 && small.area < 4.34e-241, "A = {}", small.area);
    }

    #[test]
    fn test_sides_take_precedence() {
        let input = TriangleInput {
            base: Some(10.0),
            height: Some(10.0),
            ..TriangleInput::from_sides(3.0, 4.0, 5.0)
        };
        let result = calculate(&input).unwrap();
        assert!(approx_eq(result.area, 6.0));
        assert!(matches!(result.mode, TriangleMode::Sides { .. }));
    }

    #[test]
    fn test_partial_sides_default_to_zero() {
        let input = TriangleInput {
            a: Some(3.0),
            b: Some(4.0),
            ..Default::default()
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, CalcError::invalid_triangle(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_partial_sides_fall_back_to_base_height() {
        let input = TriangleInput {
            a: Some(3.0),
            ..TriangleInput::from_base_height(6.0, 4.0)
        };
        let result = calculate(&input).unwrap();
        assert!(approx_eq(result.area, 12.0));
    }

    #[test]
    fn test_no_data() {
        let err = calculate(&TriangleInput::default()).unwrap_err();
        assert!(matches!(err, CalcError::InsufficientData { .. }));

        let only_base = TriangleInput {
            base: Some(3.0),
            ..Default::default()
        };
        assert!(matches!(calculate(&only_base), Err(CalcError::InsufficientData { .. })));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = calculate(&TriangleInput::from_sides(f64::NAN, 4.0, 5.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = calculate(&TriangleInput::from_base_height(6.0, f64::INFINITY)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_overflowing_area_rejected() {
        let err = calculate(&TriangleInput::from_sides(1e200, 1e200, 1e200)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_positive_base() {
        let err = calculate(&TriangleInput::from_base_height(0.0, 4.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_custom_tolerance() {
        // 3, 4, 5.001: residual ≈ -0.01
        let input = TriangleInput::from_sides(3.0, 4.0, 5.001);
        let strict = calculate(&input).unwrap();
        assert!(!strict.classification.unwrap().right_angled);

        let loose = CalcSettings {
            right_angle_tolerance: 0.1,
            ..CalcSettings::default()
        };
        let result = calculate_with_settings(&input, &loose).unwrap();
        assert!(result.classification.unwrap().right_angled);
    }

    #[test]
    fn test_summary_states() {
        let settings = CalcSettings::default();

        let summary = summarize(&TriangleInput::from_base_height(6.0, 4.0), &settings);
        assert!(summary.is_valid);
        assert_eq!(summary.area.format(&settings), "12.00");
        assert_eq!(summary.perimeter, Measurement::Unavailable);

        let summary = summarize(&TriangleInput::from_sides(1.0, 1.0, 5.0), &settings);
        assert!(!summary.is_valid);
        assert_eq!(summary.perimeter, Measurement::Invalid);

        let summary = summarize(&TriangleInput::default(), &settings);
        assert_eq!(summary.area, Measurement::Unavailable);
        assert_eq!(summary.shape, "Insufficient data");
    }

    #[test]
    fn test_serialization() {
        let json = r#"{ "label": "T-1", "base": 6.0, "height": 4.0 }"#;
        let input: TriangleInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.a, None);

        let result = calculate(&input).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["mode"]["mode"], "base_height");
        assert_eq!(value["perimeter"]["status"], "unavailable");
        assert_eq!(value["area"], 12.0);
    }
}
