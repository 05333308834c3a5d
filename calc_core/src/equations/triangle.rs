//! # Triangle Geometry Formulas
//!
//! Plane-triangle formulas used by the triangle solver.
//!
//! ## Notation
//!
//! - `a`, `b`, `c` = Side lengths
//! - `s` = Semiperimeter (a + b + c) / 2
//! - `A` = Area
//! - `P` = Perimeter
//! - `α`, `β`, `γ` = Interior angles opposite `a`, `b`, `c`
//!
//! ## References
//!
//! - Heron of Alexandria, *Metrica* I.8
//! - Euclid, *Elements* I.20 (triangle inequality), I.47 (Pythagoras)

use serde::{Deserialize, Serialize};

/// Default tolerance for the Pythagorean right-angle test
pub const RIGHT_ANGLE_TOLERANCE: f64 = 1e-4;

// =============================================================================
// VALIDITY
// =============================================================================

/// Check the strict triangle inequality on all three permutations.
///
/// ```text
///          /\
///       c /  \ b
///        /    \
///       /______\
///           a
/// ```
///
/// # Formula
/// a + b > c, a + c > b, b + c > a
///
/// Non-finite and non-positive sides always fail, so a missing side
/// defaulted to zero can never form a triangle.
///
/// # Example
/// ```rust
/// use calc_core::equations::triangle::validate_sides;
///
/// assert!(validate_sides(2.0, 2.0, 3.0));
/// assert!(!validate_sides(1.0, 2.0, 3.0)); // degenerate
/// ```
pub fn validate_sides(a: f64, b: f64, c: f64) -> bool {
    let positive = |x: f64| x.is_finite() && x > 0.0;
    if !(positive(a) && positive(b) && positive(c)) {
        return false;
    }
    a + b > c && a + c > b && b + c > a
}

// =============================================================================
// MEASURES
// =============================================================================

/// Perimeter P = a + b + c
#[inline]
pub fn perimeter(a: f64, b: f64, c: f64) -> f64 {
    a + b + c
}

/// Semiperimeter s = (a + b + c) / 2
#[inline]
pub fn semiperimeter(a: f64, b: f64, c: f64) -> f64 {
    perimeter(a, b, c) / 2.0
}

/// Area from three sides by Heron's formula.
///
/// # Formula
/// A = √(s(s − a)(s − b)(s − c))
///
/// Evaluated in Kahan's rearrangement on sides sorted x ≥ y ≥ z:
///
/// A = ¼·√((x + (y + z))(z − (x − y))(z + (x − y))(x + (y − z)))
///
/// Each factor is rooted separately so the result stays in range whenever
/// the area itself does. Callers validate first; factors are clamped at
/// zero so a degenerate triangle yields `0.0` rather than `NaN`.
///
/// # Example
/// ```rust
/// use calc_core::equations::triangle::heron_area;
///
/// let area = heron_area(3.0, 4.0, 5.0);
/// assert!((area - 6.0).abs() < 1e-12);
/// ```
pub fn heron_area(a: f64, b: f64, c: f64) -> f64 {
    let [z, y, x] = sorted(a, b, c);
    let root = |factor: f64| factor.max(0.0).sqrt();

    let outer = root(x + (y + z)) * root(z - (x - y));
    let inner = root(z + (x - y)) * root(x + (y - z));
    0.25 * outer * inner
}

/// Area from base and perpendicular height.
///
/// ```text
///          /|\
///         / | \
///        /  |h \
///       /___|___\
///           b
/// ```
///
/// # Formula
/// A = b·h / 2
#[inline]
pub fn base_height_area(base: f64, height: f64) -> f64 {
    base * height / 2.0
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a triangle by its side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideClass {
    /// All three sides equal
    Equilateral,
    /// Exactly two sides equal
    Isosceles,
    /// No two sides equal
    Scalene,
}

impl SideClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            SideClass::Equilateral => "Equilateral",
            SideClass::Isosceles => "Isosceles",
            SideClass::Scalene => "Scalene",
        }
    }
}

/// Classification of a triangle by its largest interior angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleClass {
    /// All angles below 90°
    Acute,
    /// One angle of 90° (within tolerance)
    Right,
    /// One angle above 90°
    Obtuse,
}

impl AngleClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            AngleClass::Acute => "Acute",
            AngleClass::Right => "Right-angled",
            AngleClass::Obtuse => "Obtuse",
        }
    }
}

/// Classify by sides. Equilateral is checked first, so it never also
/// reports Isosceles. Side values are compared exactly.
pub fn classify_by_sides(a: f64, b: f64, c: f64) -> SideClass {
    if a == b && b == c {
        SideClass::Equilateral
    } else if a == b || b == c || a == c {
        SideClass::Isosceles
    } else {
        SideClass::Scalene
    }
}

fn sorted(a: f64, b: f64, c: f64) -> [f64; 3] {
    let mut sides = [a, b, c];
    sides.sort_by(|x, y| x.total_cmp(y));
    sides
}

/// Pythagorean residual s0² + s1² − s2² on ascending sides.
///
/// Zero for a right triangle, positive for acute, negative for obtuse.
pub fn pythagorean_residual(a: f64, b: f64, c: f64) -> f64 {
    let [s0, s1, s2] = sorted(a, b, c);
    s0 * s0 + s1 * s1 - s2 * s2
}

/// Right-angle test.
///
/// # Formula
/// |s0² + s1² − s2²| < ε with s0 ≤ s1 ≤ s2
///
/// # Example
/// ```rust
/// use calc_core::equations::triangle::{is_right_angled, RIGHT_ANGLE_TOLERANCE};
///
/// assert!(is_right_angled(5.0, 3.0, 4.0, RIGHT_ANGLE_TOLERANCE));
/// assert!(!is_right_angled(2.0, 2.0, 3.0, RIGHT_ANGLE_TOLERANCE));
/// ```
pub fn is_right_angled(a: f64, b: f64, c: f64, tolerance: f64) -> bool {
    pythagorean_residual(a, b, c).abs() < tolerance
}

/// Classify by angle, using the same tolerance band as [`is_right_angled`].
pub fn classify_by_angles(a: f64, b: f64, c: f64, tolerance: f64) -> AngleClass {
    let residual = pythagorean_residual(a, b, c);
    if residual.abs() < tolerance {
        AngleClass::Right
    } else if residual > 0.0 {
        AngleClass::Acute
    } else {
        AngleClass::Obtuse
    }
}

/// Interior angles in degrees, each opposite the side of the same position.
///
/// # Formula (law of cosines)
/// α = acos((b² + c² − a²) / 2bc), and cyclically
///
/// Sides are scaled by the longest one before squaring, and cosines are
/// clamped to [-1, 1] against rounding. Callers validate first.
pub fn interior_angles(a: f64, b: f64, c: f64) -> [f64; 3] {
    let longest = a.max(b).max(c);
    let (a, b, c) = (a / longest, b / longest, c / longest);
    let angle = |opposite: f64, x: f64, y: f64| {
        let cos = (x * x + y * y - opposite * opposite) / (2.0 * x * y);
        cos.clamp(-1.0, 1.0).acos().to_degrees()
    };
    [angle(a, b, c), angle(b, a, c), angle(c, a, b)]
}
