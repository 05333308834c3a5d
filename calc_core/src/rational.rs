//! # Rational Numbers
//!
//! The [`Fraction`] value type and its [`MixedNumber`] rendering.
//!
//! A `Fraction` can only be built through [`Fraction::new`] (or parsing and
//! deserialization, which go through it), so every value in circulation is
//! in lowest terms with a positive denominator. `-1/2` and `1/-2` are the
//! same value.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::rational::Fraction;
//!
//! let half = Fraction::new(1, 2)?;
//! let quarter: Fraction = "1/4".parse()?;
//!
//! let sum = half.checked_add(&quarter)?;
//! assert_eq!(sum.to_string(), "3/4");
//!
//! let seven_halves = Fraction::new(7, 2)?;
//! assert_eq!(seven_halves.to_mixed().to_string(), "3 1/2");
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equations::fraction as formulas;
use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Fraction
// ============================================================================

/// Exact rational number in lowest terms.
///
/// ## JSON
///
/// ```json
/// { "numerator": -3, "denominator": 4 }
/// ```
///
/// Deserialization reduces and validates, so `{"numerator": 2, "denominator": -4}`
/// reads back as `-1/2` and a zero denominator is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFraction")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

#[derive(Deserialize)]
struct RawFraction {
    numerator: i64,
    #[serde(default = "default_denominator")]
    denominator: i64,
}

fn default_denominator() -> i64 {
    1
}

impl TryFrom<RawFraction> for Fraction {
    type Error = CalcError;

    fn try_from(raw: RawFraction) -> CalcResult<Self> {
        Fraction::new(raw.numerator, raw.denominator)
    }
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numerator: 0, denominator: 1 };
    pub const ONE: Fraction = Fraction { numerator: 1, denominator: 1 };

    /// Build a fraction, reducing it and moving the sign onto the numerator.
    ///
    /// # Errors
    /// - [`CalcError::DivisionByZero`] when `denominator == 0`
    /// - [`CalcError::Overflow`] for `i64::MIN / -1`-style inputs whose
    ///   normalized form does not fit
    pub fn new(numerator: i64, denominator: i64) -> CalcResult<Self> {
        let (numerator, denominator) = formulas::simplify(numerator, denominator)?;
        Ok(Fraction { numerator, denominator })
    }

    /// Whole number `n/1`
    pub const fn from_integer(n: i64) -> Self {
        Fraction { numerator: n, denominator: 1 }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Always positive
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// `(numerator, denominator)` pair
    pub fn parts(&self) -> (i64, i64) {
        (self.numerator, self.denominator)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Sum, reduced
    pub fn checked_add(&self, other: &Fraction) -> CalcResult<Fraction> {
        Ok(Self::from_pair(formulas::add(self.numerator, self.denominator, other.numerator, other.denominator)?))
    }

    /// Difference, reduced
    pub fn checked_sub(&self, other: &Fraction) -> CalcResult<Fraction> {
        Ok(Self::from_pair(formulas::subtract(self.numerator, self.denominator, other.numerator, other.denominator)?))
    }

    /// Product, reduced
    pub fn checked_mul(&self, other: &Fraction) -> CalcResult<Fraction> {
        Ok(Self::from_pair(formulas::multiply(self.numerator, self.denominator, other.numerator, other.denominator)?))
    }

    /// Quotient, reduced. Dividing by zero is [`CalcError::DivisionByZero`].
    pub fn checked_div(&self, other: &Fraction) -> CalcResult<Fraction> {
        Ok(Self::from_pair(formulas::divide(self.numerator, self.denominator, other.numerator, other.denominator)?))
    }

    pub fn checked_neg(&self) -> CalcResult<Fraction> {
        let numerator = self.numerator.checked_neg().ok_or_else(|| CalcError::overflow("negate"))?;
        Ok(Fraction { numerator, denominator: self.denominator })
    }

    /// `d/n`. The reciprocal of zero is [`CalcError::DivisionByZero`].
    pub fn reciprocal(&self) -> CalcResult<Fraction> {
        if self.numerator == 0 {
            return Err(CalcError::division_by_zero("reciprocal"));
        }
        Fraction::new(self.denominator, self.numerator)
    }

    /// Nearest `f64`
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Whole-plus-proper-fraction form
    pub fn to_mixed(&self) -> MixedNumber {
        let abs_n = self.numerator.unsigned_abs();
        let d = self.denominator.unsigned_abs();
        MixedNumber {
            negative: self.numerator < 0,
            whole: abs_n / d,
            numerator: abs_n % d,
            denominator: d,
        }
    }

    // Pairs coming out of the formulas are already reduced
    fn from_pair((numerator, denominator): (i64, i64)) -> Fraction {
        debug_assert!(denominator > 0);
        Fraction { numerator, denominator }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Fraction::from_integer(n)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so cross-multiplication keeps the order
        let lhs = i128::from(self.numerator) * i128::from(other.denominator);
        let rhs = i128::from(other.numerator) * i128::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

/// `n/d`, or just `n` for whole numbers
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Accepts `"3"`, `"-3/4"`, `"3/-4"` and mixed `"1 1/2"` / `"-1 1/2"`.
impl FromStr for Fraction {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalcError::missing_operand("fraction"));
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        match parts.as_slice() {
            [single] => parse_simple(single, s),
            [whole, fraction] => {
                let whole_value: i64 = whole
                    .parse()
                    .map_err(|_| CalcError::invalid_input("fraction", s, "Whole part is not an integer"))?;
                if !fraction.contains('/') {
                    return Err(CalcError::invalid_input("fraction", s, "Expected 'w n/d' for a mixed number"));
                }
                let proper = parse_simple(fraction, s)?;
                if proper.is_negative() {
                    return Err(CalcError::invalid_input("fraction", s, "Fractional part of a mixed number must be unsigned"));
                }
                let whole_abs = whole_value.checked_abs().ok_or_else(|| CalcError::overflow("parse"))?;
                let magnitude = Fraction::from_integer(whole_abs).checked_add(&proper)?;
                if whole.starts_with('-') {
                    magnitude.checked_neg()
                } else {
                    Ok(magnitude)
                }
            }
            _ => Err(CalcError::invalid_input("fraction", s, "Expected 'n', 'n/d' or 'w n/d'")),
        }
    }
}

fn parse_simple(token: &str, original: &str) -> CalcResult<Fraction> {
    match token.split_once('/') {
        Some((n, d)) => {
            let numerator: i64 = n
                .trim()
                .parse()
                .map_err(|_| CalcError::invalid_input("fraction", original, "Numerator is not an integer"))?;
            let denominator: i64 = d
                .trim()
                .parse()
                .map_err(|_| CalcError::invalid_input("fraction", original, "Denominator is not an integer"))?;
            Fraction::new(numerator, denominator)
        }
        None => token
            .parse::<i64>()
            .map(Fraction::from_integer)
            .map_err(|_| CalcError::invalid_input("fraction", original, "Not an integer")),
    }
}

// ============================================================================
// Mixed Number
// ============================================================================

/// A fraction rendered as sign, whole part and proper remainder.
///
/// ## JSON
///
/// ```json
/// { "negative": false, "whole": 3, "numerator": 1, "denominator": 2 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedNumber {
    pub negative: bool,
    pub whole: u64,
    pub numerator: u64,
    pub denominator: u64,
}

impl MixedNumber {
    /// Decompose a raw pair without reducing it first.
    pub fn from_parts(numerator: i64, denominator: i64) -> CalcResult<Self> {
        let (negative, whole, remainder, denominator) = formulas::mixed_parts(numerator, denominator)?;
        Ok(MixedNumber {
            negative,
            whole,
            numerator: remainder,
            denominator,
        })
    }

    /// Rebuild the improper fraction, reduced.
    pub fn to_fraction(&self) -> CalcResult<Fraction> {
        let denominator = i128::from(self.denominator);
        let magnitude = i128::from(self.whole)
            .checked_mul(denominator)
            .and_then(|scaled| scaled.checked_add(i128::from(self.numerator)))
            .ok_or_else(|| CalcError::overflow("from_mixed_number"))?;
        let signed = if self.negative { -magnitude } else { magnitude };
        let (n, d) = formulas::reduce(signed, denominator, "from_mixed_number")?;
        Ok(Fraction { numerator: n, denominator: d })
    }
}

/// `"0"`, `"-3"`, `"1/2"` or `"3 1/2"`
impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.whole == 0 && self.numerator == 0 {
            return write!(f, "0");
        }
        let sign = if self.negative { "-" } else { "" };
        if self.numerator == 0 {
            write!(f, "{}{}", sign, self.whole)
        } else if self.whole == 0 {
            write!(f, "{}{}/{}", sign, self.numerator, self.denominator)
        } else {
            write!(f, "{}{} {}/{}", sign, self.whole, self.numerator, self.denominator)
        }
    }
}

/// Render a raw pair as a mixed number string.
///
/// The pair is not reduced: `6/4` renders as `"1 2/4"`. Reduce with
/// [`Fraction::new`] first for the canonical form.
///
/// # Errors
/// - [`CalcError::DivisionByZero`] when `denominator == 0` (shown as "Undefined")
///
/// # Example
/// ```rust
/// use calc_core::rational::to_mixed_number;
///
/// assert_eq!(to_mixed_number(7, 2).unwrap(), "3 1/2");
/// assert_eq!(to_mixed_number(-3, 1).unwrap(), "-3");
/// assert_eq!(to_mixed_number(0, 5).unwrap(), "0");
/// ```
pub fn to_mixed_number(numerator: i64, denominator: i64) -> CalcResult<String> {
    Ok(MixedNumber::from_parts(numerator, denominator)?.to_string())
}
