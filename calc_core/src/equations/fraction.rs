//! # Rational Arithmetic Formulas
//!
//! Integer formulas behind the fraction calculator. Every function works on
//! raw `(numerator, denominator)` pairs so callers that hold plain integers
//! (form fields, JSON) can use them without building a [`Fraction`] first.
//!
//! [`Fraction`]: crate::rational::Fraction
//!
//! ## Notation
//!
//! - `n1/d1` = First operand
//! - `n2/d2` = Second operand
//! - `g` = Greatest common divisor of `|n|` and `|d|`
//!
//! ## Conventions
//!
//! - Results are always in lowest terms with a positive denominator;
//!   the sign lives on the numerator.
//! - Intermediate products are computed in `i128`, so no valid pair of
//!   `i64` operands can wrap. A result that does not fit back into `i64`
//!   is reported as [`CalcError::Overflow`].
//! - A zero denominator anywhere is [`CalcError::DivisionByZero`].

use crate::errors::{CalcError, CalcResult};

// =============================================================================
// GREATEST COMMON DIVISOR
// =============================================================================

/// Greatest common divisor by Euclid's algorithm.
///
/// # Formula
/// - gcd(a, 0) = a
/// - gcd(a, b) = gcd(b, a mod b)
///
/// Operands are unsigned; callers pass absolute values.
///
/// # Example
/// ```rust
/// use calc_core::equations::fraction::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// ```
#[inline]
pub fn gcd(a: u64, b: u64) -> u64 {
    gcd_wide(u128::from(a), u128::from(b)) as u64
}

fn gcd_wide(a: u128, b: u128) -> u128 {
    if b == 0 {
        a
    } else {
        gcd_wide(b, a % b)
    }
}

// =============================================================================
// SIMPLIFICATION
// =============================================================================

/// Reduce `n/d` to lowest terms.
///
/// # Formula
/// n' = n / g, d' = d / g where g = gcd(|n|, |d|), then the sign is moved
/// onto the numerator.
///
/// # Errors
/// - [`CalcError::DivisionByZero`] when `d == 0`
///
/// # Example
/// ```rust
/// use calc_core::equations::fraction::simplify;
///
/// assert_eq!(simplify(6, 8).unwrap(), (3, 4));
/// assert_eq!(simplify(1, -2).unwrap(), (-1, 2));
/// assert_eq!(simplify(0, 5).unwrap(), (0, 1));
/// ```
pub fn simplify(numerator: i64, denominator: i64) -> CalcResult<(i64, i64)> {
    reduce(i128::from(numerator), i128::from(denominator), "simplify")
}

/// Shared lowest-terms reduction on widened intermediates.
pub(crate) fn reduce(numerator: i128, denominator: i128, operation: &str) -> CalcResult<(i64, i64)> {
    if denominator == 0 {
        return Err(CalcError::division_by_zero(operation));
    }

    // denominator != 0 so g >= 1, and |denominator| < 2^127 for any product of two i64
    let g = gcd_wide(numerator.unsigned_abs(), denominator.unsigned_abs()) as i128;
    let mut n = numerator / g;
    let mut d = denominator / g;
    if d < 0 {
        n = -n;
        d = -d;
    }

    let n = i64::try_from(n).map_err(|_| CalcError::overflow(operation))?;
    let d = i64::try_from(d).map_err(|_| CalcError::overflow(operation))?;
    Ok((n, d))
}

// =============================================================================
// FOUR OPERATIONS
// Cross-multiplication forms; every result goes through `reduce`
// =============================================================================

/// Sum of two fractions.
///
/// # Formula
/// n1/d1 + n2/d2 = (n1·d2 + n2·d1) / (d1·d2)
///
/// # Example
/// ```rust
/// use calc_core::equations::fraction::add;
///
/// assert_eq!(add(1, 2, 1, 4).unwrap(), (3, 4));
/// ```
pub fn add(n1: i64, d1: i64, n2: i64, d2: i64) -> CalcResult<(i64, i64)> {
    let numerator = wide_mul(n1, d2)
        .checked_add(wide_mul(n2, d1))
        .ok_or_else(|| CalcError::overflow("add"))?;
    reduce(numerator, wide_mul(d1, d2), "add")
}

/// Difference of two fractions.
///
/// # Formula
/// n1/d1 − n2/d2 = (n1·d2 − n2·d1) / (d1·d2)
pub fn subtract(n1: i64, d1: i64, n2: i64, d2: i64) -> CalcResult<(i64, i64)> {
    let numerator = wide_mul(n1, d2)
        .checked_sub(wide_mul(n2, d1))
        .ok_or_else(|| CalcError::overflow("subtract"))?;
    reduce(numerator, wide_mul(d1, d2), "subtract")
}

/// Product of two fractions.
///
/// # Formula
/// n1/d1 × n2/d2 = (n1·n2) / (d1·d2)
pub fn multiply(n1: i64, d1: i64, n2: i64, d2: i64) -> CalcResult<(i64, i64)> {
    reduce(wide_mul(n1, n2), wide_mul(d1, d2), "multiply")
}

/// Quotient of two fractions.
///
/// # Formula
/// n1/d1 ÷ n2/d2 = (n1·d2) / (d1·n2)
///
/// # Errors
/// - [`CalcError::DivisionByZero`] when d1·n2 = 0, i.e. the divisor is zero
///   or the first operand's denominator is zero
///
/// # Example
/// ```rust
/// use calc_core::equations::fraction::divide;
///
/// assert_eq!(divide(1, 2, 1, 4).unwrap(), (2, 1));
/// assert!(divide(1, 2, 0, 1).is_err());
/// ```
pub fn divide(n1: i64, d1: i64, n2: i64, d2: i64) -> CalcResult<(i64, i64)> {
    reduce(wide_mul(n1, d2), wide_mul(d1, n2), "divide")
}

#[inline]
fn wide_mul(x: i64, y: i64) -> i128 {
    i128::from(x) * i128::from(y)
}

// =============================================================================
// MIXED NUMBER DECOMPOSITION
// =============================================================================

/// Split `n/d` into `(negative, whole, remainder, |d|)`.
///
/// # Formula
/// - whole = ⌊|n| / |d|⌋
/// - remainder = |n| mod |d|
/// - negative iff exactly one of n, d is negative
///
/// The pair is not reduced first: `6/4` splits into `(false, 1, 2, 4)`.
///
/// # Errors
/// - [`CalcError::DivisionByZero`] when `d == 0`
pub fn mixed_parts(numerator: i64, denominator: i64) -> CalcResult<(bool, u64, u64, u64)> {
    if denominator == 0 {
        return Err(CalcError::division_by_zero("to_mixed_number"));
    }
    let abs_n = numerator.unsigned_abs();
    let abs_d = denominator.unsigned_abs();
    let negative = numerator != 0 && ((numerator < 0) != (denominator < 0));
    Ok((negative, abs_n / abs_d, abs_n % abs_d, abs_d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_known_values() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(18, 48), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(9, 0), 9);
    }

    #[test]
    fn test_gcd_divides_and_is_greatest() {
        for a in 0..60u64 {
            for b in 1..60u64 {
                let g = gcd(a, b);
                assert_eq!(a % g, 0, "gcd({}, {}) = {} does not divide a", a, b, g);
                assert_eq!(b % g, 0, "gcd({}, {}) = {} does not divide b", a, b, g);
                let larger = ((g + 1)..=b).find(|k| a % k == 0 && b % k == 0);
                assert!(larger.is_none(), "gcd({}, {}) = {} but {:?} also divides", a, b, g, larger);
            }
        }
    }

    #[test]
    fn test_gcd_extreme_operands() {
        assert_eq!(gcd(u64::MAX, u64::MAX), u64::MAX);
        assert_eq!(gcd(1 << 63, 1 << 40), 1 << 40);
    }

    #[test]
    fn test_simplify_sign_placement() {
        assert_eq!(simplify(-1, 2).unwrap(), (-1, 2));
        assert_eq!(simplify(1, -2).unwrap(), (-1, 2));
        assert_eq!(simplify(-3, -6).unwrap(), (1, 2));
        assert_eq!(simplify(-4, 2).unwrap(), (-2, 1));
    }

    #[test]
    fn test_simplify_is_idempotent() {
        for n in -30..=30i64 {
            for d in (-12..=12i64).filter(|d| *d != 0) {
                let (sn, sd) = simplify(n, d).unwrap();
                assert_eq!(simplify(sn, sd).unwrap(), (sn, sd), "simplify({}/{}) not idempotent", n, d);
                assert!(sd > 0);
                assert_eq!(gcd(sn.unsigned_abs(), sd.unsigned_abs()), 1);
            }
        }
    }

    #[test]
    fn test_simplify_zero_denominator() {
        assert!(matches!(simplify(3, 0), Err(CalcError::DivisionByZero { .. })));
    }

    #[test]
    fn test_simplify_min_value() {
        assert_eq!(simplify(i64::MIN, i64::MIN).unwrap(), (1, 1));
        assert!(matches!(simplify(i64::MIN, -1), Err(CalcError::Overflow { .. })));
    }

    #[test]
    fn test_add_identity() {
        for (n, d) in [(3, 4), (-5, 6), (10, -4), (0, 7)] {
            assert_eq!(add(n, d, 0, 1).unwrap(), simplify(n, d).unwrap());
        }
    }

    #[test]
    fn test_four_operations() {
        assert_eq!(add(1, 2, 1, 4).unwrap(), (3, 4));
        assert_eq!(subtract(1, 2, 1, 4).unwrap(), (1, 4));
        assert_eq!(subtract(1, 4, 1, 2).unwrap(), (-1, 4));
        assert_eq!(multiply(2, 3, 3, 4).unwrap(), (1, 2));
        assert_eq!(divide(1, 2, 1, 4).unwrap(), (2, 1));
        assert_eq!(divide(1, 2, -1, 4).unwrap(), (-2, 1));
    }

    #[test]
    fn test_divide_by_zero_fraction() {
        assert!(matches!(divide(1, 2, 0, 1), Err(CalcError::DivisionByZero { .. })));
        assert!(matches!(divide(1, 0, 1, 2), Err(CalcError::DivisionByZero { .. })));
    }

    #[test]
    fn test_raw_zero_denominator_operand() {
        assert!(matches!(add(1, 0, 1, 2), Err(CalcError::DivisionByZero { .. })));
        assert!(matches!(multiply(1, 2, 1, 0), Err(CalcError::DivisionByZero { .. })));
    }

    #[test]
    fn test_wide_intermediates() {
        // products exceed i64 but the reduced result fits
        let big = i64::MAX;
        assert_eq!(multiply(big, 2, 2, big).unwrap(), (1, 1));
        assert!(matches!(add(big, 1, big, 1), Err(CalcError::Overflow { .. })));
    }

    #[test]
    fn test_mixed_parts() {
        assert_eq!(mixed_parts(7, 2).unwrap(), (false, 3, 1, 2));
        assert_eq!(mixed_parts(-7, 2).unwrap(), (true, 3, 1, 2));
        assert_eq!(mixed_parts(7, -2).unwrap(), (true, 3, 1, 2));
        assert_eq!(mixed_parts(-7, -2).unwrap(), (false, 3, 1, 2));
        assert_eq!(mixed_parts(0, -5).unwrap(), (false, 0, 0, 5));
        assert_eq!(mixed_parts(6, 4).unwrap(), (false, 1, 2, 4));
        assert!(mixed_parts(1, 0).is_err());
    }
}
