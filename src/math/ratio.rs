//! Integer ratio helpers used for tile aspects and grid shapes

use num_traits::PrimInt;

/// Greatest common divisor by Euclid's algorithm
///
/// Intended for non-negative inputs. `gcd(0, 0)` is zero.
pub fn gcd<T: PrimInt>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while b != T::zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Reduce `numerator:denominator` to lowest terms
///
/// Returns `None` when either term is zero.
pub fn reduce<T: PrimInt>(numerator: T, denominator: T) -> Option<(T, T)> {
    if numerator == T::zero() || denominator == T::zero() {
        return None;
    }
    let divisor = gcd(numerator, denominator);
    Some((numerator / divisor, denominator / divisor))
}

/// Width-to-height ratio of a grid with the given column and row counts
pub fn grid_ratio(cols: u32, rows: u32) -> f64 {
    f64::from(cols) / f64::from(rows)
}
