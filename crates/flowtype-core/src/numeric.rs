//! Normalized construction of numeric types.
//!
//! A single point is always a literal, so "exactly this number" has one shape
//! downstream.

use crate::types::{IntIntervalType, IntervalType, NumberType, NumericLiteralType};

/// A literal holding exactly `n`.
///
/// # Panics
/// Panics if `n` is NaN.
pub fn literal(n: f64) -> NumericLiteralType {
    NumericLiteralType::new(n)
}

/// The continuous range `[min, max]`, or `literal(min)` when the bounds meet.
///
/// # Panics
/// Panics if `min > max` or either bound is NaN.
pub fn interval(min: f64, max: f64) -> NumberType {
    if min == max {
        return NumberType::Literal(literal(min));
    }
    NumberType::Interval(IntervalType::new(min, max))
}

/// The integer range `[min, max]`, or `literal(min)` when the bounds meet.
///
/// # Panics
/// Panics if `min > max`, either bound is NaN, or a finite bound is not an
/// integer.
pub fn int_interval(min: f64, max: f64) -> NumberType {
    if min == max {
        return NumberType::Literal(literal(min));
    }
    NumberType::IntInterval(IntIntervalType::new(min, max))
}
