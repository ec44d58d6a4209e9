#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Structural type model for flowtype.
//!
//! Types describe the values flowing between nodes: numbers (literals,
//! continuous and integer intervals), strings, structs and unions. This crate
//! provides:
//! - `types` - the immutable type values and their canonical `type_id` keys
//! - `numeric` - normalized construction of numeric types
//! - `group` - partitioning type collections by underlying tag
//! - `equality` - the canonical type equality relation
//! - `predicates` - narrow capability guards (literals, `Image` structs)

pub mod equality;
pub mod group;
pub mod numeric;
pub mod predicates;
pub mod types;

mod invariants;
mod raw;

#[cfg(test)]
mod equality_tests;
#[cfg(test)]
mod group_tests;
#[cfg(test)]
mod predicates_tests;
#[cfg(test)]
mod raw_tests;

pub use equality::{StructShapeError, check_struct_shape, is_same_struct_type, is_same_type};
pub use group::{UnderlyingGroup, group_by_underlying};
pub use numeric::{int_interval, interval, literal};
pub use predicates::{
    Image, as_image, as_numeric_literal, as_string_literal, is_image, is_numeric_literal,
    is_string_literal,
};
pub use types::{
    IntIntervalType, IntervalType, NumberType, NumericLiteralType, StringLiteralType, StringType,
    StructField, StructType, Type, TypeKind, Underlying, UnionType,
};

/// Errors raised when a type cannot be constructed from the given parts.
///
/// The infallible constructors treat these as invariant violations and panic;
/// the `try_*` constructors and deserialization report them instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("numeric types cannot hold NaN")]
    NotANumber,

    #[error("invalid interval bounds: expected {min} < {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("int interval bounds must be integers or infinite, got {min}..{max}")]
    NonIntegerBounds { min: f64, max: f64 },
}

/// Result type for fallible type construction.
pub type Result<T> = std::result::Result<T, TypeError>;
