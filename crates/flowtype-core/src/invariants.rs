//! Invariant checks excluded from coverage reports.
//!
//! Everything here aborts the current operation: the values involved were
//! produced by a type registry that broke its own contract.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::TypeError;
use crate::equality::StructShapeError;

pub(crate) fn invalid_type(err: TypeError) -> ! {
    tracing::error!(error = %err, "type invariant violated");
    panic!("Type: {err} (callers must pass well-formed bounds)")
}

pub(crate) fn struct_shape_mismatch(err: StructShapeError) -> ! {
    tracing::error!(error = %err, "struct shape invariant violated");
    panic!("{err} (the type registry must keep one shape per struct name)")
}
