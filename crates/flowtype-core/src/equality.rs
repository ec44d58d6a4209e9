//! The canonical type equality relation.
//!
//! Everything that needs to compare types goes through [`is_same_type`];
//! `Type`'s `PartialEq` delegates here.

use crate::invariants;
use crate::types::{StructType, Type};

/// Two structs share a name but not a shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructShapeError {
    #[error(
        "invalid struct: expected all structs named `{name}` to have the same number of fields \
         (a = {a}, b = {b})"
    )]
    FieldCount { name: String, a: String, b: String },

    #[error(
        "invalid struct: expected all structs named `{name}` to have the same field names \
         (a = {a}, b = {b})"
    )]
    FieldNames { name: String, a: String, b: String },
}

/// Compare struct identity by name and field-name sequence.
///
/// Returns `Ok(false)` for different names. Same-named structs with a
/// different field count or field names are reported as an error: the
/// producer guarantees one shape per name. Field types are not compared.
pub fn check_struct_shape(a: &StructType, b: &StructType) -> Result<bool, StructShapeError> {
    if a.name() != b.name() {
        return Ok(false);
    }

    let mismatch = |a: &StructType, b: &StructType| {
        (
            a.name().to_owned(),
            a.type_id().to_owned(),
            b.type_id().to_owned(),
        )
    };

    if a.fields().len() != b.fields().len() {
        let (name, a, b) = mismatch(a, b);
        return Err(StructShapeError::FieldCount { name, a, b });
    }

    let same_names = a
        .fields()
        .iter()
        .zip(b.fields())
        .all(|(fa, fb)| fa.name == fb.name);
    if !same_names {
        let (name, a, b) = mismatch(a, b);
        return Err(StructShapeError::FieldNames { name, a, b });
    }

    Ok(true)
}

/// Whether `a` and `b` are the same struct type.
///
/// # Panics
/// Panics if the structs share a name but differ in field count or field
/// names. That is a broken registry, not a comparison outcome.
pub fn is_same_struct_type(a: &StructType, b: &StructType) -> bool {
    check_struct_shape(a, b).unwrap_or_else(|err| invariants::struct_shape_mismatch(err))
}

/// Structural type equality: same instance, or same canonical key.
pub fn is_same_type(a: &Type, b: &Type) -> bool {
    a.is_same_instance(b) || a.type_id() == b.type_id()
}
