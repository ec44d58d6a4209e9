//! Narrow capability guards.

use crate::types::{
    NumberType, NumericLiteralType, StringLiteralType, StringType, StructField, StructType, Type,
};

/// Whether `t` is a number literal.
pub fn is_numeric_literal(t: &Type) -> bool {
    as_numeric_literal(t).is_some()
}

/// Whether `t` is a string literal.
pub fn is_string_literal(t: &Type) -> bool {
    as_string_literal(t).is_some()
}

/// Narrow `t` to a number literal.
pub fn as_numeric_literal(t: &Type) -> Option<&NumericLiteralType> {
    match t {
        Type::Number(NumberType::Literal(l)) => Some(l),
        _ => None,
    }
}

/// Narrow `t` to a string literal.
pub fn as_string_literal(t: &Type) -> Option<&StringLiteralType> {
    match t {
        Type::String(StringType::Literal(l)) => Some(l),
        _ => None,
    }
}

/// Whether `t` is a struct named `Image` with exactly three fields.
///
/// Only the name and the field count are checked. Field names, their order
/// and their types are not.
pub fn is_image(t: &Type) -> bool {
    as_image(t).is_some()
}

/// View an `Image` struct as its three dimension fields.
pub fn as_image(t: &Type) -> Option<Image<'_>> {
    let Type::Struct(s) = t else {
        return None;
    };
    match s.fields() {
        [width, height, channels] if s.name() == "Image" => Some(Image {
            ty: s,
            width,
            height,
            channels,
        }),
        _ => None,
    }
}

/// An `Image` struct, read positionally as width, height and channel count.
#[derive(Clone, Copy, Debug)]
pub struct Image<'a> {
    ty: &'a StructType,
    width: &'a StructField,
    height: &'a StructField,
    channels: &'a StructField,
}

impl<'a> Image<'a> {
    pub fn struct_type(&self) -> &'a StructType {
        self.ty
    }

    pub fn width(&self) -> &'a Type {
        &self.width.ty
    }

    pub fn height(&self) -> &'a Type {
        &self.height.ty
    }

    pub fn channels(&self) -> &'a Type {
        &self.channels.ty
    }
}
