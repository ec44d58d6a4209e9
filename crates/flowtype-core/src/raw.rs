//! Serde representation of types.
//!
//! `Type` (de)serializes through `RawType`, a plain tagged tree. Going back
//! to `Type` runs the regular constructors, so keys are recomputed and bad
//! bounds surface as `TypeError` instead of a panic. JSON has no infinity:
//! infinite interval bounds are written as absent (`null`) and infinite
//! literal values as the strings `"inf"` and `"-inf"`.

use serde::{Deserialize, Serialize};

use crate::TypeError;
use crate::types::{
    IntIntervalType, IntervalType, NumberType, NumericLiteralType, StringLiteralType, StringType,
    StructField, StructType, Type, UnionType,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub(crate) enum RawType {
    Never,
    Any,
    Number,
    String,
    NumberLiteral {
        value: RawNumber,
    },
    StringLiteral {
        value: String,
    },
    Interval {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
    IntInterval {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
    Struct {
        name: String,
        #[serde(default)]
        fields: Vec<RawField>,
    },
    Union {
        items: Vec<RawType>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawField {
    name: String,
    #[serde(rename = "type")]
    ty: RawType,
}

/// A literal value: a JSON number, or `"inf"` / `"-inf"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawNumber {
    Finite(f64),
    Infinite(Infinity),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum Infinity {
    #[serde(rename = "inf")]
    Positive,
    #[serde(rename = "-inf")]
    Negative,
}

impl From<f64> for RawNumber {
    fn from(n: f64) -> Self {
        if n == f64::INFINITY {
            Self::Infinite(Infinity::Positive)
        } else if n == f64::NEG_INFINITY {
            Self::Infinite(Infinity::Negative)
        } else {
            Self::Finite(n)
        }
    }
}

impl From<RawNumber> for f64 {
    fn from(n: RawNumber) -> Self {
        match n {
            RawNumber::Finite(n) => n,
            RawNumber::Infinite(Infinity::Positive) => f64::INFINITY,
            RawNumber::Infinite(Infinity::Negative) => f64::NEG_INFINITY,
        }
    }
}

fn lower_bound(n: f64) -> Option<f64> {
    (n != f64::NEG_INFINITY).then_some(n)
}

fn upper_bound(n: f64) -> Option<f64> {
    (n != f64::INFINITY).then_some(n)
}

impl From<Type> for RawType {
    fn from(t: Type) -> Self {
        Self::from(&t)
    }
}

impl From<&Type> for RawType {
    fn from(t: &Type) -> Self {
        match t {
            Type::Never => Self::Never,
            Type::Any => Self::Any,
            Type::Number(NumberType::Primitive) => Self::Number,
            Type::Number(NumberType::Literal(l)) => Self::NumberLiteral {
                value: l.value().into(),
            },
            Type::Number(NumberType::Interval(i)) => Self::Interval {
                min: lower_bound(i.min()),
                max: upper_bound(i.max()),
            },
            Type::Number(NumberType::IntInterval(i)) => Self::IntInterval {
                min: lower_bound(i.min()),
                max: upper_bound(i.max()),
            },
            Type::String(StringType::Primitive) => Self::String,
            Type::String(StringType::Literal(l)) => Self::StringLiteral {
                value: l.value().to_owned(),
            },
            Type::Struct(s) => Self::Struct {
                name: s.name().to_owned(),
                fields: s
                    .fields()
                    .iter()
                    .map(|f| RawField {
                        name: f.name.clone(),
                        ty: (&f.ty).into(),
                    })
                    .collect(),
            },
            Type::Union(u) => Self::Union {
                items: u.items().iter().map(Into::into).collect(),
            },
        }
    }
}

impl TryFrom<RawType> for Type {
    type Error = TypeError;

    fn try_from(raw: RawType) -> Result<Self, Self::Error> {
        let min = |b: Option<f64>| b.unwrap_or(f64::NEG_INFINITY);
        let max = |b: Option<f64>| b.unwrap_or(f64::INFINITY);

        Ok(match raw {
            RawType::Never => Type::Never,
            RawType::Any => Type::Any,
            RawType::Number => Type::Number(NumberType::Primitive),
            RawType::String => Type::String(StringType::Primitive),
            RawType::NumberLiteral { value } => NumericLiteralType::try_new(value.into())?.into(),
            RawType::StringLiteral { value } => StringLiteralType::new(value).into(),
            RawType::Interval { min: lo, max: hi } => {
                IntervalType::try_new(min(lo), max(hi))?.into()
            }
            RawType::IntInterval { min: lo, max: hi } => {
                IntIntervalType::try_new(min(lo), max(hi))?.into()
            }
            RawType::Struct { name, fields } => {
                let fields = fields
                    .into_iter()
                    .map(|f| Ok(StructField::new(f.name, Type::try_from(f.ty)?)))
                    .collect::<Result<Vec<_>, TypeError>>()?;
                StructType::new(name, fields).into()
            }
            RawType::Union { items } => {
                let items = items
                    .into_iter()
                    .map(Type::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                UnionType::new(items).into()
            }
        })
    }
}
