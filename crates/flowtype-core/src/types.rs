//! Immutable type values.
//!
//! Every type exposes a canonical `type_id`: a rendering of its structural
//! content that two types share exactly when they are the same type.
//! Struct and union types compute it once at construction and share it,
//! together with their members, behind an `Arc`.
//!
//! Rendering grammar:
//! - `never`, `any`, `number`, `string`
//! - numbers in shortest form (`1`, `-2.5`, `inf`, `-inf`)
//! - string literals quoted and escaped (`"foo"`)
//! - intervals `min..max`, int intervals `int(min..max)`
//! - structs `struct Name` or `struct Name { a: <id>, b: <id> }`
//! - unions `(<id> | <id>)`, members sorted by id
//!
//! Struct and field names that are not plain identifiers are quoted and
//! escaped like string literals, so no name can forge another type's key.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{Result, TypeError, invariants};

/// Top-level discriminant of a type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Underlying {
    Never,
    Any,
    Number,
    String,
    Struct,
    Union,
}

impl Underlying {
    /// All tags, in bucket order.
    pub const ALL: [Self; 6] = [
        Self::Never,
        Self::Any,
        Self::Number,
        Self::String,
        Self::Struct,
        Self::Union,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Any => "any",
            Self::Number => "number",
            Self::String => "string",
            Self::Struct => "struct",
            Self::Union => "union",
        }
    }
}

impl fmt::Display for Underlying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained kind of a type.
///
/// `Literal` is shared by number and string literals; combine with
/// [`Type::underlying`] to tell them apart.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    Never,
    Any,
    /// The unconstrained `number` type.
    Number,
    /// The unconstrained `string` type.
    String,
    Literal,
    Interval,
    IntInterval,
    Struct,
    Union,
}

impl TypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Any => "any",
            Self::Number => "number",
            Self::String => "string",
            Self::Literal => "literal",
            Self::Interval => "interval",
            Self::IntInterval => "int-interval",
            Self::Struct => "struct",
            Self::Union => "union",
        }
    }
}

/// A structural type.
///
/// Equality, hashing and `Display` all go through the canonical `type_id`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "crate::raw::RawType", into = "crate::raw::RawType")]
pub enum Type {
    /// The empty type.
    Never,
    /// The type of every value.
    Any,
    Number(NumberType),
    String(StringType),
    Struct(StructType),
    Union(UnionType),
}

impl Type {
    pub fn underlying(&self) -> Underlying {
        match self {
            Self::Never => Underlying::Never,
            Self::Any => Underlying::Any,
            Self::Number(_) => Underlying::Number,
            Self::String(_) => Underlying::String,
            Self::Struct(_) => Underlying::Struct,
            Self::Union(_) => Underlying::Union,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Never => TypeKind::Never,
            Self::Any => TypeKind::Any,
            Self::Number(n) => n.kind(),
            Self::String(s) => s.kind(),
            Self::Struct(_) => TypeKind::Struct,
            Self::Union(_) => TypeKind::Union,
        }
    }

    /// Canonical structural-identity key.
    ///
    /// Borrowed for compound types (computed at construction), rendered on
    /// demand for scalar leaves.
    pub fn type_id(&self) -> Cow<'_, str> {
        match self {
            Self::Never => Cow::Borrowed("never"),
            Self::Any => Cow::Borrowed("any"),
            Self::Number(n) => n.type_id(),
            Self::String(s) => s.type_id(),
            Self::Struct(s) => Cow::Borrowed(s.type_id()),
            Self::Union(u) => Cow::Borrowed(u.type_id()),
        }
    }

    pub fn as_number(&self) -> Option<&NumberType> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&StringType> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            Self::Union(u) => Some(u),
            _ => None,
        }
    }

    /// Whether both values share the same allocation (or are the same scalar
    /// value behind the same reference).
    pub(crate) fn is_same_instance(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self, other) {
            (Self::Struct(a), Self::Struct(b)) => a.is_same_instance(b),
            (Self::Union(a), Self::Union(b)) => a.is_same_instance(b),
            _ => false,
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        crate::equality::is_same_type(self, other)
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id().hash(state);
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_id())
    }
}

// ============================================================================
// Numbers
// ============================================================================

/// Number types. A single value is always a `Literal`, never a zero-width range.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NumberType {
    /// Any number.
    Primitive,
    Literal(NumericLiteralType),
    Interval(IntervalType),
    IntInterval(IntIntervalType),
}

impl NumberType {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Primitive => TypeKind::Number,
            Self::Literal(_) => TypeKind::Literal,
            Self::Interval(_) => TypeKind::Interval,
            Self::IntInterval(_) => TypeKind::IntInterval,
        }
    }

    pub fn type_id(&self) -> Cow<'static, str> {
        match self {
            Self::Primitive => Cow::Borrowed("number"),
            Self::Literal(l) => Cow::Owned(l.value.to_string()),
            Self::Interval(i) => Cow::Owned(format!("{}..{}", i.min, i.max)),
            Self::IntInterval(i) => Cow::Owned(format!("int({}..{})", i.min, i.max)),
        }
    }
}

/// Exactly one number. `-0` is stored as `0`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NumericLiteralType {
    value: f64,
}

impl NumericLiteralType {
    pub fn try_new(value: f64) -> Result<Self> {
        Ok(Self {
            value: normalize_number(value)?,
        })
    }

    /// # Panics
    /// Panics if `value` is NaN.
    pub fn new(value: f64) -> Self {
        Self::try_new(value).unwrap_or_else(|err| invariants::invalid_type(err))
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Continuous range `[min, max]` with `min < max`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct IntervalType {
    min: f64,
    max: f64,
}

impl IntervalType {
    pub fn try_new(min: f64, max: f64) -> Result<Self> {
        let (min, max) = strict_bounds(min, max)?;
        Ok(Self { min, max })
    }

    /// # Panics
    /// Panics unless `min < max` and neither bound is NaN.
    pub fn new(min: f64, max: f64) -> Self {
        Self::try_new(min, max).unwrap_or_else(|err| invariants::invalid_type(err))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Integer-stepped range `[min, max]` with `min < max`.
///
/// Bounds are integers or infinite.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct IntIntervalType {
    min: f64,
    max: f64,
}

impl IntIntervalType {
    pub fn try_new(min: f64, max: f64) -> Result<Self> {
        let (min, max) = strict_bounds(min, max)?;
        if !is_int_bound(min) || !is_int_bound(max) {
            return Err(TypeError::NonIntegerBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// # Panics
    /// Panics unless `min < max` and both bounds are integers or infinite.
    pub fn new(min: f64, max: f64) -> Self {
        Self::try_new(min, max).unwrap_or_else(|err| invariants::invalid_type(err))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

fn normalize_number(value: f64) -> Result<f64> {
    if value.is_nan() {
        return Err(TypeError::NotANumber);
    }
    // Collapse -0 so both zeros render the same key.
    Ok(if value == 0.0 { 0.0 } else { value })
}

fn strict_bounds(min: f64, max: f64) -> Result<(f64, f64)> {
    let min = normalize_number(min)?;
    let max = normalize_number(max)?;
    if min >= max {
        return Err(TypeError::InvalidBounds { min, max });
    }
    Ok((min, max))
}

fn is_int_bound(n: f64) -> bool {
    n.is_infinite() || n.fract() == 0.0
}

// ============================================================================
// Strings
// ============================================================================

#[derive(Clone, PartialEq, Debug)]
pub enum StringType {
    /// Any string.
    Primitive,
    Literal(StringLiteralType),
}

impl StringType {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Primitive => TypeKind::String,
            Self::Literal(_) => TypeKind::Literal,
        }
    }

    pub fn type_id(&self) -> Cow<'static, str> {
        match self {
            Self::Primitive => Cow::Borrowed("string"),
            Self::Literal(l) => Cow::Owned(format!("{:?}", &*l.value)),
        }
    }
}

/// Exactly one string.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct StringLiteralType {
    value: Arc<str>,
}

impl StringLiteralType {
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

// ============================================================================
// Structs
// ============================================================================

/// A named field of a struct type.
#[derive(Clone, Debug)]
pub struct StructField {
    pub name: String,
    pub ty: Type,
}

impl StructField {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A named record with ordered fields.
///
/// Cloning is cheap: all clones share one allocation.
#[derive(Clone, Debug)]
pub struct StructType {
    inner: Arc<StructInner>,
}

#[derive(Debug)]
struct StructInner {
    name: String,
    fields: Vec<StructField>,
    id: String,
}

impl StructType {
    pub fn new(name: impl Into<String>, fields: impl IntoIterator<Item = StructField>) -> Self {
        let name = name.into();
        let fields: Vec<StructField> = fields.into_iter().collect();

        let mut id = String::from("struct ");
        push_name(&mut id, &name);
        if !fields.is_empty() {
            id.push_str(" { ");
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    id.push_str(", ");
                }
                push_name(&mut id, &field.name);
                id.push_str(": ");
                id.push_str(&field.ty.type_id());
            }
            id.push_str(" }");
        }

        Self {
            inner: Arc::new(StructInner { name, fields, id }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn fields(&self) -> &[StructField] {
        &self.inner.fields
    }

    pub fn field(&self, name: &str) -> Option<&StructField> {
        self.inner.fields.iter().find(|f| f.name == name)
    }

    pub fn type_id(&self) -> &str {
        &self.inner.id
    }

    pub fn is_same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

fn push_name(key: &mut String, name: &str) {
    if is_plain_identifier(name) {
        key.push_str(name);
    } else {
        key.push_str(&format!("{name:?}"));
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ============================================================================
// Unions
// ============================================================================

/// An unordered set of member types.
///
/// Construction flattens nested unions, orders members by `type_id` and drops
/// members whose key is already present, so equal sets share one key.
/// Further simplification (absorbing subsumed members, collapsing single
/// members) belongs to the caller.
#[derive(Clone, Debug)]
pub struct UnionType {
    inner: Arc<UnionInner>,
}

#[derive(Debug)]
struct UnionInner {
    items: Vec<Type>,
    id: String,
}

impl UnionType {
    pub fn new(items: impl IntoIterator<Item = Type>) -> Self {
        let mut keyed: Vec<(String, Type)> = Vec::new();
        for item in items {
            match item {
                Type::Union(nested) => keyed.extend(
                    nested
                        .items()
                        .iter()
                        .map(|t| (t.type_id().into_owned(), t.clone())),
                ),
                other => keyed.push((other.type_id().into_owned(), other)),
            }
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.dedup_by(|a, b| a.0 == b.0);

        let body = keyed
            .iter()
            .map(|(key, _)| key.as_str())
            .collect::<Vec<_>>()
            .join(" | ");
        // Bracketed so a one-member union never shares its member's key.
        let id = format!("({body})");
        let items = keyed.into_iter().map(|(_, t)| t).collect();

        Self {
            inner: Arc::new(UnionInner { items, id }),
        }
    }

    /// Members ordered by `type_id`.
    pub fn items(&self) -> &[Type] {
        &self.inner.items
    }

    pub fn type_id(&self) -> &str {
        &self.inner.id
    }

    pub fn is_same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<NumberType> for Type {
    fn from(n: NumberType) -> Self {
        Self::Number(n)
    }
}

impl From<NumericLiteralType> for Type {
    fn from(l: NumericLiteralType) -> Self {
        Self::Number(NumberType::Literal(l))
    }
}

impl From<IntervalType> for Type {
    fn from(i: IntervalType) -> Self {
        Self::Number(NumberType::Interval(i))
    }
}

impl From<IntIntervalType> for Type {
    fn from(i: IntIntervalType) -> Self {
        Self::Number(NumberType::IntInterval(i))
    }
}

impl From<StringType> for Type {
    fn from(s: StringType) -> Self {
        Self::String(s)
    }
}

impl From<StringLiteralType> for Type {
    fn from(l: StringLiteralType) -> Self {
        Self::String(StringType::Literal(l))
    }
}

impl From<StructType> for Type {
    fn from(s: StructType) -> Self {
        Self::Struct(s)
    }
}

impl From<UnionType> for Type {
    fn from(u: UnionType) -> Self {
        Self::Union(u)
    }
}
