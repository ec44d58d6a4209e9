//! Partitioning type collections by underlying tag.

use crate::types::{NumberType, StringType, StructType, Type, UnionType};

/// One ordered bucket per underlying tag.
///
/// Buckets borrow from the input and keep its relative order.
#[derive(Clone, Debug, Default)]
pub struct UnderlyingGroup<'a> {
    pub never: Vec<&'a Type>,
    pub any: Vec<&'a Type>,
    pub number: Vec<&'a NumberType>,
    pub string: Vec<&'a StringType>,
    pub structs: Vec<&'a StructType>,
    pub unions: Vec<&'a UnionType>,
}

impl UnderlyingGroup<'_> {
    /// Total number of grouped types.
    pub fn len(&self) -> usize {
        self.never.len()
            + self.any.len()
            + self.number.len()
            + self.string.len()
            + self.structs.len()
            + self.unions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Place every type into the bucket matching its underlying tag.
pub fn group_by_underlying<'a, I>(types: I) -> UnderlyingGroup<'a>
where
    I: IntoIterator<Item = &'a Type>,
{
    let mut groups = UnderlyingGroup::default();
    for t in types {
        match t {
            Type::Never => groups.never.push(t),
            Type::Any => groups.any.push(t),
            Type::Number(n) => groups.number.push(n),
            Type::String(s) => groups.string.push(s),
            Type::Struct(s) => groups.structs.push(s),
            Type::Union(u) => groups.unions.push(u),
        }
    }
    groups
}
