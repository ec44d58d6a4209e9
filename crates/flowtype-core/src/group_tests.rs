use crate::{
    StringLiteralType, StringType, StructType, Type, UnionType, group_by_underlying, interval,
    literal,
};

fn sample() -> Vec<Type> {
    vec![
        Type::from(literal(1.0)),
        Type::String(StringType::Primitive),
        Type::Never,
        Type::from(StructType::new("A", [])),
        Type::from(interval(0.0, 2.0)),
        Type::Any,
        Type::from(UnionType::new([Type::from(literal(1.0)), Type::Any])),
        Type::from(StringLiteralType::new("x")),
        Type::from(StructType::new("B", [])),
    ]
}

#[test]
fn every_type_lands_in_its_bucket() {
    let types = sample();
    let groups = group_by_underlying(&types);

    assert_eq!(groups.len(), types.len());
    assert_eq!(groups.never.len(), 1);
    assert_eq!(groups.any.len(), 1);
    assert_eq!(groups.number.len(), 2);
    assert_eq!(groups.string.len(), 2);
    assert_eq!(groups.structs.len(), 2);
    assert_eq!(groups.unions.len(), 1);
}

#[test]
fn buckets_preserve_input_order() {
    let types = sample();
    let groups = group_by_underlying(&types);

    let numbers: Vec<_> = groups.number.iter().map(|n| n.type_id()).collect();
    assert_eq!(numbers, ["1", "0..2"]);

    let strings: Vec<_> = groups.string.iter().map(|s| s.type_id()).collect();
    assert_eq!(strings, ["string", "\"x\""]);

    let structs: Vec<_> = groups.structs.iter().map(|s| s.name()).collect();
    assert_eq!(structs, ["A", "B"]);
}

#[test]
fn empty_input_yields_empty_buckets() {
    let types: Vec<Type> = Vec::new();
    let groups = group_by_underlying(&types);
    assert!(groups.is_empty());
    assert!(groups.never.is_empty());
    assert!(groups.unions.is_empty());
}
