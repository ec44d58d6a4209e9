use crate::{
    NumberType, StringType, StructField, StructShapeError, StructType, Type, check_struct_shape,
    int_interval, is_same_struct_type, is_same_type, literal,
};

fn point(x: Type, y: Type) -> StructType {
    StructType::new("Point", [StructField::new("x", x), StructField::new("y", y)])
}

#[test]
fn same_name_and_field_names_are_same_struct() {
    let a = point(Type::from(literal(1.0)), Type::from(literal(2.0)));
    let b = point(Type::Number(NumberType::Primitive), Type::Any);
    assert!(is_same_struct_type(&a, &b));
}

#[test]
fn different_names_are_different_structs() {
    let a = point(Type::Any, Type::Any);
    let b = StructType::new("Size", [StructField::new("w", Type::Any)]);
    assert!(!is_same_struct_type(&a, &b));
}

#[test]
#[should_panic(expected = "same number of fields")]
fn same_name_with_different_field_count_panics() {
    let a = point(Type::Any, Type::Any);
    let b = StructType::new("Point", [StructField::new("x", Type::Any)]);
    is_same_struct_type(&a, &b);
}

#[test]
#[should_panic(expected = "same field names")]
fn same_name_with_different_field_names_panics() {
    let a = point(Type::Any, Type::Any);
    let b = StructType::new(
        "Point",
        [StructField::new("y", Type::Any), StructField::new("x", Type::Any)],
    );
    is_same_struct_type(&a, &b);
}

#[test]
fn shape_check_reports_mismatch_without_panicking() {
    let a = point(Type::Any, Type::Any);
    let b = StructType::new("Point", [StructField::new("x", Type::Any)]);
    let err = check_struct_shape(&a, &b).unwrap_err();
    assert!(matches!(err, StructShapeError::FieldCount { ref name, .. } if name == "Point"));
    insta::assert_snapshot!(
        err,
        @"invalid struct: expected all structs named `Point` to have the same number of fields (a = struct Point { x: any, y: any }, b = struct Point { x: any })"
    );
}

#[test]
fn identical_instance_is_same_type() {
    let t = Type::from(point(Type::Any, Type::Any));
    assert!(is_same_type(&t, &t));
    assert!(is_same_type(&t, &t.clone()));
}

#[test]
fn equal_keys_are_same_type() {
    let a = Type::from(point(Type::from(int_interval(0.0, 9.0)), Type::Any));
    let b = Type::from(point(Type::from(int_interval(0.0, 9.0)), Type::Any));
    assert!(is_same_type(&a, &b));
}

#[test]
fn different_keys_are_different_types() {
    let a = Type::from(point(Type::from(literal(1.0)), Type::Any));
    let b = Type::from(point(Type::from(literal(2.0)), Type::Any));
    assert!(!is_same_type(&a, &b));
    assert!(!is_same_type(
        &Type::String(StringType::Primitive),
        &Type::Number(NumberType::Primitive)
    ));
}
