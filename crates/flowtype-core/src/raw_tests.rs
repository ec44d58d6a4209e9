use crate::{
    StringLiteralType, StructField, StructType, Type, TypeError, UnionType, int_interval,
    interval, literal,
};

#[test]
fn deserialize_struct_with_open_bound() {
    let json = r#"{
        "type": "struct",
        "name": "Image",
        "fields": [
            { "name": "width", "type": { "type": "int-interval", "min": 1 } },
            { "name": "height", "type": { "type": "int-interval", "min": 1 } },
            { "name": "channels", "type": { "type": "number-literal", "value": 3 } }
        ]
    }"#;

    let ty: Type = serde_json::from_str(json).unwrap();
    assert_eq!(
        ty.type_id(),
        "struct Image { width: int(1..inf), height: int(1..inf), channels: 3 }"
    );
}

#[test]
fn serialize_writes_tagged_tree() {
    let ty: Type = UnionType::new([
        Type::from(StringLiteralType::new("a")),
        Type::from(interval(0.0, f64::INFINITY)),
    ])
    .into();

    let json = serde_json::to_string(&ty).unwrap();
    insta::assert_snapshot!(
        json,
        @r#"{"type":"union","items":[{"type":"string-literal","value":"a"},{"type":"interval","min":0.0,"max":null}]}"#
    );
}

#[test]
fn serde_preserves_identity() {
    let ty: Type = StructType::new(
        "Pair",
        [
            StructField::new("a", int_interval(0.0, 255.0)),
            StructField::new("b", literal(-1.5)),
        ],
    )
    .into();

    let json = serde_json::to_value(&ty).unwrap();
    let back: Type = serde_json::from_value(json).unwrap();
    assert_eq!(back, ty);
}

#[test]
fn bad_bounds_are_reported_not_panicked() {
    let json = r#"{ "type": "interval", "min": 5, "max": 1 }"#;
    let err = serde_json::from_str::<Type>(json).unwrap_err();
    assert!(err.to_string().contains("invalid interval bounds"));

    let raw: crate::raw::RawType = serde_json::from_str(json).unwrap();
    let err = Type::try_from(raw).unwrap_err();
    assert_eq!(err, TypeError::InvalidBounds { min: 5.0, max: 1.0 });
}

#[test]
fn infinite_literals_survive_a_round_trip() {
    // A degenerate unbounded interval collapses to an infinite literal.
    let cases = [
        Type::from(int_interval(f64::INFINITY, f64::INFINITY)),
        Type::from(literal(f64::NEG_INFINITY)),
    ];
    for ty in cases {
        let json = serde_json::to_string(&ty).unwrap();
        let back: Type = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ty, "{json}");
    }

    let json = serde_json::to_string(&Type::from(literal(f64::INFINITY))).unwrap();
    insta::assert_snapshot!(json, @r#"{"type":"number-literal","value":"inf"}"#);
}

#[test]
fn infinite_literals_read_from_strings() {
    let json = r#"{ "type": "number-literal", "value": "-inf" }"#;
    let ty: Type = serde_json::from_str(json).unwrap();
    assert_eq!(ty, Type::from(literal(f64::NEG_INFINITY)));

    let err = serde_json::from_str::<Type>(r#"{ "type": "number-literal", "value": "nan" }"#);
    assert!(err.is_err());
}
