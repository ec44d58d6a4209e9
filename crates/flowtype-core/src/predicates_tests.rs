use crate::{
    NumberType, StringLiteralType, StringType, StructField, StructType, Type, as_image,
    as_numeric_literal, as_string_literal, int_interval, interval, is_image, is_numeric_literal,
    is_string_literal, literal,
};

fn image(name: &str, fields: &[&str]) -> Type {
    StructType::new(
        name,
        fields.iter().map(|f| StructField::new(*f, Type::Any)),
    )
    .into()
}

#[test]
fn numeric_literal_guard() {
    assert!(is_numeric_literal(&Type::from(literal(4.0))));
    assert!(!is_numeric_literal(&Type::from(interval(0.0, 4.0))));
    assert!(!is_numeric_literal(&Type::Number(NumberType::Primitive)));
    assert!(!is_numeric_literal(&Type::from(StringLiteralType::new("4"))));
    assert_eq!(as_numeric_literal(&Type::from(literal(4.0))).map(|l| l.value()), Some(4.0));
}

#[test]
fn string_literal_guard() {
    assert!(is_string_literal(&Type::from(StringLiteralType::new("rgb"))));
    assert!(!is_string_literal(&Type::String(StringType::Primitive)));
    assert!(!is_string_literal(&Type::from(literal(1.0))));
    assert_eq!(
        as_string_literal(&Type::from(StringLiteralType::new("rgb"))).map(|l| l.value()),
        Some("rgb")
    );
}

#[test]
fn image_requires_name_and_three_fields() {
    assert!(is_image(&image("Image", &["width", "height", "channels"])));
    assert!(!is_image(&image("Image", &["width", "height"])));
    assert!(!is_image(&image("Picture", &["width", "height", "channels"])));
    assert!(!is_image(&Type::Any));
}

#[test]
fn image_ignores_field_names_and_types() {
    assert!(is_image(&image("Image", &["a", "b", "c"])));

    let mixed = StructType::new(
        "Image",
        [
            StructField::new("channels", StringLiteralType::new("x")),
            StructField::new("width", Type::Never),
            StructField::new("height", int_interval(1.0, 8.0)),
        ],
    );
    assert!(is_image(&mixed.into()));
}

#[test]
fn image_view_reads_fields_positionally() {
    let ty: Type = StructType::new(
        "Image",
        [
            StructField::new("width", literal(640.0)),
            StructField::new("height", literal(480.0)),
            StructField::new("channels", literal(3.0)),
        ],
    )
    .into();

    let img = as_image(&ty).unwrap();
    assert_eq!(img.struct_type().name(), "Image");
    assert_eq!(img.width().to_string(), "640");
    assert_eq!(img.height().to_string(), "480");
    assert_eq!(img.channels().to_string(), "3");
}
