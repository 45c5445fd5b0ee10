use productcodes::errors::AppError;
use productcodes::models::ProductCode;
use std::collections::HashSet;

#[test]
fn test_accessors_return_constructed_values() {
    let pc = ProductCode::new("SW", 'L', "Software");

    assert_eq!(pc.code(), "SW");
    assert_eq!(pc.discount_code(), 'L');
    assert_eq!(pc.description(), "Software");
}

#[test]
fn test_accessors_with_unicode_values() {
    let pc = ProductCode::new("ÄÖ", 'ж', "Программное обеспечение");

    assert_eq!(pc.code(), "ÄÖ");
    assert_eq!(pc.discount_code(), 'ж');
    assert_eq!(pc.discount_code_str(), "ж");
    assert_eq!(pc.description(), "Программное обеспечение");
}

#[test]
fn test_setters_replace_values() {
    let mut pc = ProductCode::new("SW", 'L', "Software");
    pc.set_code("HW");
    pc.set_discount_code('M');
    pc.set_description("Hardware");

    assert_eq!(pc.code(), "HW");
    assert_eq!(pc.discount_code(), 'M');
    assert_eq!(pc.description(), "Hardware");
}

#[test]
fn test_equality_is_reflexive() {
    let pc = ProductCode::new("SW", 'L', "Software");
    assert_eq!(pc, pc);
    assert_eq!(pc, pc.clone());
}

#[test]
fn test_equality_ignores_discount_code() {
    let a = ProductCode::new("SW", 'L', "Software");
    let b = ProductCode::new("SW", 'H', "Software");
    assert_eq!(a, b);
}

#[test]
fn test_equality_uses_code_and_description() {
    let base = ProductCode::new("SW", 'L', "Software");
    assert_ne!(base, ProductCode::new("HW", 'L', "Software"));
    assert_ne!(base, ProductCode::new("SW", 'L', "Hardware"));
}

#[test]
fn test_hash_consistent_with_equality() {
    let mut set = HashSet::new();
    set.insert(ProductCode::new("SW", 'L', "Software"));
    set.insert(ProductCode::new("SW", 'H', "Software"));
    set.insert(ProductCode::new("HW", 'L', "Hardware"));

    assert_eq!(set.len(), 2, "records equal by code+description must collapse");
}

#[test]
fn test_display_embeds_all_fields() {
    let pc = ProductCode::new("SW", 'L', "Software");
    assert_eq!(
        pc.to_string(),
        "Product code: SW, discount code: L, description: Software."
    );
}

#[test]
fn test_parse_discount_code() {
    assert_eq!(ProductCode::parse_discount_code("M").unwrap(), 'M');
    assert_eq!(ProductCode::parse_discount_code("ж").unwrap(), 'ж');

    for bad in ["", "MM", "ab"] {
        match ProductCode::parse_discount_code(bad) {
            Err(AppError::InvalidDiscountCode(s)) => assert_eq!(s, bad),
            other => panic!("expected InvalidDiscountCode for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_serializes_with_field_names() {
    let pc = ProductCode::new("SW", 'L', "Software");
    let json = serde_json::to_value(&pc).unwrap();

    assert_eq!(json["code"], "SW");
    assert_eq!(json["discount_code"], "L");
    assert_eq!(json["description"], "Software");
}
