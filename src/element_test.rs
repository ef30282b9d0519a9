use super::*;

#[test]
fn small_classes() {
    assert!(PositionClass::SleeveLeft.is_small());
    assert!(PositionClass::SleeveRight.is_small());
    assert!(PositionClass::Pants.is_small());
}

#[test]
fn large_classes() {
    assert!(!PositionClass::ChestLeft.is_small());
    assert!(!PositionClass::ChestRight.is_small());
    assert!(!PositionClass::ChestCenter.is_small());
    assert!(!PositionClass::Back.is_small());
}

#[test]
fn deserializes_host_json() {
    let el: DecorationElement =
        serde_json::from_str(r#"{"id":"logo-1","positionClass":"sleeve-left"}"#).unwrap();
    assert_eq!(el, DecorationElement::new("logo-1", PositionClass::SleeveLeft));
}

#[test]
fn deserializes_snake_case_field_alias() {
    let el: DecorationElement =
        serde_json::from_str(r#"{"id":"x","position_class":"chest-center"}"#).unwrap();
    assert_eq!(el.position_class, PositionClass::ChestCenter);
}

#[test]
fn serializes_kebab_case_class() {
    let json = serde_json::to_value(DecorationElement::new("a", PositionClass::ChestLeft)).unwrap();
    assert_eq!(json["positionClass"], "chest-left");
}
