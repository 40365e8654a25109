use super::*;

#[test]
fn undeclared_props_fall_back_to_neutral() {
    let s = Style::new().opacity(0.0);
    assert_eq!(s.number(Prop::Opacity), 0.0);
    assert_eq!(s.number(Prop::Scale), 1.0);
    assert_eq!(s.get(Prop::Visible), PropValue::Toggle(true));
    assert_eq!(s.declared(Prop::Y), None);
}

#[test]
fn merged_overlays_right_hand_side() {
    let base = Style::new().opacity(0.5).y(10.0);
    let out = base.merged(&Style::new().y(-60.0).blur(10.0));
    assert_eq!(out.number(Prop::Opacity), 0.5);
    assert_eq!(out.number(Prop::Y), -60.0);
    assert_eq!(out.number(Prop::Blur), 10.0);
    assert_eq!(out.len(), 3);
}

#[test]
fn toggles_stay_on_while_transitioning() {
    let off = PropValue::Toggle(false);
    let on = PropValue::Toggle(true);
    assert_eq!(PropValue::lerp(&off, &on, 0.0), off);
    assert_eq!(PropValue::lerp(&off, &on, 0.3), on);
    assert_eq!(PropValue::lerp(&on, &off, 0.3), on);
    assert_eq!(PropValue::lerp(&on, &off, 1.0), off);
}

#[test]
fn style_serializes_with_kebab_keys() {
    let s = Style::new().rotate_z(-4.0).clip_bottom(100.0);
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(json, r#"{"rotate-z":-4.0,"clip-bottom":100.0}"#);
}
