use super::*;
use crate::foundation::core::Rgba8;

fn stage() -> Stage {
    Stage::new(Viewport::new(1440, 900).unwrap())
}

#[test]
fn selectors_parse_and_display() {
    assert_eq!(".reveal".parse::<Selector>().unwrap(), Selector::class("reveal"));
    assert_eq!("#hero".parse::<Selector>().unwrap(), Selector::name("hero"));
    assert_eq!("hero".parse::<Selector>().unwrap(), Selector::name("hero"));
    assert!(".".parse::<Selector>().is_err());
    assert_eq!(Selector::class("phi-line").to_string(), ".phi-line");
    assert_eq!(Selector::from(""), Selector::Name(String::new()));
}

#[test]
fn resolve_returns_document_order() {
    let mut s = stage();
    let a = s.insert(ElementSpec::new("a").class("line"));
    let _ = s.insert(ElementSpec::new("b"));
    let c = s.insert(ElementSpec::new("c").class("line"));

    assert_eq!(s.resolve(&Selector::class("line")), vec![a, c]);
    assert!(s.resolve(&Selector::class("missing")).is_empty());
    assert_eq!(s.find("c"), Some(c));
}

#[test]
fn values_fall_back_to_base_then_neutral() {
    let mut s = stage();
    let id = s.insert(ElementSpec::new("a").base(Style::new().opacity(0.3)));
    assert_eq!(s.number(id, Prop::Opacity), 0.3);
    assert_eq!(s.number(id, Prop::Scale), 1.0);

    s.apply(id, Prop::Opacity, PropValue::Number(0.9));
    assert_eq!(s.number(id, Prop::Opacity), 0.9);
    assert_eq!(s.base_value(id, Prop::Opacity), PropValue::Number(0.3));

    s.set_pinned(id, true);
    s.reset(id);
    assert_eq!(s.number(id, Prop::Opacity), 0.3);
    assert!(!s.is_pinned(id));
}

#[test]
fn writes_to_removed_elements_are_dropped() {
    let mut s = stage();
    let id = s.insert(ElementSpec::new("gone"));
    assert!(s.remove(id).is_some());
    s.apply(id, Prop::Background, PropValue::Color(Rgba8::GOLD));
    s.set_text(id, "x");
    assert!(s.is_empty());
    assert_eq!(s.number(id, Prop::Opacity), 1.0);
}

#[test]
fn measure_resolves_viewport_units() {
    let mut s = stage();
    let id = s.insert(ElementSpec::new("section").at(Extent::vh(1.0).plus(Extent::px(200.0)), Extent::vh(0.5)));
    assert_eq!(s.measure(id), Some((1100.0, 450.0)));

    s.set_viewport(Viewport::new(390, 800).unwrap());
    assert_eq!(s.measure(id), Some((1000.0, 400.0)));
}

#[test]
fn snapshot_merges_base_and_current() {
    let mut s = stage();
    let id = s.insert(ElementSpec::new("a").base(Style::new().opacity(0.0)));
    s.apply(id, Prop::Y, PropValue::Number(12.0));
    s.set_scroll_y(-5.0);

    let snap = s.snapshot();
    assert_eq!(snap.scroll_y, 0.0);
    assert_eq!(snap.elements[0].style.number(Prop::Opacity), 0.0);
    assert_eq!(snap.elements[0].style.number(Prop::Y), 12.0);
}

#[test]
fn links_are_interactive() {
    let mut s = stage();
    let id = s.insert(ElementSpec::new("cta").text("Explore Collection").href("/product"));
    let e = s.get(id).unwrap();
    assert!(e.interactive);
    assert_eq!(e.href.as_deref(), Some("/product"));
}
