use super::*;
use crate::foundation::core::Viewport;

fn desktop() -> Stage {
    Stage::new(Viewport::new(1440, 900).unwrap())
}

#[test]
fn followers_rest_on_the_last_coordinate() {
    let mut stage = desktop();
    let mut trail = PointerTrail::new(&mut stage, false);

    let moves = [(10.0, 20.0), (400.0, 80.0), (700.0, 650.0), (120.0, 333.0)];
    for (x, y) in moves {
        trail.pointer_move(Point::new(x, y));
        trail.tick(0.05, &mut stage);
    }
    assert!(!trail.is_settled());
    trail.tick(2.0, &mut stage);
    assert!(trail.is_settled());

    for (i, (_, id)) in trail.followers().enumerate() {
        assert_eq!(trail.position(i), Some(Vec2::new(120.0, 333.0)));
        assert_eq!(stage.number(id, Prop::X), 120.0);
        assert_eq!(stage.number(id, Prop::Y), 333.0);
    }
}

#[test]
fn deeper_followers_lag_further() {
    let mut stage = desktop();
    let mut trail = PointerTrail::new(&mut stage, false);
    trail.pointer_move(Point::new(1000.0, 0.0));
    trail.tick(0.2, &mut stage);

    let xs: Vec<f64> = (0..FOLLOWERS.len())
        .map(|i| trail.position(i).unwrap().x)
        .collect();
    assert_eq!(xs[0], 1000.0);
    assert!(xs.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn hover_only_reacts_to_registered_elements() {
    let mut stage = desktop();
    let link = stage.insert(ElementSpec::new("link").interactive());
    let plain = stage.insert(ElementSpec::new("plain"));
    let mut trail = PointerTrail::new(&mut stage, false);
    trail.register(link);

    assert!(!trail.pointer_enter(plain));
    assert!(trail.pointer_enter(link));
    // Ring starts first, the last ghost 0.15s later.
    trail.tick(0.1, &mut stage);
    assert!(trail.scale(1).unwrap() > trail.scale(6).unwrap());
    trail.tick(1.0, &mut stage);
    assert_eq!(trail.scale(0), Some(1.0));
    for i in 1..FOLLOWERS.len() {
        assert_eq!(trail.scale(i), Some(HOVER_SCALE));
    }
    let (_, ring) = trail.followers().nth(1).unwrap();
    assert_eq!(
        stage.value(ring, Prop::Border),
        PropValue::Color(Rgba8::GOLD.with_alpha(0.3))
    );

    assert!(trail.pointer_leave(link));
    trail.tick(0.1, &mut stage);
    // Leaving reverses the stagger: the last ghost shrinks first.
    assert!(trail.scale(6).unwrap() < trail.scale(1).unwrap());
    trail.tick(1.0, &mut stage);
    assert_eq!(trail.scale(1), Some(1.0));
    assert_eq!(
        stage.value(ring, Prop::Border),
        PropValue::Color(Rgba8::IVORY.with_alpha(0.15))
    );
}

#[test]
fn unregistering_the_hovered_element_ends_the_hover() {
    let mut stage = desktop();
    let link = stage.insert(ElementSpec::new("link"));
    let mut trail = PointerTrail::new(&mut stage, false);
    trail.register(link);
    trail.pointer_enter(link);
    trail.unregister_all(&[link]);
    assert_eq!(trail.hovered(), None);
    assert_eq!(trail.registered_count(), 0);
    trail.tick(2.0, &mut stage);
    assert_eq!(trail.scale(3), Some(1.0));
    assert!(!trail.pointer_enter(link));
}

#[test]
fn accent_recolors_the_deepest_ghosts() {
    let mut stage = desktop();
    let mut trail = PointerTrail::new(&mut stage, false);
    trail.set_accent(true, &mut stage);
    let ids = trail.element_ids();
    assert_eq!(stage.value(ids[6], Prop::Border), PropValue::Color(Rgba8::GOLD));
    assert_eq!(stage.value(ids[5], Prop::Border), PropValue::Color(Rgba8::GOLD));
    assert_ne!(stage.value(ids[4], Prop::Border), PropValue::Color(Rgba8::GOLD));

    trail.set_accent(false, &mut stage);
    assert_eq!(stage.value(ids[6], Prop::Border), PropValue::Color(Rgba8::IVORY));
}

#[test]
fn cursor_starts_hidden_when_asked() {
    let mut stage = Stage::new(Viewport::new(390, 844).unwrap());
    let mut trail = PointerTrail::new(&mut stage, true);
    assert!(trail.is_hidden());
    let dot = trail.element_ids()[0];
    assert_eq!(stage.value(dot, Prop::Visible), PropValue::Toggle(false));

    trail.set_hidden(false, &mut stage);
    assert!(!trail.is_hidden());
    assert_eq!(stage.value(dot, Prop::Visible), PropValue::Toggle(true));
}
