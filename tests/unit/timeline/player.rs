use super::*;
use crate::{
    animation::{
        ease::Ease,
        style::{Prop, Style},
    },
    engine::stage::{ElementId, ElementSpec},
    foundation::core::Viewport,
    timeline::{position::Position, timeline::Timeline, tween::Tween},
};

fn fixture() -> (Stage, ElementId, CompiledTimeline) {
    let mut stage = Stage::new(Viewport::new(1440, 900).unwrap());
    let id = stage.insert(ElementSpec::new("line"));
    let tl = Timeline::new("fade")
        .at(
            Tween::to("#line", Style::new().opacity(0.0).y(-60.0), 2.0).ease(Ease::Linear),
            Position::At(1.0),
        )
        .compile(&stage)
        .unwrap();
    (stage, id, tl)
}

#[test]
fn clock_player_runs_to_the_end_and_stops() {
    let (mut stage, id, tl) = fixture();
    let mut p = Player::clock(tl);
    p.tick(2.0);
    p.render(&mut stage);
    assert_eq!(stage.number(id, Prop::Opacity), 0.5);
    p.tick(5.0);
    p.render(&mut stage);
    assert!(p.is_finished());
    assert!(p.is_paused());
    assert_eq!(stage.number(id, Prop::Opacity), 0.0);
    assert_eq!(p.progress(), 1.0);
}

#[test]
fn reverse_plays_back_to_zero() {
    let (mut stage, id, tl) = fixture();
    let mut p = Player::clock(tl);
    p.tick(3.0);
    p.render(&mut stage);
    p.reverse();
    p.tick(10.0);
    p.render(&mut stage);
    assert_eq!(p.time_s(), 0.0);
    assert_eq!(stage.number(id, Prop::Opacity), 1.0);
    assert_eq!(stage.number(id, Prop::Y), 0.0);
}

#[test]
fn instant_scrub_is_reversible() {
    let (mut stage, id, tl) = fixture();
    let mut p = Player::scrubbed(tl, Scrub::Instant);
    p.render(&mut stage);
    let before = (stage.number(id, Prop::Opacity), stage.number(id, Prop::Y));

    let mut at_half = None;
    for progress in [0.2, 0.5, 1.0, 0.7, 0.5, 0.1, 0.0] {
        p.set_scrub_progress(progress);
        p.render(&mut stage);
        if progress == 0.5 {
            let now = stage.number(id, Prop::Opacity);
            assert_eq!(*at_half.get_or_insert(now), now);
        }
    }
    assert_eq!(
        (stage.number(id, Prop::Opacity), stage.number(id, Prop::Y)),
        before
    );
}

#[test]
fn smooth_scrub_converges_on_target() {
    let (mut stage, id, tl) = fixture();
    let mut p = Player::scrubbed(tl, Scrub::Smooth { lag_s: 1.2 });
    p.set_scrub_progress(1.0);
    assert_eq!(p.time_s(), 0.0);
    for _ in 0..2000 {
        p.tick(1.0 / 60.0);
    }
    p.render(&mut stage);
    assert_eq!(p.time_s(), 3.0);
    assert_eq!(stage.number(id, Prop::Opacity), 0.0);
}

#[test]
fn finished_player_stops_writing() {
    let (mut stage, id, tl) = fixture();
    let mut p = Player::clock(tl);
    p.tick(10.0);
    p.render(&mut stage);
    stage.apply(id, Prop::Opacity, crate::animation::style::PropValue::Number(0.8));
    p.tick(1.0);
    assert!(!p.needs_render());
    p.render(&mut stage);
    assert_eq!(stage.number(id, Prop::Opacity), 0.8);
}

#[test]
fn paused_player_waits_for_play() {
    let (mut stage, _, tl) = fixture();
    let mut p = Player::paused(tl);
    p.tick(1.5);
    assert_eq!(p.time_s(), 0.0);
    p.play();
    p.tick(1.5);
    p.render(&mut stage);
    assert_eq!(p.time_s(), 1.5);
}

#[test]
fn untouched_tracks_are_not_written_at_their_start() {
    let mut stage = Stage::new(Viewport::new(1440, 900).unwrap());
    let id = stage.insert(ElementSpec::new("step"));
    stage.apply(id, Prop::Opacity, crate::animation::style::PropValue::Number(0.0));
    let tl = Timeline::new("exit")
        .then(Tween::to("#step", Style::new().opacity(0.0), 1.0))
        .compile(&stage)
        .unwrap();
    let mut p = Player::scrubbed(tl, Scrub::Instant);
    p.render(&mut stage);
    // Another timeline owns the value until this one moves.
    assert_eq!(stage.number(id, Prop::Opacity), 0.0);
    p.set_scrub_progress(0.5);
    p.render(&mut stage);
    assert!(stage.number(id, Prop::Opacity) > 0.0);
}
