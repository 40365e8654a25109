use super::*;
use crate::{engine::stage::ElementSpec, foundation::core::Viewport};

fn stage() -> Stage {
    let mut stage = Stage::new(Viewport::new(1440, 900).unwrap());
    for name in ["step-1", "step-2", "step-3", "vessel"] {
        stage.insert(ElementSpec::new(name));
    }
    stage
}

fn sequencer() -> NarrativeSequencer {
    let exit = || StepMotion::to(Style::new().opacity(0.0).y(-60.0), 1.0);
    let enter = || {
        StepMotion::from_to(
            Style::new().opacity(0.0).y(60.0).blur(15.0),
            Style::new().opacity(1.0).y(0.0).blur(0.0),
            2.0,
        )
    };
    NarrativeSequencer::new("narrative")
        .step(
            Step::new("#step-1")
                .entered_on_load()
                .exit(exit())
                .companion(Tween::to("#vessel", Style::new().x_percent(-32.0), 2.5)),
        )
        .step(Step::new("#step-2").enter(enter()).hold(1.0).exit(exit()))
        .step(Step::new("#step-3").enter(enter()).enter_overlap(2.0))
}

#[test]
fn steps_overlap_by_fixed_constants() {
    let tl = sequencer().timeline();
    let starts: Vec<_> = tl.entries.iter().map(|e| e.position).collect();
    assert_eq!(
        starts,
        vec![
            Position::Append,
            Position::FromEnd(-COMPANION_OVERLAP_S),
            Position::FromEnd(-ENTER_OVERLAP_S),
            Position::FromEnd(1.0),
            Position::FromEnd(-2.0),
        ]
    );

    let s = stage();
    let c = tl.compile(&s).unwrap();
    let start = |name: &str, prop| {
        c.track(s.find(name).unwrap(), prop)
            .unwrap()
            .first_start_s()
            .unwrap()
    };
    // exit 0..1, vessel 0.5..3.0, enter 1.5..3.5, hold, exit 4.5..5.5, enter 3.5..
    assert_eq!(start("step-1", Prop::Opacity), 0.0);
    assert_eq!(start("vessel", Prop::XPercent), 0.5);
    assert_eq!(start("step-2", Prop::Opacity), 1.5);
    assert_eq!(c.duration_s, 5.5);
    assert_eq!(start("step-3", Prop::Opacity), 3.5);
}

#[test]
fn step_states_are_a_pure_function_of_progress() {
    let s = stage();
    let seq = sequencer();
    let c = seq.timeline().compile(&s).unwrap();

    let at_start = seq.step_states(&c, &s, 0.0);
    assert_eq!(at_start[0].opacity, 1.0);
    assert_eq!(at_start[1].opacity, 0.0);
    assert_eq!(at_start[1].blur, 15.0);

    let mid = seq.step_states(&c, &s, 0.6);
    let _ = seq.step_states(&c, &s, 1.0);
    assert_eq!(seq.step_states(&c, &s, 0.6), mid);
    assert_eq!(seq.step_states(&c, &s, 0.0), at_start);
}

#[test]
fn exit_opacity_never_rises_while_scrolling_forward() {
    let s = stage();
    let seq = sequencer();
    let c = seq.timeline().compile(&s).unwrap();
    let mut last = f64::INFINITY;
    for i in 0..=50 {
        let o = seq.step_states(&c, &s, i as f64 / 50.0)[0].opacity;
        assert!(o <= last);
        last = o;
    }
    assert_eq!(last, 0.0);
}

#[test]
fn missing_steps_keep_their_slot() {
    let s = Stage::new(Viewport::new(1440, 900).unwrap());
    let c = sequencer().timeline().compile(&s).unwrap();
    assert!(c.tracks.is_empty());
    assert_eq!(c.duration_s, 5.5);
}
