use super::*;
use crate::{
    animation::style::Prop,
    engine::{
        scheduler::Scheduler,
        stage::{ElementId, Stage},
    },
    foundation::core::Viewport,
    site::{config::SiteConfig, pages::MountedPage},
};

fn mounted(width: u32) -> (Stage, Scheduler, MountedPage) {
    let config = SiteConfig::default();
    let mut stage = Stage::new(Viewport::new(width, 900).unwrap());
    let mut scheduler = Scheduler::new();
    let owner = scheduler.open("home");
    let mut cx = PageContext::new(&mut stage, &mut scheduler, &config, owner);
    mount(&mut cx).unwrap();
    let page = cx.finish();
    (stage, scheduler, page)
}

fn id(stage: &Stage, name: &str) -> ElementId {
    stage.find(name).unwrap()
}

fn scroll(stage: &mut Stage, scheduler: &mut Scheduler, y: f64) {
    stage.set_scroll_y(y);
    scheduler.on_scroll(stage);
    scheduler.tick(5.0, stage);
}

#[test]
fn narrative_beats_land_where_the_scroll_story_expects() {
    let (stage, _, _) = mounted(1440);
    let compiled = narrative(Breakpoint::Desktop)
        .timeline()
        .compile(&stage)
        .unwrap();
    assert!((compiled.duration_s - 13.9).abs() < 1e-9);

    let step4 = id(&stage, "narrative-step-4");
    let enter = &compiled.track(step4, Prop::Opacity).unwrap().segments[0];
    assert!((enter.start_s - 11.4).abs() < 1e-9);
}

#[test]
fn intro_reveals_hero_from_hidden() {
    let (mut stage, mut scheduler, _) = mounted(1440);
    let brand = id(&stage, "home-brand");
    let vessel = id(&stage, "home-vessel");
    assert_eq!(stage.number(brand, Prop::Opacity), 0.0);
    assert_eq!(stage.number(brand, Prop::Blur), 12.0);
    assert_eq!(stage.number(vessel, Prop::Y), 100.0);

    scheduler.tick(10.0, &mut stage);
    assert_eq!(stage.number(brand, Prop::Opacity), 1.0);
    assert_eq!(stage.number(vessel, Prop::Y), 0.0);
    assert_eq!(stage.number(id(&stage, "narrative-step-1"), Prop::Opacity), 1.0);
}

#[test]
fn pinned_narrative_plays_out_and_rewinds() {
    let (mut stage, mut scheduler, page) = mounted(1440);
    scheduler.tick(10.0, &mut stage);
    let names = ["narrative-step-1", "narrative-step-2", "narrative-step-4", "home-vessel"];
    let watched: Vec<(ElementId, Prop)> = names
        .iter()
        .flat_map(|n| {
            let e = id(&stage, n);
            [Prop::Opacity, Prop::Y, Prop::Scale].map(|p| (e, p))
        })
        .collect();
    let read = |stage: &Stage| -> Vec<f64> {
        watched.iter().map(|&(e, p)| stage.number(e, p)).collect()
    };
    let rest = read(&stage);

    let pin = scheduler.pinning_bindings(page.owner)[0];
    let range = scheduler.binding_range(pin).unwrap();
    assert_eq!(range.end_px - range.start_px, 4500.0);

    scroll(&mut stage, &mut scheduler, range.end_px);
    assert_eq!(stage.number(id(&stage, "narrative-step-1"), Prop::Opacity), 0.0);
    assert_eq!(stage.number(id(&stage, "narrative-step-4"), Prop::Opacity), 1.0);
    assert!((stage.number(id(&stage, "home-vessel"), Prop::Opacity) - 0.1).abs() < 1e-9);

    scroll(&mut stage, &mut scheduler, range.at(0.5));
    assert!(stage.is_pinned(id(&stage, "home")));

    scroll(&mut stage, &mut scheduler, 0.0);
    let back = read(&stage);
    for (a, b) in rest.iter().zip(&back) {
        assert!((a - b).abs() < 1e-9, "{rest:?} vs {back:?}");
    }
}

#[test]
fn mobile_keeps_the_vessel_centred() {
    let (stage, _, _) = mounted(390);
    let compiled = narrative(Breakpoint::Mobile)
        .timeline()
        .compile(&stage)
        .unwrap();
    let vessel = id(&stage, "home-vessel");
    let x = compiled.track(vessel, Prop::XPercent).unwrap();
    assert!(x.segments.iter().all(|s| s.to.as_number() == Some(0.0)));
    let scale = compiled.track(vessel, Prop::Scale).unwrap();
    assert_eq!(scale.segments[0].to.as_number(), Some(1.3));
}

#[test]
fn links_and_reveal_sections_are_declared() {
    let (stage, scheduler, page) = mounted(1440);
    let hrefs: Vec<_> = page
        .interactive
        .iter()
        .filter_map(|&e| stage.get(e).and_then(|el| el.href.clone()))
        .collect();
    assert_eq!(hrefs, ["/product", "/philosophy", "/product"]);
    assert_eq!(stage.resolve(&Selector::class("reveal-section")).len(), 3);
    // Intro, pinned narrative and one binding per reveal section.
    assert_eq!(scheduler.handles_of(page.owner), 5);
    let first = id(&stage, "home-statement");
    assert_eq!(stage.measure(first), Some((5400.0, 1080.0)));
}
