use super::*;
use crate::{
    animation::style::Prop,
    engine::{
        scheduler::Scheduler,
        stage::{Selector, Stage},
    },
    foundation::core::Viewport,
    site::{config::SiteConfig, pages::MountedPage},
};

fn mounted() -> (Stage, Scheduler, MountedPage) {
    let config = SiteConfig::default();
    let mut stage = Stage::new(Viewport::new(1440, 900).unwrap());
    let mut scheduler = Scheduler::new();
    let owner = scheduler.open("about");
    let mut cx = PageContext::new(&mut stage, &mut scheduler, &config, owner);
    mount(&mut cx).unwrap();
    let page = cx.finish();
    (stage, scheduler, page)
}

#[test]
fn title_in_view_plays_on_mount() {
    let (mut stage, mut scheduler, _) = mounted();
    let title = stage.find("about-title").unwrap();
    scheduler.tick(2.0, &mut stage);
    assert_eq!(stage.number(title, Prop::Opacity), 1.0);
    assert_eq!(stage.number(title, Prop::Y), 0.0);
}

#[test]
fn stats_stagger_once_their_container_scrolls_in() {
    let (mut stage, mut scheduler, _) = mounted();
    let stats: Vec<_> = stage.resolve(&Selector::class("about-stat"));
    assert_eq!(stats.len(), 3);
    scheduler.tick(1.0, &mut stage);
    assert!(stats.iter().all(|&s| stage.number(s, Prop::Opacity) == 0.0));

    stage.set_scroll_y(2000.0);
    scheduler.on_scroll(&mut stage);
    scheduler.tick(0.3, &mut stage);
    let first = stage.number(stats[0], Prop::Opacity);
    let last = stage.number(stats[2], Prop::Opacity);
    assert!(first > last, "{first} <= {last}");
    assert_eq!(last, 0.0);
    scheduler.tick(2.0, &mut stage);
    assert!(stats.iter().all(|&s| stage.number(s, Prop::Opacity) == 1.0));
}

#[test]
fn image_wrapper_is_a_hover_target() {
    let (stage, _, page) = mounted();
    let image = stage.find("about-image-wrapper").unwrap();
    assert_eq!(page.interactive, vec![image]);
    assert_eq!(
        stage.get(image).and_then(|e| e.image.as_deref()),
        Some(STUDIO_IMAGE)
    );
}
