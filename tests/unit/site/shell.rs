use super::*;
use crate::{
    animation::style::Prop,
    foundation::error::SiteError,
    motion::preload::exit_end_s,
};

fn desktop() -> Viewport {
    Viewport::new(1440, 900).unwrap()
}

fn booted() -> Site {
    let mut site = Site::new(SiteConfig::default(), desktop()).unwrap();
    site.tick(exit_end_s() + 0.1).unwrap();
    site
}

#[test]
fn home_mounts_beneath_the_preload_gate() {
    let mut site = Site::new(SiteConfig::default(), desktop()).unwrap();
    assert_eq!(site.route(), Route::Home);
    assert_eq!(site.gate_phase(), GatePhase::Loading);
    assert!(site.navbar().is_none());
    assert!(site.stage().find("preloader").is_some());
    assert!(site.stage().find("home").is_some());
    assert!(!site.toggle_menu().unwrap());
    // The CTA and both section links are registered hover targets.
    assert_eq!(site.trail().registered_count(), 3);
}

#[test]
fn finishing_the_gate_reveals_navigation_chrome() {
    let site = booted();
    assert_eq!(site.gate_phase(), GatePhase::Done);
    assert_eq!(site.preload_progress(), 100);
    assert!(site.stage().find("preloader").is_none());
    let nav = site.navbar().unwrap();
    let footer_link = site.stage().find("footer-void").unwrap();
    assert!(site.trail().is_registered(footer_link));
    assert!(nav.interactive().iter().all(|&id| site.trail().is_registered(id)));
    assert_eq!(site.trail().registered_count(), 3 + 7 + 6);
    let quote = site.stage().find("footer-quote").unwrap();
    let text = site.stage().get(quote).unwrap().text.as_deref();
    assert!(text.is_some_and(|t| t.contains("space between the notes")));
    assert!(site.stage().find("footer-rights").is_some());
}

#[test]
fn the_splash_swallows_hover_and_clicks() {
    let mut site = Site::new(SiteConfig::default(), desktop()).unwrap();
    site.tick(0.1).unwrap();
    let cta = site.stage().find("home-cta").unwrap();
    assert!(!site.pointer_enter(cta));
    assert_eq!(site.trail().hovered(), None);
    assert_eq!(site.click(cta).unwrap(), None);
    assert_eq!(site.route(), Route::Home);

    site.tick(exit_end_s()).unwrap();
    assert_eq!(site.gate_phase(), GatePhase::Done);
    assert!(site.pointer_enter(cta));
    site.tick(2.0).unwrap();
    assert_eq!(site.trail().scale(1), Some(2.8));
    assert_eq!(site.click(cta).unwrap(), Some(Route::Product));
}

#[test]
fn revisiting_the_current_route_only_closes_the_menu() {
    let mut site = booted();
    site.scroll_to(1200.0).unwrap();
    let owner = site.page_owner();
    assert!(site.toggle_menu().unwrap());

    let essence = site.stage().find("menu-link-home").unwrap();
    assert_eq!(site.click(essence).unwrap(), Some(Route::Home));
    assert!(!site.navbar().unwrap().is_open());
    assert_eq!(site.page_owner(), owner);
    assert_eq!(site.stage().scroll_y(), 1200.0);
}

#[test]
fn shutdown_releases_everything_and_ignores_later_events() {
    let mut site = booted();
    site.shutdown();
    assert!(!site.is_running());
    assert_eq!(site.scheduler().handle_count(), 0);
    assert!(site.stage().is_empty());
    assert_eq!(site.trail().registered_count(), 0);

    site.pointer_move(Point::new(10.0, 10.0));
    assert_eq!(site.trail().last_pointer(), None);
    site.resize(Viewport::new(390, 844).unwrap()).unwrap();
    assert_eq!(site.stage().viewport(), desktop());
    assert!(!site.scroll_to(400.0).unwrap());
    assert!(matches!(
        site.navigate("/about"),
        Err(SiteError::Unsupported(_))
    ));
    site.tick(1.0).unwrap();
    assert!(site.navbar().is_none());
}

#[test]
fn shutdown_during_loading_drops_the_splash() {
    let mut site = Site::new(SiteConfig::default(), desktop()).unwrap();
    site.tick(1.0).unwrap();
    site.shutdown();
    assert!(site.stage().find("preloader").is_none());
    site.tick(10.0).unwrap();
    assert!(site.navbar().is_none());
    assert_eq!(site.scheduler().handle_count(), 0);
}

#[test]
fn unknown_paths_leave_the_page_alone() {
    let mut site = booted();
    let owner = site.page_owner();
    let err = site.navigate("/shop").unwrap_err();
    assert!(matches!(err, SiteError::Routing(_)));
    assert_eq!(site.route(), Route::Home);
    assert_eq!(site.page_owner(), owner);
}

#[test]
fn clicking_links_navigates_and_resets_scroll() {
    let mut site = booted();
    site.scroll_to(1200.0).unwrap();
    let cta = site.stage().find("home-cta").unwrap();
    assert_eq!(site.click(cta).unwrap(), Some(Route::Product));
    assert_eq!(site.route(), Route::Product);
    assert_eq!(site.stage().scroll_y(), 0.0);
    assert!(site.stage().find("home").is_none());
    assert!(!site.trail().is_registered(cta));

    let toggle = site.stage().find("menu-toggle").unwrap();
    assert_eq!(site.click(toggle).unwrap(), None);
    assert!(site.navbar().is_some_and(NavBar::is_open));
}

#[test]
fn open_menu_locks_scroll() {
    let mut site = booted();
    assert!(site.toggle_menu().unwrap());
    assert!(!site.scroll_to(800.0).unwrap());
    assert_eq!(site.stage().scroll_y(), 0.0);
    assert!(!site.toggle_menu().unwrap());
    assert!(site.scroll_to(800.0).unwrap());
    assert_eq!(site.stage().scroll_y(), 800.0);
}

#[test]
fn about_turns_on_the_gold_accent() {
    let mut site = booted();
    site.navigate("/about/").unwrap();
    assert!(site.trail().has_accent());
    site.navigate("/").unwrap();
    assert!(!site.trail().has_accent());
}

#[test]
fn resizing_to_mobile_hides_the_cursor() {
    let mut site = booted();
    assert!(!site.trail().is_hidden());
    site.resize(Viewport::new(390, 844).unwrap()).unwrap();
    assert!(site.trail().is_hidden());
    let dot = site.stage().find("cursor-dot").unwrap();
    assert_eq!(
        site.stage().value(dot, Prop::Visible),
        crate::animation::style::PropValue::Toggle(false)
    );
}

#[test]
fn snapshot_reports_shell_state() {
    let mut site = booted();
    site.toggle_menu().unwrap();
    let snap = site.snapshot();
    assert_eq!(snap.route, Route::Home);
    assert_eq!(snap.gate, GatePhase::Done);
    assert!(snap.menu_open);
    assert_eq!(snap.handles, site.scheduler().handle_count());
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["route"], "home");
}
