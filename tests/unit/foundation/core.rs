use super::*;

#[test]
fn breakpoint_boundaries() {
    let narrow = Viewport::new(767, 900).unwrap();
    let edge = Viewport::new(768, 900).unwrap();
    assert_eq!(narrow.breakpoint_at(MOBILE_BREAKPOINT_PX), Breakpoint::Mobile);
    assert_eq!(edge.breakpoint_at(MOBILE_BREAKPOINT_PX), Breakpoint::Desktop);
}

#[test]
fn viewport_rejects_zero() {
    assert!(Viewport::new(0, 900).is_err());
    assert!(Viewport::new(1440, 0).is_err());
}

#[test]
fn extent_resolves_against_viewport_height() {
    let vp = Viewport::new(1440, 900).unwrap();
    assert_eq!(Extent::vh(1.0).resolve(vp), 900.0);
    assert_eq!(Extent::px(120.0).plus(Extent::vh(0.5)).resolve(vp), 570.0);
}

#[test]
fn responsive_picks_branch() {
    let r = Responsive::new(3.0, -4.0);
    assert_eq!(r.pick(Breakpoint::Mobile), 3.0);
    assert_eq!(r.pick(Breakpoint::Desktop), -4.0);
}

#[test]
fn fps_frame_math() {
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.secs_to_frames_ceil(1.0), 60);
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn with_alpha_scales_to_u8() {
    assert_eq!(Rgba8::GOLD.with_alpha(0.3).a, 77);
    assert_eq!(Rgba8::GOLD.with_alpha(2.0).a, 255);
}

#[test]
fn configured_breakpoint_overrides_default() {
    let v = Viewport::new(800, 600).unwrap();
    assert_eq!(v.breakpoint_at(MOBILE_BREAKPOINT_PX), Breakpoint::Desktop);
    assert_eq!(v.breakpoint_at(1024), Breakpoint::Mobile);
}
