use crate::{
    animation::{ease::Ease, style::Style},
    engine::{
        scheduler::{EventKind, HandleId, OwnerId, Scheduler},
        stage::{ElementId, ElementSpec, Stage},
    },
    foundation::{
        core::{Extent, Rgba8},
        error::SiteResult,
    },
    site::routes::Route,
    timeline::{position::Position, timeline::Timeline, tween::Tween},
};

/// Below this scroll offset the bar is always shown.
pub const SHOW_ABOVE_PX: f64 = 50.0;
/// Minimum scroll delta that flips the bar.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;
pub const BAR_DURATION_S: f64 = 0.6;
pub const MENU_OPEN_S: f64 = 1.5;
pub const MENU_CLOSE_S: f64 = 1.2;

/// A menu entry bound to its stage element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MenuLink {
    pub route: Route,
    pub element: ElementId,
}

/// Fixed navigation bar with its full-screen menu.
#[derive(Debug)]
pub struct NavBar {
    owner: OwnerId,
    elements: Vec<ElementId>,
    interactive: Vec<ElementId>,
    links: Vec<MenuLink>,
    open: bool,
    bar_hidden: bool,
    last_scroll_y: f64,
    bar_anim: Option<HandleId>,
    menu_anim: Vec<HandleId>,
    scroll_listener: HandleId,
}

impl NavBar {
    pub fn mount(stage: &mut Stage, scheduler: &mut Scheduler) -> SiteResult<Self> {
        let owner = scheduler.open("navbar");
        let mut elements = Vec::new();
        let mut interactive = Vec::new();
        let mut insert = |stage: &mut Stage, spec: ElementSpec| {
            let is_interactive = spec.interactive;
            let id = stage.insert(spec);
            elements.push(id);
            if is_interactive {
                interactive.push(id);
            }
            id
        };

        insert(stage, ElementSpec::new("navbar").base(Style::new().y(0.0).opacity(1.0)));
        insert(stage, ElementSpec::new("navbar-logo").text("VOIDBLOSSOM").href("/"));
        insert(stage, ElementSpec::new("menu-toggle").text("Toggle Menu").interactive());
        insert(
            stage,
            ElementSpec::new("menu")
                .base(
                    Style::new()
                        .background(Rgba8::INK)
                        .clip_top(100.0)
                        .visible(false),
                )
                .at(Extent::ZERO, Extent::vh(1.0)),
        );
        let links = Route::ALL
            .iter()
            .map(|&route| MenuLink {
                route,
                element: insert(
                    stage,
                    ElementSpec::new(format!("menu-link-{}", route.slug()))
                        .class("menu-link")
                        .text(route.menu_label())
                        .href(route.path()),
                ),
            })
            .collect();
        insert(
            stage,
            ElementSpec::new("menu-tagline").text("The Architecture of Pure Absence"),
        );

        let scroll_listener = scheduler.listen(owner, EventKind::Scroll)?;
        Ok(Self {
            owner,
            elements,
            interactive,
            links,
            open: false,
            bar_hidden: false,
            last_scroll_y: stage.scroll_y(),
            bar_anim: None,
            menu_anim: Vec::new(),
            scroll_listener,
        })
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn links(&self) -> &[MenuLink] {
        &self.links
    }

    /// Hover targets to register with the cursor.
    pub fn interactive(&self) -> &[ElementId] {
        &self.interactive
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scroll is locked while the menu is open.
    pub fn locks_scroll(&self) -> bool {
        self.open
    }

    pub fn is_bar_hidden(&self) -> bool {
        self.bar_hidden
    }

    pub fn link_for(&self, element: ElementId) -> Option<Route> {
        self.links
            .iter()
            .find(|l| l.element == element)
            .map(|l| l.route)
    }

    pub fn toggle(&mut self, stage: &mut Stage, scheduler: &mut Scheduler) -> SiteResult<bool> {
        self.set_open(!self.open, stage, scheduler)?;
        Ok(self.open)
    }

    /// Close on route change; no-op when already closed.
    pub fn close(&mut self, stage: &mut Stage, scheduler: &mut Scheduler) -> SiteResult<()> {
        self.set_open(false, stage, scheduler)
    }

    pub fn set_open(
        &mut self,
        open: bool,
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> SiteResult<()> {
        if self.open == open {
            return Ok(());
        }
        self.open = open;
        for h in self.menu_anim.drain(..) {
            scheduler.kill(h, stage);
        }
        let tl = if open {
            Timeline::new("menu open")
                .from_current()
                .at(
                    Tween::to("#menu", Style::new().clip_top(0.0).visible(true), MENU_OPEN_S)
                        .ease(Ease::InOutExpo),
                    Position::At(0.0),
                )
                .at(
                    Tween::from_to(
                        ".menu-link",
                        Style::new().y(100.0).opacity(0.0).skew_y(4.0),
                        Style::new().y(0.0).opacity(1.0).skew_y(0.0),
                        1.4,
                    )
                    .ease(Ease::OutExpo)
                    .stagger(0.1)
                    .delay(0.5),
                    Position::At(0.0),
                )
        } else {
            Timeline::new("menu close")
                .from_current()
                .then(
                    Tween::to("#menu", Style::new().clip_top(100.0), MENU_CLOSE_S)
                        .ease(Ease::InOutExpo),
                )
                .then(Tween::set("#menu", Style::new().visible(false)))
        };
        tracing::debug!(open, "menu toggled");
        self.menu_anim.push(scheduler.play(self.owner, &tl, stage)?);
        Ok(())
    }

    /// Auto-hide on scroll. Ignored once the scroll listener is gone.
    pub fn on_scroll(&mut self, stage: &mut Stage, scheduler: &mut Scheduler) -> SiteResult<()> {
        if !scheduler.contains(self.scroll_listener) {
            return Ok(());
        }
        let y = stage.scroll_y();
        let diff = (y - self.last_scroll_y).abs();
        if y < SHOW_ABOVE_PX {
            self.animate_bar(false, stage, scheduler)?;
        } else if diff > SCROLL_THRESHOLD_PX {
            self.animate_bar(y > self.last_scroll_y, stage, scheduler)?;
            self.last_scroll_y = y;
        }
        Ok(())
    }

    /// Overwrites the in-flight bar animation.
    fn animate_bar(
        &mut self,
        hide: bool,
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> SiteResult<()> {
        if let Some(h) = self.bar_anim.take() {
            scheduler.kill(h, stage);
        }
        let (to, ease) = if hide {
            (Style::new().y(-100.0).opacity(0.0), Ease::InOutExpo)
        } else {
            (Style::new().y(0.0).opacity(1.0), Ease::OutExpo)
        };
        let tl = Timeline::new(if hide { "navbar hide" } else { "navbar show" })
            .from_current()
            .then(Tween::to("#navbar", to, BAR_DURATION_S).ease(ease));
        self.bar_anim = Some(scheduler.play(self.owner, &tl, stage)?);
        self.bar_hidden = hide;
        Ok(())
    }

    /// Revert the bar's context and remove its elements.
    pub fn unmount(self, stage: &mut Stage, scheduler: &mut Scheduler) {
        scheduler.revert(self.owner, stage);
        for id in self.elements {
            stage.remove(id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/navbar.rs"]
mod tests;
