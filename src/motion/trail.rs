use std::collections::BTreeSet;

use crate::{
    animation::{
        anim::Tweener,
        ease::Ease,
        style::{Prop, PropValue, Style},
    },
    engine::stage::{ElementId, ElementSpec, Stage},
    foundation::core::{Point, Rgba8, Vec2},
};

/// Scale of hoverable followers over an interactive element.
pub const HOVER_SCALE: f64 = 2.8;
pub const HOVER_DURATION_S: f64 = 0.8;
pub const HOVER_STAGGER_S: f64 = 0.03;

/// One cursor layer and its lag behind the pointer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TrailFollower {
    pub name: &'static str,
    pub duration_s: f64,
    pub ease: Ease,
    pub hoverable: bool,
    /// Resting border alpha (ivory); `None` for the filled dot.
    border_alpha: Option<f64>,
    opacity: f64,
    blur: f64,
}

/// Dot, ring and five ghost trails, front to back.
pub const FOLLOWERS: [TrailFollower; 7] = [
    TrailFollower {
        name: "cursor-dot",
        duration_s: 0.1,
        ease: Ease::Linear,
        hoverable: false,
        border_alpha: None,
        opacity: 1.0,
        blur: 0.0,
    },
    TrailFollower {
        name: "cursor-ring",
        duration_s: 0.4,
        ease: Ease::OutQuart,
        hoverable: true,
        border_alpha: Some(0.25),
        opacity: 1.0,
        blur: 0.0,
    },
    TrailFollower {
        name: "cursor-ghost-1",
        duration_s: 0.55,
        ease: Ease::OutCubic,
        hoverable: true,
        border_alpha: Some(0.15),
        opacity: 1.0,
        blur: 1.0,
    },
    TrailFollower {
        name: "cursor-ghost-2",
        duration_s: 0.75,
        ease: Ease::OutCubic,
        hoverable: true,
        border_alpha: Some(0.10),
        opacity: 1.0,
        blur: 2.0,
    },
    TrailFollower {
        name: "cursor-ghost-3",
        duration_s: 1.0,
        ease: Ease::OutQuad,
        hoverable: true,
        border_alpha: Some(0.05),
        opacity: 1.0,
        blur: 4.0,
    },
    TrailFollower {
        name: "cursor-ghost-4",
        duration_s: 1.3,
        ease: Ease::OutQuad,
        hoverable: true,
        border_alpha: Some(1.0),
        opacity: 0.04,
        blur: 6.0,
    },
    TrailFollower {
        name: "cursor-ghost-5",
        duration_s: 1.6,
        ease: Ease::OutSine,
        hoverable: true,
        border_alpha: Some(1.0),
        opacity: 0.02,
        blur: 10.0,
    },
];

/// Ghosts that take the gold accent on the About page.
const ACCENT_DEPTH: usize = 2;

impl TrailFollower {
    fn is_deep(index: usize) -> bool {
        index >= FOLLOWERS.len() - ACCENT_DEPTH
    }

    fn resting_border(self, index: usize, accent: bool) -> Rgba8 {
        match self.border_alpha {
            None => Rgba8::transparent(),
            Some(_) if accent && Self::is_deep(index) => Rgba8::GOLD,
            Some(a) => Rgba8::IVORY.with_alpha(a),
        }
    }

    fn resting_background(self) -> Rgba8 {
        if self.border_alpha.is_none() {
            Rgba8::IVORY
        } else {
            Rgba8::transparent()
        }
    }

    fn base_style(self, index: usize) -> Style {
        Style::new()
            .x(0.0)
            .y(0.0)
            .scale(1.0)
            .opacity(self.opacity)
            .blur(self.blur)
            .background(self.resting_background())
            .border(self.resting_border(index, false))
    }
}

#[derive(Clone, Debug)]
struct FollowerState {
    spec: TrailFollower,
    id: ElementId,
    position: Tweener<Vec2>,
    scale: Tweener<f64>,
    background: Tweener<Rgba8>,
    border: Tweener<Rgba8>,
}

/// The custom cursor: seven followers chasing the pointer plus the hover
/// registry of interactive elements.
///
/// Every move retargets each follower from where it currently is; there is
/// no queue, so after the pointer stops every follower settles exactly on the
/// last coordinate.
#[derive(Clone, Debug)]
pub struct PointerTrail {
    followers: Vec<FollowerState>,
    registry: BTreeSet<ElementId>,
    hovered: Option<ElementId>,
    accent: bool,
    hidden: bool,
    last: Option<Point>,
}

impl PointerTrail {
    /// Insert the follower elements into `stage`, hidden on mobile layouts.
    pub fn new(stage: &mut Stage, hidden: bool) -> Self {
        let followers = FOLLOWERS
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let base = spec.base_style(i);
                let id = stage.insert(ElementSpec::new(spec.name).class("cursor").base(base));
                FollowerState {
                    spec: *spec,
                    id,
                    position: Tweener::at_rest(Vec2::ZERO),
                    scale: Tweener::at_rest(1.0),
                    background: Tweener::at_rest(spec.resting_background()),
                    border: Tweener::at_rest(spec.resting_border(i, false)),
                }
            })
            .collect();
        let mut trail = Self {
            followers,
            registry: BTreeSet::new(),
            hovered: None,
            accent: false,
            hidden: false,
            last: None,
        };
        trail.set_hidden(hidden, stage);
        trail
    }

    pub fn followers(&self) -> impl Iterator<Item = (TrailFollower, ElementId)> + '_ {
        self.followers.iter().map(|f| (f.spec, f.id))
    }

    pub fn element_ids(&self) -> Vec<ElementId> {
        self.followers.iter().map(|f| f.id).collect()
    }

    /// Retarget every follower toward `p`.
    pub fn pointer_move(&mut self, p: Point) {
        let target = p.to_vec2();
        for f in &mut self.followers {
            f.position
                .retarget(target, f.spec.duration_s, 0.0, f.spec.ease);
        }
        self.last = Some(p);
    }

    pub fn last_pointer(&self) -> Option<Point> {
        self.last
    }

    pub fn register(&mut self, id: ElementId) {
        self.registry.insert(id);
    }

    /// Forget `ids`; a hover on one of them ends.
    pub fn unregister_all(&mut self, ids: &[ElementId]) {
        for id in ids {
            self.registry.remove(id);
        }
        if let Some(h) = self.hovered
            && ids.contains(&h)
        {
            self.leave_styles();
            self.hovered = None;
        }
    }

    pub fn is_registered(&self, id: ElementId) -> bool {
        self.registry.contains(&id)
    }

    pub fn registered_count(&self) -> usize {
        self.registry.len()
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    /// Returns false (and does nothing) for unregistered elements.
    pub fn pointer_enter(&mut self, id: ElementId) -> bool {
        if !self.registry.contains(&id) {
            return false;
        }
        let gold_bg = Rgba8::GOLD.with_alpha(0.05);
        let gold_border = Rgba8::GOLD.with_alpha(0.3);
        for (k, f) in self.followers.iter_mut().filter(|f| f.spec.hoverable).enumerate() {
            let delay = HOVER_STAGGER_S * k as f64;
            f.scale
                .retarget(HOVER_SCALE, HOVER_DURATION_S, delay, Ease::OutExpo);
            f.background
                .retarget(gold_bg, HOVER_DURATION_S, delay, Ease::OutExpo);
            f.border
                .retarget(gold_border, HOVER_DURATION_S, delay, Ease::OutExpo);
        }
        self.hovered = Some(id);
        true
    }

    pub fn pointer_leave(&mut self, id: ElementId) -> bool {
        if !self.registry.contains(&id) {
            return false;
        }
        self.leave_styles();
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        true
    }

    fn leave_styles(&mut self) {
        let hoverable = self.followers.iter().filter(|f| f.spec.hoverable).count();
        let border = Rgba8::IVORY.with_alpha(0.15);
        for (k, f) in self.followers.iter_mut().filter(|f| f.spec.hoverable).enumerate() {
            // Last ghost first.
            let delay = HOVER_STAGGER_S * (hoverable - 1 - k) as f64;
            f.scale.retarget(1.0, HOVER_DURATION_S, delay, Ease::OutExpo);
            f.background
                .retarget(Rgba8::transparent(), HOVER_DURATION_S, delay, Ease::OutExpo);
            f.border
                .retarget(border, HOVER_DURATION_S, delay, Ease::OutExpo);
        }
    }

    /// Gold border on the deepest ghosts.
    pub fn set_accent(&mut self, accent: bool, stage: &mut Stage) {
        if self.accent == accent {
            return;
        }
        self.accent = accent;
        for (i, f) in self.followers.iter_mut().enumerate() {
            if TrailFollower::is_deep(i) {
                let border = f.spec.resting_border(i, accent);
                f.border = Tweener::at_rest(border);
                stage.apply(f.id, Prop::Border, PropValue::Color(border));
            }
        }
    }

    pub fn has_accent(&self) -> bool {
        self.accent
    }

    /// The cursor only exists on desktop viewports.
    pub fn set_hidden(&mut self, hidden: bool, stage: &mut Stage) {
        self.hidden = hidden;
        for f in &self.followers {
            stage.apply(f.id, Prop::Visible, PropValue::Toggle(!hidden));
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Current position of follower `index` (0 = dot).
    pub fn position(&self, index: usize) -> Option<Vec2> {
        self.followers.get(index).map(|f| f.position.value())
    }

    pub fn scale(&self, index: usize) -> Option<f64> {
        self.followers.get(index).map(|f| f.scale.value())
    }

    pub fn is_settled(&self) -> bool {
        self.followers.iter().all(|f| {
            f.position.is_settled()
                && f.scale.is_settled()
                && f.background.is_settled()
                && f.border.is_settled()
        })
    }

    /// Advance every follower and write it to the stage.
    pub fn tick(&mut self, dt_s: f64, stage: &mut Stage) {
        for f in &mut self.followers {
            f.position.advance(dt_s);
            f.scale.advance(dt_s);
            f.background.advance(dt_s);
            f.border.advance(dt_s);

            let pos = f.position.value();
            stage.apply(f.id, Prop::X, PropValue::Number(pos.x));
            stage.apply(f.id, Prop::Y, PropValue::Number(pos.y));
            if f.spec.hoverable {
                stage.apply(f.id, Prop::Scale, PropValue::Number(f.scale.value()));
                stage.apply(f.id, Prop::Background, PropValue::Color(f.background.value()));
                stage.apply(f.id, Prop::Border, PropValue::Color(f.border.value()));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/trail.rs"]
mod tests;
