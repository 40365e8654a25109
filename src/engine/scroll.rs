use std::str::FromStr;

use crate::{
    engine::stage::{Selector, Stage},
    foundation::{
        core::{Extent, Viewport},
        error::{SiteError, SiteResult},
    },
    timeline::player::Scrub,
};

/// A point along an element's or the viewport's height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
    /// Percentage of the height, `0` = top.
    Percent(f64),
    /// Pixels below the top.
    Px(f64),
}

impl Anchor {
    /// Offset in pixels from the top of a box of height `height`.
    pub fn offset(self, height: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => height * 0.5,
            Self::Bottom => height,
            Self::Percent(p) => height * p / 100.0,
            Self::Px(px) => px,
        }
    }
}

impl FromStr for Anchor {
    type Err = SiteError;

    fn from_str(s: &str) -> SiteResult<Self> {
        let bad = || SiteError::animation(format!("invalid scroll anchor '{s}'"));
        match s.trim() {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            raw => {
                if let Some(p) = raw.strip_suffix('%') {
                    p.parse().map(Self::Percent).map_err(|_| bad())
                } else {
                    raw.strip_suffix("px")
                        .unwrap_or(raw)
                        .parse()
                        .map(Self::Px)
                        .map_err(|_| bad())
                }
            }
        }
    }
}

/// `"<element anchor> <viewport anchor>"`: the scroll position where the
/// element anchor meets the viewport anchor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl Edge {
    pub fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset in pixels for an element at `(top, height)`.
    pub fn scroll_offset(self, top: f64, height: f64, viewport_height: f64) -> f64 {
        top + self.element.offset(height) - self.viewport.offset(viewport_height)
    }
}

impl FromStr for Edge {
    type Err = SiteError;

    fn from_str(s: &str) -> SiteResult<Self> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(el), Some(vp), None) => Ok(Self::new(el.parse()?, vp.parse()?)),
            (Some(el), None, None) => Ok(Self::new(el.parse()?, Anchor::Top)),
            _ => Err(SiteError::animation(format!("invalid scroll edge '{s}'"))),
        }
    }
}

/// End of a scroll range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum End {
    Edge(Edge),
    /// Distance past the start (`"+=500%"` is five viewport heights).
    Distance(Extent),
}

impl FromStr for End {
    type Err = SiteError;

    fn from_str(s: &str) -> SiteResult<Self> {
        let s = s.trim();
        let Some(rest) = s.strip_prefix("+=") else {
            return s.parse().map(Self::Edge);
        };
        let bad = || SiteError::animation(format!("invalid scroll end '{s}'"));
        if let Some(p) = rest.strip_suffix('%') {
            let pct: f64 = p.parse().map_err(|_| bad())?;
            Ok(Self::Distance(Extent::vh(pct / 100.0)))
        } else {
            let px: f64 = rest
                .strip_suffix("px")
                .unwrap_or(rest)
                .parse()
                .map_err(|_| bad())?;
            Ok(Self::Distance(Extent::px(px)))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    #[default]
    None,
}

impl FromStr for ToggleAction {
    type Err = SiteError;

    fn from_str(s: &str) -> SiteResult<Self> {
        Ok(match s {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "reverse" => Self::Reverse,
            "restart" => Self::Restart,
            "reset" => Self::Reset,
            "complete" => Self::Complete,
            "none" => Self::None,
            other => {
                return Err(SiteError::animation(format!(
                    "unknown toggle action '{other}'"
                )));
            }
        })
    }
}

/// What a non-scrubbed binding does to its player on each boundary crossing:
/// `"onEnter onLeave onEnterBack onLeaveBack"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = SiteError;

    fn from_str(s: &str) -> SiteResult<Self> {
        let parts = s
            .split_whitespace()
            .map(str::parse)
            .collect::<SiteResult<Vec<ToggleAction>>>()?;
        let [on_enter, on_leave, on_enter_back, on_leave_back] = parts[..] else {
            return Err(SiteError::animation(format!(
                "toggle actions need four entries, got '{s}'"
            )));
        };
        Ok(Self {
            on_enter,
            on_leave,
            on_enter_back,
            on_leave_back,
        })
    }
}

/// Viewport condition under which a binding is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MediaQuery {
    MinWidth(u32),
    MaxWidth(u32),
}

impl MediaQuery {
    pub fn matches(self, viewport: Viewport) -> bool {
        match self {
            Self::MinWidth(w) => viewport.width >= w,
            Self::MaxWidth(w) => viewport.width <= w,
        }
    }
}

/// Where the scroll position sits relative to a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Region {
    Before,
    Inside,
    After,
}

/// Resolved pixel range of a binding.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollRange {
    pub start_px: f64,
    pub end_px: f64,
}

impl ScrollRange {
    /// Fraction of the range covered at scroll position `y`, clamped to `[0, 1]`.
    pub fn progress(self, y: f64) -> f64 {
        let len = self.end_px - self.start_px;
        if len <= 0.0 {
            return if y >= self.start_px { 1.0 } else { 0.0 };
        }
        ((y - self.start_px) / len).clamp(0.0, 1.0)
    }

    pub fn region(self, y: f64) -> Region {
        if y < self.start_px {
            Region::Before
        } else if y > self.end_px {
            Region::After
        } else {
            Region::Inside
        }
    }

    /// Scroll position at `progress` through the range.
    pub fn at(self, progress: f64) -> f64 {
        self.start_px + (self.end_px - self.start_px) * progress.clamp(0.0, 1.0)
    }
}

/// Declarative link between a scroll range and a player or pin.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollBinding {
    pub trigger: Selector,
    pub start: Edge,
    pub end: End,
    pub pin: Option<Selector>,
    pub scrub: Option<Scrub>,
    pub toggle: ToggleActions,
    pub media: Option<MediaQuery>,
    /// Recompute start values from the stage on every refresh.
    pub invalidate_on_refresh: bool,
}

impl ScrollBinding {
    /// Parses `start`/`end` the way scroll positions are written in page
    /// code: `"top top"`, `"top 90%"`, `"+=500%"`, `"bottom bottom"`.
    pub fn new(trigger: impl Into<Selector>, start: &str, end: &str) -> SiteResult<Self> {
        Ok(Self {
            trigger: trigger.into(),
            start: start.parse()?,
            end: end.parse()?,
            pin: None,
            scrub: None,
            toggle: ToggleActions::default(),
            media: None,
            invalidate_on_refresh: false,
        })
    }

    /// Start-only binding; the range ends where the trigger's bottom meets
    /// the viewport top.
    pub fn starting_at(trigger: impl Into<Selector>, start: &str) -> SiteResult<Self> {
        Self::new(trigger, start, "bottom top")
    }

    pub fn pin(mut self, target: impl Into<Selector>) -> Self {
        self.pin = Some(target.into());
        self
    }

    pub fn scrub(mut self, scrub: Scrub) -> Self {
        self.scrub = Some(scrub);
        self
    }

    pub fn toggle(mut self, actions: ToggleActions) -> Self {
        self.toggle = actions;
        self
    }

    pub fn media(mut self, query: MediaQuery) -> Self {
        self.media = Some(query);
        self
    }

    pub fn invalidate_on_refresh(mut self) -> Self {
        self.invalidate_on_refresh = true;
        self
    }

    pub fn is_live(&self, viewport: Viewport) -> bool {
        self.media.is_none_or(|q| q.matches(viewport))
    }

    /// Pixel range for the current layout, `None` when the trigger is absent.
    pub fn measure(&self, stage: &Stage) -> Option<ScrollRange> {
        let trigger = stage.resolve(&self.trigger).into_iter().next()?;
        let (top, height) = stage.measure(trigger)?;
        let vh = stage.viewport().height_px();
        let start_px = self.start.scroll_offset(top, height, vh);
        let end_px = match self.end {
            End::Edge(edge) => edge.scroll_offset(top, height, vh),
            End::Distance(d) => start_px + d.resolve(stage.viewport()),
        };
        Some(ScrollRange {
            start_px,
            end_px: end_px.max(start_px),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scroll.rs"]
mod tests;
