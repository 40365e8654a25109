use crate::{
    animation::{anim::Repeat, ease::Ease, style::Style},
    engine::stage::Selector,
    foundation::error::{SiteError, SiteResult},
};

/// One keyframe descriptor: targets, property deltas, timing and easing.
///
/// A tween with only `to` animates from whatever value the property has when
/// it starts. A tween with `from` renders its from-state immediately (even
/// before it starts) and animates toward `to`, or toward the element's value
/// when `to` is absent.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    pub targets: Selector,
    pub from: Option<Style>,
    pub to: Option<Style>,
    pub duration_s: f64,
    /// Falls back to the timeline's default ease.
    pub ease: Option<Ease>,
    #[serde(default)]
    pub delay_s: f64,
    /// Offset between consecutive targets. Negative staggers run in reverse
    /// document order.
    #[serde(default)]
    pub stagger_s: f64,
    #[serde(default)]
    pub repeat: Repeat,
}

impl Tween {
    fn new(targets: Selector, from: Option<Style>, to: Option<Style>, duration_s: f64) -> Self {
        Self {
            targets,
            from,
            to,
            duration_s,
            ease: None,
            delay_s: 0.0,
            stagger_s: 0.0,
            repeat: Repeat::Once,
        }
    }

    pub fn to(targets: impl Into<Selector>, to: Style, duration_s: f64) -> Self {
        Self::new(targets.into(), None, Some(to), duration_s)
    }

    pub fn from(targets: impl Into<Selector>, from: Style, duration_s: f64) -> Self {
        Self::new(targets.into(), Some(from), None, duration_s)
    }

    pub fn from_to(targets: impl Into<Selector>, from: Style, to: Style, duration_s: f64) -> Self {
        Self::new(targets.into(), Some(from), Some(to), duration_s)
    }

    /// Instant change.
    pub fn set(targets: impl Into<Selector>, to: Style) -> Self {
        Self::new(targets.into(), None, Some(to), 0.0)
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn delay(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s;
        self
    }

    pub fn stagger(mut self, stagger_s: f64) -> Self {
        self.stagger_s = stagger_s;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn validate(&self) -> SiteResult<()> {
        let empty = |s: &Option<Style>| s.as_ref().is_none_or(Style::is_empty);
        if empty(&self.from) && empty(&self.to) {
            return Err(SiteError::animation(format!(
                "tween on '{}' animates no properties",
                self.targets
            )));
        }
        if !self.duration_s.is_finite() || self.duration_s < 0.0 {
            return Err(SiteError::animation(format!(
                "tween on '{}' has invalid duration {}",
                self.targets, self.duration_s
            )));
        }
        if !self.delay_s.is_finite() || self.delay_s < 0.0 {
            return Err(SiteError::animation(format!(
                "tween on '{}' has invalid delay {}",
                self.targets, self.delay_s
            )));
        }
        if !self.stagger_s.is_finite() {
            return Err(SiteError::animation(format!(
                "tween on '{}' has invalid stagger",
                self.targets
            )));
        }
        Ok(())
    }

    /// Time from the first target's start to the last target's end.
    pub fn span_s(&self, target_count: usize) -> f64 {
        let n = target_count.max(1) - 1;
        self.stagger_s.abs() * n as f64 + self.duration_s * self.repeat.cycles()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/tween.rs"]
mod tests;
