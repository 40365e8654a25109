use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::{
        anim::{Segment, Track},
        ease::Ease,
        style::{Prop, PropValue},
    },
    engine::stage::{ElementId, Stage},
    foundation::error::{SiteError, SiteResult},
    timeline::{position::Position, tween::Tween},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A tween plus where it sits on the timeline.
pub struct Entry {
    pub tween: Tween,
    pub position: Position,
}

/// Where `to`-only tweens read their start value when no earlier segment
/// in the same timeline covers the property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StartValues {
    /// The element's declared base style.
    #[default]
    Base,
    /// Whatever the stage shows when the timeline is compiled.
    Current,
}

/// Declarative timeline: an ordered list of `(tween, position)` entries that
/// share one virtual clock.
///
/// Nothing is resolved until [`Timeline::compile`], which binds selectors to
/// stage elements and flattens every entry into per-property tracks.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    pub label: String,
    pub default_ease: Ease,
    #[serde(default)]
    pub start: StartValues,
    pub entries: Vec<Entry>,
}

impl Timeline {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default_ease: Ease::OutQuad,
            start: StartValues::Base,
            entries: Vec::new(),
        }
    }

    pub fn with_default_ease(mut self, ease: Ease) -> Self {
        self.default_ease = ease;
        self
    }

    /// Start from the stage's current values (overwrite-style tweens).
    pub fn from_current(mut self) -> Self {
        self.start = StartValues::Current;
        self
    }

    /// Append at the current end.
    pub fn then(self, tween: Tween) -> Self {
        self.at(tween, Position::Append)
    }

    pub fn at(mut self, tween: Tween, position: Position) -> Self {
        self.push(tween, position);
        self
    }

    pub fn push(&mut self, tween: Tween, position: Position) {
        self.entries.push(Entry { tween, position });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.label.trim().is_empty() {
            return Err(SiteError::validation("timeline label must be non-empty"));
        }
        for entry in &self.entries {
            entry.tween.validate()?;
            if let Position::At(t) = entry.position
                && (!t.is_finite() || t < 0.0)
            {
                return Err(SiteError::animation(format!(
                    "timeline '{}' has invalid absolute position {t}",
                    self.label
                )));
            }
        }
        Ok(())
    }

    /// Resolve selectors against `stage` and flatten into tracks.
    ///
    /// Targets that match nothing keep their time slot but animate nothing.
    /// Start values of `to`-only tweens come from earlier segments in this
    /// timeline, or from the stage as selected by [`Timeline::start`].
    #[tracing::instrument(skip(self, stage), fields(label = %self.label))]
    pub fn compile(&self, stage: &Stage) -> SiteResult<CompiledTimeline> {
        self.validate()?;

        let mut tracks: BTreeMap<(ElementId, Prop), Track<PropValue>> = BTreeMap::new();
        let mut end_s = 0.0f64;
        let mut prev_start_s = 0.0f64;

        for entry in &self.entries {
            let tween = &entry.tween;
            let start_s = entry.position.resolve(end_s, prev_start_s) + tween.delay_s;

            let mut targets = stage.resolve(&tween.targets);
            if targets.is_empty() {
                tracing::debug!(selector = %tween.targets, "tween target not found; no-op");
            }
            if tween.stagger_s < 0.0 {
                targets.reverse();
            }

            let props: BTreeSet<Prop> = tween
                .from
                .iter()
                .chain(tween.to.iter())
                .flat_map(|s| s.props())
                .collect();
            let ease = tween.ease.unwrap_or(self.default_ease);

            for (i, id) in targets.iter().enumerate() {
                let t0 = start_s + tween.stagger_s.abs() * i as f64;
                for &prop in &props {
                    let track = tracks.entry((*id, prop)).or_default();
                    let current = track
                        .sample(t0)
                        .unwrap_or_else(|| match self.start {
                            StartValues::Base => stage.base_value(*id, prop),
                            StartValues::Current => stage.value(*id, prop),
                        });
                    let from = tween
                        .from
                        .as_ref()
                        .and_then(|s| s.declared(prop))
                        .unwrap_or(current);
                    let to = tween
                        .to
                        .as_ref()
                        .and_then(|s| s.declared(prop))
                        .unwrap_or(current);

                    if tween.from.is_some() && track.segments.is_empty() {
                        track.immediate = Some(from);
                    }
                    track.insert(Segment {
                        start_s: t0,
                        duration_s: tween.duration_s,
                        from,
                        to,
                        ease,
                        repeat: tween.repeat,
                    });
                }
            }

            end_s = end_s.max(start_s + tween.span_s(targets.len()));
            prev_start_s = start_s;
        }

        Ok(CompiledTimeline {
            label: self.label.clone(),
            duration_s: end_s,
            tracks: tracks
                .into_iter()
                .map(|((element, prop), track)| PropTrack {
                    element,
                    prop,
                    track,
                })
                .collect(),
        })
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// A timeline bound to concrete elements.
pub struct CompiledTimeline {
    pub label: String,
    pub duration_s: f64,
    pub tracks: Vec<PropTrack>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PropTrack {
    pub element: ElementId,
    pub prop: Prop,
    pub track: Track<PropValue>,
}

impl CompiledTimeline {
    /// Every element this timeline writes to.
    pub fn elements(&self) -> BTreeSet<ElementId> {
        self.tracks.iter().map(|t| t.element).collect()
    }

    pub fn track(&self, element: ElementId, prop: Prop) -> Option<&Track<PropValue>> {
        self.tracks
            .iter()
            .find(|t| t.element == element && t.prop == prop)
            .map(|t| &t.track)
    }

    /// Pure sample of one property at time `t` (no playback state).
    pub fn sample(&self, element: ElementId, prop: Prop, t: f64) -> Option<PropValue> {
        self.track(element, prop)?.sample(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/timeline.rs"]
mod tests;
