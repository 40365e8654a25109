use crate::{
    animation::{
        ease::Ease,
        style::{Prop, Style},
    },
    engine::stage::{Selector, Stage},
    timeline::{
        position::Position,
        timeline::{CompiledTimeline, Timeline},
        tween::Tween,
    },
};

/// How far a step's enter overlaps the end of the previous exit.
pub const ENTER_OVERLAP_S: f64 = 1.5;
/// How far a companion move overlaps the exit it follows.
pub const COMPANION_OVERLAP_S: f64 = 0.5;

/// Where a step's enter motion runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TriggerMode {
    /// Entered by a page-load timeline; the scrubbed sequence only exits it.
    Load,
    #[default]
    Scrubbed,
}

/// One enter or exit motion of a step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StepMotion {
    pub from: Option<Style>,
    pub to: Style,
    pub duration_s: f64,
    pub ease: Option<Ease>,
}

impl StepMotion {
    pub fn to(to: Style, duration_s: f64) -> Self {
        Self {
            from: None,
            to,
            duration_s,
            ease: None,
        }
    }

    pub fn from_to(from: Style, to: Style, duration_s: f64) -> Self {
        Self {
            from: Some(from),
            to,
            duration_s,
            ease: None,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    fn tween(&self, targets: &Selector) -> Tween {
        let t = match &self.from {
            Some(from) => Tween::from_to(targets.clone(), from.clone(), self.to.clone(), self.duration_s),
            None => Tween::to(targets.clone(), self.to.clone(), self.duration_s),
        };
        match self.ease {
            Some(e) => t.ease(e),
            None => t,
        }
    }
}

/// One narrative beat.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Step {
    pub selector: Selector,
    pub enter: Option<StepMotion>,
    pub exit: Option<StepMotion>,
    /// Pause between the end of the enter and the start of the exit.
    pub hold_s: f64,
    /// Overrides [`ENTER_OVERLAP_S`] for this step.
    pub enter_overlap_s: Option<f64>,
    pub enter_trigger: TriggerMode,
    /// Tweens placed after this step's exit (e.g. the vessel moving between beats).
    pub companions: Vec<Tween>,
}

impl Step {
    pub fn new(selector: impl Into<Selector>) -> Self {
        Self {
            selector: selector.into(),
            enter: None,
            exit: None,
            hold_s: 0.0,
            enter_overlap_s: None,
            enter_trigger: TriggerMode::Scrubbed,
            companions: Vec::new(),
        }
    }

    pub fn enter(mut self, motion: StepMotion) -> Self {
        self.enter = Some(motion);
        self
    }

    /// Mark the step as already entered by the page-load timeline.
    pub fn entered_on_load(mut self) -> Self {
        self.enter_trigger = TriggerMode::Load;
        self
    }

    pub fn exit(mut self, motion: StepMotion) -> Self {
        self.exit = Some(motion);
        self
    }

    pub fn hold(mut self, hold_s: f64) -> Self {
        self.hold_s = hold_s;
        self
    }

    pub fn enter_overlap(mut self, overlap_s: f64) -> Self {
        self.enter_overlap_s = Some(overlap_s);
        self
    }

    pub fn companion(mut self, tween: Tween) -> Self {
        self.companions.push(tween);
        self
    }
}

/// Sampled visual state of one step.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StepState {
    pub selector: Selector,
    pub opacity: f64,
    pub y: f64,
    pub blur: f64,
}

/// Lays out narrative steps on one scrubbed timeline.
///
/// Step `i + 1` enters `ENTER_OVERLAP_S` before the previous beat finishes,
/// companions start `COMPANION_OVERLAP_S` before the exit they follow ends,
/// and the first step's enter is appended at zero. Only the order of the
/// steps matters; the scroll range of the pinned section only rescales time.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NarrativeSequencer {
    pub label: String,
    pub default_ease: Ease,
    pub steps: Vec<Step>,
}

impl NarrativeSequencer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default_ease: Ease::OutExpo,
            steps: Vec::new(),
        }
    }

    pub fn default_ease(mut self, ease: Ease) -> Self {
        self.default_ease = ease;
        self
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn timeline(&self) -> Timeline {
        let mut tl = Timeline::new(self.label.clone()).with_default_ease(self.default_ease);
        for (i, step) in self.steps.iter().enumerate() {
            let mut entered = false;
            if let (Some(enter), TriggerMode::Scrubbed) = (&step.enter, step.enter_trigger) {
                let position = if i == 0 {
                    Position::Append
                } else {
                    Position::FromEnd(-step.enter_overlap_s.unwrap_or(ENTER_OVERLAP_S))
                };
                tl.push(enter.tween(&step.selector), position);
                entered = true;
            }
            if let Some(exit) = &step.exit {
                let position = if entered || step.hold_s > 0.0 {
                    Position::FromEnd(step.hold_s)
                } else {
                    Position::Append
                };
                tl.push(exit.tween(&step.selector), position);
                for companion in &step.companions {
                    tl.push(companion.clone(), Position::FromEnd(-COMPANION_OVERLAP_S));
                }
            }
        }
        tl
    }

    /// Visual state of every step at `progress` through `compiled`, a
    /// compiled [`NarrativeSequencer::timeline`]. Pure: no playback state.
    pub fn step_states(
        &self,
        compiled: &CompiledTimeline,
        stage: &Stage,
        progress: f64,
    ) -> Vec<StepState> {
        let t = progress.clamp(0.0, 1.0) * compiled.duration_s;
        self.steps
            .iter()
            .map(|step| {
                let id = stage.resolve(&step.selector).into_iter().next();
                let sample = |prop: Prop| -> f64 {
                    id.and_then(|id| {
                        compiled
                            .track(id, prop)
                            .and_then(|track| track.sample_rewound(t))
                            .or_else(|| Some(stage.base_value(id, prop)))
                    })
                    .and_then(|v| v.as_number())
                    .or_else(|| prop.neutral().as_number())
                    .unwrap_or(0.0)
                };
                StepState {
                    selector: step.selector.clone(),
                    opacity: sample(Prop::Opacity),
                    y: sample(Prop::Y),
                    blur: sample(Prop::Blur),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/sequencer.rs"]
mod tests;
