use crate::{
    animation::{
        anim::{LoopMode, Repeat, Segment},
        ease::Ease,
        style::Style,
    },
    engine::{
        scheduler::{OwnerId, Scheduler},
        stage::{ElementId, ElementSpec, Stage},
    },
    foundation::{
        core::{Extent, Rgba8},
        error::SiteResult,
    },
    timeline::{position::Position, timeline::Timeline, tween::Tween},
};

pub const BRAND: &str = "VOIDBLOSSOM";

pub const COUNTER_DURATION_S: f64 = 3.5;
pub const REVEAL_DELAY_S: f64 = 0.4;
pub const REVEAL_DURATION_S: f64 = 2.2;
pub const REVEAL_STAGGER_S: f64 = 0.1;
pub const EXIT_GAP_S: f64 = 0.6;
pub const EXIT_DURATION_S: f64 = 2.0;
pub const BREATH_DURATION_S: f64 = 5.0;
pub const BREATH_SCALE: f64 = 1.03;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum GatePhase {
    Loading,
    Exiting,
    Done,
}

/// Time at which the reveal's last character lands.
pub fn reveal_end_s() -> f64 {
    let chars = BRAND.chars().count().max(1) as f64;
    REVEAL_DELAY_S + REVEAL_STAGGER_S * (chars - 1.0) + REVEAL_DURATION_S
}

/// Time at which the exit wipe starts.
pub fn exit_start_s() -> f64 {
    COUNTER_DURATION_S.max(reveal_end_s()) + EXIT_GAP_S
}

pub fn exit_end_s() -> f64 {
    exit_start_s() + EXIT_DURATION_S
}

/// Zero-padded counter text.
pub fn format_progress(progress: u32) -> String {
    format!("{progress:03}")
}

/// The loading splash.
///
/// A purely time-based counter runs alongside the brand reveal; once both
/// have finished the gate wipes itself away, reports completion once, and
/// removes every element and handle it created.
#[derive(Debug)]
pub struct PreloadGate {
    owner: OwnerId,
    elements: Vec<ElementId>,
    counter_el: ElementId,
    counter: Segment<f64>,
    elapsed_s: f64,
    progress: u32,
    phase: GatePhase,
}

impl PreloadGate {
    /// Insert the splash and start its timelines.
    #[tracing::instrument(skip_all)]
    pub fn open(stage: &mut Stage, scheduler: &mut Scheduler) -> SiteResult<Self> {
        let owner = scheduler.open("preload");
        let mut elements = Vec::new();
        let mut insert = |stage: &mut Stage, spec: ElementSpec| {
            let id = stage.insert(spec);
            elements.push(id);
            id
        };

        insert(
            stage,
            ElementSpec::new("preloader")
                .base(Style::new().background(Rgba8::INK).clip_bottom(0.0))
                .at(Extent::ZERO, Extent::vh(1.0)),
        );
        insert(stage, ElementSpec::new("preloader-text"));
        for c in BRAND.chars() {
            insert(stage, ElementSpec::new("loader-char").class("loader-char").text(c.to_string()));
        }
        insert(stage, ElementSpec::new("preloader-status").text("Initializing Void"));
        let counter_el = insert(
            stage,
            ElementSpec::new("preloader-counter").text(format_progress(0)),
        );
        insert(stage, ElementSpec::new("preloader-mark").text("Essence of Silence"));

        let intro = Timeline::new("preload")
            .at(
                Tween::from_to(
                    ".loader-char",
                    Style::new().y(150.0).skew_y(10.0).opacity(0.0),
                    Style::new().y(0.0).skew_y(0.0).opacity(1.0),
                    REVEAL_DURATION_S,
                )
                .ease(Ease::OutExpo)
                .stagger(REVEAL_STAGGER_S)
                .delay(REVEAL_DELAY_S),
                Position::At(0.0),
            )
            .at(
                Tween::to("#preloader", Style::new().clip_bottom(100.0), EXIT_DURATION_S)
                    .ease(Ease::InOutExpo),
                Position::At(exit_start_s()),
            );
        scheduler.play(owner, &intro, stage)?;

        let breathing = Timeline::new("preload breathing").then(
            Tween::to("#preloader-text", Style::new().scale(BREATH_SCALE), BREATH_DURATION_S)
                .ease(Ease::InOutSine)
                .repeat(Repeat::Forever {
                    mode: LoopMode::PingPong,
                }),
        );
        scheduler.play(owner, &breathing, stage)?;

        Ok(Self {
            owner,
            elements,
            counter_el,
            counter: Segment {
                start_s: 0.0,
                duration_s: COUNTER_DURATION_S,
                from: 0.0,
                to: 100.0,
                ease: Ease::InOutCubic,
                repeat: Repeat::Once,
            },
            elapsed_s: 0.0,
            progress: 0,
            phase: GatePhase::Loading,
        })
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Counter value, `0..=100`.
    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn progress_text(&self) -> String {
        format_progress(self.progress)
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    /// Advance the gate's own clock. Returns true exactly once, on the call
    /// that finishes the exit; by then the gate's handles and elements are gone.
    pub fn advance(&mut self, dt_s: f64, stage: &mut Stage, scheduler: &mut Scheduler) -> bool {
        if self.phase == GatePhase::Done {
            return false;
        }
        self.elapsed_s += dt_s.max(0.0);

        let value = self.counter.sample(self.elapsed_s).floor().clamp(0.0, 100.0) as u32;
        // The counter never runs backwards.
        self.progress = self.progress.max(value);
        stage.set_text(self.counter_el, format_progress(self.progress));

        if self.phase == GatePhase::Loading && self.elapsed_s >= exit_start_s() {
            self.progress = 100;
            self.phase = GatePhase::Exiting;
            tracing::debug!(elapsed_s = self.elapsed_s, "preload exit started");
        }
        if self.phase == GatePhase::Exiting && self.elapsed_s >= exit_end_s() {
            self.phase = GatePhase::Done;
            scheduler.revert(self.owner, stage);
            for id in self.elements.drain(..) {
                stage.remove(id);
            }
            tracing::info!("preload complete");
            return true;
        }
        false
    }

    /// Remove the splash without reporting completion.
    pub fn dismiss(&mut self, stage: &mut Stage, scheduler: &mut Scheduler) {
        if self.phase == GatePhase::Done {
            return;
        }
        self.phase = GatePhase::Done;
        scheduler.revert(self.owner, stage);
        for id in self.elements.drain(..) {
            stage.remove(id);
        }
        tracing::debug!(elapsed_s = self.elapsed_s, "preload dismissed");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/preload.rs"]
mod tests;
