use crate::{engine::stage::Stage, timeline::timeline::CompiledTimeline};

/// Snap distance for smoothed scrubbing.
const SCRUB_EPSILON_S: f64 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// How a scroll position reaches a scrubbed playhead.
pub enum Scrub {
    /// The playhead jumps to the scroll-derived time.
    Instant,
    /// The playhead catches up over roughly `lag_s` seconds.
    Smooth { lag_s: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
enum Drive {
    Clock,
    Scrub(Scrub),
}

/// Playback state of one compiled timeline.
///
/// Clock-driven players advance with [`Player::tick`]; scrubbed players move
/// toward a target set from scroll progress. Rendering is change-driven: a
/// player only writes to the stage when its playhead moved, so a finished
/// timeline never fights a later one over the same property.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Player {
    timeline: CompiledTimeline,
    time_s: f64,
    target_s: f64,
    direction: Direction,
    paused: bool,
    drive: Drive,
    activated: Vec<bool>,
    dirty: bool,
}

impl Player {
    fn with_drive(timeline: CompiledTimeline, drive: Drive, paused: bool) -> Self {
        let n = timeline.tracks.len();
        Self {
            timeline,
            time_s: 0.0,
            target_s: 0.0,
            direction: Direction::Forward,
            paused,
            drive,
            activated: vec![false; n],
            dirty: true,
        }
    }

    /// Plays forward from zero on the wall clock.
    pub fn clock(timeline: CompiledTimeline) -> Self {
        Self::with_drive(timeline, Drive::Clock, false)
    }

    /// Clock-driven but waiting for [`Player::play`].
    pub fn paused(timeline: CompiledTimeline) -> Self {
        Self::with_drive(timeline, Drive::Clock, true)
    }

    /// Driven by [`Player::set_scrub_progress`].
    pub fn scrubbed(timeline: CompiledTimeline, scrub: Scrub) -> Self {
        Self::with_drive(timeline, Drive::Scrub(scrub), true)
    }

    pub fn compiled(&self) -> &CompiledTimeline {
        &self.timeline
    }

    /// Swap in a recompiled timeline, keeping the playhead.
    pub fn replace_timeline(&mut self, timeline: CompiledTimeline) {
        self.activated = vec![false; timeline.tracks.len()];
        self.timeline = timeline;
        self.time_s = self.time_s.min(self.duration_s());
        self.target_s = self.target_s.min(self.duration_s());
        self.dirty = true;
    }

    pub fn label(&self) -> &str {
        &self.timeline.label
    }

    pub fn duration_s(&self) -> f64 {
        self.timeline.duration_s
    }

    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_scrubbed(&self) -> bool {
        matches!(self.drive, Drive::Scrub(_))
    }

    /// Playhead position in `[0, 1]`; endless timelines report zero.
    pub fn progress(&self) -> f64 {
        let d = self.duration_s();
        if !d.is_finite() {
            return 0.0;
        }
        if d <= 0.0 {
            return 1.0;
        }
        (self.time_s / d).clamp(0.0, 1.0)
    }

    /// True once a forward clock run reached the end.
    pub fn is_finished(&self) -> bool {
        match self.drive {
            Drive::Clock => {
                self.direction == Direction::Forward && self.time_s >= self.duration_s()
            }
            Drive::Scrub(_) => false,
        }
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.paused = false;
    }

    pub fn seek(&mut self, t: f64) {
        let t = t.clamp(0.0, self.duration_s().max(0.0));
        if t != self.time_s {
            self.time_s = t;
            self.dirty = true;
        }
        self.target_s = t;
    }

    pub fn restart(&mut self) {
        self.seek(0.0);
        self.play();
        self.dirty = true;
    }

    /// Set the scroll-derived target. The playhead is a pure function of this
    /// value, so moving back and forth re-samples the same timeline.
    pub fn set_scrub_progress(&mut self, progress: f64) {
        let d = self.duration_s();
        if !d.is_finite() {
            return;
        }
        self.target_s = progress.clamp(0.0, 1.0) * d;
        if let Drive::Scrub(Scrub::Instant) = self.drive
            && self.time_s != self.target_s
        {
            self.time_s = self.target_s;
            self.dirty = true;
        }
    }

    /// Advance by `dt_s`.
    pub fn tick(&mut self, dt_s: f64) {
        let dt_s = dt_s.max(0.0);
        let before = self.time_s;
        match self.drive {
            Drive::Clock => {
                if self.paused {
                    return;
                }
                let d = self.duration_s();
                let next = match self.direction {
                    Direction::Forward => self.time_s + dt_s,
                    Direction::Reverse => self.time_s - dt_s,
                };
                self.time_s = next.clamp(0.0, d.max(0.0));
                let at_edge = match self.direction {
                    Direction::Forward => self.time_s >= d,
                    Direction::Reverse => self.time_s <= 0.0,
                };
                if at_edge {
                    self.paused = true;
                }
            }
            Drive::Scrub(Scrub::Instant) => {
                self.time_s = self.target_s;
            }
            Drive::Scrub(Scrub::Smooth { lag_s }) => {
                let gap = self.target_s - self.time_s;
                if gap.abs() <= SCRUB_EPSILON_S {
                    self.time_s = self.target_s;
                } else if lag_s <= 0.0 {
                    self.time_s = self.target_s;
                } else {
                    let alpha = (dt_s / lag_s).clamp(0.0, 1.0);
                    self.time_s += gap * alpha;
                }
            }
        }
        if self.time_s != before {
            self.dirty = true;
        }
    }

    /// True when the next [`Player::render`] will write.
    pub fn needs_render(&self) -> bool {
        self.dirty
    }

    /// Write every started track into `stage`.
    ///
    /// A track starts once the playhead moves past its first segment (or
    /// reaches an instant set). Until then only its immediate from-state is
    /// written; after that, moving back before it restores its from-state.
    pub fn render(&mut self, stage: &mut Stage) {
        if !self.dirty {
            return;
        }
        let t = self.time_s;
        for (i, pt) in self.timeline.tracks.iter().enumerate() {
            if !self.activated[i] {
                self.activated[i] = pt.track.segments.first().is_some_and(|s| {
                    t > s.start_s || (s.duration_s <= 0.0 && t >= s.start_s)
                });
            }
            let value = if self.activated[i] {
                pt.track.sample_rewound(t)
            } else {
                pt.track.immediate
            };
            if let Some(v) = value {
                stage.apply(pt.element, pt.prop, v);
            }
        }
        self.dirty = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/player.rs"]
mod tests;
