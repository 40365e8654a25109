use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8, Vec2},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoopMode {
    Repeat,
    PingPong,
}

/// How many extra cycles a segment plays after its first.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    #[default]
    Once,
    Times { extra: u32, mode: LoopMode },
    Forever { mode: LoopMode },
}

impl Repeat {
    /// Total number of cycles, `INFINITY` when unbounded.
    pub fn cycles(self) -> f64 {
        match self {
            Self::Once => 1.0,
            Self::Times { extra, .. } => 1.0 + f64::from(extra),
            Self::Forever { .. } => f64::INFINITY,
        }
    }

    fn mode(self) -> LoopMode {
        match self {
            Self::Once => LoopMode::Repeat,
            Self::Times { mode, .. } | Self::Forever { mode } => mode,
        }
    }

    /// Linear progress (before easing) at `cycles` elapsed cycles.
    fn progress(self, cycles: f64) -> f64 {
        let total = self.cycles();
        let ping_pong = self.mode() == LoopMode::PingPong;
        if cycles >= total {
            let last = (total - 1.0) as u64;
            return if ping_pong && last % 2 == 1 { 0.0 } else { 1.0 };
        }
        let iter = cycles.floor();
        let frac = cycles - iter;
        if ping_pong && (iter as u64) % 2 == 1 {
            1.0 - frac
        } else {
            frac
        }
    }
}

/// A single from/to interpolation placed on a timeline.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Segment<T> {
    pub start_s: f64,
    pub duration_s: f64, // one cycle
    pub from: T,
    pub to: T,
    pub ease: Ease,
    #[serde(default)]
    pub repeat: Repeat,
}

impl<T> Segment<T>
where
    T: Lerp + Clone,
{
    /// Time at which the last cycle ends (`INFINITY` for endless loops).
    pub fn end_s(&self) -> f64 {
        self.start_s + self.duration_s * self.repeat.cycles()
    }

    /// Value at absolute timeline time `t`. Times before `start_s` clamp to `from`.
    pub fn sample(&self, t: f64) -> T {
        if self.duration_s <= 0.0 {
            return if t >= self.start_s {
                self.to.clone()
            } else {
                self.from.clone()
            };
        }
        if t <= self.start_s {
            return self.from.clone();
        }
        let cycles = (t - self.start_s) / self.duration_s;
        let p = self.repeat.progress(cycles);
        T::lerp(&self.from, &self.to, self.ease.apply(p))
    }
}

/// Segments for one property of one element, sorted by start time.
///
/// Before the first segment a track yields nothing unless it carries an
/// `immediate` value (the from-state of a from/from-to tween rendered at
/// creation time).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Track<T> {
    pub segments: Vec<Segment<T>>,
    pub immediate: Option<T>,
}

impl<T> Default for Track<T> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            immediate: None,
        }
    }
}

impl<T> Track<T>
where
    T: Lerp + Clone,
{
    /// Insert keeping segments ordered by start; equal starts keep insertion order.
    pub fn insert(&mut self, seg: Segment<T>) {
        let idx = self.segments.partition_point(|s| s.start_s <= seg.start_s);
        self.segments.insert(idx, seg);
    }

    pub fn first_start_s(&self) -> Option<f64> {
        self.segments.first().map(|s| s.start_s)
    }

    pub fn end_s(&self) -> f64 {
        self.segments
            .iter()
            .map(Segment::end_s)
            .fold(0.0, f64::max)
    }

    /// Value at `t`, or `None` if nothing has started and no immediate value exists.
    pub fn sample(&self, t: f64) -> Option<T> {
        let idx = self.segments.partition_point(|s| s.start_s < t);
        if idx == 0 {
            return match self.segments.first() {
                Some(first) if t >= first.start_s => Some(first.sample(t)),
                _ => self.immediate.clone(),
            };
        }
        Some(self.segments[idx - 1].sample(t))
    }

    /// Like [`Track::sample`], but before the first segment falls back to its
    /// from-state. Used once a playhead has passed the track's start, so
    /// scrubbing back restores the pre-animation value.
    pub fn sample_rewound(&self, t: f64) -> Option<T> {
        self.sample(t)
            .or_else(|| self.segments.first().map(|s| s.from.clone()))
    }
}

/// Retargetable single-value tween with an optional start delay.
///
/// Calling [`Tweener::retarget`] while in flight restarts from the current
/// value, so the newest target always wins.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Tweener<T> {
    from: T,
    to: T,
    elapsed_s: f64,
    delay_s: f64,
    duration_s: f64,
    ease: Ease,
}

impl<T> Tweener<T>
where
    T: Lerp + Clone,
{
    /// At rest on `value`.
    pub fn at_rest(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
            elapsed_s: 0.0,
            delay_s: 0.0,
            duration_s: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn retarget(&mut self, to: T, duration_s: f64, delay_s: f64, ease: Ease) {
        self.from = self.value();
        self.to = to;
        self.elapsed_s = 0.0;
        self.delay_s = delay_s.max(0.0);
        self.duration_s = duration_s.max(0.0);
        self.ease = ease;
    }

    pub fn advance(&mut self, dt_s: f64) {
        self.elapsed_s += dt_s.max(0.0);
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed_s >= self.delay_s + self.duration_s
    }

    pub fn target(&self) -> &T {
        &self.to
    }

    pub fn value(&self) -> T {
        if self.is_settled() {
            return self.to.clone();
        }
        let local = self.elapsed_s - self.delay_s;
        if local <= 0.0 {
            return self.from.clone();
        }
        let t = local / self.duration_s;
        T::lerp(&self.from, &self.to, self.ease.apply(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
