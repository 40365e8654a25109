use crate::foundation::error::{SiteError, SiteResult};

pub use kurbo::{Point, Vec2};

/// Width (in CSS pixels) below which the layout switches to its mobile branch.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Host tick rate used to step the virtual clock.
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator (must be > 0).
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> SiteResult<Self> {
        if den == 0 {
            return Err(SiteError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SiteError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of a single frame, in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Number of whole frames needed to cover `secs`.
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        (secs * self.as_f64()).ceil().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Visible browser area in CSS pixels.
pub struct Viewport {
    /// Viewport width.
    pub width: u32,
    /// Viewport height.
    pub height: u32,
}

impl Viewport {
    /// Build a validated viewport.
    pub fn new(width: u32, height: u32) -> SiteResult<Self> {
        if width == 0 || height == 0 {
            return Err(SiteError::validation("viewport width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Layout branch for a mobile threshold; `width < mobile_below_px` is mobile.
    pub fn breakpoint_at(self, mobile_below_px: u32) -> Breakpoint {
        if self.width < mobile_below_px {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }

    /// Viewport height as `f64`.
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Layout branch.
pub enum Breakpoint {
    /// Narrow viewport.
    Mobile,
    /// Wide viewport.
    Desktop,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A value with separate mobile and desktop variants.
pub struct Responsive<T> {
    /// Value used when the viewport is mobile.
    pub mobile: T,
    /// Value used otherwise.
    pub desktop: T,
}

impl<T: Copy> Responsive<T> {
    /// Pair a mobile and a desktop value.
    pub const fn new(mobile: T, desktop: T) -> Self {
        Self { mobile, desktop }
    }

    /// Pick the variant for a breakpoint.
    pub fn pick(self, bp: Breakpoint) -> T {
        match bp {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Desktop => self.desktop,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A length expressed as `px + vh * viewport_height`.
pub struct Extent {
    /// Fixed pixel part.
    pub px: f64,
    /// Viewport-height multiple.
    pub vh: f64,
}

impl Extent {
    /// Zero length.
    pub const ZERO: Self = Self { px: 0.0, vh: 0.0 };

    /// Pure pixel length.
    pub const fn px(px: f64) -> Self {
        Self { px, vh: 0.0 }
    }

    /// Pure viewport-height length (`1.0` is one screen).
    pub const fn vh(vh: f64) -> Self {
        Self { px: 0.0, vh }
    }

    /// Sum of two extents.
    pub const fn plus(self, other: Self) -> Self {
        Self {
            px: self.px + other.px,
            vh: self.vh + other.vh,
        }
    }

    /// Resolve against a viewport.
    pub fn resolve(self, viewport: Viewport) -> f64 {
        self.px + self.vh * viewport.height_px()
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Site background.
    pub const INK: Self = Self::rgb(14, 14, 14);
    /// Site foreground.
    pub const IVORY: Self = Self::rgb(246, 245, 243);
    /// Accent.
    pub const GOLD: Self = Self::rgb(197, 179, 88);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Same color with a fractional alpha in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
