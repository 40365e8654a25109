use std::collections::BTreeMap;

use crate::{animation::anim::Lerp, foundation::core::Rgba8};

/// Animatable visual property of a stage element.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Prop {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Horizontal translation in pixels.
    X,
    /// Horizontal translation as a percentage of the element width.
    XPercent,
    /// Vertical translation in pixels.
    Y,
    /// Vertical translation as a percentage of the viewport height.
    YViewport,
    /// Uniform scale.
    Scale,
    /// Rotation around the z axis, in degrees.
    RotateZ,
    /// Vertical skew, in degrees.
    SkewY,
    /// Gaussian blur radius in pixels.
    Blur,
    /// Clip-path inset from the top edge, in percent.
    ClipTop,
    /// Clip-path inset from the bottom edge, in percent.
    ClipBottom,
    /// Background color.
    Background,
    /// Border color.
    Border,
    /// Whether the element is visible at all.
    Visible,
    /// Whether the element receives pointer events.
    Interactive,
}

impl Prop {
    /// Value an element has when nothing declares this property.
    pub fn neutral(self) -> PropValue {
        match self {
            Self::Opacity | Self::Scale => PropValue::Number(1.0),
            Self::X
            | Self::XPercent
            | Self::Y
            | Self::YViewport
            | Self::RotateZ
            | Self::SkewY
            | Self::Blur
            | Self::ClipTop
            | Self::ClipBottom => PropValue::Number(0.0),
            Self::Background | Self::Border => PropValue::Color(Rgba8::transparent()),
            Self::Visible | Self::Interactive => PropValue::Toggle(true),
        }
    }
}

/// Value of a single [`Prop`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Number(f64),
    Color(Rgba8),
    Toggle(bool),
}

impl PropValue {
    /// Numeric payload, if any.
    pub fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(v),
            _ => None,
        }
    }

    /// Color payload, if any.
    pub fn as_color(self) -> Option<Rgba8> {
        match self {
            Self::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Toggle payload, if any.
    pub fn as_toggle(self) -> Option<bool> {
        match self {
            Self::Toggle(b) => Some(b),
            _ => None,
        }
    }
}

impl Lerp for PropValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Number(a), Self::Number(b)) => Self::Number(f64::lerp(a, b, t)),
            (Self::Color(a), Self::Color(b)) => Self::Color(Rgba8::lerp(a, b, t)),
            // Discrete values switch at the ends; in between the element stays
            // on if either end is on, so a reveal is visible while it plays.
            (Self::Toggle(a), Self::Toggle(b)) => {
                if t <= 0.0 {
                    Self::Toggle(*a)
                } else if t >= 1.0 {
                    Self::Toggle(*b)
                } else {
                    Self::Toggle(*a || *b)
                }
            }
            _ => {
                if t >= 1.0 {
                    *b
                } else {
                    *a
                }
            }
        }
    }
}

/// Ordered set of property values.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<Prop, PropValue>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Declared value, if any.
    pub fn declared(&self, prop: Prop) -> Option<PropValue> {
        self.0.get(&prop).copied()
    }

    /// Declared value, or the property's neutral value.
    pub fn get(&self, prop: Prop) -> PropValue {
        self.declared(prop).unwrap_or_else(|| prop.neutral())
    }

    /// Numeric value, falling back to the neutral value.
    pub fn number(&self, prop: Prop) -> f64 {
        self.get(prop)
            .as_number()
            .or_else(|| prop.neutral().as_number())
            .unwrap_or(0.0)
    }

    pub fn insert(&mut self, prop: Prop, value: PropValue) {
        self.0.insert(prop, value);
    }

    pub fn props(&self) -> impl Iterator<Item = Prop> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prop, PropValue)> + '_ {
        self.0.iter().map(|(p, v)| (*p, *v))
    }

    /// Overlay `other` on top of `self`.
    pub fn merged(mut self, other: &Style) -> Self {
        for (p, v) in other.iter() {
            self.0.insert(p, v);
        }
        self
    }

    pub fn with(mut self, prop: Prop, value: PropValue) -> Self {
        self.0.insert(prop, value);
        self
    }

    fn num(self, prop: Prop, v: f64) -> Self {
        self.with(prop, PropValue::Number(v))
    }

    pub fn opacity(self, v: f64) -> Self {
        self.num(Prop::Opacity, v)
    }

    pub fn x(self, v: f64) -> Self {
        self.num(Prop::X, v)
    }

    pub fn x_percent(self, v: f64) -> Self {
        self.num(Prop::XPercent, v)
    }

    pub fn y(self, v: f64) -> Self {
        self.num(Prop::Y, v)
    }

    pub fn y_viewport(self, v: f64) -> Self {
        self.num(Prop::YViewport, v)
    }

    pub fn scale(self, v: f64) -> Self {
        self.num(Prop::Scale, v)
    }

    pub fn rotate_z(self, deg: f64) -> Self {
        self.num(Prop::RotateZ, deg)
    }

    pub fn skew_y(self, deg: f64) -> Self {
        self.num(Prop::SkewY, deg)
    }

    pub fn blur(self, px: f64) -> Self {
        self.num(Prop::Blur, px)
    }

    pub fn clip_top(self, pct: f64) -> Self {
        self.num(Prop::ClipTop, pct)
    }

    pub fn clip_bottom(self, pct: f64) -> Self {
        self.num(Prop::ClipBottom, pct)
    }

    pub fn background(self, c: Rgba8) -> Self {
        self.with(Prop::Background, PropValue::Color(c))
    }

    pub fn border(self, c: Rgba8) -> Self {
        self.with(Prop::Border, PropValue::Color(c))
    }

    pub fn visible(self, on: bool) -> Self {
        self.with(Prop::Visible, PropValue::Toggle(on))
    }

    pub fn interactive(self, on: bool) -> Self {
        self.with(Prop::Interactive, PropValue::Toggle(on))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/style.rs"]
mod tests;
