use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::{
    animation::style::{Prop, PropValue, Style},
    foundation::core::{Extent, Viewport},
    foundation::error::{SiteError, SiteResult},
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Stable identifier of a stage element. Ids grow monotonically, so id order
/// is document (insertion) order.
pub struct ElementId(pub u32);

/// Element lookup used by tweens, scroll bindings and pins.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Selector {
    /// Unique element name (`#name`).
    Name(String),
    /// Every element carrying a class (`.class`).
    Class(String),
}

impl Selector {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(n) => write!(f, "#{n}"),
            Self::Class(c) => write!(f, ".{c}"),
        }
    }
}

impl FromStr for Selector {
    type Err = SiteError;

    fn from_str(s: &str) -> SiteResult<Self> {
        let s = s.trim();
        let (ctor, rest): (fn(String) -> Self, &str) = if let Some(rest) = s.strip_prefix('.') {
            (Self::Class, rest)
        } else {
            (Self::Name, s.strip_prefix('#').unwrap_or(s))
        };
        if rest.is_empty() {
            return Err(SiteError::validation(format!("empty selector '{s}'")));
        }
        Ok(ctor(rest.to_string()))
    }
}

impl From<&str> for Selector {
    /// Infallible shorthand for literal selectors; an empty literal becomes a
    /// name that matches nothing.
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| Self::Name(String::new()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Vertical placement of an element in document coordinates.
pub struct LayoutBox {
    /// Distance from the document top.
    pub top: Extent,
    /// Element height.
    pub height: Extent,
}

/// Declaration of an element before it is inserted into a [`Stage`].
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ElementSpec {
    pub name: String,
    pub classes: Vec<String>,
    pub text: Option<String>,
    pub image: Option<String>,
    /// Route path a click on this element navigates to.
    pub href: Option<String>,
    pub base: Style,
    pub layout: LayoutBox,
    pub interactive: bool,
}

impl ElementSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(src.into());
        self
    }

    /// A link: interactive, with a navigation target.
    pub fn href(mut self, path: impl Into<String>) -> Self {
        self.href = Some(path.into());
        self.interactive = true;
        self
    }

    pub fn base(mut self, base: Style) -> Self {
        self.base = base;
        self
    }

    pub fn at(mut self, top: Extent, height: Extent) -> Self {
        self.layout = LayoutBox { top, height };
        self
    }

    /// Links, buttons, form fields and other hover targets.
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// A live element on the stage.
pub struct Element {
    pub id: ElementId,
    pub name: String,
    pub classes: Vec<String>,
    pub text: Option<String>,
    pub image: Option<String>,
    pub href: Option<String>,
    pub base: Style,
    pub current: Style,
    pub layout: LayoutBox,
    pub interactive: bool,
    pub pinned: bool,
}

impl Element {
    fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Name(n) => self.name == *n,
            Selector::Class(c) => self.classes.iter().any(|k| k == c),
        }
    }

    /// Current value of `prop`, falling back to the base and then the neutral value.
    pub fn value(&self, prop: Prop) -> PropValue {
        self.current
            .declared(prop)
            .unwrap_or_else(|| self.base.get(prop))
    }
}

/// The display tree every animation writes into.
#[derive(Clone, Debug)]
pub struct Stage {
    viewport: Viewport,
    scroll_y: f64,
    next_id: u32,
    elements: BTreeMap<ElementId, Element>,
}

impl Stage {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scroll_y: 0.0,
            next_id: 0,
            elements: BTreeMap::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn insert(&mut self, spec: ElementSpec) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        let element = Element {
            id,
            name: spec.name,
            classes: spec.classes,
            text: spec.text,
            image: spec.image,
            href: spec.href,
            current: spec.base.clone(),
            base: spec.base,
            layout: spec.layout,
            interactive: spec.interactive,
            pinned: false,
        };
        self.elements.insert(id, element);
        id
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// First element with this name.
    pub fn find(&self, name: &str) -> Option<ElementId> {
        self.elements
            .values()
            .find(|e| e.name == name)
            .map(|e| e.id)
    }

    /// Every matching element in document order. An empty result is not an error.
    pub fn resolve(&self, selector: &Selector) -> Vec<ElementId> {
        self.elements
            .values()
            .filter(|e| e.matches(selector))
            .map(|e| e.id)
            .collect()
    }

    /// Declared base value, or the neutral value for missing elements.
    pub fn base_value(&self, id: ElementId, prop: Prop) -> PropValue {
        self.elements
            .get(&id)
            .map(|e| e.base.get(prop))
            .unwrap_or_else(|| prop.neutral())
    }

    /// Current value, or the neutral value for missing elements.
    pub fn value(&self, id: ElementId, prop: Prop) -> PropValue {
        self.elements
            .get(&id)
            .map(|e| e.value(prop))
            .unwrap_or_else(|| prop.neutral())
    }

    /// Numeric shorthand for [`Stage::value`].
    pub fn number(&self, id: ElementId, prop: Prop) -> f64 {
        self.value(id, prop)
            .as_number()
            .or_else(|| prop.neutral().as_number())
            .unwrap_or(0.0)
    }

    /// Write a property. Writes to removed elements are dropped.
    pub fn apply(&mut self, id: ElementId, prop: Prop, value: PropValue) {
        if let Some(e) = self.elements.get_mut(&id) {
            e.current.insert(prop, value);
        }
    }

    /// Replace an element's text content (counters, form values).
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(e) = self.elements.get_mut(&id) {
            e.text = Some(text.into());
        }
    }

    /// Restore an element's declared style and release any pin.
    pub fn reset(&mut self, id: ElementId) {
        if let Some(e) = self.elements.get_mut(&id) {
            e.current = e.base.clone();
            e.pinned = false;
        }
    }

    pub fn set_pinned(&mut self, id: ElementId, pinned: bool) {
        if let Some(e) = self.elements.get_mut(&id) {
            e.pinned = pinned;
        }
    }

    pub fn is_pinned(&self, id: ElementId) -> bool {
        self.elements.get(&id).is_some_and(|e| e.pinned)
    }

    /// Document-space `(top, height)` in pixels for the current viewport.
    pub fn measure(&self, id: ElementId) -> Option<(f64, f64)> {
        let e = self.elements.get(&id)?;
        Some((
            e.layout.top.resolve(self.viewport),
            e.layout.height.resolve(self.viewport).max(0.0),
        ))
    }

    pub fn snapshot(&self) -> StageSnapshot {
        StageSnapshot {
            viewport: self.viewport,
            scroll_y: self.scroll_y,
            elements: self
                .elements
                .values()
                .map(|e| ElementSnapshot {
                    id: e.id,
                    name: e.name.clone(),
                    pinned: e.pinned,
                    style: e.base.clone().merged(&e.current),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// Serializable view of the stage at one instant.
pub struct StageSnapshot {
    pub viewport: Viewport,
    pub scroll_y: f64,
    pub elements: Vec<ElementSnapshot>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ElementSnapshot {
    pub id: ElementId,
    pub name: String,
    pub pinned: bool,
    pub style: Style,
}

#[cfg(test)]
#[path = "../../tests/unit/engine/stage.rs"]
mod tests;
