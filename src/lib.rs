//! Voidblossom is a headless, deterministic motion engine for the Voidblossom
//! marketing site.
//!
//! Pages are declared as element trees plus [`Timeline`] data; one
//! [`Scheduler`] interprets every clock-driven player, scroll binding and
//! listener. The [`Site`] shell ties them together:
//!
//! - a [`PreloadGate`] that counts to 100 and wipes itself away
//! - a [`PointerTrail`] of seven followers with a hover registry
//! - the navigation bar and menu
//! - five routed pages, each mounted under its own scheduler owner
#![forbid(unsafe_code)]

pub mod animation;
pub mod engine;
pub mod foundation;
pub mod motion;
pub mod site;
pub mod timeline;

pub use crate::animation::{
    ease::Ease,
    style::{Prop, PropValue, Style},
};
pub use crate::engine::{
    scheduler::{EventKind, HandleId, OwnerId, Scheduler},
    scroll::{MediaQuery, ScrollBinding, ScrollRange, ToggleActions},
    stage::{ElementId, ElementSpec, Selector, Stage, StageSnapshot},
};
pub use crate::foundation::core::{Breakpoint, Extent, Fps, Point, Rgba8, Vec2, Viewport};
pub use crate::foundation::error::{SiteError, SiteResult};
pub use crate::motion::{
    navbar::NavBar,
    preload::{GatePhase, PreloadGate},
    sequencer::{NarrativeSequencer, Step, StepMotion},
    trail::PointerTrail,
};
pub use crate::site::{
    config::SiteConfig,
    pages::contact::ContactForm,
    routes::Route,
    shell::{Site, SiteSnapshot},
};
pub use crate::timeline::{
    player::{Player, Scrub},
    position::Position,
    timeline::{CompiledTimeline, Timeline},
    tween::Tween,
};
