//! Page declarations: element trees with literal copy plus the timelines
//! and scroll bindings that animate them.

use crate::{
    engine::{
        scheduler::{HandleId, OwnerId, Scheduler},
        scroll::ScrollBinding,
        stage::{ElementId, ElementSpec, Stage},
    },
    foundation::{
        core::{Breakpoint, Extent},
        error::SiteResult,
    },
    site::{config::SiteConfig, routes::Route},
    timeline::timeline::Timeline,
};

pub mod about;
pub mod contact;
pub mod home;
pub mod philosophy;
pub mod product;

/// Everything a page needs while mounting. Elements and handles created
/// through it belong to the page's scheduler owner.
pub struct PageContext<'a> {
    pub stage: &'a mut Stage,
    pub scheduler: &'a mut Scheduler,
    pub config: &'a SiteConfig,
    owner: OwnerId,
    elements: Vec<ElementId>,
    interactive: Vec<ElementId>,
    cursor: Extent,
}

impl<'a> PageContext<'a> {
    pub fn new(
        stage: &'a mut Stage,
        scheduler: &'a mut Scheduler,
        config: &'a SiteConfig,
        owner: OwnerId,
    ) -> Self {
        Self {
            stage,
            scheduler,
            config,
            owner,
            elements: Vec::new(),
            interactive: Vec::new(),
            cursor: Extent::ZERO,
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Layout branch at mount time.
    pub fn breakpoint(&self) -> Breakpoint {
        self.config.breakpoint(self.stage.viewport())
    }

    pub fn asset_url(&self, name: &str) -> String {
        self.config.asset_url(name)
    }

    pub fn insert(&mut self, spec: ElementSpec) -> ElementId {
        let interactive = spec.interactive;
        let id = self.stage.insert(spec);
        self.elements.push(id);
        if interactive {
            self.interactive.push(id);
        }
        id
    }

    /// Place a block of `height` below the previous one.
    pub fn section(&mut self, spec: ElementSpec, height: Extent) -> ElementId {
        let top = self.cursor;
        self.cursor = top.plus(height);
        self.insert(spec.at(top, height))
    }

    /// Leave `height` of empty document below the last section (pin spacing).
    pub fn spacer(&mut self, height: Extent) {
        self.cursor = self.cursor.plus(height);
    }

    pub fn play(&mut self, timeline: &Timeline) -> SiteResult<HandleId> {
        self.scheduler.play(self.owner, timeline, self.stage)
    }

    pub fn bind(
        &mut self,
        binding: ScrollBinding,
        timeline: Option<&Timeline>,
    ) -> SiteResult<HandleId> {
        self.scheduler.bind(self.owner, binding, timeline, self.stage)
    }

    pub fn finish(self) -> MountedPage {
        MountedPage {
            owner: self.owner,
            elements: self.elements,
            interactive: self.interactive,
        }
    }
}

/// What a mounted page owns.
#[derive(Clone, Debug)]
pub struct MountedPage {
    pub owner: OwnerId,
    pub elements: Vec<ElementId>,
    pub interactive: Vec<ElementId>,
}

/// Mount `route` under `cx`'s owner.
#[tracing::instrument(skip(cx), fields(owner = cx.owner().0))]
pub fn mount(route: Route, mut cx: PageContext<'_>) -> SiteResult<MountedPage> {
    match route {
        Route::Home => home::mount(&mut cx)?,
        Route::Product => product::mount(&mut cx)?,
        Route::Philosophy => philosophy::mount(&mut cx)?,
        Route::About => about::mount(&mut cx)?,
        Route::Contact => contact::mount(&mut cx)?,
    }
    Ok(cx.finish())
}

#[cfg(test)]
#[path = "../../../tests/unit/site/pages/context.rs"]
mod tests;
