use crate::{
    engine::{
        scheduler::{EventKind, HandleId, OwnerId, Scheduler},
        stage::{ElementId, ElementSpec, Stage, StageSnapshot},
    },
    foundation::{
        core::{Point, Viewport},
        error::{SiteError, SiteResult},
    },
    motion::{
        navbar::NavBar,
        preload::{GatePhase, PreloadGate},
        trail::PointerTrail,
    },
    site::{
        config::SiteConfig,
        pages::{self, MountedPage, PageContext},
        routes::Route,
    },
};

/// Footer links shown once the preload gate has finished.
const FOOTER_LINKS: [(&str, &str, Option<&str>); 6] = [
    ("footer-void", "Void", Some("/product")),
    ("footer-manifesto", "Manifesto", Some("/philosophy")),
    ("footer-makers", "Makers", Some("/about")),
    ("footer-inquiry", "Inquiry", Some("/contact")),
    ("footer-legal", "Legal", None),
    ("footer-privacy", "Privacy", None),
];

/// Static footer copy: brand, rights line and closing quote.
const FOOTER_COPY: [(&str, &str); 2] = [
    ("footer-rights", "© 2024 Essence in Abstentia"),
    ("footer-quote", "\"We are the space between the notes.\""),
];

/// Serializable state of the whole site at one instant.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SiteSnapshot {
    pub route: Route,
    pub gate: GatePhase,
    pub preload_progress: u32,
    pub menu_open: bool,
    pub handles: usize,
    pub stage: StageSnapshot,
}

/// The page shell: preload gate, cursor, navigation chrome and the mounted
/// page, driven entirely by host calls.
#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    stage: Stage,
    scheduler: Scheduler,
    shell: OwnerId,
    pointer_listener: HandleId,
    resize_listener: HandleId,
    trail: PointerTrail,
    gate: PreloadGate,
    navbar: Option<NavBar>,
    footer: Vec<ElementId>,
    route: Route,
    page: Option<MountedPage>,
}

fn mount_page(
    route: Route,
    stage: &mut Stage,
    scheduler: &mut Scheduler,
    config: &SiteConfig,
    trail: &mut PointerTrail,
) -> SiteResult<MountedPage> {
    let owner = scheduler.open(format!("page {route}"));
    let page = pages::mount(route, PageContext::new(stage, scheduler, config, owner))?;
    for &id in &page.interactive {
        trail.register(id);
    }
    Ok(page)
}

impl Site {
    /// Open the preload gate and mount the home page beneath it.
    #[tracing::instrument(skip(config))]
    pub fn new(config: SiteConfig, viewport: Viewport) -> SiteResult<Self> {
        config.validate()?;
        let mut stage = Stage::new(viewport);
        let mut scheduler = Scheduler::new();
        let shell = scheduler.open("shell");
        let pointer_listener = scheduler.listen(shell, EventKind::Pointer)?;
        let resize_listener = scheduler.listen(shell, EventKind::Resize)?;

        let mut trail = PointerTrail::new(&mut stage, config.is_mobile(viewport));
        let gate = PreloadGate::open(&mut stage, &mut scheduler)?;
        let page = mount_page(Route::Home, &mut stage, &mut scheduler, &config, &mut trail)?;

        Ok(Self {
            config,
            stage,
            scheduler,
            shell,
            pointer_listener,
            resize_listener,
            trail,
            gate,
            navbar: None,
            footer: Vec::new(),
            route: Route::Home,
            page: Some(page),
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn page_owner(&self) -> Option<OwnerId> {
        self.page.as_ref().map(|p| p.owner)
    }

    pub fn trail(&self) -> &PointerTrail {
        &self.trail
    }

    pub fn navbar(&self) -> Option<&NavBar> {
        self.navbar.as_ref()
    }

    pub fn gate_phase(&self) -> GatePhase {
        self.gate.phase()
    }

    pub fn preload_progress(&self) -> u32 {
        self.gate.progress()
    }

    /// First scroll binding of the current page that pins an element.
    pub fn first_pin_binding(&self) -> Option<HandleId> {
        let owner = self.page_owner()?;
        self.scheduler.pinning_bindings(owner).into_iter().next()
    }

    /// Advance every clock by `dt_s`. Completing the preload gate reveals
    /// the navigation bar and footer.
    pub fn tick(&mut self, dt_s: f64) -> SiteResult<()> {
        self.scheduler.tick(dt_s, &mut self.stage);
        self.trail.tick(dt_s, &mut self.stage);
        if self
            .gate
            .advance(dt_s, &mut self.stage, &mut self.scheduler)
        {
            self.reveal_chrome()?;
        }
        Ok(())
    }

    fn reveal_chrome(&mut self) -> SiteResult<()> {
        let navbar = NavBar::mount(&mut self.stage, &mut self.scheduler)?;
        for &id in navbar.interactive() {
            self.trail.register(id);
        }
        self.navbar = Some(navbar);

        let brand = self.stage.insert(ElementSpec::new("footer-brand").text(self.config.brand.clone()));
        self.footer.push(brand);
        for (name, copy) in FOOTER_COPY {
            let id = self.stage.insert(ElementSpec::new(name).class("footer-copy").text(copy));
            self.footer.push(id);
        }
        for (name, label, href) in FOOTER_LINKS {
            let spec = ElementSpec::new(name).class("footer-link").text(label);
            let spec = match href {
                Some(path) => spec.href(path),
                None => spec.interactive(),
            };
            let id = self.stage.insert(spec);
            self.trail.register(id);
            self.footer.push(id);
        }
        tracing::debug!(owner = self.shell.0, "navigation chrome revealed");
        Ok(())
    }

    /// False once [`Site::shutdown`] has closed the shell.
    pub fn is_running(&self) -> bool {
        self.scheduler.is_open(self.shell)
    }

    /// The splash covers the page until the gate is done; the page gets no
    /// hover or click before that.
    fn accepts_pointer(&self) -> bool {
        self.scheduler.contains(self.pointer_listener) && self.gate.phase() == GatePhase::Done
    }

    /// Scroll the page. Ignored (returns false) while the menu locks scroll
    /// and after shutdown.
    pub fn scroll_to(&mut self, y: f64) -> SiteResult<bool> {
        if !self.is_running() {
            return Ok(false);
        }
        if self.navbar.as_ref().is_some_and(NavBar::locks_scroll) {
            tracing::debug!(y, "scroll ignored while menu is open");
            return Ok(false);
        }
        self.apply_scroll(y)?;
        Ok(true)
    }

    fn apply_scroll(&mut self, y: f64) -> SiteResult<()> {
        self.stage.set_scroll_y(y.max(0.0));
        self.scheduler.on_scroll(&mut self.stage);
        if let Some(nav) = self.navbar.as_mut() {
            nav.on_scroll(&mut self.stage, &mut self.scheduler)?;
        }
        Ok(())
    }

    pub fn pointer_move(&mut self, p: Point) {
        if self.scheduler.contains(self.pointer_listener) {
            self.trail.pointer_move(p);
        }
    }

    /// Returns false while the preload splash covers the page.
    pub fn pointer_enter(&mut self, id: ElementId) -> bool {
        self.accepts_pointer() && self.trail.pointer_enter(id)
    }

    pub fn pointer_leave(&mut self, id: ElementId) -> bool {
        self.accepts_pointer() && self.trail.pointer_leave(id)
    }

    /// Activate an element: links navigate, the menu toggle toggles.
    /// Returns the route navigated to, if any. Clicks under the preload
    /// splash do nothing.
    pub fn click(&mut self, id: ElementId) -> SiteResult<Option<Route>> {
        if !self.accepts_pointer() {
            return Ok(None);
        }
        let Some(element) = self.stage.get(id) else {
            return Ok(None);
        };
        if let Some(path) = element.href.clone() {
            return self.navigate(&path).map(Some);
        }
        if element.name == "menu-toggle" {
            self.toggle_menu()?;
        }
        Ok(None)
    }

    /// Store the viewport and refresh every scroll binding.
    pub fn resize(&mut self, viewport: Viewport) -> SiteResult<()> {
        if !self.scheduler.contains(self.resize_listener) {
            return Ok(());
        }
        self.stage.set_viewport(viewport);
        self.trail
            .set_hidden(self.config.is_mobile(viewport), &mut self.stage);
        self.scheduler.refresh(&mut self.stage)
    }

    /// Open or close the menu. No-op before the navigation bar exists.
    pub fn toggle_menu(&mut self) -> SiteResult<bool> {
        match self.navbar.as_mut() {
            Some(nav) => nav.toggle(&mut self.stage, &mut self.scheduler),
            None => Ok(false),
        }
    }

    fn unmount_page(&mut self) {
        let Some(page) = self.page.take() else {
            return;
        };
        self.scheduler.revert(page.owner, &mut self.stage);
        for &id in &page.elements {
            self.stage.remove(id);
        }
        self.trail.unregister_all(&page.interactive);
    }

    /// Tear down the current page and mount the one at `path`. The current
    /// route only closes the menu.
    #[tracing::instrument(skip(self))]
    pub fn navigate(&mut self, path: &str) -> SiteResult<Route> {
        if !self.is_running() {
            return Err(SiteError::unsupported("site has been shut down"));
        }
        let route: Route = path.parse()?;
        if route == self.route && self.page.is_some() {
            if let Some(nav) = self.navbar.as_mut() {
                nav.close(&mut self.stage, &mut self.scheduler)?;
            }
            return Ok(route);
        }
        self.unmount_page();
        if let Some(nav) = self.navbar.as_mut() {
            nav.close(&mut self.stage, &mut self.scheduler)?;
        }
        self.apply_scroll(0.0)?;
        self.trail
            .set_accent(route == Route::About, &mut self.stage);
        let page = mount_page(
            route,
            &mut self.stage,
            &mut self.scheduler,
            &self.config,
            &mut self.trail,
        )?;
        let from = std::mem::replace(&mut self.route, route);
        self.page = Some(page);
        tracing::info!(%from, to = %route, "route changed");
        Ok(route)
    }

    /// Remove the page, chrome, splash and cursor, then close the shell's
    /// listeners. Later host events are ignored.
    #[tracing::instrument(skip(self))]
    pub fn shutdown(&mut self) {
        self.unmount_page();
        if let Some(nav) = self.navbar.take() {
            self.trail.unregister_all(nav.interactive());
            nav.unmount(&mut self.stage, &mut self.scheduler);
        }
        self.trail.unregister_all(&self.footer);
        for id in self.footer.drain(..) {
            self.stage.remove(id);
        }
        self.gate.dismiss(&mut self.stage, &mut self.scheduler);
        self.scheduler.revert(self.shell, &mut self.stage);
        for id in self.trail.element_ids() {
            self.stage.remove(id);
        }
        tracing::info!(route = %self.route, "site shut down");
    }

    pub fn snapshot(&self) -> SiteSnapshot {
        SiteSnapshot {
            route: self.route,
            gate: self.gate.phase(),
            preload_progress: self.gate.progress(),
            menu_open: self.navbar.as_ref().is_some_and(NavBar::is_open),
            handles: self.scheduler.handle_count(),
            stage: self.stage.snapshot(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/shell.rs"]
mod tests;
