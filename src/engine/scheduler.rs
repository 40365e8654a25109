use std::collections::{BTreeMap, BTreeSet};

use crate::{
    engine::{
        scroll::{Region, ScrollBinding, ScrollRange, ToggleAction, ToggleActions},
        stage::{ElementId, Stage},
    },
    foundation::error::{SiteError, SiteResult},
    timeline::{
        player::Player,
        timeline::{CompiledTimeline, Timeline},
    },
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// A scheduler context. Everything created under an owner is torn down
/// together by [`Scheduler::revert`].
pub struct OwnerId(pub u32);

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// A player, scroll binding or listener registered with the scheduler.
/// Handles render in id order, so a newer handle wins over an older one
/// writing the same property.
pub struct HandleId(pub u32);

/// Host events a listener handle subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EventKind {
    Scroll,
    Pointer,
    Resize,
}

#[derive(Debug)]
struct BindingState {
    binding: ScrollBinding,
    source: Option<Timeline>,
    player: Option<Player>,
    range: Option<ScrollRange>,
    live: bool,
    region: Region,
    pins: Vec<ElementId>,
}

impl BindingState {
    /// Compile the bound timeline and resolve pins for the current layout.
    fn activate(&mut self, stage: &mut Stage) -> SiteResult<()> {
        self.player = match &self.source {
            Some(tl) => {
                let compiled = tl.compile(stage)?;
                let mut player = match self.binding.scrub {
                    Some(scrub) => Player::scrubbed(compiled, scrub),
                    None => Player::paused(compiled),
                };
                player.render(stage);
                Some(player)
            }
            None => None,
        };
        self.pins = self
            .binding
            .pin
            .as_ref()
            .map(|sel| stage.resolve(sel))
            .unwrap_or_default();
        self.range = self.binding.measure(stage);
        self.region = Region::Before;
        self.live = true;
        Ok(())
    }

    /// Release pins and restore everything the bound timeline wrote.
    fn deactivate(&mut self, stage: &mut Stage) {
        for &id in &self.pins {
            stage.set_pinned(id, false);
        }
        if let Some(player) = self.player.take() {
            for id in player.compiled().elements() {
                stage.reset(id);
            }
        }
        self.pins.clear();
        self.range = None;
        self.region = Region::Before;
        self.live = false;
    }

    fn touched(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.player
            .iter()
            .flat_map(|p| p.compiled().elements())
            .chain(self.pins.iter().copied())
    }

    fn sync(&mut self, stage: &mut Stage) {
        if !self.live {
            return;
        }
        let Some(range) = self.range else {
            return;
        };
        let y = stage.scroll_y();
        let region = range.region(y);
        if let Some(player) = self.player.as_mut() {
            if player.is_scrubbed() {
                player.set_scrub_progress(range.progress(y));
            } else {
                for action in crossings(self.region, region, self.binding.toggle) {
                    apply_toggle(player, action);
                }
            }
            player.render(stage);
        }
        let pinned = region == Region::Inside;
        for &id in &self.pins {
            stage.set_pinned(id, pinned);
        }
        self.region = region;
    }
}

/// Toggle actions fired when the scroll position moves from `from` to `to`.
fn crossings(from: Region, to: Region, t: ToggleActions) -> Vec<ToggleAction> {
    use Region::*;
    match (from, to) {
        (Before, Inside) => vec![t.on_enter],
        (Before, After) => vec![t.on_enter, t.on_leave],
        (Inside, After) => vec![t.on_leave],
        (After, Inside) => vec![t.on_enter_back],
        (After, Before) => vec![t.on_enter_back, t.on_leave_back],
        (Inside, Before) => vec![t.on_leave_back],
        _ => Vec::new(),
    }
}

fn apply_toggle(player: &mut Player, action: ToggleAction) {
    match action {
        ToggleAction::Play => player.play(),
        ToggleAction::Pause => player.pause(),
        ToggleAction::Resume => player.resume(),
        ToggleAction::Reverse => player.reverse(),
        ToggleAction::Restart => player.restart(),
        ToggleAction::Reset => {
            player.seek(0.0);
            player.pause();
        }
        ToggleAction::Complete => {
            player.seek(player.duration_s());
            player.pause();
        }
        ToggleAction::None => {}
    }
}

#[derive(Debug)]
enum Slot {
    Player(Player),
    Binding(Box<BindingState>),
    Listener(EventKind),
}

#[derive(Debug)]
struct Handle {
    owner: OwnerId,
    slot: Slot,
}

#[derive(Debug)]
struct Owner {
    label: String,
    handles: BTreeSet<HandleId>,
    touched: BTreeSet<ElementId>,
}

/// Single interpreter for every player, scroll binding and listener.
///
/// Hosts drive it with [`Scheduler::tick`], [`Scheduler::on_scroll`] and
/// [`Scheduler::refresh`]; pages and shell components create handles under
/// their own [`OwnerId`] and tear them down with [`Scheduler::revert`].
#[derive(Debug, Default)]
pub struct Scheduler {
    next_owner: u32,
    next_handle: u32,
    owners: BTreeMap<OwnerId, Owner>,
    handles: BTreeMap<HandleId, Handle>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new owner context.
    pub fn open(&mut self, label: impl Into<String>) -> OwnerId {
        let id = OwnerId(self.next_owner);
        self.next_owner += 1;
        let label = label.into();
        tracing::debug!(owner = id.0, %label, "open scheduler context");
        self.owners.insert(
            id,
            Owner {
                label,
                handles: BTreeSet::new(),
                touched: BTreeSet::new(),
            },
        );
        id
    }

    pub fn is_open(&self, owner: OwnerId) -> bool {
        self.owners.contains_key(&owner)
    }

    fn register(
        &mut self,
        owner: OwnerId,
        slot: Slot,
        touched: impl IntoIterator<Item = ElementId>,
    ) -> SiteResult<HandleId> {
        let entry = self
            .owners
            .get_mut(&owner)
            .ok_or_else(|| SiteError::evaluation(format!("scheduler owner {} is not open", owner.0)))?;
        let id = HandleId(self.next_handle);
        self.next_handle += 1;
        entry.handles.insert(id);
        entry.touched.extend(touched);
        self.handles.insert(id, Handle { owner, slot });
        Ok(id)
    }

    /// Compile `timeline` and start it on the clock. From-states render at once.
    pub fn play(
        &mut self,
        owner: OwnerId,
        timeline: &Timeline,
        stage: &mut Stage,
    ) -> SiteResult<HandleId> {
        let compiled = timeline.compile(stage)?;
        self.add_player(owner, Player::clock(compiled), stage)
    }

    /// Register an already-built player.
    pub fn add_player(
        &mut self,
        owner: OwnerId,
        mut player: Player,
        stage: &mut Stage,
    ) -> SiteResult<HandleId> {
        let touched = player.compiled().elements();
        player.render(stage);
        self.register(owner, Slot::Player(player), touched)
    }

    /// Attach a scroll binding, optionally driving `timeline`.
    ///
    /// The binding is evaluated against the current scroll position right
    /// away, so a section already in view plays on mount. Bindings whose
    /// media query does not match stay dormant until a matching
    /// [`Scheduler::refresh`].
    pub fn bind(
        &mut self,
        owner: OwnerId,
        binding: ScrollBinding,
        timeline: Option<&Timeline>,
        stage: &mut Stage,
    ) -> SiteResult<HandleId> {
        if !self.owners.contains_key(&owner) {
            return Err(SiteError::evaluation(format!(
                "scheduler owner {} is not open",
                owner.0
            )));
        }
        if let Some(tl) = timeline {
            tl.validate()?;
        }
        let mut state = BindingState {
            binding,
            source: timeline.cloned(),
            player: None,
            range: None,
            live: false,
            region: Region::Before,
            pins: Vec::new(),
        };
        if state.binding.is_live(stage.viewport()) {
            state.activate(stage)?;
            state.sync(stage);
        } else {
            tracing::debug!(trigger = %state.binding.trigger, "scroll binding dormant for viewport");
        }
        let touched: Vec<ElementId> = state.touched().collect();
        self.register(owner, Slot::Binding(Box::new(state)), touched)
    }

    /// Subscribe `owner` to a host event.
    pub fn listen(&mut self, owner: OwnerId, kind: EventKind) -> SiteResult<HandleId> {
        self.register(owner, Slot::Listener(kind), [])
    }

    /// Drop one handle. Values it already wrote stay on the stage; pins are released.
    pub fn kill(&mut self, handle: HandleId, stage: &mut Stage) -> bool {
        let Some(h) = self.handles.remove(&handle) else {
            return false;
        };
        if let Some(owner) = self.owners.get_mut(&h.owner) {
            owner.handles.remove(&handle);
        }
        if let Slot::Binding(state) = h.slot {
            for id in state.pins {
                stage.set_pinned(id, false);
            }
        }
        true
    }

    /// Advance every clock and scrub smoother by `dt_s`, then render.
    #[tracing::instrument(level = "trace", skip(self, stage))]
    pub fn tick(&mut self, dt_s: f64, stage: &mut Stage) {
        for h in self.handles.values_mut() {
            let player = match &mut h.slot {
                Slot::Player(p) => Some(p),
                Slot::Binding(b) => b.player.as_mut(),
                Slot::Listener(_) => None,
            };
            if let Some(p) = player {
                p.tick(dt_s);
                p.render(stage);
            }
        }
    }

    /// Re-evaluate every live binding against the stage's scroll position.
    pub fn on_scroll(&mut self, stage: &mut Stage) {
        for h in self.handles.values_mut() {
            if let Slot::Binding(b) = &mut h.slot {
                b.sync(stage);
            }
        }
    }

    /// Recompute ranges after a layout change, re-evaluate media queries and
    /// recompile bindings that asked for it.
    #[tracing::instrument(skip(self, stage), fields(viewport = ?stage.viewport()))]
    pub fn refresh(&mut self, stage: &mut Stage) -> SiteResult<()> {
        let mut newly_touched: Vec<(OwnerId, Vec<ElementId>)> = Vec::new();
        for h in self.handles.values_mut() {
            let Slot::Binding(b) = &mut h.slot else {
                continue;
            };
            let live_now = b.binding.is_live(stage.viewport());
            match (b.live, live_now) {
                (true, false) => {
                    tracing::debug!(trigger = %b.binding.trigger, "media query stopped matching");
                    b.deactivate(stage);
                }
                (false, true) => {
                    b.activate(stage)?;
                    newly_touched.push((h.owner, b.touched().collect()));
                }
                (true, true) => {
                    if b.binding.invalidate_on_refresh
                        && let (Some(tl), Some(player)) = (&b.source, b.player.as_mut())
                    {
                        player.replace_timeline(tl.compile(stage)?);
                    }
                    b.range = b.binding.measure(stage);
                }
                (false, false) => {}
            }
            b.sync(stage);
        }
        for (owner, ids) in newly_touched {
            if let Some(o) = self.owners.get_mut(&owner) {
                o.touched.extend(ids);
            }
        }
        Ok(())
    }

    /// Drop every handle `owner` created and restore the elements it touched.
    /// Returns the number of handles dropped.
    #[tracing::instrument(skip(self, stage))]
    pub fn revert(&mut self, owner: OwnerId, stage: &mut Stage) -> usize {
        let Some(entry) = self.owners.remove(&owner) else {
            return 0;
        };
        for id in &entry.handles {
            self.handles.remove(id);
        }
        for &id in &entry.touched {
            stage.reset(id);
        }
        tracing::debug!(label = %entry.label, handles = entry.handles.len(), "reverted scheduler context");
        entry.handles.len()
    }

    /// Total live handles across all owners.
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Live handles created by `owner` (zero once reverted).
    pub fn handles_of(&self, owner: OwnerId) -> usize {
        self.owners.get(&owner).map_or(0, |o| o.handles.len())
    }

    pub fn contains(&self, handle: HandleId) -> bool {
        self.handles.contains_key(&handle)
    }

    /// True if any live listener subscribes to `kind`.
    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.handles
            .values()
            .any(|h| matches!(h.slot, Slot::Listener(k) if k == kind))
    }

    pub fn player(&self, handle: HandleId) -> Option<&Player> {
        match &self.handles.get(&handle)?.slot {
            Slot::Player(p) => Some(p),
            Slot::Binding(b) => b.player.as_ref(),
            Slot::Listener(_) => None,
        }
    }

    /// Resolved range of a live binding.
    pub fn binding_range(&self, handle: HandleId) -> Option<ScrollRange> {
        match &self.handles.get(&handle)?.slot {
            Slot::Binding(b) if b.live => b.range,
            _ => None,
        }
    }

    pub fn is_binding_live(&self, handle: HandleId) -> bool {
        matches!(
            self.handles.get(&handle).map(|h| &h.slot),
            Some(Slot::Binding(b)) if b.live
        )
    }

    /// Bindings of `owner` that pin something, in creation order.
    pub fn pinning_bindings(&self, owner: OwnerId) -> Vec<HandleId> {
        self.handles
            .iter()
            .filter(|(_, h)| {
                h.owner == owner && matches!(&h.slot, Slot::Binding(b) if b.binding.pin.is_some())
            })
            .map(|(id, _)| *id)
            .collect()
    }

    /// Compiled timelines currently held by `owner`.
    pub fn compiled_of(&self, owner: OwnerId) -> Vec<&CompiledTimeline> {
        self.handles
            .values()
            .filter(|h| h.owner == owner)
            .filter_map(|h| match &h.slot {
                Slot::Player(p) => Some(p.compiled()),
                Slot::Binding(b) => b.player.as_ref().map(Player::compiled),
                Slot::Listener(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scheduler.rs"]
mod tests;
