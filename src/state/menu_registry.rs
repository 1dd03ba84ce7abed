use std::collections::BTreeMap;

use crate::state::events::MenuId;

/// Identity of one pointer interaction (one click).
///
/// A menu remembers the interaction that opened it so the very same click,
/// seen again at the root, does not dismiss it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InteractionId(u64);

/// Tracks every open menu and routes outside interactions to them.
///
/// Each entry is a dismiss listener: it exists exactly while its menu is open.
/// Opening a menu displaces every other registered one, which keeps at most
/// one menu open across the grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuRegistry {
    listeners: BTreeMap<MenuId, Option<InteractionId>>,
    next_interaction: u64,
    in_flight: Option<InteractionId>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of an interaction that a menu trigger handles first.
    pub fn begin_interaction(&mut self) -> InteractionId {
        let id = self.allocate();
        self.in_flight = Some(id);
        id
    }

    /// Called by the root handler once the interaction has reached it.
    /// Returns the in-flight id if a trigger claimed it, or a fresh one.
    pub fn finish_interaction(&mut self) -> InteractionId {
        match self.in_flight.take() {
            Some(id) => id,
            None => self.allocate(),
        }
    }

    /// Registers `menu` as open and returns the menus it displaces. The caller
    /// must close those.
    pub fn register(&mut self, menu: MenuId, activation: Option<InteractionId>) -> Vec<MenuId> {
        let displaced = self
            .listeners
            .keys()
            .copied()
            .filter(|id| *id != menu)
            .collect();
        self.listeners.insert(menu, activation);
        displaced
    }

    pub fn deregister(&mut self, menu: MenuId) -> bool {
        self.listeners.remove(&menu).is_some()
    }

    pub fn is_registered(&self, menu: MenuId) -> bool {
        self.listeners.contains_key(&menu)
    }

    pub fn open_menus(&self) -> Vec<MenuId> {
        self.listeners.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Dismisses every menu not opened by `interaction`; those listeners are
    /// removed and returned so the caller can close the menus.
    pub fn outside_interaction(&mut self, interaction: InteractionId) -> Vec<MenuId> {
        let dismissed: Vec<MenuId> = self
            .listeners
            .iter()
            .filter(|(_, activation)| **activation != Some(interaction))
            .map(|(id, _)| *id)
            .collect();
        for id in &dismissed {
            self.listeners.remove(id);
        }
        dismissed
    }

    /// Drops every listener, returning the menus that were open.
    pub fn clear(&mut self) -> Vec<MenuId> {
        let open = self.open_menus();
        self.listeners.clear();
        self.in_flight = None;
        open
    }

    fn allocate(&mut self) -> InteractionId {
        self.next_interaction += 1;
        InteractionId(self.next_interaction)
    }
}
