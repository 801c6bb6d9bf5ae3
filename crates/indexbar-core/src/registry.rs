//! Section registry
//!
//! Ordered collection of the sections mounted under an index bar. Order is
//! registration order and must match document order: the resolver scans it
//! top to bottom.
//!
//! The [`crate::IndexBar`] owns the registry. Content sections get a
//! [`Registrar`] holding only a weak back-reference, and keep the returned
//! [`SectionMount`] alive for as long as they are mounted.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

/// Stable identity of a registered section. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(u64);

/// Per-section pinning state consumed by the rendering layer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VisualState {
    pub active: bool,
    pub pinned_top: Option<f64>,
    pub pinned_left: Option<f64>,
    pub pinned_width: Option<f64>,
}

impl VisualState {
    /// Whether any pinned coordinate is set
    pub fn is_pinned(&self) -> bool {
        self.pinned_top.is_some() || self.pinned_left.is_some() || self.pinned_width.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One content group
#[derive(Debug, Clone)]
pub struct Section<H> {
    id: SectionId,
    /// Marker key this section answers to
    pub key: String,
    /// Declared value emitted on selection
    pub index: String,
    /// Last-measured header height
    pub height: f64,
    /// Handle the geometry provider resolves to a rect
    pub origin: H,
    pub(crate) state: VisualState,
}

impl<H> Section<H> {
    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn visual_state(&self) -> &VisualState {
        &self.state
    }
}

/// Ordered sections, owned by the index bar
#[derive(Debug)]
pub struct SectionRegistry<H> {
    sections: Vec<Section<H>>,
    next_id: u64,
}

impl<H> Default for SectionRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> SectionRegistry<H> {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a section. Duplicate keys are accepted; jumps resolve to the
    /// first registration.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        index: impl Into<String>,
        origin: H,
        height: f64,
    ) -> SectionId {
        let id = SectionId(self.next_id);
        self.next_id += 1;
        let key = key.into();
        debug!(?id, key = %key, "Registered section");
        self.sections.push(Section {
            id,
            key,
            index: index.into(),
            height,
            origin,
            state: VisualState::default(),
        });
        id
    }

    /// Remove a section, keeping the rest in order
    pub fn unregister(&mut self, id: SectionId) -> Option<Section<H>> {
        let pos = self.position(id)?;
        debug!(?id, "Unregistered section");
        Some(self.sections.remove(pos))
    }

    /// Record a new measured header height
    pub fn set_height(&mut self, id: SectionId, height: f64) -> bool {
        match self.sections.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                section.height = height;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: SectionId) -> Option<&Section<H>> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// First section registered under `key`
    pub fn find_by_key(&self, key: &str) -> Option<&Section<H>> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section<H>> {
        self.sections.iter()
    }

    pub fn as_slice(&self) -> &[Section<H>] {
        &self.sections
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Section<H>] {
        &mut self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Shared handle used by the owning index bar
pub(crate) type SharedRegistry<H> = Rc<RefCell<SectionRegistry<H>>>;

/// Non-owning back-reference handed to content sections
pub struct Registrar<H> {
    registry: Weak<RefCell<SectionRegistry<H>>>,
}

impl<H> Clone for Registrar<H> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<H> Registrar<H> {
    pub(crate) fn new(registry: &SharedRegistry<H>) -> Self {
        Self {
            registry: Rc::downgrade(registry),
        }
    }

    /// Mount a section. Returns `None` once the index bar is gone.
    pub fn register(
        &self,
        key: impl Into<String>,
        index: impl Into<String>,
        origin: H,
        height: f64,
    ) -> Option<SectionMount<H>> {
        let registry = self.registry.upgrade()?;
        let id = registry.borrow_mut().register(key, index, origin, height);
        Some(SectionMount {
            id,
            registry: self.registry.clone(),
        })
    }
}

/// Keeps a section registered; unregisters on drop
pub struct SectionMount<H> {
    id: SectionId,
    registry: Weak<RefCell<SectionRegistry<H>>>,
}

impl<H> SectionMount<H> {
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// Report a new header height after layout changed
    pub fn set_height(&self, height: f64) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().set_height(self.id, height);
        }
    }

    /// Unregister now instead of waiting for drop
    pub fn unmount(self) {}
}

impl<H> Drop for SectionMount<H> {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        match registry.try_borrow_mut() {
            Ok(mut registry) => {
                registry.unregister(self.id);
            }
            Err(_) => warn!(id = ?self.id, "Registry busy, section left registered"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<H>(registry: &SectionRegistry<H>) -> Vec<&str> {
        registry.iter().map(|s| s.key.as_str()).collect()
    }

    #[test]
    fn test_register_preserves_order() {
        let mut registry = SectionRegistry::new();
        registry.register("A", "A", 0usize, 20.0);
        registry.register("B", "B", 1, 20.0);
        registry.register("C", "C", 2, 20.0);
        assert_eq!(keys(&registry), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unregister_keeps_relative_order() {
        let mut registry = SectionRegistry::new();
        registry.register("A", "A", 0usize, 20.0);
        let b = registry.register("B", "B", 1, 20.0);
        registry.register("C", "C", 2, 20.0);

        let removed = registry.unregister(b).expect("section registered");
        assert_eq!(removed.key, "B");
        assert_eq!(keys(&registry), vec!["A", "C"]);
        assert!(registry.unregister(b).is_none());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut registry = SectionRegistry::new();
        let a = registry.register("A", "A", 0usize, 20.0);
        registry.unregister(a);
        let b = registry.register("A", "A", 0usize, 20.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_duplicate_keys_resolve_to_first() {
        let mut registry = SectionRegistry::new();
        let first = registry.register("A", "first", 0usize, 20.0);
        registry.register("A", "second", 1, 20.0);
        let found = registry.find_by_key("A").expect("key registered");
        assert_eq!(found.id(), first);
        assert_eq!(found.index, "first");
    }

    #[test]
    fn test_set_height() {
        let mut registry = SectionRegistry::new();
        let a = registry.register("A", "A", 0usize, 20.0);
        assert!(registry.set_height(a, 44.0));
        assert_eq!(registry.get(a).map(|s| s.height), Some(44.0));
        registry.unregister(a);
        assert!(!registry.set_height(a, 10.0));
    }

    #[test]
    fn test_mount_unregisters_on_drop() {
        let shared: SharedRegistry<usize> = Rc::new(RefCell::new(SectionRegistry::new()));
        let registrar = Registrar::new(&shared);

        let a = registrar.register("A", "A", 0, 20.0).expect("bar alive");
        let b = registrar.register("B", "B", 1, 20.0).expect("bar alive");
        assert_eq!(shared.borrow().len(), 2);

        b.set_height(32.0);
        assert_eq!(shared.borrow().get(b.id()).map(|s| s.height), Some(32.0));

        drop(a);
        assert_eq!(keys(&shared.borrow()), vec!["B"]);

        b.unmount();
        assert!(shared.borrow().is_empty());
    }

    #[test]
    fn test_registrar_after_owner_dropped() {
        let shared: SharedRegistry<usize> = Rc::new(RefCell::new(SectionRegistry::new()));
        let registrar = Registrar::new(&shared);
        let mount = registrar.register("A", "A", 0, 20.0).expect("bar alive");

        drop(shared);
        assert!(registrar.register("B", "B", 1, 20.0).is_none());
        // Dropping a mount after its owner is gone is a no-op
        drop(mount);
    }

    #[test]
    fn test_visual_state_clear() {
        let mut state = VisualState {
            active: true,
            pinned_top: Some(1.0),
            pinned_left: Some(2.0),
            pinned_width: Some(3.0),
        };
        assert!(state.is_pinned());
        state.clear();
        assert_eq!(state, VisualState::default());
        assert!(!state.is_pinned());
    }
}
