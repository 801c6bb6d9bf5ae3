//! Index bar
//!
//! Owns the section registry and geometry provider, and wires scroll and
//! pointer input through the resolver, sticky computer and navigator.

use std::cell::{Ref, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::config::IndexBarConfig;
use crate::events::IndexBarEvent;
use crate::geometry::GeometryProvider;
use crate::gesture::TouchTracker;
use crate::navigator::JumpNavigator;
use crate::pointer::{MoveOutcome, PointerTracker};
use crate::registry::{Registrar, SectionId, SectionRegistry, SharedRegistry, VisualState};
use crate::resolver::Measurement;
use crate::sticky::{apply_sticky, clear_sticky};

/// One sidebar marker as the rendering layer should draw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerView<'a> {
    pub key: &'a str,
    pub active: bool,
    /// Highlight color override, only on the active marker
    pub color: Option<&'a str>,
}

/// Scroll-synchronized index sidebar
pub struct IndexBar<P: GeometryProvider> {
    config: IndexBarConfig,
    provider: P,
    registry: SharedRegistry<P::Handle>,
    active: Option<usize>,
    active_anchor: Option<String>,
    pointer: PointerTracker,
    events: VecDeque<IndexBarEvent>,
    attached: bool,
    refresh_pending: bool,
}

impl<P: GeometryProvider> IndexBar<P> {
    pub fn new(config: IndexBarConfig, provider: P) -> Self {
        Self::with_touch(config, provider, TouchTracker::new())
    }

    /// Use a custom gesture tracker (e.g. zero travel threshold on grids)
    pub fn with_touch(config: IndexBarConfig, provider: P, touch: TouchTracker) -> Self {
        Self {
            config,
            provider,
            registry: Rc::new(RefCell::new(SectionRegistry::new())),
            active: None,
            active_anchor: None,
            pointer: PointerTracker::new(touch),
            events: VecDeque::new(),
            attached: false,
            refresh_pending: false,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start reacting to scroll and pointer input
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        debug!(sections = self.registry.borrow().len(), "Index bar attached");
        self.recompute();
    }

    /// Stop reacting to input. Current state is kept.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.refresh_pending = false;
        debug!("Index bar detached");
    }

    /// Back-reference for content sections to mount themselves
    pub fn registrar(&self) -> Registrar<P::Handle> {
        Registrar::new(&self.registry)
    }

    // =========================================================================
    // Scroll synchronization
    // =========================================================================

    /// Scroll (or resize) event from the scroll container
    pub fn on_scroll(&mut self) {
        if self.attached {
            self.recompute();
        }
    }

    /// Rendering-complete tick; runs a recompute deferred by a config change
    pub fn on_render_complete(&mut self) {
        if std::mem::take(&mut self.refresh_pending) {
            trace!("Running deferred index bar refresh");
            self.on_scroll();
        }
    }

    fn recompute(&mut self) {
        if self.provider.is_hidden() {
            trace!("Index bar hidden, keeping previous state");
            return;
        }

        let mut registry = self.registry.borrow_mut();
        let measurement = Measurement::take(&self.provider, registry.as_slice());
        let active = measurement
            .resolver_input(self.config.sticky, self.config.sticky_offset_top)
            .resolve();

        if active != self.active {
            debug!(from = ?self.active, to = ?active, "Active anchor changed");
        }
        self.active = active;
        self.active_anchor = active.and_then(|i| self.config.index_list.get(i).cloned());

        if self.config.sticky {
            let provider = &self.provider;
            apply_sticky(
                registry.as_mut_slice(),
                active,
                &measurement,
                self.config.sticky_offset_top,
                |handle| provider.bounding_rect(handle),
            );
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Jump to the section registered under `key`. Returns whether a
    /// section matched; a match queues a select event.
    pub fn jump_to(&mut self, key: &str) -> bool {
        let navigator = JumpNavigator::new(self.config.sticky, self.config.sticky_offset_top);
        let event = {
            let registry = self.registry.borrow();
            navigator.jump_to(&mut self.provider, &registry, key)
        };
        let Some(event) = event else {
            return false;
        };
        self.events.push_back(event);
        // Scrolling into view moved the container
        self.on_scroll();
        true
    }

    /// Tap on a sidebar target carrying `key` (`None` when the target has
    /// no marker)
    pub fn tap(&mut self, key: Option<&str>) -> bool {
        if !self.attached {
            return false;
        }
        key.is_some_and(|key| self.jump_to(key))
    }

    /// Drag gesture started on the sidebar
    pub fn touch_start(&mut self, x: f64, y: f64) {
        if self.attached {
            self.pointer.start(x, y);
        }
    }

    /// Drag moved; `key` is the marker under the pointer
    pub fn touch_move(&mut self, x: f64, y: f64, key: Option<&str>) -> MoveOutcome {
        if !self.attached {
            return MoveOutcome::default();
        }
        let outcome = self.pointer.on_move(x, y, key);
        if let Some(key) = outcome.jump.as_deref() {
            self.jump_to(key);
        }
        outcome
    }

    /// Drain select events emitted since the last poll
    pub fn poll_events(&mut self) -> Vec<IndexBarEvent> {
        self.events.drain(..).collect()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn config(&self) -> &IndexBarConfig {
        &self.config
    }

    /// Replace the marker list. Geometry may be stale until the next
    /// render, so the recompute waits for [`Self::on_render_complete`].
    pub fn set_index_list(&mut self, index_list: Vec<String>) {
        if self.config.index_list == index_list {
            return;
        }
        self.config.index_list = index_list;
        self.refresh_pending = true;
    }

    pub fn set_sticky(&mut self, sticky: bool) {
        if self.config.sticky && !sticky {
            clear_sticky(self.registry.borrow_mut().as_mut_slice());
        }
        self.config.sticky = sticky;
        self.on_scroll();
    }

    pub fn set_sticky_offset_top(&mut self, sticky_offset_top: f64) {
        self.config.sticky_offset_top = sticky_offset_top;
        self.on_scroll();
    }

    pub fn set_highlight_color(&mut self, color: Option<String>) {
        self.config.highlight_color = color;
    }

    pub fn set_z_index(&mut self, z_index: Option<i32>) {
        self.config.z_index = z_index;
    }

    pub fn sidebar_z_index(&self) -> Option<i32> {
        self.config.sidebar_z_index()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Highlighted marker: the index-list entry at the active position
    pub fn active_anchor(&self) -> Option<&str> {
        self.active_anchor.as_deref()
    }

    /// Position of the active section in registration order
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Sidebar markers in order, with the active one flagged
    pub fn markers(&self) -> Vec<MarkerView<'_>> {
        let highlight = self.config.highlight_color.as_deref();
        self.config
            .index_list
            .iter()
            .map(|key| {
                let active = self.active_anchor.as_deref() == Some(key.as_str());
                MarkerView {
                    key: key.as_str(),
                    active,
                    color: if active { highlight } else { None },
                }
            })
            .collect()
    }

    pub fn visual_state(&self, id: SectionId) -> Option<VisualState> {
        self.registry.borrow().get(id).map(|s| *s.visual_state())
    }

    /// Read-only view of the registered sections
    pub fn sections(&self) -> Ref<'_, SectionRegistry<P::Handle>> {
        self.registry.borrow()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access for hosts that drive scroll through the provider
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }
}
