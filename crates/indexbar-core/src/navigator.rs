//! Sidebar jump navigation
//!
//! Maps a marker key to its section, scrolls it into view and produces the
//! select event.

use tracing::debug;

use crate::events::IndexBarEvent;
use crate::geometry::GeometryProvider;
use crate::registry::SectionRegistry;

/// Sticky settings a jump needs for the offset correction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpNavigator {
    pub sticky: bool,
    pub sticky_offset_top: f64,
}

impl JumpNavigator {
    pub fn new(sticky: bool, sticky_offset_top: f64) -> Self {
        Self {
            sticky,
            sticky_offset_top,
        }
    }

    /// Scroll to the first section registered under `key`.
    ///
    /// Unknown or empty keys are a no-op and emit nothing. On success the
    /// event carries the section's declared `index`, not `key`.
    pub fn jump_to<P: GeometryProvider>(
        &self,
        provider: &mut P,
        registry: &SectionRegistry<P::Handle>,
        key: &str,
    ) -> Option<IndexBarEvent> {
        if key.is_empty() {
            return None;
        }
        let Some(section) = registry.find_by_key(key) else {
            debug!(key = %key, "No section for marker");
            return None;
        };

        provider.scroll_into_view(&section.origin);

        // Keep the target header out from under the reserved offset region
        if self.sticky && self.sticky_offset_top > 0.0 {
            let scrolled = provider.read_root_scroll_top();
            provider.write_root_scroll_top(scrolled - self.sticky_offset_top);
        }

        debug!(key = %key, index = %section.index, "Jumped to section");
        Some(IndexBarEvent::Select(section.index.clone()))
    }
}
