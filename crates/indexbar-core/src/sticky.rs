//! Sticky header pinning
//!
//! Pins the active section's header at the pin line and keeps the previous
//! header pinned directly above it while the incoming header pushes it off.

use crate::geometry::Rect;
use crate::registry::{Section, VisualState};
use crate::resolver::Measurement;

/// Update every section's [`VisualState`] for the given active index.
///
/// `measurement` must be the pass the active index was resolved from.
/// `live_bounds` supplies the on-screen rect used for horizontal placement.
pub fn apply_sticky<H>(
    sections: &mut [Section<H>],
    active: Option<usize>,
    measurement: &Measurement,
    sticky_offset_top: f64,
    live_bounds: impl Fn(&H) -> Rect,
) {
    let scroll_top = measurement.scroll_top;
    let container_top = measurement.container.top;
    let top_of = |j: usize| measurement.rects.get(j).map(|r| r.top - scroll_top);

    for (i, section) in sections.iter_mut().enumerate() {
        let role = match active {
            Some(a) if i == a => Role::Active,
            Some(a) if i + 1 == a => Role::Displaced,
            _ => Role::Idle,
        };

        section.state = match role {
            Role::Active => {
                let Some(top) = top_of(i) else {
                    continue;
                };
                let bounds = live_bounds(&section.origin);
                VisualState {
                    active: true,
                    pinned_top: Some(sticky_offset_top.max(top) + container_top),
                    pinned_left: Some(bounds.left),
                    pinned_width: Some(bounds.width),
                }
            }
            Role::Displaced => {
                let Some(displacing_top) = top_of(i + 1) else {
                    continue;
                };
                let bounds = live_bounds(&section.origin);
                VisualState {
                    active: displacing_top > 0.0,
                    pinned_top: Some(displacing_top + container_top - section.height),
                    pinned_left: Some(bounds.left),
                    pinned_width: Some(bounds.width),
                }
            }
            Role::Idle => VisualState::default(),
        };
    }
}

/// Clear every section's pinning (sticky switched off)
pub fn clear_sticky<H>(sections: &mut [Section<H>]) {
    for section in sections {
        section.state.clear();
    }
}

#[derive(Clone, Copy)]
enum Role {
    Active,
    Displaced,
    Idle,
}
