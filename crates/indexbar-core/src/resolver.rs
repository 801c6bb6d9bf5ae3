//! Active-anchor resolution
//!
//! Pure mapping from a scroll offset and the ordered section rects to the
//! index of the section whose header has scrolled past the pin line.

use tracing::trace;

use crate::geometry::{anchor_top, GeometryProvider, Rect};
use crate::registry::Section;

/// Section geometry relative to the scroll container's content origin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorRect {
    pub top: f64,
    pub height: f64,
}

/// Inputs for one resolve pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolverInput {
    pub scroll_top: f64,
    pub section_rects: Vec<AnchorRect>,
    pub sticky_offset_top: f64,
    pub sticky: bool,
}

impl ResolverInput {
    /// Index of the active section, or `None` when no header has reached
    /// the pin line yet.
    ///
    /// Scans bottom-up. A section counts once
    /// `scroll_top + reach_top >= top`, where with sticky headers
    /// `reach_top` is the preceding header's height plus the sticky offset:
    /// the incoming header has to push the previous one off first.
    pub fn resolve(&self) -> Option<usize> {
        let rects = &self.section_rects;
        let active = (0..rects.len()).rev().find(|&i| {
            let reach_top = if self.sticky {
                let prev_height = if i > 0 { rects[i - 1].height } else { 0.0 };
                prev_height + self.sticky_offset_top
            } else {
                0.0
            };
            self.scroll_top + reach_top >= rects[i].top
        });
        trace!(scroll_top = self.scroll_top, ?active, "Resolved active anchor");
        active
    }
}

/// One geometry pass, shared by the resolver and the sticky computer so
/// both see the same scroll position within a frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurement {
    pub scroll_top: f64,
    /// Scroll container rect; top/left 0 for the page viewport
    pub container: Rect,
    pub rects: Vec<AnchorRect>,
}

impl Measurement {
    /// Measure every registered section against the provider
    pub fn take<P: GeometryProvider>(provider: &P, sections: &[Section<P::Handle>]) -> Self {
        let scroll_top = provider.scroll_top();
        let scroller = provider.scroller_rect();
        let rects = sections
            .iter()
            .map(|section| AnchorRect {
                top: anchor_top(provider, &section.origin, scroller, scroll_top),
                height: section.height,
            })
            .collect();
        Self {
            scroll_top,
            container: scroller.unwrap_or_default(),
            rects,
        }
    }

    pub fn resolver_input(&self, sticky: bool, sticky_offset_top: f64) -> ResolverInput {
        ResolverInput {
            scroll_top: self.scroll_top,
            section_rects: self.rects.clone(),
            sticky_offset_top,
            sticky,
        }
    }
}
