//! Geometry provider contract
//!
//! The index bar never measures layout itself. Hosts implement
//! [`GeometryProvider`] over whatever layout engine they have (a terminal
//! grid, a GUI toolkit, scripted rects in tests).

/// Axis-aligned bounding rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// Synchronous layout queries against the host's current layout state
pub trait GeometryProvider {
    /// Opaque handle a section registers with; resolved to a rect on demand
    type Handle;

    /// Current scroll offset of the scroll container
    fn scroll_top(&self) -> f64;

    /// Bounding rect of the scroll container, or `None` when the container
    /// is the page viewport itself
    fn scroller_rect(&self) -> Option<Rect>;

    /// Live bounding rect of a section's origin element
    fn bounding_rect(&self, handle: &Self::Handle) -> Rect;

    /// Top of an element in document coordinates
    fn element_top(&self, handle: &Self::Handle) -> f64 {
        self.bounding_rect(handle).top + self.read_root_scroll_top()
    }

    /// Whether the index bar's root is currently not rendered
    fn is_hidden(&self) -> bool;

    /// Scroll so the element's top edge aligns with the viewport top
    fn scroll_into_view(&mut self, handle: &Self::Handle);

    /// Page-level scroll offset
    fn read_root_scroll_top(&self) -> f64;

    /// Set the page-level scroll offset
    fn write_root_scroll_top(&mut self, value: f64);
}

/// Top of a section relative to the scroll container's content origin
pub(crate) fn anchor_top<P: GeometryProvider>(
    provider: &P,
    handle: &P::Handle,
    scroller: Option<Rect>,
    scroll_top: f64,
) -> f64 {
    match scroller {
        Some(scroller) => provider.bounding_rect(handle).top - scroller.top + scroll_top,
        None => provider.element_top(handle),
    }
}
