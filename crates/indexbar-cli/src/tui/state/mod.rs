//! App State Components
//!
//! Layout and scroll state shared by rendering and event handling.

mod layout;
mod scroll;

pub use layout::{LayoutState, MarkerSlot};
pub use scroll::ScrollState;
