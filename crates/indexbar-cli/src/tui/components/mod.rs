//! UI components for the indexbar TUI
//!
//! Rendering components: section list with sticky headers, index sidebar, scrollbar, status bar.

pub mod scrollbars;
pub mod section_list;
pub mod sidebar;
pub mod status_bar;

pub use scrollbars::render_list_scrollbar;
pub use section_list::render_section_list;
pub use sidebar::{render_sidebar, SIDEBAR_WIDTH};
pub use status_bar::render_status_bar;
