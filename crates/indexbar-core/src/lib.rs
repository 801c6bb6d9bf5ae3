//! indexbar Core - scroll-synchronized anchor index
//!
//! This crate provides the geometry and state synchronization behind an
//! index sidebar (A-Z markers) next to a scrollable list of grouped sections:
//! - Section registry with owner/back-reference mounting
//! - Active-anchor resolution from scroll position
//! - Sticky header pinning and hand-off between adjacent sections
//! - Sidebar tap/drag navigation with select events
//!
//! Layout measurement is abstracted behind [`GeometryProvider`] so the
//! algorithm stays pure and runs against any host (terminal, GUI, tests).

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod index_bar;
pub mod navigator;
pub mod pointer;
pub mod registry;
pub mod resolver;
pub mod sticky;


// Re-exports for convenience
pub use config::IndexBarConfig;
pub use error::{Error, Result};
pub use events::IndexBarEvent;
pub use geometry::{GeometryProvider, Rect};
pub use index_bar::{IndexBar, MarkerView};
pub use pointer::MoveOutcome;
pub use registry::{Registrar, Section, SectionId, SectionMount, SectionRegistry, VisualState};
pub use resolver::{AnchorRect, ResolverInput};
