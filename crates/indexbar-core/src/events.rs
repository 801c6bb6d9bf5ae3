//! Events emitted by the index bar

/// Event emitted to the owning UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBarEvent {
    /// A jump succeeded. Carries the matched section's declared `index`
    /// value, which may differ from the marker key used for the lookup.
    Select(String),
}
