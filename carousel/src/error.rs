use thiserror::Error;

/// Errors surfaced by operations that need a layout measurement.
///
/// Out-of-bounds index requests are not errors: they are clamped or ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselError {
    /// No item is mounted (or the item list is empty), so the slide extent is unknown.
    #[error("no carousel items available")]
    NoItemsAvailable,
}
