/// A lightweight, serializable snapshot of a carousel.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is useful for
/// restoring the active slide across sessions without coupling the engine to a UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    /// Externally reported active index.
    pub active_item: usize,
    pub offset: f32,
    pub is_animating: bool,
    pub is_dragging: bool,
}
