#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideAxis {
    #[default]
    X,
    Y,
}

impl SlideAxis {
    /// Maps a track offset onto this axis.
    pub fn translate(self, offset: f32) -> Translate {
        match self {
            Self::X => Translate { x: offset, y: 0.0 },
            Self::Y => Translate { x: 0.0, y: offset },
        }
    }

    /// Picks the component of a 2D movement that lies on this axis.
    pub fn pick(self, x: f32, y: f32) -> f32 {
        match self {
            Self::X => x,
            Self::Y => y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartingPosition {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideDirection {
    Prev,
    #[default]
    Next,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translate {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

pub type ItemKey = u64;

/// The currently active item, as reported to hosts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveItem<K> {
    pub index: usize,
    pub key: K,
}

/// Which copy of the item list a rendered item belongs to.
///
/// Only looping carousels render the clone regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    CloneBefore,
    Original,
    CloneAfter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedItem {
    /// Position in the rendered track.
    pub index: usize,
    /// Index into the host's item list.
    pub item_index: usize,
    pub region: Region,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionKind {
    /// A committed slide change (button, gesture or programmatic request).
    Slide,
    /// Follows the pointer while dragging.
    Drag,
    /// Returns to the active slide after an uncommitted drag.
    SnapBack,
    /// Moves a looping carousel from a clone region back into the middle region.
    Remap,
    /// Re-centres the track on the active slide (mount, resize, immediate jumps).
    Reposition,
}

/// A request for the animation driver.
///
/// Immediate transitions are already applied to the engine's offset when returned; the host only
/// needs to render `to`. Animated transitions must be driven from `from` to `to`, reporting frames
/// through `Carousel::on_animation_frame` and finishing with `Carousel::on_animation_complete`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub from: f32,
    pub to: f32,
    pub immediate: bool,
    pub kind: TransitionKind,
}

impl Transition {
    pub(crate) fn immediate(from: f32, to: f32, kind: TransitionKind) -> Self {
        Self {
            from,
            to,
            immediate: true,
            kind,
        }
    }

    pub(crate) fn animated(from: f32, to: f32, kind: TransitionKind) -> Self {
        Self {
            from,
            to,
            immediate: false,
            kind,
        }
    }
}
