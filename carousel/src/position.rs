//! Track offset math.
//!
//! Offsets are measured along the slide axis in the host's units (usually CSS pixels). The track
//! moves toward negative offsets as the active index grows.

use crate::{CarouselError, SlideAxis, StartingPosition, Translate};

/// Computes track offsets for logical indexes.
///
/// This type holds no measurements: the item extent is passed per call so the calculator stays a
/// pure function of the current layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionCalculator {
    pub axis: SlideAxis,
    pub items_per_slide: usize,
    pub starting_position: StartingPosition,
}

impl Default for PositionCalculator {
    fn default() -> Self {
        Self {
            axis: SlideAxis::X,
            items_per_slide: 1,
            starting_position: StartingPosition::Start,
        }
    }
}

impl PositionCalculator {
    pub fn new(
        axis: SlideAxis,
        items_per_slide: usize,
        starting_position: StartingPosition,
    ) -> Self {
        Self {
            axis,
            items_per_slide: items_per_slide.max(1),
            starting_position,
        }
    }

    /// Number of item extents the track is shifted by so the active item lands at the requested
    /// starting position within the viewport.
    ///
    /// Center rounds half-way cases up (2 items per slide shift by one item).
    pub fn alignment_steps(&self) -> usize {
        if self.items_per_slide <= 1 {
            return 0;
        }
        match self.starting_position {
            StartingPosition::Start => 0,
            StartingPosition::Center => self.items_per_slide / 2,
            StartingPosition::End => self.items_per_slide - 1,
        }
    }

    pub fn alignment_shift(&self, item_extent: f32) -> f32 {
        item_extent * self.alignment_steps() as f32
    }

    /// Offset of the track when `index` is the active (rendered) index.
    pub fn offset_for(&self, index: usize, item_extent: f32) -> f32 {
        -(item_extent * index as f32) + self.alignment_shift(item_extent)
    }

    /// Like [`Self::offset_for`], failing when no item has been measured.
    pub fn offset_for_measured(
        &self,
        index: usize,
        item_extent: Option<f32>,
    ) -> Result<f32, CarouselError> {
        let extent = item_extent.ok_or(CarouselError::NoItemsAvailable)?;
        Ok(self.offset_for(index, extent))
    }

    /// The axis-mapped translation for a track offset.
    pub fn translate(&self, offset: f32) -> Translate {
        self.axis.translate(offset)
    }

    /// Fraction of the viewport a single item occupies along the slide axis.
    pub fn item_basis(&self) -> f32 {
        1.0 / self.items_per_slide as f32
    }

    /// Last valid start index for a non-looping carousel of `count` items.
    pub fn last_start_index(&self, count: usize) -> usize {
        count.saturating_sub(self.items_per_slide)
    }
}

/// Distance the track travels over one full pass of the item list.
pub fn loop_period(count: usize, item_extent: f32) -> f32 {
    item_extent * count as f32
}
