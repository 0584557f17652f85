use alloc::sync::Arc;

use crate::gesture::DEFAULT_DRAGGING_SLIDE_THRESHOLD;
use crate::{ItemKey, SlideAxis, StartingPosition};

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the key mapping is stored in an `Arc`, so adapters can tweak a few fields and
/// call `Carousel::set_options` without reallocating closures.
pub struct CarouselOptions<K = ItemKey> {
    /// Number of items in the host's list (before any loop cloning).
    pub count: usize,
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,

    /// Renders the list three times and wraps around at both ends.
    pub is_infinite: bool,
    /// Items visible at once. Values below 1 are treated as 1.
    pub items_per_slide: usize,
    pub initial_active_item: usize,
    /// Where the active item sits in the viewport when `items_per_slide > 1`.
    pub initial_starting_position: StartingPosition,
    pub slide_axis: SlideAxis,

    /// Drag distance that commits a slide.
    pub dragging_slide_threshold: f32,
    /// Adds `floor(velocity / 4)` extra slides to committed drags.
    pub velocity_jump: bool,
    pub disable_gestures: bool,

    /// Re-centres the track when the host reports a viewport resize.
    pub should_resize_on_window_resize: bool,
    /// Whether the host should render prev/next controls. The engine only stores it.
    pub has_navigation: bool,
}

impl<K> Clone for CarouselOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            get_item_key: Arc::clone(&self.get_item_key),
            is_infinite: self.is_infinite,
            items_per_slide: self.items_per_slide,
            initial_active_item: self.initial_active_item,
            initial_starting_position: self.initial_starting_position,
            slide_axis: self.slide_axis,
            dragging_slide_threshold: self.dragging_slide_threshold,
            velocity_jump: self.velocity_jump,
            disable_gestures: self.disable_gestures,
            should_resize_on_window_resize: self.should_resize_on_window_resize,
            has_navigation: self.has_navigation,
        }
    }
}

impl CarouselOptions<ItemKey> {
    /// Creates options for a carousel keyed by index (`ItemKey = u64`).
    pub fn new(count: usize) -> Self {
        Self::new_with_key(count, |i| i as u64)
    }
}

impl<K> CarouselOptions<K> {
    /// Creates options with a custom key mapping.
    ///
    /// `get_item_key(i)` should return a stable identity for the item at index `i`; it backs the
    /// key-based helpers such as `Carousel::slide_to_key`.
    pub fn new_with_key(
        count: usize,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            get_item_key: Arc::new(get_item_key),
            is_infinite: false,
            items_per_slide: 1,
            initial_active_item: 0,
            initial_starting_position: StartingPosition::Start,
            slide_axis: SlideAxis::X,
            dragging_slide_threshold: DEFAULT_DRAGGING_SLIDE_THRESHOLD,
            velocity_jump: false,
            disable_gestures: false,
            should_resize_on_window_resize: true,
            has_navigation: false,
        }
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_infinite(mut self, is_infinite: bool) -> Self {
        self.is_infinite = is_infinite;
        self
    }

    pub fn with_items_per_slide(mut self, items_per_slide: usize) -> Self {
        self.items_per_slide = items_per_slide;
        self
    }

    pub fn with_initial_active_item(mut self, initial_active_item: usize) -> Self {
        self.initial_active_item = initial_active_item;
        self
    }

    pub fn with_initial_starting_position(mut self, position: StartingPosition) -> Self {
        self.initial_starting_position = position;
        self
    }

    pub fn with_slide_axis(mut self, slide_axis: SlideAxis) -> Self {
        self.slide_axis = slide_axis;
        self
    }

    pub fn with_dragging_slide_threshold(mut self, threshold: f32) -> Self {
        self.dragging_slide_threshold = threshold;
        self
    }

    pub fn with_velocity_jump(mut self, velocity_jump: bool) -> Self {
        self.velocity_jump = velocity_jump;
        self
    }

    pub fn with_disable_gestures(mut self, disable_gestures: bool) -> Self {
        self.disable_gestures = disable_gestures;
        self
    }

    pub fn with_should_resize_on_window_resize(mut self, enabled: bool) -> Self {
        self.should_resize_on_window_resize = enabled;
        self
    }

    pub fn with_navigation(mut self, has_navigation: bool) -> Self {
        self.has_navigation = has_navigation;
        self
    }

    pub(crate) fn effective_items_per_slide(&self) -> usize {
        self.items_per_slide.max(1)
    }
}

impl<K> core::fmt::Debug for CarouselOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("is_infinite", &self.is_infinite)
            .field("items_per_slide", &self.items_per_slide)
            .field("initial_active_item", &self.initial_active_item)
            .field("initial_starting_position", &self.initial_starting_position)
            .field("slide_axis", &self.slide_axis)
            .field("dragging_slide_threshold", &self.dragging_slide_threshold)
            .field("velocity_jump", &self.velocity_jump)
            .field("disable_gestures", &self.disable_gestures)
            .field(
                "should_resize_on_window_resize",
                &self.should_resize_on_window_resize,
            )
            .field("has_navigation", &self.has_navigation)
            .finish_non_exhaustive()
    }
}
