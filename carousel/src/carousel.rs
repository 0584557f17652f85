use alloc::vec::Vec;

use crate::position::loop_period;
use crate::{
    ActiveItem, CarouselError, CarouselEvent, CarouselKey, CarouselOptions, CarouselState,
    DragUpdate, EventEmitter, GestureDecision, GestureInterpreter, ItemKey, PositionCalculator,
    Region, RenderedItem, SlideAxis, SlideDirection, SubscriptionId, Transition, TransitionKind,
    Translate, Viewport,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Animating { direction: SlideDirection },
}

/// A headless carousel engine.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects or timers.
/// - Your adapter feeds it item measurements, drag updates, resizes and animation frames.
/// - It answers with [`Transition`]s for your animation driver and publishes
///   [`CarouselEvent`]s to subscribers.
///
/// Looping carousels render the item list three times (clone-before, original, clone-after). The
/// engine keeps its rendered index in the middle copy whenever it is idle, and reports indexes in
/// `[0, count)` to the outside.
///
/// For frame-driven tween/spring animation, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<K = ItemKey> {
    options: CarouselOptions<K>,
    calculator: PositionCalculator,
    gesture: GestureInterpreter,
    emitter: EventEmitter,

    item_extent: Option<f32>,
    viewport: Option<Viewport>,
    index: usize, // rendered index
    offset: f32,
    phase: Phase,
    slide_direction: SlideDirection,

    page_hidden: bool,
    last_item_visible: bool,
    is_fullscreen: bool,
}

impl<K: CarouselKey> Carousel<K> {
    /// Creates a carousel from options.
    ///
    /// `initial_active_item` is applied immediately (no events); out-of-range values are clamped.
    /// The offset stays at zero until the first item is measured with [`Self::measure_item`].
    pub fn new(options: CarouselOptions<K>) -> Self {
        cdebug!(
            count = options.count,
            is_infinite = options.is_infinite,
            items_per_slide = options.items_per_slide,
            "Carousel::new"
        );
        let mut c = Self {
            calculator: calculator_for(&options),
            gesture: GestureInterpreter::new(
                options.dragging_slide_threshold,
                options.velocity_jump,
            ),
            emitter: EventEmitter::new(),
            item_extent: None,
            viewport: None,
            index: 0,
            offset: 0.0,
            phase: Phase::Idle,
            slide_direction: SlideDirection::Next,
            page_hidden: false,
            last_item_visible: false,
            is_fullscreen: false,
            options,
        };
        c.index = c.base() + c.clamp_item(c.options.initial_active_item);
        c
    }

    pub fn options(&self) -> &CarouselOptions<K> {
        &self.options
    }

    /// Replaces the options, keeping the active item (clamped to the new bounds).
    ///
    /// An in-flight transition is settled first, and any gesture in progress is dropped.
    pub fn set_options(&mut self, options: CarouselOptions<K>) {
        self.settle();
        let active = self.current_index();
        self.options = options;
        self.calculator = calculator_for(&self.options);
        self.gesture = GestureInterpreter::new(
            self.options.dragging_slide_threshold,
            self.options.velocity_jump,
        );
        self.index = self.base() + self.clamp_item(active);
        if let Ok(offset) = self.offset_for(self.index) {
            self.offset = offset;
        }
        ctrace!(
            count = self.options.count,
            index = self.index,
            "Carousel::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn is_infinite(&self) -> bool {
        self.options.is_infinite
    }

    pub fn has_navigation(&self) -> bool {
        self.options.has_navigation
    }

    pub fn slide_axis(&self) -> SlideAxis {
        self.options.slide_axis
    }

    pub fn calculator(&self) -> &PositionCalculator {
        &self.calculator
    }

    /// Number of items on the rendered track (three copies when looping).
    pub fn rendered_count(&self) -> usize {
        if self.options.is_infinite {
            self.options.count.saturating_mul(3)
        } else {
            self.options.count
        }
    }

    /// The active index in `[0, count)`.
    pub fn current_index(&self) -> usize {
        self.external(self.index)
    }

    /// The active position on the rendered track.
    pub fn rendered_index(&self) -> usize {
        self.index
    }

    pub fn current_active_item(&self) -> Option<ActiveItem<K>> {
        if self.options.count == 0 {
            return None;
        }
        let index = self.current_index();
        Some(ActiveItem {
            index,
            key: (self.options.get_item_key)(index),
        })
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    /// Direction of the most recent committed slide.
    pub fn slide_direction(&self) -> SlideDirection {
        self.slide_direction
    }

    /// The current track offset (last applied or reported by the animation driver).
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn translate(&self) -> Translate {
        self.calculator.translate(self.offset)
    }

    /// The offset expressed relative to the middle copy of a looping track.
    ///
    /// Clone regions show the same content as the middle region, so this is what the user
    /// actually sees. It is unchanged by loop remaps. For non-looping carousels it equals
    /// [`Self::offset`].
    pub fn loop_normalized_offset(&self) -> f32 {
        let Some(extent) = self.item_extent else {
            return self.offset;
        };
        if !self.options.is_infinite || self.options.count == 0 {
            return self.offset;
        }
        let displacement = self.offset - self.calculator.offset_for(self.index, extent);
        let middle = self.base() + self.external(self.index);
        self.calculator.offset_for(middle, extent) + displacement
    }

    pub fn item_extent(&self) -> Option<f32> {
        self.item_extent
    }

    /// Records the measured extent (width for `X`, height for `Y`) of one item.
    ///
    /// When idle, the track is re-centred on the active item and the immediate transition is
    /// returned.
    pub fn measure_item(&mut self, extent: f32) -> Option<Transition> {
        self.item_extent = Some(extent);
        if self.is_animating() || self.is_dragging() || self.options.count == 0 {
            return None;
        }
        let from = self.offset;
        let to = self.calculator.offset_for(self.index, extent);
        if from == to {
            return None;
        }
        self.offset = to;
        Some(Transition::immediate(from, to, TransitionKind::Reposition))
    }

    /// Forgets the measurement, e.g. when the host unmounts every item.
    pub fn clear_measurement(&mut self) {
        self.item_extent = None;
    }

    /// Offset of the track when the rendered index `index` is active.
    pub fn offset_for(&self, index: usize) -> Result<f32, CarouselError> {
        let extent = self.extent()?;
        Ok(self.calculator.offset_for(index, extent))
    }

    pub fn events(&self) -> &EventEmitter {
        &self.emitter
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&CarouselEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.emitter.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.emitter.unsubscribe(id)
    }

    /// Suppresses animated slide requests while the hosting page is hidden.
    pub fn set_page_hidden(&mut self, hidden: bool) {
        self.page_hidden = hidden;
    }

    pub fn is_page_hidden(&self) -> bool {
        self.page_hidden
    }

    /// Reports whether the last rendered item is fully visible (e.g. from an intersection
    /// observer). While it is, forward advancement is suppressed.
    pub fn set_last_item_visible(&mut self, visible: bool) {
        self.last_item_visible = visible;
    }

    pub fn is_last_item_visible(&self) -> bool {
        self.last_item_visible
    }

    pub fn set_fullscreen(&mut self, is_fullscreen: bool) {
        if self.is_fullscreen == is_fullscreen {
            return;
        }
        self.is_fullscreen = is_fullscreen;
        self.emitter
            .emit(&CarouselEvent::FullscreenChange { is_fullscreen });
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Animates one slide forward. Returns `Ok(None)` when the request is ignored (bounds, an
    /// in-flight transition, hidden page, last item already visible).
    pub fn slide_to_next(&mut self) -> Result<Option<Transition>, CarouselError> {
        self.advance(SlideDirection::Next, 1)
    }

    /// Animates one slide backward. See [`Self::slide_to_next`].
    pub fn slide_to_prev(&mut self) -> Result<Option<Transition>, CarouselError> {
        self.advance(SlideDirection::Prev, 1)
    }

    /// Moves to `index` (clamped to the last valid start).
    ///
    /// With `immediate`, the jump is applied right away, settles any in-flight transition and
    /// emits no slide events. Otherwise the same guards as [`Self::slide_to_next`] apply.
    /// Requesting the active index is a no-op.
    pub fn slide_to(
        &mut self,
        index: usize,
        immediate: bool,
    ) -> Result<Option<Transition>, CarouselError> {
        if !immediate && (self.is_animating() || self.page_hidden) {
            ctrace!(index, "slide_to ignored");
            return Ok(None);
        }
        let extent = self.extent()?;
        let target = self.base() + self.clamp_item(index);

        if immediate {
            self.settle();
            self.gesture.reset();
            if target == self.index && self.offset == self.calculator.offset_for(target, extent) {
                return Ok(None);
            }
            let from = self.offset;
            self.index = target;
            self.offset = self.calculator.offset_for(target, extent);
            return Ok(Some(Transition::immediate(
                from,
                self.offset,
                TransitionKind::Reposition,
            )));
        }

        if target == self.index {
            return Ok(None);
        }
        let direction = if target > self.index {
            SlideDirection::Next
        } else {
            SlideDirection::Prev
        };
        Ok(Some(self.begin_slide(target, direction, extent)))
    }

    /// Moves to the item whose key equals `key`. Unknown keys are ignored.
    pub fn slide_to_key(
        &mut self,
        key: &K,
        immediate: bool,
    ) -> Result<Option<Transition>, CarouselError> {
        let Some(index) = self.index_of_key(key) else {
            cwarn!("slide_to_key: unknown key");
            return Ok(None);
        };
        self.slide_to(index, immediate)
    }

    pub fn index_of_key(&self, key: &K) -> Option<usize> {
        (0..self.options.count).find(|&i| (self.options.get_item_key)(i) == *key)
    }

    pub fn is_active_key(&self, key: &K) -> bool {
        self.index_of_key(key) == Some(self.current_index())
    }

    pub fn is_prev_key(&self, key: &K) -> bool {
        let count = self.options.count;
        let current = self.current_index();
        let prev = match current {
            0 if self.options.is_infinite && count > 1 => Some(count - 1),
            0 => None,
            i => Some(i - 1),
        };
        prev.is_some_and(|p| self.index_of_key(key) == Some(p))
    }

    pub fn is_next_key(&self, key: &K) -> bool {
        let count = self.options.count;
        let current = self.current_index();
        let next = if current + 1 < count {
            Some(current + 1)
        } else if self.options.is_infinite && count > 1 {
            Some(0)
        } else {
            None
        };
        next.is_some_and(|n| self.index_of_key(key) == Some(n))
    }

    /// Feeds a pointer-drag update.
    ///
    /// A gesture that starts while a transition is in flight settles that transition and takes
    /// over the track. After a gesture commits a slide, its remaining updates are ignored until
    /// its final update arrives.
    pub fn on_drag(&mut self, update: DragUpdate) -> Result<Option<Transition>, CarouselError> {
        if self.options.disable_gestures {
            return Ok(None);
        }
        let extent = self.extent()?;
        if !self.gesture.is_active() && self.is_animating() {
            cdebug!(index = self.index, "drag overrides in-flight transition");
            self.settle();
        }

        let anchor = self.calculator.offset_for(self.index, extent);
        match self.gesture.update(update, anchor) {
            GestureDecision::Track { offset } => {
                self.emitter.emit(&CarouselEvent::Drag(update));
                let from = self.offset;
                self.offset = offset;
                Ok(Some(Transition::immediate(from, offset, TransitionKind::Drag)))
            }
            GestureDecision::Commit {
                direction,
                slides,
                offset,
            } => {
                if !update.is_final {
                    self.emitter.emit(&CarouselEvent::Drag(update));
                }
                self.offset = offset;
                self.emitter.emit(&match direction {
                    SlideDirection::Next => CarouselEvent::LeftSwipe,
                    SlideDirection::Prev => CarouselEvent::RightSwipe,
                });
                cdebug!(slides, movement = update.movement, "drag committed");
                match self.advance(direction, slides)? {
                    Some(transition) => Ok(Some(transition)),
                    None => Ok(Some(self.snap_back(extent))),
                }
            }
            GestureDecision::Release { .. } => Ok(Some(self.snap_back(extent))),
            GestureDecision::Ignore => Ok(None),
        }
    }

    /// Applies a viewport resize reported by the host, with a fresh item measurement.
    ///
    /// Identical viewports are ignored. The track is re-centred on the active item without
    /// animation; an in-flight transition is settled first.
    pub fn on_resize(
        &mut self,
        viewport: Viewport,
        item_extent: Option<f32>,
    ) -> Result<Option<Transition>, CarouselError> {
        if !self.options.should_resize_on_window_resize {
            return Ok(None);
        }
        if self.viewport == Some(viewport) {
            return Ok(None);
        }
        let extent = item_extent.ok_or(CarouselError::NoItemsAvailable)?;
        if self.options.count == 0 {
            return Err(CarouselError::NoItemsAvailable);
        }
        self.viewport = Some(viewport);
        self.item_extent = Some(extent);
        self.settle();

        let from = self.offset;
        self.offset = self.calculator.offset_for(self.index, extent);
        ctrace!(from, to = self.offset, "on_resize");
        Ok(Some(Transition::immediate(
            from,
            self.offset,
            TransitionKind::Reposition,
        )))
    }

    /// Records an intermediate offset produced by the animation driver.
    pub fn on_animation_frame(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Called by the animation driver when a transition finished.
    ///
    /// Completes a slide (emitting [`CarouselEvent::SlideChange`]) and, for looping carousels
    /// that ended in a clone region, returns the immediate remap into the middle region.
    pub fn on_animation_complete(&mut self) -> Option<Transition> {
        let Phase::Animating { direction } = self.phase else {
            return None;
        };
        self.phase = Phase::Idle;
        if let Ok(rest) = self.offset_for(self.index) {
            self.offset = rest;
        }

        let from = self.offset;
        let remap = if self.remap_into_middle() {
            if let Ok(rest) = self.offset_for(self.index) {
                self.offset = rest;
            }
            Some(Transition::immediate(from, self.offset, TransitionKind::Remap))
        } else {
            None
        };

        cdebug!(index = self.index, remapped = remap.is_some(), "slide complete");
        self.emitter.emit(&CarouselEvent::SlideChange {
            current_item: self.current_index(),
            direction,
        });
        remap
    }

    pub fn for_each_rendered_item(&self, mut f: impl FnMut(RenderedItem)) {
        let count = self.options.count;
        for index in 0..self.rendered_count() {
            let region = if !self.options.is_infinite {
                Region::Original
            } else {
                match index / count {
                    0 => Region::CloneBefore,
                    1 => Region::Original,
                    _ => Region::CloneAfter,
                }
            };
            f(RenderedItem {
                index,
                item_index: index % count,
                region,
            });
        }
    }

    pub fn collect_rendered_items(&self, out: &mut Vec<RenderedItem>) {
        out.clear();
        out.reserve(self.rendered_count());
        self.for_each_rendered_item(|item| out.push(item));
    }

    pub fn snapshot(&self) -> CarouselState {
        CarouselState {
            active_item: self.current_index(),
            offset: self.offset,
            is_animating: self.is_animating(),
            is_dragging: self.is_dragging(),
        }
    }

    /// Restores the active item from a snapshot, without animation.
    pub fn restore_state(
        &mut self,
        state: CarouselState,
    ) -> Result<Option<Transition>, CarouselError> {
        self.slide_to(state.active_item, true)
    }

    fn advance(
        &mut self,
        direction: SlideDirection,
        slides: usize,
    ) -> Result<Option<Transition>, CarouselError> {
        if self.is_animating() {
            ctrace!(?direction, "advance ignored: transition in flight");
            return Ok(None);
        }
        if self.page_hidden {
            ctrace!(?direction, "advance ignored: page hidden");
            return Ok(None);
        }
        let extent = self.extent()?;
        let Some(target) = self.advance_target(direction, slides) else {
            return Ok(None);
        };
        Ok(Some(self.begin_slide(target, direction, extent)))
    }

    fn advance_target(&self, direction: SlideDirection, slides: usize) -> Option<usize> {
        let count = self.options.count;
        let slides = slides.max(1);
        match direction {
            SlideDirection::Next => {
                if self.last_item_visible {
                    return None;
                }
                if self.options.is_infinite {
                    // At most one loop, so the target stays inside the clone-after region.
                    return Some(self.index + slides.min(count));
                }
                let last = self.max_item();
                if self.index >= last {
                    return None;
                }
                Some(self.index.saturating_add(slides).min(last))
            }
            SlideDirection::Prev => {
                if self.options.is_infinite {
                    return Some(self.index.saturating_sub(slides.min(count)));
                }
                if self.index == 0 {
                    return None;
                }
                Some(self.index.saturating_sub(slides))
            }
        }
    }

    fn begin_slide(&mut self, target: usize, direction: SlideDirection, extent: f32) -> Transition {
        let from = self.offset;
        let to = self.calculator.offset_for(target, extent);
        self.index = target;
        self.slide_direction = direction;
        self.phase = Phase::Animating { direction };
        cdebug!(target_index = target, ?direction, from, to, "slide start");
        self.emitter.emit(&CarouselEvent::SlideStartChange {
            next_item: self.external(target),
            direction,
        });
        Transition::animated(from, to, TransitionKind::Slide)
    }

    fn snap_back(&self, extent: f32) -> Transition {
        let to = self.calculator.offset_for(self.index, extent);
        Transition::animated(self.offset, to, TransitionKind::SnapBack)
    }

    /// Ends an in-flight transition where it is, as if it had completed.
    fn settle(&mut self) {
        let Phase::Animating { direction } = self.phase else {
            return;
        };
        self.phase = Phase::Idle;
        self.remap_into_middle();
        self.emitter.emit(&CarouselEvent::SlideChange {
            current_item: self.current_index(),
            direction,
        });
    }

    /// Moves the rendered index (and offset) by one loop into the middle copy.
    fn remap_into_middle(&mut self) -> bool {
        let count = self.options.count;
        if !self.options.is_infinite || count == 0 {
            return false;
        }
        let period = self.item_extent.map_or(0.0, |e| loop_period(count, e));
        if self.index < count {
            self.index += count;
            self.offset -= period;
        } else if self.index >= count * 2 {
            self.index -= count;
            self.offset += period;
        } else {
            return false;
        }
        ctrace!(index = self.index, "loop remap");
        true
    }

    fn extent(&self) -> Result<f32, CarouselError> {
        if self.options.count == 0 {
            return Err(CarouselError::NoItemsAvailable);
        }
        self.item_extent.ok_or(CarouselError::NoItemsAvailable)
    }

    fn base(&self) -> usize {
        if self.options.is_infinite {
            self.options.count
        } else {
            0
        }
    }

    fn external(&self, index: usize) -> usize {
        if self.options.is_infinite && self.options.count > 0 {
            index % self.options.count
        } else {
            index
        }
    }

    /// Highest item index a slide may start at.
    fn max_item(&self) -> usize {
        if self.options.is_infinite {
            self.options.count.saturating_sub(1)
        } else {
            self.calculator.last_start_index(self.options.count)
        }
    }

    fn clamp_item(&self, index: usize) -> usize {
        index.min(self.max_item())
    }
}

fn calculator_for<K>(options: &CarouselOptions<K>) -> PositionCalculator {
    PositionCalculator::new(
        options.slide_axis,
        options.effective_items_per_slide(),
        options.initial_starting_position,
    )
}
