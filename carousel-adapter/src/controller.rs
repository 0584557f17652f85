use carousel::{
    Carousel, CarouselError, CarouselKey, CarouselOptions, DragUpdate, ItemKey, Transition,
    Viewport,
};

use crate::spring::abs;
use crate::{Motion, MotionConfig};

/// How far (in pixels) a transition may start from the running spring and still reuse it.
const RETARGET_TOLERANCE: f32 = 0.5;

/// A framework-neutral controller that wraps a `carousel::Carousel` and animates its transitions.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `measure_item` / `on_resize` when layout changes
/// - `on_drag`, `slide_to_next`, `slide_to_prev`, `slide_to` on user input
/// - `tick(now_ms)` each frame, rendering the returned offset
///
/// Completion and loop remaps are forwarded to the engine automatically.
#[derive(Clone, Debug)]
pub struct Controller<K = ItemKey> {
    carousel: Carousel<K>,
    motion: Option<Motion>,
    config: MotionConfig,
}

impl<K: CarouselKey> Controller<K> {
    pub fn new(options: CarouselOptions<K>, config: MotionConfig) -> Self {
        Self::from_carousel(Carousel::new(options), config)
    }

    pub fn from_carousel(carousel: Carousel<K>, config: MotionConfig) -> Self {
        Self {
            carousel,
            motion: None,
            config,
        }
    }

    pub fn carousel(&self) -> &Carousel<K> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<K> {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel<K> {
        self.carousel
    }

    pub fn motion_config(&self) -> MotionConfig {
        self.config
    }

    /// Applies to motions started after this call.
    pub fn set_motion_config(&mut self, config: MotionConfig) {
        self.config = config;
    }

    /// Whether an offset animation is running (including snap-backs).
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    pub fn offset(&self) -> f32 {
        self.carousel.offset()
    }

    pub fn measure_item(&mut self, extent: f32) -> bool {
        let t = self.carousel.measure_item(extent);
        self.apply(t, 0)
    }

    pub fn slide_to_next(&mut self, now_ms: u64) -> Result<bool, CarouselError> {
        let t = self.carousel.slide_to_next()?;
        Ok(self.apply(t, now_ms))
    }

    pub fn slide_to_prev(&mut self, now_ms: u64) -> Result<bool, CarouselError> {
        let t = self.carousel.slide_to_prev()?;
        Ok(self.apply(t, now_ms))
    }

    pub fn slide_to(
        &mut self,
        index: usize,
        immediate: bool,
        now_ms: u64,
    ) -> Result<bool, CarouselError> {
        let t = self.carousel.slide_to(index, immediate)?;
        Ok(self.apply(t, now_ms))
    }

    /// Forwards a drag update. Tracking updates stop any running motion.
    pub fn on_drag(&mut self, update: DragUpdate, now_ms: u64) -> Result<bool, CarouselError> {
        let t = self.carousel.on_drag(update)?;
        Ok(self.apply(t, now_ms))
    }

    pub fn on_resize(
        &mut self,
        viewport: Viewport,
        item_extent: Option<f32>,
    ) -> Result<bool, CarouselError> {
        let t = self.carousel.on_resize(viewport, item_extent)?;
        Ok(self.apply(t, 0))
    }

    /// Advances the controller.
    ///
    /// - If a motion is active, writes its sample into the carousel and returns the new offset.
    ///   When the motion finishes, the carousel is told so (which may remap a looping track).
    /// - Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let motion = self.motion.as_mut()?;
        let off = motion.sample(now_ms);
        let done = motion.is_done(now_ms);
        self.carousel.on_animation_frame(off);

        if done {
            self.motion = None;
            // Remaps are immediate and already reflected in the offset returned below.
            let _ = self.carousel.on_animation_complete();
        }

        Some(self.carousel.offset())
    }

    fn apply(&mut self, transition: Option<Transition>, now_ms: u64) -> bool {
        let Some(t) = transition else {
            return false;
        };
        if t.immediate {
            self.motion = None;
            return true;
        }
        // The engine may have moved the track (loop remap, drag commit) since the last frame.
        let continues = match (&self.motion, self.config) {
            (Some(Motion::Spring(s)), MotionConfig::Spring(_)) => {
                abs(s.position - t.from) <= RETARGET_TOLERANCE
            }
            _ => false,
        };
        if continues {
            if let Some(motion) = self.motion.as_mut() {
                motion.retarget(t.to, now_ms);
            }
        } else {
            self.motion = Some(Motion::start(self.config, t.from, t.to, now_ms));
        }
        true
    }
}
