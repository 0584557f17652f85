use crate::SlideDirection;

pub const DEFAULT_DRAGGING_SLIDE_THRESHOLD: f32 = 100.0;

/// Velocity units that add one extra slide to a committed gesture (when velocity jumps are on).
pub const VELOCITY_PER_EXTRA_SLIDE: f32 = 4.0;

/// One pointer-drag update from the host's gesture recognizer.
///
/// `movement` is the displacement along the slide axis since the gesture began. Negative values
/// drag the track toward the next slide.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragUpdate {
    pub movement: f32,
    pub velocity: f32,
    pub is_final: bool,
}

impl DragUpdate {
    pub fn moving(movement: f32, velocity: f32) -> Self {
        Self {
            movement,
            velocity,
            is_final: false,
        }
    }

    pub fn release(movement: f32, velocity: f32) -> Self {
        Self {
            movement,
            velocity,
            is_final: true,
        }
    }

    /// The slide this drag leans toward, if it moved at all.
    pub fn direction(&self) -> Option<SlideDirection> {
        if self.movement < 0.0 {
            Some(SlideDirection::Next)
        } else if self.movement > 0.0 {
            Some(SlideDirection::Prev)
        } else {
            None
        }
    }
}

/// Transient state of the pointer interaction in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureState {
    pub start_offset: f32,
    pub movement: f32,
    pub velocity: f32,
    pub direction: Option<SlideDirection>,
    pub is_active: bool,
    /// Set once the gesture committed a slide; later updates are ignored.
    pub cancelled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureDecision {
    /// Move the track to `offset` without animation.
    Track { offset: f32 },
    /// Commit `slides` slides in `direction`. `offset` is where the pointer left the track.
    Commit {
        direction: SlideDirection,
        slides: usize,
        offset: f32,
    },
    /// The gesture ended below the threshold: animate back to `offset`.
    Release { offset: f32 },
    Ignore,
}

/// Turns a stream of drag updates into tracking, commit and snap-back decisions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureInterpreter {
    threshold: f32,
    velocity_jump: bool,
    state: Option<GestureState>,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_DRAGGING_SLIDE_THRESHOLD, false)
    }
}

impl GestureInterpreter {
    pub fn new(threshold: f32, velocity_jump: bool) -> Self {
        Self {
            threshold,
            velocity_jump,
            state: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    pub fn set_velocity_jump(&mut self, velocity_jump: bool) {
        self.velocity_jump = velocity_jump;
    }

    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    /// Whether a gesture is in progress (including one that already committed).
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Whether the in-progress gesture still drives the track.
    pub fn is_tracking(&self) -> bool {
        self.state.is_some_and(|s| s.is_active && !s.cancelled)
    }

    /// Forgets the gesture in progress.
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// Slides covered by a commit at `velocity`.
    pub fn slides_for_velocity(&self, velocity: f32) -> usize {
        if !self.velocity_jump {
            return 1;
        }
        let speed = if velocity < 0.0 { -velocity } else { velocity };
        // `as` saturates and maps NaN to zero, which floors non-negative values.
        1 + (speed / VELOCITY_PER_EXTRA_SLIDE) as usize
    }

    /// Feeds one update. `anchor` is the resting offset of the active slide.
    pub fn update(&mut self, update: DragUpdate, anchor: f32) -> GestureDecision {
        let state = self.state.get_or_insert(GestureState {
            start_offset: anchor,
            movement: 0.0,
            velocity: 0.0,
            direction: None,
            is_active: true,
            cancelled: false,
        });

        if state.cancelled {
            if update.is_final {
                self.state = None;
            }
            return GestureDecision::Ignore;
        }

        state.movement = update.movement;
        state.velocity = update.velocity;
        state.direction = update.direction();
        let start = state.start_offset;
        let offset = start + update.movement;

        let committed = if update.movement < -self.threshold {
            Some(SlideDirection::Next)
        } else if update.movement > self.threshold {
            Some(SlideDirection::Prev)
        } else {
            None
        };

        if let Some(direction) = committed {
            let slides = self.slides_for_velocity(update.velocity);
            if update.is_final {
                self.state = None;
            } else if let Some(state) = self.state.as_mut() {
                state.cancelled = true;
                state.is_active = false;
            }
            return GestureDecision::Commit {
                direction,
                slides,
                offset,
            };
        }

        if update.is_final {
            self.state = None;
            return GestureDecision::Release { offset: start };
        }

        GestureDecision::Track { offset }
    }
}
