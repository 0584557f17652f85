//! A headless carousel engine.
//!
//! For frame-driven tween/spring animation and a ready-made controller, see the
//! `carousel-adapter` crate.
//!
//! This crate owns the parts of a carousel that are independent of any UI toolkit: translating
//! drag movement into slide changes, keeping the active index in bounds, looping seamlessly over
//! a tripled item track, and computing the track offset for every index.
//!
//! A UI layer is expected to provide:
//! - the measured extent of one item (width for horizontal carousels, height for vertical ones)
//! - pointer-drag updates, viewport resizes and page visibility
//! - an animation driver that interpolates the [`Transition`]s returned by the engine
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod emitter;
mod error;
mod gesture;
mod key;
mod options;
pub mod position;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use emitter::{CarouselEvent, EventEmitter, EventListener, SubscriptionId};
pub use error::CarouselError;
pub use gesture::{
    DEFAULT_DRAGGING_SLIDE_THRESHOLD, DragUpdate, GestureDecision, GestureInterpreter,
    GestureState, VELOCITY_PER_EXTRA_SLIDE,
};
pub use key::CarouselKey;
pub use options::CarouselOptions;
pub use position::PositionCalculator;
pub use state::CarouselState;
pub use types::{
    ActiveItem, ItemKey, Region, RenderedItem, SlideAxis, SlideDirection, StartingPosition,
    Transition, TransitionKind, Translate, Viewport,
};
