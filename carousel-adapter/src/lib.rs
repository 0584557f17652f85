//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and only emits transitions. This crate provides small,
//! framework-neutral animation drivers and a controller that runs them from a frame clock:
//!
//! - Duration-based tweens with easing (CSS-transition style)
//! - Damped springs with tension/friction presets
//! - [`Controller`], which forwards frames and completions to the engine
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

mod controller;
mod motion;
mod spring;
mod tween;


pub use controller::Controller;
pub use motion::{Motion, MotionConfig};
pub use spring::{Spring, SpringConfig};
pub use tween::{Easing, Tween};
