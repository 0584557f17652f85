use crate::{Easing, Spring, SpringConfig, Tween};

/// How the controller animates committed transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionConfig {
    Tween { duration_ms: u64, easing: Easing },
    Spring(SpringConfig),
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::Spring(SpringConfig::DEFAULT)
    }
}

/// An in-flight offset animation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    Tween(Tween),
    Spring(Spring),
}

impl Motion {
    pub fn start(config: MotionConfig, from: f32, to: f32, now_ms: u64) -> Self {
        match config {
            MotionConfig::Tween {
                duration_ms,
                easing,
            } => Self::Tween(Tween::new(from, to, now_ms, duration_ms, easing)),
            MotionConfig::Spring(config) => Self::Spring(Spring::new(from, to, now_ms, config)),
        }
    }

    pub fn target(&self) -> f32 {
        match self {
            Self::Tween(t) => t.to,
            Self::Spring(s) => s.target,
        }
    }

    /// Aims the motion at `to`. Springs keep their momentum; tweens restart from the current
    /// sample.
    pub fn retarget(&mut self, to: f32, now_ms: u64) {
        match self {
            Self::Tween(t) => {
                let duration_ms = t.duration_ms;
                t.retarget(now_ms, to, duration_ms);
            }
            Self::Spring(s) => {
                s.sample(now_ms);
                s.retarget(to);
            }
        }
    }

    pub fn sample(&mut self, now_ms: u64) -> f32 {
        match self {
            Self::Tween(t) => t.sample(now_ms),
            Self::Spring(s) => s.sample(now_ms),
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        match self {
            Self::Tween(t) => t.is_done(now_ms),
            Self::Spring(s) => s.is_done(),
        }
    }
}
