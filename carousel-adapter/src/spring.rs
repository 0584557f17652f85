/// Spring parameters, in the tension/friction/mass form used by web spring animators.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    pub mass: f32,
    /// Distance and speed below which the spring is considered at rest.
    pub precision: f32,
}

impl SpringConfig {
    pub const DEFAULT: Self = Self::preset(170.0, 26.0);
    pub const GENTLE: Self = Self::preset(120.0, 14.0);
    pub const WOBBLY: Self = Self::preset(180.0, 12.0);
    pub const STIFF: Self = Self::preset(210.0, 20.0);
    pub const SLOW: Self = Self::preset(280.0, 60.0);
    pub const MOLASSES: Self = Self::preset(280.0, 120.0);

    const fn preset(tension: f32, friction: f32) -> Self {
        Self {
            tension,
            friction,
            mass: 1.0,
            precision: 0.01,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const STEP_MS: u64 = 1;
// Caps the catch-up work after a long pause (e.g. a hidden tab).
const MAX_STEPS_PER_SAMPLE: u64 = 1_000;

/// A damped spring integrated in fixed 1ms steps.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring {
    pub position: f32,
    /// Units per second.
    pub velocity: f32,
    pub target: f32,
    pub config: SpringConfig,
    last_ms: u64,
    at_rest: bool,
}

impl Spring {
    pub fn new(from: f32, to: f32, now_ms: u64, config: SpringConfig) -> Self {
        Self {
            position: from,
            velocity: 0.0,
            target: to,
            config,
            last_ms: now_ms,
            at_rest: from == to,
        }
    }

    pub fn is_done(&self) -> bool {
        self.at_rest
    }

    /// Keeps position and velocity, aiming at a new target.
    pub fn retarget(&mut self, to: f32) {
        self.target = to;
        self.at_rest = false;
    }

    /// Advances the simulation to `now_ms` and returns the position.
    pub fn sample(&mut self, now_ms: u64) -> f32 {
        let steps = (now_ms.saturating_sub(self.last_ms) / STEP_MS).min(MAX_STEPS_PER_SAMPLE);
        self.last_ms = self.last_ms.max(now_ms);
        for _ in 0..steps {
            if self.at_rest {
                break;
            }
            self.step(STEP_MS as f32 / 1000.0);
        }
        self.position
    }

    fn step(&mut self, dt: f32) {
        let displacement = self.position - self.target;
        let force = -self.config.tension * displacement - self.config.friction * self.velocity;
        let mass = if self.config.mass > 0.0 { self.config.mass } else { 1.0 };
        self.velocity += force / mass * dt;
        self.position += self.velocity * dt;

        let precision = self.config.precision;
        if abs(self.velocity) < precision && abs(self.target - self.position) < precision {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

pub(crate) fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}
