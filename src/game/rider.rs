//! The player marker that rides the wave.
//!
//! Only the horizontal position belongs to the rider. Its vertical position
//! is derived from the track curve every frame and never stored, so the
//! marker can never detach from the wave.

pub const RIDER_RADIUS: f64 = 10.0;
pub const RIDER_START_X: f64 = 50.0;
/// Horizontal travel per arrow-key press.
pub const RIDER_STEP: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    pub x: f64,
    pub radius: f64,
}

impl Default for Rider {
    fn default() -> Self {
        Self {
            x: RIDER_START_X,
            radius: RIDER_RADIUS,
        }
    }
}

impl Rider {
    /// Step left (negative `dir`) or right (positive `dir`), clamped to the
    /// canvas width.
    pub fn step(&mut self, dir: f64, width: f64) {
        self.x = (self.x + dir.signum() * RIDER_STEP).clamp(0.0, width);
    }
}
