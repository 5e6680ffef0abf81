//! Falling obstacles and their spawn scheduling.
//!
//! Obstacles are axis-aligned rectangles that enter at the top edge and fall
//! at a constant speed until they leave the canvas. Spawning is driven by a
//! frame countdown owned by [`Spawner`]; each spawn re-arms the countdown
//! with a random draw from the current level's interval window, which is how
//! higher levels get denser traffic without faster blocks.

use crate::game::rng::SeededRng;

// --- Geometry ---------------------------------------------------------------

pub const SIZE_MIN: f64 = 10.0;
pub const SIZE_MAX: f64 = 40.0; // exclusive
/// Vertical travel per frame.
pub const FALL_STEP: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Obstacle {
    /// New obstacle at the top edge, fully inside the horizontal bounds.
    pub fn spawn(rng: &mut SeededRng, width: f64) -> Self {
        let w = rng.range_f64(SIZE_MIN, SIZE_MAX);
        let h = rng.range_f64(SIZE_MIN, SIZE_MAX);
        let x = rng.range_f64(0.0, width - w);
        Self { x, y: 0.0, w, h }
    }

    pub fn fall(&mut self) {
        self.y += FALL_STEP;
    }

    /// True once the rect has left the canvas. Sitting exactly on the bottom
    /// edge does not count, only strictly past it.
    pub fn below(&self, height: f64) -> bool {
        self.y > height
    }
}

// --- Spawn scheduling -------------------------------------------------------

const SPAWN_BASE_MIN: u32 = 90;
const SPAWN_BASE_MAX: u32 = 200;
/// Frames shaved off each side of the interval window per level past the first.
const NARROW_PER_LEVEL: u32 = 8;
const SPAWN_FLOOR_MIN: u32 = 30;
const SPAWN_FLOOR_MAX: u32 = 60;

/// Frame countdown toward the next spawn. Lives in game state, so a restart
/// rebuilds it and no stale schedule survives into the next run.
#[derive(Debug, Clone)]
pub struct Spawner {
    countdown: u32,
}

impl Spawner {
    pub fn new(rng: &mut SeededRng) -> Self {
        let (lo, hi) = Self::interval_window(1);
        Self {
            countdown: rng.range_u32(lo, hi),
        }
    }

    /// Interval window in frames for a given level, narrowing with depth and
    /// floored so the stream never becomes a wall.
    pub fn interval_window(level: u32) -> (u32, u32) {
        let tighten = level.saturating_sub(1) * NARROW_PER_LEVEL;
        let lo = SPAWN_BASE_MIN.saturating_sub(tighten).max(SPAWN_FLOOR_MIN);
        let hi = SPAWN_BASE_MAX.saturating_sub(tighten).max(SPAWN_FLOOR_MAX);
        (lo, hi)
    }

    /// Advance the countdown by one frame. On expiry, spawn an obstacle and
    /// re-arm from the window of `level`.
    pub fn tick(&mut self, rng: &mut SeededRng, level: u32, width: f64) -> Option<Obstacle> {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return None;
        }
        let (lo, hi) = Self::interval_window(level);
        self.countdown = rng.range_u32(lo, hi);
        Some(Obstacle::spawn(rng, width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_rects_are_inside_bounds() {
        let mut rng = SeededRng::new(11);
        for _ in 0..500 {
            let o = Obstacle::spawn(&mut rng, 800.0);
            assert!((SIZE_MIN..SIZE_MAX).contains(&o.w), "w={}", o.w);
            assert!((SIZE_MIN..SIZE_MAX).contains(&o.h), "h={}", o.h);
            assert!(o.x >= 0.0 && o.x + o.w <= 800.0, "x={} w={}", o.x, o.w);
            assert_eq!(o.y, 0.0);
        }
    }

    #[test]
    fn fall_step_is_constant() {
        let mut rng = SeededRng::new(3);
        let mut o = Obstacle::spawn(&mut rng, 800.0);
        for i in 1..=50 {
            o.fall();
            assert_eq!(o.y, f64::from(i) * FALL_STEP);
        }
    }

    #[test]
    fn below_is_strict() {
        let o = Obstacle { x: 0.0, y: 400.0, w: 20.0, h: 20.0 };
        assert!(!o.below(400.0));
        let o = Obstacle { y: 400.1, ..o };
        assert!(o.below(400.0));
    }

    #[test]
    fn countdown_expires_inside_its_window() {
        let mut rng = SeededRng::new(909);
        for _ in 0..50 {
            let mut spawner = Spawner::new(&mut rng);
            let (lo, hi) = Spawner::interval_window(1);
            let mut frames = 0u32;
            let spawned = loop {
                frames += 1;
                if let Some(o) = spawner.tick(&mut rng, 1, 800.0) {
                    break o;
                }
                assert!(frames <= hi, "countdown overran the window");
            };
            assert!(frames >= lo, "spawned after {frames} frames, window {lo}..={hi}");
            assert_eq!(spawned.y, 0.0);
        }
    }

    #[test]
    fn window_narrows_with_level_and_floors() {
        let mut prev = Spawner::interval_window(1);
        assert_eq!(prev, (SPAWN_BASE_MIN, SPAWN_BASE_MAX));
        for level in 2..60 {
            let cur = Spawner::interval_window(level);
            assert!(cur.0 <= prev.0 && cur.1 <= prev.1, "window widened at level {level}");
            assert!(cur.0 >= SPAWN_FLOOR_MIN && cur.1 >= SPAWN_FLOOR_MAX);
            assert!(cur.0 <= cur.1);
            prev = cur;
        }
        assert_eq!(Spawner::interval_window(1_000), (SPAWN_FLOOR_MIN, SPAWN_FLOOR_MAX));
    }
}
