//! Run state and the per-frame simulation step.
//!
//! Everything a run needs lives in [`GameState`]: wave, rider, obstacle list,
//! spawner, score and phase. The render loop calls [`GameState::advance_frame`]
//! once per animation frame; the state itself decides whether that frame
//! simulates (only while `Playing`) and reports how the frame ended.

use crate::game::collision::circle_intersects_rect;
use crate::game::obstacle::{Obstacle, Spawner};
use crate::game::rider::Rider;
use crate::game::rng::SeededRng;
use crate::game::wave::Waveform;

/// Frames between wave randomizer steps while the drift toggle is on.
pub const DRIFT_PERIOD: u32 = 240;
/// Score needed per level step.
pub const LEVEL_SCORE_STEP: u32 = 600;

// --- Phase machine ----------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Booted, nothing simulated yet.
    Ready,
    Playing,
    Paused,
    /// A run ended in a collision; the final frame stays on screen.
    Over,
}

/// How one animation frame ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing simulated (ready, paused or already over).
    Idle,
    /// A playing frame that survived.
    Running,
    /// The rider hit a block this frame; `improved` is true when `score`
    /// strictly beat the previous best (which has already been updated).
    GameOver { score: u32, improved: bool },
}

// --- Game state -------------------------------------------------------------

pub struct GameState {
    pub phase: Phase,
    pub wave: Waveform,
    pub rider: Rider,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Best score across runs, if any was ever recorded.
    pub best: Option<u32>,
    spawner: Spawner,
    rng: SeededRng,
    drift: bool,
    drift_countdown: u32,
    params_dirty: bool,
    width: f64,
    height: f64,
}

impl GameState {
    pub fn new(seed: u32, width: f64, height: f64) -> Self {
        let mut rng = SeededRng::new(seed);
        let spawner = Spawner::new(&mut rng);
        Self {
            phase: Phase::Ready,
            wave: Waveform::default(),
            rider: Rider::default(),
            obstacles: Vec::new(),
            score: 0,
            best: None,
            spawner,
            rng,
            drift: false,
            drift_countdown: DRIFT_PERIOD,
            params_dirty: false,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Current level, driven by score alone.
    pub fn level(&self) -> u32 {
        1 + self.score / LEVEL_SCORE_STEP
    }

    /// Vertical marker position, derived from the track curve at the rider's
    /// current x. Never stored anywhere.
    pub fn rider_y(&self) -> f64 {
        self.wave.sample(self.rider.x, self.height / 2.0)
    }

    /// The start button: begins a run from `Ready` or `Over`, toggles
    /// pause/resume while a run is live.
    pub fn press_start(&mut self) {
        match self.phase {
            Phase::Ready | Phase::Over => self.start_run(),
            Phase::Playing => self.phase = Phase::Paused,
            Phase::Paused => self.phase = Phase::Playing,
        }
    }

    /// Label the start button should carry for the current phase.
    pub fn button_label(&self) -> &'static str {
        match self.phase {
            Phase::Ready => "Start Game",
            Phase::Playing => "Pause Game",
            Phase::Paused => "Resume Game",
            Phase::Over => "Restart Game",
        }
    }

    fn start_run(&mut self) {
        self.score = 0;
        self.obstacles.clear();
        self.rider = Rider::default();
        self.spawner = Spawner::new(&mut self.rng);
        self.drift_countdown = DRIFT_PERIOD;
        self.phase = Phase::Playing;
        // wave parameters and the accumulated scroll carry over, the track
        // keeps flowing from where the last run left it
    }

    /// Move the marker one step left or right. Allowed in every phase, the
    /// marker is a cursor as much as an actor.
    pub fn steer(&mut self, dir: f64) {
        self.rider.step(dir, self.width);
    }

    pub fn drift(&self) -> bool {
        self.drift
    }

    pub fn set_drift(&mut self, on: bool) {
        self.drift = on;
        if on {
            self.drift_countdown = DRIFT_PERIOD;
        }
    }

    /// True once after the randomizer rewrote wave parameters; the caller
    /// syncs sliders and labels when it sees it.
    pub fn take_params_dirty(&mut self) -> bool {
        std::mem::take(&mut self.params_dirty)
    }

    /// One simulation step. Only `Playing` frames simulate; every other phase
    /// reports `Idle` and changes nothing.
    ///
    /// Step order within a playing frame: spawn, fall, cull, collide. A frame
    /// that ends in a collision keeps its score as the final score (the hit
    /// frame itself does not count), and the wave does not advance past the
    /// crash picture.
    pub fn advance_frame(&mut self) -> FrameOutcome {
        if self.phase != Phase::Playing {
            return FrameOutcome::Idle;
        }

        let level = self.level();
        if let Some(fresh) = self.spawner.tick(&mut self.rng, level, self.width) {
            self.obstacles.push(fresh);
        }
        for o in &mut self.obstacles {
            o.fall();
        }
        let height = self.height;
        self.obstacles.retain(|o| !o.below(height));

        let (cx, cy, r) = (self.rider.x, self.rider_y(), self.rider.radius);
        let hit = self
            .obstacles
            .iter()
            .any(|o| circle_intersects_rect(cx, cy, r, o));
        if hit {
            self.phase = Phase::Over;
            // no recorded best counts as zero, so a zero-score run never records
            let improved = self.score > self.best.unwrap_or(0);
            if improved {
                self.best = Some(self.score);
            }
            return FrameOutcome::GameOver {
                score: self.score,
                improved,
            };
        }

        self.wave.advance();
        if self.drift {
            self.drift_countdown -= 1;
            if self.drift_countdown == 0 {
                self.wave.randomize(&mut self.rng);
                self.params_dirty = true;
                self.drift_countdown = DRIFT_PERIOD;
            }
        }
        self.score += 1;
        FrameOutcome::Running
    }
}
