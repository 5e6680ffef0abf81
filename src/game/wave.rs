//! Sine-wave track: parameters, sampling and per-frame scrolling.
//!
//! The track the marker rides is a plain sine curve. Sliders set amplitude,
//! frequency and a static phase offset; the animation loop adds a scroll
//! offset on top so the whole curve travels left while a run is live.

use crate::game::rng::SeededRng;

// --- Slider ranges ----------------------------------------------------------

pub const AMPLITUDE_MIN: f64 = 10.0;
pub const AMPLITUDE_MAX: f64 = 160.0; // crest stays inside a 400px canvas
pub const AMPLITUDE_DEFAULT: f64 = 75.0;

pub const FREQUENCY_MIN: f64 = 0.005;
pub const FREQUENCY_MAX: f64 = 0.06;
pub const FREQUENCY_DEFAULT: f64 = 0.02;

pub const PHASE_MIN: f64 = -200.0;
pub const PHASE_MAX: f64 = 200.0;
pub const PHASE_DEFAULT: f64 = 0.0;

/// Horizontal travel per frame while playing (negative = leftward flow).
pub const SCROLL_STEP: f64 = 2.0;

// Randomizer draws stay inside a friendlier band than the raw slider range
// so a drifting wave never collapses flat or turns into noise.
const DRIFT_AMPLITUDE_MIN: f64 = 50.0;
const DRIFT_AMPLITUDE_MAX: f64 = 150.0;
const DRIFT_FREQUENCY_MIN: f64 = 0.01;
const DRIFT_FREQUENCY_MAX: f64 = 0.06;

// --- Waveform ---------------------------------------------------------------

/// Parameters of the track curve. `phase` belongs to the user (slider);
/// `scroll` belongs to the animation loop. Their sum is the effective
/// horizontal offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    pub scroll: f64,
}

impl Default for Waveform {
    fn default() -> Self {
        Self {
            amplitude: AMPLITUDE_DEFAULT,
            frequency: FREQUENCY_DEFAULT,
            phase: PHASE_DEFAULT,
            scroll: 0.0,
        }
    }
}

impl Waveform {
    /// Height of the curve at horizontal position `x`, around `mid_y`
    /// (the vertical canvas center).
    pub fn sample(&self, x: f64, mid_y: f64) -> f64 {
        mid_y + self.amplitude * (self.frequency * (x + self.phase + self.scroll)).sin()
    }

    /// Advance the scroll offset by one frame of leftward travel.
    pub fn advance(&mut self) {
        self.scroll -= SCROLL_STEP;
    }

    pub fn set_amplitude(&mut self, v: f64) {
        self.amplitude = v.clamp(AMPLITUDE_MIN, AMPLITUDE_MAX);
    }

    pub fn set_frequency(&mut self, v: f64) {
        self.frequency = v.clamp(FREQUENCY_MIN, FREQUENCY_MAX);
    }

    pub fn set_phase(&mut self, v: f64) {
        self.phase = v.clamp(PHASE_MIN, PHASE_MAX);
    }

    /// Drift step: re-roll amplitude and frequency. Phase and scroll are left
    /// alone, the curve keeps travelling from where it was.
    pub fn randomize(&mut self, rng: &mut SeededRng) {
        self.amplitude = rng.range_f64(DRIFT_AMPLITUDE_MIN, DRIFT_AMPLITUDE_MAX);
        self.frequency = rng.range_f64(DRIFT_FREQUENCY_MIN, DRIFT_FREQUENCY_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_matches_closed_form() {
        let wave = Waveform {
            amplitude: 80.0,
            frequency: 0.03,
            phase: 12.0,
            scroll: -40.0,
        };
        let x = 137.0;
        let expected = 200.0 + 80.0 * (0.03f64 * (137.0 + 12.0 - 40.0)).sin();
        assert!((wave.sample(x, 200.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn amplitude_bounds_the_excursion() {
        let wave = Waveform {
            amplitude: 60.0,
            ..Waveform::default()
        };
        for i in 0..800 {
            let y = wave.sample(f64::from(i), 200.0);
            assert!((140.0..=260.0).contains(&y), "x={i} escaped: {y}");
        }
    }

    #[test]
    fn advance_moves_scroll_by_one_step() {
        let mut wave = Waveform::default();
        wave.advance();
        wave.advance();
        assert_eq!(wave.scroll, -2.0 * SCROLL_STEP);
    }

    #[test]
    fn scrolling_translates_the_curve() {
        let mut wave = Waveform::default();
        let before = wave.sample(100.0, 200.0);
        wave.advance();
        // after scrolling left by SCROLL_STEP, the old value reappears
        // SCROLL_STEP further to the right
        let after = wave.sample(100.0 + SCROLL_STEP, 200.0);
        assert!((before - after).abs() < 1e-12);
    }

    #[test]
    fn setters_clamp_to_slider_ranges() {
        let mut wave = Waveform::default();
        wave.set_amplitude(9999.0);
        assert_eq!(wave.amplitude, AMPLITUDE_MAX);
        wave.set_amplitude(-5.0);
        assert_eq!(wave.amplitude, AMPLITUDE_MIN);
        wave.set_frequency(1.0);
        assert_eq!(wave.frequency, FREQUENCY_MAX);
        wave.set_frequency(0.0);
        assert_eq!(wave.frequency, FREQUENCY_MIN);
        wave.set_phase(-1_000.0);
        assert_eq!(wave.phase, PHASE_MIN);
        wave.set_phase(1_000.0);
        assert_eq!(wave.phase, PHASE_MAX);
    }

    #[test]
    fn randomize_stays_in_band_and_keeps_phase() {
        let mut rng = SeededRng::new(77);
        let mut wave = Waveform {
            phase: 33.0,
            scroll: -500.0,
            ..Waveform::default()
        };
        for _ in 0..200 {
            wave.randomize(&mut rng);
            assert!((AMPLITUDE_MIN..=AMPLITUDE_MAX).contains(&wave.amplitude));
            assert!((FREQUENCY_MIN..=FREQUENCY_MAX).contains(&wave.frequency));
            assert_eq!(wave.phase, 33.0);
            assert_eq!(wave.scroll, -500.0);
        }
    }
}
