//! Wave Rider core crate.
//!
//! A browser arcade game: a sine-wave track scrolls across a canvas while the
//! player marker rides the curve and dodges falling blocks. The crate is
//! compiled to wasm and driven from a host page via [`start_game`]. All
//! gameplay rules live in pure modules under [`game`], so they also compile
//! and test natively.

use wasm_bindgen::prelude::*;

pub mod game;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("could not init logger");
}

/// Boot the game with a clock-derived seed.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    let seed = js_sys::Date::now() as u64 as u32;
    game::boot(seed)
}

/// Boot with a fixed seed so a run can be replayed exactly.
#[wasm_bindgen]
pub fn start_game_seeded(seed: u32) -> Result<(), JsValue> {
    game::boot(seed)
}
