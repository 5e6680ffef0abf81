//! App assembly: the state cell, the animation loop and canvas rendering.
//!
//! `boot()` wires the DOM (creating canvas, HUD and control panel when the
//! host page does not provide them), seeds a fresh [`state::GameState`] and
//! starts a self-rescheduling `requestAnimationFrame` loop. The loop renders
//! every frame; the state decides whether a frame also simulates.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, window};

pub mod collision;
pub mod obstacle;
pub mod rider;
pub mod rng;
pub mod state;
pub mod storage;
pub mod theme;
pub mod wave;

mod controls;
mod hud;

use state::{FrameOutcome, GameState, Phase};
use theme::Theme;

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 400.0;

// --- App cell ---------------------------------------------------------------

struct App {
    ctx: CanvasRenderingContext2d,
    state: GameState,
    theme: &'static Theme,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Run `f` against the live app, if one is booted. Event listeners and the
/// frame loop both come through here.
fn with_app(f: impl FnOnce(&mut App)) {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            f(app);
        }
    });
}

// --- Boot -------------------------------------------------------------------

/// Build the DOM, load the stored best and start the loop. Calling it again
/// replaces the running game with a fresh one (listeners and the loop are
/// only installed once).
pub(crate) fn boot(seed: u32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas = ensure_canvas(&doc)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    hud::ensure_hud(&doc)?;
    controls::ensure_panel(&doc)?;

    let mut state = GameState::new(seed, CANVAS_WIDTH, CANVAS_HEIGHT);
    state.best = storage::load_best();
    let label = state.button_label();

    // honor a theme the page (or a previous boot) already selected
    let theme = doc
        .get_element_by_id("wr-theme")
        .and_then(|el| el.dyn_into::<web_sys::HtmlSelectElement>().ok())
        .map(|sel| theme::theme_by_name(&sel.value()))
        .unwrap_or_else(theme::default_theme);

    let first_boot = APP.with(|cell| cell.borrow().is_none());
    APP.with(|cell| cell.replace(Some(App { ctx, state, theme })));
    if first_boot {
        controls::install_listeners(&doc)?;
        start_frame_loop();
    }
    controls::update_start_button(&doc, label);
    log::info!("Wave Rider ready (seed {seed})");
    Ok(())
}

fn ensure_canvas(doc: &Document) -> Result<HtmlCanvasElement, JsValue> {
    if let Some(el) = doc.get_element_by_id("wr-canvas") {
        return Ok(el.dyn_into()?);
    }
    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    canvas.set_id("wr-canvas");
    canvas.set_width(CANVAS_WIDTH as u32);
    canvas.set_height(CANVAS_HEIGHT as u32);
    canvas.set_attribute("style", "position:fixed; left:50%; top:44%; transform:translate(-50%,-50%); box-shadow:0 0 32px 0 rgba(0,0,0,0.3); border-radius:12px; border:2px solid #222; background:#000; z-index:20;").ok();
    doc.body()
        .ok_or_else(|| JsValue::from_str("no document body"))?
        .append_child(&canvas)?;
    Ok(canvas)
}

// --- Frame loop -------------------------------------------------------------

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        // run the frame first and alert after the cell borrow is released,
        // alert() blocks inside the callback
        let alert = APP.with(|cell| cell.borrow_mut().as_mut().and_then(frame_tick));
        if let Some(msg) = alert {
            if let Some(w) = window() {
                let _ = w.alert_with_message(&msg);
            }
        }
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// One animation frame: simulate (state permitting), render, refresh the DOM
/// readouts. Returns the blocking notification to show, on the frame a run
/// ends.
fn frame_tick(app: &mut App) -> Option<String> {
    let outcome = app.state.advance_frame();
    let mut alert = None;
    if let FrameOutcome::GameOver { score, improved } = outcome {
        if improved {
            storage::save_best(score);
            log::info!("Run over, new best {score}");
        } else {
            log::info!("Run over, score {score}");
        }
        alert = Some(format!("Game Over! Your score: {score}"));
    }

    render(app);

    if let Some(doc) = window().and_then(|w| w.document()) {
        hud::update_hud(&doc, app.state.score, app.state.best, app.state.level());
        if app.state.take_params_dirty() {
            controls::push_wave_params(&doc, &app.state.wave);
        }
        if matches!(outcome, FrameOutcome::GameOver { .. }) {
            controls::update_start_button(&doc, app.state.button_label());
        }
    }
    alert
}

// --- Rendering --------------------------------------------------------------

fn render(app: &App) {
    let ctx = &app.ctx;
    let theme = app.theme;
    let mid = CANVAS_HEIGHT / 2.0;

    ctx.set_fill_style_str(theme.background);
    ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    // track curve, sampled at every pixel column
    ctx.set_stroke_style_str(theme.wave);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(0.0, app.state.wave.sample(0.0, mid));
    let mut x = 1.0;
    while x <= CANVAS_WIDTH {
        ctx.line_to(x, app.state.wave.sample(x, mid));
        x += 1.0;
    }
    ctx.stroke();

    ctx.set_fill_style_str(theme.rider);
    ctx.begin_path();
    ctx.arc(
        app.state.rider.x,
        app.state.rider_y(),
        app.state.rider.radius,
        0.0,
        std::f64::consts::TAU,
    )
    .ok();
    ctx.fill();

    ctx.set_fill_style_str(theme.obstacle);
    for o in &app.state.obstacles {
        ctx.fill_rect(o.x, o.y, o.w, o.h);
    }

    match app.state.phase {
        Phase::Ready => banner(ctx, theme, "WAVE RIDER", Some("press Start or Space")),
        Phase::Paused => banner(ctx, theme, "PAUSED", None),
        Phase::Over => {
            ctx.set_fill_style_str("rgba(0,0,0,0.55)");
            ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
            banner(
                ctx,
                theme,
                "GAME OVER",
                Some(&format!("final score {}", app.state.score)),
            );
        }
        Phase::Playing => {}
    }
}

/// Centered stroke-then-fill headline with an optional sub line.
fn banner(ctx: &CanvasRenderingContext2d, theme: &Theme, title: &str, sub: Option<&str>) {
    let cx = CANVAS_WIDTH / 2.0;
    let cy = CANVAS_HEIGHT / 2.0;
    ctx.set_text_align("center");
    ctx.set_font("44px 'Fira Code', monospace");
    ctx.set_line_width(6.0);
    ctx.set_stroke_style_str("#000000");
    ctx.stroke_text(title, cx, cy - 8.0).ok();
    ctx.set_fill_style_str(theme.text);
    ctx.fill_text(title, cx, cy - 8.0).ok();
    if let Some(sub) = sub {
        ctx.set_font("16px 'Fira Code', monospace");
        ctx.fill_text(sub, cx, cy + 26.0).ok();
    }
}
