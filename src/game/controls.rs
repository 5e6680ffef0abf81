//! Control panel construction and input wiring.
//!
//! The panel (sliders, theme select, drift toggle, start button) is built
//! under the canvas when the host page does not supply it, then every control
//! gets a forgotten `Closure` listener that routes into the app cell. The
//! keyboard is wired at document level so the canvas never needs focus.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement};

use crate::game::state::Phase;
use crate::game::theme::{THEMES, theme_by_name};
use crate::game::wave::{
    AMPLITUDE_DEFAULT, AMPLITUDE_MAX, AMPLITUDE_MIN, FREQUENCY_DEFAULT, FREQUENCY_MAX,
    FREQUENCY_MIN, PHASE_DEFAULT, PHASE_MAX, PHASE_MIN, Waveform,
};

// --- Panel construction -----------------------------------------------------

/// Build the control panel if the page does not already carry one.
pub fn ensure_panel(doc: &Document) -> Result<(), JsValue> {
    if doc.get_element_by_id("wr-controls").is_some() {
        return Ok(());
    }
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;
    let panel = doc.create_element("div")?;
    panel.set_id("wr-controls");
    panel.set_attribute("style", "position:fixed; bottom:18px; left:50%; transform:translateX(-50%); display:flex; align-items:center; gap:14px; font-family:'Fira Code', monospace; font-size:13px; padding:8px 14px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:8px; color:#eee; z-index:40;").ok();

    append_slider(
        doc, &panel, "wr-amplitude", "Amplitude",
        AMPLITUDE_MIN, AMPLITUDE_MAX, 1.0, AMPLITUDE_DEFAULT, format_whole,
    )?;
    append_slider(
        doc, &panel, "wr-frequency", "Frequency",
        FREQUENCY_MIN, FREQUENCY_MAX, 0.001, FREQUENCY_DEFAULT, format_milli,
    )?;
    append_slider(
        doc, &panel, "wr-phase", "Phase",
        PHASE_MIN, PHASE_MAX, 1.0, PHASE_DEFAULT, format_whole,
    )?;

    let select: HtmlSelectElement = doc.create_element("select")?.dyn_into()?;
    select.set_id("wr-theme");
    for t in THEMES.iter() {
        let opt = doc.create_element("option")?;
        opt.set_attribute("value", t.name)?;
        opt.set_text_content(Some(t.name));
        select.append_child(&opt)?;
    }
    panel.append_child(&select)?;

    let drift_wrap = doc.create_element("label")?;
    drift_wrap.set_attribute("style", "display:inline-flex; align-items:center; gap:4px;")
        .ok();
    let drift: HtmlInputElement = doc.create_element("input")?.dyn_into()?;
    drift.set_type("checkbox");
    drift.set_id("wr-drift");
    drift_wrap.append_child(&drift)?;
    let drift_text = doc.create_element("span")?;
    drift_text.set_text_content(Some("Drift"));
    drift_wrap.append_child(&drift_text)?;
    panel.append_child(&drift_wrap)?;

    let button = doc.create_element("button")?;
    button.set_id("wr-start");
    button.set_text_content(Some("Start Game"));
    button.set_attribute("style", "font-family:inherit; font-size:13px; padding:4px 12px; border-radius:6px; border:1px solid #555; background:#222; color:#ffd166; cursor:pointer;").ok();
    panel.append_child(&button)?;

    body.append_child(&panel)?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn append_slider(
    doc: &Document,
    panel: &web_sys::Element,
    id: &str,
    label: &str,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    fmt: fn(f64) -> String,
) -> Result<(), JsValue> {
    let wrap = doc.create_element("span")?;
    wrap.set_attribute("style", "display:inline-flex; align-items:center; gap:6px;")
        .ok();
    let name = doc.create_element("span")?;
    name.set_text_content(Some(label));
    wrap.append_child(&name)?;
    let input: HtmlInputElement = doc.create_element("input")?.dyn_into()?;
    input.set_type("range");
    input.set_id(id);
    input.set_min(&min.to_string());
    input.set_max(&max.to_string());
    input.set_step(&step.to_string());
    input.set_value(&value.to_string());
    wrap.append_child(&input)?;
    let readout = doc.create_element("span")?;
    readout.set_id(&format!("{id}-value"));
    readout.set_text_content(Some(&fmt(value)));
    wrap.append_child(&readout)?;
    panel.append_child(&wrap)?;
    Ok(())
}

fn format_whole(v: f64) -> String {
    format!("{v:.0}")
}

fn format_milli(v: f64) -> String {
    format!("{v:.3}")
}

// --- Event wiring -----------------------------------------------------------

/// Attach all listeners. Called once per page load; the closures are
/// forgotten so they live as long as the page.
pub fn install_listeners(doc: &Document) -> Result<(), JsValue> {
    wire_slider(doc, "wr-amplitude", Waveform::set_amplitude, format_whole)?;
    wire_slider(doc, "wr-frequency", Waveform::set_frequency, format_milli)?;
    wire_slider(doc, "wr-phase", Waveform::set_phase, format_whole)?;

    if let Some(el) = doc.get_element_by_id("wr-theme") {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            if let Some(select) = evt
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            {
                let name = select.value();
                super::with_app(|app| app.theme = theme_by_name(&name));
                log::info!("Theme switched to {name}");
            }
        }) as Box<dyn FnMut(_)>);
        el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    if let Some(el) = doc.get_element_by_id("wr-drift") {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            if let Some(input) = evt
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                let on = input.checked();
                super::with_app(|app| app.state.set_drift(on));
                log::info!("Wave drift {}", if on { "on" } else { "off" });
            }
        }) as Box<dyn FnMut(_)>);
        el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    if let Some(el) = doc.get_element_by_id("wr-start") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            press_start_action();
        }) as Box<dyn FnMut(_)>);
        el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        match evt.key().as_str() {
            "ArrowLeft" => {
                evt.prevent_default();
                super::with_app(|app| app.state.steer(-1.0));
            }
            "ArrowRight" => {
                evt.prevent_default();
                super::with_app(|app| app.state.steer(1.0));
            }
            " " => {
                evt.prevent_default();
                press_start_action();
            }
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

fn wire_slider(
    doc: &Document,
    id: &'static str,
    apply: fn(&mut Waveform, f64),
    fmt: fn(f64) -> String,
) -> Result<(), JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            if let Some(input) = evt
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                let v = input.value_as_number();
                if v.is_nan() {
                    return;
                }
                super::with_app(|app| apply(&mut app.state.wave, v));
                if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                    if let Some(label) = doc.get_element_by_id(&format!("{id}-value")) {
                        label.set_text_content(Some(&fmt(v)));
                    }
                }
            }
        }) as Box<dyn FnMut(_)>);
        el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Start button and the spacebar share this path.
fn press_start_action() {
    super::with_app(|app| {
        app.state.press_start();
        match app.state.phase {
            Phase::Playing if app.state.score == 0 => log::info!("Run started"),
            Phase::Playing => log::info!("Run resumed"),
            Phase::Paused => log::info!("Run paused"),
            _ => {}
        }
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            update_start_button(&doc, app.state.button_label());
        }
    });
}

/// Relabel the start button for the current phase.
pub fn update_start_button(doc: &Document, label: &str) {
    if let Some(btn) = doc.get_element_by_id("wr-start") {
        btn.set_text_content(Some(label));
    }
}

/// Push randomizer-written wave parameters back into the sliders and their
/// readouts so the panel keeps telling the truth.
pub fn push_wave_params(doc: &Document, wave: &Waveform) {
    set_param(doc, "wr-amplitude", wave.amplitude, format_whole);
    set_param(doc, "wr-frequency", wave.frequency, format_milli);
    set_param(doc, "wr-phase", wave.phase, format_whole);
}

fn set_param(doc: &Document, id: &str, value: f64, fmt: fn(f64) -> String) {
    if let Some(el) = doc.get_element_by_id(id) {
        if let Ok(input) = el.dyn_into::<HtmlInputElement>() {
            input.set_value(&value.to_string());
        }
    }
    if let Some(label) = doc.get_element_by_id(&format!("{id}-value")) {
        label.set_text_content(Some(&fmt(value)));
    }
}
