//! Score / best / level readouts as fixed DOM chips above the canvas.
//!
//! The chips are created on boot if the host page does not provide them and
//! refreshed every frame. All updates are best-effort; a missing element
//! never fails a frame.

use wasm_bindgen::JsValue;
use web_sys::Document;

/// Create the readout chips if the page does not already carry them.
pub fn ensure_hud(doc: &Document) -> Result<(), JsValue> {
    ensure_chip(doc, "wr-score", 12, "Score: 0")?;
    ensure_chip(doc, "wr-best", 150, "Best: 0")?;
    ensure_chip(doc, "wr-level", 290, "Level: 1")?;
    Ok(())
}

fn ensure_chip(doc: &Document, id: &str, left: u32, initial: &str) -> Result<(), JsValue> {
    if doc.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;
    let div = doc.create_element("div")?;
    div.set_id(id);
    div.set_text_content(Some(initial));
    div.set_attribute(
        "style",
        &format!(
            "position:fixed; top:10px; left:{left}px; font-family:'Fira Code', monospace; \
             font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); \
             border:1px solid #333; border-radius:6px; color:#ffd166; z-index:45; \
             letter-spacing:0.5px;"
        ),
    )
    .ok();
    body.append_child(&div)?;
    Ok(())
}

/// Push the current numbers into the chips. An absent best reads as zero,
/// matching how it scores.
pub fn update_hud(doc: &Document, score: u32, best: Option<u32>, level: u32) {
    if let Some(el) = doc.get_element_by_id("wr-score") {
        el.set_text_content(Some(&format!("Score: {score}")));
    }
    if let Some(el) = doc.get_element_by_id("wr-best") {
        el.set_text_content(Some(&format!("Best: {}", best.unwrap_or(0))));
    }
    if let Some(el) = doc.get_element_by_id("wr-level") {
        el.set_text_content(Some(&format!("Level: {level}")));
    }
}
