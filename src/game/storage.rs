//! Best-score persistence in the browser's localStorage.
//!
//! A single value lives under one key, stored as a decimal string. Every
//! failure mode (no storage, quota, garbage value) degrades to "no best yet"
//! so persistence can never interrupt play.

const BEST_KEY: &str = "wave-rider.best";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Stored best score, if one exists and parses.
pub fn load_best() -> Option<u32> {
    let storage = local_storage()?;
    let raw = storage.get_item(BEST_KEY).ok()??;
    match raw.parse::<u32>() {
        Ok(best) => Some(best),
        Err(_) => {
            log::warn!("Ignoring unreadable stored best score {raw:?}");
            None
        }
    }
}

/// Persist a new best score, best-effort.
pub fn save_best(score: u32) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(BEST_KEY, &score.to_string()).is_err() {
                log::warn!("Could not persist best score {score}");
            }
        }
        None => log::warn!("localStorage unavailable, best score not persisted"),
    }
}

/// Drop the stored best score.
pub fn clear_best() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(BEST_KEY);
    }
}
