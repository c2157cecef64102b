//! Persisted deadline slot backed by `window.localStorage`.
//!
//! One key, shared by every countdown display on the page and by every open
//! tab. Reads and writes are not synchronized across tabs; the last writer
//! wins and the tick logic self-corrects on the next read.

use estudio_web::defaults::OFFER_STORAGE_KEY;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    gloo_utils::window().local_storage().ok().flatten()
}

/// Read the shared offer deadline, if one is stored and parseable.
pub fn stored_deadline() -> Option<i64> {
    let raw = local_storage()?.get_item(OFFER_STORAGE_KEY).ok().flatten()?;
    raw.trim().parse::<f64>().ok().map(|ms| ms as i64)
}

/// Persist a renewed deadline. Failures (storage disabled, quota) are
/// ignored; the display then recomputes a fresh window every tick.
pub fn store_deadline(deadline_ms: i64) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(OFFER_STORAGE_KEY, &deadline_ms.to_string());
    }
}
