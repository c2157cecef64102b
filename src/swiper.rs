//! JavaScript interop for the Swiper testimonial slider and the icon set.
//! Provides Rust bindings to the helpers defined in swiper_helpers.js.

use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

use crate::config::{SLIDER_AUTOPLAY_MS, SLIDER_GAP_PX};

#[wasm_bindgen(module = "/js/swiper_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = initTestimonialSlider)]
    fn init_testimonial_slider_js(config: JsValue);

    /// Re-scan the document for icon placeholders. Safe to call again after
    /// injecting markup dynamically.
    #[wasm_bindgen(js_name = refreshIcons)]
    pub fn refresh_icons();
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoplayConfig {
    pub delay: u32,
    pub disable_on_interaction: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointConfig {
    pub slides_per_view: u32,
}

/// Tunable slider options passed across the JS boundary. Pagination wiring
/// stays inside the helper, next to the DOM selectors it targets.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderConfig {
    pub slides_per_view: u32,
    pub space_between: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub autoplay: AutoplayConfig,
    pub breakpoints: BTreeMap<u32, BreakpointConfig>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            slides_per_view: 1,
            space_between: SLIDER_GAP_PX,
            looped: true,
            autoplay: AutoplayConfig {
                delay: SLIDER_AUTOPLAY_MS,
                disable_on_interaction: false,
            },
            breakpoints: BTreeMap::from([
                (768, BreakpointConfig { slides_per_view: 2 }),
                (1024, BreakpointConfig { slides_per_view: 3 }),
            ]),
        }
    }
}

/// Initialize the testimonial slider. The helper is a no-op when the
/// library or the container is missing from the page.
pub fn init_testimonial_slider(config: &SliderConfig) {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    match config.serialize(&serializer) {
        Ok(js_config) => init_testimonial_slider_js(js_config),
        Err(err) => log::error!("slider config serialization failed: {}", err),
    }
}
