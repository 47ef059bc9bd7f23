use js_sys::JSON;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vizij_blob_core::{
    Config, Direction, InputAdapter, Outputs, PresetCatalog, ScrollEvent, TransitionController,
};

#[wasm_bindgen]
pub struct VizijBlob {
    core: TransitionController,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn catalog_from_js(presets: JsValue) -> Result<PresetCatalog, JsError> {
    if jsvalue_is_undefined_or_null(&presets) {
        return Ok(PresetCatalog::builtin());
    }
    // Stringify the JS array so we can reuse the core parser (expects &str)
    let s = JSON::stringify(&presets)
        .map_err(|e| JsError::new(&format!("presets stringify error: {:?}", e)))?
        .as_string()
        .ok_or_else(|| JsError::new("presets: stringify produced non-string"))?;
    PresetCatalog::from_json(&s).map_err(|e| JsError::new(&format!("presets error: {e}")))
}

#[wasm_bindgen]
impl VizijBlob {
    /// Create a controller. `presets` is an array in the preset feed format
    /// (undefined/null = built-in catalog); `config` is partial Config JSON.
    /// Example:
    ///   new VizijBlob(undefined, { transition_duration: 0.8 })
    #[wasm_bindgen(constructor)]
    pub fn new(presets: JsValue, config: JsValue) -> Result<VizijBlob, JsError> {
        console_error_panic_hook::set_once();

        let catalog = catalog_from_js(presets)?;
        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(VizijBlob {
            core: TransitionController::new(catalog, cfg),
        })
    }

    /// Feed a DOM wheel delta. Returns true when a transition started.
    #[wasm_bindgen(js_name = on_wheel)]
    pub fn on_wheel(&mut self, delta_y: f32) -> bool {
        InputAdapter::new().on_scroll(&mut self.core, &ScrollEvent::vertical(delta_y))
    }

    /// Feed a plain event object (`{ deltaY, deltaX }`). Unreadable payloads fall
    /// back to a forward scroll.
    #[wasm_bindgen]
    pub fn scroll(&mut self, event: JsValue) -> bool {
        let ev: ScrollEvent = swb::from_value(event).unwrap_or_default();
        InputAdapter::new().on_scroll(&mut self.core, &ev)
    }

    /// Step explicitly: +1 forward, anything negative backward.
    #[wasm_bindgen]
    pub fn step(&mut self, direction: i32) -> bool {
        let dir = if direction < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        };
        self.core.begin(dir)
    }

    /// Advance by dt (seconds). Returns Outputs JSON (events of this tick).
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32) -> Result<JsValue, JsError> {
        let out: &Outputs = self.core.update(dt);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Current RenderState as a JS object.
    #[wasm_bindgen(js_name = render_state)]
    pub fn render_state(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.core.state())
            .map_err(|e| JsError::new(&format!("render state error: {e}")))
    }

    /// Current RenderState serialized as a JSON string.
    #[wasm_bindgen(js_name = render_state_json)]
    pub fn render_state_json(&self) -> Result<String, JsError> {
        serde_json::to_string(self.core.state())
            .map_err(|e| JsError::new(&format!("render state error: {e}")))
    }

    #[wasm_bindgen(js_name = current_index)]
    pub fn current_index(&self) -> u32 {
        self.core.current_index() as u32
    }

    #[wasm_bindgen(js_name = is_transitioning)]
    pub fn is_transitioning(&self) -> bool {
        self.core.is_transitioning()
    }

    #[wasm_bindgen(js_name = preset_count)]
    pub fn preset_count(&self) -> u32 {
        self.core.catalog().count() as u32
    }

    #[wasm_bindgen(js_name = preset_name)]
    pub fn preset_name(&self, index: u32) -> String {
        self.core.catalog().get(index as usize).name.clone()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
