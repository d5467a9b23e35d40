use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
	/// A chart instance owned by the Chart.js runtime.
	pub type Chart;

	/// Bind a configuration to a target element and draw it. Chart.js takes over rendering from here, so callers are free to drop the returned handle.
	#[wasm_bindgen(constructor)]
	pub fn new(target: &web_sys::Element, config: &JsValue) -> Chart;
}
