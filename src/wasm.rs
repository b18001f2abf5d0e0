use wasm_bindgen::prelude::*;

use crate::ConvertOptions;

/// Convert SVG text with the default options.
#[wasm_bindgen]
pub fn convert_svg(svg: &str) -> Result<String, JsValue> {
    crate::convert(svg).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `options` is a plain object with the same camelCase fields as an options file.
#[wasm_bindgen]
pub fn convert_svg_with_options(svg: &str, options: JsValue) -> Result<String, JsValue> {
    let options: ConvertOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?;
    crate::convert_with_options(svg, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}
