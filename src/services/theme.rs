use crate::models::palette::FuelPalette;
use wasm_bindgen::JsValue;
use web_sys::CssStyleDeclaration;

/// Reads the fuel colour tokens from the page's stylesheet once, at start-up.
///
/// Any token the page does not define (or a page without a body) keeps its default colour.
pub fn load_palette() -> FuelPalette {
    match body_style() {
        Ok(Some(style)) => FuelPalette::from_tokens(|token| style.get_property_value(token).ok()),
        Ok(None) => {
            gloo::console::warn!("No document body to read theme from, using default palette");
            FuelPalette::default()
        }
        Err(e) => {
            gloo::console::warn!(format!("Failed to read theme tokens: {e:?}"));
            FuelPalette::default()
        }
    }
}

fn body_style() -> Result<Option<CssStyleDeclaration>, JsValue> {
    let window = gloo::utils::window();
    match window.document().and_then(|document| document.body()) {
        Some(body) => window.get_computed_style(&body),
        None => Ok(None),
    }
}
