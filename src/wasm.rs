//! WebAssembly entry point.

use wasm_bindgen::prelude::*;

use crate::io::{run, PlanDocument};

/// Plans a trip from a JS object shaped like [`PlanDocument`] and returns
/// the [`PlanReport`](crate::io::PlanReport) as a JS object.
#[wasm_bindgen(js_name = planTrip)]
pub fn plan_trip(document: JsValue) -> Result<JsValue, JsValue> {
    let document: PlanDocument = serde_wasm_bindgen::from_value(document)
        .map_err(|e| js_sys::Error::new(&format!("invalid plan document: {e}")))?;
    let report = run(document).map_err(|e| js_sys::Error::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&report).map_err(|e| js_sys::Error::new(&e.to_string()).into())
}
