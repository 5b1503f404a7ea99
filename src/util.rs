// Small helpers shared by the HUD and the scene view.

use crate::geom::Vec3;
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Compact display form for HUD coordinates, e.g. "(0.42, 0.00, -1.30)".
pub fn format_vec3(v: Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_vec3_rounds_to_two_decimals() {
        assert_eq!(format_vec3(Vec3::new(0.424, 0.0, -1.299)), "(0.42, 0.00, -1.30)");
    }
}
