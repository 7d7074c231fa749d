use monkeycard_core::ColorMode;
#[cfg(target_arch = "wasm32")]
use monkeycard_core::COLOR_MODE_KEY;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn load_color_mode() -> ColorMode {
    let stored = local_storage().and_then(|storage| storage.get_item(COLOR_MODE_KEY).ok().flatten());
    ColorMode::from_stored(stored.as_deref())
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn load_color_mode() -> ColorMode {
    ColorMode::from_stored(None)
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn save_color_mode(mode: ColorMode) {
    let Some(storage) = local_storage() else {
        gloo::console::warn!("color mode: storage unavailable");
        return;
    };
    if storage.set_item(COLOR_MODE_KEY, mode.as_str()).is_err() {
        gloo::console::warn!("color mode: storage set failed");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn save_color_mode(_mode: ColorMode) {}

pub(crate) fn apply_color_mode(mode: ColorMode) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    if body.set_attribute("data-theme", mode.as_str()).is_err() {
        gloo::console::warn!("color mode: apply failed", mode.as_str());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn color_mode_survives_reload() {
        save_color_mode(ColorMode::Light);
        assert_eq!(load_color_mode(), ColorMode::Light);
        save_color_mode(ColorMode::Dark);
        assert_eq!(load_color_mode(), ColorMode::Dark);
    }

    #[wasm_bindgen_test]
    fn corrupt_value_reads_as_dark() {
        let storage = local_storage().expect("local storage");
        storage.set_item(COLOR_MODE_KEY, "{garbage").expect("set item");
        assert_eq!(load_color_mode(), ColorMode::Dark);
        storage.remove_item(COLOR_MODE_KEY).expect("remove item");
        assert_eq!(load_color_mode(), ColorMode::Dark);
    }

    #[wasm_bindgen_test]
    fn applied_mode_lands_on_body() {
        apply_color_mode(ColorMode::Light);
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .expect("body");
        assert_eq!(body.get_attribute("data-theme").as_deref(), Some("light"));
        apply_color_mode(ColorMode::Dark);
        assert_eq!(body.get_attribute("data-theme").as_deref(), Some("dark"));
    }
}
