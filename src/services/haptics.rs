use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intensity {
    Light,
    Medium,
}

impl Intensity {
    fn vibrate_ms(self) -> u32 {
        match self {
            Intensity::Light => 10,
            Intensity::Medium => 20,
        }
    }
}

/// Best-effort physical feedback. Implementations must never fail or block.
pub trait Haptics {
    fn pulse(&self, intensity: Intensity);
}

/// `navigator.vibrate`, when the browser has it.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebHaptics;

impl Haptics for WebHaptics {
    fn pulse(&self, intensity: Intensity) {
        let Some(win) = web_sys::window() else { return };
        let navigator = win.navigator();
        // Safari and desktop browsers have no vibrate; calling it would throw.
        let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false);
        if supported {
            let _ = navigator.vibrate_with_duration(intensity.vibrate_ms());
        }
    }
}
