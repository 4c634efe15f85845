//! WASM bridge for PIL — registers passive touch/wheel listeners on a canvas.
//!
//! Compiled via `wasm-pack build --target web`. The host page calls
//! `initPassiveTouchListeners(canvas)` once at startup, after the canvas
//! exists.

mod dom;

pub use dom::{ConsoleDiagnostics, DomTarget};

use pil_core::{Diagnostics, ListenerTarget, PassiveRegistrar, RegistrarConfig};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

// ─── Registration ────────────────────────────────────────────────────────

/// Attach passive `touchstart`, `touchmove` and `wheel` listeners to `canvas`.
///
/// Logs a console warning and does nothing else when `canvas` is missing.
#[wasm_bindgen(js_name = initPassiveTouchListeners)]
pub fn init_passive_touch_listeners(canvas: Option<HtmlCanvasElement>) {
    console_error_panic_hook_setup();
    let target = canvas.as_ref().map(DomTarget::new);
    pil_core::init_passive_listeners(target.as_ref(), ConsoleDiagnostics);
}

/// Same as `initPassiveTouchListeners`, looking the canvas up by element id.
/// A missing element, or one that is not a `<canvas>`, counts as no canvas.
#[wasm_bindgen(js_name = initPassiveTouchListenersById)]
pub fn init_passive_touch_listeners_by_id(id: &str) {
    init_passive_touch_listeners(find_canvas(id));
}

/// Register with a JSON `RegistrarConfig`, e.g. `{"events":["wheel"],"tag":"app"}`.
/// Returns `false` without registering when the config is invalid.
#[wasm_bindgen(js_name = initPassiveTouchListenersWithConfig)]
pub fn init_passive_touch_listeners_with_config(
    canvas: Option<HtmlCanvasElement>,
    config_json: &str,
) -> bool {
    console_error_panic_hook_setup();
    let target = canvas.as_ref().map(DomTarget::new);
    register_with_config_json(target.as_ref(), config_json, ConsoleDiagnostics)
}

fn register_with_config_json<T, D>(canvas: Option<&T>, config_json: &str, diagnostics: D) -> bool
where
    T: ListenerTarget + ?Sized,
    D: Diagnostics,
{
    match RegistrarConfig::from_json(config_json) {
        Ok(config) => {
            PassiveRegistrar::with_config(config, diagnostics).register(canvas);
            true
        }
        Err(e) => {
            diagnostics.warn(&RegistrarConfig::default().tagged(&e.to_string()));
            false
        }
    }
}

fn find_canvas(id: &str) -> Option<HtmlCanvasElement> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    match element.dyn_into::<HtmlCanvasElement>() {
        Ok(canvas) => Some(canvas),
        Err(_) => {
            log::debug!("element #{id} is not a canvas");
            None
        }
    }
}

// ─── Platform queries ────────────────────────────────────────────────────

/// True when running as WebAssembly.
#[wasm_bindgen(js_name = isWebAssembly)]
pub fn is_web_assembly() -> bool {
    pil_core::is_web_assembly()
}

/// True on the page's main thread, false inside a worker.
#[wasm_bindgen(js_name = isMainThread)]
pub fn is_main_thread() -> bool {
    if !cfg!(target_arch = "wasm32") {
        return true;
    }
    js_sys::global().dyn_into::<web_sys::Window>().is_ok()
}

/// True unless the document reports itself hidden. Without a document
/// (workers, native) the tab counts as visible.
#[wasm_bindgen(js_name = isTabVisible)]
pub fn is_tab_visible() -> bool {
    if !cfg!(target_arch = "wasm32") {
        return true;
    }
    web_sys::window()
        .and_then(|w| w.document())
        .is_none_or(|d| !d.hidden())
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("PIL WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
