/// True when compiled for a WebAssembly target.
pub const fn is_web_assembly() -> bool {
    cfg!(target_arch = "wasm32")
}
