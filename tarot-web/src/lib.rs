#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod clock;
pub mod components;
pub mod dom;
pub mod launch;
pub mod paths;
pub mod storage;
pub mod text;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    dom::init_console_logging(log::LevelFilter::Info);
    yew::Renderer::<app::App>::new().render();
}
