use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, ResizeObserver, Storage, Window};

fn try_window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("`window` unavailable"))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if there is no window or `localStorage` is disabled.
pub fn local_storage() -> Result<Storage, JsValue> {
    try_window()?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// `location.search` of the current page, empty when unavailable.
#[must_use]
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

/// Start fetching an image so it is cached before it is shown.
pub fn preload_image(src: &str) {
    if let Ok(img) = web_sys::HtmlImageElement::new() {
        img.set_src(src);
    }
}

/// One-shot `setTimeout` that is cleared when cancelled or dropped.
pub struct Timeout {
    handle: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedule `callback` after `delay_ms`.
    ///
    /// # Errors
    /// Returns an error if there is no window or the timer cannot be registered.
    pub fn new(delay_ms: u32, callback: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let closure: Closure<dyn FnMut()> = Closure::once(callback);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let handle = try_window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay,
        )?;
        Ok(Self {
            handle: Some(handle),
            _callback: closure,
        })
    }

    pub fn cancel(&mut self) {
        if let (Some(handle), Some(win)) = (self.handle.take(), web_sys::window()) {
            win.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Reports an element's width whenever it is resized; disconnects on drop.
pub struct WidthObserver {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, ResizeObserver)>,
}

impl WidthObserver {
    /// Observe `element`, calling `on_width` with its client width.
    ///
    /// # Errors
    /// Returns an error if `ResizeObserver` is not supported.
    pub fn observe(
        element: &HtmlElement,
        mut on_width: impl FnMut(f64) + 'static,
    ) -> Result<Self, JsValue> {
        let target = element.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, ResizeObserver)>::new(
            move |_entries: js_sys::Array, _observer: ResizeObserver| {
                on_width(f64::from(target.client_width()));
            },
        );
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for WidthObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// `log` sink writing to the browser console.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

/// Route `log` records to the console. Later calls are ignored.
pub fn init_console_logging(level: log::LevelFilter) {
    if log::set_logger(&CONSOLE_LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
