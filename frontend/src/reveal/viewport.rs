use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{RevealOptions, VisibilityObserver};

/// `IntersectionObserver` watching a single element.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn is_supported() -> bool {
        web_sys::window()
            .and_then(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok())
            .unwrap_or(false)
    }

    /// Starts observing `target`; `on_change` gets whether any part of it
    /// crosses the threshold.
    pub fn observe<F>(target: &Element, options: &RevealOptions, mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(bool) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            on_change(intersecting);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl VisibilityObserver for ViewportObserver {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}
