use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Array, Date, Function, Reflect};

/// One call into the tag manager, mirroring the three `gtag` commands.
#[derive(Debug, Clone, PartialEq)]
pub enum GtagCall {
    Js { at: DateTime<Utc> },
    Config { target: String, params: Map<String, Value> },
    Event { name: String, params: Map<String, Value> },
}

impl GtagCall {
    pub fn command(&self) -> &'static str {
        match self {
            GtagCall::Js { .. } => "js",
            GtagCall::Config { .. } => "config",
            GtagCall::Event { .. } => "event",
        }
    }
}

/// Where tracked events end up.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    fn dispatch(&self, call: GtagCall);
}

/// Used whenever analytics is not configured or not loaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn dispatch(&self, _call: GtagCall) {}
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = window, js_name = gtag)]
    fn gtag_with_params(command: &str, target: &JsValue, params: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = window, js_name = gtag)]
    fn gtag_bare(command: &str, target: &JsValue) -> Result<(), JsValue>;
}

pub(crate) const GTAG_SCRIPT_ID: &str = "gtag-js";

/// Forwards calls to `window.gtag`.
///
/// The global is probed on every call: ad blockers remove it and the loader
/// script may not have run yet, and either case is a silent no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct GtagReporter;

impl GtagReporter {
    pub fn is_available() -> bool {
        web_sys::window()
            .and_then(|window| Reflect::get(&window, &JsValue::from_str("gtag")).ok())
            .map(|gtag| gtag.is_function())
            .unwrap_or(false)
    }

    fn forward(call: &GtagCall) -> Result<(), JsValue> {
        match call {
            GtagCall::Js { at } => {
                let date = Date::new(&JsValue::from_f64(at.timestamp_millis() as f64));
                gtag_bare(call.command(), &date)
            }
            GtagCall::Config { target, params } => {
                gtag_with_params(call.command(), &JsValue::from_str(target), &to_js(params)?)
            }
            GtagCall::Event { name, params } => {
                gtag_with_params(call.command(), &JsValue::from_str(name), &to_js(params)?)
            }
        }
    }
}

impl Reporter for GtagReporter {
    fn dispatch(&self, call: GtagCall) {
        if !Self::is_available() {
            return;
        }
        if let Err(e) = Self::forward(&call) {
            gloo_console::warn!(format!("gtag {} call failed", call.command()), e);
        }
    }
}

fn to_js(params: &Map<String, Value>) -> Result<JsValue, JsValue> {
    params
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

/// Installs the `dataLayer` queue and the `gtag` shim on `window`, and injects
/// the gtag.js loader once. Safe to call again; the shim is simply replaced.
pub(crate) fn bootstrap(measurement_id: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let data_layer = Reflect::get(&window, &JsValue::from_str("dataLayer"))?;
    if !Array::is_array(&data_layer) {
        Reflect::set(&window, &JsValue::from_str("dataLayer"), &Array::new())?;
    }

    // gtag.js only accepts the `arguments` object, which a Rust closure cannot produce.
    let shim = Function::new_no_args("window.dataLayer.push(arguments);");
    Reflect::set(&window, &JsValue::from_str("gtag"), &shim)?;

    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.get_element_by_id(GTAG_SCRIPT_ID).is_none() {
        let script = document.create_element("script")?;
        script.set_id(GTAG_SCRIPT_ID);
        script.set_attribute("async", "")?;
        script.set_attribute(
            "src",
            &format!(
                "https://www.googletagmanager.com/gtag/js?id={}",
                urlencoding::encode(measurement_id)
            ),
        )?;
        let head = document.head().ok_or_else(|| JsValue::from_str("no document head"))?;
        head.append_child(&script)?;
    }

    Ok(())
}
