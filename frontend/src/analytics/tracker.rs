use std::rc::Rc;

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use super::event::{AnalyticsEvent, ConversionEvent, ConversionType};
use super::reporter::{GtagCall, NoopReporter, Reporter};
use crate::vitals::MetricSample;

/// Scroll percentages worth reporting. Anything else is dropped.
pub const SCROLL_MILESTONES: [u32; 5] = [25, 50, 75, 90, 100];

/// Ambient page information stamped on most events.
pub trait PageContext {
    fn title(&self) -> String;
    fn location(&self) -> String;
}

/// Reads `document.title` and `location.href`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserPage;

impl PageContext for BrowserPage {
    fn title(&self) -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|d| d.title())
            .unwrap_or_default()
    }

    fn location(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StaticPage {
    pub title: String,
    pub location: String,
}

impl StaticPage {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
        }
    }
}

impl PageContext for StaticPage {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn location(&self) -> String {
        self.location.clone()
    }
}

/// Turns domain actions into gtag events.
///
/// Cheap to clone; clones share the reporter and page context.
#[derive(Clone)]
pub struct Tracker {
    reporter: Rc<dyn Reporter>,
    page: Rc<dyn PageContext>,
    measurement_id: Rc<str>,
}

impl Tracker {
    pub fn new(
        reporter: Rc<dyn Reporter>,
        page: Rc<dyn PageContext>,
        measurement_id: impl Into<Rc<str>>,
    ) -> Self {
        Self {
            reporter,
            page,
            measurement_id: measurement_id.into(),
        }
    }

    /// A tracker that drops everything.
    pub fn disabled() -> Self {
        Self::new(Rc::new(NoopReporter), Rc::new(StaticPage::default()), "")
    }

    pub fn measurement_id(&self) -> &str {
        &self.measurement_id
    }

    /// Sends the `js` and `config` commands. Does nothing without a measurement id.
    pub fn initialize(&self) {
        if self.measurement_id.is_empty() {
            return;
        }
        self.reporter.dispatch(GtagCall::Js { at: Utc::now() });
        let params = object(json!({
            "page_title": self.page.title(),
            "page_location": self.page.location(),
        }));
        tracing::debug!(measurement_id = %self.measurement_id, "configuring analytics");
        self.reporter.dispatch(GtagCall::Config {
            target: self.measurement_id.to_string(),
            params,
        });
    }

    pub fn track_cta_click(&self, label: &str, location: &str) {
        let params = object(json!({
            "event_category": "engagement",
            "event_label": label,
            "cta_location": location,
        }));
        self.send("cta_click", self.with_page(params));
    }

    /// Reports both a `form_submit` and a `conversion` event.
    pub fn track_form_submission(&self, form_type: ConversionType, form_location: &str) {
        let params = object(json!({
            "event_category": "conversion",
            "event_label": form_type.as_str(),
            "form_location": form_location,
        }));
        self.send("form_submit", self.with_page(params));

        let conversion = object(json!({
            "send_to": &*self.measurement_id,
            "event_category": "conversion",
            "event_label": form_type.as_str(),
            "value": 1,
        }));
        self.send("conversion", conversion);
    }

    pub fn track_scroll_depth(&self, percentage: u32) {
        if !SCROLL_MILESTONES.contains(&percentage) {
            return;
        }
        let params = object(json!({
            "event_category": "engagement",
            "event_label": format!("{}%", percentage),
            "value": percentage,
        }));
        self.send("scroll_depth", self.with_page(params));
    }

    pub fn track_engagement_time(&self, seconds: u64) {
        let params = object(json!({
            "event_category": "engagement",
            "value": seconds,
        }));
        self.send("engagement_time", self.with_page(params));
    }

    pub fn track_funnel_step(&self, step: &str, step_number: i32, conversion_type: ConversionType) {
        let params = object(json!({
            "event_category": "funnel",
            "event_label": step,
            "funnel_step": step_number,
            "conversion_type": conversion_type.as_str(),
        }));
        self.send("funnel_step", self.with_page(params));
    }

    /// Forwards a caller-defined event. Properties are copied verbatim and
    /// may override the default `event_category`.
    pub fn track_event(&self, event: &AnalyticsEvent) {
        let name = if event.event_name.is_empty() {
            "custom_event"
        } else {
            event.event_name.as_str()
        };

        let mut params = Map::new();
        params.insert("event_category".into(), Value::from("custom"));
        for (key, value) in &event.properties {
            params.insert(key.clone(), value.clone());
        }
        let mut params = self.with_page(params);
        params.insert(
            "timestamp".into(),
            Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        self.send(name, params);
    }

    pub fn track_conversion(&self, event: &ConversionEvent) {
        let mut params = object(json!({
            "send_to": &*self.measurement_id,
            "event_category": "conversion",
            "value": event.value.unwrap_or(1.0),
        }));
        if let Some(conversion_type) = event.conversion_type {
            params.insert("event_label".into(), Value::from(conversion_type.as_str()));
        }
        if let Some(step) = &event.funnel_step {
            params.insert("funnel_step".into(), Value::from(step.as_str()));
        }
        self.send("conversion", self.with_page(params));
    }

    pub fn track_web_vital(&self, sample: &MetricSample) {
        let params = object(json!({
            "event_category": "Performance",
            "event_label": sample.metric.name(),
            "value": sample.value.round() as i64,
            "custom_map": { "metric_rating": sample.rating.as_str() },
        }));
        self.send("web_vitals", params);
    }

    fn with_page(&self, mut params: Map<String, Value>) -> Map<String, Value> {
        params.insert("page_title".into(), Value::from(self.page.title()));
        params.insert("page_location".into(), Value::from(self.page.location()));
        params
    }

    fn send(&self, name: &str, params: Map<String, Value>) {
        tracing::debug!(event = name, "forwarding analytics event");
        self.reporter.dispatch(GtagCall::Event {
            name: name.to_string(),
            params,
        });
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::disabled()
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
