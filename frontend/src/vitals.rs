//! Core Web Vitals: rating, scoring and reporting.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Object, Reflect};
use web_sys::{PerformanceObserver, PerformanceObserverEntryList, PerformanceObserverInit};

use crate::analytics::Tracker;

/// How long after mount the timeline is read.
pub const MEASURE_DELAY_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Lcp,
    Fid,
    Cls,
    Fcp,
    Ttfb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub good: f64,
    pub poor: f64,
}

impl Metric {
    pub fn name(self) -> &'static str {
        match self {
            Metric::Lcp => "LCP",
            Metric::Fid => "FID",
            Metric::Cls => "CLS",
            Metric::Fcp => "FCP",
            Metric::Ttfb => "TTFB",
        }
    }

    pub fn thresholds(self) -> Thresholds {
        let (good, poor) = match self {
            Metric::Lcp => (2500.0, 4000.0),
            Metric::Fid => (100.0, 300.0),
            Metric::Cls => (0.1, 0.25),
            Metric::Fcp => (1800.0, 3000.0),
            Metric::Ttfb => (800.0, 1800.0),
        };
        Thresholds { good, poor }
    }

    pub fn rate(self, value: f64) -> Rating {
        let Thresholds { good, poor } = self.thresholds();
        if value <= good {
            Rating::Good
        } else if value <= poor {
            Rating::NeedsImprovement
        } else {
            Rating::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

impl Rating {
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Good => "good",
            Rating::NeedsImprovement => "needs-improvement",
            Rating::Poor => "poor",
        }
    }

    pub fn score(self) -> u32 {
        match self {
            Rating::Good => 100,
            Rating::NeedsImprovement => 75,
            Rating::Poor => 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSample {
    pub metric: Metric,
    pub value: f64,
    pub rating: Rating,
    pub timestamp: DateTime<Utc>,
}

impl MetricSample {
    pub fn new(metric: Metric, value: f64) -> Self {
        Self {
            metric,
            value,
            rating: metric.rate(value),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoreWebVitals {
    pub lcp: Option<MetricSample>,
    pub fid: Option<MetricSample>,
    pub cls: Option<MetricSample>,
    pub fcp: Option<MetricSample>,
    pub ttfb: Option<MetricSample>,
}

impl CoreWebVitals {
    pub fn record(&mut self, sample: MetricSample) {
        let slot = match sample.metric {
            Metric::Lcp => &mut self.lcp,
            Metric::Fid => &mut self.fid,
            Metric::Cls => &mut self.cls,
            Metric::Fcp => &mut self.fcp,
            Metric::Ttfb => &mut self.ttfb,
        };
        *slot = Some(sample);
    }

    pub fn samples(&self) -> impl Iterator<Item = &MetricSample> {
        [&self.lcp, &self.fid, &self.cls, &self.fcp, &self.ttfb]
            .into_iter()
            .flatten()
    }

    /// Mean of the per-metric scores, 0 when nothing was measured.
    pub fn performance_score(&self) -> u32 {
        let scores: Vec<u32> = self.samples().map(|s| s.rating.score()).collect();
        if scores.is_empty() {
            return 0;
        }
        let total: u32 = scores.iter().sum();
        (f64::from(total) / scores.len() as f64).round() as u32
    }

    pub fn report(&self, tracker: &Tracker) {
        for sample in self.samples() {
            tracker.track_web_vital(sample);
        }
    }
}

/// Delay between the browser starting to handle the first input and the
/// input itself. `None` when either timestamp is missing.
pub fn first_input_delay(processing_start: f64, start_time: f64) -> Option<f64> {
    (processing_start > 0.0 && start_time > 0.0).then(|| processing_start - start_time)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutShift {
    pub value: f64,
    pub had_recent_input: bool,
}

/// Sum of the shifts the visitor did not cause themselves.
pub fn layout_shift_score<I>(shifts: I) -> f64
where
    I: IntoIterator<Item = LayoutShift>,
{
    shifts
        .into_iter()
        .filter(|shift| !shift.had_recent_input)
        .map(|shift| shift.value)
        .sum()
}

fn number(entry: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(entry, &JsValue::from_str(key)).ok()?.as_f64()
}

/// Reads what the performance timeline already holds: time to first byte
/// from the navigation entry, first contentful paint from the paint entries.
pub fn read_timeline() -> Result<CoreWebVitals, JsValue> {
    let mut vitals = CoreWebVitals::default();
    let Some(performance) = web_sys::window().and_then(|w| w.performance()) else {
        return Ok(vitals);
    };

    if let Some(navigation) = performance.get_entries_by_type("navigation").iter().next() {
        let response_start = Reflect::get(&navigation, &JsValue::from_str("responseStart"))?.as_f64();
        let request_start = Reflect::get(&navigation, &JsValue::from_str("requestStart"))?.as_f64();
        if let (Some(response), Some(request)) = (response_start, request_start) {
            vitals.record(MetricSample::new(Metric::Ttfb, response - request));
        }
    }

    let paints = performance.get_entries_by_name("first-contentful-paint");
    if let Some(entry) = paints.iter().next() {
        let entry: web_sys::PerformanceEntry = entry.unchecked_into();
        vitals.record(MetricSample::new(Metric::Fcp, entry.start_time()));
    }

    Ok(vitals)
}

/// A `PerformanceObserver` for one entry type, disconnected on drop.
struct EntryObserver {
    observer: PerformanceObserver,
    _callback: Closure<dyn FnMut(PerformanceObserverEntryList, PerformanceObserver)>,
}

impl EntryObserver {
    fn observe<F>(entry_type: &str, mut on_entries: F) -> Result<Self, JsValue>
    where
        F: FnMut(Array) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |list: PerformanceObserverEntryList, _observer: PerformanceObserver| {
            on_entries(list.get_entries());
        }) as Box<dyn FnMut(PerformanceObserverEntryList, PerformanceObserver)>);
        let observer = PerformanceObserver::new(callback.as_ref().unchecked_ref())?;

        // `buffered` is only honoured together with `type`, which web-sys
        // does not expose on the init dictionary.
        let init: PerformanceObserverInit = Object::new().unchecked_into();
        Reflect::set(&init, &JsValue::from_str("type"), &JsValue::from_str(entry_type))?;
        init.set_buffered(true);
        observer.observe(&init);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for EntryObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Starts the LCP, FID and CLS observers. Unsupported entry types are
/// skipped with a warning.
fn observe_vitals(vitals: &Rc<RefCell<CoreWebVitals>>) -> Vec<EntryObserver> {
    let mut observers = Vec::new();

    let lcp = {
        let vitals = vitals.clone();
        EntryObserver::observe("largest-contentful-paint", move |entries| {
            if let Some(start) = number(&entries.at(-1), "startTime") {
                vitals.borrow_mut().record(MetricSample::new(Metric::Lcp, start));
            }
        })
    };

    let fid = {
        let vitals = vitals.clone();
        EntryObserver::observe("first-input", move |entries| {
            for entry in entries.iter() {
                let delay = number(&entry, "processingStart")
                    .zip(number(&entry, "startTime"))
                    .and_then(|(processing, start)| first_input_delay(processing, start));
                if let Some(delay) = delay {
                    vitals.borrow_mut().record(MetricSample::new(Metric::Fid, delay));
                }
            }
        })
    };

    let cls = {
        let vitals = vitals.clone();
        let mut total = 0.0;
        EntryObserver::observe("layout-shift", move |entries| {
            total += layout_shift_score(entries.iter().map(|entry| LayoutShift {
                value: number(&entry, "value").unwrap_or(0.0),
                had_recent_input: Reflect::get(&entry, &JsValue::from_str("hadRecentInput"))
                    .map(|flag| flag.is_truthy())
                    .unwrap_or(false),
            }));
            vitals.borrow_mut().record(MetricSample::new(Metric::Cls, total));
        })
    };

    for (name, observer) in [("LCP", lcp), ("FID", fid), ("CLS", cls)] {
        match observer {
            Ok(observer) => observers.push(observer),
            Err(e) => log::warn!("{} measurement not supported: {:?}", name, e),
        }
    }
    observers
}

/// Collects the vitals shortly after load, logs them and reports each one.
pub fn measure(tracker: Tracker) {
    wasm_bindgen_futures::spawn_local(async move {
        let observed = Rc::new(RefCell::new(CoreWebVitals::default()));
        let observers = observe_vitals(&observed);

        gloo_timers::future::TimeoutFuture::new(MEASURE_DELAY_MS).await;
        drop(observers);

        let mut vitals = observed.take();
        match read_timeline() {
            Ok(timeline) => {
                for sample in timeline.samples() {
                    vitals.record(sample.clone());
                }
            }
            Err(e) => log::warn!("Performance timeline unavailable: {:?}", e),
        }

        for sample in vitals.samples() {
            log::info!(
                "{}: {:.2}ms ({})",
                sample.metric.name(),
                sample.value,
                sample.rating.as_str()
            );
        }
        log::info!("Performance score: {}", vitals.performance_score());
        vitals.report(&tracker);
    });
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::analytics::testing::RecordingReporter;
    use crate::analytics::StaticPage;

    #[test]
    fn ratings_follow_thresholds() {
        assert_eq!(Metric::Lcp.rate(2500.0), Rating::Good);
        assert_eq!(Metric::Lcp.rate(2500.1), Rating::NeedsImprovement);
        assert_eq!(Metric::Lcp.rate(4000.0), Rating::NeedsImprovement);
        assert_eq!(Metric::Lcp.rate(4001.0), Rating::Poor);
        assert_eq!(Metric::Cls.rate(0.05), Rating::Good);
        assert_eq!(Metric::Cls.rate(0.3), Rating::Poor);
        assert_eq!(Metric::Ttfb.rate(900.0), Rating::NeedsImprovement);
    }

    #[test]
    fn score_is_rounded_mean() {
        let mut vitals = CoreWebVitals::default();
        assert_eq!(vitals.performance_score(), 0);

        vitals.record(MetricSample::new(Metric::Fcp, 1000.0)); // good
        vitals.record(MetricSample::new(Metric::Ttfb, 1000.0)); // needs improvement
        vitals.record(MetricSample::new(Metric::Fid, 500.0)); // poor
        assert_eq!(vitals.performance_score(), 75);

        vitals.record(MetricSample::new(Metric::Fid, 50.0));
        assert_eq!(vitals.performance_score(), 92);
    }

    #[test]
    fn first_input_delay_is_processing_minus_start() {
        assert_eq!(first_input_delay(130.0, 100.0), Some(30.0));
        assert_eq!(first_input_delay(0.0, 100.0), None);
        assert_eq!(first_input_delay(130.0, 0.0), None);
    }

    #[test]
    fn layout_shift_score_skips_input_driven_shifts() {
        let shifts = [
            LayoutShift { value: 0.05, had_recent_input: false },
            LayoutShift { value: 0.4, had_recent_input: true },
            LayoutShift { value: 0.03, had_recent_input: false },
        ];
        let score = layout_shift_score(shifts);
        assert!((score - 0.08).abs() < 1e-9);
        assert_eq!(Metric::Cls.rate(score), Rating::Good);
        assert_eq!(layout_shift_score(Vec::<LayoutShift>::new()), 0.0);
    }

    #[test]
    fn report_sends_one_event_per_metric() {
        let reporter = Rc::new(RecordingReporter::default());
        let tracker = Tracker::new(reporter.clone(), Rc::new(StaticPage::default()), "G-TEST123");
        let mut vitals = CoreWebVitals::default();
        vitals.record(MetricSample::new(Metric::Fcp, 1234.6));
        vitals.record(MetricSample::new(Metric::Ttfb, 2000.0));

        vitals.report(&tracker);

        assert_eq!(reporter.event_names(), vec!["web_vitals", "web_vitals"]);
        let last = reporter.event_params("web_vitals").unwrap();
        assert_eq!(last["event_label"], "TTFB");
        assert_eq!(last["value"], 2000);
        assert_eq!(last["custom_map"]["metric_rating"], "poor");
    }
}
