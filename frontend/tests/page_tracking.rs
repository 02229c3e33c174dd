//! Page-level analytics and lazy reveal behaviour.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use onlybulls_landing::analytics::scroll::ScrollDepthTracker;
use onlybulls_landing::analytics::{AnalyticsEvent, ConversionEvent, ConversionType, Tracker};
use onlybulls_landing::reveal::{RevealGate, VisibilityObserver};
use onlybulls_landing::vitals::{CoreWebVitals, Metric, MetricSample};

use common::{recording_tracker, MEASUREMENT_ID};

fn scroll_through(tracker: &Tracker, positions: &[f64]) {
    let mut depth = ScrollDepthTracker::new();
    for &top in positions {
        if let Some(percentage) = depth.observe(top, 2000.0, 1000.0) {
            tracker.track_scroll_depth(percentage);
        }
    }
}

#[test]
fn scrolling_reports_only_milestones() {
    let (recorder, tracker) = recording_tracker();

    scroll_through(&tracker, &[100.0, 250.0, 500.0, 420.0, 750.0, 900.0, 1000.0]);

    let labels: Vec<_> = recorder
        .events("scroll_depth")
        .iter()
        .map(|params| params["event_label"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(labels, vec!["25%", "50%", "75%", "90%", "100%"]);
}

#[test]
fn custom_event_properties_are_spread_into_params() {
    let (recorder, tracker) = recording_tracker();
    let event = AnalyticsEvent::named("video_play")
        .with_property("video_id", "demo-1")
        .with_property("event_category", "media");

    tracker.track_event(&event);

    let params = &recorder.events("video_play")[0];
    assert_eq!(params["video_id"], "demo-1");
    assert_eq!(params["event_category"], "media");
    assert_eq!(params["page_title"], "Only Bulls");
    assert!(params["timestamp"].as_str().is_some_and(|ts| ts.ends_with('Z')));
}

#[test]
fn unnamed_event_falls_back_to_custom_event() {
    let (recorder, tracker) = recording_tracker();

    tracker.track_event(&AnalyticsEvent::default());

    assert_eq!(recorder.event_names(), vec!["custom_event"]);
    assert_eq!(recorder.events("custom_event")[0]["event_category"], "custom");
}

#[test]
fn conversion_defaults_value_and_targets_measurement_id() {
    let (recorder, tracker) = recording_tracker();

    tracker.track_conversion(&ConversionEvent::new(ConversionType::DemoRequest));

    let params = &recorder.events("conversion")[0];
    assert_eq!(params["send_to"], MEASUREMENT_ID);
    assert_eq!(params["value"], 1.0);
    assert_eq!(params["event_label"], "demo_request");
}

#[test]
fn vitals_report_one_event_per_sample() {
    let (recorder, tracker) = recording_tracker();
    let mut vitals = CoreWebVitals::default();
    vitals.record(MetricSample::new(Metric::Ttfb, 420.0));
    vitals.record(MetricSample::new(Metric::Fcp, 2100.0));

    vitals.report(&tracker);

    let events = recorder.events("web_vitals");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["event_label"], "FCP");
    assert_eq!(events[0]["custom_map"]["metric_rating"], "needs-improvement");
    assert_eq!(events[1]["event_label"], "TTFB");
    assert_eq!(events[1]["custom_map"]["metric_rating"], "good");
}

struct FlagObserver(Rc<Cell<u32>>);

impl VisibilityObserver for FlagObserver {
    fn disconnect(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn reveal_gate_stops_observing_after_first_intersection() {
    let disconnects = Rc::new(Cell::new(0));
    let mut gate = RevealGate::new(FlagObserver(disconnects.clone()));

    assert!(!gate.observe(false));
    assert!(gate.observe(true));
    assert!(!gate.observe(false));
    assert!(gate.is_revealed());
    assert!(!gate.is_observing());

    drop(gate);
    assert_eq!(disconnects.get(), 1);
}
