//! Conversion and engagement tracking for Google Analytics 4.
//!
//! Call sites talk to a [`Tracker`]; the tracker talks to a [`Reporter`].
//! Until [`init`] installs the gtag-backed tracker, [`tracker`] hands out a
//! disabled one, so tracking calls made before (or without) analytics are
//! silently dropped.

mod event;
pub(crate) mod reporter;
pub mod scroll;
mod tracker;

use std::cell::RefCell;
use std::rc::Rc;

pub use event::{AnalyticsEvent, ConversionEvent, ConversionType};
pub use reporter::{GtagCall, GtagReporter, NoopReporter, Reporter};
pub use tracker::{BrowserPage, PageContext, StaticPage, Tracker, SCROLL_MILESTONES};

use crate::config;

thread_local! {
    static TRACKER: RefCell<Tracker> = RefCell::new(Tracker::disabled());
}

/// The tracker currently installed for this page.
pub fn tracker() -> Tracker {
    TRACKER.with(|current| current.borrow().clone())
}

/// Replaces the page-wide tracker. Last install wins.
pub fn install(tracker: Tracker) {
    TRACKER.with(|current| *current.borrow_mut() = tracker);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub measurement_id: String,
}

impl AnalyticsConfig {
    pub fn new(measurement_id: impl Into<String>) -> Self {
        Self {
            measurement_id: measurement_id.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::ga_measurement_id())
    }

    pub fn is_enabled(&self) -> bool {
        !self.measurement_id.trim().is_empty()
    }
}

/// Loads gtag.js, configures it and installs the gtag-backed tracker.
///
/// Without a measurement id nothing happens and tracking stays disabled.
/// Calling this again re-sends the same configuration.
pub fn init(analytics: &AnalyticsConfig) {
    if !analytics.is_enabled() {
        log::info!("Analytics disabled: no measurement id configured");
        return;
    }

    if let Err(e) = reporter::bootstrap(&analytics.measurement_id) {
        log::warn!("Could not bootstrap gtag: {:?}", e);
        return;
    }

    let tracker = Tracker::new(
        Rc::new(GtagReporter),
        Rc::new(BrowserPage),
        analytics.measurement_id.as_str(),
    );
    tracker.initialize();
    install(tracker);
    log::info!("Analytics initialized");
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use serde_json::{Map, Value};

    use super::{GtagCall, Reporter};

    #[derive(Debug, Default)]
    pub struct RecordingReporter {
        pub calls: RefCell<Vec<GtagCall>>,
    }

    impl RecordingReporter {
        pub fn event_names(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|call| match call {
                    GtagCall::Event { name, .. } => Some(name.clone()),
                    _ => None,
                })
                .collect()
        }

        /// Params of the last event with this name.
        pub fn event_params(&self, wanted: &str) -> Option<Map<String, Value>> {
            self.calls.borrow().iter().rev().find_map(|call| match call {
                GtagCall::Event { name, params } if name == wanted => Some(params.clone()),
                _ => None,
            })
        }

        /// Effective configuration per measurement id.
        pub fn configs(&self) -> BTreeMap<String, Map<String, Value>> {
            let mut configs = BTreeMap::new();
            for call in self.calls.borrow().iter() {
                if let GtagCall::Config { target, params } = call {
                    configs.insert(target.clone(), params.clone());
                }
            }
            configs
        }
    }

    impl Reporter for RecordingReporter {
        fn dispatch(&self, call: GtagCall) {
            self.calls.borrow_mut().push(call);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_tracker_is_disabled_until_installed() {
        assert_eq!(tracker().measurement_id(), "");

        install(Tracker::new(
            Rc::new(NoopReporter),
            Rc::new(StaticPage::default()),
            "G-INSTALLED",
        ));
        assert_eq!(tracker().measurement_id(), "G-INSTALLED");

        install(Tracker::disabled());
        assert_eq!(tracker().measurement_id(), "");
    }

    #[test]
    fn blank_measurement_id_disables_analytics() {
        assert!(!AnalyticsConfig::new("").is_enabled());
        assert!(!AnalyticsConfig::new("   ").is_enabled());
        assert!(AnalyticsConfig::new("G-ABC123").is_enabled());
    }
}
