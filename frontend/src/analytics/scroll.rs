//! Scroll-depth and engagement-time tracking.

use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};

use super::Tracker;

/// Rounded scroll position as a percentage of the scrollable height.
/// `None` when the document cannot scroll.
pub fn scroll_percentage(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Option<f64> {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return None;
    }
    let percentage = (scroll_top / scrollable * 100.0).round();
    percentage.is_finite().then_some(percentage)
}

/// High-water mark of how far the visitor has scrolled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollDepthTracker {
    max_percentage: u32,
}

impl ScrollDepthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_percentage(&self) -> u32 {
        self.max_percentage
    }

    /// Returns the new maximum when this position beats every earlier one.
    pub fn observe(&mut self, scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Option<u32> {
        let percentage = scroll_percentage(scroll_top, scroll_height, viewport_height)?;
        if percentage <= f64::from(self.max_percentage) {
            return None;
        }
        self.max_percentage = percentage as u32;
        Some(self.max_percentage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementClock {
    started_at: DateTime<Utc>,
}

impl EngagementClock {
    pub fn start() -> Self {
        Self::started_at(Utc::now())
    }

    pub fn started_at(started_at: DateTime<Utc>) -> Self {
        Self { started_at }
    }

    /// Whole seconds since start, rounded to nearest.
    pub fn elapsed_seconds_at(&self, now: DateTime<Utc>) -> u64 {
        let millis = (now - self.started_at).num_milliseconds().max(0);
        (millis as f64 / 1000.0).round() as u64
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds_at(Utc::now())
    }
}

/// Keeps the `scroll` and `beforeunload` listeners alive.
/// Dropping it (or calling [`detach`](Self::detach)) removes both.
pub struct ScrollTrackingHandle {
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
    on_unload: Closure<dyn FnMut()>,
}

impl ScrollTrackingHandle {
    /// Consumes the handle; its `Drop` removes both listeners.
    pub fn detach(self) {}
}

impl Drop for ScrollTrackingHandle {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        let _ = self.window.remove_event_listener_with_callback(
            "beforeunload",
            self.on_unload.as_ref().unchecked_ref(),
        );
    }
}

/// Reports new scroll-depth maxima while attached, and the engagement time
/// once when the page unloads.
pub fn attach_scroll_tracking(tracker: Tracker) -> Result<ScrollTrackingHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let on_scroll = {
        let window = window.clone();
        let tracker = tracker.clone();
        let mut depth = ScrollDepthTracker::new();
        Closure::wrap(Box::new(move || {
            let Some(root) = window.document().and_then(|d| d.document_element()) else {
                return;
            };
            let scroll_top = window.scroll_y().unwrap_or_else(|_| f64::from(root.scroll_top()));
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            if let Some(percentage) = depth.observe(scroll_top, f64::from(root.scroll_height()), viewport) {
                tracker.track_scroll_depth(percentage);
            }
        }) as Box<dyn FnMut()>)
    };

    let on_unload = {
        let clock = EngagementClock::start();
        Closure::wrap(Box::new(move || {
            tracker.track_engagement_time(clock.elapsed_seconds());
        }) as Box<dyn FnMut()>)
    };

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &options,
    )?;
    window.add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref())?;

    Ok(ScrollTrackingHandle {
        window,
        on_scroll,
        on_unload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn reports_only_strictly_increasing_maxima() {
        let mut depth = ScrollDepthTracker::new();
        // 2000px document, 1000px viewport -> 1000px scrollable
        assert_eq!(depth.observe(250.0, 2000.0, 1000.0), Some(25));
        assert_eq!(depth.observe(250.0, 2000.0, 1000.0), None);
        assert_eq!(depth.observe(100.0, 2000.0, 1000.0), None);
        assert_eq!(depth.observe(504.0, 2000.0, 1000.0), Some(50));
        assert_eq!(depth.observe(1000.0, 2000.0, 1000.0), Some(100));
        assert_eq!(depth.observe(0.0, 2000.0, 1000.0), None);
        assert_eq!(depth.max_percentage(), 100);
    }

    #[test]
    fn top_of_page_and_short_documents_report_nothing() {
        let mut depth = ScrollDepthTracker::new();
        assert_eq!(depth.observe(0.0, 2000.0, 1000.0), None);
        assert_eq!(depth.observe(0.0, 800.0, 1000.0), None);
        assert_eq!(depth.observe(10.0, 1000.0, 1000.0), None);
        assert_eq!(depth.max_percentage(), 0);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(scroll_percentage(746.0, 2000.0, 1000.0), Some(75.0));
        assert_eq!(scroll_percentage(744.0, 2000.0, 1000.0), Some(74.0));
    }

    #[test]
    fn engagement_clock_rounds_elapsed_seconds() {
        let start = Utc::now();
        let clock = EngagementClock::started_at(start);
        assert_eq!(clock.elapsed_seconds_at(start), 0);
        assert_eq!(clock.elapsed_seconds_at(start + Duration::milliseconds(1499)), 1);
        assert_eq!(clock.elapsed_seconds_at(start + Duration::milliseconds(1500)), 2);
        assert_eq!(clock.elapsed_seconds_at(start - Duration::seconds(5)), 0);
    }
}
