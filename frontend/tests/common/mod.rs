use std::cell::RefCell;
use std::rc::Rc;

use onlybulls_landing::analytics::{GtagCall, Reporter, StaticPage, Tracker};
use serde_json::{Map, Value};

pub const MEASUREMENT_ID: &str = "G-TEST123";

/// Keeps every gtag call so tests can inspect what left the page.
#[derive(Default)]
pub struct Recorder {
    calls: RefCell<Vec<GtagCall>>,
}

impl Reporter for Recorder {
    fn dispatch(&self, call: GtagCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Recorder {
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

    pub fn events(&self, wanted: &str) -> Vec<Map<String, Value>> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GtagCall::Event { name, params } if name == wanted => Some(params.clone()),
                _ => None,
            })
            .collect()
    }
}

pub fn recording_tracker() -> (Rc<Recorder>, Tracker) {
    let recorder = Rc::new(Recorder::default());
    let tracker = Tracker::new(
        recorder.clone(),
        Rc::new(StaticPage::new("Only Bulls", "https://onlybulls.test/")),
        MEASUREMENT_ID,
    );
    (recorder, tracker)
}
