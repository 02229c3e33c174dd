//! Deferred rendering of below-the-fold sections.

mod viewport;

pub use viewport::ViewportObserver;

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the container that must be visible.
    pub threshold: f64,
    /// Margin around the viewport, CSS syntax.
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "50px".to_string(),
        }
    }
}

/// Flips to revealed once and stays there.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revealed() -> Self {
        Self { revealed: true }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// True only for the observation that set the latch.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// A visibility subscription the gate can cancel.
pub trait VisibilityObserver {
    fn disconnect(&mut self);
}

/// Latch plus the observer feeding it. The observer is disconnected as soon
/// as the latch sets, or when the gate is dropped before that.
pub struct RevealGate<O: VisibilityObserver> {
    latch: RevealLatch,
    observer: Option<O>,
    connected: bool,
}

impl<O: VisibilityObserver> RevealGate<O> {
    pub fn new(observer: O) -> Self {
        Self {
            latch: RevealLatch::new(),
            observer: Some(observer),
            connected: true,
        }
    }

    /// For platforms without a visibility primitive: content shows right away.
    pub fn without_observer() -> Self {
        Self {
            latch: RevealLatch::revealed(),
            observer: None,
            connected: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.latch.is_revealed()
    }

    pub fn is_observing(&self) -> bool {
        self.connected
    }

    /// Feeds one observation; returns true when it revealed the content.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        let revealed = self.latch.observe(is_intersecting);
        if revealed {
            self.disconnect();
        }
        revealed
    }

    // The observer itself stays owned until drop: disconnect can run from
    // inside the observer's own callback.
    fn disconnect(&mut self) {
        if !self.connected {
            return;
        }
        self.connected = false;
        if let Some(observer) = self.observer.as_mut() {
            observer.disconnect();
        }
    }
}

impl<O: VisibilityObserver> Drop for RevealGate<O> {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct CountingObserver {
        disconnects: Rc<Cell<u32>>,
    }

    impl VisibilityObserver for CountingObserver {
        fn disconnect(&mut self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    #[test]
    fn defaults_match_a_small_pre_trigger() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "50px");
    }

    #[test]
    fn latch_never_reverts() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
        assert!(latch.observe(true));
        assert!(latch.is_revealed());
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn gate_disconnects_once_on_reveal() {
        let observer = CountingObserver::default();
        let disconnects = observer.disconnects.clone();
        let mut gate = RevealGate::new(observer);

        assert!(!gate.observe(false));
        assert!(gate.is_observing());
        assert!(gate.observe(true));
        assert!(!gate.is_observing());
        assert!(!gate.observe(false));
        assert!(gate.is_revealed());

        drop(gate);
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn teardown_before_reveal_disconnects() {
        let observer = CountingObserver::default();
        let disconnects = observer.disconnects.clone();
        let gate = RevealGate::new(observer);
        assert!(!gate.is_revealed());

        drop(gate);
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn gate_without_observer_starts_revealed() {
        let gate: RevealGate<CountingObserver> = RevealGate::without_observer();
        assert!(gate.is_revealed());
        assert!(!gate.is_observing());
    }
}
