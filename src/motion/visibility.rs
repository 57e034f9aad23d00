#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisibilityState {
    #[default]
    NotTriggered,
    Triggered,
}

/// What a section shows when the browser cannot report visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Render as if the section had already scrolled into view.
    #[default]
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction of the target, in `[0, 1]`, that counts as "in view".
    pub threshold: f64,
    pub trigger_once: bool,
    pub fallback: FallbackPolicy,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            trigger_once: true,
            fallback: FallbackPolicy::Visible,
        }
    }
}

impl ObserverOptions {
    pub fn with_threshold(self, threshold: f64) -> Self {
        Self { threshold, ..self }
    }

    /// Follow every observation instead of latching the first one.
    pub fn repeating(self) -> Self {
        Self {
            trigger_once: false,
            ..self
        }
    }

    pub fn with_fallback(self, fallback: FallbackPolicy) -> Self {
        Self { fallback, ..self }
    }
}

/// Turns raw intersection ratios into a visible flag.
///
/// [`VisibilityState`] only ever moves from `NotTriggered` to `Triggered`. With
/// `trigger_once` the visible flag latches together with it; otherwise it tracks
/// the latest observation.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityLatch {
    options: ObserverOptions,
    state: VisibilityState,
    visible: bool,
    unsupported: bool,
}

impl VisibilityLatch {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            state: VisibilityState::NotTriggered,
            visible: false,
            unsupported: false,
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Feeds one observed visible fraction. Returns whether the visible flag changed.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.unsupported || self.should_disconnect() {
            return false;
        }
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        let in_view = ratio >= self.options.threshold;
        if in_view {
            self.state = VisibilityState::Triggered;
        }
        let visible = if self.options.trigger_once {
            self.state == VisibilityState::Triggered
        } else {
            in_view
        };
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    /// Applies the fallback policy once observation is known to be impossible.
    pub fn mark_unsupported(&mut self) -> bool {
        if self.unsupported {
            return false;
        }
        self.unsupported = true;
        match self.options.fallback {
            FallbackPolicy::Visible => {
                let changed = !self.visible;
                self.state = VisibilityState::Triggered;
                self.visible = true;
                changed
            }
            FallbackPolicy::Hidden => false,
        }
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_unsupported(&self) -> bool {
        self.unsupported
    }

    /// A trigger-once latch that has fired needs no further observations.
    pub fn should_disconnect(&self) -> bool {
        self.options.trigger_once && self.state == VisibilityState::Triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers_at_threshold() {
        let mut latch = VisibilityLatch::new(ObserverOptions::default());
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(0.09));
        assert_eq!(latch.state(), VisibilityState::NotTriggered);
        assert!(latch.observe(0.1));
        assert!(latch.is_visible());
        assert_eq!(latch.state(), VisibilityState::Triggered);
        assert!(latch.should_disconnect());
    }

    #[test]
    fn test_latch_is_idempotent() {
        let mut latch = VisibilityLatch::new(ObserverOptions::default());
        assert!(latch.observe(0.5));
        let changes = [0.0, 1.0, 0.0, 0.3, 0.0]
            .into_iter()
            .filter(|r| latch.observe(*r))
            .count();
        assert_eq!(changes, 0);
        assert!(latch.is_visible());
        assert_eq!(latch.state(), VisibilityState::Triggered);
    }

    #[test]
    fn test_repeating_follows_observations() {
        let mut latch = VisibilityLatch::new(ObserverOptions::default().repeating());
        assert!(latch.observe(0.4));
        assert!(latch.observe(0.0));
        assert!(!latch.is_visible());
        // the state itself never reverts
        assert_eq!(latch.state(), VisibilityState::Triggered);
        assert!(!latch.should_disconnect());
        assert!(latch.observe(0.2));
    }

    #[test]
    fn test_bad_ratios() {
        let mut latch = VisibilityLatch::new(ObserverOptions::default().with_threshold(0.5));
        assert!(!latch.observe(f64::NAN));
        assert!(!latch.observe(-2.0));
        assert!(latch.observe(4.0));
    }

    #[test]
    fn test_full_threshold() {
        let mut latch = VisibilityLatch::new(ObserverOptions::default().with_threshold(1.0));
        assert!(!latch.observe(0.99));
        assert!(latch.observe(1.0));
    }

    #[test]
    fn test_fallback_visible() {
        let mut latch = VisibilityLatch::new(ObserverOptions::default());
        assert!(latch.mark_unsupported());
        assert!(latch.is_visible());
        assert!(latch.is_unsupported());
        assert!(!latch.mark_unsupported());
    }

    #[test]
    fn test_fallback_hidden_ignores_everything() {
        let mut latch = VisibilityLatch::new(
            ObserverOptions::default().with_fallback(FallbackPolicy::Hidden),
        );
        assert!(!latch.mark_unsupported());
        assert!(!latch.observe(1.0));
        assert!(!latch.is_visible());
        assert_eq!(latch.state(), VisibilityState::NotTriggered);
    }
}
