//! Scroll-reactive header controller
//!
//! Tracks the last observed scroll offset and derives [`ScrollState`] from
//! threshold comparisons, pushing presentation hints to the host as it goes.
//! All calls are expected on the thread that owns the controller; the only
//! deferred work is the sticky transition, fired from [`ScrollHeaderController::tick`].

use std::time::Duration;

use tokio::time::Instant;

use crate::config::{HeaderBehavior, HeaderConfig};
use crate::host::{HeaderHost, SubscriptionId};
use crate::presentation::{HeaderAttributes, PresentationHint};
use crate::state::{ScrollDirection, ScrollState};
use crate::transition::TransitionTimer;

/// Listener for `(is_sticky, is_hidden)` changes
pub type ChangeCallback = Box<dyn FnMut(bool, bool)>;

pub struct ScrollHeaderController<H: HeaderHost> {
    host: H,
    config: HeaderConfig,
    state: ScrollState,
    last_offset: f64,
    /// Header extent sampled at initialize
    extent: f64,
    hide_threshold: f64,
    subscription: Option<SubscriptionId>,
    torn_down: bool,
    timer: TransitionTimer,
    last_reported: (bool, bool),
    on_change: Option<ChangeCallback>,
}

impl<H: HeaderHost> ScrollHeaderController<H> {
    /// Create a controller that has not been initialized yet
    pub fn new(host: H) -> Self {
        Self {
            host,
            config: HeaderConfig::default(),
            state: ScrollState::default(),
            last_offset: 0.0,
            extent: 0.0,
            hide_threshold: 0.0,
            subscription: None,
            torn_down: false,
            timer: TransitionTimer::new(),
            last_reported: (false, false),
            on_change: None,
        }
    }

    /// Create and initialize in one step
    pub fn with_config(host: H, config: HeaderConfig) -> Self {
        let mut controller = Self::new(host);
        controller.initialize(config);
        controller
    }

    /// Register the change listener, replacing any previous one
    pub fn on_scroll_state_change<F>(&mut self, callback: F)
    where
        F: FnMut(bool, bool) + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    /// Reset all transient state and apply `config`
    ///
    /// Supersedes any earlier initialize: the previous subscription is dropped
    /// and a pending transition from it will never fire.
    pub fn initialize(&mut self, config: HeaderConfig) {
        self.config = config;
        self.timer.invalidate();
        self.detach();
        self.torn_down = false;

        let Some(extent) = self.host.extent() else {
            tracing::debug!("Header not mounted, skipping initialize");
            return;
        };

        self.clear_presentation();
        self.state = ScrollState::default();
        self.last_offset = self.host.scroll_offset();
        self.extent = extent;
        self.hide_threshold = self.config.hide_threshold.unwrap_or(extent);

        if self.config.show_threshold >= self.hide_threshold {
            tracing::warn!(
                show_threshold = self.config.show_threshold,
                hide_threshold = self.hide_threshold,
                "Show threshold is not below hide threshold, sticky state may never clear"
            );
        }

        match self.config.behavior {
            HeaderBehavior::AlwaysFixed => {
                self.host.apply_hint(PresentationHint::AlwaysFixed);
                self.host.reserve_top(extent);
                self.state.is_sticky = true;
            }
            HeaderBehavior::AlwaysTop => {
                self.host.apply_hint(PresentationHint::AlwaysTop);
                self.host.reserve_top(0.0);
            }
            HeaderBehavior::HideOnScroll => {
                self.subscription = Some(self.host.subscribe());
            }
        }

        tracing::debug!(
            behavior = %self.config.behavior,
            extent,
            hide_threshold = self.hide_threshold,
            show_threshold = self.config.show_threshold,
            offset = self.last_offset,
            "Header initialized"
        );

        self.notify_if_changed();
    }

    /// Process one scroll notification
    pub fn on_scroll_offset_changed(&mut self, new_offset: f64) {
        self.on_scroll_offset_changed_at(new_offset, Instant::now());
    }

    /// Process one scroll notification observed at `now`
    pub fn on_scroll_offset_changed_at(&mut self, new_offset: f64, now: Instant) {
        if self.subscription.is_none() {
            return;
        }
        if !new_offset.is_finite() {
            tracing::debug!(offset = new_offset, "Ignoring non-finite scroll offset");
            return;
        }

        let direction = ScrollDirection::from_delta(new_offset - self.last_offset);
        tracing::trace!(offset = new_offset, last = self.last_offset, ?direction, "Scroll tick");

        match direction {
            ScrollDirection::Forward if new_offset > self.hide_threshold => {
                self.host.set_translate_y(-self.extent);
                if !self.host.has_hint(PresentationHint::Hidden) {
                    self.host.apply_hint(PresentationHint::Hidden);
                }
                self.state.is_hidden = true;
            }
            ScrollDirection::Backward => {
                self.host.set_translate_y(0.0);
                if self.host.has_hint(PresentationHint::Hidden) {
                    self.host.remove_hint(PresentationHint::Hidden);
                }
                self.state.is_hidden = false;
            }
            _ => {}
        }

        if new_offset > self.hide_threshold {
            if !self.state.is_sticky {
                self.enter_sticky(now);
            }
        } else if new_offset < self.config.show_threshold {
            if self.state.is_sticky {
                self.leave_sticky();
            }
            self.host.reserve_top(0.0);
        }

        self.last_offset = new_offset;
        self.notify_if_changed();
    }

    /// Fire the deferred sticky transition if it is due
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.torn_down || !self.timer.take_due(now) {
            return;
        }
        // Leaving sticky cancels the timer, so this only guards the invariant
        if !self.state.is_sticky {
            return;
        }

        self.host.apply_hint(PresentationHint::StickyTransition);
        self.state.is_transitioning = true;
        tracing::debug!("Sticky transition settled");
    }

    /// Current state snapshot
    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Force the all-false state and strip every hint, whatever the behavior
    pub fn reset(&mut self) {
        if self.torn_down {
            return;
        }
        if self.host.extent().is_none() {
            tracing::debug!("Header not mounted, skipping reset");
            return;
        }

        self.timer.invalidate();
        self.clear_presentation();
        self.state = ScrollState::default();
        self.notify_if_changed();
    }

    /// Detach from the scroll source; no further state changes until the next initialize
    pub fn teardown(&mut self) {
        self.timer.invalidate();
        self.detach();
        self.torn_down = true;
        tracing::debug!("Header torn down");
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Resolved hide threshold for the current mount
    pub fn hide_threshold(&self) -> f64 {
        self.hide_threshold
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn has_pending_transition(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn attributes(&self) -> HeaderAttributes {
        HeaderAttributes::from_config(&self.config)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn enter_sticky(&mut self, now: Instant) {
        self.host.remove_hint(PresentationHint::StickyTransition);
        self.host.apply_hint(PresentationHint::Sticky);
        self.state.is_sticky = true;
        self.host.reserve_top(self.extent);

        if self.config.transition_duration_ms > 0 {
            self.timer
                .schedule(Duration::from_millis(self.config.transition_duration_ms), now);
        }
        tracing::debug!(extent = self.extent, "Header became sticky");
    }

    fn leave_sticky(&mut self) {
        self.timer.cancel();
        self.host.remove_hint(PresentationHint::Sticky);
        self.host.remove_hint(PresentationHint::StickyTransition);
        self.state.is_sticky = false;
        self.state.is_transitioning = false;
        tracing::debug!("Header returned to normal flow");
    }

    fn detach(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.host.unsubscribe(id);
        }
    }

    fn clear_presentation(&mut self) {
        self.host.set_translate_y(0.0);
        for hint in PresentationHint::ALL {
            self.host.remove_hint(hint);
        }
        self.host.reserve_top(0.0);
    }

    fn notify_if_changed(&mut self) {
        let current = self.state.visibility();
        if current == self.last_reported {
            return;
        }
        self.last_reported = current;
        if let Some(callback) = self.on_change.as_mut() {
            callback(current.0, current.1);
        }
    }
}
