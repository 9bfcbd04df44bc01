//! Host event routing
//!
//! [`InputRouter`] is the entry point for the host adapter: it filters events
//! by source window, rate-limits motion, and drives the peripheral through the
//! motion tracker and button mapper.

use std::time::{Duration, Instant};

use cm_core::config::Config;
use cm_core::{input_debug, input_trace, input_warn};

use crate::clock::SampleClock;
use crate::geometry::{Point, Size};
use crate::host::{HostCursor, HostEvent, HostEventSource, InputTarget, Subscription, TargetId};
use crate::mapping::ButtonMapper;
use crate::motion::{MotionMode, MotionTracker};
use crate::peripheral::{set_mice_intercepted, PeripheralState};

/// Binding of the router to a host window
pub enum RouterState {
    Unbound,
    Bound(Box<dyn InputTarget>),
}

/// Translates host pointer events into peripheral state.
pub struct InputRouter {
    state: RouterState,
    clock: SampleClock,
    tracker: MotionTracker,
    mapper: ButtonMapper,
    peripheral: PeripheralState,
    cursor: Box<dyn HostCursor>,
}

impl InputRouter {
    /// Create an unbound router that warps the pointer through `cursor`.
    pub fn new(cursor: Box<dyn HostCursor>) -> Self {
        Self::with_clock(cursor, SampleClock::default())
    }

    pub fn with_clock(cursor: Box<dyn HostCursor>, clock: SampleClock) -> Self {
        Self {
            state: RouterState::Unbound,
            clock,
            tracker: MotionTracker::new(),
            mapper: ButtonMapper::new(),
            peripheral: PeripheralState::new(),
            cursor,
        }
    }

    /// Create a router from configuration, publishing the configured
    /// interception state for the next `init`.
    pub fn from_config(config: &Config, cursor: Box<dyn HostCursor>) -> Self {
        let input = &config.input;
        set_mice_intercepted(input.intercepted);
        let clock = SampleClock::new(Duration::from_millis(input.sample_interval_ms));
        input_debug!(
            interval_ms = input.sample_interval_ms,
            intercepted = input.intercepted,
            "Mouse router configured"
        );
        Self::with_clock(cursor, clock)
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn bound_target(&self) -> Option<TargetId> {
        match &self.state {
            RouterState::Bound(target) => Some(target.id()),
            RouterState::Unbound => None,
        }
    }

    pub fn peripheral(&self) -> &PeripheralState {
        &self.peripheral
    }

    pub fn peripheral_mut(&mut self) -> &mut PeripheralState {
        &mut self.peripheral
    }

    pub fn tracker(&self) -> &MotionTracker {
        &self.tracker
    }

    /// Bind to `target` and subscribe to its events.
    ///
    /// Without a target the router additionally listens to every event the
    /// host delivers. The binding itself is left as it was: an unbound router
    /// stays unbound, a bound one keeps its previous target and filter.
    pub fn bind(&mut self, source: &mut dyn HostEventSource, target: Option<Box<dyn InputTarget>>) {
        match target {
            Some(target) => {
                let id = target.id();
                source.install_filter(Subscription::Target(id));
                self.state = RouterState::Bound(target);
                input_debug!(window = id.0, "Mouse handler bound to target window");
            }
            None => {
                source.install_filter(Subscription::Global);
                input_warn!("Trying to set mouse handler to a null target window, listening to all events");
            }
        }
    }

    /// Whether the bound target currently holds the pointer captive.
    pub fn get_mouse_lock_state(&self) -> bool {
        match &self.state {
            RouterState::Bound(target) => target
                .mouse_lock()
                .is_some_and(|lock| lock.mouse_lock_state()),
            RouterState::Unbound => false,
        }
    }

    fn accepts(&self, source: Option<TargetId>) -> bool {
        match &self.state {
            RouterState::Unbound => true,
            RouterState::Bound(target) => !target.is_visible() || source == Some(target.id()),
        }
    }

    /// Handle an event delivered now. See [`InputRouter::handle_event_at`].
    pub fn handle_event(&mut self, source: Option<TargetId>, event: HostEvent) -> bool {
        self.handle_event_at(source, event, Instant::now())
    }

    /// Handle an event from `source` observed at `now`.
    ///
    /// Returns false if the event was filtered out by its source.
    pub fn handle_event_at(&mut self, source: Option<TargetId>, event: HostEvent, now: Instant) -> bool {
        if !self.accepts(source) {
            return false;
        }

        match event {
            HostEvent::ButtonDown(button) => {
                self.mapper.on_button_event(&mut self.peripheral, button, true)
            }
            HostEvent::ButtonUp(button) => {
                self.mapper.on_button_event(&mut self.peripheral, button, false)
            }
            HostEvent::Wheel { delta_y, .. } => {
                self.mapper.on_wheel_event(&mut self.peripheral, delta_y)
            }
            HostEvent::Move { pos, surface } => self.on_move(pos, surface, now),
        }
        true
    }

    fn on_move(&mut self, pos: Point, surface: Size, now: Instant) {
        if !self.clock.should_sample(now) {
            input_trace!(x = pos.x, y = pos.y, "Mouse move dropped by sample clock");
            return;
        }

        let locked = self.get_mouse_lock_state();
        let mode = match &self.state {
            RouterState::Bound(target) if locked && target.is_active() => MotionMode::Locked {
                target: &**target,
                cursor: &mut *self.cursor,
            },
            _ => MotionMode::Absolute,
        };

        let sample = self.tracker.sample(pos, surface, mode);
        self.peripheral.apply_motion(&sample);
    }
}
