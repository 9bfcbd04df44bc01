//! Virtual mouse peripheral for cellmouse
//!
//! This crate turns host pointer events into the state of an emulated
//! multi-port mouse controller:
//! - Slot table with connection status, mode and vendor identity
//! - Absolute and locked (recentering) motion tracking
//! - Button and wheel mapping
//! - Rate-limited motion sampling
//!
//! A host adapter feeds [`HostEvent`]s into an [`InputRouter`]; the guest-facing
//! driver layer polls the resulting [`PeripheralState`].

pub mod clock;
pub mod geometry;
pub mod host;
pub mod mapping;
pub mod motion;
pub mod mouse;
pub mod peripheral;
pub mod router;

pub use clock::SampleClock;
pub use geometry::{Point, Rect, Size};
pub use host::{
    HostButton, HostCursor, HostEvent, HostEventSource, InputTarget, MouseLock, ScreenId,
    Subscription, TargetId,
};
pub use mapping::ButtonMapper;
pub use motion::{CursorEstimate, MotionMode, MotionSample, MotionTracker};
pub use mouse::{MouseButtons, MouseData, MouseState};
pub use peripheral::{
    mice_intercepted, set_mice_intercepted, Ownership, PeripheralInfo, PeripheralState, Slot,
    SlotMode, SlotStatus,
};
pub use router::{InputRouter, RouterState};
