//! Host-side collaborators
//!
//! The windowing layer is outside this crate. An adapter translates its
//! native events into [`HostEvent`] and exposes its window through
//! [`InputTarget`].

use crate::geometry::{Point, Rect, Size};

/// Identity of a host window that can deliver events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

/// Identity of the host screen a window lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenId(pub u32);

/// Host mouse buttons as reported by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostButton {
    Left,
    Right,
    Middle,
    Extra1,
    Extra2,
    Extra3,
    Extra4,
    Extra5,
    /// Any button the windowing layer reports beyond the recognized set
    Other(u32),
}

/// Classified host pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    ButtonDown(HostButton),
    ButtonUp(HostButton),
    /// Pointer position local to the source window, with that window's size
    Move { pos: Point, surface: Size },
    /// Angle delta of the wheel; positive `y` scrolls away from the user
    Wheel { delta_x: i32, delta_y: i32 },
}

/// Which event stream the router listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscription {
    Target(TargetId),
    Global,
}

/// Registration with the host's event delivery
pub trait HostEventSource {
    fn install_filter(&mut self, subscription: Subscription);
}

/// Warps the host cursor
pub trait HostCursor {
    fn set_cursor_position(&mut self, screen: ScreenId, point: Point);
}

/// Optional capability of a target that can hold the pointer captive
pub trait MouseLock {
    fn mouse_lock_state(&self) -> bool;
}

/// A host window the router can bind to
pub trait InputTarget {
    fn id(&self) -> TargetId;

    fn is_visible(&self) -> bool;

    /// Whether the window currently has focus.
    fn is_active(&self) -> bool;

    /// Client area in host-global coordinates.
    fn geometry(&self) -> Rect;

    fn screen(&self) -> ScreenId;

    /// Convert a host-global point to window-local coordinates.
    fn map_from_global(&self, point: Point) -> Point {
        point - self.geometry().top_left()
    }

    /// Lock-state capability, if this kind of window has one.
    fn mouse_lock(&self) -> Option<&dyn MouseLock> {
        None
    }
}
