//! Pointer motion tracking
//!
//! Two modes are supported. Unlocked, the host position is passed through
//! clamped to the surface. Locked, the host cursor is pinned to the center of
//! the target window after every sample and the offset from that center is
//! accumulated into a persistent cursor estimate, so motion at the screen
//! edges is never lost.

use cm_core::input_trace;

use crate::geometry::{Point, Size};
use crate::host::{HostCursor, InputTarget};

/// Result of one committed motion sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionSample {
    pub x: i32,
    pub y: i32,
    pub surface_width: u32,
    pub surface_height: u32,
    pub relative_mode: bool,
    pub delta_x: i32,
    pub delta_y: i32,
}

/// How the next sample should be computed.
pub enum MotionMode<'a> {
    Absolute,
    /// Relative mode: recenter the host cursor inside `target`.
    Locked {
        target: &'a dyn InputTarget,
        cursor: &'a mut dyn HostCursor,
    },
}

/// Accumulated pointer position while locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorEstimate {
    pub x: i32,
    pub y: i32,
}

impl From<Point> for CursorEstimate {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// Computes motion samples and owns the relative-mode cursor estimate.
///
/// The estimate is created on the first locked sample and survives switches
/// back to absolute mode; a later lock resumes from where it left off.
#[derive(Debug, Default)]
pub struct MotionTracker {
    estimate: Option<CursorEstimate>,
}

impl MotionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn estimate(&self) -> Option<CursorEstimate> {
        self.estimate
    }

    /// Compute the sample for a host position `raw`, local to a surface of
    /// `surface` size.
    pub fn sample(&mut self, raw: Point, surface: Size, mode: MotionMode<'_>) -> MotionSample {
        match mode {
            MotionMode::Absolute => {
                let pos = surface.clamp(raw);
                MotionSample {
                    x: pos.x,
                    y: pos.y,
                    surface_width: surface.width,
                    surface_height: surface.height,
                    relative_mode: false,
                    delta_x: 0,
                    delta_y: 0,
                }
            }
            MotionMode::Locked { target, cursor } => {
                let center_global = target.geometry().top_left() + surface.center();
                cursor.set_cursor_position(target.screen(), center_global);
                let center = target.map_from_global(center_global);

                let delta = raw - center;
                let estimate = self.estimate.get_or_insert_with(|| center.into());
                let pos = surface.clamp(Point::new(estimate.x, estimate.y) + delta);
                *estimate = pos.into();

                input_trace!(
                    dx = delta.x,
                    dy = delta.y,
                    x = pos.x,
                    y = pos.y,
                    "Relative mouse sample"
                );

                MotionSample {
                    x: pos.x,
                    y: pos.y,
                    surface_width: surface.width,
                    surface_height: surface.height,
                    relative_mode: true,
                    delta_x: delta.x,
                    delta_y: delta.y,
                }
            }
        }
    }
}
