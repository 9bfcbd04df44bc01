//! Mouse handling (cellMouse)
//!
//! Per-port runtime state: pressed buttons, last position and the queue of
//! data reports waiting to be polled by the guest.

use std::collections::VecDeque;

use bitflags::bitflags;

use crate::motion::MotionSample;

/// Reports kept per port before the oldest is discarded.
pub const MAX_DATA_LIST: usize = 8;

bitflags! {
    /// Mouse button state flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        const BUTTON_1 = 0x01;
        const BUTTON_2 = 0x02;
        const BUTTON_3 = 0x04;
        const BUTTON_4 = 0x08;
        const BUTTON_5 = 0x10;
        const BUTTON_6 = 0x20;
        const BUTTON_7 = 0x40;
        const BUTTON_8 = 0x80;
    }
}

/// One report as delivered to the guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseData {
    /// Set for every queued report
    pub update: bool,
    pub buttons: MouseButtons,
    pub x_axis: i8,
    pub y_axis: i8,
    /// Signed wheel magnitude as delivered by the host
    pub wheel: i32,
}

fn saturate_axis(delta: i32) -> i8 {
    delta.clamp(-127, 127) as i8
}

/// Captures mouse position, buttons and pending reports for one port.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MouseState {
    pub buttons: MouseButtons,
    pub x_pos: i32,
    pub y_pos: i32,
    pub x_max: u32,
    pub y_max: u32,
    data: VecDeque<MouseData>,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_button_pressed(&self, button: MouseButtons) -> bool {
        self.buttons.contains(button)
    }

    /// Apply a button edge and queue a report carrying the new bitmap.
    pub fn set_button(&mut self, button: MouseButtons, pressed: bool) {
        self.buttons.set(button, pressed);
        self.push(MouseData {
            update: true,
            buttons: self.buttons,
            ..MouseData::default()
        });
    }

    /// Queue a wheel report.
    pub fn scroll(&mut self, delta: i32) {
        self.push(MouseData {
            update: true,
            buttons: self.buttons,
            wheel: delta,
            ..MouseData::default()
        });
    }

    /// Record a committed motion sample and queue its movement report.
    ///
    /// Relative samples report the tracker's delta; absolute samples report
    /// the distance from the previously recorded position.
    pub fn apply_motion(&mut self, sample: &MotionSample) {
        let (dx, dy) = if sample.relative_mode {
            (sample.delta_x, sample.delta_y)
        } else {
            (
                sample.x.saturating_sub(self.x_pos),
                sample.y.saturating_sub(self.y_pos),
            )
        };

        self.x_pos = sample.x;
        self.y_pos = sample.y;
        self.x_max = sample.surface_width;
        self.y_max = sample.surface_height;

        self.push(MouseData {
            update: true,
            buttons: self.buttons,
            x_axis: saturate_axis(dx),
            y_axis: saturate_axis(dy),
            wheel: 0,
        });
    }

    fn push(&mut self, data: MouseData) {
        if self.data.len() == MAX_DATA_LIST {
            self.data.pop_front();
        }
        self.data.push_back(data);
    }

    /// Oldest pending report, if any.
    pub fn pop_data(&mut self) -> Option<MouseData> {
        self.data.pop_front()
    }

    /// All pending reports, oldest first.
    pub fn drain_data(&mut self) -> Vec<MouseData> {
        self.data.drain(..).collect()
    }

    pub fn pending(&self) -> usize {
        self.data.len()
    }

    pub fn clear_data(&mut self) {
        self.data.clear();
    }
}
