//! Connection table of the virtual mouse controller
//!
//! Field values mirror the cellMouse constants so the guest-facing layer can
//! copy them out unchanged.

use std::sync::atomic::{AtomicBool, Ordering};

use cm_core::{input_debug, input_warn};

use crate::motion::MotionSample;
use crate::mouse::{MouseButtons, MouseData, MouseState};

/// Highest number of mice a cellMouse controller can report.
pub const MAX_MICE: u32 = 127;

/// Vendor id reported for the built-in mouse on port 0.
pub const DEFAULT_VENDOR_ID: u16 = 0x1234;
/// Product id reported for the built-in mouse on port 0.
pub const DEFAULT_PRODUCT_ID: u16 = 0x1234;

static MICE_INTERCEPTED: AtomicBool = AtomicBool::new(false);

/// Whether the system currently owns mouse data (e.g. an overlay is open).
pub fn mice_intercepted() -> bool {
    MICE_INTERCEPTED.load(Ordering::Relaxed)
}

pub fn set_mice_intercepted(intercepted: bool) {
    MICE_INTERCEPTED.store(intercepted, Ordering::Relaxed);
}

/// Connection status of a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SlotStatus {
    #[default]
    Disconnected = 0,
    Connected = 1,
}

/// Reporting mode of a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SlotMode {
    #[default]
    StandardMouse = 0,
    TabletMouseMode = 1,
}

/// Who owns the mouse data stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Ownership {
    #[default]
    ApplicationOwned = 0,
    SystemOwned = 1,
}

impl Ownership {
    pub fn from_intercepted(intercepted: bool) -> Self {
        if intercepted {
            Ownership::SystemOwned
        } else {
            Ownership::ApplicationOwned
        }
    }
}

/// One virtual mouse port
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slot {
    pub status: SlotStatus,
    pub mode: SlotMode,
    pub tablet_supported: bool,
    pub vendor_id: u16,
    pub product_id: u16,
    pub state: MouseState,
}

impl Slot {
    fn builtin() -> Self {
        Self {
            status: SlotStatus::Connected,
            vendor_id: DEFAULT_VENDOR_ID,
            product_id: DEFAULT_PRODUCT_ID,
            ..Self::default()
        }
    }

    fn vacant() -> Self {
        Self {
            status: SlotStatus::Disconnected,
            mode: SlotMode::TabletMouseMode,
            tablet_supported: false,
            ..Self::default()
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status == SlotStatus::Connected
    }
}

/// Aggregate controller information as polled by the guest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PeripheralInfo {
    pub max_connect: u32,
    pub now_connect: u32,
    pub ownership: Ownership,
    pub slots: Vec<Slot>,
}

/// The virtual controller: slot table plus the operations host input drives.
#[derive(Debug, Default)]
pub struct PeripheralState {
    info: PeripheralInfo,
}

impl PeripheralState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize with `max_connect` ports, taking ownership from the
    /// process-wide interception flag.
    pub fn init(&mut self, max_connect: u32) {
        self.init_with(max_connect, mice_intercepted());
    }

    /// Initialize with an explicit interception state.
    ///
    /// Does nothing if the controller already has a capacity.
    pub fn init_with(&mut self, max_connect: u32, intercepted: bool) {
        if self.is_initialized() {
            input_debug!(
                max_connect = self.info.max_connect,
                "Mouse controller already initialized"
            );
            return;
        }

        let max_connect = if max_connect > MAX_MICE {
            input_warn!(requested = max_connect, "Clamping mouse port count to {}", MAX_MICE);
            MAX_MICE
        } else {
            max_connect
        };

        let slots: Vec<Slot> = (0..max_connect)
            .map(|port| if port == 0 { Slot::builtin() } else { Slot::vacant() })
            .collect();
        let active = slots.iter().filter(|slot| slot.is_connected()).count() as u32;

        self.info = PeripheralInfo {
            max_connect,
            now_connect: active.min(max_connect),
            ownership: Ownership::from_intercepted(intercepted),
            slots,
        };

        input_debug!(
            max_connect,
            now_connect = self.info.now_connect,
            ownership = ?self.info.ownership,
            "Mouse controller initialized"
        );
    }

    /// Tear down so that the next `init` takes effect.
    pub fn end(&mut self) {
        self.info = PeripheralInfo::default();
        input_debug!("Mouse controller shut down");
    }

    pub fn is_initialized(&self) -> bool {
        self.info.max_connect > 0
    }

    pub fn info(&self) -> &PeripheralInfo {
        &self.info
    }

    pub fn slot(&self, port: usize) -> Option<&Slot> {
        self.info.slots.get(port)
    }

    /// The port host input drives. Other ports are never touched.
    fn primary_mut(&mut self) -> Option<&mut MouseState> {
        self.info
            .slots
            .first_mut()
            .filter(|slot| slot.is_connected())
            .map(|slot| &mut slot.state)
    }

    /// Press or release `button` on port 0. Empty button sets are ignored.
    pub fn set_button(&mut self, button: MouseButtons, pressed: bool) {
        if button.is_empty() {
            return;
        }
        if let Some(mouse) = self.primary_mut() {
            mouse.set_button(button, pressed);
        }
    }

    /// Forward a signed wheel magnitude to port 0.
    pub fn scroll(&mut self, delta: i32) {
        if let Some(mouse) = self.primary_mut() {
            mouse.scroll(delta);
        }
    }

    /// Record a committed motion sample on port 0.
    pub fn apply_motion(&mut self, sample: &MotionSample) {
        if let Some(mouse) = self.primary_mut() {
            mouse.apply_motion(sample);
        }
    }

    /// Pop the oldest pending report of `port`.
    pub fn get_data(&mut self, port: usize) -> Option<MouseData> {
        self.info.slots.get_mut(port)?.state.pop_data()
    }

    /// Drain every pending report of `port`, oldest first.
    pub fn get_data_list(&mut self, port: usize) -> Vec<MouseData> {
        self.info
            .slots
            .get_mut(port)
            .map(|slot| slot.state.drain_data())
            .unwrap_or_default()
    }

    /// Discard pending reports of `port`.
    pub fn clear_buf(&mut self, port: usize) {
        if let Some(slot) = self.info.slots.get_mut(port) {
            slot.state.clear_data();
        }
    }
}
