//! Input mapping

use crate::host::HostButton;
use crate::mouse::MouseButtons;
use crate::peripheral::PeripheralState;

/// Maps host mouse buttons to cellMouse buttons.
///
/// The table is fixed: primary, secondary and middle map to buttons 1-3 and
/// the five extra host buttons map to 4-8 in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonMapper;

impl ButtonMapper {
    pub fn new() -> Self {
        Self
    }

    /// Translate a host button into a peripheral button.
    pub fn map(&self, button: HostButton) -> Option<MouseButtons> {
        let mapped = match button {
            HostButton::Left => MouseButtons::BUTTON_1,
            HostButton::Right => MouseButtons::BUTTON_2,
            HostButton::Middle => MouseButtons::BUTTON_3,
            HostButton::Extra1 => MouseButtons::BUTTON_4,
            HostButton::Extra2 => MouseButtons::BUTTON_5,
            HostButton::Extra3 => MouseButtons::BUTTON_6,
            HostButton::Extra4 => MouseButtons::BUTTON_7,
            HostButton::Extra5 => MouseButtons::BUTTON_8,
            HostButton::Other(_) => return None,
        };
        Some(mapped)
    }

    /// Apply a host button press/release to the peripheral.
    pub fn on_button_event(&self, state: &mut PeripheralState, button: HostButton, pressed: bool) {
        if let Some(mapped) = self.map(button) {
            state.set_button(mapped, pressed);
        }
    }

    /// Forward the vertical wheel delta untouched.
    pub fn on_wheel_event(&self, state: &mut PeripheralState, delta_y: i32) {
        state.scroll(delta_y);
    }
}
