//! Keymap entries.
//!
//! - [`Action`] - Single operations that a key sends or executes
//! - [`KeyAction`] - How a key behaves over time: a single action, a tap/hold pair or a tap dance

use serde::{Deserialize, Serialize};

use crate::keycode::HidKeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
/// It can be a single action like triggering a key, or a composite keyboard action like tap/hold
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// A single action, such as triggering a key, or activating a layer. Action is triggered when pressed and cancelled when released.
    Single(Action),
    /// General tap/hold action: (tap_action, hold_action)
    TapHold(Action, Action),
    /// Tap dance action, references a tap dance by index.
    TapDance(u8),
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke.
    Key(HidKeyCode),
    /// Modifier Combination, used as the hold side of mod-tap keys.
    Modifier(ModifierCombination),
    /// Activate a layer
    LayerOn(u8),
    /// A user-defined keycode, handled by the keymap instead of the firmware.
    User(u8),
}
