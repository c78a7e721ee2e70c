//! Interfaces of the host firmware that keymap behaviors call into.
//!
//! Nothing here touches hardware. The host owns HID reporting, the layer stack, the modifier state
//! and the RGB driver, keydance only asks it to change them.

use crate::color::RgbColor;
use crate::keycode::HidKeyCode;
use crate::modifier::HidModifiers;

/// Virtual key press/release, sent to the host as if a physical key changed.
pub trait KeyReporter {
    /// Press a key and keep it in the report until [`KeyReporter::unregister_code`]
    fn register_code(&mut self, key: HidKeyCode);

    /// Remove a key from the report
    fn unregister_code(&mut self, key: HidKeyCode);

    /// Press and release a key
    fn tap_code(&mut self, key: HidKeyCode) {
        self.register_code(key);
        self.unregister_code(key);
    }
}

/// Held and one-shot modifier state of the host.
pub trait ModifierControl {
    fn mods(&self) -> HidModifiers;

    fn oneshot_mods(&self) -> HidModifiers;

    fn set_mods(&mut self, mods: HidModifiers);

    fn set_oneshot_mods(&mut self, mods: HidModifiers);

    fn clear_mods(&mut self) {
        self.set_mods(HidModifiers::new());
    }

    fn clear_oneshot_mods(&mut self) {
        self.set_oneshot_mods(HidModifiers::new());
    }
}

/// Read access to the layer stack.
pub trait LayerRead {
    /// The highest layer of `layer_state | default_layer_state`
    fn highest_layer(&self) -> u8;
}

/// The host's layer stack.
pub trait LayerControl: LayerRead {
    fn layer_on(&mut self, layer: u8);

    fn layer_off(&mut self, layer: u8);

    /// Replace the default layer state with only `layer`
    fn set_single_default_layer(&mut self, layer: u8);
}

/// Per-LED color override of the host's RGB matrix effect.
pub trait RgbMatrix {
    fn set_color(&mut self, index: u8, color: RgbColor);
}

/// Caps word control of the host.
pub trait CapsWordControl {
    fn caps_word_off(&mut self);
}

/// Everything a tap dance action may touch.
pub trait KeyboardHost: KeyReporter + ModifierControl + LayerControl {}

impl<T: KeyReporter + ModifierControl + LayerControl + ?Sized> KeyboardHost for T {}
