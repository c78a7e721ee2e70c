//! Type strings through the host without disturbing its modifier state.

use crate::host::{KeyReporter, ModifierControl};
use crate::keycode::{HidKeyCode, from_ascii};
use crate::modifier::ModifierCombination;

/// A step of a string sent by [`send_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendOperation<'a> {
    /// Ascii text, typed with the US layout
    Text(&'a str),
    /// Tap a single key
    Tap(HidKeyCode),
    /// Hold the modifiers around a tap of the key
    TapWithModifier(HidKeyCode, ModifierCombination),
}

/// Send `operations` with every held and one-shot modifier released, then restore both.
pub fn send_string<H: KeyReporter + ModifierControl + ?Sized>(host: &mut H, operations: &[SendOperation]) {
    let mods = host.mods();
    let oneshot_mods = host.oneshot_mods();
    host.clear_mods();
    host.clear_oneshot_mods();

    for operation in operations {
        match *operation {
            SendOperation::Text(text) => type_text(host, text),
            SendOperation::Tap(key) => host.tap_code(key),
            SendOperation::TapWithModifier(key, modifiers) => tap_with_modifiers(host, key, modifiers),
        }
    }

    host.set_mods(mods);
    host.set_oneshot_mods(oneshot_mods);
}

fn type_text<H: KeyReporter + ?Sized>(host: &mut H, text: &str) {
    for c in text.bytes() {
        let (key, shifted) = from_ascii(c);
        if key == HidKeyCode::No {
            warn!("No key for character {}, skipped", c);
            continue;
        }
        if shifted {
            tap_with_modifiers(host, key, ModifierCombination::LSHIFT);
        } else {
            host.tap_code(key);
        }
    }
}

fn tap_with_modifiers<H: KeyReporter + ?Sized>(host: &mut H, key: HidKeyCode, modifiers: ModifierCombination) {
    let modifier_keys = modifiers.to_hid_modifiers().to_keycodes();
    for m in modifier_keys.iter() {
        host.register_code(*m);
    }
    host.tap_code(key);
    for m in modifier_keys.iter().rev() {
        host.unregister_code(*m);
    }
}
