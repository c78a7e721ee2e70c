//! Locale substitution keys.
//!
//! The Windows keys avoid the dead keys of US-International: quote, grave and caret are followed by a
//! space so they're typed as-is. The Mac keys type umlauts with the Option+u dead key of US ANSI.

use strum::FromRepr;

use crate::action::{Action, KeyAction};
use crate::host::{KeyReporter, ModifierControl};
use crate::keycode::HidKeyCode;
use crate::modifier::ModifierCombination;
use crate::send_string::{SendOperation, send_string};

/// Option+u, the umlaut dead key on macOS
const MAC_UMLAUT: SendOperation<'static> = SendOperation::TapWithModifier(HidKeyCode::U, ModifierCombination::LALT);

/// User keys with locale-specific output, stored as [`Action::User`] ids.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LocaleKey {
    WinQuote = 0,
    WinGrave = 1,
    Win6 = 2,
    MacAe = 3,
    MacOe = 4,
    MacUe = 5,
}

impl LocaleKey {
    /// The locale key a keymap entry refers to, if any
    pub fn from_key_action(action: &KeyAction) -> Option<Self> {
        match action {
            KeyAction::Single(Action::User(id)) => Self::from_repr(*id),
            _ => None,
        }
    }

    pub const fn to_key_action(self) -> KeyAction {
        KeyAction::Single(Action::User(self as u8))
    }

    /// Operations typed for this key
    pub fn operations(self, shift: bool) -> &'static [SendOperation<'static>] {
        match (self, shift) {
            (LocaleKey::WinQuote, false) => &[SendOperation::Text("' ")],
            (LocaleKey::WinQuote, true) => &[SendOperation::Text("\" ")],
            (LocaleKey::WinGrave, false) => &[SendOperation::Text("` ")],
            (LocaleKey::WinGrave, true) => &[SendOperation::Text("~ ")],
            (LocaleKey::Win6, false) => &[SendOperation::Text("6")],
            (LocaleKey::Win6, true) => &[SendOperation::Text("^ ")],
            (LocaleKey::MacAe, false) => &[MAC_UMLAUT, SendOperation::Text("a")],
            (LocaleKey::MacAe, true) => &[MAC_UMLAUT, SendOperation::Text("A")],
            (LocaleKey::MacOe, false) => &[MAC_UMLAUT, SendOperation::Text("o")],
            (LocaleKey::MacOe, true) => &[MAC_UMLAUT, SendOperation::Text("O")],
            (LocaleKey::MacUe, false) => &[MAC_UMLAUT, SendOperation::Text("u")],
            (LocaleKey::MacUe, true) => &[MAC_UMLAUT, SendOperation::Text("U")],
        }
    }

    /// Type the key on press, ignore its release.
    pub fn process<H: KeyReporter + ModifierControl + ?Sized>(self, pressed: bool, host: &mut H) {
        if !pressed {
            return;
        }
        let shift = (host.mods() | host.oneshot_mods()).has_shift();
        debug!("Locale key {:?}, shift: {}", self, shift);
        send_string(host, self.operations(shift));
    }
}
