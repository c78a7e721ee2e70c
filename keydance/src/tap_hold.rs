//! Per-key tap/hold tables, consulted by the host when it resolves a dual-role key.

use embassy_time::Duration;
use heapless::Vec;

use crate::action::KeyAction;

/// Maximum number of keys in each tap/hold table
pub const TAP_HOLD_KEY_MAX_NUM: usize = 32;

/// Maximum number of key positions in the chordal hold layout
pub const CHORDAL_HOLD_KEY_MAX_NUM: usize = 128;

/// Default tapping term
pub const DEFAULT_TAPPING_TERM: Duration = Duration::from_millis(200);

type KeyTable = Vec<KeyAction, TAP_HOLD_KEY_MAX_NUM>;

/// Which hand a key position belongs to, for chordal hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Handedness {
    Left,
    Right,
    /// Thumb and center keys, chord with either hand
    Either,
}

/// Configurations for tap hold behavior
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapHoldConfig {
    /// Tapping term of keys without an override
    pub tapping_term: Duration,
    /// Per-key tapping term overrides. A zero term resolves the key as hold immediately.
    pub tapping_term_overrides: Vec<(KeyAction, Duration), TAP_HOLD_KEY_MAX_NUM>,
    /// Keys which resolve as hold when another key is tapped while they're held
    pub permissive_hold: KeyTable,
    /// Keys which resolve as hold as soon as another key is pressed
    pub hold_on_other_key_press: KeyTable,
    /// Keys which resolve as tap when pressed shortly after another key, while typing
    pub flow_tap: KeyTable,
    /// Handedness of every key position, in layout order. Empty when chordal hold is off.
    pub chordal_hold: Vec<Handedness, CHORDAL_HOLD_KEY_MAX_NUM>,
    /// Send the tap action when a key is held past the tapping term and released without another key
    pub retro_tapping: bool,
}

impl Default for TapHoldConfig {
    fn default() -> Self {
        Self {
            tapping_term: DEFAULT_TAPPING_TERM,
            tapping_term_overrides: Vec::new(),
            permissive_hold: Vec::new(),
            hold_on_other_key_press: Vec::new(),
            flow_tap: Vec::new(),
            chordal_hold: Vec::new(),
            retro_tapping: false,
        }
    }
}

fn push_key(table: &mut KeyTable, key: KeyAction) {
    if table.contains(&key) {
        return;
    }
    if table.push(key).is_err() {
        error!("Tap/hold table is full, dropping {:?}", key);
    }
}

impl TapHoldConfig {
    /// Tapping term of a key
    pub fn tapping_term(&self, key: &KeyAction) -> Duration {
        self.tapping_term_overrides
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, term)| *term)
            .unwrap_or(self.tapping_term)
    }

    pub fn permissive_hold(&self, key: &KeyAction) -> bool {
        self.permissive_hold.contains(key)
    }

    pub fn hold_on_other_key_press(&self, key: &KeyAction) -> bool {
        self.hold_on_other_key_press.contains(key)
    }

    pub fn is_flow_tap_key(&self, key: &KeyAction) -> bool {
        self.flow_tap.contains(key)
    }

    /// Handedness of a key position, `None` without a chordal hold layout or for unknown positions
    pub fn handedness(&self, position: usize) -> Option<Handedness> {
        self.chordal_hold.get(position).copied()
    }

    /// Whether a tap/hold key may resolve as hold when `other` is pressed during its tapping term.
    ///
    /// Keys on the same hand settle as tap. `Either` positions chord with both hands.
    pub fn chordal_hold_allows_hold(&self, tap_hold_position: usize, other_position: usize) -> bool {
        match (self.handedness(tap_hold_position), self.handedness(other_position)) {
            (Some(Handedness::Either), _) | (_, Some(Handedness::Either)) => true,
            (Some(hand), Some(other)) => hand != other,
            _ => true,
        }
    }

    /// Override the tapping term of a key, replacing an earlier override
    pub fn set_tapping_term(&mut self, key: KeyAction, term: Duration) {
        if let Some(entry) = self.tapping_term_overrides.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = term;
            return;
        }
        if self.tapping_term_overrides.push((key, term)).is_err() {
            error!("Tapping term table is full, dropping {:?}", key);
        }
    }

    pub fn with_tapping_term(mut self, keys: &[KeyAction], term: Duration) -> Self {
        keys.iter().for_each(|key| self.set_tapping_term(*key, term));
        self
    }

    pub fn with_permissive_hold(mut self, keys: &[KeyAction]) -> Self {
        keys.iter().for_each(|key| push_key(&mut self.permissive_hold, *key));
        self
    }

    pub fn with_hold_on_other_key_press(mut self, keys: &[KeyAction]) -> Self {
        keys.iter()
            .for_each(|key| push_key(&mut self.hold_on_other_key_press, *key));
        self
    }

    pub fn with_flow_tap(mut self, keys: &[KeyAction]) -> Self {
        keys.iter().for_each(|key| push_key(&mut self.flow_tap, *key));
        self
    }

    /// Set the chordal hold layout, one entry per key position
    pub fn with_chordal_hold(mut self, layout: &[Handedness]) -> Self {
        self.chordal_hold.clear();
        if self.chordal_hold.extend_from_slice(layout).is_err() {
            error!(
                "Chordal hold layout has {} positions, only {} supported",
                layout.len(),
                CHORDAL_HOLD_KEY_MAX_NUM
            );
        }
        self
    }
}
