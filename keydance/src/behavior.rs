//! The keymap side of the host firmware's callbacks.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::action::KeyAction;
use crate::caps_word::CapsWord;
use crate::config::BehaviorConfig;
use crate::context::LayerGroups;
use crate::dispatcher::{DANCE_ACTION_MAX_NUM, DanceActionTable};
use crate::host::{CapsWordControl, KeyboardHost, LayerControl, LayerRead, RgbMatrix};
use crate::locale::LocaleKey;
use crate::os::OsVariant;
use crate::tap_dance::TapDance;

/// Maximum number of tap dance keys
pub const TAP_DANCE_MAX_NUM: usize = 8;

/// Keymap behaviors of a keyboard: tap dances, locale keys, indicators, OS layers and caps word.
pub struct KeymapBehavior<const N: usize = DANCE_ACTION_MAX_NUM> {
    config: BehaviorConfig,
    caps_word: CapsWord,
    tap_dances: Vec<TapDance<LayerGroups, N>, TAP_DANCE_MAX_NUM>,
}

impl<const N: usize> KeymapBehavior<N> {
    pub fn new(config: BehaviorConfig) -> Self {
        Self {
            config,
            caps_word: CapsWord::default(),
            tap_dances: Vec::new(),
        }
    }

    /// Add a tap dance, reachable from the keymap as `td!(index)` where index is the number of
    /// tap dances added before it.
    pub fn with_tap_dance(mut self, table: DanceActionTable<N>) -> Self {
        self.add_tap_dance(table);
        self
    }

    /// Add a tap dance, returns its index
    pub fn add_tap_dance(&mut self, table: DanceActionTable<N>) -> Option<u8> {
        let index = self.tap_dances.len() as u8;
        let tap_dance = TapDance::new(&self.config.tap_dance, self.config.layer_groups.clone(), table);
        if self.tap_dances.push(tap_dance).is_err() {
            error!("Tap dance list is full, dropping tap dance {}", index);
            return None;
        }
        Some(index)
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    pub fn caps_word(&self) -> &CapsWord {
        &self.caps_word
    }

    pub fn tap_dance(&self, index: u8) -> Option<&TapDance<LayerGroups, N>> {
        self.tap_dances.get(index as usize)
    }

    /// Process a key event before the host does.
    ///
    /// Returns `false` when the key was consumed, `true` when the host should process it normally.
    pub fn process_record<H: KeyboardHost>(
        &mut self,
        action: KeyAction,
        pressed: bool,
        now: Instant,
        host: &mut H,
    ) -> bool {
        if pressed {
            let own = match action {
                KeyAction::TapDance(index) => Some(index as usize),
                _ => None,
            };
            for (i, tap_dance) in self.tap_dances.iter_mut().enumerate() {
                if Some(i) != own {
                    tap_dance.on_interrupt(host);
                }
            }
        }

        if let KeyAction::TapDance(index) = action {
            let Some(tap_dance) = self.tap_dances.get_mut(index as usize) else {
                warn!("Tap dance {} is not defined", index);
                return true;
            };
            if pressed {
                tap_dance.on_press(now, host);
            } else {
                tap_dance.on_release(now, host);
            }
            return false;
        }

        if let Some(key) = LocaleKey::from_key_action(&action) {
            key.process(pressed, host);
            return false;
        }

        true
    }

    /// Advance the settle timers, called every scan cycle
    pub fn tick<H: KeyboardHost>(&mut self, now: Instant, host: &mut H) {
        for tap_dance in self.tap_dances.iter_mut() {
            tap_dance.tick(now, host);
        }
    }

    /// Paint layer and caps word indicators
    pub fn render_indicators<H: LayerRead + RgbMatrix + ?Sized>(&self, host: &mut H) {
        let layer = host.highest_layer();
        self.config
            .indicator
            .render(layer, self.caps_word.is_active(), host);
    }

    pub fn on_host_os_detected<H: LayerControl + ?Sized>(&self, os: OsVariant, host: &mut H) -> bool {
        self.config.os_layers.on_host_os_detected(os, host)
    }

    pub fn on_caps_word_set<H: CapsWordControl + LayerRead + ?Sized>(&mut self, active: bool, host: &mut H) {
        self.caps_word
            .on_caps_word_set(active, &self.config.layer_groups, host);
    }

    pub fn tapping_term(&self, key: &KeyAction) -> Duration {
        self.config.tap_hold.tapping_term(key)
    }

    pub fn permissive_hold(&self, key: &KeyAction) -> bool {
        self.config.tap_hold.permissive_hold(key)
    }

    pub fn hold_on_other_key_press(&self, key: &KeyAction) -> bool {
        self.config.tap_hold.hold_on_other_key_press(key)
    }

    pub fn is_flow_tap_key(&self, key: &KeyAction) -> bool {
        self.config.tap_hold.is_flow_tap_key(key)
    }

    pub fn chordal_hold_allows_hold(&self, tap_hold_position: usize, other_position: usize) -> bool {
        self.config
            .tap_hold
            .chordal_hold_allows_hold(tap_hold_position, other_position)
    }

    pub fn retro_tapping(&self) -> bool {
        self.config.tap_hold.retro_tapping
    }
}
