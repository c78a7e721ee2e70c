#![allow(dead_code)]

use embassy_time::Instant;
use keydance::color::RgbColor;
use keydance::host::{CapsWordControl, KeyReporter, LayerControl, LayerRead, ModifierControl, RgbMatrix};
use keydance::keycode::HidKeyCode;
use keydance::layer::LayerState;
use keydance::layout::NUM_LAYER;
use keydance::modifier::HidModifiers;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const LED_NUM: usize = 96;

/// Side effects recorded by [`MockHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Press(HidKeyCode),
    Release(HidKeyCode),
    LayerOn(u8),
    LayerOff(u8),
    DefaultLayer(u8),
    CapsWordOff,
}

/// A host firmware recording everything keydance asks it to do
pub struct MockHost {
    pub events: Vec<HostEvent>,
    pub mods: HidModifiers,
    pub oneshot_mods: HidModifiers,
    /// Modifier state at every key press
    pub mods_at_press: Vec<HidModifiers>,
    pub layers: LayerState<NUM_LAYER>,
    pub leds: [RgbColor; LED_NUM],
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            mods: HidModifiers::new(),
            oneshot_mods: HidModifiers::new(),
            mods_at_press: Vec::new(),
            layers: LayerState::new(),
            leds: [RgbColor::OFF; LED_NUM],
        }
    }

    /// A host whose default layer is `layer`
    pub fn on_layer(layer: u8) -> Self {
        let mut host = Self::new();
        host.layers.set_single_default(layer);
        host
    }

    /// Press and release events only
    pub fn key_events(&self) -> Vec<HostEvent> {
        self.events
            .iter()
            .copied()
            .filter(|e| matches!(e, HostEvent::Press(_) | HostEvent::Release(_)))
            .collect()
    }

    /// Pressed keys, in order
    pub fn pressed_keys(&self) -> Vec<HidKeyCode> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Press(k) => Some(*k),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl KeyReporter for MockHost {
    fn register_code(&mut self, key: HidKeyCode) {
        self.events.push(HostEvent::Press(key));
        self.mods_at_press.push(self.mods | self.oneshot_mods);
    }

    fn unregister_code(&mut self, key: HidKeyCode) {
        self.events.push(HostEvent::Release(key));
    }
}

impl ModifierControl for MockHost {
    fn mods(&self) -> HidModifiers {
        self.mods
    }

    fn oneshot_mods(&self) -> HidModifiers {
        self.oneshot_mods
    }

    fn set_mods(&mut self, mods: HidModifiers) {
        self.mods = mods;
    }

    fn set_oneshot_mods(&mut self, mods: HidModifiers) {
        self.oneshot_mods = mods;
    }
}

impl LayerRead for MockHost {
    fn highest_layer(&self) -> u8 {
        self.layers.highest()
    }
}

impl LayerControl for MockHost {
    fn layer_on(&mut self, layer: u8) {
        self.events.push(HostEvent::LayerOn(layer));
        self.layers.activate(layer);
    }

    fn layer_off(&mut self, layer: u8) {
        self.events.push(HostEvent::LayerOff(layer));
        self.layers.deactivate(layer);
    }

    fn set_single_default_layer(&mut self, layer: u8) {
        self.events.push(HostEvent::DefaultLayer(layer));
        self.layers.set_single_default(layer);
    }
}

impl RgbMatrix for MockHost {
    fn set_color(&mut self, index: u8, color: RgbColor) {
        self.leds[index as usize] = color;
    }
}

impl CapsWordControl for MockHost {
    fn caps_word_off(&mut self) {
        self.events.push(HostEvent::CapsWordOff);
    }
}

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}
