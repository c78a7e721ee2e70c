//! Reference layout: three layer groups (plain default, Windows-like, Mac-like), each with a base,
//! an umlaut and a function layer, and the behavior configuration of the keyboards using it.

use embassy_time::Duration;

use crate::action::KeyAction;
use crate::color::RgbColor;
use crate::config::{BehaviorConfig, TapDanceConfig};
use crate::context::{Context, LayerGroups};
use crate::dispatcher::{ContextFilter, DanceAction, DanceActionTable};
use crate::host_os::OsLayerMap;
use crate::indicator::IndicatorConfig;
use crate::keycode::HidKeyCode;
use crate::locale::LocaleKey;
use crate::modifier::ModifierCombination;
use crate::tap_dance::DanceOutcome;
use crate::tap_hold::{DEFAULT_TAPPING_TERM, Handedness, TapHoldConfig};
use crate::{lt, mt};

pub const DEF_B: u8 = 0;
pub const DEF_F: u8 = 1;
pub const WIN_B: u8 = 2;
pub const WIN_U: u8 = 3;
pub const WIN_F: u8 = 4;
pub const MAC_B: u8 = 5;
pub const MAC_U: u8 = 6;
pub const MAC_F: u8 = 7;

pub const NUM_LAYER: usize = 8;

pub const WIN_CAPS: KeyAction = mt!(Escape, ModifierCombination::LCTRL);
pub const WIN_SPC: KeyAction = lt!(WIN_U, Space);
pub const WIN_HR_A: KeyAction = mt!(A, ModifierCombination::LGUI);
pub const WIN_HR_S: KeyAction = mt!(S, ModifierCombination::LALT);
pub const WIN_HR_D: KeyAction = mt!(D, ModifierCombination::LSHIFT);
pub const WIN_HR_F: KeyAction = mt!(F, ModifierCombination::LCTRL);
pub const WIN_HR_J: KeyAction = mt!(J, ModifierCombination::RCTRL);
pub const WIN_HR_K: KeyAction = mt!(K, ModifierCombination::RSHIFT);
pub const WIN_HR_L: KeyAction = mt!(L, ModifierCombination::RALT);
pub const WIN_HR_SCLN: KeyAction = mt!(Semicolon, ModifierCombination::RGUI);

pub const MAC_CAPS: KeyAction = mt!(Escape, ModifierCombination::LGUI);
pub const MAC_SPC: KeyAction = lt!(MAC_U, Space);
pub const MAC_MEGA: KeyAction = mt!(RGui, ModifierCombination::LCAG);
pub const MAC_HR_A: KeyAction = mt!(A, ModifierCombination::LCTRL);
pub const MAC_HR_S: KeyAction = mt!(S, ModifierCombination::LALT);
pub const MAC_HR_D: KeyAction = mt!(D, ModifierCombination::LSHIFT);
pub const MAC_HR_F: KeyAction = mt!(F, ModifierCombination::LGUI);
pub const MAC_HR_J: KeyAction = mt!(J, ModifierCombination::RGUI);
pub const MAC_HR_K: KeyAction = mt!(K, ModifierCombination::RSHIFT);
pub const MAC_HR_L: KeyAction = mt!(L, ModifierCombination::RALT);
pub const MAC_HR_SCLN: KeyAction = mt!(Semicolon, ModifierCombination::RCTRL);

pub const WIN_QUOT: KeyAction = LocaleKey::WinQuote.to_key_action();
pub const WIN_GRV: KeyAction = LocaleKey::WinGrave.to_key_action();
pub const WIN_6: KeyAction = LocaleKey::Win6.to_key_action();
pub const MAC_AE: KeyAction = LocaleKey::MacAe.to_key_action();
pub const MAC_OE: KeyAction = LocaleKey::MacOe.to_key_action();
pub const MAC_UE: KeyAction = LocaleKey::MacUe.to_key_action();

/// Keys resolving as hold immediately
const INSTANT_HOLD_KEYS: [KeyAction; 3] = [WIN_CAPS, MAC_CAPS, MAC_MEGA];

/// Home row mods with permissive hold. Shift, Alt and Option keys are shared by both groups.
const PERMISSIVE_HOME_ROW: [KeyAction; 12] = [
    WIN_HR_A, WIN_HR_S, WIN_HR_D, WIN_HR_F, WIN_HR_J, WIN_HR_K, WIN_HR_L, WIN_HR_SCLN, MAC_HR_A, MAC_HR_F,
    MAC_HR_J, MAC_HR_SCLN,
];

/// Home row mods resolving as tap while typing, shift excluded
const FLOW_TAP_KEYS: [KeyAction; 10] = [
    WIN_HR_A, WIN_HR_S, WIN_HR_F, WIN_HR_J, WIN_HR_L, WIN_HR_SCLN, MAC_HR_A, MAC_HR_F, MAC_HR_J, MAC_HR_SCLN,
];

const L: Handedness = Handedness::Left;
const R: Handedness = Handedness::Right;
const X: Handedness = Handedness::Either;

/// Hands of the split ergo board's keys, row by row in layout order
#[rustfmt::skip]
pub const ERGO_CHORDAL_HOLD: [Handedness; 70] = [
    L, L,    L, L, L, L, L, L,          R, R, R, R, R, R, R, R,
    L, L,    L, L, L, L, L,          R, R, R, R, R, R, R,    R,
    L, L,    L, L, L, L, L,          R, R, R, R, R, R,    R,
    L, L, L, L, L, L, L, X,       X, R, R, R, R, R,    R,    R,
       L, L,    L,    X,             X, R,       R, R, R,
];

/// The OS layer groups, the plain default layers have no context
pub fn layer_groups() -> LayerGroups {
    LayerGroups::new()
        .with(WIN_B, WIN_F, Context::WindowsLike)
        .with(MAC_B, MAC_F, Context::MacLike)
}

pub fn os_layers() -> OsLayerMap {
    OsLayerMap {
        mac: MAC_B,
        windows: WIN_B,
        fallback: DEF_B,
    }
}

fn with_layer_colors(config: IndicatorConfig) -> IndicatorConfig {
    config
        .with_layer_color(DEF_B, RgbColor::WHITE)
        .with_layer_color(DEF_F, RgbColor::PINK)
        .with_layer_color(WIN_B, RgbColor::BLUE)
        .with_layer_color(WIN_U, RgbColor::CYAN)
        .with_layer_color(WIN_F, RgbColor::PURPLE)
        .with_layer_color(MAC_B, RgbColor::GREEN)
        .with_layer_color(MAC_U, RgbColor::SPRING_GREEN)
        .with_layer_color(MAC_F, RgbColor::CHARTREUSE)
}

/// Split ergo board: three indicator LEDs, caps word on the bottom barrier LEDs, home row mods
pub fn behavior_config() -> BehaviorConfig {
    let indicator = IndicatorConfig::default()
        .with_cleared_leds(0..16)
        .with_indicator_leds(&[5, 6, 7])
        .with_caps_word_leds(&[11, 15]);

    let tap_hold = TapHoldConfig::default()
        .with_tapping_term(&INSTANT_HOLD_KEYS, Duration::from_millis(0))
        .with_permissive_hold(&[WIN_SPC, MAC_SPC])
        .with_permissive_hold(&PERMISSIVE_HOME_ROW)
        .with_hold_on_other_key_press(&INSTANT_HOLD_KEYS)
        .with_flow_tap(&FLOW_TAP_KEYS)
        .with_chordal_hold(&ERGO_CHORDAL_HOLD);

    BehaviorConfig {
        tap_hold,
        tap_dance: TapDanceConfig::default(),
        layer_groups: layer_groups(),
        indicator: with_layer_colors(indicator),
        os_layers: os_layers(),
    }
}

/// 75% board: a single indicator LED, longer tapping term, retro tapping
pub fn m1_behavior_config() -> BehaviorConfig {
    let indicator = IndicatorConfig::default()
        .with_indicator_leds(&[77])
        .with_caps_word_leds(&[59, 71]);

    let tap_hold = TapHoldConfig {
        tapping_term: DEFAULT_TAPPING_TERM * 2,
        retro_tapping: true,
        ..TapHoldConfig::default()
    }
    .with_tapping_term(&INSTANT_HOLD_KEYS, Duration::from_millis(0))
    .with_permissive_hold(&[WIN_SPC, MAC_SPC])
    .with_hold_on_other_key_press(&INSTANT_HOLD_KEYS);

    BehaviorConfig {
        tap_hold,
        tap_dance: TapDanceConfig::default(),
        layer_groups: layer_groups(),
        indicator: with_layer_colors(indicator),
        os_layers: os_layers(),
    }
}

/// Escape on tap, the function layer of the active OS group on hold, and on the Mac a
/// Ctrl+Option+Command chord on tap-then-hold.
pub fn escape_dance() -> DanceActionTable {
    DanceActionTable::new()
        .with(DanceOutcome::SingleTap, ContextFilter::Any, DanceAction::Key(HidKeyCode::Escape))
        .with(
            DanceOutcome::SingleHold,
            ContextFilter::Only(Context::WindowsLike),
            DanceAction::Layer(WIN_F),
        )
        .with(
            DanceOutcome::SingleHold,
            ContextFilter::Only(Context::MacLike),
            DanceAction::Layer(MAC_F),
        )
        .with(
            DanceOutcome::DoubleHold,
            ContextFilter::Only(Context::MacLike),
            DanceAction::Chord([HidKeyCode::LCtrl, HidKeyCode::LAlt, HidKeyCode::LGui]),
        )
}
