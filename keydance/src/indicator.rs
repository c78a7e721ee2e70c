//! Layer-aware RGB indicators.
//!
//! Rendered on every RGB matrix frame on top of the running effect: a group of indicator LEDs shows
//! the color of the highest active layer, and the caps word LEDs light up while caps word is on.

use heapless::Vec;

use crate::color::RgbColor;
use crate::host::RgbMatrix;

/// Maximum number of indicator or caps word LEDs
pub const INDICATOR_LED_MAX_NUM: usize = 8;
/// Maximum number of layers with their own indicator color
pub const LAYER_COLOR_MAX_NUM: usize = 32;
/// Maximum number of LEDs cleared before painting
pub const CLEARED_LED_MAX_NUM: usize = 32;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorConfig {
    /// LEDs showing the layer color
    pub indicator_leds: Vec<u8, INDICATOR_LED_MAX_NUM>,
    /// Color of each layer
    pub layer_colors: Vec<(u8, RgbColor), LAYER_COLOR_MAX_NUM>,
    /// Color of layers without a registered color
    pub fallback_color: RgbColor,
    /// LEDs switched off before the indicators are painted
    pub cleared_leds: Vec<u8, CLEARED_LED_MAX_NUM>,
    /// LEDs lit while caps word is active
    pub caps_word_leds: Vec<u8, INDICATOR_LED_MAX_NUM>,
    pub caps_word_color: RgbColor,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            indicator_leds: Vec::new(),
            layer_colors: Vec::new(),
            fallback_color: RgbColor::RED,
            cleared_leds: Vec::new(),
            caps_word_leds: Vec::new(),
            caps_word_color: RgbColor::YELLOW,
        }
    }
}

fn push_led<const N: usize>(leds: &mut Vec<u8, N>, led: u8) {
    if leds.push(led).is_err() {
        error!("Indicator LED list is full, dropping LED {}", led);
    }
}

impl IndicatorConfig {
    pub fn with_indicator_leds(mut self, leds: &[u8]) -> Self {
        leds.iter().for_each(|led| push_led(&mut self.indicator_leds, *led));
        self
    }

    pub fn with_cleared_leds(mut self, leds: impl IntoIterator<Item = u8>) -> Self {
        leds.into_iter().for_each(|led| push_led(&mut self.cleared_leds, led));
        self
    }

    pub fn with_caps_word_leds(mut self, leds: &[u8]) -> Self {
        leds.iter().for_each(|led| push_led(&mut self.caps_word_leds, *led));
        self
    }

    /// Set the color of a layer, replacing an earlier one
    pub fn with_layer_color(mut self, layer: u8, color: RgbColor) -> Self {
        if let Some(entry) = self.layer_colors.iter_mut().find(|(l, _)| *l == layer) {
            entry.1 = color;
        } else if self.layer_colors.push((layer, color)).is_err() {
            error!("Layer color table is full, dropping color of layer {}", layer);
        }
        self
    }

    /// Indicator color of a layer
    pub fn layer_color(&self, layer: u8) -> RgbColor {
        self.layer_colors
            .iter()
            .find(|(l, _)| *l == layer)
            .map(|(_, color)| *color)
            .unwrap_or(self.fallback_color)
    }

    /// Paint the indicators of `highest_layer` and the caps word state
    pub fn render<M: RgbMatrix + ?Sized>(&self, highest_layer: u8, caps_word_active: bool, rgb: &mut M) {
        for led in self.cleared_leds.iter() {
            rgb.set_color(*led, RgbColor::OFF);
        }

        let color = self.layer_color(highest_layer);
        for led in self.indicator_leds.iter() {
            rgb.set_color(*led, color);
        }

        let caps_color = if caps_word_active {
            self.caps_word_color
        } else {
            RgbColor::OFF
        };
        for led in self.caps_word_leds.iter() {
            rgb.set_color(*led, caps_color);
        }
    }
}
