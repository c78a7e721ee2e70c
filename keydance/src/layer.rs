//! Bitmask layer stack, for hosts that don't have one of their own.
//!
//! The layout follows the usual firmware convention: bit `n` of `layer_state` is set when layer `n` is
//! active, and `default_layer_state` holds the default layer(s). The effective layer is the highest
//! set bit of both masks combined.

use crate::host::{LayerControl, LayerRead};

/// Maximum number of layers a `u32` mask holds
pub const MAX_LAYER_NUM: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState<const NUM_LAYER: usize> {
    /// Momentarily activated layers
    layer_state: u32,
    /// Default layers, normally exactly one bit
    default_layer_state: u32,
}

impl<const NUM_LAYER: usize> Default for LayerState<NUM_LAYER> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const NUM_LAYER: usize> LayerState<NUM_LAYER> {
    /// Layer 0 as the default layer, nothing else active
    pub const fn new() -> Self {
        Self {
            layer_state: 0,
            default_layer_state: 1,
        }
    }

    pub fn layer_state(&self) -> u32 {
        self.layer_state
    }

    pub fn default_layer_state(&self) -> u32 {
        self.default_layer_state
    }

    fn valid(layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER || layer_num as usize >= MAX_LAYER_NUM {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return false;
        }
        true
    }

    pub fn is_active(&self, layer_num: u8) -> bool {
        (layer_num as usize) < MAX_LAYER_NUM && (self.layer_state | self.default_layer_state) & (1 << layer_num) != 0
    }

    /// Activate given layer
    pub fn activate(&mut self, layer_num: u8) {
        if Self::valid(layer_num) {
            self.layer_state |= 1 << layer_num;
        }
    }

    /// Deactivate given layer
    pub fn deactivate(&mut self, layer_num: u8) {
        if Self::valid(layer_num) {
            self.layer_state &= !(1 << layer_num);
        }
    }

    /// Toggle given layer
    pub fn toggle(&mut self, layer_num: u8) {
        if Self::valid(layer_num) {
            self.layer_state ^= 1 << layer_num;
        }
    }

    /// Make `layer_num` the only default layer
    pub fn set_single_default(&mut self, layer_num: u8) {
        if Self::valid(layer_num) {
            self.default_layer_state = 1 << layer_num;
        }
    }

    /// Highest active layer, including default layers
    pub fn highest(&self) -> u8 {
        let state = self.layer_state | self.default_layer_state;
        if state == 0 {
            0
        } else {
            (u32::BITS - 1 - state.leading_zeros()) as u8
        }
    }
}

impl<const NUM_LAYER: usize> LayerRead for LayerState<NUM_LAYER> {
    fn highest_layer(&self) -> u8 {
        self.highest()
    }
}

impl<const NUM_LAYER: usize> LayerControl for LayerState<NUM_LAYER> {
    fn layer_on(&mut self, layer: u8) {
        self.activate(layer);
    }

    fn layer_off(&mut self, layer: u8) {
        self.deactivate(layer);
    }

    fn set_single_default_layer(&mut self, layer: u8) {
        self.set_single_default(layer);
    }
}
