//! Caps word gate: caps word only stays on while an OS layer group is active.

use crate::context::ContextResolver;
use crate::host::{CapsWordControl, LayerRead};

/// Tracked caps word state, refused on layers outside every OS group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapsWord {
    active: bool,
}

impl CapsWord {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The host switched caps word on or off.
    ///
    /// On a layer without context caps word is switched off again and the tracked state is kept.
    pub fn on_caps_word_set<R, H>(&mut self, active: bool, resolver: &R, host: &mut H)
    where
        R: ContextResolver + ?Sized,
        H: CapsWordControl + LayerRead + ?Sized,
    {
        if resolver.resolve(host.highest_layer()).is_none() {
            debug!("Caps word refused on layer {}", host.highest_layer());
            host.caps_word_off();
            return;
        }
        self.active = active;
    }
}
