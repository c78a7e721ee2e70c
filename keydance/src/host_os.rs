//! Default layer selection from the detected host OS.

use crate::host::LayerControl;
use crate::os::OsVariant;

/// Base layer of each host OS family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OsLayerMap {
    /// Base layer for macOS and iOS
    pub mac: u8,
    /// Base layer for Windows and Linux
    pub windows: u8,
    /// Base layer when the OS is unknown
    pub fallback: u8,
}

impl OsLayerMap {
    pub fn base_layer(&self, os: OsVariant) -> u8 {
        match os {
            OsVariant::MacOs | OsVariant::Ios => self.mac,
            OsVariant::Windows | OsVariant::Linux => self.windows,
            OsVariant::Unsure => self.fallback,
        }
    }

    /// Switch the default layer to the base layer of `os`.
    ///
    /// Always returns `true`, the host continues with its own OS detection handling.
    pub fn on_host_os_detected<H: LayerControl + ?Sized>(&self, os: OsVariant, host: &mut H) -> bool {
        let layer = self.base_layer(os);
        info!("Detected host OS {:?}, default layer: {}", os, layer);
        host.set_single_default_layer(layer);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::LayerRead;
    use crate::layer::LayerState;

    const MAP: OsLayerMap = OsLayerMap {
        mac: 5,
        windows: 2,
        fallback: 0,
    };

    #[test]
    fn test_base_layer() {
        assert_eq!(MAP.base_layer(OsVariant::MacOs), 5);
        assert_eq!(MAP.base_layer(OsVariant::Ios), 5);
        assert_eq!(MAP.base_layer(OsVariant::Windows), 2);
        assert_eq!(MAP.base_layer(OsVariant::Linux), 2);
        assert_eq!(MAP.base_layer(OsVariant::Unsure), 0);
    }

    #[test]
    fn test_set_default_layer() {
        let mut layers: LayerState<8> = LayerState::new();
        assert!(MAP.on_host_os_detected(OsVariant::Ios, &mut layers));
        assert_eq!(layers.default_layer_state(), 1 << 5);
        assert_eq!(layers.highest_layer(), 5);
        assert!(MAP.on_host_os_detected(OsVariant::Unsure, &mut layers));
        assert_eq!(layers.default_layer_state(), 1);
    }
}
