use serde::{Deserialize, Serialize};

/// Host operating system, as guessed by the firmware's USB fingerprinting.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OsVariant {
    /// Detection hasn't finished or the fingerprint is unknown
    #[default]
    Unsure,
    Linux,
    Windows,
    MacOs,
    Ios,
}
