//! # keydance
//!
//! Runtime keymap behaviors for keyboard firmware: a tap dance classifier and dispatcher, per-key
//! tap/hold tables, layer-aware RGB indicators, host OS default layers, modifier-preserving string
//! injection for locale characters and a caps word gate.
//!
//! keydance doesn't scan a matrix or talk HID itself. The host firmware calls into
//! [`behavior::KeymapBehavior`] from its keymap callbacks and exposes its own state through the
//! traits in [`host`].
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub use keydance_types::{action, color, keycode, modifier, os};

pub mod behavior;
pub mod caps_word;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod host;
pub mod host_os;
pub mod indicator;
pub mod layer;
pub mod layout;
pub mod layout_macro;
pub mod locale;
pub mod send_string;
pub mod tap_dance;
pub mod tap_hold;
