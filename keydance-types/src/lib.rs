//! # keydance types
//!
//! Plain data types shared between the keydance behavior layer and the host firmware it runs in.
//!
//! ## Modules
//!
//! - [`action`] - Keymap entries: single actions, tap/hold keys, tap dance keys, user keys
//! - [`keycode`] - HID keycodes and the US layout ascii mapping
//! - [`modifier`] - Modifier combinations and the 8-bit HID modifier state
//! - [`color`] - RGB colors used by the layer indicators
//! - [`os`] - Host operating systems reported by OS detection
//!
//! Every type here is `Copy`, and derives `defmt::Format` when the `defmt` feature is enabled.

#![no_std]

pub mod action;
pub mod color;
pub mod keycode;
pub mod modifier;
pub mod os;
