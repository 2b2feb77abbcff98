// Settings screen for the XTEink X4 (ESP32-C3, e-paper)
// Logic, rendering and sub-screen handoff; board bring-up and the
// panel driver live in the firmware crate.

#![cfg_attr(not(test), no_std)]

pub mod apps;
pub mod board;
pub mod kernel;
pub mod ui;
