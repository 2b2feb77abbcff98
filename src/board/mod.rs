// Logical input surface for screens.
// Physical ladders, debounce and button profiles live in the firmware
// crate; screens only see the logical buttons below.

pub mod action;

pub use action::{Button, ButtonEvent, InputFrame, InputSource};
