// Widget-level helpers for 1-bit e-paper screens.
// Region-based layout, the Surface seam screens draw through,
// and its embedded-graphics implementation.

mod gfx;
pub mod stack_fmt;
pub mod surface;
mod widget;

pub use gfx::GfxSurface;
pub use stack_fmt::StackFmt;
pub use surface::{Metrics, Surface, Tab};
pub use widget::{Alignment, Region, wrap_next, wrap_prev};
