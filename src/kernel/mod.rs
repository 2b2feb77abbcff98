// Cross-task plumbing for screens
// Logic runs on one task, rendering on another. They meet at a
// ScreenShared: a coalescing redraw flag, the published view state,
// and the render lock that sub-screen handoff and teardown honour.

pub mod display;
pub mod shared;

pub use display::{RENDER_PERIOD, display_task, render_pending};
pub use shared::{Completion, RenderGuard, ScreenShared};
