// Display task: polls the shared redraw flag on a fixed tick and
// renders under the render lock until the screen shuts it down.

use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Ticker};

use super::shared::ScreenShared;

/// Poll period of the display task.
pub const RENDER_PERIOD: Duration = Duration::from_millis(10);

/// Render once if a redraw is pending and no sub-screen owns the panel.
/// Returns true if `draw` ran.
pub async fn render_pending<V: Copy>(shared: &ScreenShared<V>, draw: &mut impl FnMut(V)) -> bool {
    if shared.sub_screen_active() || !shared.take_redraw() {
        return false;
    }

    let _guard = shared.lock_render().await;
    // a handoff or shutdown may have won the lock first
    if shared.is_closing() || shared.sub_screen_active() {
        return false;
    }
    draw(shared.view());
    true
}

pub async fn display_task<V: Copy>(shared: &ScreenShared<V>, mut draw: impl FnMut(V)) {
    log::info!("display: render task started");
    let mut ticker = Ticker::every(RENDER_PERIOD);

    loop {
        match select(shared.wait_stop(), ticker.next()).await {
            Either::First(()) => break,
            Either::Second(()) => {
                render_pending(shared, &mut draw).await;
            }
        }
    }

    log::info!("display: render task stopped");
}
