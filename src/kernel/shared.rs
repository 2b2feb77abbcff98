// State shared between a screen's logic task and its display task.
//
// Logic sets the redraw flag, the display task takes it.  Flags use
// plain load/store; take-and-clear runs in a critical section since
// riscv32imc has no atomic RMW.  Several requests before the next
// render collapse into one redraw.
//
// The render mutex brackets every draw.  Sub-screen handoff and
// screen teardown take it too, so neither can cut a panel refresh
// in half.

use core::cell::Cell;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embassy_sync::signal::Signal;

pub type RenderGuard<'a> = MutexGuard<'a, CriticalSectionRawMutex, ()>;

pub struct ScreenShared<V: Copy> {
    update_required: AtomicBool,
    sub_screen: AtomicBool,
    closing: AtomicBool,
    view: BlockingMutex<CriticalSectionRawMutex, Cell<V>>,
    render_lock: Mutex<CriticalSectionRawMutex, ()>,
    stop: Signal<CriticalSectionRawMutex, ()>,
}

impl<V: Copy> ScreenShared<V> {
    pub const fn new(initial: V) -> Self {
        Self {
            update_required: AtomicBool::new(false),
            sub_screen: AtomicBool::new(false),
            closing: AtomicBool::new(false),
            view: BlockingMutex::new(Cell::new(initial)),
            render_lock: Mutex::new(()),
            stop: Signal::new(),
        }
    }

    #[inline]
    pub fn request_redraw(&self) {
        self.update_required.store(true, Ordering::Release);
    }

    #[inline]
    pub fn redraw_pending(&self) -> bool {
        self.update_required.load(Ordering::Acquire)
    }

    // consume the redraw request; false if none was pending
    pub fn take_redraw(&self) -> bool {
        critical_section::with(|_| {
            let pending = self.update_required.load(Ordering::Acquire);
            if pending {
                self.update_required.store(false, Ordering::Relaxed);
            }
            pending
        })
    }

    /// Publish the state the next render should show.
    pub fn publish(&self, view: V) {
        self.view.lock(|v| v.set(view));
    }

    pub fn view(&self) -> V {
        self.view.lock(|v| v.get())
    }

    #[inline]
    pub fn sub_screen_active(&self) -> bool {
        self.sub_screen.load(Ordering::Acquire)
    }

    pub fn begin_sub_screen(&self) {
        self.sub_screen.store(true, Ordering::Release);
    }

    /// Hand the display back and schedule a repaint.
    pub fn end_sub_screen(&self) {
        self.sub_screen.store(false, Ordering::Release);
        self.request_redraw();
    }

    /// Token a sub-screen consumes when it finishes.
    pub fn completion(&self) -> Completion<'_> {
        Completion {
            sub_screen: &self.sub_screen,
            update_required: &self.update_required,
        }
    }

    pub async fn lock_render(&self) -> RenderGuard<'_> {
        self.render_lock.lock().await
    }

    pub fn try_lock_render(&self) -> Option<RenderGuard<'_>> {
        self.render_lock.try_lock().ok()
    }

    #[inline]
    pub fn is_closing(&self) -> bool {
        self.closing.load(Ordering::Acquire)
    }

    /// Re-arm after a previous shutdown; call on screen entry.
    pub fn open(&self) {
        self.stop.reset();
        self.closing.store(false, Ordering::Release);
        self.sub_screen.store(false, Ordering::Release);
    }

    /// Wait out any in-flight render, then tell the display task to
    /// stop.  A render queued behind the lock sees `closing` and skips.
    pub async fn shutdown(&self) {
        self.closing.store(true, Ordering::Release);
        let _guard = self.lock_render().await;
        self.update_required.store(false, Ordering::Release);
        self.stop.signal(());
    }

    pub async fn wait_stop(&self) {
        self.stop.wait().await
    }
}

/// Completion callback handed to a sub-screen.  Finishing or dropping
/// it returns the display to the owning screen and marks it for
/// redraw, so an aborted sub-screen cannot strand its owner.
#[must_use = "dropping a Completion hands the panel back immediately"]
pub struct Completion<'a> {
    sub_screen: &'a AtomicBool,
    update_required: &'a AtomicBool,
}

impl Completion<'_> {
    pub fn finish(self) {}
}

impl Drop for Completion<'_> {
    fn drop(&mut self) {
        self.sub_screen.store(false, Ordering::Release);
        self.update_required.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;

    #[test]
    fn redraw_requests_coalesce() {
        let shared = ScreenShared::new(0u8);
        assert!(!shared.take_redraw());
        shared.request_redraw();
        shared.request_redraw();
        shared.request_redraw();
        assert!(shared.take_redraw());
        assert!(!shared.take_redraw());
    }

    #[test]
    fn last_published_view_wins() {
        let shared = ScreenShared::new(0u8);
        shared.publish(1);
        shared.publish(2);
        assert_eq!(shared.view(), 2);
    }

    #[test]
    fn completion_returns_display_and_requests_redraw() {
        let shared = ScreenShared::new(());
        shared.begin_sub_screen();
        assert!(shared.sub_screen_active());
        let done = shared.completion();
        done.finish();
        assert!(!shared.sub_screen_active());
        assert!(shared.redraw_pending());
    }

    #[test]
    fn dropped_completion_returns_display() {
        let shared = ScreenShared::new(());
        shared.begin_sub_screen();
        let done = shared.completion();
        assert!(shared.sub_screen_active());
        drop(done);
        assert!(!shared.sub_screen_active());
        assert!(shared.take_redraw());
    }

    #[test]
    fn shutdown_waits_for_render_lock() {
        let shared = ScreenShared::new(());
        let guard = shared.try_lock_render();
        assert!(guard.is_some());
        assert!(shared.try_lock_render().is_none());
        drop(guard);

        shared.request_redraw();
        block_on(shared.shutdown());
        assert!(shared.is_closing());
        assert!(!shared.redraw_pending());
        // lock is released again after shutdown
        assert!(shared.try_lock_render().is_some());
        // stop signal is latched for the display task
        block_on(shared.wait_stop());
    }

    #[test]
    fn open_rearms_after_shutdown() {
        let shared = ScreenShared::new(());
        block_on(shared.shutdown());
        shared.open();
        assert!(!shared.is_closing());
        assert!(!shared.sub_screen_active());
    }
}
