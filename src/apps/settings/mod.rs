// Settings screen: four category tabs over a list of bound settings.
//
// Logic side (poll) runs once per input cycle on the main task and
// only mutates the store and the published NavView.  Drawing happens
// on the display task through run_display, paced by the redraw flag in
// the shared state.  Back saves and returns home; every confirm that
// changes a value saves immediately.

pub mod actions;
pub mod catalog;
pub mod model;
pub mod mutate;
pub mod nav;
pub mod render;
pub mod store;

pub use actions::{LaunchError, NoSubScreens, SubScreen, SubScreenHost};
pub use catalog::{CATEGORIES, CATEGORY_COUNT, Category, SettingDescriptor, SettingKind, ValueRange};
pub use model::{Choice, Flag, Number, Settings};
pub use nav::{CHANGE_TAB_HOLD, NavOutcome, NavView, Navigator};
pub use store::{Persist, SettingsCell, SettingsStore, StoreError, Volatile};

use crate::board::InputSource;
use crate::kernel::{ScreenShared, display_task};
use crate::ui::{Metrics, Surface};

use super::Transition;

/// Shared state between the settings logic and its display task.
pub type SettingsShared = ScreenShared<NavView>;

pub struct SettingsScreen<'a, St: SettingsStore, H: SubScreenHost<'a>> {
    shared: &'a SettingsShared,
    store: &'a St,
    host: H,
    nav: Navigator,
}

impl<'a, St: SettingsStore, H: SubScreenHost<'a>> SettingsScreen<'a, St, H> {
    pub fn new(shared: &'a SettingsShared, store: &'a St, host: H) -> Self {
        Self {
            shared,
            store,
            host,
            nav: Navigator::new(),
        }
    }

    #[inline]
    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    /// The sub-screen host, for the launcher to inspect.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Lets the launcher tear down a running sub-screen (sleep, power
    /// off) without routing a button cycle through `poll`.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Start on the first tab with the tab bar focused and ask for the
    /// first frame.  The display task should be spawned after this.
    pub fn on_enter(&mut self) {
        self.nav.reset();
        self.shared.open();
        self.refresh();
        log::info!("settings: enter");
    }

    /// One logic cycle.  While a sub-screen runs, input is its alone.
    pub async fn poll<I: InputSource>(&mut self, input: &I) -> Transition {
        if self.shared.sub_screen_active() {
            self.host.poll(input);
            return Transition::None;
        }

        match self.nav.step(input) {
            NavOutcome::Idle => Transition::None,
            NavOutcome::Moved => {
                self.refresh();
                Transition::None
            }
            NavOutcome::CategoryChanged => {
                if let Some(cat) = self.nav.view().current() {
                    log::info!("settings: tab {}", cat.name);
                }
                self.refresh();
                Transition::None
            }
            NavOutcome::Activate(row) => {
                self.activate(row).await;
                self.refresh();
                Transition::None
            }
            NavOutcome::Exit => {
                self.persist();
                Transition::Home
            }
        }
    }

    /// Stop the display task; waits for a frame in progress to finish.
    pub async fn on_exit(&mut self) {
        self.shared.shutdown().await;
        log::info!("settings: exit");
    }

    async fn activate(&mut self, row: usize) {
        let Some(desc) = self.nav.settings().get(row) else {
            return;
        };

        match desc.kind {
            SettingKind::Action(target) => {
                actions::dispatch(self.shared, &mut self.host, target).await;
            }
            kind => {
                if !self.store.write(|s| mutate::advance(&kind, s)) {
                    return;
                }
            }
        }
        self.persist();
    }

    fn refresh(&self) {
        self.shared.publish(self.nav.view());
        self.shared.request_redraw();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save() {
            log::error!("settings: save failed: {}", e);
        }
    }
}

/// Display task body for the settings screen; returns once
/// `SettingsScreen::on_exit` has run.
pub async fn run_display<S: Surface, St: SettingsStore>(
    shared: &SettingsShared,
    surface: &mut S,
    store: &St,
    metrics: Metrics,
) {
    display_task(shared, |view| render::render(surface, store, view, &metrics)).await
}
