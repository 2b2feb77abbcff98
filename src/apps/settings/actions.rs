// Action rows hand the panel to a sub-screen.
//
// Handoff happens under the render lock so it never overlaps a
// refresh in progress.  While the sub-screen runs, the settings screen
// forwards input to it and draws nothing; the sub-screen gives the
// panel back by consuming its Completion.

use core::fmt;

use crate::board::InputSource;
use crate::kernel::{Completion, ScreenShared};

use super::nav::NavView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubScreen {
    ButtonRemap,
    KoReaderSync,
    OpdsBrowser,
    ClearCache,
    OtaUpdate,
}

impl SubScreen {
    pub const ALL: [SubScreen; 5] = [
        SubScreen::ButtonRemap,
        SubScreen::KoReaderSync,
        SubScreen::OpdsBrowser,
        SubScreen::ClearCache,
        SubScreen::OtaUpdate,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SubScreen::ButtonRemap => "button remap",
            SubScreen::KoReaderSync => "KOReader sync",
            SubScreen::OpdsBrowser => "OPDS browser",
            SubScreen::ClearCache => "clear cache",
            SubScreen::OtaUpdate => "OTA update",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchError {
    /// The host has no screen for this action.
    Unsupported(SubScreen),
    /// The host is still running another sub-screen.
    Busy,
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(s) => write!(f, "no {} screen", s.name()),
            Self::Busy => f.write_str("sub-screen already running"),
        }
    }
}

/// Owner of the sub-screens the settings screen can open.
pub trait SubScreenHost<'a> {
    /// Start `target`.  On success the host keeps `done` and finishes
    /// it when the sub-screen exits; on error it drops it.
    fn launch(&mut self, target: SubScreen, done: Completion<'a>) -> Result<(), LaunchError>;

    /// One logic cycle of the running sub-screen.
    fn poll<I: InputSource>(&mut self, input: &I);
}

/// Host with no sub-screens; every launch is refused.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSubScreens;

impl<'a> SubScreenHost<'a> for NoSubScreens {
    fn launch(&mut self, target: SubScreen, _done: Completion<'a>) -> Result<(), LaunchError> {
        Err(LaunchError::Unsupported(target))
    }

    fn poll<I: InputSource>(&mut self, _input: &I) {}
}

/// Open `target` on `host`.  Returns true if the sub-screen took over.
pub async fn dispatch<'a, H: SubScreenHost<'a>>(
    shared: &'a ScreenShared<NavView>,
    host: &mut H,
    target: SubScreen,
) -> bool {
    let _guard = shared.lock_render().await;
    shared.begin_sub_screen();

    match host.launch(target, shared.completion()) {
        Ok(()) => {
            log::info!("settings: opened {}", target.name());
            true
        }
        Err(e) => {
            shared.end_sub_screen();
            log::warn!("settings: {} not opened: {}", target.name(), e);
            false
        }
    }
}
