// Screens and how they hand control back to the launcher.

pub mod settings;

/// What the launcher should do after a screen's logic cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    /// Leave this screen and return to the home screen.
    Home,
}
