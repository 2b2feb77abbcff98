// Focus state for the settings screen.
//
// Position 0 is the tab bar, 1..=count are the rows of the current
// category.  Up/Left and Down/Right walk that ring; holding Up/Down
// past CHANGE_TAB_HOLD switches category.  Exactly one transition per
// logic cycle, checked in this order: Confirm, Back, hold gesture,
// plain direction.

use embassy_time::Duration;

use crate::board::{Button, InputSource};
use crate::ui::{wrap_next, wrap_prev};

use super::catalog::{CATEGORIES, Category, SettingDescriptor};

/// Hold Up/Down this long and release to jump a whole category.
pub const CHANGE_TAB_HOLD: Duration = Duration::from_millis(700);

/// What the display task needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct NavView {
    pub categories: &'static [Category],
    pub category: usize,
    pub selected: usize,
}

impl NavView {
    pub const fn initial() -> Self {
        Self {
            categories: &CATEGORIES,
            category: 0,
            selected: 0,
        }
    }

    pub fn current(&self) -> Option<&'static Category> {
        self.categories.get(self.category)
    }

    /// Focused row, `None` while the tab bar has focus.
    pub fn selected_row(&self) -> Option<usize> {
        self.selected.checked_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Idle,
    Moved,
    CategoryChanged,
    /// Confirm on a row; the index is into the current category.
    Activate(usize),
    Exit,
}

pub struct Navigator {
    categories: &'static [Category],
    category: usize,
    selected: usize,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub const fn new() -> Self {
        Self::with_categories(&CATEGORIES)
    }

    pub const fn with_categories(categories: &'static [Category]) -> Self {
        Self {
            categories,
            category: 0,
            selected: 0,
        }
    }

    pub fn reset(&mut self) {
        self.category = 0;
        self.selected = 0;
    }

    #[inline]
    pub fn category_index(&self) -> usize {
        self.category
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn settings(&self) -> &'static [SettingDescriptor] {
        self.categories
            .get(self.category)
            .map(|c| c.settings)
            .unwrap_or(&[])
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.settings().len()
    }

    pub fn view(&self) -> NavView {
        NavView {
            categories: self.categories,
            category: self.category,
            selected: self.selected,
        }
    }

    pub fn step<I: InputSource>(&mut self, input: &I) -> NavOutcome {
        if input.was_pressed(Button::Confirm) {
            return self.confirm();
        }

        if input.was_pressed(Button::Back) {
            return NavOutcome::Exit;
        }

        let up = input.was_released(Button::Up);
        let down = input.was_released(Button::Down);
        // up wins when both land in one cycle, as for plain moves
        if (up || down) && input.held_time() > CHANGE_TAB_HOLD {
            self.switch_category(!up);
            return NavOutcome::CategoryChanged;
        }

        // first match wins when several edges land in one cycle
        if up || input.was_released(Button::Left) {
            return self.move_focus(false);
        }
        if down || input.was_released(Button::Right) {
            return self.move_focus(true);
        }

        NavOutcome::Idle
    }

    fn confirm(&mut self) -> NavOutcome {
        match self.selected.checked_sub(1) {
            None => {
                self.switch_category(true);
                NavOutcome::CategoryChanged
            }
            Some(row) if row < self.count() => NavOutcome::Activate(row),
            Some(row) => {
                log::warn!("settings: focus {} past end of list", row);
                NavOutcome::Idle
            }
        }
    }

    fn switch_category(&mut self, forward: bool) {
        let n = self.categories.len();
        self.category = if forward {
            wrap_next(self.category, n)
        } else {
            wrap_prev(self.category, n)
        };
        // land on the tab bar only if we came from it or there is no row
        self.selected = if self.selected == 0 || self.count() == 0 {
            0
        } else {
            1
        };
        log::debug!("settings: category {}", self.category);
    }

    fn move_focus(&mut self, forward: bool) -> NavOutcome {
        let count = self.count();
        if count == 0 {
            return NavOutcome::Idle;
        }
        let ring = count + 1;
        self.selected = if forward {
            wrap_next(self.selected, ring)
        } else {
            wrap_prev(self.selected, ring)
        };
        NavOutcome::Moved
    }
}
