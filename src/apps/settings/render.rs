// Settings frame: header, category tabs, one page of rows, firmware
// version and button hints.  Runs on the display task under the
// render lock; reads values straight from the store so a row always
// shows the value as it is now, not as it was when redraw was asked.

use core::fmt::Write as _;

use crate::ui::{Metrics, Region, StackFmt, Surface, Tab};

use super::catalog::{CATEGORY_COUNT, SettingKind};
use super::model::Settings;
use super::nav::NavView;
use super::store::SettingsStore;

pub const TITLE: &str = "Settings";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const HINTS: [&str; 4] = ["\u{ab} Back", "Toggle", "Up", "Down"];

/// Display text of a row's current value; actions show nothing.
pub fn value_text<const N: usize>(kind: &SettingKind, settings: &Settings, out: &mut StackFmt<N>) {
    out.clear();
    match *kind {
        SettingKind::Toggle(field) => {
            out.write_str(if settings.flag(field) { "ON" } else { "OFF" }).ok();
        }
        SettingKind::Enum { field, labels } => {
            if let Some(label) = labels.get(settings.choice(field) as usize) {
                out.write_str(label).ok();
            }
        }
        SettingKind::Value { field, .. } => {
            write!(out, "{}", settings.number(field)).ok();
        }
        SettingKind::Action(_) => {}
    }
}

/// First row of the page holding `row`.
#[inline]
fn page_start(row: usize, per_page: usize) -> usize {
    if per_page == 0 { 0 } else { row - row % per_page }
}

pub fn render<S: Surface, St: SettingsStore>(
    surface: &mut S,
    store: &St,
    view: NavView,
    metrics: &Metrics,
) {
    let (w, h) = surface.size();
    surface.clear();

    surface.draw_header(metrics.header_region(w), TITLE);

    let mut tabs = [Tab {
        label: "",
        active: false,
    }; CATEGORY_COUNT];
    let shown = view.categories.len().min(CATEGORY_COUNT);
    for (i, (tab, cat)) in tabs.iter_mut().zip(view.categories).enumerate() {
        *tab = Tab {
            label: cat.name,
            active: i == view.category,
        };
    }
    surface.draw_tab_bar(metrics.tab_bar_region(w), &tabs[..shown], view.selected == 0);

    if let Some(category) = view.current() {
        let list = metrics.list_region(w, h);
        let per_page = metrics.rows_per_page(list);
        let focus = view.selected_row();
        let first = page_start(focus.unwrap_or(0), per_page);
        let settings = store.snapshot();
        let mut value = StackFmt::<32>::new();

        for (slot, (i, desc)) in category
            .settings
            .iter()
            .enumerate()
            .skip(first)
            .take(per_page)
            .enumerate()
        {
            let area = Region::new(
                list.x,
                list.y + slot as u16 * metrics.list_row_height,
                list.w,
                metrics.list_row_height,
            );
            value_text(&desc.kind, &settings, &mut value);
            surface.draw_list_row(area, desc.name, value.as_str(), focus == Some(i));
        }
    }

    let x = w
        .saturating_sub(metrics.version_text_right_x)
        .saturating_sub(surface.text_width(VERSION));
    surface.draw_text(x, metrics.version_text_y, VERSION);

    surface.draw_button_hints(&HINTS);
    surface.flush();
}
