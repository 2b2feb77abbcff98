// Rendering surface seam between screen logic and the panel.
//
// Screens describe *what* to draw (header, tabs, list rows, hints)
// and the surface decides pixels.  GfxSurface is the embedded-graphics
// implementation used on the device; tests record calls instead.

use super::widget::Region;

/// One entry of the category tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab<'a> {
    pub label: &'a str,
    pub active: bool,
}

/// Layout metrics shared by every theme-aware screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub top_padding: u16,
    pub header_height: u16,
    pub tab_bar_height: u16,
    pub vertical_spacing: u16,
    pub button_hints_height: u16,
    pub list_row_height: u16,
    pub version_text_right_x: u16,
    pub version_text_y: u16,
}

impl Metrics {
    pub const fn classic() -> Self {
        Self {
            top_padding: 4,
            header_height: 44,
            tab_bar_height: 40,
            vertical_spacing: 8,
            button_hints_height: 28,
            list_row_height: 44,
            version_text_right_x: 12,
            version_text_y: 8,
        }
    }

    #[inline]
    pub const fn header_region(&self, width: u16) -> Region {
        Region::new(0, self.top_padding, width, self.header_height)
    }

    #[inline]
    pub const fn tab_bar_region(&self, width: u16) -> Region {
        Region::new(
            0,
            self.top_padding + self.header_height,
            width,
            self.tab_bar_height,
        )
    }

    // area between the tab bar and the button hints
    pub fn list_region(&self, width: u16, height: u16) -> Region {
        let top = self.top_padding + self.header_height + self.tab_bar_height + self.vertical_spacing;
        let reserved = self.top_padding
            + self.header_height
            + self.tab_bar_height
            + self.button_hints_height
            + self.vertical_spacing * 2;
        Region::new(0, top, width, height.saturating_sub(reserved))
    }

    pub fn rows_per_page(&self, list: Region) -> usize {
        if self.list_row_height == 0 {
            return 0;
        }
        (list.h / self.list_row_height) as usize
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::classic()
    }
}

pub trait Surface {
    /// Logical (width, height) in pixels.
    fn size(&self) -> (u16, u16);

    fn clear(&mut self);

    fn draw_header(&mut self, area: Region, title: &str);

    /// `focused` is true while the tab row itself holds the cursor.
    fn draw_tab_bar(&mut self, area: Region, tabs: &[Tab<'_>], focused: bool);

    fn draw_list_row(&mut self, area: Region, label: &str, value: &str, selected: bool);

    /// Labels in physical order: back, confirm, previous, next.
    fn draw_button_hints(&mut self, hints: &[&str; 4]);

    /// `y` is the top of the text line.
    fn draw_text(&mut self, x: u16, y: u16, text: &str);

    fn text_width(&self, text: &str) -> u16;

    /// Push the frame to the panel (full refresh).
    fn flush(&mut self);
}
