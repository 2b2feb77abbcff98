// In-memory settings values and the typed field identifiers that
// descriptors bind to.  One identifier enum per value kind, so a
// toggle can never be bound to an index field and vice versa.

use super::catalog::{CATEGORIES, SettingKind};

/// Boolean fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Hyphenation,
    ExtraParagraphSpacing,
    TextAntiAliasing,
    LongPressChapterSkip,
}

/// Enumerated fields, stored as an index into the descriptor's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    SleepScreen,
    SleepScreenCoverMode,
    SleepScreenCoverFilter,
    StatusBar,
    HideBatteryPercentage,
    RefreshFrequency,
    UiTheme,
    FontFamily,
    FontSize,
    LineSpacing,
    ParagraphAlignment,
    Orientation,
    SideButtonLayout,
    ShortPowerButton,
    SleepTimeout,
}

/// Bounded numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    ScreenMargin,
}

impl Flag {
    pub const fn key(self) -> &'static str {
        match self {
            Flag::Hyphenation => "hyphenation",
            Flag::ExtraParagraphSpacing => "extra_paragraph_spacing",
            Flag::TextAntiAliasing => "text_anti_aliasing",
            Flag::LongPressChapterSkip => "long_press_chapter_skip",
        }
    }
}

impl Choice {
    pub const fn key(self) -> &'static str {
        match self {
            Choice::SleepScreen => "sleep_screen",
            Choice::SleepScreenCoverMode => "sleep_screen_cover_mode",
            Choice::SleepScreenCoverFilter => "sleep_screen_cover_filter",
            Choice::StatusBar => "status_bar",
            Choice::HideBatteryPercentage => "hide_battery_percentage",
            Choice::RefreshFrequency => "refresh_frequency",
            Choice::UiTheme => "ui_theme",
            Choice::FontFamily => "font_family",
            Choice::FontSize => "font_size",
            Choice::LineSpacing => "line_spacing",
            Choice::ParagraphAlignment => "paragraph_alignment",
            Choice::Orientation => "orientation",
            Choice::SideButtonLayout => "side_button_layout",
            Choice::ShortPowerButton => "short_pwr_btn",
            Choice::SleepTimeout => "sleep_timeout",
        }
    }
}

impl Number {
    pub const fn key(self) -> &'static str {
        match self {
            Number::ScreenMargin => "screen_margin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    // display
    pub sleep_screen: u8,
    pub sleep_screen_cover_mode: u8,
    pub sleep_screen_cover_filter: u8,
    pub status_bar: u8,
    pub hide_battery_percentage: u8,
    pub refresh_frequency: u8,
    pub ui_theme: u8,
    // reader
    pub font_family: u8,
    pub font_size: u8,
    pub line_spacing: u8,
    pub screen_margin: i8, // px, 5..=40
    pub paragraph_alignment: u8,
    pub hyphenation: bool,
    pub orientation: u8,
    pub extra_paragraph_spacing: bool,
    pub text_anti_aliasing: bool,
    // controls
    pub side_button_layout: u8,
    pub long_press_chapter_skip: bool,
    pub short_pwr_btn: u8,
    // system
    pub sleep_timeout: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Settings {
    pub const fn defaults() -> Self {
        Self {
            sleep_screen: 0,
            sleep_screen_cover_mode: 0,
            sleep_screen_cover_filter: 0,
            status_bar: 2,
            hide_battery_percentage: 0,
            refresh_frequency: 3,
            ui_theme: 0,
            font_family: 0,
            font_size: 1,
            line_spacing: 1,
            screen_margin: 5,
            paragraph_alignment: 0,
            hyphenation: false,
            orientation: 0,
            extra_paragraph_spacing: true,
            text_anti_aliasing: true,
            side_button_layout: 0,
            long_press_chapter_skip: true,
            short_pwr_btn: 0,
            sleep_timeout: 2,
        }
    }

    pub fn flag(&self, field: Flag) -> bool {
        match field {
            Flag::Hyphenation => self.hyphenation,
            Flag::ExtraParagraphSpacing => self.extra_paragraph_spacing,
            Flag::TextAntiAliasing => self.text_anti_aliasing,
            Flag::LongPressChapterSkip => self.long_press_chapter_skip,
        }
    }

    pub fn set_flag(&mut self, field: Flag, value: bool) {
        let slot = match field {
            Flag::Hyphenation => &mut self.hyphenation,
            Flag::ExtraParagraphSpacing => &mut self.extra_paragraph_spacing,
            Flag::TextAntiAliasing => &mut self.text_anti_aliasing,
            Flag::LongPressChapterSkip => &mut self.long_press_chapter_skip,
        };
        *slot = value;
    }

    fn choice_slot(&mut self, field: Choice) -> &mut u8 {
        match field {
            Choice::SleepScreen => &mut self.sleep_screen,
            Choice::SleepScreenCoverMode => &mut self.sleep_screen_cover_mode,
            Choice::SleepScreenCoverFilter => &mut self.sleep_screen_cover_filter,
            Choice::StatusBar => &mut self.status_bar,
            Choice::HideBatteryPercentage => &mut self.hide_battery_percentage,
            Choice::RefreshFrequency => &mut self.refresh_frequency,
            Choice::UiTheme => &mut self.ui_theme,
            Choice::FontFamily => &mut self.font_family,
            Choice::FontSize => &mut self.font_size,
            Choice::LineSpacing => &mut self.line_spacing,
            Choice::ParagraphAlignment => &mut self.paragraph_alignment,
            Choice::Orientation => &mut self.orientation,
            Choice::SideButtonLayout => &mut self.side_button_layout,
            Choice::ShortPowerButton => &mut self.short_pwr_btn,
            Choice::SleepTimeout => &mut self.sleep_timeout,
        }
    }

    pub fn choice(&self, field: Choice) -> u8 {
        match field {
            Choice::SleepScreen => self.sleep_screen,
            Choice::SleepScreenCoverMode => self.sleep_screen_cover_mode,
            Choice::SleepScreenCoverFilter => self.sleep_screen_cover_filter,
            Choice::StatusBar => self.status_bar,
            Choice::HideBatteryPercentage => self.hide_battery_percentage,
            Choice::RefreshFrequency => self.refresh_frequency,
            Choice::UiTheme => self.ui_theme,
            Choice::FontFamily => self.font_family,
            Choice::FontSize => self.font_size,
            Choice::LineSpacing => self.line_spacing,
            Choice::ParagraphAlignment => self.paragraph_alignment,
            Choice::Orientation => self.orientation,
            Choice::SideButtonLayout => self.side_button_layout,
            Choice::ShortPowerButton => self.short_pwr_btn,
            Choice::SleepTimeout => self.sleep_timeout,
        }
    }

    pub fn set_choice(&mut self, field: Choice, value: u8) {
        *self.choice_slot(field) = value;
    }

    pub fn number(&self, field: Number) -> i8 {
        match field {
            Number::ScreenMargin => self.screen_margin,
        }
    }

    pub fn set_number(&mut self, field: Number, value: i8) {
        match field {
            Number::ScreenMargin => self.screen_margin = value,
        }
    }

    /// Pull loaded values back inside the catalogue's bounds: an enum
    /// index past its labels resets to the first label, a value
    /// outside its range is clamped.
    pub fn sanitize(&mut self) {
        for category in CATEGORIES.iter() {
            for desc in category.settings {
                match desc.kind {
                    SettingKind::Enum { field, labels } => {
                        if self.choice(field) as usize >= labels.len() {
                            log::warn!(
                                "settings: {} = {} out of range, reset",
                                field.key(),
                                self.choice(field)
                            );
                            self.set_choice(field, 0);
                        }
                    }
                    SettingKind::Value { field, range } => {
                        let v = self.number(field);
                        let clamped = v.clamp(range.min, range.max);
                        if clamped != v {
                            log::warn!("settings: {} = {} clamped", field.key(), v);
                            self.set_number(field, clamped);
                        }
                    }
                    SettingKind::Toggle(_) | SettingKind::Action(_) => {}
                }
            }
        }
    }
}
