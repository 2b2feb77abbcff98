// Static settings catalogue: descriptors grouped into the four tabs.
//
// Everything here is static data; no allocation, nothing mutable.
// Enum label order is the stored index order, so never reorder labels
// of a shipped setting (sleep screen labels follow SLEEP_SCREEN_MODE).

use super::actions::SubScreen;
use super::model::{Choice, Flag, Number};

/// Inclusive bounds and increment of a numeric setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i8,
    pub max: i8,
    pub step: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Toggle(Flag),
    Enum {
        field: Choice,
        labels: &'static [&'static str],
    },
    Value {
        field: Number,
        range: ValueRange,
    },
    /// Opens a sub-screen; has no bound value.
    Action(SubScreen),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDescriptor {
    pub name: &'static str,
    pub kind: SettingKind,
}

impl SettingDescriptor {
    pub const fn toggle(name: &'static str, field: Flag) -> Self {
        Self {
            name,
            kind: SettingKind::Toggle(field),
        }
    }

    pub const fn choice(
        name: &'static str,
        field: Choice,
        labels: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            kind: SettingKind::Enum { field, labels },
        }
    }

    pub const fn value(name: &'static str, field: Number, min: i8, max: i8, step: i8) -> Self {
        Self {
            name,
            kind: SettingKind::Value {
                field,
                range: ValueRange { min, max, step },
            },
        }
    }

    pub const fn action(name: &'static str, target: SubScreen) -> Self {
        Self {
            name,
            kind: SettingKind::Action(target),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub settings: &'static [SettingDescriptor],
}

impl Category {
    #[inline]
    pub const fn len(&self) -> usize {
        self.settings.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

pub const CATEGORY_COUNT: usize = 4;

static DISPLAY: [SettingDescriptor; 7] = [
    SettingDescriptor::choice(
        "Sleep Screen",
        Choice::SleepScreen,
        &["Dark", "Light", "Custom", "Cover", "None", "Cover + Custom"],
    ),
    SettingDescriptor::choice(
        "Sleep Screen Cover Mode",
        Choice::SleepScreenCoverMode,
        &["Fit", "Crop"],
    ),
    SettingDescriptor::choice(
        "Sleep Screen Cover Filter",
        Choice::SleepScreenCoverFilter,
        &["None", "Contrast", "Inverted"],
    ),
    SettingDescriptor::choice(
        "Status Bar",
        Choice::StatusBar,
        &[
            "None",
            "No Progress",
            "Full w/ Percentage",
            "Full w/ Progress Bar",
            "Progress Bar",
        ],
    ),
    SettingDescriptor::choice(
        "Hide Battery %",
        Choice::HideBatteryPercentage,
        &["Never", "In Reader", "Always"],
    ),
    SettingDescriptor::choice(
        "Refresh Frequency",
        Choice::RefreshFrequency,
        &["1 page", "5 pages", "10 pages", "15 pages", "30 pages"],
    ),
    SettingDescriptor::choice("UI Theme", Choice::UiTheme, &["Classic", "Lyra"]),
];

static READER: [SettingDescriptor; 9] = [
    SettingDescriptor::choice(
        "Font Family",
        Choice::FontFamily,
        &["Bookerly", "Noto Sans", "Open Dyslexic"],
    ),
    SettingDescriptor::choice(
        "Font Size",
        Choice::FontSize,
        &["Small", "Medium", "Large", "X Large"],
    ),
    SettingDescriptor::choice(
        "Line Spacing",
        Choice::LineSpacing,
        &["Tight", "Normal", "Wide"],
    ),
    SettingDescriptor::value("Screen Margin", Number::ScreenMargin, 5, 40, 5),
    SettingDescriptor::choice(
        "Paragraph Alignment",
        Choice::ParagraphAlignment,
        &["Justify", "Left", "Center", "Right"],
    ),
    SettingDescriptor::toggle("Hyphenation", Flag::Hyphenation),
    SettingDescriptor::choice(
        "Reading Orientation",
        Choice::Orientation,
        &["Portrait", "Landscape CW", "Inverted", "Landscape CCW"],
    ),
    SettingDescriptor::toggle("Extra Paragraph Spacing", Flag::ExtraParagraphSpacing),
    SettingDescriptor::toggle("Text Anti-Aliasing", Flag::TextAntiAliasing),
];

static CONTROLS: [SettingDescriptor; 4] = [
    SettingDescriptor::action("Remap Front Buttons", SubScreen::ButtonRemap),
    SettingDescriptor::choice(
        "Side Button Layout (reader)",
        Choice::SideButtonLayout,
        &["Prev, Next", "Next, Prev"],
    ),
    SettingDescriptor::toggle("Long-press Chapter Skip", Flag::LongPressChapterSkip),
    SettingDescriptor::choice(
        "Short Power Button Click",
        Choice::ShortPowerButton,
        &["Ignore", "Sleep", "Page Turn"],
    ),
];

static SYSTEM: [SettingDescriptor; 5] = [
    SettingDescriptor::choice(
        "Time to Sleep",
        Choice::SleepTimeout,
        &["1 min", "5 min", "10 min", "15 min", "30 min"],
    ),
    SettingDescriptor::action("KOReader Sync", SubScreen::KoReaderSync),
    SettingDescriptor::action("OPDS Browser", SubScreen::OpdsBrowser),
    SettingDescriptor::action("Clear Cache", SubScreen::ClearCache),
    SettingDescriptor::action("Check for updates", SubScreen::OtaUpdate),
];

pub static CATEGORIES: [Category; CATEGORY_COUNT] = [
    Category {
        name: "Display",
        settings: &DISPLAY,
    },
    Category {
        name: "Reader",
        settings: &READER,
    },
    Category {
        name: "Controls",
        settings: &CONTROLS,
    },
    Category {
        name: "System",
        settings: &SYSTEM,
    },
];
