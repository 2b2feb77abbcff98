// Confirm-to-advance rules for bound settings.
//
// Toggle flips, Enum steps forward and wraps to the first label,
// Value climbs by `step` and wraps to `min` once the next step would
// pass `max` (sawtooth; the last value shown may be below `max`).
// Action rows are not values and are left to the dispatcher.

use super::catalog::{SettingKind, ValueRange};
use super::model::Settings;

#[inline]
pub const fn next_toggle(current: bool) -> bool {
    !current
}

/// `None` when there are no labels to step through.
#[inline]
pub const fn next_choice(current: u8, label_count: usize) -> Option<u8> {
    if label_count == 0 {
        return None;
    }
    Some(((current as usize + 1) % label_count) as u8)
}

#[inline]
pub const fn next_value(current: i8, range: ValueRange) -> i8 {
    let next = current as i16 + range.step as i16;
    if next > range.max as i16 {
        range.min
    } else {
        next as i8
    }
}

/// Advance the field bound to `kind`; returns false when nothing was
/// written (action rows, enum without labels).
pub fn advance(kind: &SettingKind, settings: &mut Settings) -> bool {
    match *kind {
        SettingKind::Toggle(field) => {
            let v = next_toggle(settings.flag(field));
            settings.set_flag(field, v);
            log::debug!("settings: {} -> {}", field.key(), v);
            true
        }
        SettingKind::Enum { field, labels } => {
            let Some(v) = next_choice(settings.choice(field), labels.len()) else {
                log::warn!("settings: {} has no labels", field.key());
                return false;
            };
            settings.set_choice(field, v);
            log::debug!("settings: {} -> {}", field.key(), labels[v as usize]);
            true
        }
        SettingKind::Value { field, range } => {
            let v = next_value(settings.number(field), range);
            settings.set_number(field, v);
            log::debug!("settings: {} -> {}", field.key(), v);
            true
        }
        SettingKind::Action(_) => false,
    }
}
