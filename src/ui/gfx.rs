// embedded-graphics backed Surface.
//
// Draws into any BinaryColor DrawTarget (the EPD framebuffer on the
// device).  Selection uses inverted text, same as the other pulp-os
// lists; the tab row gets an underline when it does not hold focus.
// `flush` hands the finished frame to the caller's refresh hook.

use embedded_graphics::Drawable;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::prelude::{Point, Primitive, Size};
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::pixelcolor::BinaryColor;

use super::surface::{Surface, Tab};
use super::widget::{Alignment, Region};

const HEADING_FONT: &MonoFont<'static> = &FONT_10X20;
const BODY_FONT: &MonoFont<'static> = &FONT_9X15;
const SMALL_FONT: &MonoFont<'static> = &FONT_6X10;

const SIDE_PAD: u16 = 16;
const HINT_H: u16 = 24;
const UNDERLINE_H: u16 = 2;

fn measure(font: &MonoFont<'_>, text: &str) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    n * font.character_size.width + (n - 1) * font.character_spacing
}

pub struct GfxSurface<D, F>
where
    D: DrawTarget<Color = BinaryColor>,
    F: FnMut(&mut D),
{
    target: D,
    on_flush: F,
}

impl<D, F> GfxSurface<D, F>
where
    D: DrawTarget<Color = BinaryColor>,
    F: FnMut(&mut D),
{
    pub fn new(target: D, on_flush: F) -> Self {
        Self { target, on_flush }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    fn fill(&mut self, area: Region, color: BinaryColor) {
        let _ = area
            .to_rect()
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target);
    }

    fn hline(&mut self, x: u16, y: u16, w: u16) {
        let start = Point::new(x as i32, y as i32);
        let end = Point::new((x + w.saturating_sub(1)) as i32, y as i32);
        let _ = Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.target);
    }

    fn label(
        &mut self,
        area: Region,
        text: &str,
        font: &MonoFont<'static>,
        alignment: Alignment,
        inverted: bool,
    ) {
        let (bg, fg) = if inverted {
            (BinaryColor::On, BinaryColor::Off)
        } else {
            (BinaryColor::Off, BinaryColor::On)
        };
        if inverted {
            self.fill(area, bg);
        }
        if text.is_empty() {
            return;
        }

        let size = Size::new(measure(font, text), font.character_size.height);
        let pos = alignment.position(area, size);
        let style = MonoTextStyle::new(font, fg);
        let _ = Text::with_baseline(text, pos, style, Baseline::Top).draw(&mut self.target);
    }
}

impl<D, F> Surface for GfxSurface<D, F>
where
    D: DrawTarget<Color = BinaryColor>,
    F: FnMut(&mut D),
{
    fn size(&self) -> (u16, u16) {
        let size = self.target.bounding_box().size;
        (size.width as u16, size.height as u16)
    }

    fn clear(&mut self) {
        let _ = self.target.clear(BinaryColor::Off);
    }

    fn draw_header(&mut self, area: Region, title: &str) {
        self.label(
            area.inset_x(SIDE_PAD),
            title,
            HEADING_FONT,
            Alignment::CenterLeft,
            false,
        );
        self.hline(area.x, area.bottom().saturating_sub(1), area.w);
    }

    fn draw_tab_bar(&mut self, area: Region, tabs: &[Tab<'_>], focused: bool) {
        if tabs.is_empty() {
            return;
        }
        let tab_w = area.w / tabs.len() as u16;
        for (i, tab) in tabs.iter().enumerate() {
            let cell = area.column(i as u16 * tab_w, tab_w);
            self.label(
                cell,
                tab.label,
                BODY_FONT,
                Alignment::Center,
                tab.active && focused,
            );
            if tab.active && !focused {
                let underline = Region::new(
                    cell.x,
                    cell.bottom().saturating_sub(UNDERLINE_H),
                    cell.w,
                    UNDERLINE_H,
                );
                self.fill(underline, BinaryColor::On);
            }
        }
    }

    fn draw_list_row(&mut self, area: Region, label: &str, value: &str, selected: bool) {
        if selected {
            self.fill(area, BinaryColor::On);
        }
        let inner = area.inset_x(SIDE_PAD);
        self.label(inner, label, BODY_FONT, Alignment::CenterLeft, selected);
        self.label(inner, value, BODY_FONT, Alignment::CenterRight, selected);
    }

    fn draw_button_hints(&mut self, hints: &[&str; 4]) {
        let (w, h) = self.size();
        let y = h.saturating_sub(HINT_H);
        let slot_w = w / hints.len() as u16;
        self.hline(0, y, w);
        for (i, hint) in hints.iter().enumerate() {
            let slot = Region::new(i as u16 * slot_w, y, slot_w, HINT_H);
            self.label(slot, hint, SMALL_FONT, Alignment::Center, false);
        }
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) {
        let style = MonoTextStyle::new(SMALL_FONT, BinaryColor::On);
        let _ = Text::with_baseline(
            text,
            Point::new(x as i32, y as i32),
            style,
            Baseline::Top,
        )
        .draw(&mut self.target);
    }

    fn text_width(&self, text: &str) -> u16 {
        measure(SMALL_FONT, text) as u16
    }

    fn flush(&mut self) {
        (self.on_flush)(&mut self.target);
    }
}
