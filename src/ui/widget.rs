// Region geometry, text alignment and ring navigation helpers.
// All coordinates are logical (rotation aware) screen pixels.

use embedded_graphics::{prelude::*, primitives::Rectangle};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Region {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn to_rect(self) -> Rectangle {
        Rectangle::new(
            Point::new(self.x as i32, self.y as i32),
            Size::new(self.w as u32, self.h as u32),
        )
    }

    #[inline]
    pub const fn bottom(self) -> u16 {
        self.y + self.h
    }

    // split off a `w`-wide column starting `offset` px from the left edge
    pub fn column(self, offset: u16, w: u16) -> Self {
        let x = self.x + offset.min(self.w);
        let w = w.min(self.x + self.w - x);
        Self::new(x, self.y, w, self.h)
    }

    // shrink by `pad` px on the left and right
    pub fn inset_x(self, pad: u16) -> Self {
        let pad = pad.min(self.w / 2);
        Self::new(self.x + pad, self.y, self.w - pad * 2, self.h)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Alignment {
    #[default]
    CenterLeft,
    Center,
    CenterRight,
}

impl Alignment {
    // top-left corner for content of `content_size` placed in `region`
    pub fn position(self, region: Region, content_size: Size) -> Point {
        let cw = content_size.width as i32;
        let ch = content_size.height as i32;
        let rx = region.x as i32;
        let ry = region.y as i32;
        let rw = region.w as i32;
        let rh = region.h as i32;

        match self {
            Alignment::CenterLeft => Point::new(rx, ry + (rh - ch) / 2),
            Alignment::Center => Point::new(rx + (rw - cw) / 2, ry + (rh - ch) / 2),
            Alignment::CenterRight => Point::new(rx + rw - cw, ry + (rh - ch) / 2),
        }
    }
}

// wrap-around ring navigation helpers

// advance index by one, wrapping past count-1 back to 0
#[inline]
pub fn wrap_next(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    if current + 1 >= count { 0 } else { current + 1 }
}

// retreat index by one, wrapping past 0 to count-1
#[inline]
pub fn wrap_prev(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    if current == 0 { count - 1 } else { current - 1 }
}
