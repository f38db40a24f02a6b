//! Slot geometry.
//!
//! Slots are never stored: the rectangle for a name is derived from its
//! position in the list and the tile size.

use std::fmt;

/// A source rectangle in sprite sheet pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    /// Rectangle of the slot at `index` in a vertical strip of `tile` sized squares.
    pub fn slot(index: usize, tile: u32) -> Self {
        Self {
            x: 0,
            y: index as u32 * tile,
            w: tile,
            h: tile,
        }
    }

    /// ImageMagick geometry string, `WxH+X+Y`.
    pub fn geometry(&self) -> String {
        format!("{}x{}+{}+{}", self.w, self.h, self.x, self.y)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.geometry())
    }
}

/// A named slot with its computed rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<'a> {
    pub index: usize,
    pub name: &'a str,
    pub rect: Rect,
}

/// Pair every name with its slot rectangle, in list order.
pub fn slots<'a>(names: &'a [String], tile: u32) -> impl Iterator<Item = Slot<'a>> + 'a {
    names.iter().enumerate().map(move |(index, name)| Slot {
        index,
        name: name.as_str(),
        rect: Rect::slot(index, tile),
    })
}
