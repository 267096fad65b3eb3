//! Bordered text rendering of a grid.
//!
//! ```text
//! +-----+
//! |*| | |
//! | |*|*|
//! +-----+
//! ```
//!
//! The top and bottom borders are `+`, `2 * width - 1` dashes, `+`. Each
//! row is `|` followed by one glyph and one `|` per column. Live cells are
//! `*`, dead cells a space.

use std::fmt::{self, Write};

use lifegrid_core::CellReader;

/// ANSI sequence that clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[0;0H";

fn border<W: Write>(out: &mut W, width: u32) -> fmt::Result {
    out.write_char('+')?;
    for _ in 1..2 * width {
        out.write_char('-')?;
    }
    out.write_str("+\n")
}

/// Append the bordered rendering of `grid` to `out`.
pub fn render_into<R, W>(grid: &R, out: &mut W) -> fmt::Result
where
    R: CellReader + ?Sized,
    W: Write,
{
    let (width, height) = grid.dimensions();
    border(out, width)?;
    for y in 0..height as i32 {
        out.write_char('|')?;
        for x in 0..width as i32 {
            out.write_char(grid.read(x, y).glyph())?;
            out.write_char('|')?;
        }
        out.write_char('\n')?;
    }
    border(out, width)
}

/// Formats a grid as its bordered rendering.
pub struct Frame<'a, R: ?Sized>(pub &'a R);

impl<R: CellReader + ?Sized> fmt::Display for Frame<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_into(self.0, f)
    }
}

/// Bordered rendering of `grid`, one line per row plus the two borders.
pub fn render<R: CellReader + ?Sized>(grid: &R) -> String {
    Frame(grid).to_string()
}
