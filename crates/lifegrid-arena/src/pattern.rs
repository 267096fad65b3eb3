//! Text pattern format and the built-in default pattern.
//!
//! A pattern is a sequence of lines read top to bottom; line `y` holds row
//! `y` and character `x` of that line holds column `x`. Only `'*'` marks a
//! live cell. There is no header and no explicit size: short lines and
//! missing rows are dead, and anything past the grid's fixed dimensions is
//! ignored.

use lifegrid_core::CellState;

/// Live cells of the default glider as `(x, y)` offsets.
///
/// Every four generations the shape reappears shifted by `(+1, +1)`.
pub const GLIDER: [(i32, i32); 5] = [(1, 2), (3, 1), (3, 2), (3, 3), (2, 3)];

/// Decode `source` into a row-major `width * height` buffer.
///
/// Every cell of `cells` is overwritten. Returns the number of live cells.
pub(crate) fn decode_into(source: &str, width: u32, height: u32, cells: &mut [CellState]) -> usize {
    debug_assert_eq!(cells.len(), width as usize * height as usize);
    cells.fill(CellState::Dead);

    let w = width as usize;
    let mut live = 0;
    for (y, line) in source.lines().take(height as usize).enumerate() {
        let row = &mut cells[y * w..(y + 1) * w];
        for (cell, ch) in row.iter_mut().zip(line.chars()) {
            *cell = CellState::from_char(ch);
            if cell.is_alive() {
                live += 1;
            }
        }
    }
    live
}

/// Encode a row-major buffer back into pattern text.
///
/// Dead cells become `'.'` and trailing dead cells of each row are
/// trimmed, so the output reloads to the same cells.
pub fn encode(cells: &[CellState], width: u32) -> String {
    let mut out = String::with_capacity(cells.len() + cells.len() / width.max(1) as usize);
    for row in cells.chunks(width.max(1) as usize) {
        let end = row.iter().rposition(|c| c.is_alive()).map_or(0, |i| i + 1);
        out.extend(
            row[..end]
                .iter()
                .map(|c| if c.is_alive() { CellState::ALIVE_CHAR } else { '.' }),
        );
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(source: &str, width: u32, height: u32) -> Vec<CellState> {
        let mut cells = vec![CellState::Alive; (width * height) as usize];
        decode_into(source, width, height, &mut cells);
        cells
    }

    fn alive_at(cells: &[CellState], width: u32) -> Vec<(usize, usize)> {
        cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| (i % width as usize, i / width as usize))
            .collect()
    }

    #[test]
    fn marks_only_asterisks() {
        let cells = decode(" * \n*.o\n", 3, 2);
        assert_eq!(alive_at(&cells, 3), vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn short_lines_and_missing_rows_are_dead() {
        let cells = decode("*\n", 4, 3);
        assert_eq!(alive_at(&cells, 4), vec![(0, 0)]);
    }

    #[test]
    fn overlong_lines_and_extra_rows_are_truncated() {
        let cells = decode("*****\n*****\n*****\n", 2, 2);
        assert_eq!(alive_at(&cells, 2).len(), 4);
    }

    #[test]
    fn crlf_terminators_accepted() {
        let cells = decode("*\r\n *\r\n", 2, 2);
        assert_eq!(alive_at(&cells, 2), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn empty_source_clears_everything() {
        let cells = decode("", 3, 3);
        assert!(alive_at(&cells, 3).is_empty());
    }

    #[test]
    fn decode_counts_live_cells() {
        let mut cells = vec![CellState::Dead; 9];
        assert_eq!(decode_into("**\n *\n", 3, 3, &mut cells), 3);
    }

    #[test]
    fn encode_trims_trailing_dead_cells() {
        let cells = decode(" * \n   \n*  \n", 3, 3);
        assert_eq!(encode(&cells, 3), ".*\n\n*\n");
        assert_eq!(decode(&encode(&cells, 3), 3, 3), cells);
    }
}
