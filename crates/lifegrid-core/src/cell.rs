//! The binary state of a single cell.

/// State of one cell on the grid.
///
/// A cell has no identity beyond its `(x, y)` coordinate; the grid stores
/// one `CellState` per coordinate. `Dead` is the default, so freshly
/// allocated buffers are empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CellState {
    /// The cell is empty.
    #[default]
    Dead = 0,
    /// The cell is populated.
    Alive = 1,
}

impl CellState {
    /// Character used for live cells in pattern sources and rendered output.
    pub const ALIVE_CHAR: char = '*';

    /// Character used for dead cells in rendered output.
    pub const DEAD_CHAR: char = ' ';

    /// Returns `true` for [`CellState::Alive`].
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    /// `true` maps to `Alive`, `false` to `Dead`.
    pub fn from_bool(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }

    /// Parse one pattern character. Only [`Self::ALIVE_CHAR`] is alive.
    pub fn from_char(c: char) -> Self {
        Self::from_bool(c == Self::ALIVE_CHAR)
    }

    /// Render glyph for this state.
    pub fn glyph(self) -> char {
        match self {
            Self::Alive => Self::ALIVE_CHAR,
            Self::Dead => Self::DEAD_CHAR,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        Self::from_bool(alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dead() {
        assert_eq!(CellState::default(), CellState::Dead);
        assert!(!CellState::default().is_alive());
    }

    #[test]
    fn only_asterisk_is_alive() {
        assert_eq!(CellState::from_char('*'), CellState::Alive);
        for c in [' ', '.', 'o', 'O', '#', '\n', '\r'] {
            assert_eq!(CellState::from_char(c), CellState::Dead, "{c:?}");
        }
    }

    #[test]
    fn glyphs() {
        assert_eq!(CellState::Alive.glyph(), '*');
        assert_eq!(CellState::Dead.glyph(), ' ');
    }

    #[test]
    fn from_bool_round_trips_is_alive() {
        assert!(CellState::from(true).is_alive());
        assert!(!CellState::from(false).is_alive());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_char_but_asterisk_is_dead(c in any::<char>()) {
                let expected = if c == '*' { CellState::Alive } else { CellState::Dead };
                prop_assert_eq!(CellState::from_char(c), expected);
            }

            #[test]
            fn glyph_parses_back(alive in any::<bool>()) {
                let state = CellState::from_bool(alive);
                prop_assert_eq!(CellState::from_char(state.glyph()), state);
            }
        }
    }
}
