//! Cell states of the Wireworld automaton.
//!
//! The numeric encoding is part of the public contract, not an
//! implementation detail: `Head` is the only state whose value exceeds 7,
//! so `(state as u8) >> 3` is 1 for `Head` and 0 for everything else.
//! The simulator counts head neighbors by summing that bit over the
//! 8-neighborhood instead of branching per neighbor. Reordering the
//! variants breaks the rule silently - the const assertions below pin
//! the encoding at compile time.

/// One discrete automaton state at a grid position.
///
/// `Note1..Note5` are inert annotation states: the rule copies them
/// unchanged and they never conduct.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Empty = 0,
    Note1 = 1,
    Note2 = 2,
    Note3 = 3,
    Note4 = 4,
    Note5 = 5,
    Wire = 6,
    Tail = 7,
    Head = 8,
}

/// Number of distinct cell states.
pub const CELL_STATES: usize = 9;

impl Cell {
    /// Decode a raw state byte. `None` for values outside the encoding.
    #[inline]
    pub fn from_raw(raw: u8) -> Option<Cell> {
        match raw {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Note1),
            2 => Some(Cell::Note2),
            3 => Some(Cell::Note3),
            4 => Some(Cell::Note4),
            5 => Some(Cell::Note5),
            6 => Some(Cell::Wire),
            7 => Some(Cell::Tail),
            8 => Some(Cell::Head),
            _ => None,
        }
    }

    /// 1 for `Head`, 0 for every other state.
    #[inline(always)]
    pub fn head_bit(self) -> u8 {
        (self as u8) >> 3
    }

    /// Wire, tail and head all conduct; everything else is inert.
    #[inline]
    pub fn is_conductor(self) -> bool {
        self as u8 >= Cell::Wire as u8
    }

    /// Annotation states (`Note1..Note5`).
    #[inline]
    pub fn is_note(self) -> bool {
        let v = self as u8;
        v >= Cell::Note1 as u8 && v <= Cell::Note5 as u8
    }
}

// Head must stay the unique state above 7: the neighbor counter in the
// rule kernel depends on it.
const _: () = {
    assert!(Cell::Empty as u8 == 0);
    assert!(Cell::Wire as u8 == 6);
    assert!(Cell::Tail as u8 == 7);
    assert!(Cell::Head as u8 == 8);
    assert!((Cell::Head as u8) >> 3 == 1);
    assert!((Cell::Tail as u8) >> 3 == 0);
    assert!((Cell::Wire as u8) >> 3 == 0);
    assert!((Cell::Note5 as u8) >> 3 == 0);
    assert!((Cell::Empty as u8) >> 3 == 0);
};
