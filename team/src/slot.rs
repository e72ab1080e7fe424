use std::fmt;

/// Number of panels
pub const TEAM_SIZE: usize = 6;

pub const GRID_ROWS: usize = 2;
pub const GRID_COLUMNS: usize = 3;

/// Position of a panel, row-major in the 2x3 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(usize);

impl SlotId {
    /// All six slots in display order
    pub const ALL: [SlotId; TEAM_SIZE] = [
        SlotId(0),
        SlotId(1),
        SlotId(2),
        SlotId(3),
        SlotId(4),
        SlotId(5),
    ];

    pub fn new(index: usize) -> Option<Self> {
        (index < TEAM_SIZE).then_some(Self(index))
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn row(&self) -> usize {
        self.0 / GRID_COLUMNS
    }

    pub fn column(&self) -> usize {
        self.0 % GRID_COLUMNS
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0 + 1)
    }
}

/// Issued when a slot starts a lookup; the result only lands if the
/// ticket is still the slot's latest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotTicket {
    pub slot: SlotId,
    pub generation: u64,
}
