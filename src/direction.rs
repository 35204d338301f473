use std::fmt;

/// The way the blank moves (a tile next to it moves the opposite way)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MoveDirection {
    /// The blank swaps with the tile to its right
    Left,
    /// The blank swaps with the tile below it
    Up,
    /// The blank swaps with the tile to its left
    Right,
    /// The blank swaps with the tile above it
    Down,
}

impl MoveDirection {
    /// Every direction, in the order successors are generated
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Left,
        MoveDirection::Up,
        MoveDirection::Right,
        MoveDirection::Down,
    ];

    /// The move that undoes this one
    pub fn opposite(self) -> Self {
        match self {
            MoveDirection::Left => MoveDirection::Right,
            MoveDirection::Right => MoveDirection::Left,
            MoveDirection::Up => MoveDirection::Down,
            MoveDirection::Down => MoveDirection::Up,
        }
    }

    pub fn label(self) -> char {
        match self {
            MoveDirection::Left => 'l',
            MoveDirection::Right => 'r',
            MoveDirection::Up => 'u',
            MoveDirection::Down => 'd',
        }
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
