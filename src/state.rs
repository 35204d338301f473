//! The board state of an N×N sliding-tile puzzle

use anyhow::{anyhow, Result};

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::{direction::MoveDirection, MAX_DIMENSION};

/// One configuration of an N×N sliding-tile puzzle
///
/// Cells hold the tiles `1..N²` and the blank `0`, read row-major: the flat
/// index of a cell is `row * N + column`.
///
/// # Validity
/// Construction does not check that the cells are a permutation of `0..N²`.
/// Use [`State::is_valid`] before relying on [`State::is_solvable`] or on
/// successor generation; a board without a blank makes those return an error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct State<const N: usize> {
    cells: [[u8; N]; N],
}

impl<const N: usize> State<N> {
    /// The side length of the board
    pub const DIMENSION: usize = N;

    // evaluated for each dimension a state is built with
    const SUPPORTED: () = assert!(
        N >= 2 && N <= MAX_DIMENSION,
        "board dimension out of range"
    );

    /// Creates a state from its rows, without validating the tiles
    pub fn new(cells: [[u8; N]; N]) -> Self {
        let () = Self::SUPPORTED;
        Self { cells }
    }

    /// Creates a state from `N²` cells in row-major order
    ///
    /// Only the length is checked, the tiles themselves are taken as given.
    pub fn from_slice(cells: &[u8]) -> Result<Self> {
        if cells.len() != N * N {
            return Err(anyhow!(
                "a {}x{} board needs {} cells, got {}",
                N,
                N,
                N * N,
                cells.len()
            ));
        }
        let mut rows = [[0; N]; N];
        rows.as_flattened_mut().copy_from_slice(cells);
        Ok(Self::new(rows))
    }

    /// The solved board: `1..N²` in row-major order with the blank last
    pub fn goal() -> Self {
        let mut rows = [[0; N]; N];
        for (index, cell) in rows.as_flattened_mut().iter_mut().enumerate() {
            *cell = ((index + 1) % (N * N)) as u8;
        }
        Self::new(rows)
    }

    /// The cells in row-major order
    pub fn cells(&self) -> &[u8] {
        self.cells.as_flattened()
    }

    pub fn rows(&self) -> &[[u8; N]; N] {
        &self.cells
    }

    /// The tile at `(row, column)`, panics if either is out of range
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.cells[row][column]
    }

    pub fn is_goal_state(&self) -> bool {
        *self == Self::goal()
    }

    /// Checks that every value of `0..N²` appears exactly once
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; u8::MAX as usize + 1];
        self.cells().iter().all(|&tile| {
            let tile = tile as usize;
            tile < N * N && !std::mem::replace(&mut seen[tile], true)
        })
    }

    /// Counts the pairs of tiles in `range` that are out of order
    ///
    /// The blank is not a tile and never takes part in an inversion.
    pub fn count_inversions(&self, range: Range<usize>) -> usize {
        let tiles = &self.cells()[range];
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &current)| current != 0)
            .map(|(i, &current)| {
                tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < current)
                    .count()
            })
            .sum()
    }

    /// Counts the inversions of the whole board
    pub fn inversions(&self) -> usize {
        self.count_inversions(0..N * N)
    }

    /// Decides from permutation parity whether the goal can be reached
    ///
    /// On odd boards the inversion count must be even. On even boards the
    /// parity required depends on the blank's row counted from the top: odd
    /// inversions with the blank on an even row, even inversions otherwise.
    ///
    /// Only meaningful for a valid state; errors if there is no blank.
    pub fn is_solvable(&self) -> Result<bool> {
        let inversions_even = self.inversions() % 2 == 0;
        let (blank_row, _) = self.blank_position_2d()?;

        Ok(if N % 2 == 1 {
            inversions_even
        } else if blank_row % 2 == 0 {
            !inversions_even
        } else {
            inversions_even
        })
    }

    /// Flat index of the blank
    pub fn blank_position(&self) -> Result<usize> {
        self.cells()
            .iter()
            .position(|&tile| tile == 0)
            .ok_or_else(|| anyhow!("no blank cell in board {:?}", self.cells()))
    }

    /// `(row, column)` of the blank
    pub fn blank_position_2d(&self) -> Result<(usize, usize)> {
        let blank = self.blank_position()?;
        Ok((blank / N, blank % N))
    }

    /// Moves the blank in `direction`
    ///
    /// Returns `None` if the blank is on the edge it would cross.
    pub fn apply(&self, direction: MoveDirection) -> Result<Option<Self>> {
        let blank = self.blank_position()?;
        Ok(Self::neighbour(blank, direction)
            .map(|target| Self::swap_tiles(*self, blank, target)))
    }

    /// Every state one legal move away, tagged by the move
    ///
    /// Moves are tried in the order of [`MoveDirection::ALL`], so a corner
    /// blank gives 2 children, an edge blank 3 and an interior blank 4.
    pub fn children(&self) -> Result<Vec<(Self, MoveDirection)>> {
        let blank = self.blank_position()?;

        Ok(MoveDirection::ALL
            .iter()
            .filter_map(|&direction| {
                Self::neighbour(blank, direction)
                    .map(|target| (Self::swap_tiles(*self, blank, target), direction))
            })
            .collect())
    }

    // the cell the blank swaps with, if the move stays on the board
    fn neighbour(blank: usize, direction: MoveDirection) -> Option<usize> {
        let (row, column) = (blank / N, blank % N);
        match direction {
            MoveDirection::Left if column != N - 1 => Some(blank + 1),
            MoveDirection::Right if column != 0 => Some(blank - 1),
            MoveDirection::Up if row != N - 1 => Some(blank + N),
            MoveDirection::Down if row != 0 => Some(blank - N),
            _ => None,
        }
    }

    fn swap_tiles(mut state: Self, first: usize, second: usize) -> Self {
        state.cells.as_flattened_mut().swap(first, second);
        state
    }
}

impl<const N: usize> fmt::Display for State<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad every cell to the widest tile value
        let width = (N * N - 1).to_string().len();
        for row in self.cells.iter() {
            let line: Vec<String> = row
                .iter()
                .map(|tile| format!("{:>width$}", tile, width = width))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl<const N: usize> FromStr for State<N> {
    type Err = anyhow::Error;

    /// Parses whitespace or comma separated cells in row-major order
    fn from_str(s: &str) -> Result<Self> {
        let cells = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| anyhow!("could not parse '{}' as a tile", token))
            })
            .collect::<Result<Vec<u8>>>()?;

        Self::from_slice(&cells)
    }
}
