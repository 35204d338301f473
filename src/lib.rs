//! The board state of a generalised N×N sliding-tile puzzle
//! (the 8-puzzle, the 15-puzzle and their bigger siblings)
//!
//! A [`State`] is an immutable configuration of numbered tiles and one
//! blank, exposing everything a graph search needs from a node: a goal
//! test, a validity test, a closed-form solvability test and successor
//! generation tagged by the [`MoveDirection`] of the blank.
//!
//! # Basic Usage
//!
//! ```
//! use sliding_puzzle::{MoveDirection, State3x3};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let state: State3x3 = "1 2 3 4 5 6 7 0 8".parse()?;
//! assert!(state.is_valid() && state.is_solvable()?);
//!
//! let children = state.children()?;
//! assert_eq!(children.len(), 3);
//! assert_eq!(children[0], (State3x3::goal(), MoveDirection::Left));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod direction;

pub mod state;


pub use direction::MoveDirection;
pub use state::State;

/// The largest supported board dimension
pub const MAX_DIMENSION: usize = 16;

// every tile value of the largest board must fit in a u8 cell
const_assert!(MAX_DIMENSION * MAX_DIMENSION - 1 <= u8::MAX as usize);

/// The classic 8-puzzle
pub type State3x3 = State<3>;

/// The classic 15-puzzle
pub type State4x4 = State<4>;
