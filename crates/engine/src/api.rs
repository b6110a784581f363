//! Flat-index neighbor API for element update functions.
//!
//! Row 0 is the floor, so "below" is one row width back in the flat array.
//! None of these helpers bounds-check: the Bedrock border keeps every
//! neighbor of a movable cell inside the grid.

use rand::Rng;

use crate::cell::{Material, MaterialClass};
use crate::Grid;

#[must_use]
pub fn above(pos: usize, width: usize) -> usize {
    pos + width
}

#[must_use]
pub fn below(pos: usize, width: usize) -> usize {
    pos - width
}

#[must_use]
pub fn left(pos: usize, _width: usize) -> usize {
    pos - 1
}

#[must_use]
pub fn right(pos: usize, _width: usize) -> usize {
    pos + 1
}

#[must_use]
pub fn above_left(pos: usize, width: usize) -> usize {
    pos + width - 1
}

#[must_use]
pub fn above_right(pos: usize, width: usize) -> usize {
    pos + width + 1
}

#[must_use]
pub fn below_left(pos: usize, width: usize) -> usize {
    pos - width - 1
}

#[must_use]
pub fn below_right(pos: usize, width: usize) -> usize {
    pos - width + 1
}

/// Horizontal preference shared by every cell for one tick.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Fair coin flip; drawn once per tick, never per cell.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            Self::Right
        } else {
            Self::Left
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Handle on one moving cell. `pos` follows the cell as it swaps.
#[derive(Debug)]
pub struct CellApi<'a> {
    pub grid: &'a mut Grid,
    pub pos: usize,
    pub direction: Direction,
}

impl<'a> CellApi<'a> {
    pub fn new(grid: &'a mut Grid, pos: usize, direction: Direction) -> Self {
        debug_assert!(!grid.is_border(pos), "movable cell on the border at {pos}");
        Self { grid, pos, direction }
    }

    #[must_use]
    pub fn material(&self) -> Material {
        self.grid.get(self.pos)
    }

    #[must_use]
    pub fn class_at(&self, pos: usize) -> MaterialClass {
        self.grid.registry().class(self.grid.get(pos))
    }

    /// Below, then the diagonal on the preferred side, then the other one.
    #[must_use]
    pub fn fall_targets(&self) -> [usize; 3] {
        let (pos, width) = (self.pos, self.grid.width());
        let down = below(pos, width);
        match self.direction {
            Direction::Right => [down, below_right(pos, width), below_left(pos, width)],
            Direction::Left => [down, below_left(pos, width), below_right(pos, width)],
        }
    }

    /// Preferred side first.
    #[must_use]
    pub fn side_targets(&self) -> [usize; 2] {
        let (pos, width) = (self.pos, self.grid.width());
        match self.direction {
            Direction::Right => [right(pos, width), left(pos, width)],
            Direction::Left => [left(pos, width), right(pos, width)],
        }
    }

    /// Swap into the first target whose class `accepts`. Returns whether
    /// the cell moved.
    pub fn try_move(&mut self, targets: &[usize], accepts: impl Fn(MaterialClass) -> bool) -> bool {
        let Some(&target) = targets.iter().find(|&&t| accepts(self.class_at(t))) else {
            return false;
        };
        debug_assert!(!self.grid.is_border(target), "moved into the border at {target}");
        self.grid.swap(self.pos, target);
        self.pos = target;
        true
    }

    /// Mark the cell's final position as settled for this tick.
    pub fn settle(&mut self) {
        self.grid.mark_settled(self.pos);
    }
}
