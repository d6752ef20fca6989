
//! The N-Queens puzzle, solved by backtracking.

use itertools::Itertools;
use serde::{Serialize, Serializer};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// Board size of the classic puzzle.
pub const BOARD_SIZE: usize = 8;

pub type EightQueensSolver = QueensSolver<BOARD_SIZE>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QueensError {
  #[error("No solution found for a {size}x{size} board.")]
  NoSolution {
    size: usize,
  },
}

/// An `N`x`N` chessboard, with each cell either empty or holding a
/// queen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board<const N: usize> {
  cells: [[bool; N]; N],
}

#[derive(Serialize)]
struct SerializedBoard {
  size: usize,
  queens: Vec<(usize, usize)>,
}

/// Places `N` queens on an `N`x`N` board such that no two attack each
/// other.
///
/// Queens are placed one row at a time, top to bottom, trying columns
/// left to right and backing out of any placement that leaves a later
/// row without a safe cell. The first solution found is therefore the
/// lexicographically smallest one.
#[derive(Debug, Clone)]
pub struct QueensSolver<const N: usize> {
  board: Board<N>,
}

impl<const N: usize> Board<N> {
  pub fn empty() -> Self {
    Board { cells: [[false; N]; N] }
  }

  pub const fn size(&self) -> usize {
    N
  }

  pub fn has_queen(&self, row: usize, col: usize) -> bool {
    self.cells[row][col]
  }

  /// Positions of all queens, as `(row, col)` pairs in row-major
  /// order.
  pub fn queens(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
    (0..N).cartesian_product(0..N).filter(|&(row, col)| self.has_queen(row, col))
  }

  fn set(&mut self, row: usize, col: usize, queen: bool) {
    self.cells[row][col] = queen;
  }

  /// A queen at `(row, col)` is safe if no queen sits above it in the
  /// same column or on either upward diagonal. Rows below `row` are
  /// not inspected.
  fn is_safe(&self, row: usize, col: usize) -> bool {
    let column_clear = (0..row).all(|r| !self.has_queen(r, col));
    let left_diagonal_clear = (0..=row).rev().zip((0..=col).rev())
      .all(|(r, c)| !self.has_queen(r, c));
    let right_diagonal_clear = (0..=row).rev().zip(col..N)
      .all(|(r, c)| !self.has_queen(r, c));
    column_clear && left_diagonal_clear && right_diagonal_clear
  }
}

impl<const N: usize> Default for Board<N> {
  fn default() -> Self {
    Self::empty()
  }
}

/// One line per row, `Q` for a queen and `.` for an empty cell, with
/// cells separated by a space.
impl<const N: usize> Display for Board<N> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for row in &self.cells {
      let line = row.iter().map(|&queen| if queen { 'Q' } else { '.' }).join(" ");
      writeln!(f, "{}", line)?;
    }
    Ok(())
  }
}

/// Serializes as the board size together with the `(row, col)`
/// position of every queen.
impl<const N: usize> Serialize for Board<N> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let serialized = SerializedBoard {
      size: N,
      queens: self.queens().collect(),
    };
    serialized.serialize(serializer)
  }
}

impl<const N: usize> QueensSolver<N> {
  pub fn new() -> Self {
    QueensSolver { board: Board::empty() }
  }

  /// Solves the puzzle and renders the board, or an explanatory
  /// message if the board size admits no solution.
  pub fn solve(&mut self) -> String {
    match self.try_solve() {
      Ok(board) => board.to_string(),
      Err(err) => err.to_string(),
    }
  }

  /// Solves the puzzle from an empty board.
  pub fn try_solve(&mut self) -> Result<Board<N>, QueensError> {
    self.board = Board::empty();
    if self.place_queen(0) {
      tracing::debug!(size = N, "placed all queens");
      Ok(self.board)
    } else {
      Err(QueensError::NoSolution { size: N })
    }
  }

  /// The board as left by the most recent solve.
  pub fn board(&self) -> &Board<N> {
    &self.board
  }

  fn place_queen(&mut self, row: usize) -> bool {
    if row == N {
      return true;
    }
    for col in 0..N {
      if self.board.is_safe(row, col) {
        self.board.set(row, col, true);
        if self.place_queen(row + 1) {
          return true;
        }
        self.board.set(row, col, false);
      }
    }
    false
  }
}

impl<const N: usize> Default for QueensSolver<N> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn assert_valid<const N: usize>(board: &Board<N>) {
    let queens: Vec<_> = board.queens().collect();
    assert_eq!(queens.len(), N);
    for (i, &(r1, c1)) in queens.iter().enumerate() {
      for &(r2, c2) in &queens[i + 1..] {
        assert_ne!(r1, r2, "two queens in row {}", r1);
        assert_ne!(c1, c2, "two queens in column {}", c1);
        assert_ne!(r1.abs_diff(r2), c1.abs_diff(c2), "queens on a diagonal at {:?} and {:?}", (r1, c1), (r2, c2));
      }
    }
  }

  #[test]
  fn test_eight_queens_is_valid() {
    let board = EightQueensSolver::new().try_solve().unwrap();
    assert_valid(&board);
  }

  #[test]
  fn test_eight_queens_first_solution() {
    let board = EightQueensSolver::new().try_solve().unwrap();
    let columns: Vec<_> = board.queens().map(|(_, col)| col).collect();
    assert_eq!(columns, vec![0, 4, 7, 5, 2, 6, 1, 3]);
  }

  #[test]
  fn test_solve_rendering() {
    let rendered = EightQueensSolver::new().solve();
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Q . . . . . . .");
    assert_eq!(lines[1], ". . . . Q . . .");
    assert_eq!(lines[7], ". . . Q . . . .");
    assert!(rendered.ends_with('\n'));
    assert_eq!(rendered.matches('Q').count(), 8);
    for line in lines {
      assert_eq!(line.matches('Q').count(), 1);
      assert_eq!(line.len(), 15);
    }
  }

  #[test]
  fn test_other_sizes() {
    assert_valid(&QueensSolver::<1>::new().try_solve().unwrap());
    assert_valid(&QueensSolver::<4>::new().try_solve().unwrap());
    assert_valid(&QueensSolver::<6>::new().try_solve().unwrap());
    assert_eq!(QueensSolver::<1>::new().solve(), "Q\n");
  }

  #[test]
  fn test_unsolvable_sizes() {
    assert_eq!(QueensSolver::<2>::new().try_solve(), Err(QueensError::NoSolution { size: 2 }));
    assert_eq!(QueensSolver::<3>::new().solve(), "No solution found for a 3x3 board.");
  }

  #[test]
  fn test_solve_is_repeatable() {
    let mut solver = EightQueensSolver::new();
    let first = solver.solve();
    let second = solver.solve();
    assert_eq!(first, second);
    assert_valid(solver.board());
  }

  #[test]
  fn test_is_safe() {
    let mut board = Board::<4>::empty();
    board.set(0, 1, true);
    assert!(!board.is_safe(1, 0));
    assert!(!board.is_safe(1, 1));
    assert!(!board.is_safe(1, 2));
    assert!(board.is_safe(1, 3));
    assert!(!board.is_safe(3, 1));
  }

  #[test]
  fn test_serialize() {
    let board = QueensSolver::<4>::new().try_solve().unwrap();
    let json = serde_json::to_value(board).unwrap();
    assert_eq!(json, serde_json::json!({
      "size": 4,
      "queens": [[0, 1], [1, 3], [2, 0], [3, 2]],
    }));
  }
}
