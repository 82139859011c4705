/*
* Copyright (C) 2026  the Vuedoku authors
* This file is part of Vuedoku.
*
* Vuedoku is free software: you can redistribute it and/or modify
* it under the terms of the GNU Affero General Public License as published
* by the Free Software Foundation, either version 3 of the License, or
* (at your option) any later version.
*
* Vuedoku is distributed in the hope that it will be useful,
* but WITHOUT ANY WARRANTY; without even the implied warranty of
* MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
* GNU Affero General Public License for more details.
*
* You should have received a copy of the GNU Affero General Public License
* along with Vuedoku.  If not, see <https://www.gnu.org/licenses/>.
*/

//! The shared 9x9 grid representation and its unit (row/column/block) layout.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bitmask with one bit set per digit 1-9.
pub(crate) const ALL_DIGITS: u16 = 0b1_1111_1111;

// Pre-calculate the cell indices of every row, column, and block once.
lazy_static::lazy_static! {
    /// Cell indices of each of the 9 rows, left to right.
    pub(crate) static ref ROWS: [[usize; 9]; 9] =
        std::array::from_fn(|row| std::array::from_fn(|col| row * 9 + col));
    /// Cell indices of each of the 9 columns, top to bottom.
    pub(crate) static ref COLS: [[usize; 9]; 9] =
        std::array::from_fn(|col| std::array::from_fn(|row| row * 9 + col));
    /// Cell indices of each of the 9 non-overlapping 3x3 blocks, row-major
    /// within the block.
    pub(crate) static ref BLOCKS: [[usize; 9]; 9] = std::array::from_fn(|block| {
        std::array::from_fn(|slot| {
            let row = block / 3 * 3 + slot / 3;
            let col = block % 3 * 3 + slot % 3;
            row * 9 + col
        })
    });
}

/// The block containing the given cell index.
#[inline]
pub fn block_of(index: usize) -> usize {
    index / 27 * 3 + index % 9 / 3
}

/// Ways a caller-supplied buffer or string can fail to describe a board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected exactly 81 cells, got {0}")]
    WrongLength(usize),
    #[error("cell {index} holds {value}, cells must be 0 (empty) or 1-9")]
    InvalidCell { index: usize, value: u8 },
    #[error("unexpected character {0:?} in board string")]
    InvalidChar(char),
}

/// A 9x9 Sudoku board stored row-major; `0` marks an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub cells: [u8; 81],
}

impl Board {
    /// An all-empty board.
    pub fn empty() -> Board {
        Board { cells: [0; 81] }
    }

    /// Validates a caller-supplied buffer: exactly 81 cells, each 0-9.
    pub fn from_cells(cells: &[u8]) -> Result<Board, BoardError> {
        if cells.len() != 81 {
            return Err(BoardError::WrongLength(cells.len()));
        }
        if let Some(index) = cells.iter().position(|&value| value > 9) {
            return Err(BoardError::InvalidCell {
                index,
                value: cells[index],
            });
        }
        let mut board = Board::empty();
        board.cells.copy_from_slice(cells);
        Ok(board)
    }

    /// Whether every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&cell| cell != 0)
    }

    /// Whether the board is complete and every row, column, and block
    /// contains each digit 1-9 exactly once.
    pub fn is_valid_solution(&self) -> bool {
        ROWS.iter()
            .chain(COLS.iter())
            .chain(BLOCKS.iter())
            .all(|unit| {
                let mut seen = 0u16;
                for &index in unit {
                    match self.cells[index] {
                        0 => return false,
                        digit => seen |= 1 << (digit - 1),
                    }
                }
                seen == ALL_DIGITS
            })
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses 81 cell characters (`1`-`9`, with `0` or `.` for empty cells),
    /// skipping whitespace.
    fn from_str(s: &str) -> Result<Board, BoardError> {
        let mut cells = Vec::with_capacity(81);
        for c in s.chars() {
            match c {
                '.' | '0' => cells.push(0),
                '1'..='9' => cells.push(c as u8 - b'0'),
                c if c.is_whitespace() => {}
                other => return Err(BoardError::InvalidChar(other)),
            }
        }
        Board::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    /// Prints the board as 81 characters in row-major order, `.` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            let c = match cell {
                0 => '.',
                digit => (b'0' + digit) as char,
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
