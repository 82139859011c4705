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

//! The puzzle bundle handed across the wasm boundary to the front end.

use crate::generate;
use crate::removal;
use rand::Rng;
use serde::Serialize;

/// Fresh grids tried before giving up on a blank count.
const MAX_GRID_TRIES: usize = 10;

/// A generated game: the full solution plus the cells the player fills in.
///
/// The front end turns `removable` into editable, initially blank cells and
/// keeps every other cell as a fixed given. Player-entered values, reveal,
/// and erase modes are entirely its own business.
#[derive(Debug, Clone, Serialize)]
pub struct Puzzle {
    /// The 81 solution digits, row-major.
    pub cells: Vec<u8>,
    /// Indices of the cells that may be blanked without losing the unique
    /// solution.
    pub removable: Vec<usize>,
}

impl Puzzle {
    /// Generates solution grids until one admits `blanks` removable cells,
    /// giving up after a fixed number of fresh grids.
    ///
    /// A single grid can simply be unlucky for a given blank count, so a
    /// failed removal pass is retried on a brand-new grid rather than on the
    /// same one. High blank counts may exhaust every attempt and yield
    /// `None`.
    pub fn with_blanks<R: Rng>(blanks: usize, rng: &mut R) -> Option<Puzzle> {
        for _ in 0..MAX_GRID_TRIES {
            let board = generate::generate(rng);
            if let Some(removable) = removal::removable_indices(&board, blanks, rng) {
                return Some(Puzzle {
                    cells: board.cells.to_vec(),
                    removable,
                });
            }
        }
        None
    }
}
