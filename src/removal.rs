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

//! Random selection of the cells that can be hidden from a solved board.

use crate::board::Board;
use crate::deduction;
use rand::Rng;
use rand::RngExt;

/// Failed blanking attempts allowed per target cell before giving up.
pub const MAX_REMOVAL_TRIES: u32 = 1000;

/// Picks `amount` distinct cell indices that can be blanked from `board`
/// while [`deduction::has_unique_solution`] still certifies the remainder.
///
/// Candidate cells are drawn uniformly from a shrinking pool and blanked in
/// a working copy. A blank the solver rejects is restored and costs one try;
/// an accepted blank leaves the pool, joins the result, and resets the try
/// budget for the next target cell.
///
/// Returns `None` when the budget (or the pool) runs out before `amount`
/// cells are found; callers should start over with a freshly generated board
/// rather than settle for fewer blanks. Larger amounts fail more often by
/// nature of the deduction-only check.
pub fn removable_indices<R: Rng>(
    board: &Board,
    amount: usize,
    rng: &mut R,
) -> Option<Vec<usize>> {
    let mut working = *board;
    let mut pool: Vec<usize> = (0..81).collect();
    let mut removed = Vec::with_capacity(amount);
    let mut tries = MAX_REMOVAL_TRIES;

    while removed.len() < amount {
        if pool.is_empty() {
            return None;
        }
        let slot = rng.random_range(0..pool.len());
        let index = pool[slot];
        let digit = working.cells[index];

        working.cells[index] = 0;
        if deduction::has_unique_solution(&working) {
            pool.swap_remove(slot);
            removed.push(index);
            tries = MAX_REMOVAL_TRIES;
        } else {
            working.cells[index] = digit;
            tries -= 1;
            if tries == 0 {
                return None;
            }
        }
    }
    Some(removed)
}
