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

//! Core of the Vuedoku browser game: generates solved Sudoku grids and picks
//! the cells a front end may blank while the puzzle keeps a unique solution.
//!
//! All UI state (cell clicks, player-entered digits, the reveal and erase
//! toggles) lives on the JavaScript side; this crate only exposes the grid
//! machinery through a handful of wasm entry points.

pub mod board;
pub mod deduction;
pub mod generate;
pub mod puzzle;
pub mod removal;

use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::puzzle::Puzzle;

#[wasm_bindgen(start)]
fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Generates a fresh solved grid: 81 digits in row-major order.
#[wasm_bindgen(js_name = generate)]
pub fn generate_grid() -> Vec<u8> {
    generate::generate(&mut rand::rng()).cells.to_vec()
}

/// Picks `amount` cell indices that can be blanked from `cells` while the
/// deductive solver still certifies a unique completion.
///
/// Returns an empty array when the retry budget runs out; callers must treat
/// that as "this amount did not work out", not as a shorter result, and
/// retry with a fresh grid. Throws when `cells` is not a valid board buffer.
#[wasm_bindgen(js_name = getRemovableIndices)]
pub fn get_removable_indices(cells: &[u8], amount: usize) -> Result<Vec<u32>, JsError> {
    let board = Board::from_cells(cells)?;
    let indices = removal::removable_indices(&board, amount, &mut rand::rng());
    Ok(indices
        .unwrap_or_default()
        .into_iter()
        .map(|index| index as u32)
        .collect())
}

/// Whether the supplied board resolves completely by single-candidate
/// deduction; see [`deduction::has_unique_solution`] for the exact contract
/// and its limits.
#[wasm_bindgen(js_name = hasUniqueSolution)]
pub fn has_unique_solution(cells: &[u8]) -> Result<bool, JsError> {
    let board = Board::from_cells(cells)?;
    Ok(deduction::has_unique_solution(&board))
}

/// Generates a complete puzzle bundle: the solution digits plus the indices
/// the front end may present as blank, editable cells.
///
/// Throws when no uniquely solvable puzzle with `blanks` blanks was found
/// within the retry limits.
#[wasm_bindgen(js_name = newPuzzle)]
pub fn new_puzzle(blanks: usize) -> Result<JsValue, JsError> {
    match Puzzle::with_blanks(blanks, &mut rand::rng()) {
        Some(puzzle) => Ok(serde_wasm_bindgen::to_value(&puzzle)?),
        None => Err(JsError::new(
            "no uniquely solvable puzzle found for this blank count",
        )),
    }
}
