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

use rand::SeedableRng;
use rand::rngs::StdRng;
use vuedoku_wasm::board::Board;
use vuedoku_wasm::deduction;
use vuedoku_wasm::puzzle::Puzzle;

#[test]
fn test_puzzle_with_42_blanks_end_to_end() {
    // 42 blanks is the front end's default; well under the practical ceiling
    // of the deduction-only check, so a handful of grids always suffices.
    let mut rng = StdRng::seed_from_u64(21);
    let puzzle = Puzzle::with_blanks(42, &mut rng)
        .expect("a 42-blank puzzle should be found within a few grids");

    assert_eq!(puzzle.removable.len(), 42);

    let solution = Board::from_cells(&puzzle.cells).unwrap();
    assert!(solution.is_valid_solution());

    let mut blanked = solution;
    for &index in &puzzle.removable {
        blanked.cells[index] = 0;
    }
    assert!(deduction::has_unique_solution(&blanked));
}

#[test]
fn test_puzzle_with_all_cells_blank_is_refused() {
    let mut rng = StdRng::seed_from_u64(22);
    assert!(
        Puzzle::with_blanks(81, &mut rng).is_none(),
        "a fully blank board is never uniquely deducible"
    );
}

#[test]
fn test_puzzle_serializes_for_the_front_end() {
    let mut rng = StdRng::seed_from_u64(23);
    let puzzle = Puzzle::with_blanks(5, &mut rng).unwrap();

    let json: serde_json::Value = serde_json::to_value(&puzzle).unwrap();
    assert_eq!(json["cells"].as_array().unwrap().len(), 81);
    assert_eq!(json["removable"].as_array().unwrap().len(), 5);
}
