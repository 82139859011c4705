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
use std::collections::HashSet;
use vuedoku_wasm::{deduction, generate, removal};

#[test]
fn test_removal_returns_exactly_the_requested_amount() {
    let mut rng = StdRng::seed_from_u64(11);
    let board = generate::generate(&mut rng);

    let indices = removal::removable_indices(&board, 30, &mut rng)
        .expect("30 removals are comfortably within the solver's reach");

    assert_eq!(indices.len(), 30);
    assert!(indices.iter().all(|&index| index < 81));
    let distinct: HashSet<_> = indices.iter().collect();
    assert_eq!(distinct.len(), 30, "removable indices must not repeat");
}

#[test]
fn test_removed_cells_keep_the_board_deducible() {
    let mut rng = StdRng::seed_from_u64(12);
    let board = generate::generate(&mut rng);

    let indices = removal::removable_indices(&board, 35, &mut rng)
        .expect("35 removals are comfortably within the solver's reach");

    let mut blanked = board;
    for &index in &indices {
        blanked.cells[index] = 0;
    }
    assert!(
        deduction::has_unique_solution(&blanked),
        "blanking the approved cells must leave a deducible board"
    );
}

#[test]
fn test_removing_zero_cells_succeeds_immediately() {
    let mut rng = StdRng::seed_from_u64(13);
    let board = generate::generate(&mut rng);

    assert_eq!(
        removal::removable_indices(&board, 0, &mut rng),
        Some(Vec::new())
    );
}

#[test]
fn test_removal_is_reproducible_per_seed() {
    let board = generate::generate(&mut StdRng::seed_from_u64(14));

    let first = removal::removable_indices(&board, 25, &mut StdRng::seed_from_u64(15));
    let second = removal::removable_indices(&board, 25, &mut StdRng::seed_from_u64(15));
    assert_eq!(first, second);
}

#[test]
fn test_removing_every_cell_fails_with_empty_result() {
    let mut rng = StdRng::seed_from_u64(16);
    let board = generate::generate(&mut rng);

    // An empty board cannot be resolved by single-candidate deduction, so a
    // full blanking can never be certified; the budget runs out instead.
    assert_eq!(removal::removable_indices(&board, 81, &mut rng), None);
}
