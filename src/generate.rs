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

//! Construction of complete, randomly varied solution grids.
//!
//! The grid is built band by band: every digit is dealt a row inside each
//! block of a horizontal band so that no band row repeats a digit, and a
//! backtracking pass then orders each block row's digits so that the columns
//! of every vertical stack work out too. Both steps operate on a small,
//! fully structured search space, so generation never needs to throw a grid
//! away and start over.

use crate::board::Board;
use rand::Rng;
use rand::RngExt;

/// Digits of one block row, leftmost column first.
type Triple = [u8; 3];

/// Digits assigned to the three rows of one block, in assignment order.
type BlockRows = [Vec<u8>; 3];

/// Generates a complete, randomly varied, valid solution grid.
///
/// Draws all randomness from `rng`, so a seeded generator reproduces the
/// same grid. Construction cannot fail: the band layout always admits at
/// least one column-consistent ordering.
pub fn generate<R: Rng>(rng: &mut R) -> Board {
    let bands: [[BlockRows; 3]; 3] = std::array::from_fn(|_| build_band(rng));

    let mut cells = [0u8; 81];
    for stack in 0..3 {
        let rows = order_stack_rows(&stack_row_orderings(&bands, stack));
        for (row, triple) in rows.iter().enumerate() {
            for (col, &digit) in triple.iter().enumerate() {
                cells[row * 9 + stack * 3 + col] = digit;
            }
        }
    }
    Board { cells }
}

/// Convenience wrapper over the thread-local RNG.
pub fn generate_default() -> Board {
    generate(&mut rand::rng())
}

/// Distributes the nine digits over the rows of one horizontal band.
///
/// Every block ends up with three digits per row, and each digit takes a
/// different row in each of the band's three blocks, so the band's full rows
/// hold nine distinct digits. Block 1 picks freely among its open rows;
/// block 3 picks while steering clear of block 1's choice and of block 2's
/// last remaining option when block 2 is down to a single row; block 2 takes
/// the row left over by elimination. A block with no legal row means the
/// distribution logic itself is broken, so we fail loudly instead of
/// retrying.
fn build_band<R: Rng>(rng: &mut R) -> [BlockRows; 3] {
    let mut blocks: [BlockRows; 3] =
        std::array::from_fn(|_| std::array::from_fn(|_| Vec::with_capacity(3)));

    for digit in 1..=9u8 {
        let first = pick_row(&open_rows(&blocks[0]), rng)
            .unwrap_or_else(|| panic!("no open row in block 1 for digit {digit}"));

        // Rows block 2 could still take once block 1's choice is off the table.
        let mut second_options = open_rows(&blocks[1]);
        second_options.dedup();
        second_options.retain(|&row| row != first);

        let mut third_options = open_rows(&blocks[2]);
        third_options.retain(|&row| row != first);
        if let [forced] = second_options[..] {
            third_options.retain(|&row| row != forced);
        }
        let third = pick_row(&third_options, rng)
            .unwrap_or_else(|| panic!("no open row in block 3 for digit {digit}"));

        let second = second_options
            .iter()
            .copied()
            .find(|&row| row != third)
            .unwrap_or_else(|| panic!("no open row in block 2 for digit {digit}"));

        blocks[0][first].push(digit);
        blocks[1][second].push(digit);
        blocks[2][third].push(digit);
    }

    blocks
}

/// Open row slots of one block, as a multiset: a row already holding two
/// digits appears once, an untouched row three times. Uniform picks over
/// this list weight each row by how much room it has left.
fn open_rows(block: &BlockRows) -> Vec<usize> {
    let mut open = Vec::with_capacity(9);
    for (row, digits) in block.iter().enumerate() {
        for _ in digits.len()..3 {
            open.push(row);
        }
    }
    open
}

/// Picks a uniformly random entry, or `None` when there is nothing to pick.
fn pick_row<R: Rng>(rows: &[usize], rng: &mut R) -> Option<usize> {
    if rows.is_empty() {
        None
    } else {
        Some(rows[rng.random_range(0..rows.len())])
    }
}

/// The six orderings of a triple, obtained by alternately swapping the first
/// and the last pair: `abc, bac, bca, cba, cab, acb`.
fn permutations_of(triple: Triple) -> [Triple; 6] {
    let mut orderings = [triple; 6];
    for i in 1..6 {
        let [a, b, c] = orderings[i - 1];
        orderings[i] = if i % 2 == 1 { [b, a, c] } else { [a, c, b] };
    }
    orderings
}

/// Candidate orderings for the nine rows of one vertical stack: the stack's
/// block from each band, top to bottom, contributes its three rows.
fn stack_row_orderings(bands: &[[BlockRows; 3]; 3], stack: usize) -> [[Triple; 6]; 9] {
    std::array::from_fn(|i| {
        let digits = &bands[i / 3][stack][i % 3];
        permutations_of([digits[0], digits[1], digits[2]])
    })
}

/// Chooses one ordering per stack row so that no digit repeats within any of
/// the stack's three columns.
///
/// Iterative backtracking over a row cursor and one ordering index per row.
/// The cursor starts at row 3: the first block's rows hold disjoint digit
/// triples, so the top three rows cannot conflict whatever their orderings.
/// On a conflict the current row advances to its next ordering; a row that
/// exhausts all six resets and the cursor retreats. Retreating past row 0
/// would mean the band layout violated its own row invariant.
fn order_stack_rows(orderings: &[[Triple; 6]; 9]) -> [Triple; 9] {
    let mut chosen = [0usize; 9];
    let mut row = 3;
    while row < 9 {
        if columns_compatible(orderings, &chosen, row) {
            row += 1;
            continue;
        }
        loop {
            chosen[row] += 1;
            if chosen[row] < 6 {
                break;
            }
            chosen[row] = 0;
            assert!(row > 0, "column ordering search exhausted every combination");
            row -= 1;
        }
    }
    std::array::from_fn(|i| orderings[i][chosen[i]])
}

/// Whether rows `0..=upto`, under the chosen orderings, place each digit at
/// most once per column.
fn columns_compatible(orderings: &[[Triple; 6]; 9], chosen: &[usize; 9], upto: usize) -> bool {
    let mut seen = [0u16; 3];
    for row in 0..=upto {
        let ordering = orderings[row][chosen[row]];
        for (col, digit) in ordering.into_iter().enumerate() {
            let bit = 1 << (digit - 1);
            if seen[col] & bit != 0 {
                return false;
            }
            seen[col] |= bit;
        }
    }
    true
}
