//! Shared helpers of the integration tests: random instances and a brute-force reference.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use covering_solver::containers::HashSet;
use covering_solver::SparseBooleanMatrix;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// The largest number of columns for which [`minimum_cover_cost`] enumerates all subsets.
const MAX_ENUMERATED_COLUMNS: usize = 16;

/// rows: 0 -> {0, 2}, 1 -> {1, 2}, 2 -> {0, 3}
pub(crate) fn small_matrix() -> SparseBooleanMatrix {
    SparseBooleanMatrix::new(3, 4, [(0, 0), (0, 2), (1, 1), (1, 2), (2, 0), (2, 3)])
}

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// A random matrix in which every row has at least one element and every entry is present with
/// probability `density`.
pub(crate) fn random_matrix(
    rng: &mut SmallRng,
    max_rows: usize,
    max_columns: usize,
    density: f64,
    max_cost: u64,
) -> SparseBooleanMatrix {
    let num_rows = rng.gen_range(1..=max_rows);
    let num_columns = rng.gen_range(1..=max_columns);
    let costs = (0..num_columns)
        .map(|_| rng.gen_range(1..=max_cost))
        .collect::<Vec<_>>();

    let mut elements: HashSet<(usize, usize)> = HashSet::default();
    for row in 0..num_rows {
        let _ = elements.insert((row, rng.gen_range(0..num_columns)));
        for column in 0..num_columns {
            if rng.gen_bool(density) {
                let _ = elements.insert((row, column));
            }
        }
    }

    SparseBooleanMatrix::with_costs(num_rows, costs, elements)
}

/// The cost of a minimum cover of the active rows by the active columns, or [`None`] if some
/// active row cannot be covered.
pub(crate) fn minimum_cover_cost(matrix: &SparseBooleanMatrix) -> Option<u64> {
    let columns = matrix.active_columns().collect::<Vec<_>>();
    assert!(
        columns.len() <= MAX_ENUMERATED_COLUMNS,
        "too many columns to enumerate"
    );
    let rows = matrix
        .active_rows()
        .map(|row| {
            matrix
                .row_list(row)
                .map(|column| 1_u32 << columns.binary_search(&column).unwrap())
                .fold(0, |mask, bit| mask | bit)
        })
        .collect::<Vec<u32>>();

    (0..1_u32 << columns.len())
        .filter(|subset| rows.iter().all(|row| row & subset != 0))
        .map(|subset| {
            columns
                .iter()
                .enumerate()
                .filter(|(bit, _)| subset & (1 << bit) != 0)
                .map(|(_, &column)| matrix.col_cost(column))
                .sum::<u64>()
        })
        .min()
}

/// Everything the public queries of a matrix can observe.
pub(crate) fn observe(matrix: &SparseBooleanMatrix) -> Vec<Vec<usize>> {
    let mut observed = vec![
        matrix.active_rows().collect::<Vec<_>>(),
        matrix.active_columns().collect::<Vec<_>>(),
    ];
    for row in 0..matrix.num_rows() {
        observed.push(matrix.row_list(row).collect());
        observed.push(vec![matrix.row_elem_count(row), usize::from(matrix.row_deleted(row))]);
    }
    for column in 0..matrix.num_columns() {
        observed.push(matrix.col_list(column).collect());
        observed.push(vec![
            matrix.col_elem_count(column),
            usize::from(matrix.col_deleted(column)),
        ]);
    }
    observed
}
