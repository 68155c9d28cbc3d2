//! # Covering Solver
//! A solver for the (weighted) minimum set covering problem: given a boolean matrix and a cost
//! for every column, find a set of columns of minimum total cost such that every row with at
//! least one element has an element in one of the chosen columns.
//!
//! The matrix is stored sparsely, with every present entry linked into a ring of its row and a
//! ring of its column. Rows and columns can be deleted and restored in constant time per element,
//! and a journal of deletions allows every change made after a
//! [checkpoint](matrix::SparseBooleanMatrix::save) to be
//! [undone](matrix::SparseBooleanMatrix::restore) exactly. On top of this the crate provides
//! * a [reduction][matrix::SparseBooleanMatrix::reduce_loop] which removes dominated rows and
//!   columns and selects essential columns,
//! * several [lower bounds][lower_bounds] on the cost of covering the remaining rows,
//! * several [column selectors][selection], and
//! * a [greedy][solvers::Greedy] and an [exact][solvers::BranchAndBound] solver.
//!
//! # Using the solver
//! A matrix is created from its number of rows, the costs of its columns and its entries as
//! `(row, column)` pairs:
//! ```rust
//! # use covering_solver::matrix::SparseBooleanMatrix;
//! # use covering_solver::solvers::solve;
//! # use covering_solver::solvers::SolveOptions;
//! // row 0 can be covered by columns 0 and 2, row 1 by columns 1 and 2, row 2 by columns 0 and 3
//! let mut matrix = SparseBooleanMatrix::with_costs(
//!     3,
//!     vec![1, 1, 1, 1],
//!     [(0, 0), (0, 2), (1, 1), (1, 2), (2, 0), (2, 3)],
//! );
//!
//! let result = solve(&mut matrix, &SolveOptions::default()).unwrap();
//!
//! assert!(result.is_optimal());
//! assert_eq!(2, result.cost());
//! assert!(matrix.verify(result.columns()));
//! ```
//!
//! The strategies can also be chosen by name, which is how front ends configure the solver:
//! ```rust
//! # use covering_solver::matrix::SparseBooleanMatrix;
//! # use covering_solver::solvers::solve;
//! # use covering_solver::solvers::SolveOptions;
//! # use covering_solver::ConfigurationError;
//! let mut matrix = SparseBooleanMatrix::new(2, 2, [(0, 0), (1, 1)]);
//!
//! let options = SolveOptions::parse("greedy", "split", "cs").unwrap();
//! let result = solve(&mut matrix, &options).unwrap();
//! assert_eq!(2, result.cost());
//!
//! assert_eq!(
//!     Err(ConfigurationError::UnknownSelector("fastest".to_owned())),
//!     SolveOptions::parse("exact", "split", "fastest")
//! );
//! ```
//!
//! ## Feature Flags
//! - `clap`: Derive `clap::ValueEnum` for the option enums.
//! - `debug-checks`: Enable expensive assertions, such as a full consistency check of the matrix
//!   after every restore. This slows the solver down considerably, so it is turned off by default.
#[doc(hidden)]
pub mod asserts;
pub mod basic_types;
pub mod containers;
pub mod lower_bounds;
pub mod matrix;
pub mod selection;
pub mod solvers;
pub mod statistics;
pub mod termination;

pub use basic_types::ConfigurationError;
pub use basic_types::Cover;
pub use basic_types::CoverResult;
pub use matrix::SparseBooleanMatrix;
pub use solvers::solve;
pub use solvers::SolveOptions;
