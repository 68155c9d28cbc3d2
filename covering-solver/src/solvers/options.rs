use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::basic_types::ConfigurationError;
use crate::lower_bounds::create_lower_bound;
use crate::lower_bounds::LowerBound;
use crate::lower_bounds::LowerBoundKind;
use crate::matrix::DominanceKind;
use crate::selection::SelectorKind;
use crate::termination::BranchBudget;
use crate::termination::Combinator;
use crate::termination::TimeBudget;

/// The family of algorithms used to find a cover.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Algorithm {
    /// Branch-and-bound search for a cover of minimum cost.
    #[default]
    Exact,
    /// Repeatedly select the column preferred by the selector, without backtracking.
    Greedy,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Exact => write!(f, "exact"),
            Algorithm::Greedy => write!(f, "greedy"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Algorithm::Exact),
            "greedy" => Ok(Algorithm::Greedy),
            _ => Err(ConfigurationError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// The options of [`solve`](crate::solve).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOptions {
    pub algorithm: Algorithm,
    /// The lower bounds used by the exact solver; with more than one the maximum is used.
    pub lower_bounds: Vec<LowerBoundKind>,
    pub selector: SelectorKind,
    /// The column dominance rule used by the reduction.
    pub dominance: DominanceKind,
    /// Requests solving independent blocks of the matrix separately. This is not supported; the
    /// flag is accepted and the matrix is solved as a whole.
    pub partition: bool,
    /// Whether the exact solver starts from the cover found by the greedy solver.
    pub warm_start: bool,
    /// The number of branches after which the exact solver stops.
    pub branch_budget: Option<u64>,
    /// The time after which the exact solver stops.
    pub time_budget: Option<Duration>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            algorithm: Algorithm::default(),
            lower_bounds: vec![LowerBoundKind::default()],
            selector: SelectorKind::default(),
            dominance: DominanceKind::default(),
            partition: false,
            warm_start: true,
            branch_budget: None,
            time_budget: None,
        }
    }
}

impl SolveOptions {
    /// Builds options from the names of an algorithm, a comma separated list of lower bounds and
    /// a selector; the remaining options keep their defaults.
    ///
    /// ```
    /// # use covering_solver::lower_bounds::LowerBoundKind;
    /// # use covering_solver::solvers::SolveOptions;
    /// let options = SolveOptions::parse("exact", "split,mis-heap", "cs").unwrap();
    /// assert_eq!(
    ///     vec![LowerBoundKind::Split, LowerBoundKind::MisHeap],
    ///     options.lower_bounds
    /// );
    /// ```
    pub fn parse(
        algorithm: &str,
        lower_bounds: &str,
        selector: &str,
    ) -> Result<SolveOptions, ConfigurationError> {
        let lower_bounds = lower_bounds
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(LowerBoundKind::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        if lower_bounds.is_empty() {
            return Err(ConfigurationError::EmptyLowerBoundList);
        }

        Ok(SolveOptions {
            algorithm: algorithm.parse()?,
            lower_bounds,
            selector: selector.parse()?,
            ..SolveOptions::default()
        })
    }

    /// Checks the options which cannot be enforced by their types.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.lower_bounds.is_empty() {
            return Err(ConfigurationError::EmptyLowerBoundList);
        }
        Ok(())
    }

    pub(crate) fn create_lower_bound(&self) -> Result<Box<dyn LowerBound>, ConfigurationError> {
        self.validate()?;
        Ok(create_lower_bound(&self.lower_bounds))
    }

    pub(crate) fn termination(&self) -> Combinator<Option<BranchBudget>, Option<TimeBudget>> {
        Combinator::new(
            self.branch_budget.map(BranchBudget::new),
            self.time_budget.map(TimeBudget::starting_now),
        )
    }
}
