//! A [`TerminationCondition`] is polled by the exact solver at every node of the search tree. Once
//! it triggers, the solver stops exploring and reports the best cover found so far, which is then
//! no longer proven to be optimal.
mod branch_budget;
mod combinator;
mod indefinite;
mod time_budget;

pub use branch_budget::BranchBudget;
pub use combinator::Combinator;
pub use indefinite::Indefinite;
pub use time_budget::TimeBudget;

/// Determines when the exact solver should give up proving optimality.
pub trait TerminationCondition {
    /// Returns `true` when the solver should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called whenever the solver branches on a column.
    fn branch_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        self.as_mut().is_some_and(|condition| condition.should_stop())
    }

    fn branch_has_been_made(&mut self) {
        if let Some(condition) = self {
            condition.branch_has_been_made()
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }

    fn branch_has_been_made(&mut self) {
        (**self).branch_has_been_made()
    }
}
