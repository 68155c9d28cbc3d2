use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers when either of two conditions triggers.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        self.t1.should_stop() || self.t2.should_stop()
    }

    fn branch_has_been_made(&mut self) {
        self.t1.branch_has_been_made();
        self.t2.branch_has_been_made();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::BranchBudget;
    use crate::termination::Indefinite;

    #[test]
    fn either_condition_stops_the_combination() {
        let mut combined = Combinator::new(Indefinite, BranchBudget::new(1));
        assert!(!combined.should_stop());

        combined.branch_has_been_made();

        assert!(combined.should_stop());
    }
}
