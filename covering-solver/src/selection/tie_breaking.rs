/// Whether the [`InOrderTieBreaker`] looks for the candidate with the largest or the smallest
/// value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}

/// Keeps the first candidate with the best value according to its [`Direction`].
///
/// Selectors visit the active columns in ascending order, so among columns with the same score
/// the one with the lowest index is selected.
#[derive(Debug)]
pub struct InOrderTieBreaker<Candidate, Value> {
    selected: Option<(Candidate, Value)>,
    direction: Direction,
}

impl<Candidate: Copy, Value: PartialOrd> InOrderTieBreaker<Candidate, Value> {
    pub fn new(direction: Direction) -> Self {
        InOrderTieBreaker {
            selected: None,
            direction,
        }
    }

    pub fn consider(&mut self, candidate: Candidate, value: Value) {
        let improves = match &self.selected {
            None => true,
            Some((_, selected_value)) => match self.direction {
                Direction::Maximum => value > *selected_value,
                Direction::Minimum => value < *selected_value,
            },
        };
        if improves {
            self.selected = Some((candidate, value));
        }
    }

    /// Returns the selected candidate and resets the tie-breaker so that it can be reused.
    pub fn select(&mut self) -> Option<Candidate> {
        self.selected.take().map(|(candidate, _)| candidate)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}
