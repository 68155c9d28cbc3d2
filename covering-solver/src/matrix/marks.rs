/// A transient boolean mark per header of one dimension.
///
/// The reduction steps mark headers while they run and clear all marks before returning, so
/// outside of a reduction step every mark array is clear.
#[derive(Clone, Debug, Default)]
pub(crate) struct Marks {
    flags: Vec<bool>,
    marked: Vec<usize>,
}

impl Marks {
    pub(crate) fn new(len: usize) -> Self {
        Marks {
            flags: vec![false; len],
            marked: vec![],
        }
    }

    /// Marks `index`; returns `false` if it was already marked.
    pub(crate) fn mark(&mut self, index: usize) -> bool {
        if self.flags[index] {
            return false;
        }
        self.flags[index] = true;
        self.marked.push(index);
        true
    }

    pub(crate) fn is_marked(&self, index: usize) -> bool {
        self.flags[index]
    }

    pub(crate) fn clear(&mut self) {
        for index in self.marked.drain(..) {
            self.flags[index] = false;
        }
    }

    /// Checks every flag rather than trusting the list of marked indices.
    pub(crate) fn is_clear(&self) -> bool {
        self.marked.is_empty() && self.flags.iter().all(|&flag| !flag)
    }
}
