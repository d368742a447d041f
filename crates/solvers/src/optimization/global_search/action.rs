/// Actions an observer can take during global search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best solution found so far.
    ///
    /// If a problem function fails before any trial succeeded there is no
    /// solution to return and the solver reports the failure instead.
    StopEarly,
}
