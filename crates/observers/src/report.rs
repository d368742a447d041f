use std::fmt;

use hoelder_solvers::optimization::global_search::Solution;

/// Statistics block of a finished global search.
///
/// Lists the number of calls and the final Hölder estimate of every function
/// slot, and notes when no feasible point was found.
///
/// ```text
/// -------------------- global search statistics --------------------
/// calls of constraint 0: 412
/// calls of objective: 230
/// hölder estimate of constraint 0: 1.0008
/// hölder estimate of objective: 2.9971
/// ------------------------------------------------------------------
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    solution: &'a Solution,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(solution: &'a Solution) -> Self {
        Self { solution }
    }
}

const HEADER: &str = " global search statistics ";
const RULE: usize = 20;

/// Name of a function slot; the objective comes last.
fn slot_name(slot: usize, constraint_count: usize) -> String {
    if slot < constraint_count {
        format!("constraint {slot}")
    } else {
        "objective".to_string()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = self.solution;
        let m = solution.constraint_count();

        writeln!(f, "{rule}{HEADER}{rule}", rule = "-".repeat(RULE))?;
        for (slot, calls) in solution.evaluations.iter().enumerate() {
            writeln!(f, "calls of {}: {calls}", slot_name(slot, m))?;
        }
        for (slot, estimate) in solution.estimates.iter().enumerate() {
            writeln!(f, "hölder estimate of {}: {estimate}", slot_name(slot, m))?;
        }
        if !solution.is_feasible() {
            writeln!(f, "feasible point not found")?;
        }
        write!(f, "{}", "-".repeat(2 * RULE + HEADER.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hoelder_core::FnProblem;
    use hoelder_solvers::optimization::global_search::{Bounds, Config, minimize_unobserved};

    fn solve(problem: &FnProblem<'_>) -> Solution {
        let bounds = Bounds::new(vec![0.0], vec![1.0]).unwrap();
        let config = Config::new(30, 1e-9).unwrap();
        minimize_unobserved(problem, &bounds, &config).expect("should finish")
    }

    #[test]
    fn lists_every_slot() {
        let problem = FnProblem::new(|x: &[f64]| x[0]).with_constraint(|x: &[f64]| 0.4 - x[0]);
        let solution = solve(&problem);

        let report = Report::new(&solution).to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[1],
            format!("calls of constraint 0: {}", solution.evaluations[0])
        );
        assert_eq!(
            lines[2],
            format!("calls of objective: {}", solution.evaluations[1])
        );
        assert!(lines[3].starts_with("hölder estimate of constraint 0: "));
        assert!(lines[4].starts_with("hölder estimate of objective: "));
        assert_eq!(lines[0].chars().count(), lines[5].chars().count());
        assert!(!report.contains("feasible point not found"));
    }

    #[test]
    fn notes_missing_feasible_point() {
        let problem = FnProblem::new(|x: &[f64]| x[0]).with_constraint(|_: &[f64]| 1.0);
        let solution = solve(&problem);

        let report = Report::new(&solution).to_string();

        assert!(report.contains("calls of objective: 0"));
        assert!(report.contains("feasible point not found"));
    }
}
