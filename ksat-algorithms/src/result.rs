use ksat_instance::{Assignment, ParsedFormula};
use serde::{Deserialize, Serialize};

/// Best assignment a strategy found, the fitness it evaluated for that
/// assignment, and how much of its step budget it consumed. Reaching the
/// budget is a normal best-effort outcome; callers compare `fitness`
/// against the clause count to tell whether an exact solution was found.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchResult {
    pub assignment: Assignment,
    pub fitness: usize,
    pub steps: usize,
}

impl SearchResult {
    pub fn satisfies(&self, parsed: &ParsedFormula) -> bool {
        self.fitness == parsed.target()
    }
}
