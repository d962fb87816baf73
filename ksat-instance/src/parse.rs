use crate::assignment::Assignment;
use crate::error::Result;
use crate::fitness;
use crate::formula::{Formula, Sign};
use serde::{Deserialize, Serialize};

/// Positional view of a formula: the variable identifier and sign of every
/// literal occurrence in formula order, plus the deduplicated identifier
/// set. This is the shape the fitness evaluator and the solvers consume.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ParsedFormula {
    clause_size: usize,
    variables: Vec<char>,
    signs: Vec<Sign>,
    distinct: Vec<char>,
}

impl ParsedFormula {
    pub fn new(formula: &Formula) -> Self {
        let variables: Vec<char> = formula.literals().iter().map(|l| l.var).collect();
        let signs: Vec<Sign> = formula.literals().iter().map(|l| l.sign).collect();
        let mut distinct = variables.clone();
        distinct.sort_unstable();
        distinct.dedup();
        Self {
            clause_size: formula.clause_size(),
            variables,
            signs,
            distinct,
        }
    }

    pub fn clause_size(&self) -> usize {
        self.clause_size
    }

    /// Identifier of every literal occurrence, parallel to `signs`.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Sign of every literal occurrence, parallel to `variables`.
    pub fn signs(&self) -> &[Sign] {
        &self.signs
    }

    /// Sorted distinct identifiers appearing anywhere in the formula.
    pub fn distinct(&self) -> &[char] {
        &self.distinct
    }

    pub fn num_clauses(&self) -> usize {
        self.variables.len() / self.clause_size
    }

    /// Satisfaction target: every clause satisfied. The original behavior
    /// compared against the literal-occurrence count, which is unreachable
    /// for clause sizes above 1; the clause count is used instead.
    pub fn target(&self) -> usize {
        self.num_clauses()
    }

    pub fn fitness(&self, assignment: &Assignment) -> Result<usize> {
        fitness::evaluate(assignment, self.clause_size, &self.variables, &self.signs)
    }
}
