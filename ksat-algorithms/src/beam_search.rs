use crate::result::SearchResult;
use ksat_instance::{Assignment, Error, ParsedFormula, Result};
use log::debug;

/// One frontier entry: a candidate assignment and its evaluated fitness.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub assignment: Assignment,
    pub fitness: usize,
}

/// Fitness-ordered frontier bounded by the beam width.
///
/// Entries are kept sorted by fitness descending, so the size never
/// exceeds the capacity at any point. At capacity an incoming candidate
/// displaces the current minimum only on a strict improvement; otherwise
/// the minimum stays and the candidate is discarded.
#[derive(Debug)]
pub struct Frontier {
    capacity: usize,
    entries: Vec<Candidate>,
}

impl Frontier {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(Error::Configuration(
                "beam width must be at least 1".into(),
            ));
        }
        Ok(Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns the highest-fitness candidate.
    pub fn pop_best(&mut self) -> Option<Candidate> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Admits `candidate` under the replace-or-discard policy, reporting
    /// whether it was kept. Under capacity the insert is unconditional.
    pub fn offer(&mut self, candidate: Candidate) -> bool {
        if self.entries.len() < self.capacity {
            self.insert(candidate);
            return true;
        }
        match self.entries.last() {
            Some(minimum) if candidate.fitness > minimum.fitness => {
                self.entries.pop();
                self.insert(candidate);
                true
            }
            _ => false,
        }
    }

    fn insert(&mut self, candidate: Candidate) {
        let at = self
            .entries
            .partition_point(|c| c.fitness >= candidate.fitness);
        self.entries.insert(at, candidate);
    }
}

/// Beam search over the exhaustive single-flip neighborhood.
///
/// Pops the best frontier entry, returns it on target fitness, otherwise
/// offers every single-flip neighbor to the frontier. Every neighbor
/// evaluation costs one unit of `max_steps`; the budget cuts the search
/// off even mid-expansion. With no exact solution in budget the last
/// popped state comes back as a best-effort result. A beam width of 1
/// degenerates to greedy single-path climbing over single-flip neighbors.
pub fn solve(
    parsed: &ParsedFormula,
    initial: Assignment,
    beam_width: usize,
    max_steps: usize,
) -> Result<SearchResult> {
    if initial.is_empty() {
        return Err(Error::Configuration("assignment is empty".into()));
    }

    let mut frontier = Frontier::new(beam_width)?;
    let fitness = parsed.fitness(&initial)?;
    let mut best = Candidate {
        assignment: initial.clone(),
        fitness,
    };
    frontier.offer(Candidate {
        assignment: initial,
        fitness,
    });

    let mut steps = 0;
    loop {
        if steps >= max_steps {
            break;
        }
        let Some(candidate) = frontier.pop_best() else {
            break;
        };
        best = candidate;
        if best.fitness >= parsed.target() {
            debug!(
                "beam search satisfied all {} clauses after {} evaluations",
                parsed.target(),
                steps
            );
            return Ok(SearchResult {
                assignment: best.assignment,
                fitness: best.fitness,
                steps,
            });
        }

        for &var in best.assignment.vars() {
            if steps >= max_steps {
                break;
            }
            let assignment = best.assignment.with_flipped(var)?;
            let fitness = parsed.fitness(&assignment)?;
            frontier.offer(Candidate { assignment, fitness });
            steps += 1;
        }
    }

    debug!(
        "beam search exhausted {} steps with fitness {}/{}",
        steps,
        best.fitness,
        parsed.target()
    );
    Ok(SearchResult {
        assignment: best.assignment,
        fitness: best.fitness,
        steps,
    })
}
