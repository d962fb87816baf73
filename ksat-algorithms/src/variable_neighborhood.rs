use crate::neighborhood::{flip_first, flip_random, swap_random_pair};
use crate::result::SearchResult;
use ksat_instance::{Assignment, Error, ParsedFormula, Result};
use log::{debug, trace};
use rand::Rng;

/// Variable neighborhood search over the three operator neighborhoods.
///
/// Each step produces one neighbor per operator (random flip, random pair
/// swap, first-variable flip), evaluates all three, and adopts the best
/// only on a strict improvement over the current fitness. When several
/// neighbors share the best fitness the flip neighbor wins, then the swap
/// neighbor, then the first-variable neighbor. Terminates on target
/// fitness or an exhausted step budget.
pub fn solve<R: Rng>(
    parsed: &ParsedFormula,
    initial: Assignment,
    max_steps: usize,
    rng: &mut R,
) -> Result<SearchResult> {
    if initial.is_empty() {
        return Err(Error::Configuration("assignment is empty".into()));
    }

    let mut current = initial;
    let mut steps = 0;
    while steps < max_steps {
        let fitness = parsed.fitness(&current)?;
        if fitness >= parsed.target() {
            debug!(
                "vns satisfied all {} clauses after {} steps",
                parsed.target(),
                steps
            );
            return Ok(SearchResult {
                assignment: current,
                fitness,
                steps,
            });
        }

        let flip = flip_random(&current, rng)?;
        let swap = swap_random_pair(&current, rng)?;
        let first = flip_first(&current)?;
        let flip_fitness = parsed.fitness(&flip)?;
        let swap_fitness = parsed.fitness(&swap)?;
        let first_fitness = parsed.fitness(&first)?;

        let best = flip_fitness.max(swap_fitness).max(first_fitness);
        if best > fitness {
            trace!("step {}: {} -> {}", steps, fitness, best);
            if best == flip_fitness {
                current = flip;
            } else if best == swap_fitness {
                current = swap;
            } else {
                current = first;
            }
        }
        steps += 1;
    }

    let fitness = parsed.fitness(&current)?;
    debug!(
        "vns exhausted {} steps with fitness {}/{}",
        steps,
        fitness,
        parsed.target()
    );
    Ok(SearchResult {
        assignment: current,
        fitness,
        steps,
    })
}
