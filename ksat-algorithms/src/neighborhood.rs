//! The three neighbor operators. Each receives a full assignment and
//! returns a transformed copy; the caller's original is never mutated.

use ksat_instance::{Assignment, Error, Result};
use rand::Rng;

/// Complements one uniformly chosen variable.
pub fn flip_random<R: Rng>(assignment: &Assignment, rng: &mut R) -> Result<Assignment> {
    let vars = assignment.vars();
    if vars.is_empty() {
        return Err(Error::Configuration("assignment is empty".into()));
    }
    let var = vars[rng.gen_range(0..vars.len())];
    assignment.with_flipped(var)
}

/// Exchanges the values of two distinct uniformly chosen variables. A
/// no-op on fitness unless the two prior values differed. With fewer than
/// two variables there is no pair to draw, so the copy comes back
/// unchanged.
pub fn swap_random_pair<R: Rng>(assignment: &Assignment, rng: &mut R) -> Result<Assignment> {
    let vars = assignment.vars();
    if vars.is_empty() {
        return Err(Error::Configuration("assignment is empty".into()));
    }
    if vars.len() < 2 {
        return Ok(assignment.clone());
    }
    let a = rng.gen_range(0..vars.len());
    let mut b = rng.gen_range(0..vars.len());
    while b == a {
        b = rng.gen_range(0..vars.len());
    }
    assignment.with_swapped(vars[a], vars[b])
}

/// Complements the first variable in mapping order.
pub fn flip_first(assignment: &Assignment) -> Result<Assignment> {
    let var = assignment
        .first_var()
        .ok_or_else(|| Error::Configuration("assignment is empty".into()))?;
    assignment.with_flipped(var)
}
