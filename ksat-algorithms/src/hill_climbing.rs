use crate::result::SearchResult;
use ksat_instance::{Assignment, Error, ParsedFormula, Result};
use log::{debug, trace};

/// Hill climbing with at most one committed flip per scan.
///
/// Within a scan the running threshold starts at the scan's base fitness.
/// A hypothetical flip replaces the tracked candidate only when it
/// strictly exceeds the threshold, raising the threshold as it does. The
/// committed flip is therefore the last strict improver the scan saw, not
/// necessarily the best one overall; ties never displace the candidate.
/// Terminates when the target fitness is reached or after `max_depth`
/// scans, returning the current assignment either way (possibly a local
/// optimum).
pub fn solve(
    parsed: &ParsedFormula,
    initial: Assignment,
    max_depth: usize,
) -> Result<SearchResult> {
    if initial.is_empty() {
        return Err(Error::Configuration("assignment is empty".into()));
    }

    let mut current = initial;
    let mut depth = 0;
    loop {
        let base = parsed.fitness(&current)?;
        if base >= parsed.target() {
            debug!(
                "hill climbing satisfied all {} clauses after {} scans",
                parsed.target(),
                depth
            );
            return Ok(SearchResult {
                assignment: current,
                fitness: base,
                steps: depth,
            });
        }
        if depth == max_depth {
            debug!(
                "hill climbing stopped at depth {} with fitness {}/{}",
                depth,
                base,
                parsed.target()
            );
            return Ok(SearchResult {
                assignment: current,
                fitness: base,
                steps: depth,
            });
        }

        let mut threshold = base;
        let mut committed = None;
        for &var in current.vars() {
            let neighbor = current.with_flipped(var)?;
            let fitness = parsed.fitness(&neighbor)?;
            if fitness > threshold {
                threshold = fitness;
                committed = Some(var);
            }
        }

        depth += 1;
        if let Some(var) = committed {
            trace!("scan {}: flip {} ({} -> {})", depth, var, base, threshold);
            current.flip(var)?;
        }
    }
}
