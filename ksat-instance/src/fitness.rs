use crate::assignment::Assignment;
use crate::error::{Error, Result};
use crate::formula::Sign;

/// Counts the clauses satisfied by `assignment`.
///
/// `variables[i]` and `signs[i]` describe the literal at position `i`;
/// position `i` belongs to clause `i / clause_size`. Each clause ORs the
/// polarity-adjusted values of its literals and contributes 1 when that OR
/// is true. Trailing positions that do not complete a clause are
/// discarded; `Formula` never produces such a sequence, but raw slices
/// from other sources may.
pub fn evaluate(
    assignment: &Assignment,
    clause_size: usize,
    variables: &[char],
    signs: &[Sign],
) -> Result<usize> {
    if clause_size == 0 {
        return Err(Error::Configuration(
            "clause size must be at least 1".into(),
        ));
    }
    if assignment.is_empty() {
        return Err(Error::Configuration("assignment is empty".into()));
    }
    if variables.len() != signs.len() {
        return Err(Error::MalformedInput(format!(
            "{} variables but {} signs",
            variables.len(),
            signs.len()
        )));
    }

    let mut score = 0;
    let mut clause_or = false;
    for (i, (&var, &sign)) in variables.iter().zip(signs.iter()).enumerate() {
        let value = assignment.get(var).ok_or_else(|| {
            Error::Configuration(format!("assignment has no value for variable {}", var))
        })?;
        clause_or |= match sign {
            Sign::Positive => value,
            Sign::Negated => !value,
        };
        if (i + 1) % clause_size == 0 {
            if clause_or {
                score += 1;
            }
            clause_or = false;
        }
    }
    Ok(score)
}
