use crate::error::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ordered mapping from variable identifier to a boolean value.
///
/// Keys are held sorted; that order is the "mapping order" the solvers
/// rely on when they scan variables or speak of the first variable.
/// Neighbor moves always copy first, so no two search states alias.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    vars: Vec<char>,
    values: Vec<bool>,
}

impl Assignment {
    /// Fair-coin value for every variable in `vars`.
    pub fn random<R: Rng>(vars: &[char], rng: &mut R) -> Self {
        let mut sorted = vars.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let values = (0..sorted.len()).map(|_| rng.gen::<bool>()).collect();
        Self {
            vars: sorted,
            values,
        }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, bool)>) -> Self {
        let mut pairs: Vec<(char, bool)> = pairs.into_iter().collect();
        pairs.sort_unstable_by_key(|&(var, _)| var);
        pairs.dedup_by_key(|&mut (var, _)| var);
        let (vars, values) = pairs.into_iter().unzip();
        Self { vars, values }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables in mapping order.
    pub fn vars(&self) -> &[char] {
        &self.vars
    }

    pub fn first_var(&self) -> Option<char> {
        self.vars.first().copied()
    }

    pub fn get(&self, var: char) -> Option<bool> {
        self.position(var).map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.vars.iter().copied().zip(self.values.iter().copied())
    }

    /// Complements `var` in place.
    pub fn flip(&mut self, var: char) -> Result<()> {
        let i = self.require(var)?;
        self.values[i] = !self.values[i];
        Ok(())
    }

    /// Complements `var` on a copy, leaving `self` untouched.
    pub fn with_flipped(&self, var: char) -> Result<Assignment> {
        let mut copy = self.clone();
        copy.flip(var)?;
        Ok(copy)
    }

    /// Exchanges the values of `a` and `b` in place.
    pub fn swap(&mut self, a: char, b: char) -> Result<()> {
        let i = self.require(a)?;
        let j = self.require(b)?;
        self.values.swap(i, j);
        Ok(())
    }

    /// Exchanges the values of `a` and `b` on a copy.
    pub fn with_swapped(&self, a: char, b: char) -> Result<Assignment> {
        let mut copy = self.clone();
        copy.swap(a, b)?;
        Ok(copy)
    }

    fn position(&self, var: char) -> Option<usize> {
        self.vars.binary_search(&var).ok()
    }

    fn require(&self, var: char) -> Result<usize> {
        self.position(var).ok_or_else(|| {
            Error::Configuration(format!("variable {} is not part of the assignment", var))
        })
    }
}
