use crate::error::{Error, Result};
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variable identifiers are the first `num_vars` uppercase letters.
const ALPHABET_SIZE: usize = 26;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negated,
}

/// One literal occurrence: a variable identifier and its polarity.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    pub var: char,
    pub sign: Sign,
}

impl Literal {
    pub fn positive(var: char) -> Self {
        Self {
            var,
            sign: Sign::Positive,
        }
    }

    pub fn negated(var: char) -> Self {
        Self {
            var,
            sign: Sign::Negated,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negated {
            write!(f, "~")?;
        }
        write!(f, "{}", self.var)
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Params {
    pub num_vars: usize,
    pub clause_size: usize,
    pub num_clauses: usize,
}

impl Params {
    pub fn validate(&self) -> Result<()> {
        if self.num_vars == 0 || self.num_vars > ALPHABET_SIZE {
            return Err(Error::Configuration(format!(
                "num_vars must be between 1 and {}, got {}",
                ALPHABET_SIZE, self.num_vars
            )));
        }
        if self.clause_size == 0 {
            return Err(Error::Configuration(
                "clause size must be at least 1".into(),
            ));
        }
        if self.clause_size > self.num_vars {
            // A clause draws without replacement, so this would exhaust
            // the variable pool mid-clause.
            return Err(Error::Configuration(format!(
                "clause size {} exceeds the {}-variable pool",
                self.clause_size, self.num_vars
            )));
        }
        if self.num_clauses == 0 {
            return Err(Error::Configuration(
                "num_clauses must be at least 1".into(),
            ));
        }
        Ok(())
    }

    fn alphabet(&self) -> Vec<char> {
        (0..self.num_vars).map(|i| (b'A' + i as u8) as char).collect()
    }
}

/// A random k-SAT formula as a flat literal sequence. Clause membership is
/// positional: occurrences `[c * k, (c + 1) * k)` form clause `c`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    clause_size: usize,
    literals: Vec<Literal>,
}

impl Formula {
    /// Generates a random instance from a 32-byte seed.
    ///
    /// Each literal draws its variable uniformly from a pool that shrinks
    /// over the course of a clause (no variable repeats within a clause)
    /// and refills at every clause boundary (reuse across clauses is
    /// intentional). Polarity is an unbiased coin flip.
    pub fn generate(seed: &[u8; 32], params: &Params) -> Result<Self> {
        params.validate()?;
        let mut rng = SmallRng::from_seed(StdRng::from_seed(seed.clone()).gen());

        let alphabet = params.alphabet();
        let mut pool = alphabet.clone();
        let total = params.num_clauses * params.clause_size;
        let mut literals = Vec::with_capacity(total);

        for i in 0..total {
            let var = pool.swap_remove(rng.gen_range(0..pool.len()));
            let sign = if rng.gen::<bool>() {
                Sign::Negated
            } else {
                Sign::Positive
            };
            literals.push(Literal { var, sign });

            if (i + 1) % params.clause_size == 0 {
                pool.clear();
                pool.extend_from_slice(&alphabet);
            }
        }

        Ok(Self {
            clause_size: params.clause_size,
            literals,
        })
    }

    /// Builds a formula from an explicit literal sequence, rejecting any
    /// sequence that is not a positive multiple of `clause_size` (no
    /// trailing partial clause can exist).
    pub fn from_literals(clause_size: usize, literals: Vec<Literal>) -> Result<Self> {
        if clause_size == 0 {
            return Err(Error::Configuration(
                "clause size must be at least 1".into(),
            ));
        }
        if literals.is_empty() || literals.len() % clause_size != 0 {
            return Err(Error::MalformedInput(format!(
                "literal count {} is not a positive multiple of clause size {}",
                literals.len(),
                clause_size
            )));
        }
        Ok(Self {
            clause_size,
            literals,
        })
    }

    pub fn clause_size(&self) -> usize {
        self.clause_size
    }

    pub fn num_clauses(&self) -> usize {
        self.literals.len() / self.clause_size
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn clauses(&self) -> impl Iterator<Item = &[Literal]> {
        self.literals.chunks_exact(self.clause_size)
    }
}

/// Renders `((A or ~B or C) and (~D or E or F))`. Print surface only; the
/// parser consumes the structured literal sequence, never this text.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "((")?;
        for (c, clause) in self.clauses().enumerate() {
            if c > 0 {
                write!(f, ") and (")?;
            }
            for (i, literal) in clause.iter().enumerate() {
                if i > 0 {
                    write!(f, " or ")?;
                }
                write!(f, "{}", literal)?;
            }
        }
        write!(f, "))")
    }
}
