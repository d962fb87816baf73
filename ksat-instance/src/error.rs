use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Deterministic structural failures. Nothing here is transient, so there
/// is no retry path; exhausting a search budget is not an error at all and
/// is always reported as a value.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller-supplied parameters that cannot describe a runnable setup,
    /// e.g. a clause size larger than the variable pool, a beam width of
    /// zero, or an empty assignment.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A literal sequence that does not divide into whole clauses.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}
