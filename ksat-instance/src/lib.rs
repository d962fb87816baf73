pub mod assignment;
pub mod error;
pub mod fitness;
pub mod formula;
pub mod parse;

pub use assignment::Assignment;
pub use error::{Error, Result};
pub use fitness::evaluate;
pub use formula::{Formula, Literal, Params, Sign};
pub use parse::ParsedFormula;
