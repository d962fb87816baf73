pub mod beam_search;
pub mod hill_climbing;
pub mod neighborhood;
pub mod result;
pub mod variable_neighborhood;

pub use result::SearchResult;
