//! Course catalog loading and lookup, with an interactive menu front end.

pub mod load;
pub mod query;
pub mod shell;
pub mod types;
