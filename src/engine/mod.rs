pub mod aggregate;
pub mod core;
pub mod errors;
pub mod grouping;
pub mod load;
pub mod schema;
pub mod state;
pub mod types;

pub use errors::*;
