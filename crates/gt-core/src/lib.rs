pub mod error;
pub mod types;

pub use error::GtError;
pub use types::*;
