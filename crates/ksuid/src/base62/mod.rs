mod error;
mod standard;

pub use error::*;
pub(crate) use standard::*;
