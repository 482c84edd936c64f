mod base62;
mod error;
mod ksuid;
mod payload;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod thread_random;
mod time;
mod timestamp;

pub use crate::base62::*;
pub use crate::error::*;
pub use crate::ksuid::*;
pub use crate::payload::*;
pub use crate::rand::*;
pub use crate::thread_random::*;
pub use crate::time::*;
pub use crate::timestamp::*;
