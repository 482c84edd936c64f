use crate::Error;
use core::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Base62Error {
    DecodeInvalidAscii { byte: u8, index: usize },
    DecodeInvalidLen { len: usize },
}
impl fmt::Display for Base62Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecodeInvalidAscii { byte, index } => {
                write!(f, "invalid ascii byte: {byte} at index: {index}")
            }
            Self::DecodeInvalidLen { len } => write!(f, "invalid decoded length: {len}"),
        }
    }
}
impl core::error::Error for Base62Error {}
impl From<Base62Error> for Error {
    fn from(err: Base62Error) -> Self {
        Self::Base62(err)
    }
}
