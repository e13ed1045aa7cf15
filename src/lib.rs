#![doc = include_str!("../README.md")]

mod error;

pub mod igp;
pub mod message;
pub mod timecode;

pub use error::{Error, Result};
pub use igp::{resolve, Igp};
pub use message::{decode, DecodedMessage, Decoder, Integrity};

mod prelude {
    pub use crate::error::{Error, Result};
}
