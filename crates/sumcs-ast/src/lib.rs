#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod declaration;
mod name;

pub use declaration::*;
pub use name::*;
